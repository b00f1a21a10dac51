/// Read-through caching over [`Cache`](super::Cache).
///
/// Looks `$key` up first. On a hit the cached value is returned. On a miss the block is
/// awaited, its value queued for a background write with `$ttl` seconds to live, and returned.
/// A failing cache read is logged and treated as a miss, so an unreachable Redis only costs
/// the lookup. Errors from the block itself propagate with `?`.
///
/// # Example
/// ```rust,ignore
/// let recipes: Vec<Recipe> = cached!(self.cache, key, self.ttl, async {
///     self.inner.fetch_candidates(meal_slot, seasons).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        let hit = match $cache.get_from_cache(&key).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache read failed, falling through");
                None
            }
        };

        match hit {
            Some(cached) => {
                tracing::debug!(key = %key, "Cache hit");
                Ok(cached)
            }
            None => match $block.await {
                Ok(value) => {
                    $cache.set_in_background(&key, &value, $ttl);
                    Ok(value)
                }
                Err(e) => Err(e),
            },
        }
    }};
}
