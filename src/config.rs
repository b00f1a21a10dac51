use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// PostgreSQL connection URL; recipes are served from memory when unset
    #[serde(default)]
    pub database_url: Option<String>,

    /// Redis connection URL; candidate pools are not cached when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    /// How long a cached candidate pool stays valid, in seconds
    #[serde(default = "default_candidate_cache_ttl")]
    pub candidate_cache_ttl: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Daily budget used when a request does not name one
    #[serde(default = "default_budget")]
    pub default_budget: f64,

    /// Fixed seed for the per-request random generators; entropy when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// Load the built-in sample recipes into whichever recipe store is in use
    #[serde(default = "default_seed_sample_recipes")]
    pub seed_sample_recipes: bool,
}

fn default_candidate_cache_ttl() -> u64 {
    3600
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_budget() -> f64 {
    50.0
}

fn default_seed_sample_recipes() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(self.default_budget.is_finite() && self.default_budget > 0.0) {
            anyhow::bail!(
                "DEFAULT_BUDGET must be a positive amount, got {}",
                self.default_budget
            );
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
