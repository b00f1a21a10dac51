use chrono::{Datelike, Local, NaiveDate};

use crate::models::Season;

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Season for the current local month
pub fn current_season() -> Season {
    season_on(today())
}

pub fn season_on(date: NaiveDate) -> Season {
    Season::for_month(date.month())
}

/// Formats a menu date as `YYYY-M-D` (no zero padding)
pub fn menu_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Seasons whose recipes may be served in `season`: the season itself plus all-year recipes
pub fn acceptable_seasons(season: Season) -> Vec<Season> {
    if season == Season::AllYear {
        vec![Season::AllYear]
    } else {
        vec![season, Season::AllYear]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(menu_date(date), "2024-3-7");

        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(menu_date(date), "2024-12-25");
    }

    #[test]
    fn test_season_on_boundaries() {
        let on = |m, d| season_on(NaiveDate::from_ymd_opt(2025, m, d).unwrap());
        assert_eq!(on(2, 28), Season::Winter);
        assert_eq!(on(3, 1), Season::Spring);
        assert_eq!(on(8, 31), Season::Summer);
        assert_eq!(on(9, 1), Season::Autumn);
        assert_eq!(on(12, 1), Season::Winter);
    }

    #[test]
    fn test_acceptable_seasons_include_all_year() {
        assert_eq!(
            acceptable_seasons(Season::Summer),
            vec![Season::Summer, Season::AllYear]
        );
        assert_eq!(acceptable_seasons(Season::AllYear), vec![Season::AllYear]);
    }

    #[test]
    fn test_current_season_matches_today() {
        assert_eq!(current_season(), Season::for_month(today().month()));
    }
}
