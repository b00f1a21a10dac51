use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Humidity assumed when an observation does not carry one
pub const DEFAULT_HUMIDITY: i32 = 50;

/// Location label for observations entered by hand
pub const MANUAL_LOCATION: &str = "manual";

/// Normalized sky condition of a weather observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Overcast,
    Rainy,
    Snowy,
    Foggy,
    Windy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Overcast => "overcast",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Foggy => "foggy",
            WeatherCondition::Windy => "windy",
        }
    }
}

impl Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunny" => Ok(WeatherCondition::Sunny),
            "cloudy" => Ok(WeatherCondition::Cloudy),
            "overcast" => Ok(WeatherCondition::Overcast),
            "rainy" => Ok(WeatherCondition::Rainy),
            "snowy" => Ok(WeatherCondition::Snowy),
            "foggy" => Ok(WeatherCondition::Foggy),
            "windy" => Ok(WeatherCondition::Windy),
            other => Err(format!("unknown weather condition: {}", other)),
        }
    }
}

/// A weather observation, already normalized by whoever fetched it
///
/// The recommendation engine only reads it; a new observation is supplied on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub temperature_celsius: i32,
    pub condition: WeatherCondition,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_humidity")]
    pub humidity: i32,
    #[serde(default = "Utc::now")]
    pub observed_at: DateTime<Utc>,
}

fn default_location() -> String {
    MANUAL_LOCATION.to_string()
}

fn default_humidity() -> i32 {
    DEFAULT_HUMIDITY
}

impl WeatherObservation {
    /// Builds an observation the user typed in instead of one fetched from a weather source
    pub fn manual(
        temperature_celsius: i32,
        condition: WeatherCondition,
        location: Option<String>,
    ) -> Self {
        Self {
            temperature_celsius,
            condition,
            location: location.unwrap_or_else(default_location),
            humidity: DEFAULT_HUMIDITY,
            observed_at: Utc::now(),
        }
    }
}
