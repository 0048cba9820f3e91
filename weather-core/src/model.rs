use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Human-facing weather condition shown by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Foggy,
    Rainy,
    Snowy,
    #[serde(rename = "Rain Showers")]
    RainShowers,
    #[serde(rename = "Snow Showers")]
    SnowShowers,
    Thunderstorm,
    Cloudy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Foggy => "Foggy",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
            Condition::RainShowers => "Rain Showers",
            Condition::SnowShowers => "Snow Showers",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Cloudy => "Cloudy",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon the widget renders next to the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Sun,
    Cloud,
    CloudRain,
    Wind,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Sun => "sun",
            Icon::Cloud => "cloud",
            Icon::CloudRain => "cloud-rain",
            Icon::Wind => "wind",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated observation as reported by an upstream provider, before
/// classification and rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub weather_code: f64,
    pub wind_speed_kph: f64,
    pub temperature_unit: String,
    pub wind_speed_unit: String,
}

/// Normalized reading handed to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// Degrees Celsius, rounded.
    pub temperature: i32,
    pub condition: Condition,
    pub icon: Icon,
    /// km/h, rounded.
    pub wind_speed: i32,
    pub location: String,
    /// When this reading was produced, not when upstream observed it.
    pub last_updated: DateTime<Utc>,
}

impl WeatherReading {
    pub const FALLBACK_TEMPERATURE: i32 = 28;
    pub const FALLBACK_WIND_SPEED: i32 = 10;

    /// The static "clear, mild" reading served whenever upstream is unusable.
    pub fn fallback(location: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            temperature: Self::FALLBACK_TEMPERATURE,
            condition: Condition::PartlyCloudy,
            icon: Icon::Sun,
            wind_speed: Self::FALLBACK_WIND_SPEED,
            location: location.into(),
            last_updated: now,
        }
    }
}
