use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    classify::classify_raw,
    config::Config,
    error::{LookupError, TransportError},
    model::{CurrentConditions, WeatherReading},
    provider::{OpenMeteoProvider, WeatherProvider},
};

/// Current weather for one configured place, with a hard time budget and a
/// fixed fallback instead of errors.
#[derive(Debug)]
pub struct WeatherLookupService {
    provider: Box<dyn WeatherProvider>,
    location: String,
    timeout: Duration,
}

impl WeatherLookupService {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        location: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            location: location.into(),
            timeout,
        }
    }

    /// Service backed by Open-Meteo for the configured location.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(OpenMeteoProvider::from_config(config)),
            config.location.name.clone(),
            config.timeout(),
        )
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Always returns a displayable reading. Upstream failures are logged and
    /// replaced by [`WeatherReading::fallback`].
    pub async fn get_current(&self) -> WeatherReading {
        match self.try_current().await {
            Ok(reading) => reading,
            Err(err) => {
                warn!(
                    kind = %err.kind().as_str(),
                    location = %self.location,
                    error = %err,
                    "weather lookup failed, serving fallback reading"
                );
                WeatherReading::fallback(self.location.clone(), Utc::now())
            }
        }
    }

    /// The success path alone: one bounded upstream call, then normalization.
    pub async fn try_current(&self) -> Result<WeatherReading, LookupError> {
        let current = tokio::time::timeout(self.timeout, self.provider.current())
            .await
            .map_err(|_| TransportError::Timeout(self.timeout))??;

        debug!(
            temperature = current.temperature_c,
            temperature_unit = %current.temperature_unit,
            weather_code = current.weather_code,
            wind_speed = current.wind_speed_kph,
            wind_speed_unit = %current.wind_speed_unit,
            "weather lookup succeeded"
        );

        Ok(self.compose(&current))
    }

    fn compose(&self, current: &CurrentConditions) -> WeatherReading {
        let (condition, icon) = classify_raw(current.weather_code);

        WeatherReading {
            temperature: round_half_up(current.temperature_c),
            condition,
            icon,
            wind_speed: round_half_up(current.wind_speed_kph),
            location: self.location.clone(),
            last_updated: Utc::now(),
        }
    }
}

/// Nearest integer, halves rounding towards positive infinity (-2.5 -> -2).
fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}
