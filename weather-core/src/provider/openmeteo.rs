use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};
use serde::Deserialize;

use crate::{
    config::{Config, LocationConfig},
    error::{LookupError, TransportError},
    model::CurrentConditions,
    provider::truncate_body,
};

use super::WeatherProvider;

const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m";

/// Current conditions from the Open-Meteo forecast API. No API key needed.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    endpoint: String,
    user_agent: String,
    location: LocationConfig,
}

impl OpenMeteoProvider {
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: impl Into<String>,
        location: LocationConfig,
    ) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
            location,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.upstream.endpoint.clone(),
            config.upstream.user_agent.clone(),
            config.location.clone(),
        )
    }

    fn query(&self) -> [(&'static str, String); 4] {
        [
            ("latitude", self.location.latitude.to_string()),
            ("longitude", self.location.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("timezone", self.location.timezone.clone()),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    weather_code: f64,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct OmCurrentUnits {
    temperature_2m: String,
    wind_speed_10m: String,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current: OmCurrent,
    current_units: OmCurrentUnits,
}

impl From<OmResponse> for CurrentConditions {
    fn from(parsed: OmResponse) -> Self {
        Self {
            temperature_c: parsed.current.temperature_2m,
            weather_code: parsed.current.weather_code,
            wind_speed_kph: parsed.current.wind_speed_10m,
            temperature_unit: parsed.current_units.temperature_2m,
            wind_speed_unit: parsed.current_units.wind_speed_10m,
        }
    }
}

/// Validate an Open-Meteo body against the fields the widget needs.
pub fn parse_current(body: &str) -> Result<CurrentConditions, LookupError> {
    let parsed: OmResponse = serde_json::from_str(body)?;
    Ok(parsed.into())
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current(&self) -> Result<CurrentConditions, LookupError> {
        let res = self
            .http
            .get(&self.endpoint)
            .header(USER_AGENT, &self.user_agent)
            .query(&self.query())
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = res.status();
        let body = res.text().await.map_err(TransportError::from)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status,
                body: truncate_body(&body),
            }
            .into());
        }

        parse_current(&body)
    }
}
