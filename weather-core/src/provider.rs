use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::LookupError, model::CurrentConditions};

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

/// Upstream source of current conditions for one fixed place.
///
/// Implementations report transport and validation problems as errors; the
/// lookup service decides what the caller sees.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self) -> Result<CurrentConditions, LookupError>;
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
