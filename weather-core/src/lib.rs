//! Core library behind the portfolio weather widget.
//!
//! This crate defines:
//! - The weather lookup service (bounded upstream call, fixed fallback)
//! - WMO code classification into widget conditions and icons
//! - The Open-Meteo provider and the provider abstraction
//! - Configuration and optional caller-side caching
//!
//! It is used by `weather-cli`, but can also be embedded in a web handler.

pub mod cache;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;

pub use cache::CachedLookup;
pub use classify::classify;
pub use config::Config;
pub use error::{FailureKind, LookupError, TransportError};
pub use model::{Condition, CurrentConditions, Icon, WeatherReading};
pub use provider::{OpenMeteoProvider, WeatherProvider};
pub use service::WeatherLookupService;
