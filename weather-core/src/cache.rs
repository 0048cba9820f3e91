//! Caller-side memoization for readings.
//!
//! The lookup service itself is stateless; a page that re-renders often can
//! wrap it here to reuse a reading for a while instead of calling upstream on
//! every render.

use std::time::Duration;
use tokio::{sync::Mutex, time::Instant};
use tracing::debug;

use crate::{model::WeatherReading, service::WeatherLookupService};

#[derive(Debug)]
struct Entry {
    fetched_at: Instant,
    reading: WeatherReading,
}

#[derive(Debug)]
pub struct CachedLookup {
    service: WeatherLookupService,
    ttl: Duration,
    entry: Mutex<Option<Entry>>,
}

impl CachedLookup {
    pub fn new(service: WeatherLookupService, ttl: Duration) -> Self {
        Self {
            service,
            ttl,
            entry: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached reading if it is younger than the TTL, otherwise a fresh one.
    ///
    /// Fallback readings are cached like any other; callers waiting on the
    /// same refresh share its result.
    pub async fn get_current(&self) -> WeatherReading {
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            let age = cached.fetched_at.elapsed();
            if age < self.ttl {
                debug!(age_secs = age.as_secs(), "serving cached weather reading");
                return cached.reading.clone();
            }
        }

        let reading = self.service.get_current().await;
        *entry = Some(Entry {
            fetched_at: Instant::now(),
            reading: reading.clone(),
        });
        reading
    }

    pub async fn invalidate(&self) {
        *self.entry.lock().await = None;
    }
}
