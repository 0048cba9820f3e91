//! WMO weather interpretation codes, collapsed into the handful of
//! conditions the widget knows how to draw.
//!
//! See <https://open-meteo.com/en/docs#weathervariables>.

use crate::model::{Condition, Icon};

/// Map a WMO code to the `(condition, icon)` pair shown on the page.
///
/// Codes outside the known ranges read as cloudy.
pub fn classify(code: i64) -> (Condition, Icon) {
    match code {
        0 => (Condition::Clear, Icon::Sun),
        1..=3 => (Condition::PartlyCloudy, Icon::Cloud),
        45..=48 => (Condition::Foggy, Icon::Cloud),
        51..=67 => (Condition::Rainy, Icon::CloudRain),
        71..=77 => (Condition::Snowy, Icon::CloudRain),
        80..=82 => (Condition::RainShowers, Icon::CloudRain),
        85..=86 => (Condition::SnowShowers, Icon::CloudRain),
        95..=99 => (Condition::Thunderstorm, Icon::CloudRain),
        _ => (Condition::Cloudy, Icon::Cloud),
    }
}

/// Classify a code as it arrives on the wire. Upstream sends plain JSON
/// numbers, so the bands are checked on the raw value: single codes need an
/// exact match, ranges accept anything between their bounds.
pub fn classify_raw(code: f64) -> (Condition, Icon) {
    if code == 0.0 {
        (Condition::Clear, Icon::Sun)
    } else if code == 1.0 || code == 2.0 || code == 3.0 {
        (Condition::PartlyCloudy, Icon::Cloud)
    } else if (45.0..=48.0).contains(&code) {
        (Condition::Foggy, Icon::Cloud)
    } else if (51.0..=67.0).contains(&code) {
        (Condition::Rainy, Icon::CloudRain)
    } else if (71.0..=77.0).contains(&code) {
        (Condition::Snowy, Icon::CloudRain)
    } else if (80.0..=82.0).contains(&code) {
        (Condition::RainShowers, Icon::CloudRain)
    } else if (85.0..=86.0).contains(&code) {
        (Condition::SnowShowers, Icon::CloudRain)
    } else if code == 95.0 || (96.0..=99.0).contains(&code) {
        (Condition::Thunderstorm, Icon::CloudRain)
    } else {
        (Condition::Cloudy, Icon::Cloud)
    }
}
