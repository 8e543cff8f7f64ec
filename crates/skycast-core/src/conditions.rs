//! Provider condition normalization.
//!
//! Weather providers describe sky conditions with their own vocabulary --
//! WeatherAPI uses numeric condition codes plus a free-text description.
//! The rest of the app only understands the closed [`CanonicalCondition`]
//! set, so everything coming off the wire is funneled through [`normalize`]
//! (or [`normalize_text`] for text-only payloads) exactly once.
//!
//! Both functions are total: an unknown code or description degrades to
//! `Cloudy` instead of failing.

use serde::{Deserialize, Serialize};

/// Canonical sky condition -- the only condition vocabulary the app stores
/// or displays. Produced exclusively by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanonicalCondition {
    Sunny,
    Rainy,
    Cloudy,
    Snow,
    Wind,
    Thunderstorms,
    Lightning,
    Fog,
    ExtremeHeat,
}

impl CanonicalCondition {
    /// All nine canonical values, in declaration order.
    pub const ALL: [CanonicalCondition; 9] = [
        CanonicalCondition::Sunny,
        CanonicalCondition::Rainy,
        CanonicalCondition::Cloudy,
        CanonicalCondition::Snow,
        CanonicalCondition::Wind,
        CanonicalCondition::Thunderstorms,
        CanonicalCondition::Lightning,
        CanonicalCondition::Fog,
        CanonicalCondition::ExtremeHeat,
    ];

    /// Stable kebab-case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalCondition::Sunny => "sunny",
            CanonicalCondition::Rainy => "rainy",
            CanonicalCondition::Cloudy => "cloudy",
            CanonicalCondition::Snow => "snow",
            CanonicalCondition::Wind => "wind",
            CanonicalCondition::Thunderstorms => "thunderstorms",
            CanonicalCondition::Lightning => "lightning",
            CanonicalCondition::Fog => "fog",
            CanonicalCondition::ExtremeHeat => "extreme-heat",
        }
    }
}

/// Map a WeatherAPI numeric condition code to a canonical condition.
///
/// Many provider codes collapse into one bucket: every sleet, freezing-rain
/// and ice-pellet variant is `Rainy`, every snow variant is `Snow`, and so
/// on. WeatherAPI has no code for wind or extreme heat; those buckets are
/// reachable only through [`normalize_text`].
///
/// Codes outside the table fall back to `Cloudy`.
pub fn normalize(code: i64) -> CanonicalCondition {
    match code {
        // Clear / sunny
        1000 => CanonicalCondition::Sunny,
        // Partly cloudy, cloudy, overcast
        1003 | 1006 | 1009 => CanonicalCondition::Cloudy,
        // Mist, fog, freezing fog
        1030 | 1135 | 1147 => CanonicalCondition::Fog,
        // Thundery outbreaks possible (no precipitation yet)
        1087 => CanonicalCondition::Lightning,
        // Rain/snow with thunder
        1273 | 1276 | 1279 | 1282 => CanonicalCondition::Thunderstorms,
        // Snow, blowing snow, blizzard, snow showers
        1066 | 1114 | 1117 | 1210 | 1213 | 1216 | 1219 | 1222 | 1225 | 1255 | 1258 => {
            CanonicalCondition::Snow
        }
        // Drizzle, rain, freezing rain, sleet and ice pellets in all their
        // patchy/light/moderate/heavy/shower variants
        1063 | 1069 | 1072 | 1150 | 1153 | 1168 | 1171 | 1180 | 1183 | 1186 | 1189 | 1192
        | 1195 | 1198 | 1201 | 1204 | 1207 | 1237 | 1240 | 1243 | 1246 | 1249 | 1252 | 1261
        | 1264 => CanonicalCondition::Rainy,
        _ => CanonicalCondition::Cloudy,
    }
}

/// Map a free-text condition description to a canonical condition.
///
/// First matching keyword bucket wins; `lightning` is checked before
/// `thunder` so "thundery outbreaks" and actual storms land in different
/// buckets, mirroring the numeric table.
pub fn normalize_text(text: &str) -> CanonicalCondition {
    let lower = text.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if contains_any(&["lightning"]) {
        CanonicalCondition::Lightning
    } else if contains_any(&["thunder", "storm"]) {
        CanonicalCondition::Thunderstorms
    } else if contains_any(&["blizzard", "snow"]) {
        CanonicalCondition::Snow
    } else if contains_any(&["sleet", "freezing", "drizzle", "rain", "shower", "ice pellet"]) {
        CanonicalCondition::Rainy
    } else if contains_any(&["fog", "mist", "haze"]) {
        CanonicalCondition::Fog
    } else if contains_any(&["wind", "gale", "breezy", "blustery"]) {
        CanonicalCondition::Wind
    } else if contains_any(&["heat", "hot", "scorch"]) {
        CanonicalCondition::ExtremeHeat
    } else if contains_any(&["sunny", "clear"]) {
        CanonicalCondition::Sunny
    } else {
        CanonicalCondition::Cloudy
    }
}
