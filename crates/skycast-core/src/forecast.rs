//! Forecast continuity filling.
//!
//! Constrained provider access tiers may return fewer forecast days than
//! the UI contract requires (7, in practice). [`ContinuityFiller`] pads a
//! short series to a guaranteed window length by carrying the last real
//! entry forward with bounded temperature jitter, and truncates a long one.
//!
//! The random source is an injected capability -- pass a seeded generator
//! (or set `seed` in config) for deterministic output in tests.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::conditions::CanonicalCondition;
use crate::error::ValidationError;

/// One day of normalized forecast data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub condition: CanonicalCondition,
    /// Daily high in degrees Celsius.
    pub high_c: f64,
    /// Daily low in degrees Celsius.
    pub low_c: f64,
    /// Chance of precipitation, 0-100.
    pub precipitation_chance: u8,
    /// True for entries synthesized by the filler rather than supplied by
    /// the provider. Internal bookkeeping, not part of the serialized
    /// contract.
    #[serde(skip_serializing, default)]
    pub synthetic: bool,
}

/// Maximum absolute temperature jitter applied to synthetic entries, in °C.
const JITTER_RANGE_C: f64 = 1.0;

/// Pads or truncates daily forecast series to a fixed window length.
#[derive(Debug, Clone, Default)]
pub struct ContinuityFiller {
    /// Random seed for reproducibility (None = entropy-seeded).
    pub seed: Option<u64>,
}

impl ContinuityFiller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Return `entries` adjusted to exactly `window` elements.
    ///
    /// Longer input is truncated to the first `window` entries in order.
    /// Shorter input is extended with synthetic entries: each dated one day
    /// after the previous, carrying the last real entry's condition and
    /// precipitation chance, with high/low perturbed uniformly within
    /// ±1 °C.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyCollection` when `entries` is empty
    /// and `window > 0` -- there is nothing to carry forward.
    pub fn ensure_window(
        &self,
        entries: Vec<DailyForecast>,
        window: usize,
    ) -> Result<Vec<DailyForecast>, ValidationError> {
        let mut rng = match self.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        ensure_window_with(entries, window, &mut rng)
    }
}

/// [`ContinuityFiller::ensure_window`] with a caller-supplied random source.
pub fn ensure_window_with<R: Rng>(
    mut entries: Vec<DailyForecast>,
    window: usize,
    rng: &mut R,
) -> Result<Vec<DailyForecast>, ValidationError> {
    if entries.len() >= window {
        entries.truncate(window);
        return Ok(entries);
    }
    // Last provider-supplied entry seeds every synthetic day.
    let template = match entries.last() {
        Some(entry) => entry.clone(),
        None => {
            return Err(ValidationError::EmptyCollection(
                "daily forecast entries".into(),
            ))
        }
    };
    let mut date = template.date;

    while entries.len() < window {
        date += Duration::days(1);
        entries.push(DailyForecast {
            date,
            condition: template.condition,
            high_c: template.high_c + rng.gen_range(-JITTER_RANGE_C..=JITTER_RANGE_C),
            low_c: template.low_c + rng.gen_range(-JITTER_RANGE_C..=JITTER_RANGE_C),
            precipitation_chance: template.precipitation_chance,
            synthetic: true,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, condition: CanonicalCondition, high: f64, low: f64) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
            condition,
            high_c: high,
            low_c: low,
            precipitation_chance: 40,
            synthetic: false,
        }
    }

    #[test]
    fn short_series_is_padded_to_window() {
        let entries = vec![
            day(1, CanonicalCondition::Sunny, 24.0, 15.0),
            day(2, CanonicalCondition::Cloudy, 22.0, 14.0),
            day(3, CanonicalCondition::Rainy, 19.0, 12.0),
        ];
        let filler = ContinuityFiller::with_seed(7);
        let out = filler.ensure_window(entries, 7).unwrap();

        assert_eq!(out.len(), 7);
        // Real entries untouched, in order.
        assert!(!out[2].synthetic);
        assert_eq!(out[2].condition, CanonicalCondition::Rainy);

        for (i, entry) in out[3..].iter().enumerate() {
            assert!(entry.synthetic);
            assert_eq!(
                entry.date,
                NaiveDate::from_ymd_opt(2025, 6, 4 + i as u32).unwrap()
            );
            assert_eq!(entry.condition, CanonicalCondition::Rainy);
            assert_eq!(entry.precipitation_chance, 40);
            assert!((entry.high_c - 19.0).abs() <= 1.0);
            assert!((entry.low_c - 12.0).abs() <= 1.0);
        }
    }

    #[test]
    fn long_series_is_truncated_in_order() {
        let entries: Vec<_> = (1..=9)
            .map(|d| day(d, CanonicalCondition::Sunny, 25.0, 16.0))
            .collect();
        let expected: Vec<_> = entries[..7].to_vec();

        let out = ContinuityFiller::new().ensure_window(entries, 7).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn exact_length_passes_through() {
        let entries: Vec<_> = (1..=7)
            .map(|d| day(d, CanonicalCondition::Cloudy, 20.0, 10.0))
            .collect();
        let out = ContinuityFiller::new().ensure_window(entries.clone(), 7).unwrap();
        assert_eq!(out, entries);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = ContinuityFiller::new().ensure_window(vec![], 7).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyCollection(_)));
    }

    #[test]
    fn empty_input_with_zero_window_is_fine() {
        let out = ContinuityFiller::new().ensure_window(vec![], 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn seeded_fill_is_deterministic() {
        let entries = vec![day(1, CanonicalCondition::Snow, 2.0, -5.0)];
        let a = ContinuityFiller::with_seed(42)
            .ensure_window(entries.clone(), 5)
            .unwrap();
        let b = ContinuityFiller::with_seed(42)
            .ensure_window(entries, 5)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn injected_rng_is_used() {
        let entries = vec![day(1, CanonicalCondition::Wind, 18.0, 9.0)];
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let a = ensure_window_with(entries.clone(), 4, &mut rng).unwrap();
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let b = ensure_window_with(entries, 4, &mut rng).unwrap();
        assert_eq!(a, b);
    }
}
