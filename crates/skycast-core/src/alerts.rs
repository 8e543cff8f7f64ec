//! Weather alert classification.
//!
//! Providers deliver alerts as free-text headlines plus a severity string
//! with no fixed vocabulary. [`classify`] reduces both to the closed
//! ([`HazardType`], [`AlertSeverity`]) pair the notification layer keys on.
//!
//! Hazard matching is an ordered rule list evaluated top to bottom -- the
//! order is part of the contract ("Winter Storm Watch" must classify as
//! snow, not storm), so the rules live in one explicit table rather than
//! nested conditionals.

use serde::{Deserialize, Serialize};

/// Classified category of a weather alert, distinct from its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    Rain,
    Uv,
    Air,
    General,
    Storm,
    Snow,
    Earthquake,
    Flood,
    Tornado,
    Hurricane,
    Fire,
    Fog,
    Wind,
    Heat,
    Cold,
}

/// Alert severity level. Unrecognized provider text degrades to `Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Minor,
    Moderate,
    Severe,
    Extreme,
}

/// Result of classifying one raw alert. Derived on every pass over the
/// payload, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertClassification {
    pub hazard: HazardType,
    pub severity: AlertSeverity,
}

/// Hazard rules in priority order. First rule whose keyword matches the
/// lowercased headline wins. Reordering these changes classification
/// results -- see `winter_storm_prefers_snow` below.
const HAZARD_RULES: &[(&[&str], HazardType)] = &[
    (&["snow", "blizzard", "winter"], HazardType::Snow),
    (&["storm", "thunder"], HazardType::Storm),
    (&["earthquake", "seismic"], HazardType::Earthquake),
    (&["flood", "flooding"], HazardType::Flood),
    (&["tornado", "twister"], HazardType::Tornado),
    (&["hurricane", "typhoon", "cyclone"], HazardType::Hurricane),
    (&["fire", "wildfire"], HazardType::Fire),
    (&["fog", "visibility"], HazardType::Fog),
    (&["wind", "gale"], HazardType::Wind),
    (&["heat", "hot", "temperature"], HazardType::Heat),
    (&["cold", "freeze", "frost"], HazardType::Cold),
    (&["rain", "precipitation"], HazardType::Rain),
];

/// Classify a raw alert headline and severity string.
///
/// Total function: anything unmatched degrades to `General` / `Moderate`.
/// Hazard and severity are classified independently.
pub fn classify(headline: &str, severity_text: &str) -> AlertClassification {
    AlertClassification {
        hazard: classify_hazard(headline),
        severity: classify_severity(severity_text),
    }
}

/// Case-insensitive first-match lookup over [`HAZARD_RULES`].
pub fn classify_hazard(headline: &str) -> HazardType {
    let lower = headline.to_lowercase();
    for (keywords, hazard) in HAZARD_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *hazard;
        }
    }
    HazardType::General
}

/// Map provider severity text to a severity level.
pub fn classify_severity(severity_text: &str) -> AlertSeverity {
    let lower = severity_text.to_lowercase();
    if lower.contains("extreme") || lower.contains("high") {
        AlertSeverity::Extreme
    } else if lower.contains("severe") || lower.contains("major") {
        AlertSeverity::Severe
    } else if lower.contains("minor") || lower.contains("low") {
        AlertSeverity::Minor
    } else {
        AlertSeverity::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn severe_thunderstorm_warning() {
        let c = classify("Severe Thunderstorm Warning", "Severe");
        assert_eq!(c.hazard, HazardType::Storm);
        assert_eq!(c.severity, AlertSeverity::Severe);
    }

    #[test]
    fn winter_storm_prefers_snow() {
        // "storm" matches the storm rule too; the snow rule must fire first
        // so winter-weather alerts classify by their actual hazard.
        let c = classify("Winter Storm Watch", "Minor");
        assert_eq!(c.hazard, HazardType::Snow);
        assert_eq!(c.severity, AlertSeverity::Minor);
    }

    #[test]
    fn full_fallback() {
        let c = classify("Unusual event", "");
        assert_eq!(c.hazard, HazardType::General);
        assert_eq!(c.severity, AlertSeverity::Moderate);
    }

    #[test]
    fn hazard_precedence_table() {
        assert_eq!(classify_hazard("Flash Flood Warning"), HazardType::Flood);
        assert_eq!(classify_hazard("Tornado Watch"), HazardType::Tornado);
        assert_eq!(classify_hazard("Hurricane Warning"), HazardType::Hurricane);
        assert_eq!(classify_hazard("Red Flag Fire Weather"), HazardType::Fire);
        assert_eq!(classify_hazard("Dense Fog Advisory"), HazardType::Fog);
        assert_eq!(classify_hazard("High Wind Warning"), HazardType::Wind);
        assert_eq!(classify_hazard("Excessive Heat Warning"), HazardType::Heat);
        assert_eq!(classify_hazard("Hard Freeze Warning"), HazardType::Cold);
        assert_eq!(classify_hazard("Heavy Rain Advisory"), HazardType::Rain);
        assert_eq!(classify_hazard("Seismic activity reported"), HazardType::Earthquake);
    }

    #[test]
    fn severity_buckets() {
        assert_eq!(classify_severity("Extreme"), AlertSeverity::Extreme);
        assert_eq!(classify_severity("high"), AlertSeverity::Extreme);
        assert_eq!(classify_severity("Major"), AlertSeverity::Severe);
        assert_eq!(classify_severity("LOW"), AlertSeverity::Minor);
        assert_eq!(classify_severity("Unknown"), AlertSeverity::Moderate);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_hazard("TORNADO EMERGENCY"), HazardType::Tornado);
        assert_eq!(classify_hazard("blizzard conditions"), HazardType::Snow);
    }

    proptest! {
        #[test]
        fn classify_is_total(headline in ".*", severity in ".*") {
            // Never panics, always lands in the closed taxonomy.
            let _ = classify(&headline, &severity);
        }
    }
}
