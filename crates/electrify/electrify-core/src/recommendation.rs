//! Threshold rule behind the planning insights.

use electrify_spi::{Outlook, Recommendation};

pub const SUGGESTED_ACTIONS: [&str; 3] = [
    "Expand rural grid connections or mini-grids",
    "Strengthen long-term infrastructure financing",
    "Monitor population growth against access gains",
];

/// Narrative for `country` given the last forecast value.
///
/// Strictly below `threshold` warns; anything else (including NaN) is on
/// track.
pub fn recommend(country: &str, future_value: f64, threshold: f64) -> Recommendation {
    let (outlook, headline, advice) = if future_value < threshold {
        (
            Outlook::BelowTarget,
            format!(
                "{} is projected to remain below universal access ({:.1}%).",
                country, future_value
            ),
            Some("Accelerated investment is recommended.".to_string()),
        )
    } else {
        (
            Outlook::OnTrack,
            format!(
                "{} is on track to approach universal electricity access.",
                country
            ),
            None,
        )
    };

    Recommendation {
        outlook,
        country: country.to_string(),
        future_value,
        threshold,
        headline,
        advice,
        suggestions: SUGGESTED_ACTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_warns_with_value() {
        let rec = recommend("Kenya", 82.3, 90.0);
        assert_eq!(rec.outlook, Outlook::BelowTarget);
        assert_eq!(
            rec.headline,
            "Kenya is projected to remain below universal access (82.3%)."
        );
        assert_eq!(
            rec.message(),
            "Kenya is projected to remain below universal access (82.3%). Accelerated investment is recommended."
        );
    }

    #[test]
    fn test_value_rounded_to_one_decimal() {
        let rec = recommend("Chad", 12.345, 90.0);
        assert!(rec.headline.contains("(12.3%)"));
    }

    #[test]
    fn test_threshold_is_inclusive_for_success() {
        let rec = recommend("Ghana", 90.0, 90.0);
        assert_eq!(rec.outlook, Outlook::OnTrack);
        assert_eq!(
            rec.message(),
            "Ghana is on track to approach universal electricity access."
        );
        assert!(!rec.is_warning());
    }

    #[test]
    fn test_suggestions_are_static() {
        let a = recommend("A", 10.0, 90.0);
        let b = recommend("B", 99.0, 90.0);
        assert_eq!(a.suggestions, b.suggestions);
        assert_eq!(a.suggestions.len(), 3);
    }
}
