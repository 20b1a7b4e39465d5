//! Urgency Presentation Lookup
//!
//! Static mapping from urgency tier to the badge a front end renders.

use rule_engine::Urgency;
use serde::Serialize;

/// Shown with every assessment
pub const DISCLAIMER: &str =
    "This system provides decision support only and should not replace professional medical judgment.";

/// Badge styling for one urgency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrgencyStyle {
    /// CSS-style class name
    pub class: &'static str,
    /// Badge text
    pub label: &'static str,
    /// Follow-up advice line
    pub follow_up: &'static str,
}

/// Look up the style for a tier
pub fn style_for(urgency: Urgency) -> UrgencyStyle {
    let (class, label) = match urgency {
        Urgency::Urgent => ("urgent", "URGENT"),
        Urgency::High => ("high", "HIGH"),
        Urgency::Moderate => ("moderate", "MODERATE"),
        Urgency::Low => ("low", "LOW"),
        Urgency::None => ("none", "-"),
    };

    UrgencyStyle {
        class,
        label,
        follow_up: urgency.follow_up(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_distinct_class() {
        let mut classes: Vec<&str> = Urgency::ALL.iter().map(|u| style_for(*u).class).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), Urgency::ALL.len());
    }

    #[test]
    fn test_default_tier_renders_dash() {
        let style = style_for(Urgency::None);
        assert_eq!(style.label, "-");
        assert_eq!(style.class, "none");
    }

    #[test]
    fn test_urgent_style() {
        let style = style_for(Urgency::Urgent);
        assert_eq!(style.class, "urgent");
        assert_eq!(style.follow_up, Urgency::Urgent.follow_up());
    }
}
