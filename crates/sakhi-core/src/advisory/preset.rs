//! Default advisory entries.
//!
//! Provides the advisories seeded into a fresh session's feed.

use super::model::{Advisory, AdvisoryKind, AdvisoryStatus};

/// Returns the default advisories for a new session.
pub fn default_advisories() -> Vec<Advisory> {
    vec![
        Advisory {
            id: "adv-weather-alert".to_string(),
            kind: AdvisoryKind::Urgent,
            title: "Weather Alert: Heavy Rain Expected".to_string(),
            description: "Protect your crops from excessive moisture. Consider drainage measures."
                .to_string(),
            posted: "2 hours ago".to_string(),
            status: AdvisoryStatus::Pending,
        },
        Advisory {
            id: "adv-fertilizer-window".to_string(),
            kind: AdvisoryKind::Recommendation,
            title: "Optimal Time for Fertilizer Application".to_string(),
            description:
                "Based on your crop growth stage, now is the ideal time for nitrogen application."
                    .to_string(),
            posted: "1 day ago".to_string(),
            status: AdvisoryStatus::Completed,
        },
        Advisory {
            id: "adv-irrigation-schedule".to_string(),
            kind: AdvisoryKind::Reminder,
            title: "Irrigation Schedule".to_string(),
            description:
                "Your tomato plants need watering. Soil moisture levels are below optimal."
                    .to_string(),
            posted: "3 hours ago".to_string(),
            status: AdvisoryStatus::Pending,
        },
    ]
}
