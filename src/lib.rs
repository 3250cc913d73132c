//! Trip Match - group itinerary compatibility scoring
//!
//! This library scores candidate destinations against a trip roster. Each
//! member is checked against three criteria (budget ceiling, preferred
//! season, shared interest); the group match aggregates the raw criterion
//! counts across the roster. On top of the scorer sit conflict detection,
//! recommendations, a day-by-day itinerary and group summaries.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Planner, Evaluation, individual_match, group_match};
pub use models::{Member, Destination, Conflict, DestinationMatch, MemberMatch, ItineraryReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let member = Member {
            id: "1".to_string(),
            name: "Priya Devi".to_string(),
            budget_min: 500,
            budget_max: 1000,
            seasons: vec!["CNY".to_string()],
            interests: vec!["Food".to_string()],
            crowd_preference: models::CrowdPreference::Avoid,
            avatar: None,
        };
        let destination = Destination {
            id: "jonker".to_string(),
            name: "Jonker Street".to_string(),
            cost: 600,
            season: "CNY".to_string(),
            category: vec!["Food".to_string(), "Culture".to_string()],
            description: String::new(),
            duration: 1,
            image: None,
        };

        assert_eq!(individual_match(&member, &destination), 100);
        assert_eq!(group_match(std::slice::from_ref(&member), &destination), 100);
    }
}
