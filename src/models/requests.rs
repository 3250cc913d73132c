use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Destination, Member};

/// Request to score a single destination against a roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreDestinationRequest {
    #[validate(nested)]
    #[serde(default)]
    pub members: Vec<Member>,
    #[validate(nested)]
    pub destination: Destination,
}

/// Request to evaluate a whole selection of destinations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluateItineraryRequest {
    #[validate(nested)]
    #[serde(default)]
    pub members: Vec<Member>,
    #[validate(nested)]
    #[serde(default)]
    pub destinations: Vec<Destination>,
    /// Only return conflicts of this severity
    #[serde(default)]
    pub severity: Option<String>,
}

/// Request for destinations to add to the trip
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestDestinationsRequest {
    #[validate(nested)]
    #[serde(default)]
    pub members: Vec<Member>,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Destination>,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query string for the seeded trip endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripQuery {
    #[serde(default)]
    pub severity: Option<String>,
}
