use serde::{Deserialize, Serialize};
use crate::models::domain::{Conflict, ConflictCounts, DestinationMatch, GroupSummary, Itinerary};

/// Full evaluation of a trip selection
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryReport {
    #[serde(rename = "reportId")]
    pub report_id: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    /// Selected destinations ranked by group match
    pub destinations: Vec<DestinationMatch>,
    pub conflicts: Vec<Conflict>,
    #[serde(rename = "conflictCounts")]
    pub conflict_counts: ConflictCounts,
    pub recommendations: Vec<String>,
    pub itinerary: Itinerary,
    pub summary: GroupSummary,
}

/// Response for the suggestion endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SuggestDestinationsResponse {
    pub suggestions: Vec<DestinationMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
