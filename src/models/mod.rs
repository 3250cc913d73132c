// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Member, CrowdPreference, Destination, Conflict, ConflictKind, ConflictCounts, Severity,
    MatchLevel, MatchThresholds, MemberMatch, DestinationMatch, Itinerary, ItineraryDay,
    LabelCount, CrowdSummary, GroupSummary,
};
pub use requests::{ScoreDestinationRequest, EvaluateItineraryRequest, SuggestDestinationsRequest, TripQuery};
pub use responses::{ItineraryReport, SuggestDestinationsResponse, HealthResponse, ErrorResponse};
