// Core algorithm exports
pub mod conflicts;
pub mod criteria;
pub mod itinerary;
pub mod planner;
pub mod scoring;
pub mod summary;

pub use conflicts::{detect_conflicts, filter_by_severity, count_by_severity, trip_cost};
pub use criteria::{within_budget, in_preferred_season, shares_interest, criteria_met};
pub use itinerary::{build_itinerary, MAX_TRIP_DAYS};
pub use planner::{Planner, Evaluation};
pub use scoring::{individual_match, group_match, score_members};
pub use summary::summarize_group;
