use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ScoreDestinationRequest, EvaluateItineraryRequest, SuggestDestinationsRequest, TripQuery,
    ItineraryReport, SuggestDestinationsResponse, HealthResponse, ErrorResponse, Member,
    Destination, Severity,
};
use crate::core::{Planner, filter_by_severity, count_by_severity};
use crate::services::SeedData;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub planner: Planner,
    pub seed: Arc<SeedData>,
    pub suggestion_limit: usize,
}

/// Configure all itinerary-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/destinations/score", web::post().to(score_destination))
        .route("/destinations/suggest", web::post().to(suggest_destinations))
        .route("/itinerary/evaluate", web::post().to(evaluate_itinerary))
        .route("/trip", web::get().to(seeded_trip));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn parse_severity(raw: Option<&str>) -> Result<Option<Severity>, HttpResponse> {
    match raw {
        None | Some("all") => Ok(None),
        Some(value) => value
            .parse::<Severity>()
            .map(Some)
            .map_err(|message| bad_request("Invalid severity", message)),
    }
}

/// Run the planner and shape its output into a report
fn build_report(
    planner: &Planner,
    members: &[Member],
    destinations: &[Destination],
    severity: Option<Severity>,
) -> ItineraryReport {
    let evaluation = planner.evaluate(members, destinations);

    ItineraryReport {
        report_id: uuid::Uuid::new_v4().to_string(),
        generated_at: chrono::Utc::now(),
        destinations: evaluation.destinations,
        conflict_counts: count_by_severity(&evaluation.conflicts),
        conflicts: filter_by_severity(&evaluation.conflicts, severity),
        recommendations: evaluation.recommendations,
        itinerary: evaluation.itinerary,
        summary: evaluation.summary,
    }
}

/// Score a single destination
///
/// POST /api/v1/destinations/score
///
/// Request body:
/// ```json
/// {
///   "members": [{ "id": "string", "name": "string", "budgetMin": 0, "budgetMax": 0,
///                 "seasons": [], "interests": [], "crowdPreference": "avoid" }],
///   "destination": { "id": "string", "name": "string", "cost": 0, "season": "string",
///                    "category": [], "duration": 1 }
/// }
/// ```
async fn score_destination(
    state: web::Data<AppState>,
    req: web::Json<ScoreDestinationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let result = state.planner.score_destination(&req.members, &req.destination);

    tracing::info!(
        "Scored destination {} for {} members: {}%",
        result.destination_id,
        req.members.len(),
        result.group_match
    );

    HttpResponse::Ok().json(result)
}

/// Evaluate a selection of destinations
///
/// POST /api/v1/itinerary/evaluate
///
/// Request body:
/// ```json
/// {
///   "members": [...],
///   "destinations": [...],
///   "severity": "high|medium|low|all"
/// }
/// ```
async fn evaluate_itinerary(
    state: web::Data<AppState>,
    req: web::Json<EvaluateItineraryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let severity = match parse_severity(req.severity.as_deref()) {
        Ok(severity) => severity,
        Err(response) => return response,
    };

    let report = build_report(&state.planner, &req.members, &req.destinations, severity);

    tracing::info!(
        "Evaluated itinerary {}: {} destinations, {} members, {} conflicts",
        report.report_id,
        report.destinations.len(),
        req.members.len(),
        report.conflict_counts.total
    );

    HttpResponse::Ok().json(report)
}

/// Suggest destinations to add to the trip
///
/// POST /api/v1/destinations/suggest
async fn suggest_destinations(
    state: web::Data<AppState>,
    req: web::Json<SuggestDestinationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for suggest request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let limit = req
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.suggestion_limit);

    let suggestions = state.planner.suggest(&req.members, &req.candidates, limit);

    tracing::debug!("Returning {} of {} candidates", suggestions.len(), req.candidates.len());

    HttpResponse::Ok().json(SuggestDestinationsResponse {
        suggestions,
        total_candidates: req.candidates.len(),
    })
}

/// Evaluate the seeded trip
///
/// GET /api/v1/trip?severity={severity}
async fn seeded_trip(
    state: web::Data<AppState>,
    query: web::Query<TripQuery>,
) -> impl Responder {
    let severity = match parse_severity(query.severity.as_deref()) {
        Ok(severity) => severity,
        Err(response) => return response,
    };

    let selected = state.seed.selected_destinations();
    let report = build_report(&state.planner, &state.seed.members, &selected, severity);

    HttpResponse::Ok().json(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_severity() {
        assert_eq!(parse_severity(None).ok(), Some(None));
        assert_eq!(parse_severity(Some("all")).ok(), Some(None));
        assert_eq!(parse_severity(Some("HIGH")).ok(), Some(Some(Severity::High)));
        assert!(parse_severity(Some("urgent")).is_err());
    }

    #[test]
    fn test_report_counts_ignore_filter() {
        let seed = SeedData::builtin().unwrap();
        let report = build_report(
            &Planner::default(),
            &seed.members,
            &seed.selected_destinations(),
            Some(Severity::Low),
        );

        assert!(report.conflicts.iter().all(|c| c.severity == Severity::Low));
        assert!(report.conflict_counts.total >= report.conflicts.len());
    }
}
