use crate::models::{
    Member, Destination, DestinationMatch, Conflict, ConflictKind, MatchLevel, MatchThresholds,
    Itinerary, GroupSummary,
};
use crate::core::{
    conflicts::{detect_conflicts, trip_cost},
    itinerary::build_itinerary,
    scoring::{group_match, score_members},
    summary::summarize_group,
};

pub const RECOMMEND_INTERESTS: &str =
    "Add destinations that match underserved interests to improve group satisfaction";
pub const RECOMMEND_SEASONS: &str =
    "Consider flexible travel dates to accommodate different season preferences";
pub const RECOMMEND_UPGRADE: &str =
    "Consider upgrading accommodation or activities to suit higher-budget members";
pub const RECOMMEND_CHEAPER: &str =
    "Look for lower-cost alternatives to keep the trip affordable for everyone";

/// Result of evaluating a selection of destinations
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Selected destinations ranked by group match
    pub destinations: Vec<DestinationMatch>,
    pub conflicts: Vec<Conflict>,
    pub recommendations: Vec<String>,
    pub itinerary: Itinerary,
    pub summary: GroupSummary,
}

/// Group itinerary orchestrator
///
/// # Evaluation Stages
/// 1. Individual and group scoring per destination
/// 2. Ranking by group match
/// 3. Conflict detection over the whole selection
/// 4. Recommendations, itinerary layout and group summary
#[derive(Debug, Clone)]
pub struct Planner {
    thresholds: MatchThresholds,
}

impl Planner {
    pub fn new(thresholds: MatchThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self {
            thresholds: MatchThresholds::default(),
        }
    }

    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    /// Score one destination against the roster
    pub fn score_destination(&self, members: &[Member], destination: &Destination) -> DestinationMatch {
        let individual_matches = score_members(members, destination, &self.thresholds);
        let group = group_match(members, destination);

        let reluctant: Vec<&str> = members
            .iter()
            .zip(&individual_matches)
            .filter(|(_, m)| m.level == MatchLevel::Weak)
            .map(|(member, _)| member.first_name())
            .collect();

        let note = if reluctant.is_empty() {
            None
        } else {
            Some(format!("{} may not enjoy this destination", reluctant.join(", ")))
        };

        DestinationMatch {
            destination_id: destination.id.clone(),
            name: destination.name.clone(),
            cost: destination.cost,
            season: destination.season.clone(),
            category: destination.category.clone(),
            duration: destination.duration,
            group_match: group,
            level: self.thresholds.level(group),
            individual_matches,
            note,
        }
    }

    /// Evaluate the selected destinations for the roster
    ///
    /// # Arguments
    /// * `members` - The trip roster
    /// * `destinations` - Destinations selected for the trip, in visiting order
    pub fn evaluate(&self, members: &[Member], destinations: &[Destination]) -> Evaluation {
        let ranked = self.rank(members, destinations);
        let conflicts = detect_conflicts(members, destinations);
        let recommendations = self.recommend(members, destinations, &conflicts, ranked.first());

        tracing::debug!(
            "Evaluated {} destinations for {} members: {} conflicts, trip cost {:?}",
            destinations.len(),
            members.len(),
            conflicts.len(),
            trip_cost(destinations)
        );

        Evaluation {
            destinations: ranked,
            conflicts,
            recommendations,
            itinerary: build_itinerary(destinations),
            summary: summarize_group(members, destinations),
        }
    }

    /// Rank candidate destinations to add to the trip
    pub fn suggest(
        &self,
        members: &[Member],
        candidates: &[Destination],
        limit: usize,
    ) -> Vec<DestinationMatch> {
        let mut ranked = self.rank(members, candidates);
        ranked.truncate(limit);
        ranked
    }

    /// Score and sort by group match (descending), then cost, then id
    fn rank(&self, members: &[Member], destinations: &[Destination]) -> Vec<DestinationMatch> {
        let mut scored: Vec<DestinationMatch> = destinations
            .iter()
            .map(|destination| self.score_destination(members, destination))
            .collect();

        scored.sort_by(|a, b| {
            b.group_match
                .cmp(&a.group_match)
                .then_with(|| a.cost.cmp(&b.cost))
                .then_with(|| a.destination_id.cmp(&b.destination_id))
        });

        scored
    }

    fn recommend(
        &self,
        members: &[Member],
        destinations: &[Destination],
        conflicts: &[Conflict],
        best: Option<&DestinationMatch>,
    ) -> Vec<String> {
        let has = |kind: ConflictKind| conflicts.iter().any(|c| c.kind == kind);
        let mut recommendations = Vec::new();

        if has(ConflictKind::Interest) {
            recommendations.push(RECOMMEND_INTERESTS.to_string());
        }
        if has(ConflictKind::Season) {
            recommendations.push(RECOMMEND_SEASONS.to_string());
        }
        if let Some(cost) = trip_cost(destinations) {
            if members.iter().any(|m| cost < m.budget_min) {
                recommendations.push(RECOMMEND_UPGRADE.to_string());
            }
            if members.iter().any(|m| cost > m.budget_max) {
                recommendations.push(RECOMMEND_CHEAPER.to_string());
            }
        }
        if let Some(best) = best.filter(|b| b.level == MatchLevel::Weak) {
            recommendations.push(format!(
                "Replace {} with a destination closer to the group's preferences",
                best.name
            ));
        }

        recommendations
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}
