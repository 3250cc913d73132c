use crate::models::{Member, Destination};

/// Number of binary criteria a member is checked against
pub const CRITERIA_COUNT: u8 = 3;

/// Criterion (a): the destination fits under the member's budget ceiling
#[inline]
pub fn within_budget(member: &Member, destination: &Destination) -> bool {
    destination.cost <= member.budget_max
}

/// Criterion (b): the destination's season is one the member travels in
#[inline]
pub fn in_preferred_season(member: &Member, destination: &Destination) -> bool {
    member.seasons.contains(&destination.season)
}

/// Criterion (c): at least one category tag overlaps the member's interests
///
/// A destination without category tags never satisfies this.
#[inline]
pub fn shares_interest(member: &Member, destination: &Destination) -> bool {
    destination
        .category
        .iter()
        .any(|tag| member.interests.contains(tag))
}

/// Count how many of the three criteria the member satisfies (0..=3)
#[inline]
pub fn criteria_met(member: &Member, destination: &Destination) -> u8 {
    within_budget(member, destination) as u8
        + in_preferred_season(member, destination) as u8
        + shares_interest(member, destination) as u8
}
