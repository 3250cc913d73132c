use crate::models::{Member, Destination, Conflict, ConflictKind, ConflictCounts, Severity};

/// Per-person cost of the trip: the mean cost of the selected destinations
///
/// Returns `None` for an empty selection.
pub fn trip_cost(destinations: &[Destination]) -> Option<u32> {
    if destinations.is_empty() {
        return None;
    }

    let n = destinations.len() as u64;
    let total: u64 = destinations.iter().map(|d| d.cost as u64).sum();

    Some(((total * 2 + n) / (n * 2)) as u32)
}

/// Detect budget, interest and season conflicts for the roster
///
/// Conflicts are ordered by severity (budget, then interest, then season),
/// and by roster order within a severity. An empty selection has no conflicts.
pub fn detect_conflicts(members: &[Member], destinations: &[Destination]) -> Vec<Conflict> {
    let Some(cost) = trip_cost(destinations) else {
        return Vec::new();
    };

    let mut conflicts = Vec::new();

    for member in members {
        if cost < member.budget_min {
            conflicts.push(conflict(
                member,
                ConflictKind::Budget,
                format!("{} prefers higher-budget trips (min RM{})", member.name, member.budget_min),
            ));
        } else if cost > member.budget_max {
            conflicts.push(conflict(
                member,
                ConflictKind::Budget,
                format!("{} cannot afford the selected destinations (max RM{})", member.name, member.budget_max),
            ));
        }
    }

    for member in members {
        let interested = destinations
            .iter()
            .any(|d| d.category.iter().any(|tag| member.interests.contains(tag)));
        if !interested {
            conflicts.push(conflict(
                member,
                ConflictKind::Interest,
                format!("{} may not enjoy the selected destinations", member.name),
            ));
        }
    }

    for member in members {
        let in_season = destinations.iter().any(|d| member.seasons.contains(&d.season));
        if !in_season {
            conflicts.push(conflict(
                member,
                ConflictKind::Season,
                format!("{} prefers different seasons for travel", member.name),
            ));
        }
    }

    conflicts
}

fn conflict(member: &Member, kind: ConflictKind, message: String) -> Conflict {
    Conflict {
        member_id: member.id.clone(),
        member_name: member.name.clone(),
        kind,
        message,
        severity: severity_of(kind),
    }
}

/// Severity assigned to each kind of conflict
#[inline]
pub fn severity_of(kind: ConflictKind) -> Severity {
    match kind {
        ConflictKind::Budget => Severity::High,
        ConflictKind::Interest => Severity::Medium,
        ConflictKind::Season => Severity::Low,
    }
}

/// Keep only conflicts of the given severity; `None` keeps everything
pub fn filter_by_severity(conflicts: &[Conflict], severity: Option<Severity>) -> Vec<Conflict> {
    conflicts
        .iter()
        .filter(|c| severity.map_or(true, |s| c.severity == s))
        .cloned()
        .collect()
}

pub fn count_by_severity(conflicts: &[Conflict]) -> ConflictCounts {
    conflicts.iter().fold(ConflictCounts::default(), |mut counts, c| {
        match c.severity {
            Severity::High => counts.high += 1,
            Severity::Medium => counts.medium += 1,
            Severity::Low => counts.low += 1,
        }
        counts.total += 1;
        counts
    })
}
