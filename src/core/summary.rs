use std::collections::HashMap;
use crate::models::{Member, Destination, GroupSummary, LabelCount, CrowdPreference, CrowdSummary};
use crate::core::{conflicts::trip_cost, scoring::rounded_percentage};

/// Number of interests reported as common to the group
const COMMON_INTEREST_COUNT: usize = 3;

/// Aggregate the roster's preferences for the dashboard overview
pub fn summarize_group(members: &[Member], destinations: &[Destination]) -> GroupSummary {
    let cost = trip_cost(destinations);

    let interest_counts = count_labels(members.iter().map(|m| m.interests.as_slice()));
    let common_interests = interest_counts
        .iter()
        .take(COMMON_INTEREST_COUNT)
        .map(|c| c.label.clone())
        .collect();

    let budget_compatibility = match cost {
        Some(cost) => {
            let covered = members.iter().filter(|m| m.budget_covers(cost)).count();
            rounded_percentage(covered as u64, members.len() as u64)
        }
        None => 0,
    };

    GroupSummary {
        group_size: members.len(),
        average_budget_min: rounded_mean(members.iter().map(|m| m.budget_min)),
        average_budget_max: rounded_mean(members.iter().map(|m| m.budget_max)),
        season_counts: count_labels(members.iter().map(|m| m.seasons.as_slice())),
        interest_counts,
        common_interests,
        crowd_preference: majority_crowd_preference(members),
        trip_cost: cost.unwrap_or(0),
        budget_compatibility,
    }
}

/// Count how many members picked each label, most popular first
///
/// Ties are ordered alphabetically. A label repeated within one member
/// counts once.
pub fn count_labels<'a, I>(lists: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for list in lists {
        let mut seen: Vec<&str> = Vec::with_capacity(list.len());
        for label in list {
            if !seen.contains(&label.as_str()) {
                seen.push(label);
                *counts.entry(label).or_insert(0) += 1;
            }
        }
    }

    let mut counts: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts
}

/// Most common crowd preference; ties go to the earlier variant in
/// `CrowdPreference::ALL`
fn majority_crowd_preference(members: &[Member]) -> Option<CrowdSummary> {
    if members.is_empty() {
        return None;
    }

    let mut best: Option<CrowdSummary> = None;
    for preference in CrowdPreference::ALL {
        let count = members
            .iter()
            .filter(|m| m.crowd_preference == preference)
            .count();
        if best.map_or(true, |b| count > b.members) {
            best = Some(CrowdSummary {
                preference,
                label: preference.label(),
                members: count,
            });
        }
    }

    best
}

fn rounded_mean<I: Iterator<Item = u32>>(values: I) -> u32 {
    let (sum, n) = values.fold((0u64, 0u64), |(sum, n), v| (sum + v as u64, n + 1));
    if n == 0 {
        return 0;
    }
    ((sum * 2 + n) / (n * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_member(
        budget: (u32, u32),
        seasons: &[&str],
        interests: &[&str],
        crowd: CrowdPreference,
    ) -> Member {
        Member {
            id: "m".to_string(),
            name: "Member".to_string(),
            budget_min: budget.0,
            budget_max: budget.1,
            seasons: seasons.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            crowd_preference: crowd,
            avatar: None,
        }
    }

    fn create_destination(cost: u32) -> Destination {
        Destination {
            id: "d".to_string(),
            name: "Destination".to_string(),
            cost,
            season: "Raya".to_string(),
            category: vec![],
            description: String::new(),
            duration: 1,
            image: None,
        }
    }

    #[test]
    fn test_summary_aggregates() {
        let members = vec![
            create_member((1000, 2000), &["Raya", "CNY"], &["Food", "Culture", "Beach"], CrowdPreference::Avoid),
            create_member((1500, 3000), &["Merdeka"], &["Beach", "Nature"], CrowdPreference::Okay),
            create_member((800, 1500), &["Raya"], &["Food", "Culture"], CrowdPreference::Avoid),
        ];
        let destinations = vec![create_destination(1200)];

        let summary = summarize_group(&members, &destinations);

        assert_eq!(summary.group_size, 3);
        assert_eq!(summary.average_budget_min, 1100);
        assert_eq!(summary.average_budget_max, 2167);
        assert_eq!(summary.season_counts[0], LabelCount { label: "Raya".to_string(), count: 2 });
        assert_eq!(summary.common_interests, vec!["Beach", "Culture", "Food"]);
        let crowd = summary.crowd_preference.expect("crowd summary");
        assert_eq!(crowd.preference, CrowdPreference::Avoid);
        assert_eq!(crowd.members, 2);
        assert_eq!(summary.trip_cost, 1200);
        // Only the first and last budgets cover 1200
        assert_eq!(summary.budget_compatibility, 67);
    }

    #[test]
    fn test_duplicate_labels_count_once() {
        let seasons = vec!["Raya".to_string(), "Raya".to_string()];
        let counts = count_labels(std::iter::once(seasons.as_slice()));
        assert_eq!(counts, vec![LabelCount { label: "Raya".to_string(), count: 1 }]);
    }

    #[test]
    fn test_crowd_tie_prefers_avoid() {
        let members = vec![
            create_member((0, 1), &[], &[], CrowdPreference::Okay),
            create_member((0, 1), &[], &[], CrowdPreference::Avoid),
        ];
        let summary = summarize_group(&members, &[]);
        assert_eq!(summary.crowd_preference.map(|c| c.preference), Some(CrowdPreference::Avoid));
    }

    #[test]
    fn test_empty_roster() {
        let summary = summarize_group(&[], &[create_destination(500)]);

        assert_eq!(summary.group_size, 0);
        assert_eq!(summary.average_budget_min, 0);
        assert!(summary.crowd_preference.is_none());
        assert_eq!(summary.budget_compatibility, 0);
    }
}
