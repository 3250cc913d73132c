use crate::models::{Member, Destination, MemberMatch, MatchThresholds};
use crate::core::criteria::{criteria_met, CRITERIA_COUNT};

/// Calculate a member's match percentage (0-100) for a destination
///
/// Scoring formula:
/// score = round(criteria_met / 3 * 100)
///
/// where the three criteria are budget ceiling, preferred season and
/// at least one shared interest.
pub fn individual_match(member: &Member, destination: &Destination) -> u8 {
    rounded_percentage(criteria_met(member, destination) as u64, CRITERIA_COUNT as u64)
}

/// Calculate the group match percentage (0-100) for a destination
///
/// Raw criterion counts are summed over the roster and rounded once:
/// score = round(sum(criteria_met) / (members * 3) * 100)
///
/// This is not the mean of the already rounded individual percentages.
/// An empty roster scores 0.
pub fn group_match(members: &[Member], destination: &Destination) -> u8 {
    let met: u64 = members
        .iter()
        .map(|member| criteria_met(member, destination) as u64)
        .sum();

    rounded_percentage(met, members.len() as u64 * CRITERIA_COUNT as u64)
}

/// Score every member of the roster against a destination, in roster order
pub fn score_members(
    members: &[Member],
    destination: &Destination,
    thresholds: &MatchThresholds,
) -> Vec<MemberMatch> {
    members
        .iter()
        .map(|member| {
            let met = criteria_met(member, destination);
            let percentage = rounded_percentage(met as u64, CRITERIA_COUNT as u64);

            MemberMatch {
                member_id: member.id.clone(),
                name: member.name.clone(),
                criteria_met: met,
                percentage,
                level: thresholds.level(percentage),
            }
        })
        .collect()
}

/// `numerator / denominator * 100`, rounded half up, in integer arithmetic
///
/// A zero denominator yields 0. The result is clamped to 100.
#[inline]
pub fn rounded_percentage(numerator: u64, denominator: u64) -> u8 {
    if denominator == 0 {
        return 0;
    }

    // round(100n / d) == floor((200n + d) / 2d) for non-negative n
    let rounded = (numerator * 200 + denominator) / (denominator * 2);
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CrowdPreference;

    fn create_member(id: &str, budget_max: u32, seasons: &[&str], interests: &[&str]) -> Member {
        Member {
            id: id.to_string(),
            name: format!("Member {}", id),
            budget_min: 0,
            budget_max,
            seasons: seasons.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            crowd_preference: CrowdPreference::Okay,
            avatar: None,
        }
    }

    fn create_destination(cost: u32, season: &str, category: &[&str]) -> Destination {
        Destination {
            id: "jonker".to_string(),
            name: "Jonker Street & Chinatown".to_string(),
            cost,
            season: season.to_string(),
            category: category.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            duration: 1,
            image: None,
        }
    }

    #[test]
    fn test_full_match() {
        let member = create_member("1", 1000, &["CNY"], &["Food"]);
        let destination = create_destination(600, "CNY", &["Food", "Culture"]);

        assert_eq!(individual_match(&member, &destination), 100);
    }

    #[test]
    fn test_no_match() {
        let member = create_member("1", 500, &["Raya"], &["Beach"]);
        let destination = create_destination(600, "CNY", &["Food", "Culture"]);

        assert_eq!(individual_match(&member, &destination), 0);
    }

    #[test]
    fn test_partial_matches_round_half_up() {
        let destination = create_destination(600, "CNY", &["Food"]);

        let one = create_member("1", 1000, &["Raya"], &["Beach"]);
        let two = create_member("2", 1000, &["CNY"], &["Beach"]);

        assert_eq!(individual_match(&one, &destination), 33);
        assert_eq!(individual_match(&two, &destination), 67);
    }

    #[test]
    fn test_group_match_rounds_once() {
        let destination = create_destination(600, "CNY", &["Food"]);

        let members = vec![
            create_member("1", 1000, &["Raya"], &["Beach"]),
            create_member("2", 1000, &["CNY"], &["Beach"]),
        ];
        assert_eq!(group_match(&members, &destination), 50);

        // 7 of 12 criteria -> 58.3 -> 58; the mean of rounded scores would give 59
        let members = vec![
            create_member("1", 1000, &["CNY"], &["Beach"]),
            create_member("2", 1000, &["CNY"], &["Beach"]),
            create_member("3", 1000, &["CNY"], &["Beach"]),
            create_member("4", 1000, &["Raya"], &["Beach"]),
        ];
        assert_eq!(group_match(&members, &destination), 58);
    }

    #[test]
    fn test_group_match_empty_roster() {
        let destination = create_destination(600, "CNY", &["Food"]);
        assert_eq!(group_match(&[], &destination), 0);
    }

    #[test]
    fn test_score_members_levels() {
        let destination = create_destination(600, "CNY", &["Food"]);
        let members = vec![
            create_member("1", 1000, &["CNY"], &["Food"]),
            create_member("2", 1000, &["CNY"], &["Beach"]),
            create_member("3", 100, &["Raya"], &["Beach"]),
        ];

        let scored = score_members(&members, &destination, &MatchThresholds::default());

        assert_eq!(scored.len(), 3);
        assert_eq!(scored[0].percentage, 100);
        assert_eq!(scored[0].level, crate::models::MatchLevel::Strong);
        assert_eq!(scored[1].percentage, 67);
        assert_eq!(scored[1].level, crate::models::MatchLevel::Moderate);
        assert_eq!(scored[2].criteria_met, 0);
        assert_eq!(scored[2].level, crate::models::MatchLevel::Weak);
    }

    #[test]
    fn test_rounded_percentage() {
        assert_eq!(rounded_percentage(0, 0), 0);
        assert_eq!(rounded_percentage(1, 2), 50);
        assert_eq!(rounded_percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(rounded_percentage(5, 5), 100);
    }
}
