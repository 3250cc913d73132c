use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Trip participant with budget, season and interest preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_budget_range"))]
pub struct Member {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "budgetMin")]
    pub budget_min: u32,
    #[serde(rename = "budgetMax")]
    pub budget_max: u32,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "crowdPreference", default)]
    pub crowd_preference: CrowdPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Member {
    /// First word of the member's name, used in short notes
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Whether `cost` falls inside the member's budget range (inclusive)
    pub fn budget_covers(&self, cost: u32) -> bool {
        cost >= self.budget_min && cost <= self.budget_max
    }
}

fn validate_budget_range(member: &Member) -> Result<(), ValidationError> {
    if member.budget_min > member.budget_max {
        let mut err = ValidationError::new("budget_range");
        err.message = Some("budgetMin must not exceed budgetMax".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrowdPreference {
    Avoid,
    Okay,
    #[default]
    NoPreference,
}

impl CrowdPreference {
    /// All variants in tie-break order
    pub const ALL: [CrowdPreference; 3] = [Self::Avoid, Self::Okay, Self::NoPreference];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Avoid => "Avoid Crowds",
            Self::Okay => "Crowds Okay",
            Self::NoPreference => "No Preference",
        }
    }
}

/// Candidate travel location
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Destination {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub cost: u32,
    pub season: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Number of days spent at this destination
    #[serde(default = "default_duration")]
    #[validate(range(max = 365))]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_duration() -> u32 { 1 }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Budget,
    Interest,
    Season,
}

/// Conflict severity, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown severity '{}', expected one of: high, medium, low", other)),
        }
    }
}

/// Preference mismatch between a member and the selected destinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    #[serde(rename = "memberId")]
    pub member_id: String,
    #[serde(rename = "memberName")]
    pub member_name: String,
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub message: String,
    pub severity: Severity,
}

/// Per-severity conflict tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Strong,
    Moderate,
    Weak,
}

/// Match of a single member against a destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberMatch {
    #[serde(rename = "memberId")]
    pub member_id: String,
    pub name: String,
    /// Number of criteria satisfied (0..=3)
    #[serde(rename = "criteriaMet")]
    pub criteria_met: u8,
    pub percentage: u8,
    pub level: MatchLevel,
}

/// Scored destination with group and individual matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationMatch {
    #[serde(rename = "destinationId")]
    pub destination_id: String,
    pub name: String,
    pub cost: u32,
    pub season: String,
    pub category: Vec<String>,
    pub duration: u32,
    #[serde(rename = "groupMatch")]
    pub group_match: u8,
    pub level: MatchLevel,
    #[serde(rename = "individualMatches")]
    pub individual_matches: Vec<MemberMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One day of the planned trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    #[serde(rename = "destinationId")]
    pub destination_id: String,
    #[serde(rename = "destinationName")]
    pub destination_name: String,
}

/// Day-by-day layout of the selected destinations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
    #[serde(rename = "totalDays")]
    pub total_days: u32,
    #[serde(rename = "destinationCount")]
    pub destination_count: usize,
    #[serde(rename = "totalCost")]
    pub total_cost: u64,
}

/// Label with the number of members that chose it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrowdSummary {
    pub preference: CrowdPreference,
    pub label: &'static str,
    pub members: usize,
}

/// Dashboard aggregates over the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    #[serde(rename = "groupSize")]
    pub group_size: usize,
    #[serde(rename = "averageBudgetMin")]
    pub average_budget_min: u32,
    #[serde(rename = "averageBudgetMax")]
    pub average_budget_max: u32,
    #[serde(rename = "seasonCounts")]
    pub season_counts: Vec<LabelCount>,
    #[serde(rename = "interestCounts")]
    pub interest_counts: Vec<LabelCount>,
    #[serde(rename = "commonInterests")]
    pub common_interests: Vec<String>,
    #[serde(rename = "crowdPreference")]
    pub crowd_preference: Option<CrowdSummary>,
    /// Mean cost of the selected destinations
    #[serde(rename = "tripCost")]
    pub trip_cost: u32,
    #[serde(rename = "budgetCompatibility")]
    pub budget_compatibility: u8,
}

/// Score thresholds used to bucket percentages into match levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchThresholds {
    pub strong: u8,
    pub moderate: u8,
}

impl MatchThresholds {
    pub fn level(&self, percentage: u8) -> MatchLevel {
        if percentage >= self.strong {
            MatchLevel::Strong
        } else if percentage >= self.moderate {
            MatchLevel::Moderate
        } else {
            MatchLevel::Weak
        }
    }
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            strong: 70,
            moderate: 40,
        }
    }
}
