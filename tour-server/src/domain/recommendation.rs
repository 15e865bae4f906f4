//! Advisory recommendations attached to a plan.

use serde::{Deserialize, Serialize};

/// What area of the trip a recommendation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Safety,
    Comfort,
    Cost,
    Timing,
    Season,
    Route,
}

/// How urgently a recommendation should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single piece of advice for the traveller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// What the traveller should do
    pub action: String,
    /// What doing it changes
    pub impact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_as_type() {
        let rec = PlanningRecommendation {
            kind: RecommendationType::Route,
            priority: Priority::High,
            title: "t".into(),
            description: "d".into(),
            action: "a".into(),
            impact: "i".into(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "route");
        assert_eq!(json["priority"], "high");
    }
}
