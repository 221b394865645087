use serde::{Deserialize, Serialize};

/// Top-level shape of `tips.json`
#[derive(Debug, Clone, Deserialize)]
pub struct TipsDocument {
    pub states: Vec<StateTip>,
}

/// Cultural guidance for visitors to one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTip {
    pub name: String,
    pub cultural_tips: Vec<String>,
    pub local_phrases: Vec<String>,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub famous_foods: Vec<String>,
}
