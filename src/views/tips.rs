//! Local tips and cultural information for one state

use serde::Serialize;

use super::{Panel, Selector, choose};
use crate::data::Datasets;
use crate::models::StateTip;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipsView {
    pub selector: Selector,
    pub body: Panel<StateGuide>,
}

/// Two columns of guidance followed by the food list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateGuide {
    pub state: String,
    pub left: Vec<TipSection>,
    pub right: Vec<TipSection>,
    pub foods: TipSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipSection {
    pub heading: String,
    /// Glyph printed before each item
    pub marker: String,
    pub items: Vec<String>,
}

impl TipSection {
    fn new(heading: &str, marker: &str, items: &[String]) -> Self {
        Self {
            heading: heading.to_string(),
            marker: marker.to_string(),
            items: items.to_vec(),
        }
    }
}

pub fn render(datasets: &Datasets, requested_state: Option<&str>) -> TipsView {
    let states = datasets.state_names();
    let chosen = choose("state", &states, requested_state.map(str::to_string));

    let selector = Selector::new("state", "Select State", &states, chosen.as_ref().ok());
    let body = match chosen.and_then(|state| datasets.tip_for(&state)) {
        Ok(tip) => Panel::Ready(guide(tip)),
        Err(empty) => Panel::Empty(empty),
    };

    TipsView { selector, body }
}

fn guide(tip: &StateTip) -> StateGuide {
    StateGuide {
        state: tip.name.clone(),
        left: vec![
            TipSection::new("Cultural Tips", "•", &tip.cultural_tips),
            TipSection::new("Local Phrases", "•", &tip.local_phrases),
        ],
        right: vec![
            TipSection::new("Do's", "✅", &tip.dos),
            TipSection::new("Don'ts", "❌", &tip.donts),
        ],
        foods: TipSection::new("Famous Foods", "🍽️", &tip.famous_foods),
    }
}
