use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub location: String,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SuggestionList {
    pub location: String,
    pub time_of_day: TimeOfDay,
    pub suggestions: Vec<Suggestion>,
}
