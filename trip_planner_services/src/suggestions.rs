use trip_planner_lib::suggestion::{Suggestion, SuggestionList, SuggestionRequest, TimeOfDay};

use crate::PlannerError;

#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine;

impl SuggestionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Canned suggestions for the time of day, with categories the caller prefers listed first.
    pub fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionList, PlannerError> {
        let location = request.location.trim();
        if location.is_empty() {
            return Err(PlannerError::EmptyLocation);
        }

        let preferences: Vec<String> = request.preferences.iter().map(|p| p.trim().to_lowercase()).collect();

        let mut suggestions: Vec<Suggestion> = catalog(request.time_of_day)
            .iter()
            .map(|(name, category, description)| Suggestion {
                name: name.replace("{location}", location),
                category: category.to_string(),
                description: description.replace("{location}", location),
            })
            .collect();

        // Stable, so the catalog order is kept within each group.
        suggestions.sort_by_key(|suggestion| !preferences.contains(&suggestion.category));

        Ok(SuggestionList {
            location: location.to_string(),
            time_of_day: request.time_of_day,
            suggestions,
        })
    }
}

fn catalog(time_of_day: TimeOfDay) -> &'static [(&'static str, &'static str, &'static str)] {
    match time_of_day {
        TimeOfDay::Morning => &[
            ("Sunrise walk in {location}", "sightseeing", "Beat the crowds at the best-known viewpoint."),
            ("Breakfast at a local cafe", "food", "Start the day the way {location} does."),
            ("Museum opening hour", "cultural", "Museums are quietest right after opening."),
        ],
        TimeOfDay::Afternoon => &[
            ("Old town heritage trail", "heritage", "Self-guided loop through the historic centre of {location}."),
            ("Market lunch", "food", "Graze through the food stalls of the central market."),
            ("Craft shopping", "shopping", "Pick up handicrafts made in and around {location}."),
        ],
        TimeOfDay::Evening => &[
            ("Sunset viewpoint", "romantic", "Catch the golden hour over {location}."),
            ("Street food crawl", "food", "Evening is when the best stalls open."),
            ("Live music venue", "nightlife", "Find a small venue with local bands."),
        ],
        TimeOfDay::Night => &[
            ("Night market", "shopping", "Late-night stalls and snacks in {location}."),
            ("Rooftop bar", "nightlife", "City lights from above."),
            ("Guided night walk", "cultural", "Stories and legends of {location} after dark."),
        ],
    }
}
