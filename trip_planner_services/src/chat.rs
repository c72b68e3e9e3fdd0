use chrono::Utc;
use trip_planner_lib::chat::{ChatReply, ChatRequest};

use crate::{itinerary::emergency_contacts, PlannerError};

const MAX_ECHO_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Greeting,
    Weather,
    Budget,
    Food,
    Stay,
    Transport,
    Safety,
    Itinerary,
}

// Checked in order, the first topic with a matching word wins.
const TOPICS: &[(Topic, &[&str])] = &[
    (Topic::Safety, &["safe", "safety", "emergency", "police", "hospital", "ambulance", "help"]),
    (Topic::Budget, &["budget", "cost", "costs", "price", "cheap", "expensive", "money", "afford"]),
    (Topic::Weather, &["weather", "rain", "temperature", "climate", "season", "monsoon"]),
    (Topic::Food, &["food", "eat", "restaurant", "restaurants", "dinner", "lunch", "breakfast", "vegetarian"]),
    (Topic::Stay, &["hotel", "hotels", "stay", "hostel", "accommodation", "resort"]),
    (Topic::Transport, &["train", "bus", "flight", "flights", "taxi", "transport", "airport", "metro"]),
    (Topic::Itinerary, &["plan", "itinerary", "trip", "days", "schedule", "visit"]),
    (Topic::Greeting, &["hello", "hi", "hey", "namaste", "morning", "evening"]),
];

/// Canned, keyword driven travel assistant.
#[derive(Debug, Clone, Default)]
pub struct ChatAssistant;

impl ChatAssistant {
    pub fn new() -> Self {
        Self
    }

    pub fn reply(&self, request: &ChatRequest) -> Result<ChatReply, PlannerError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(PlannerError::EmptyMessage);
        }

        let context = request.context.clone().unwrap_or_default();
        let conversation_id = context
            .conversation_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let destination = context
            .destination
            .filter(|destination| !destination.trim().is_empty())
            .unwrap_or_else(|| "your destination".to_string());

        let topic = detect_topic(message);
        tracing::debug!(?topic, conversation_id = %conversation_id, message_length = message.len(), "Answering chat message");

        let reply = match topic {
            Some(topic) => canned_reply(topic, &destination),
            None => fallback_reply(message),
        };

        Ok(ChatReply {
            conversation_id,
            message: request.message.clone(),
            reply,
            mock: true,
            created_at: Utc::now(),
        })
    }
}

fn detect_topic(message: &str) -> Option<Topic> {
    let lowered = message.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    TOPICS
        .iter()
        .find(|(_, keywords)| words.iter().any(|word| keywords.contains(word)))
        .map(|(topic, _)| *topic)
}

fn canned_reply(topic: Topic, destination: &str) -> String {
    match topic {
        Topic::Greeting => "Hello! I'm your travel assistant. Ask me about itineraries, budgets, food, stays or getting around.".to_string(),
        Topic::Weather => format!("Weather in {destination} is usually mild this time of year. Pack layers and a light rain jacket, and check the forecast the day before you travel."),
        Topic::Budget => format!("To stretch your budget in {destination}, travel midweek, book stays early, eat where the locals eat and use public transport for short hops."),
        Topic::Food => format!("Try the local specialities in {destination}: busy street stalls are usually the freshest, and family-run restaurants near the old town are a safe bet."),
        Topic::Stay => format!("For {destination}, pick a stay close to the sights you care most about. Homestays and boutique hotels often beat chains on price and character."),
        Topic::Transport => format!("Getting around {destination}: trains and metro are cheapest for longer hops, app-based taxis work well at night. Book intercity tickets a few days ahead."),
        Topic::Safety => {
            let contacts = emergency_contacts();
            format!(
                "Stay aware of your belongings in crowded places around {destination}. Emergency numbers: police {}, ambulance {}, tourist helpline {}.",
                contacts.police, contacts.ambulance, contacts.tourist_helpline
            )
        }
        Topic::Itinerary => format!("A good rhythm for {destination} is one major sight in the morning, something relaxed in the afternoon and a local dinner. Use the trip planner tab for a day-by-day plan."),
    }
}

fn fallback_reply(message: &str) -> String {
    let mut echoed: String = message.chars().take(MAX_ECHO_CHARS).collect();
    if message.chars().count() > MAX_ECHO_CHARS {
        echoed.push('…');
    }

    format!("You asked: \"{echoed}\". I'm a mock assistant, so here is a general tip: plan one major sight per half day and leave room to rest.")
}
