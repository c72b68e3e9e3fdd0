use chrono::Utc;
use trip_planner_lib::{
    chat::{ChatReply, ChatRequest},
    payment::{PaymentIntent, PaymentIntentRequest},
    suggestion::{SuggestionList, SuggestionRequest},
    trip::{TripPlan, TripRequest},
};

use crate::{
    chat::ChatAssistant,
    itinerary::ItineraryPlanner,
    payment::{normalize_currency, PaymentGateway},
    suggestions::SuggestionEngine,
    PlannerError, DEFAULT_CURRENCY,
};

#[derive(Debug, Clone)]
pub struct PlannerServices {
    currency: String,
    itinerary: ItineraryPlanner,
    chat: ChatAssistant,
    payments: PaymentGateway,
    suggestions: SuggestionEngine,
}

/// The public interface for all trip planner mock logic.
impl PlannerServices {
    pub fn new(currency: &str) -> Result<Self, PlannerError> {
        let currency = normalize_currency(currency)?;

        Ok(Self {
            itinerary: ItineraryPlanner::new(currency.clone()),
            chat: ChatAssistant::new(),
            payments: PaymentGateway::new(currency.clone()),
            suggestions: SuggestionEngine::new(),
            currency,
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn plan_trip(&self, request: &TripRequest) -> Result<TripPlan, PlannerError> {
        let plan = self.itinerary.plan(request, Utc::now().date_naive())?;
        tracing::info!(trip_id = %plan.trip_id, days = plan.duration_days, "Planned mock trip");
        Ok(plan)
    }

    pub fn chat(&self, request: &ChatRequest) -> Result<ChatReply, PlannerError> {
        self.chat.reply(request)
    }

    pub fn create_payment_intent(&self, request: &PaymentIntentRequest) -> PaymentIntent {
        self.payments.create_intent(request)
    }

    pub fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionList, PlannerError> {
        self.suggestions.suggest(request)
    }
}

impl Default for PlannerServices {
    fn default() -> Self {
        let currency = DEFAULT_CURRENCY.to_string();
        Self {
            itinerary: ItineraryPlanner::new(currency.clone()),
            chat: ChatAssistant::new(),
            payments: PaymentGateway::new(currency.clone()),
            suggestions: SuggestionEngine::new(),
            currency,
        }
    }
}
