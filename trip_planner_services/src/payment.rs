use chrono::Utc;
use trip_planner_lib::payment::{PaymentIntent, PaymentIntentRequest, PaymentIntentStatus, PAYMENT_INTENT_OBJECT};

use crate::PlannerError;

pub const INTENT_ID_PREFIX: &str = "pi_mock_";

/// Checks for a three letter alphabetic code and upper-cases it.
pub fn normalize_currency(currency: &str) -> Result<String, PlannerError> {
    let trimmed = currency.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PlannerError::InvalidCurrency(currency.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Stands in for a payment provider. Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct PaymentGateway {
    default_currency: String,
}

impl PaymentGateway {
    pub fn new(default_currency: String) -> Self {
        Self { default_currency }
    }

    /// Never fails: a currency that is not a valid code is replaced by the default one.
    pub fn create_intent(&self, request: &PaymentIntentRequest) -> PaymentIntent {
        let currency = match request.currency.as_deref().map(normalize_currency) {
            Some(Ok(currency)) => currency,
            Some(Err(err)) => {
                tracing::warn!("{err}, using {}", self.default_currency);
                self.default_currency.clone()
            }
            None => self.default_currency.clone(),
        };

        let id_bytes: [u8; 12] = rand::random();
        let secret_bytes: [u8; 8] = rand::random();
        let id = format!("{INTENT_ID_PREFIX}{}", hex::encode(id_bytes));
        let client_secret = format!("{id}_secret_{}", hex::encode(secret_bytes));

        let status = match request.payment_method {
            Some(_) => PaymentIntentStatus::RequiresConfirmation,
            None => PaymentIntentStatus::RequiresPaymentMethod,
        };

        let amount = request.amount.unwrap_or(0);
        tracing::info!(intent_id = %id, amount, currency = %currency, "Created mock payment intent");

        PaymentIntent {
            id,
            object: PAYMENT_INTENT_OBJECT.to_string(),
            amount,
            currency,
            status,
            client_secret,
            payment_method: request.payment_method,
            booking_id: request.booking_id.clone(),
            description: request.description.clone(),
            livemode: false,
            created_at: Utc::now(),
        }
    }
}
