use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde_json::{Map, Value};
use trip_planner_lib::payment::{PaymentIntent, PaymentIntentRequest, PaymentMethod};

use crate::server_state::ServerState;

/// Accepts any body. Known fields are used when their value makes sense, anything else is ignored.
pub async fn create_payment_intent(State(state): State<Arc<ServerState>>, body: Bytes) -> Json<PaymentIntent> {
    let request = lenient_request(&body);
    Json(state.services.create_payment_intent(&request))
}

fn lenient_request(body: &[u8]) -> PaymentIntentRequest {
    if body.iter().all(u8::is_ascii_whitespace) {
        return PaymentIntentRequest::default();
    }

    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            tracing::warn!("Payment intent body is not a JSON object, using defaults");
            return PaymentIntentRequest::default();
        }
        Err(err) => {
            tracing::warn!("Payment intent body is not valid JSON, using defaults: {err}");
            return PaymentIntentRequest::default();
        }
    };

    PaymentIntentRequest {
        amount: fields.get("amount").and_then(minor_units),
        currency: text_field(&fields, "currency"),
        booking_id: text_field(&fields, "booking_id"),
        payment_method: fields
            .get("payment_method")
            .and_then(|value| serde_json::from_value::<PaymentMethod>(value.clone()).ok()),
        description: text_field(&fields, "description"),
    }
}

/// Whole numbers are taken as is, fractional ones are rounded, numeric strings are parsed.
fn minor_units(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|amount| amount.is_finite() && *amount >= 0.0 && *amount < u64::MAX as f64)
                .map(|amount| amount.round() as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
