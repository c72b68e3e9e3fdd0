use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PAYMENT_INTENT_OBJECT: &str = "payment_intent";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    NetBanking,
    Wallet,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
}

/// Body of `POST /api/payments/intent`. Every field is optional, and so is the body itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PaymentIntentRequest {
    /// Amount in minor currency units (paise, cents).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    pub object: String,
    pub amount: u64,
    pub currency: String,
    pub status: PaymentIntentStatus,
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub livemode: bool,
    pub created_at: DateTime<Utc>,
}
