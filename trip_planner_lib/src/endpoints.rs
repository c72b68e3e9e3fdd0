//! Paths of the HTTP surface, shared by the server router and every client.

use thiserror::Error;

pub const PLAN_TRIP_PATH: &str = "/api/trips/plan";
pub const CHAT_PATH: &str = "/api/chat";
pub const PAYMENT_INTENT_PATH: &str = "/api/payments/intent";
pub const SUGGESTIONS_PATH: &str = "/api/suggestions";
pub const HEALTH_PATH: &str = "/api/health";
pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/openapi.json";
pub const METRICS_PATH: &str = "/metrics";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("base url is empty")]
    Empty,
    #[error("base url must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),
    #[error("base url must not carry a query or fragment, got {0:?}")]
    QueryOrFragment(String),
}

/// Absolute URLs of the API, all derived from one configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    pub fn new(base_url: &str) -> Result<Self, EndpointError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(EndpointError::UnsupportedScheme(trimmed.to_string()));
        }

        if trimmed.contains('?') || trimmed.contains('#') {
            return Err(EndpointError::QueryOrFragment(trimmed.to_string()));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn plan_trip(&self) -> String {
        self.url(PLAN_TRIP_PATH)
    }

    pub fn chat(&self) -> String {
        self.url(CHAT_PATH)
    }

    pub fn payment_intent(&self) -> String {
        self.url(PAYMENT_INTENT_PATH)
    }

    pub fn suggestions(&self) -> String {
        self.url(SUGGESTIONS_PATH)
    }

    pub fn health(&self) -> String {
        self.url(HEALTH_PATH)
    }

    pub fn docs(&self) -> String {
        self.url(DOCS_PATH)
    }

    pub fn metrics(&self) -> String {
        self.url(METRICS_PATH)
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
