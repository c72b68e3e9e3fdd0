//! Native HTTP client for the planner API.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{
    chat::{ChatReply, ChatRequest},
    endpoints::{ApiEndpoints, EndpointError},
    payment::{PaymentIntent, PaymentIntentRequest},
    service::{ErrorBody, HealthStatus},
    suggestion::{SuggestionList, SuggestionRequest},
    trip::{TripPlan, TripRequest},
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {status}: {message}")]
    Status {
        status: u16,
        message: String,
        body: Option<ErrorBody>,
    },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoints: ApiEndpoints,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let endpoints = ApiEndpoints::new(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoints, http })
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    pub async fn plan_trip(&self, request: &TripRequest) -> Result<TripPlan, ClientError> {
        self.post(self.endpoints.plan_trip(), request).await
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        self.post(self.endpoints.chat(), request).await
    }

    pub async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntent, ClientError> {
        self.post(self.endpoints.payment_intent(), request).await
    }

    pub async fn suggestions(&self, request: &SuggestionRequest) -> Result<SuggestionList, ClientError> {
        self.post(self.endpoints.suggestions(), request).await
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self.http.get(self.endpoints.health()).send().await?;
        Self::decode(response).await
    }

    async fn post<Body, ReturnType>(&self, url: String, body: &Body) -> Result<ReturnType, ClientError>
    where
        Body: Serialize + ?Sized,
        ReturnType: DeserializeOwned,
    {
        let response = self.http.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<ReturnType>(response: reqwest::Response) -> Result<ReturnType, ClientError>
    where
        ReturnType: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<ReturnType>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ErrorBody>(&text).ok();
        let message = body.as_ref().map(|body| body.message.clone()).unwrap_or(text);

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
            body,
        })
    }
}
