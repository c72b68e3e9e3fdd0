use gloo_console::{error, info};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use trip_planner_lib::{
    chat::ChatRequest,
    endpoints::{ApiEndpoints, DEFAULT_BASE_URL},
    payment::PaymentIntentRequest,
    trip::TripRequest,
};

/// Base URL of the API service, taken from `API_BASE_URL` when the dashboard is built.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

pub fn endpoints() -> Result<ApiEndpoints, String> {
    ApiEndpoints::new(api_base_url()).map_err(|err| format!("Invalid API_BASE_URL: {err}"))
}

/// Raw answer of the API. The body is kept as JSON so the dashboard can show it as is.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn pretty_body(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

async fn post_json<Body>(url: String, body: &Body) -> Result<ApiResponse, String>
where
    Body: Serialize + ?Sized,
{
    info!(format!("POST {url}"));

    let request = Request::post(&url)
        .json(body)
        .map_err(|err| format!("Failed to encode request: {err}"))?;

    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            error!(format!("Request to {url} failed: {err}"));
            return Err(format!("Could not reach {url}: {err}"));
        }
    };

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| format!("Failed to read response: {err}"))?;
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

    Ok(ApiResponse { status, body })
}

pub async fn plan_trip(request: &TripRequest) -> Result<ApiResponse, String> {
    post_json(endpoints()?.plan_trip(), request).await
}

pub async fn chat(request: &ChatRequest) -> Result<ApiResponse, String> {
    post_json(endpoints()?.chat(), request).await
}

pub async fn create_payment_intent(request: &PaymentIntentRequest) -> Result<ApiResponse, String> {
    post_json(endpoints()?.payment_intent(), request).await
}
