use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use server::{config::ServerConfig, routes, server_state::ServerState};
use tokio::net::TcpListener;
use trip_planner_lib::{
    chat::ChatRequest,
    client::{ApiClient, ClientError},
    payment::{PaymentIntentRequest, PaymentIntentStatus, PaymentMethod},
    service::ErrorBody,
    suggestion::{SuggestionRequest, TimeOfDay},
    trip::TripRequest,
};

fn test_config() -> ServerConfig {
    ServerConfig {
        frontend_dir: PathBuf::from("does/not/exist"),
        environment: "test".into(),
        ..ServerConfig::default()
    }
}

/// Serves the router on an ephemeral local port and returns its base URL.
async fn spawn_server(config: ServerConfig) -> String {
    let state = Arc::new(ServerState::new(config).unwrap());
    let app = routes::router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn plan_nyc_to_la() {
    let base = spawn_server(test_config()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/trips/plan"))
        .json(&json!({ "origin": "NYC", "destination": "LA" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["origin"], "NYC");
    assert_eq!(body["destination"], "LA");
    assert!(!body["itinerary"].as_array().unwrap().is_empty());
    assert_eq!(body["mock"], true);
}

#[tokio::test]
async fn plan_echoes_any_text_unchanged() {
    let client = ApiClient::new(&spawn_server(test_config()).await).unwrap();

    for (origin, destination) in [("", ""), ("São Paulo", "Reykjavík"), ("<b>x</b>", "\"quoted\""), ("  padded  ", "新宿")] {
        let plan = client.plan_trip(&TripRequest::new(origin, destination)).await.unwrap();
        assert_eq!(plan.origin, origin);
        assert_eq!(plan.destination, destination);
    }
}

#[tokio::test]
async fn plan_rejects_reversed_dates() {
    let client = ApiClient::new(&spawn_server(test_config()).await).unwrap();

    let mut request = TripRequest::new("Delhi", "Agra");
    request.start_date = "2025-04-10".parse().ok();
    request.end_date = "2025-04-01".parse().ok();

    match client.plan_trip(&request).await {
        Err(ClientError::Status { status, body: Some(body), .. }) => {
            assert_eq!(status, 422);
            assert_eq!(body.error, "validation_error");
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn plan_with_missing_destination_is_unprocessable() {
    let base = spawn_server(test_config()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/trips/plan"))
        .json(&json!({ "origin": "NYC" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "unprocessable_entity");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let base = spawn_server(test_config()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .header("content-type", "application/json")
        .body("{\"message\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "bad_request");
}

#[tokio::test]
async fn chat_hello_returns_a_reply() {
    let client = ApiClient::new(&spawn_server(test_config()).await).unwrap();

    let reply = client.chat(&ChatRequest::new("hello")).await.unwrap();
    assert!(!reply.reply.is_empty());
    assert_eq!(reply.message, "hello");
}

#[tokio::test]
async fn chat_with_empty_message_is_rejected() {
    let client = ApiClient::new(&spawn_server(test_config()).await).unwrap();

    let err = client.chat(&ChatRequest::new("   ")).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 422, .. }), "{err:?}");
}

#[tokio::test]
async fn payment_intent_accepts_empty_and_full_bodies() {
    let base = spawn_server(test_config()).await;
    let http = reqwest::Client::new();

    let response = http.post(format!("{base}/api/payments/intent")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert!(body["id"].as_str().unwrap().starts_with("pi_mock_"));
    assert_eq!(body["currency"], "INR");

    let client = ApiClient::new(&base).unwrap();
    let intent = client
        .create_payment_intent(&PaymentIntentRequest {
            amount: Some(250_000),
            currency: Some("usd".into()),
            booking_id: Some("booking-7".into()),
            payment_method: Some(PaymentMethod::CreditCard),
            description: Some("Goa weekend".into()),
        })
        .await
        .unwrap();

    assert!(intent.id.starts_with("pi_mock_"));
    assert_eq!(intent.amount, 250_000);
    assert_eq!(intent.currency, "USD");
    assert_eq!(intent.status, PaymentIntentStatus::RequiresConfirmation);
    assert_eq!(intent.booking_id.as_deref(), Some("booking-7"));
}

#[tokio::test]
async fn payment_intent_succeeds_for_any_object_body() {
    let base = spawn_server(test_config()).await;
    let http = reqwest::Client::new();

    let bodies = [
        json!({}),
        json!({ "currency": "dollars" }),
        json!({ "amount": "100" }),
        json!({ "amount": 12.5 }),
        json!({ "amount": -3, "payment_method": "paypal" }),
        json!({ "booking_id": 7, "extra": { "nested": [1, 2] } }),
        json!({ "currency": null, "description": false }),
    ];

    for body in bodies {
        let response = http
            .post(format!("{base}/api/payments/intent"))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{body}");
        let intent: Value = response.json().await.unwrap();
        assert!(intent["id"].as_str().unwrap().starts_with("pi_mock_"), "{body}");
    }

    let client = ApiClient::new(&base).unwrap();
    let request = PaymentIntentRequest {
        currency: Some("rupees".into()),
        ..Default::default()
    };
    assert_eq!(client.create_payment_intent(&request).await.unwrap().currency, "INR");
}

#[tokio::test]
async fn plan_with_huge_budget_is_rejected() {
    let base = spawn_server(test_config()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/trips/plan"))
        .json(&json!({ "origin": "NYC", "destination": "LA", "budget": 1e307 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "validation_error");
}

#[tokio::test]
async fn metrics_count_requests_by_route() {
    let base = spawn_server(test_config()).await;
    let client = ApiClient::new(&base).unwrap();

    client.health().await.unwrap();
    client.chat(&ChatRequest::new("")).await.unwrap_err();

    let response = reqwest::get(client.endpoints().metrics()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = response.text().await.unwrap();

    let requests = text
        .lines()
        .find(|line| line.starts_with("http_requests_total{") && line.contains("endpoint=\"/api/health\""))
        .unwrap_or_else(|| panic!("{text}"));
    assert!(requests.contains("status=\"200\""), "{requests}");

    let errors = text
        .lines()
        .find(|line| line.starts_with("http_errors_total{") && line.contains("endpoint=\"/api/chat\""))
        .unwrap_or_else(|| panic!("{text}"));
    assert!(errors.contains("status=\"422\""), "{errors}");

    let without_metrics = spawn_server(ServerConfig { metrics: false, ..test_config() }).await;
    let response = reqwest::get(format!("{without_metrics}/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let root: Value = reqwest::get(&without_metrics).await.unwrap().json().await.unwrap();
    assert_eq!(root["metrics"], "disabled");
}

#[tokio::test]
async fn suggestions_follow_preferences() {
    let client = ApiClient::new(&spawn_server(test_config()).await).unwrap();

    let list = client
        .suggestions(&SuggestionRequest {
            location: "Jaipur".into(),
            preferences: vec!["food".into()],
            time_of_day: TimeOfDay::Evening,
        })
        .await
        .unwrap();

    assert_eq!(list.location, "Jaipur");
    assert_eq!(list.suggestions[0].category, "food");
}

#[tokio::test]
async fn health_and_root_report_the_environment() {
    let base = spawn_server(test_config()).await;
    let client = ApiClient::new(&base).unwrap();

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.environment, "test");

    let root: Value = reqwest::get(&base).await.unwrap().json().await.unwrap();
    assert_eq!(root["documentation"], "/docs");
    assert_eq!(root["health"], "/api/health");
    assert_eq!(root["metrics"], "/metrics");
}

#[tokio::test]
async fn every_response_carries_request_id_and_timing() {
    let base = spawn_server(test_config()).await;
    let http = reqwest::Client::new();

    let response = http.get(format!("{base}/api/health")).send().await.unwrap();
    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(request_id.len(), 36);
    let process_time: f64 = response.headers()["x-process-time"].to_str().unwrap().parse().unwrap();
    assert!(process_time >= 0.0);

    let response = http
        .get(format!("{base}/api/health"))
        .header("x-request-id", "caller-supplied-1")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "caller-supplied-1");
}

#[tokio::test]
async fn unknown_paths_get_a_json_404() {
    let base = spawn_server(test_config()).await;

    let response = reqwest::Client::new()
        .get(format!("{base}/api/v1/nope"))
        .header("x-request-id", "lost-1")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "not_found");
    assert_eq!(body.request_id.as_deref(), Some("lost-1"));
    assert!(body.message.contains("/api/v1/nope"));
}

#[tokio::test]
async fn docs_are_served_unless_disabled() {
    let base = spawn_server(test_config()).await;

    let page = reqwest::get(format!("{base}/docs")).await.unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    let html = page.text().await.unwrap();
    assert!(html.contains("/api/trips/plan"));
    assert!(html.contains("/api/payments/intent"));

    let openapi: Value = reqwest::get(format!("{base}/openapi.json")).await.unwrap().json().await.unwrap();
    assert!(openapi["paths"]["/api/chat"]["post"].is_object());

    let without_docs = spawn_server(ServerConfig { docs: false, ..test_config() }).await;
    let response = reqwest::get(format!("{without_docs}/docs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let root: Value = reqwest::get(&without_docs).await.unwrap().json().await.unwrap();
    assert_eq!(root["documentation"], "disabled");
}

#[tokio::test]
async fn client_only_talks_to_its_configured_base() {
    let first = spawn_server(ServerConfig { environment: "first".into(), ..test_config() }).await;
    let second = spawn_server(ServerConfig { environment: "second".into(), ..test_config() }).await;

    let client = ApiClient::new(&second).unwrap();
    assert_eq!(client.endpoints().base_url(), second);
    assert_eq!(client.health().await.unwrap().environment, "second");

    let client = ApiClient::new(&format!("{first}/")).unwrap();
    assert_eq!(client.health().await.unwrap().environment, "first");
}

#[tokio::test]
async fn dashboard_is_served_when_built() {
    let dir = std::env::temp_dir().join(format!("trip-planner-dashboard-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>dashboard</html>").unwrap();

    let base = spawn_server(ServerConfig { frontend_dir: dir.clone(), ..test_config() }).await;

    let index = reqwest::get(format!("{base}/dashboard/index.html")).await.unwrap();
    assert_eq!(index.status(), StatusCode::OK);
    assert_eq!(index.text().await.unwrap(), "<html>dashboard</html>");

    let spa_route = reqwest::get(format!("{base}/dashboard/chat")).await.unwrap();
    assert_eq!(spa_route.text().await.unwrap(), "<html>dashboard</html>");

    std::fs::remove_dir_all(dir).unwrap();
}
