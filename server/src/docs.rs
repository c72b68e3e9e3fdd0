//! Hand-written API reference served at `/docs` and `/openapi.json`.

use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};
use trip_planner_lib::endpoints::{
    CHAT_PATH, HEALTH_PATH, METRICS_PATH, PAYMENT_INTENT_PATH, PLAN_TRIP_PATH, SUGGESTIONS_PATH,
};

use crate::{handlers::system::SERVICE_NAME, server_state::ServerState};

struct Operation {
    method: &'static str,
    path: &'static str,
    summary: &'static str,
    example: Option<fn() -> Value>,
}

const OPERATIONS: &[Operation] = &[
    Operation {
        method: "get",
        path: "/",
        summary: "Service information",
        example: None,
    },
    Operation {
        method: "get",
        path: HEALTH_PATH,
        summary: "Health check",
        example: None,
    },
    Operation {
        method: "post",
        path: PLAN_TRIP_PATH,
        summary: "Plan a mock trip between two places. Only origin and destination are required.",
        example: Some(plan_trip_example),
    },
    Operation {
        method: "post",
        path: CHAT_PATH,
        summary: "Ask the mock travel assistant. The message must not be empty.",
        example: Some(chat_example),
    },
    Operation {
        method: "post",
        path: PAYMENT_INTENT_PATH,
        summary: "Create a mock payment intent. Any body is accepted, amount is in minor units and unusable fields fall back to defaults.",
        example: Some(payment_intent_example),
    },
    Operation {
        method: "post",
        path: SUGGESTIONS_PATH,
        summary: "Canned activity suggestions for a place and time of day.",
        example: Some(suggestions_example),
    },
    Operation {
        method: "get",
        path: METRICS_PATH,
        summary: "Prometheus metrics in text format, unless metrics are disabled.",
        example: None,
    },
];

fn plan_trip_example() -> Value {
    json!({
        "origin": "NYC",
        "destination": "LA",
        "start_date": "2025-03-01",
        "end_date": "2025-03-04",
        "travelers": 2,
        "budget": 40000.0,
        "themes": ["foodie", "heritage"]
    })
}

fn chat_example() -> Value {
    json!({ "message": "hello", "context": { "destination": "Goa" } })
}

fn payment_intent_example() -> Value {
    json!({
        "amount": 125000,
        "currency": "INR",
        "booking_id": "booking-123",
        "payment_method": "upi"
    })
}

fn suggestions_example() -> Value {
    json!({ "location": "Jaipur", "preferences": ["food"], "time_of_day": "evening" })
}

pub fn openapi_document(environment: &str) -> Value {
    let mut paths = serde_json::Map::new();

    for operation in OPERATIONS {
        let mut spec = json!({
            "summary": operation.summary,
            "responses": {
                "200": { "description": "Success", "content": { "application/json": {} } },
            },
        });

        if let Some(example) = operation.example {
            spec["requestBody"] = json!({
                "required": operation.path != PAYMENT_INTENT_PATH,
                "content": { "application/json": { "example": example() } },
            });
            if operation.path != PAYMENT_INTENT_PATH {
                spec["responses"]["400"] = json!({ "description": "Malformed JSON" });
                spec["responses"]["422"] = json!({ "description": "Invalid request" });
            }
        }

        let entry = paths
            .entry(operation.path.to_string())
            .or_insert_with(|| json!({}));
        entry[operation.method] = spec;
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "description": format!("Mock trip planning, chat and payment endpoints ({environment})."),
        },
        "paths": Value::Object(paths),
    })
}

pub async fn openapi_json(State(state): State<Arc<ServerState>>) -> Json<Value> {
    Json(openapi_document(&state.config.environment))
}

pub async fn docs_page() -> Html<String> {
    let mut sections = String::new();

    for operation in OPERATIONS {
        sections.push_str(&format!(
            "<section><h2><span class=\"method\">{}</span> <code>{}</code></h2><p>{}</p>",
            operation.method.to_uppercase(),
            operation.path,
            operation.summary
        ));

        if let Some(example) = operation.example {
            let body = serde_json::to_string_pretty(&example()).unwrap_or_default();
            sections.push_str(&format!("<pre>{}</pre>", escape_html(&body)));
        }

        sections.push_str("</section>\n");
    }

    Html(format!(
        "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\">
<title>{SERVICE_NAME} docs</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
.method {{ background: #FF6B6B; color: white; padding: 0 .4rem; border-radius: 4px; }}
pre {{ background: #f0f2f6; padding: 1rem; border-radius: 8px; }}
</style>
</head>
<body>
<h1>{SERVICE_NAME} {}</h1>
<p>Machine readable: <a href=\"/openapi.json\">/openapi.json</a></p>
{sections}
</body>
</html>",
        env!("CARGO_PKG_VERSION")
    ))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
