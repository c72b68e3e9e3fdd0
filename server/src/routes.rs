use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use trip_planner_lib::endpoints::{
    CHAT_PATH, DOCS_PATH, HEALTH_PATH, METRICS_PATH, OPENAPI_PATH, PAYMENT_INTENT_PATH, PLAN_TRIP_PATH, SUGGESTIONS_PATH,
};

use crate::{
    docs,
    handlers::{chat, payments, suggestions, system, trips},
    middleware::request_context,
    server_state::ServerState,
};

pub const DASHBOARD_PATH: &str = "/dashboard";

pub fn router(state: Arc<ServerState>) -> Router {
    let mut router = Router::new()
        .route("/", get(system::root))
        .route(HEALTH_PATH, get(system::health))
        .route(PLAN_TRIP_PATH, post(trips::plan_trip))
        .route(CHAT_PATH, post(chat::chat))
        .route(PAYMENT_INTENT_PATH, post(payments::create_payment_intent))
        .route(SUGGESTIONS_PATH, post(suggestions::suggest));

    if state.config.docs {
        router = router
            .route(DOCS_PATH, get(docs::docs_page))
            .route(OPENAPI_PATH, get(docs::openapi_json));
    }

    if state.config.metrics {
        router = router.route(METRICS_PATH, get(system::metrics));
    }

    let frontend_dir = &state.config.frontend_dir;
    if frontend_dir.is_dir() {
        tracing::info!("Serving dashboard from {}", frontend_dir.display());
        let index = frontend_dir.join("index.html");
        router = router.nest_service(DASHBOARD_PATH, ServeDir::new(frontend_dir).fallback(ServeFile::new(index)));
    } else {
        tracing::debug!("No dashboard build at {}, not serving {DASHBOARD_PATH}", frontend_dir.display());
    }

    router
        .fallback(system::not_found)
        .layer(CorsLayer::permissive())
        .layer(from_fn_with_state(state.clone(), request_context))
        .with_state(state)
}
