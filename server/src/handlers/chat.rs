use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use trip_planner_lib::chat::{ChatReply, ChatRequest};

use crate::{error::ApiError, server_state::ServerState};

pub async fn chat(
    State(state): State<Arc<ServerState>>,
    WithRejection(Json(request), _): WithRejection<Json<ChatRequest>, ApiError>,
) -> Result<Json<ChatReply>, ApiError> {
    Ok(Json(state.services.chat(&request)?))
}
