use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use trip_planner_lib::suggestion::{SuggestionList, SuggestionRequest};

use crate::{error::ApiError, server_state::ServerState};

pub async fn suggest(
    State(state): State<Arc<ServerState>>,
    WithRejection(Json(request), _): WithRejection<Json<SuggestionRequest>, ApiError>,
) -> Result<Json<SuggestionList>, ApiError> {
    Ok(Json(state.services.suggest(&request)?))
}
