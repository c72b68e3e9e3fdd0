use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use trip_planner_lib::trip::{TripPlan, TripRequest};

use crate::{error::ApiError, server_state::ServerState};

pub async fn plan_trip(
    State(state): State<Arc<ServerState>>,
    WithRejection(Json(request), _): WithRejection<Json<TripRequest>, ApiError>,
) -> Result<Json<TripPlan>, ApiError> {
    let plan = state.services.plan_trip(&request)?;
    Ok(Json(plan))
}
