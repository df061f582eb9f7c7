use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::availability::{AvailableDayList, TimeSlotList},
    error::AppResult,
    response::ApiResponse,
    services::availability_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/available-days", get(list_days))
        .route("/available-time-slots", get(list_time_slots))
}

#[utoipa::path(
    get,
    path = "/api/available-days",
    responses(
        (status = 200, description = "Configured days, by date", body = ApiResponse<AvailableDayList>)
    ),
    tag = "Availability"
)]
pub async fn list_days(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<AvailableDayList>>> {
    Ok(Json(availability_service::list_days(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/available-time-slots",
    responses(
        (status = 200, description = "Configured daily time slots, by time", body = ApiResponse<TimeSlotList>)
    ),
    tag = "Availability"
)]
pub async fn list_time_slots(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<TimeSlotList>>> {
    Ok(Json(availability_service::list_slots(&state).await?))
}
