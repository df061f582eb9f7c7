use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    booking,
    dto::appointments::{AppointmentList, CreateAppointmentRequest, DayAvailability},
    error::AppResult,
    middleware::{extract::ApiPath, json::ValidatedJson},
    models::Appointment,
    response::ApiResponse,
    services::appointment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_appointment))
        .route("/availability/{date}", get(day_availability))
        .route("/{date}", get(list_by_date))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{date}",
    params(
        ("date" = String, Path, description = "Date as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Appointments booked on the date", body = ApiResponse<AppointmentList>),
        (status = 400, description = "Malformed date")
    ),
    tag = "Appointments"
)]
pub async fn list_by_date(
    State(state): State<AppState>,
    ApiPath(date): ApiPath<String>,
) -> AppResult<Json<ApiResponse<AppointmentList>>> {
    let resp = appointment_service::list_by_date(&state, &date).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/appointments/availability/{date}",
    params(
        ("date" = String, Path, description = "Date as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Time slots still bookable on the date", body = ApiResponse<DayAvailability>),
        (status = 400, description = "Malformed date")
    ),
    tag = "Appointments"
)]
pub async fn day_availability(
    State(state): State<AppState>,
    ApiPath(date): ApiPath<String>,
) -> AppResult<Json<ApiResponse<DayAvailability>>> {
    let resp = appointment_service::availability_for(&state, &date, booking::today()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = ApiResponse<Appointment>),
        (status = 400, description = "Invalid payload or slot not available")
    ),
    tag = "Appointments"
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAppointmentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Appointment>>)> {
    let resp = appointment_service::create_appointment(&state, payload, booking::today()).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
