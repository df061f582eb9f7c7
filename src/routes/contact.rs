use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::contact::ContactRequest,
    error::AppResult,
    middleware::json::ValidatedJson,
    response::{Ack, ApiResponse},
    services::contact_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message received", body = ApiResponse<Ack>),
        (status = 400, description = "Invalid payload")
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactRequest>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    Ok(Json(contact_service::submit_message(&state, payload).await?))
}
