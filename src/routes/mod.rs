use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod appointments;
pub mod auth;
pub mod availability;
pub mod catalog;
pub mod contact;
pub mod doc;
pub mod health;
pub mod params;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(availability::router())
        .merge(contact::router())
        .nest("/appointments", appointments::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
