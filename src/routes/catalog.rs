use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::catalog::{GalleryList, ServiceList, StylistList},
    error::AppResult,
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services))
        .route("/stylists", get(list_stylists))
        .route("/gallery", get(list_gallery))
}

#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "Services offered", body = ApiResponse<ServiceList>)
    ),
    tag = "Catalog"
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ServiceList>>> {
    Ok(Json(catalog_service::list_services(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/stylists",
    responses(
        (status = 200, description = "Stylists", body = ApiResponse<StylistList>)
    ),
    tag = "Catalog"
)]
pub async fn list_stylists(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<StylistList>>> {
    Ok(Json(catalog_service::list_stylists(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/gallery",
    responses(
        (status = 200, description = "Gallery pictures", body = ApiResponse<GalleryList>)
    ),
    tag = "Catalog"
)]
pub async fn list_gallery(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<GalleryList>>> {
    Ok(Json(catalog_service::list_gallery(&state).await?))
}
