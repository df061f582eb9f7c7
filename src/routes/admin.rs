//! Back-office endpoints. Every handler extracts [`AdminUser`], so a
//! non-admin is refused before the path, query or body is parsed.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};

use crate::{
    dto::{
        appointments::{AppointmentList, UpdateAppointmentRequest},
        availability::{
            CreateAvailableDayRequest, CreateTimeSlotRequest, UpdateAvailableDayRequest,
            UpdateTimeSlotRequest,
        },
        catalog::{
            CreateGalleryItemRequest, CreateServiceRequest, CreateStylistRequest,
            UpdateGalleryItemRequest, UpdateServiceRequest, UpdateStylistRequest,
        },
        contact::ContactMessageList,
    },
    error::AppResult,
    middleware::{
        auth::AdminUser,
        extract::{ApiPath, ApiQuery},
        json::ValidatedJson,
    },
    models::{Appointment, AvailableDay, AvailableTimeSlot, GalleryItem, Service, Stylist},
    response::{Ack, ApiResponse},
    routes::params::AppointmentListQuery,
    services::{appointment_service, availability_service, catalog_service, contact_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(list_appointments))
        .route(
            "/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
        .route("/services", post(create_service))
        .route("/services/{id}", put(update_service).delete(delete_service))
        .route("/stylists", post(create_stylist))
        .route("/stylists/{id}", put(update_stylist).delete(delete_stylist))
        .route("/gallery", post(create_gallery_item))
        .route(
            "/gallery/{id}",
            put(update_gallery_item).delete(delete_gallery_item),
        )
        .route("/available-days", post(create_available_day))
        .route(
            "/available-days/{id}",
            put(update_available_day).delete(delete_available_day),
        )
        .route("/available-time-slots", post(create_time_slot))
        .route(
            "/available-time-slots/{id}",
            put(update_time_slot).delete(delete_time_slot),
        )
        .route("/contact-messages", get(list_contact_messages))
}

#[utoipa::path(
    get,
    path = "/api/admin/appointments",
    params(AppointmentListQuery),
    responses(
        (status = 200, description = "All appointments (admin only)", body = ApiResponse<AppointmentList>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiQuery(query): ApiQuery<AppointmentListQuery>,
) -> AppResult<Json<ApiResponse<AppointmentList>>> {
    let resp = appointment_service::list_appointments(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/appointments/{id}",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment", body = ApiResponse<Appointment>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Appointment>>> {
    let resp = appointment_service::get_appointment(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/appointments/{id}",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentRequest,
    responses(
        (status = 200, description = "Updated appointment", body = ApiResponse<Appointment>),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAppointmentRequest>,
) -> AppResult<Json<ApiResponse<Appointment>>> {
    let resp = appointment_service::update_appointment(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/appointments/{id}",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<Ack>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = appointment_service::delete_appointment(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created", body = ApiResponse<Service>),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_service(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ValidatedJson(payload): ValidatedJson<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Service>>)> {
    let resp = catalog_service::create_service(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Updated service", body = ApiResponse<Service>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_service(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateServiceRequest>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let resp = catalog_service::update_service(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<Ack>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = catalog_service::delete_service(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/stylists",
    request_body = CreateStylistRequest,
    responses(
        (status = 201, description = "Stylist created", body = ApiResponse<Stylist>),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_stylist(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ValidatedJson(payload): ValidatedJson<CreateStylistRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Stylist>>)> {
    let resp = catalog_service::create_stylist(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/stylists/{id}",
    params(("id" = i32, Path, description = "Stylist ID")),
    request_body = UpdateStylistRequest,
    responses(
        (status = 200, description = "Updated stylist", body = ApiResponse<Stylist>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_stylist(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateStylistRequest>,
) -> AppResult<Json<ApiResponse<Stylist>>> {
    let resp = catalog_service::update_stylist(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/stylists/{id}",
    params(("id" = i32, Path, description = "Stylist ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<Ack>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_stylist(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = catalog_service::delete_stylist(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/gallery",
    request_body = CreateGalleryItemRequest,
    responses(
        (status = 201, description = "Gallery item created", body = ApiResponse<GalleryItem>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_gallery_item(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ValidatedJson(payload): ValidatedJson<CreateGalleryItemRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<GalleryItem>>)> {
    let resp = catalog_service::create_gallery_item(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/gallery/{id}",
    params(("id" = i32, Path, description = "Gallery item ID")),
    request_body = UpdateGalleryItemRequest,
    responses(
        (status = 200, description = "Updated gallery item", body = ApiResponse<GalleryItem>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_gallery_item(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateGalleryItemRequest>,
) -> AppResult<Json<ApiResponse<GalleryItem>>> {
    let resp = catalog_service::update_gallery_item(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/gallery/{id}",
    params(("id" = i32, Path, description = "Gallery item ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<Ack>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = catalog_service::delete_gallery_item(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/available-days",
    request_body = CreateAvailableDayRequest,
    responses(
        (status = 201, description = "Day created", body = ApiResponse<AvailableDay>),
        (status = 400, description = "Invalid payload or duplicate date"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_available_day(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ValidatedJson(payload): ValidatedJson<CreateAvailableDayRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AvailableDay>>)> {
    let resp = availability_service::create_day(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/available-days/{id}",
    params(("id" = i32, Path, description = "Available day ID")),
    request_body = UpdateAvailableDayRequest,
    responses(
        (status = 200, description = "Updated day", body = ApiResponse<AvailableDay>),
        (status = 400, description = "Invalid payload or duplicate date"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_available_day(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAvailableDayRequest>,
) -> AppResult<Json<ApiResponse<AvailableDay>>> {
    let resp = availability_service::update_day(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/available-days/{id}",
    params(("id" = i32, Path, description = "Available day ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<Ack>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_available_day(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = availability_service::delete_day(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/available-time-slots",
    request_body = CreateTimeSlotRequest,
    responses(
        (status = 201, description = "Time slot created", body = ApiResponse<AvailableTimeSlot>),
        (status = 400, description = "Invalid payload or duplicate time"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_time_slot(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ValidatedJson(payload): ValidatedJson<CreateTimeSlotRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AvailableTimeSlot>>)> {
    let resp = availability_service::create_slot(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/available-time-slots/{id}",
    params(("id" = i32, Path, description = "Time slot ID")),
    request_body = UpdateTimeSlotRequest,
    responses(
        (status = 200, description = "Updated time slot", body = ApiResponse<AvailableTimeSlot>),
        (status = 400, description = "Invalid payload or duplicate time"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_time_slot(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTimeSlotRequest>,
) -> AppResult<Json<ApiResponse<AvailableTimeSlot>>> {
    let resp = availability_service::update_slot(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/available-time-slots/{id}",
    params(("id" = i32, Path, description = "Time slot ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<Ack>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_time_slot(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiResponse<Ack>>> {
    let resp = availability_service::delete_slot(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/contact-messages",
    responses(
        (status = 200, description = "Contact messages, newest first", body = ApiResponse<ContactMessageList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_contact_messages(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
) -> AppResult<Json<ApiResponse<ContactMessageList>>> {
    let resp = contact_service::list_messages(&state, &user).await?;
    Ok(Json(resp))
}
