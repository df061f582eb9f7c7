//! Services offered, stylists, and gallery pictures: public reads, admin writes.

use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    audit,
    dto::catalog::{
        CreateGalleryItemRequest, CreateServiceRequest, CreateStylistRequest, GalleryList,
        ServiceList, StylistList, UpdateGalleryItemRequest, UpdateServiceRequest,
        UpdateStylistRequest,
    },
    entity::{
        gallery_items::{
            ActiveModel as GalleryActive, Column as GalleryCol, Entity as GalleryItems,
            Model as GalleryModel,
        },
        services::{
            ActiveModel as ServiceActive, Column as ServiceCol, Entity as Services,
            Model as ServiceModel,
        },
        stylists::{
            ActiveModel as StylistActive, Column as StylistCol, Entity as Stylists,
            Model as StylistModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{GalleryItem, Service, Stylist},
    response::{Ack, ApiResponse, Meta},
    state::AppState,
};

pub async fn list_services(state: &AppState) -> AppResult<ApiResponse<ServiceList>> {
    let items: Vec<Service> = Services::find()
        .order_by_asc(ServiceCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(service_from_entity)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Services", ServiceList { items }, Some(meta)))
}

pub async fn create_service(
    state: &AppState,
    user: &AuthUser,
    payload: CreateServiceRequest,
) -> AppResult<ApiResponse<Service>> {
    ensure_admin(user)?;
    let service = ServiceActive {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        duration: Set(payload.duration),
        image_url: Set(payload.image_url),
        icon: Set(payload.icon),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "service_create",
        "services",
        serde_json::json!({ "service_id": service.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Service created",
        service_from_entity(service),
        Some(Meta::empty()),
    ))
}

pub async fn update_service(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateServiceRequest,
) -> AppResult<ApiResponse<Service>> {
    ensure_admin(user)?;
    let existing = match Services::find_by_id(id).one(&state.orm).await? {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let mut active: ServiceActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(duration) = payload.duration {
        active.duration = Set(duration);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(icon) = payload.icon {
        active.icon = Set(icon);
    }
    let service = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "service_update",
        "services",
        serde_json::json!({ "service_id": service.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        service_from_entity(service),
        Some(Meta::empty()),
    ))
}

/// Existing appointments keep their dangling `service_id`.
pub async fn delete_service(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Ack>> {
    ensure_admin(user)?;
    let result = Services::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        Some(user.user_id),
        "service_delete",
        "services",
        serde_json::json!({ "service_id": id }),
    )
    .await;

    Ok(ApiResponse::ack("Service deleted"))
}

pub async fn list_stylists(state: &AppState) -> AppResult<ApiResponse<StylistList>> {
    let items: Vec<Stylist> = Stylists::find()
        .order_by_asc(StylistCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(stylist_from_entity)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Stylists", StylistList { items }, Some(meta)))
}

pub async fn create_stylist(
    state: &AppState,
    user: &AuthUser,
    payload: CreateStylistRequest,
) -> AppResult<ApiResponse<Stylist>> {
    ensure_admin(user)?;
    let stylist = StylistActive {
        id: NotSet,
        name: Set(payload.name),
        role: Set(payload.role),
        description: Set(payload.description),
        image_url: Set(payload.image_url),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "stylist_create",
        "stylists",
        serde_json::json!({ "stylist_id": stylist.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Stylist created",
        stylist_from_entity(stylist),
        Some(Meta::empty()),
    ))
}

pub async fn update_stylist(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateStylistRequest,
) -> AppResult<ApiResponse<Stylist>> {
    ensure_admin(user)?;
    let existing = match Stylists::find_by_id(id).one(&state.orm).await? {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let mut active: StylistActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(role) = payload.role {
        active.role = Set(role);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(image_url);
    }
    let stylist = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "stylist_update",
        "stylists",
        serde_json::json!({ "stylist_id": stylist.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        stylist_from_entity(stylist),
        Some(Meta::empty()),
    ))
}

pub async fn delete_stylist(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Ack>> {
    ensure_admin(user)?;
    let result = Stylists::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        Some(user.user_id),
        "stylist_delete",
        "stylists",
        serde_json::json!({ "stylist_id": id }),
    )
    .await;

    Ok(ApiResponse::ack("Stylist deleted"))
}

pub async fn list_gallery(state: &AppState) -> AppResult<ApiResponse<GalleryList>> {
    let items: Vec<GalleryItem> = GalleryItems::find()
        .order_by_asc(GalleryCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(gallery_from_entity)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Gallery", GalleryList { items }, Some(meta)))
}

pub async fn create_gallery_item(
    state: &AppState,
    user: &AuthUser,
    payload: CreateGalleryItemRequest,
) -> AppResult<ApiResponse<GalleryItem>> {
    ensure_admin(user)?;
    let item = GalleryActive {
        id: NotSet,
        image_url: Set(payload.image_url),
        description: Set(payload.description),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "gallery_item_create",
        "gallery_items",
        serde_json::json!({ "gallery_item_id": item.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Gallery item created",
        gallery_from_entity(item),
        Some(Meta::empty()),
    ))
}

pub async fn update_gallery_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateGalleryItemRequest,
) -> AppResult<ApiResponse<GalleryItem>> {
    ensure_admin(user)?;
    let existing = match GalleryItems::find_by_id(id).one(&state.orm).await? {
        Some(g) => g,
        None => return Err(AppError::NotFound),
    };

    let mut active: GalleryActive = existing.into();
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    let item = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "gallery_item_update",
        "gallery_items",
        serde_json::json!({ "gallery_item_id": item.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        gallery_from_entity(item),
        Some(Meta::empty()),
    ))
}

pub async fn delete_gallery_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Ack>> {
    ensure_admin(user)?;
    let result = GalleryItems::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        Some(user.user_id),
        "gallery_item_delete",
        "gallery_items",
        serde_json::json!({ "gallery_item_id": id }),
    )
    .await;

    Ok(ApiResponse::ack("Gallery item deleted"))
}

fn service_from_entity(model: ServiceModel) -> Service {
    Service {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        duration: model.duration,
        image_url: model.image_url,
        icon: model.icon,
    }
}

fn stylist_from_entity(model: StylistModel) -> Stylist {
    Stylist {
        id: model.id,
        name: model.name,
        role: model.role,
        description: model.description,
        image_url: model.image_url,
    }
}

fn gallery_from_entity(model: GalleryModel) -> GalleryItem {
    GalleryItem {
        id: model.id,
        image_url: model.image_url,
        description: model.description,
    }
}
