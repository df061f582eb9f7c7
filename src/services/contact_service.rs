use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    dto::contact::{ContactMessageList, ContactRequest},
    entity::contact_messages::{
        ActiveModel as ContactActive, Column as ContactCol, Entity as ContactMessages,
        Model as ContactModel,
    },
    error::AppResult,
    middleware::auth::{AuthUser, ensure_admin},
    models::ContactMessage,
    response::{Ack, ApiResponse, Meta},
    state::AppState,
};

pub async fn submit_message(
    state: &AppState,
    payload: ContactRequest,
) -> AppResult<ApiResponse<Ack>> {
    let saved = ContactActive {
        id: NotSet,
        name: Set(payload.name.trim().to_string()),
        email: Set(payload.email.trim().to_string()),
        subject: Set(payload.subject),
        message: Set(payload.message),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(contact_message_id = saved.id, "contact message received");
    Ok(ApiResponse::ack("Message sent"))
}

pub async fn list_messages(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ContactMessageList>> {
    ensure_admin(user)?;
    let items: Vec<ContactMessage> = ContactMessages::find()
        .order_by_desc(ContactCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(message_from_entity)
        .collect();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Contact messages",
        ContactMessageList { items },
        Some(meta),
    ))
}

fn message_from_entity(model: ContactModel) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
