use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    audit,
    dto::availability::{
        AvailableDayList, CreateAvailableDayRequest, CreateTimeSlotRequest, TimeSlotList,
        UpdateAvailableDayRequest, UpdateTimeSlotRequest,
    },
    entity::{
        available_days::{
            ActiveModel as DayActive, Column as DayCol, Entity as AvailableDays, Model as DayModel,
        },
        available_time_slots::{
            ActiveModel as SlotActive, Column as SlotCol, Entity as AvailableTimeSlots,
            Model as SlotModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{AvailableDay, AvailableTimeSlot},
    response::{Ack, ApiResponse, Meta},
    state::AppState,
};

const DUPLICATE_DAY: &str = "An entry for this date already exists";
const DUPLICATE_SLOT: &str = "An entry for this time already exists";

pub async fn all_days(state: &AppState) -> AppResult<Vec<AvailableDay>> {
    let days = AvailableDays::find()
        .order_by_asc(DayCol::Date)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(day_from_entity)
        .collect();
    Ok(days)
}

pub async fn day_by_date(state: &AppState, date: &str) -> AppResult<Option<AvailableDay>> {
    let day = AvailableDays::find()
        .filter(DayCol::Date.eq(date))
        .one(&state.orm)
        .await?
        .map(day_from_entity);
    Ok(day)
}

pub async fn all_slots(state: &AppState) -> AppResult<Vec<AvailableTimeSlot>> {
    let slots = AvailableTimeSlots::find()
        .order_by_asc(SlotCol::Time)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(slot_from_entity)
        .collect();
    Ok(slots)
}

pub async fn list_days(state: &AppState) -> AppResult<ApiResponse<AvailableDayList>> {
    let items = all_days(state).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Available days",
        AvailableDayList { items },
        Some(meta),
    ))
}

pub async fn list_slots(state: &AppState) -> AppResult<ApiResponse<TimeSlotList>> {
    let items = all_slots(state).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Available time slots",
        TimeSlotList { items },
        Some(meta),
    ))
}

pub async fn create_day(
    state: &AppState,
    user: &AuthUser,
    payload: CreateAvailableDayRequest,
) -> AppResult<ApiResponse<AvailableDay>> {
    ensure_admin(user)?;
    if day_by_date(state, &payload.date).await?.is_some() {
        return Err(AppError::BadRequest(DUPLICATE_DAY.into()));
    }

    let day = DayActive {
        id: NotSet,
        date: Set(payload.date),
        is_available: Set(payload.is_available),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| AppError::unique_violation(err, DUPLICATE_DAY))?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "available_day_create",
        "available_days",
        serde_json::json!({ "day_id": day.id, "date": day.date, "is_available": day.is_available }),
    )
    .await;

    Ok(ApiResponse::success(
        "Available day created",
        day_from_entity(day),
        Some(Meta::empty()),
    ))
}

pub async fn update_day(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateAvailableDayRequest,
) -> AppResult<ApiResponse<AvailableDay>> {
    ensure_admin(user)?;
    let existing = match AvailableDays::find_by_id(id).one(&state.orm).await? {
        Some(d) => d,
        None => return Err(AppError::NotFound),
    };

    let mut active: DayActive = existing.into();
    if let Some(date) = payload.date {
        active.date = Set(date);
    }
    if let Some(is_available) = payload.is_available {
        active.is_available = Set(is_available);
    }
    let day = active
        .update(&state.orm)
        .await
        .map_err(|err| AppError::unique_violation(err, DUPLICATE_DAY))?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "available_day_update",
        "available_days",
        serde_json::json!({ "day_id": day.id, "date": day.date, "is_available": day.is_available }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        day_from_entity(day),
        Some(Meta::empty()),
    ))
}

pub async fn delete_day(state: &AppState, user: &AuthUser, id: i32) -> AppResult<ApiResponse<Ack>> {
    ensure_admin(user)?;
    let result = AvailableDays::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        Some(user.user_id),
        "available_day_delete",
        "available_days",
        serde_json::json!({ "day_id": id }),
    )
    .await;

    Ok(ApiResponse::ack("Deleted"))
}

pub async fn create_slot(
    state: &AppState,
    user: &AuthUser,
    payload: CreateTimeSlotRequest,
) -> AppResult<ApiResponse<AvailableTimeSlot>> {
    ensure_admin(user)?;
    let duplicate = AvailableTimeSlots::find()
        .filter(SlotCol::Time.eq(payload.time.as_str()))
        .one(&state.orm)
        .await?;
    if duplicate.is_some() {
        return Err(AppError::BadRequest(DUPLICATE_SLOT.into()));
    }

    let slot = SlotActive {
        id: NotSet,
        time: Set(payload.time),
        is_available: Set(payload.is_available),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| AppError::unique_violation(err, DUPLICATE_SLOT))?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "time_slot_create",
        "available_time_slots",
        serde_json::json!({ "slot_id": slot.id, "time": slot.time, "is_available": slot.is_available }),
    )
    .await;

    Ok(ApiResponse::success(
        "Time slot created",
        slot_from_entity(slot),
        Some(Meta::empty()),
    ))
}

pub async fn update_slot(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateTimeSlotRequest,
) -> AppResult<ApiResponse<AvailableTimeSlot>> {
    ensure_admin(user)?;
    let existing = match AvailableTimeSlots::find_by_id(id).one(&state.orm).await? {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let mut active: SlotActive = existing.into();
    if let Some(time) = payload.time {
        active.time = Set(time);
    }
    if let Some(is_available) = payload.is_available {
        active.is_available = Set(is_available);
    }
    let slot = active
        .update(&state.orm)
        .await
        .map_err(|err| AppError::unique_violation(err, DUPLICATE_SLOT))?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "time_slot_update",
        "available_time_slots",
        serde_json::json!({ "slot_id": slot.id, "time": slot.time, "is_available": slot.is_available }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        slot_from_entity(slot),
        Some(Meta::empty()),
    ))
}

pub async fn delete_slot(state: &AppState, user: &AuthUser, id: i32) -> AppResult<ApiResponse<Ack>> {
    ensure_admin(user)?;
    let result = AvailableTimeSlots::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        Some(user.user_id),
        "time_slot_delete",
        "available_time_slots",
        serde_json::json!({ "slot_id": id }),
    )
    .await;

    Ok(ApiResponse::ack("Deleted"))
}

fn day_from_entity(model: DayModel) -> AvailableDay {
    AvailableDay {
        id: model.id,
        date: model.date,
        is_available: model.is_available,
    }
}

fn slot_from_entity(model: SlotModel) -> AvailableTimeSlot {
    AvailableTimeSlot {
        id: model.id,
        time: model.time,
        is_available: model.is_available,
    }
}
