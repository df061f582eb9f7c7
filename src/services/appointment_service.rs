use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    audit,
    booking::{self, parse_booking_date},
    dto::appointments::{
        AppointmentList, CreateAppointmentRequest, DayAvailability, UpdateAppointmentRequest,
    },
    entity::{
        Services, Stylists,
        appointments::{
            ActiveModel as AppointmentActive, Column as AppointmentCol, Entity as Appointments,
            Model as AppointmentModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Appointment, AppointmentStatus},
    response::{Ack, ApiResponse, Meta},
    routes::params::{AppointmentListQuery, AppointmentSortBy, SortOrder},
    services::availability_service,
    state::AppState,
};

fn require_date(date: &str) -> AppResult<NaiveDate> {
    parse_booking_date(date)
        .ok_or_else(|| AppError::BadRequest("date must be formatted as YYYY-MM-DD".into()))
}

async fn appointments_on(state: &AppState, date: &str) -> AppResult<Vec<Appointment>> {
    let items = Appointments::find()
        .filter(AppointmentCol::Date.eq(date))
        .order_by_asc(AppointmentCol::Time)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(appointment_from_entity)
        .collect();
    Ok(items)
}

/// Appointments booked on a date, as the booking form uses them to grey out
/// taken slots.
pub async fn list_by_date(
    state: &AppState,
    date: &str,
) -> AppResult<ApiResponse<AppointmentList>> {
    require_date(date)?;
    let items = appointments_on(state, date).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Appointments",
        AppointmentList { items },
        Some(meta),
    ))
}

async fn compute_availability(
    state: &AppState,
    date: NaiveDate,
    date_key: &str,
    today: NaiveDate,
) -> AppResult<booking::Availability> {
    let day = availability_service::day_by_date(state, date_key).await?;
    let slots = availability_service::all_slots(state).await?;
    let booked = appointments_on(state, date_key).await?;
    Ok(booking::offerable_slots(
        date,
        today,
        day.as_ref(),
        &slots,
        &booked,
    ))
}

pub async fn availability_for(
    state: &AppState,
    date: &str,
    today: NaiveDate,
) -> AppResult<ApiResponse<DayAvailability>> {
    let parsed = require_date(date)?;
    let availability = compute_availability(state, parsed, date, today).await?;
    Ok(ApiResponse::success(
        "Availability",
        DayAvailability {
            date: date.to_string(),
            is_open: availability.is_open,
            slots: availability.slots,
        },
        None,
    ))
}

/// Public booking. The slot check and the insert are not atomic: two
/// concurrent requests for the same slot can both succeed.
pub async fn create_appointment(
    state: &AppState,
    payload: CreateAppointmentRequest,
    today: NaiveDate,
) -> AppResult<ApiResponse<Appointment>> {
    let date = require_date(&payload.date)?;

    if Services::find_by_id(payload.service_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "Unknown service {}",
            payload.service_id
        )));
    }
    if let Some(stylist_id) = payload.stylist_id {
        if Stylists::find_by_id(stylist_id).one(&state.orm).await?.is_none() {
            return Err(AppError::BadRequest(format!("Unknown stylist {stylist_id}")));
        }
    }

    let availability = compute_availability(state, date, &payload.date, today).await?;
    if !availability.is_open {
        return Err(AppError::BadRequest(
            "The selected date is not available".into(),
        ));
    }
    if !availability.slots.iter().any(|t| *t == payload.time) {
        return Err(AppError::BadRequest(
            "The selected time is not available".into(),
        ));
    }

    let comments = payload.comments.filter(|c| !c.trim().is_empty());
    let model = AppointmentActive {
        id: NotSet,
        service_id: Set(payload.service_id),
        stylist_id: Set(payload.stylist_id),
        first_name: Set(payload.first_name.trim().to_string()),
        last_name: Set(payload.last_name.trim().to_string()),
        email: Set(payload.email.trim().to_string()),
        phone: Set(payload.phone.trim().to_string()),
        date: Set(payload.date),
        time: Set(payload.time),
        comments: Set(comments),
        status: Set(AppointmentStatus::Pending.as_str().to_string()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        appointment_id = model.id,
        date = %model.date,
        time = %model.time,
        "appointment booked"
    );
    audit::record(
        &state.pool,
        None,
        "appointment_create",
        "appointments",
        serde_json::json!({ "appointment_id": model.id, "date": model.date, "time": model.time }),
    )
    .await;

    Ok(ApiResponse::success(
        "Appointment created",
        appointment_from_entity(model),
        Some(Meta::empty()),
    ))
}

pub async fn list_appointments(
    state: &AppState,
    user: &AuthUser,
    query: AppointmentListQuery,
) -> AppResult<ApiResponse<AppointmentList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(status) = query.status {
        condition = condition.add(AppointmentCol::Status.eq(status.as_str()));
    }
    if let Some(date) = query.date.as_ref().filter(|d| !d.is_empty()) {
        require_date(date)?;
        condition = condition.add(AppointmentCol::Date.eq(date.clone()));
    }
    if let Some(search) = query.q.as_ref().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(AppointmentCol::FirstName).ilike(pattern.clone()))
                .add(Expr::col(AppointmentCol::LastName).ilike(pattern.clone()))
                .add(Expr::col(AppointmentCol::Email).ilike(pattern.clone()))
                .add(Expr::col(AppointmentCol::Phone).ilike(pattern)),
        );
    }

    let sort_by = query.sort_by.unwrap_or(AppointmentSortBy::Date);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
    let columns: &[AppointmentCol] = match sort_by {
        AppointmentSortBy::Date => &[AppointmentCol::Date, AppointmentCol::Time],
        AppointmentSortBy::Name => &[AppointmentCol::LastName, AppointmentCol::FirstName],
        AppointmentSortBy::Status => &[AppointmentCol::Status, AppointmentCol::Date],
    };

    let mut finder = Appointments::find().filter(condition);
    for col in columns {
        finder = match sort_order {
            SortOrder::Asc => finder.order_by_asc(*col),
            SortOrder::Desc => finder.order_by_desc(*col),
        };
    }
    finder = finder.order_by_asc(AppointmentCol::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(appointment_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Appointments",
        AppointmentList { items },
        Some(meta),
    ))
}

pub async fn get_appointment(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Appointment>> {
    ensure_admin(user)?;
    let appointment = Appointments::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(appointment_from_entity);
    let appointment = match appointment {
        Some(a) => a,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Appointment", appointment, None))
}

/// Admin edit. Any field may change, including the status; availability is
/// not re-checked.
pub async fn update_appointment(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateAppointmentRequest,
) -> AppResult<ApiResponse<Appointment>> {
    ensure_admin(user)?;
    let existing = match Appointments::find_by_id(id).one(&state.orm).await? {
        Some(a) => a,
        None => return Err(AppError::NotFound),
    };
    let previous_status = existing.status.clone();

    let mut active: AppointmentActive = existing.into();
    if let Some(service_id) = payload.service_id {
        active.service_id = Set(service_id);
    }
    if let Some(stylist_id) = payload.stylist_id {
        active.stylist_id = Set(stylist_id);
    }
    if let Some(first_name) = payload.first_name {
        active.first_name = Set(first_name.trim().to_string());
    }
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(last_name.trim().to_string());
    }
    if let Some(email) = payload.email {
        active.email = Set(email.trim().to_string());
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone.trim().to_string());
    }
    if let Some(date) = payload.date {
        active.date = Set(date);
    }
    if let Some(time) = payload.time {
        active.time = Set(time);
    }
    if let Some(comments) = payload.comments {
        active.comments = Set(comments);
    }
    if let Some(status) = payload.status {
        active.status = Set(status.as_str().to_string());
    }

    let model = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "appointment_update",
        "appointments",
        serde_json::json!({
            "appointment_id": model.id,
            "status_from": previous_status,
            "status_to": model.status,
        }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        appointment_from_entity(model),
        Some(Meta::empty()),
    ))
}

pub async fn delete_appointment(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Ack>> {
    ensure_admin(user)?;
    let result = Appointments::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        Some(user.user_id),
        "appointment_delete",
        "appointments",
        serde_json::json!({ "appointment_id": id }),
    )
    .await;

    Ok(ApiResponse::ack("Appointment deleted"))
}

pub fn appointment_from_entity(model: AppointmentModel) -> Appointment {
    let status = model.status.parse::<AppointmentStatus>().unwrap_or_else(|err| {
        tracing::warn!(appointment_id = model.id, error = %err, "treating as pending");
        AppointmentStatus::Pending
    });
    Appointment {
        id: model.id,
        service_id: model.service_id,
        stylist_id: model.stylist_id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        phone: model.phone,
        date: model.date,
        time: model.time,
        comments: model.comments,
        status,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
