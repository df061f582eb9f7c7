use chrono::NaiveDate;
use salon_booking_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    dto::{
        appointments::{CreateAppointmentRequest, UpdateAppointmentRequest},
        auth::{LoginRequest, RegisterRequest},
        availability::UpdateAvailableDayRequest,
    },
    entity::appointments::ActiveModel as AppointmentActive,
    error::AppError,
    middleware::auth::AuthUser,
    models::AppointmentStatus,
    routes::params::AppointmentListQuery,
    services::{appointment_service, auth_service, availability_service, seed_service},
    state::AppState,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, Set, Statement};

// Integration flow: seed -> book a slot -> slot disappears -> admin cancels -> slot is back.
#[tokio::test]
async fn book_cancel_and_close_day_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;
    // A Monday; the following Sunday is seeded closed.
    let today = NaiveDate::from_ymd_opt(2031, 1, 6).expect("date");

    let report =
        seed_service::seed_sample_data(&state.orm, today, Some(("owner", "owner-pass"))).await?;
    assert_eq!(report.services, 6);
    assert_eq!(report.time_slots, 11);
    assert_eq!(report.admin.as_deref(), Some("owner"));

    // Seeding twice adds nothing.
    let again = seed_service::seed_sample_data(&state.orm, today, None).await?;
    assert_eq!(again.services, 0);
    assert_eq!(again.days, 0);

    let open = appointment_service::availability_for(&state, "2031-01-07", today)
        .await?
        .data
        .expect("availability");
    assert!(open.is_open);
    assert_eq!(open.slots.len(), 10);
    assert!(!open.slots.iter().any(|t| t == "13:00"));

    let sunday = appointment_service::availability_for(&state, "2031-01-12", today)
        .await?
        .data
        .expect("availability");
    assert!(!sunday.is_open);
    assert!(sunday.slots.is_empty());

    let past = appointment_service::availability_for(&state, "2031-01-05", today)
        .await?
        .data
        .expect("availability");
    assert!(!past.is_open);

    // Book 10:00 on Tuesday.
    let booked = appointment_service::create_appointment(&state, booking("10:00"), today)
        .await?
        .data
        .expect("appointment");
    assert_eq!(booked.status, AppointmentStatus::Pending);
    assert_eq!(booked.comments, None);

    let taken = appointment_service::create_appointment(&state, booking("10:00"), today).await;
    assert!(matches!(taken, Err(AppError::BadRequest(_))));

    let lunch = appointment_service::create_appointment(&state, booking("13:00"), today).await;
    assert!(matches!(lunch, Err(AppError::BadRequest(_))));

    let mut unknown_service = booking("11:00");
    unknown_service.service_id = 9999;
    let unknown =
        appointment_service::create_appointment(&state, unknown_service, today).await;
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    let after = appointment_service::availability_for(&state, "2031-01-07", today)
        .await?
        .data
        .expect("availability");
    assert!(!after.slots.iter().any(|t| t == "10:00"));

    let on_day = appointment_service::list_by_date(&state, "2031-01-07")
        .await?
        .data
        .expect("appointments");
    assert_eq!(on_day.items.len(), 1);

    // Register a regular user; admin endpoints refuse them.
    let registered = auth_service::register_user(
        &state,
        RegisterRequest {
            username: "client".into(),
            password: "client-pass".into(),
        },
    )
    .await?
    .data
    .expect("auth");
    assert!(!registered.user.is_admin);

    let duplicate = auth_service::register_user(
        &state,
        RegisterRequest {
            username: "client".into(),
            password: "another-pass".into(),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    let client = AuthUser {
        user_id: registered.user.id,
        username: registered.user.username.clone(),
        is_admin: false,
    };
    let refused =
        appointment_service::list_appointments(&state, &client, AppointmentListQuery::default())
            .await;
    assert!(matches!(refused, Err(AppError::Forbidden)));

    // The seeded admin logs in and manages the booking.
    let logged_in = auth_service::login_user(
        &state,
        LoginRequest {
            username: "owner".into(),
            password: "owner-pass".into(),
        },
    )
    .await?
    .data
    .expect("auth");
    assert!(logged_in.user.is_admin);

    let bad_login = auth_service::login_user(
        &state,
        LoginRequest {
            username: "owner".into(),
            password: "wrong".into(),
        },
    )
    .await;
    assert!(matches!(bad_login, Err(AppError::Unauthorized)));

    let admin = AuthUser {
        user_id: logged_in.user.id,
        username: logged_in.user.username.clone(),
        is_admin: true,
    };

    let search = appointment_service::list_appointments(
        &state,
        &admin,
        AppointmentListQuery {
            q: Some("LOVELACE".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(search.meta.as_ref().and_then(|m| m.total), Some(1));

    let cancelled = appointment_service::update_appointment(
        &state,
        &admin,
        booked.id,
        UpdateAppointmentRequest {
            status: Some(AppointmentStatus::Cancelled),
            comments: Some(Some("client called".into())),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("appointment");
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(cancelled.comments.as_deref(), Some("client called"));

    assert_eq!(cancelled.stylist_id, Some(1));

    // An explicit null unassigns the stylist, an absent field leaves comments alone.
    let unassign: UpdateAppointmentRequest =
        serde_json::from_value(serde_json::json!({ "stylist_id": null }))?;
    let unassigned = appointment_service::update_appointment(&state, &admin, booked.id, unassign)
        .await?
        .data
        .expect("appointment");
    assert_eq!(unassigned.stylist_id, None);
    assert_eq!(unassigned.comments.as_deref(), Some("client called"));

    let freed = appointment_service::availability_for(&state, "2031-01-07", today)
        .await?
        .data
        .expect("availability");
    assert!(freed.slots.iter().any(|t| t == "10:00"));

    // Closing the day hides every slot.
    let day = availability_service::day_by_date(&state, "2031-01-07")
        .await?
        .expect("seeded day");
    availability_service::update_day(
        &state,
        &admin,
        day.id,
        UpdateAvailableDayRequest {
            date: None,
            is_available: Some(false),
        },
    )
    .await?;
    let closed = appointment_service::availability_for(&state, "2031-01-07", today)
        .await?
        .data
        .expect("availability");
    assert!(!closed.is_open);

    // Unknown statuses never reach the table.
    let bogus = AppointmentActive {
        id: NotSet,
        service_id: Set(1),
        stylist_id: Set(None),
        first_name: Set("Grace".into()),
        last_name: Set("Hopper".into()),
        email: Set("grace@example.com".into()),
        phone: Set("555-0102".into()),
        date: Set("2031-01-08".into()),
        time: Set("11:00".into()),
        comments: Set(None),
        status: Set("bogus".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await;
    assert!(bogus.is_err());

    appointment_service::delete_appointment(&state, &admin, booked.id).await?;
    let gone = appointment_service::get_appointment(&state, &admin, booked.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));

    Ok(())
}

fn booking(time: &str) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        service_id: 1,
        stylist_id: Some(1),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "555-0101".into(),
        date: "2031-01-07".into(),
        time: time.into(),
        comments: Some("   ".into()),
    }
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let config = AppConfig {
        database_url: database_url.to_string(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "test-secret".into(),
        jwt_ttl_hours: 1,
        cors_origin: None,
        seed_on_start: false,
        admin_username: None,
        admin_password: None,
    };
    let pool = create_pool(database_url).await?;
    let state = AppState::new(pool, config);
    run_migrations(&state.orm).await?;

    // Clean tables to keep test idempotent.
    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_string(
            backend,
            "TRUNCATE audit_logs, contact_messages, appointments, available_days, \
             available_time_slots, gallery_items, stylists, services, users \
             RESTART IDENTITY CASCADE;",
        ))
        .await?;

    Ok(state)
}
