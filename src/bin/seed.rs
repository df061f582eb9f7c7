use salon_booking_api::{
    booking,
    config::DatabaseConfig,
    db::{create_pool, orm_from_pool, run_migrations},
    services::seed_service,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = DatabaseConfig::from_env()?;
    let pool = create_pool(&config.database_url).await?;
    let orm = orm_from_pool(&pool);
    // Ensure the schema exists before seeding.
    run_migrations(&orm).await?;

    let report =
        seed_service::seed_sample_data(&orm, booking::today(), config.admin_credentials()).await?;

    println!(
        "Seed completed: {} services, {} stylists, {} gallery items, {} time slots, {} days, admin: {}",
        report.services,
        report.stylists,
        report.gallery_items,
        report.time_slots,
        report.days,
        report.admin.as_deref().unwrap_or("-"),
    );
    Ok(())
}
