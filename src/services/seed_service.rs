//! Sample catalog and availability for a fresh database.
//!
//! Every step is idempotent: catalog tables are filled only when empty, and
//! days/slots are inserted only for dates/times that have no row yet.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

use crate::{
    booking::DATE_FORMAT,
    entity::{
        available_days::{self, Entity as AvailableDays},
        available_time_slots::{self, Entity as AvailableTimeSlots},
        gallery_items::{self, Entity as GalleryItems},
        services::{self, Entity as Services},
        stylists::{self, Entity as Stylists},
    },
    db::OrmConn,
    error::AppResult,
    services::auth_service,
};

/// Days generated ahead of `today`, today included.
pub const SEED_DAYS: i64 = 30;

const SERVICES: [(&str, &str, i32, i32, &str, &str); 6] = [
    (
        "Haircut",
        "Cuts tailored to your face shape, style and preferences.",
        1200,
        45,
        "https://images.unsplash.com/photo-1560066984-138dadb4c035?auto=format&fit=crop&w=500&q=80",
        "scissors",
    ),
    (
        "Colouring",
        "Full colour, highlights, balayage and modern techniques.",
        2500,
        90,
        "https://images.unsplash.com/photo-1527799820374-dcf8d9d4a388?auto=format&fit=crop&w=500&q=80",
        "palette",
    ),
    (
        "Styling",
        "Updos and styling for weddings, parties and special occasions.",
        1800,
        60,
        "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?auto=format&fit=crop&w=500&q=80",
        "wind",
    ),
    (
        "Hair Treatments",
        "Hydration, repair and specialised care for your hair.",
        2000,
        60,
        "https://images.unsplash.com/photo-1607008829749-c8051e257672?auto=format&fit=crop&w=500&q=80",
        "droplet",
    ),
    (
        "Straightening & Keratin",
        "Permanent straightening and keratin treatments.",
        3500,
        120,
        "https://images.unsplash.com/photo-1634302904768-15c1f3860bdc?auto=format&fit=crop&w=500&q=80",
        "feather",
    ),
    (
        "Barbering",
        "Beard trims, shaping and grooming.",
        900,
        30,
        "https://images.unsplash.com/photo-1503951914875-452162b0f3f1?auto=format&fit=crop&w=500&q=80",
        "scissors",
    ),
];

const STYLISTS: [(&str, &str, &str, &str); 3] = [
    (
        "Carlos",
        "Founder & Lead Stylist",
        "Modern cuts and advanced colouring, twenty years behind the chair.",
        "https://images.unsplash.com/photo-1537832816519-689ad163238b?auto=format&fit=crop&w=400&q=80",
    ),
    (
        "Laura",
        "Colour Expert",
        "Balayage, highlights and the latest colour trends.",
        "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=400&q=80",
    ),
    (
        "Martín",
        "Barber",
        "Men's cuts, beard work and facial grooming.",
        "https://images.unsplash.com/photo-1566492031773-4f4e44671857?auto=format&fit=crop&w=400&q=80",
    ),
];

const GALLERY: [(&str, &str); 8] = [
    ("https://images.unsplash.com/photo-1605497788044-5a32c7078486?auto=format&fit=crop&w=300&q=80", "Modern women's cut"),
    ("https://images.unsplash.com/photo-1541576980233-97577392c3b1?auto=format&fit=crop&w=300&q=80", "Balayage colour"),
    ("https://images.unsplash.com/photo-1513531926349-466f15ec8cc7?auto=format&fit=crop&w=300&q=80", "Men's cut"),
    ("https://images.unsplash.com/photo-1508474722893-c3ccb98db1a6?auto=format&fit=crop&w=300&q=80", "Updo"),
    ("https://images.unsplash.com/photo-1587297516206-19ae9250bdbd?auto=format&fit=crop&w=300&q=80", "Hair treatment"),
    ("https://images.unsplash.com/photo-1505033575518-a36ea2ef75ae?auto=format&fit=crop&w=300&q=80", "Blonde colour"),
    ("https://images.unsplash.com/photo-1585314614250-d213876625e1?auto=format&fit=crop&w=300&q=80", "Beard trim"),
    ("https://images.unsplash.com/photo-1602798415391-06d4fc4825c7?auto=format&fit=crop&w=300&q=80", "Event styling"),
];

/// Hourly slots 09:00–19:00; 13:00 is lunch and starts closed.
pub fn sample_time_slots() -> Vec<(String, bool)> {
    (9..=19)
        .map(|hour| (format!("{hour:02}:00"), hour != 13))
        .collect()
}

/// `days` consecutive dates from `today`; Sundays are closed.
pub fn sample_days(today: NaiveDate, days: i64) -> Vec<(String, bool)> {
    (0..days)
        .map(|offset| {
            let date = today + Duration::days(offset);
            (
                date.format(DATE_FORMAT).to_string(),
                date.weekday() != Weekday::Sun,
            )
        })
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub services: usize,
    pub stylists: usize,
    pub gallery_items: usize,
    pub time_slots: usize,
    pub days: usize,
    pub admin: Option<String>,
}

pub async fn seed_sample_data(
    orm: &OrmConn,
    today: NaiveDate,
    admin: Option<(&str, &str)>,
) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    if Services::find().count(orm).await? == 0 {
        let rows = SERVICES.iter().map(|(name, description, price, duration, image_url, icon)| {
            services::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
                description: Set(description.to_string()),
                price: Set(*price),
                duration: Set(*duration),
                image_url: Set(image_url.to_string()),
                icon: Set(icon.to_string()),
            }
        });
        Services::insert_many(rows).exec(orm).await?;
        report.services = SERVICES.len();
    }

    if Stylists::find().count(orm).await? == 0 {
        let rows = STYLISTS.iter().map(|(name, role, description, image_url)| {
            stylists::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
                role: Set(role.to_string()),
                description: Set(description.to_string()),
                image_url: Set(image_url.to_string()),
            }
        });
        Stylists::insert_many(rows).exec(orm).await?;
        report.stylists = STYLISTS.len();
    }

    if GalleryItems::find().count(orm).await? == 0 {
        let rows = GALLERY.iter().map(|(image_url, description)| gallery_items::ActiveModel {
            id: NotSet,
            image_url: Set(image_url.to_string()),
            description: Set(description.to_string()),
        });
        GalleryItems::insert_many(rows).exec(orm).await?;
        report.gallery_items = GALLERY.len();
    }

    for (time, is_available) in sample_time_slots() {
        let exists = AvailableTimeSlots::find()
            .filter(available_time_slots::Column::Time.eq(time.as_str()))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        AvailableTimeSlots::insert(available_time_slots::ActiveModel {
            id: NotSet,
            time: Set(time),
            is_available: Set(is_available),
        })
        .exec(orm)
        .await?;
        report.time_slots += 1;
    }

    for (date, is_available) in sample_days(today, SEED_DAYS) {
        let exists = AvailableDays::find()
            .filter(available_days::Column::Date.eq(date.as_str()))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        AvailableDays::insert(available_days::ActiveModel {
            id: NotSet,
            date: Set(date),
            is_available: Set(is_available),
        })
        .exec(orm)
        .await?;
        report.days += 1;
    }

    match admin {
        Some((username, password)) => {
            let user = auth_service::ensure_admin_account(orm, username, password).await?;
            report.admin = Some(user.username);
        }
        None => tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set, no admin account seeded"),
    }

    tracing::info!(?report, "seed completed");
    Ok(report)
}
