use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        appointments::{
            AppointmentList, CreateAppointmentRequest, DayAvailability, UpdateAppointmentRequest,
        },
        auth::{AuthResponse, LoginRequest, RegisterRequest},
        availability::{
            AvailableDayList, CreateAvailableDayRequest, CreateTimeSlotRequest, TimeSlotList,
            UpdateAvailableDayRequest, UpdateTimeSlotRequest,
        },
        catalog::{
            CreateGalleryItemRequest, CreateServiceRequest, CreateStylistRequest, GalleryList,
            ServiceList, StylistList, UpdateGalleryItemRequest, UpdateServiceRequest,
            UpdateStylistRequest,
        },
        contact::{ContactMessageList, ContactRequest},
    },
    models::{
        Appointment, AppointmentStatus, AvailableDay, AvailableTimeSlot, ContactMessage,
        GalleryItem, Service, Stylist, User,
    },
    response::{Ack, ApiResponse, Meta},
    routes::{admin, appointments, auth, availability, catalog, contact, health, params},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        catalog::list_services,
        catalog::list_stylists,
        catalog::list_gallery,
        availability::list_days,
        availability::list_time_slots,
        appointments::list_by_date,
        appointments::day_availability,
        appointments::create_appointment,
        contact::submit_contact,
        admin::list_appointments,
        admin::get_appointment,
        admin::update_appointment,
        admin::delete_appointment,
        admin::create_service,
        admin::update_service,
        admin::delete_service,
        admin::create_stylist,
        admin::update_stylist,
        admin::delete_stylist,
        admin::create_gallery_item,
        admin::update_gallery_item,
        admin::delete_gallery_item,
        admin::create_available_day,
        admin::update_available_day,
        admin::delete_available_day,
        admin::create_time_slot,
        admin::update_time_slot,
        admin::delete_time_slot,
        admin::list_contact_messages
    ),
    components(
        schemas(
            User,
            Service,
            Stylist,
            Appointment,
            AppointmentStatus,
            AvailableDay,
            AvailableTimeSlot,
            GalleryItem,
            ContactMessage,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            CreateAppointmentRequest,
            UpdateAppointmentRequest,
            AppointmentList,
            DayAvailability,
            CreateAvailableDayRequest,
            UpdateAvailableDayRequest,
            CreateTimeSlotRequest,
            UpdateTimeSlotRequest,
            AvailableDayList,
            TimeSlotList,
            CreateServiceRequest,
            UpdateServiceRequest,
            CreateStylistRequest,
            UpdateStylistRequest,
            CreateGalleryItemRequest,
            UpdateGalleryItemRequest,
            ServiceList,
            StylistList,
            GalleryList,
            ContactRequest,
            ContactMessageList,
            params::Pagination,
            params::SortOrder,
            params::AppointmentSortBy,
            params::AppointmentListQuery,
            health::HealthData,
            Ack,
            Meta,
            ApiResponse<Appointment>,
            ApiResponse<AppointmentList>,
            ApiResponse<DayAvailability>,
            ApiResponse<ServiceList>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Catalog", description = "Services, stylists and gallery"),
        (name = "Availability", description = "Configured days and time slots"),
        (name = "Appointments", description = "Public booking"),
        (name = "Contact", description = "Contact form"),
        (name = "Admin", description = "Back-office endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
