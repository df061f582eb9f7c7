use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    booking::{validate_date, validate_time},
    models::{Appointment, AppointmentStatus},
};

use super::{double_option, validate_not_blank};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateAppointmentRequest {
    pub service_id: i32,
    pub stylist_id: Option<i32>,
    #[validate(custom(function = "validate_not_blank", message = "first name is required"))]
    pub first_name: String,
    #[validate(custom(function = "validate_not_blank", message = "last name is required"))]
    pub last_name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(custom(function = "validate_not_blank", message = "phone is required"))]
    pub phone: String,
    #[validate(custom(function = "validate_date"))]
    pub date: String,
    #[validate(custom(function = "validate_time"))]
    pub time: String,
    pub comments: Option<String>,
}

/// Partial update; every field is optional. `stylist_id` and `comments`
/// may be sent as `null` to clear them.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateAppointmentRequest {
    pub service_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub stylist_id: Option<Option<i32>>,
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_date"))]
    pub date: Option<String>,
    #[validate(custom(function = "validate_time"))]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub comments: Option<Option<String>>,
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct AppointmentList {
    #[schema(value_type = Vec<Appointment>)]
    pub items: Vec<Appointment>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DayAvailability {
    pub date: String,
    pub is_open: bool,
    pub slots: Vec<String>,
}
