use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    booking::{validate_date, validate_time},
    models::{AvailableDay, AvailableTimeSlot},
};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateAvailableDayRequest {
    #[validate(custom(function = "validate_date"))]
    pub date: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateAvailableDayRequest {
    #[validate(custom(function = "validate_date"))]
    pub date: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTimeSlotRequest {
    #[validate(custom(function = "validate_time"))]
    pub time: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateTimeSlotRequest {
    #[validate(custom(function = "validate_time"))]
    pub time: Option<String>,
    pub is_available: Option<bool>,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct AvailableDayList {
    #[schema(value_type = Vec<AvailableDay>)]
    pub items: Vec<AvailableDay>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TimeSlotList {
    #[schema(value_type = Vec<AvailableTimeSlot>)]
    pub items: Vec<AvailableTimeSlot>,
}
