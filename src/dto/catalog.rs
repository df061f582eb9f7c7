use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{GalleryItem, Service, Stylist};

use super::validate_not_blank;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateServiceRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(range(min = 1))]
    pub duration: i32,
    pub image_url: String,
    pub icon: String,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateServiceRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    pub image_url: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateStylistRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    pub role: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateStylistRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateGalleryItemRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateGalleryItemRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ServiceList {
    #[schema(value_type = Vec<Service>)]
    pub items: Vec<Service>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct StylistList {
    #[schema(value_type = Vec<Stylist>)]
    pub items: Vec<Stylist>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct GalleryList {
    #[schema(value_type = Vec<GalleryItem>)]
    pub items: Vec<GalleryItem>,
}
