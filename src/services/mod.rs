pub mod appointment_service;
pub mod auth_service;
pub mod availability_service;
pub mod catalog_service;
pub mod contact_service;
pub mod seed_service;
