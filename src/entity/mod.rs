pub mod appointments;
pub mod available_days;
pub mod available_time_slots;
pub mod contact_messages;
pub mod gallery_items;
pub mod services;
pub mod stylists;
pub mod users;

pub use appointments::Entity as Appointments;
pub use available_days::Entity as AvailableDays;
pub use available_time_slots::Entity as AvailableTimeSlots;
pub use contact_messages::Entity as ContactMessages;
pub use gallery_items::Entity as GalleryItems;
pub use services::Entity as Services;
pub use stylists::Entity as Stylists;
pub use users::Entity as Users;
