pub mod auth;
pub mod factory;
pub mod geocoding;
pub mod media;
pub mod notification;
