use crate::domain::models::event::{Location, MediaRef};
use crate::domain::models::user::UserIdentity;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<UserIdentity, AppError>;
    async fn logout(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<MediaRef, AppError>;
}

#[async_trait]
pub trait GeocodingService: Send + Sync {
    async fn suggest(&self, query: &str) -> Result<Vec<Location>, AppError>;
}
