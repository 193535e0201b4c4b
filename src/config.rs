use std::env;

#[derive(Clone)]
pub struct Config {
    pub auth_service_url: String,
    pub notify_service_url: String,
    pub notify_service_token: String,
    pub media_service_url: String,
    pub media_service_token: String,
    pub geocode_service_url: String,
    pub frontend_url: String, // Base for the RSVP links embedded in reminders
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            auth_service_url: env::var("AUTH_SERVICE_URL").unwrap_or_else(|_| "http://localhost:5000/api/auth".to_string()),
            notify_service_url: env::var("NOTIFY_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/send".to_string()),
            notify_service_token: env::var("NOTIFY_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            media_service_url: env::var("MEDIA_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/upload".to_string()),
            media_service_token: env::var("MEDIA_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            geocode_service_url: env::var("GEOCODE_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/geocode".to_string()),
            frontend_url: env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }
}
