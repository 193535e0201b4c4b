use std::sync::Arc;

use tera::Tera;
use tracing::info;

use crate::config::Config;
use crate::infra::auth::http_auth_service::HttpAuthService;
use crate::infra::geocoding::http_geocoding_service::HttpGeocodingService;
use crate::infra::media::http_media_service::HttpMediaService;
use crate::infra::notification::http_notification_service::HttpNotificationService;
use crate::state::Session;

pub fn bootstrap_session(config: &Config) -> Session {
    let identity = Arc::new(HttpAuthService::new(config.auth_service_url.clone()));
    let notifier = Arc::new(HttpNotificationService::new(
        config.notify_service_url.clone(),
        config.notify_service_token.clone(),
    ));
    let media = Arc::new(HttpMediaService::new(
        config.media_service_url.clone(),
        config.media_service_token.clone(),
    ));
    let geocoder = Arc::new(HttpGeocodingService::new(config.geocode_service_url.clone()));

    let mut tera = Tera::default();
    tera.add_raw_template("reminder.html", include_str!("../templates/reminder.html"))
        .expect("Failed to load reminder template");
    let templates = Arc::new(tera);

    info!("Session bootstrapped");
    Session::new(config.clone(), identity, notifier, media, geocoder, templates)
}
