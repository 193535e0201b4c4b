use crate::domain::models::event::{Coordinates, Location};
use crate::domain::ports::GeocodingService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

/// Client for the external location-suggestion service. Whatever
/// `{address, coordinates}` it returns is stored as-is.
pub struct HttpGeocodingService {
    client: Client,
    api_url: String,
}

impl HttpGeocodingService {
    pub fn new(api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
        }
    }
}

#[derive(Deserialize)]
struct SuggestionPayload {
    address: String,
    lat: Option<f64>,
    lng: Option<f64>,
}

#[async_trait]
impl GeocodingService for HttpGeocodingService {
    async fn suggest(&self, query: &str) -> Result<Vec<Location>, AppError> {
        let res = self
            .client
            .get(&self.api_url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Geocoding service connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let msg = format!("Geocoding lookup failed. Status: {}", res.status());
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        let suggestions: Vec<SuggestionPayload> = res.json().await.map_err(|e| {
            AppError::InternalWithMsg(format!("Geocoding service returned invalid payload: {}", e))
        })?;

        Ok(suggestions
            .into_iter()
            .map(|s| Location {
                address: s.address,
                coordinates: match (s.lat, s.lng) {
                    (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
                    _ => None,
                },
            })
            .collect())
    }
}
