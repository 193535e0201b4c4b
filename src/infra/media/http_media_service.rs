use crate::domain::models::event::MediaRef;
use crate::domain::ports::MediaStorage;
use crate::error::AppError;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Client for the external media-upload service. Only the returned
/// `{url, name}` reference is kept; bytes are handed off verbatim.
pub struct HttpMediaService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpMediaService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct UploadPayload {
    file_name: String,
    content_base64: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
    name: String,
}

#[async_trait]
impl MediaStorage for HttpMediaService {
    async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<MediaRef, AppError> {
        let payload = UploadPayload {
            file_name: file_name.to_string(),
            content_base64: general_purpose::STANDARD.encode(bytes),
        };

        let res = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Media service connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let msg = format!("Media upload failed. Status: {}", res.status());
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        let body: UploadResponse = res.json().await.map_err(|e| {
            AppError::InternalWithMsg(format!("Media service returned invalid payload: {}", e))
        })?;

        Ok(MediaRef {
            url: body.url,
            name: body.name,
        })
    }
}
