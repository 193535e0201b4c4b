use crate::domain::models::user::UserIdentity;
use crate::domain::ports::IdentityProvider;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{error, info};

/// Client for the external authentication API. The bearer token lives
/// only in this process and is never persisted.
pub struct HttpAuthService {
    client: Client,
    api_url: String,
    token: Mutex<Option<String>>,
}

#[derive(Serialize)]
struct LoginPayload {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct MePayload {
    name: String,
    email: String,
}

impl HttpAuthService {
    pub fn new(api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            token: Mutex::new(None),
        }
    }

    /// Exchanges credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AppError> {
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };

        let res = self
            .client
            .post(format!("{}/login", self.api_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Auth service connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            return Err(AppError::Unauthorized);
        }

        let body: LoginResponse = res.json().await.map_err(|e| {
            AppError::InternalWithMsg(format!("Auth service returned invalid payload: {}", e))
        })?;

        *self.token.lock().await = Some(body.token);
        info!("Authenticated against {}", self.api_url);
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for HttpAuthService {
    async fn current_user(&self) -> Result<UserIdentity, AppError> {
        let token = self
            .token
            .lock()
            .await
            .clone()
            .ok_or(AppError::Unauthorized)?;

        let res = self
            .client
            .get(format!("{}/me", self.api_url))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| AppError::InternalWithMsg(format!("Auth service connection error: {}", e)))?;

        if !res.status().is_success() {
            return Err(AppError::Unauthorized);
        }

        let me: MePayload = res.json().await.map_err(|e| {
            AppError::InternalWithMsg(format!("Auth service returned invalid payload: {}", e))
        })?;

        Ok(UserIdentity {
            name: me.name,
            email: me.email,
        })
    }

    /// The token is only held client-side; logout drops it.
    async fn logout(&self) -> Result<(), AppError> {
        *self.token.lock().await = None;
        Ok(())
    }
}
