use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::errors::FcmError;
use crate::models::*;

/// Firebase Cloud Messaging client
///
/// Sends push notifications through the FCM HTTP v1 API. Manages OAuth2
/// access-token generation from a service account and caches tokens until
/// shortly before they expire.
pub struct FcmClient {
    pub project_id: String,
    credentials: Arc<ServiceAccountKey>,
    token_cache: Arc<Mutex<Option<TokenCache>>>,
    http_client: reqwest::Client,
}

impl FcmClient {
    /// Create a new FCM client
    ///
    /// # Arguments
    /// * `project_id` - Firebase project ID
    /// * `credentials` - Service account key with OAuth2 credentials
    pub fn new(project_id: String, credentials: ServiceAccountKey) -> Self {
        Self {
            project_id,
            credentials: Arc::new(credentials),
            token_cache: Arc::new(Mutex::new(None)),
            http_client: reqwest::Client::new(),
        }
    }

    /// Send a notification to a single device token
    pub async fn send(
        &self,
        device_token: &str,
        title: &str,
        body: &str,
        data: Option<serde_json::Value>,
    ) -> Result<FcmSendResult, FcmError> {
        let access_token = self.get_access_token().await?;

        let message = FcmMessage {
            message: FcmMessageContent {
                token: device_token.to_string(),
                notification: FcmNotification {
                    title: title.to_string(),
                    body: body.to_string(),
                },
                data,
            },
        };

        let url = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            self.project_id
        );

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Content-Type", "application/json")
            .json(&message)
            .send()
            .await
            .map_err(|e| FcmError::SendRequest(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let fcm_response: FcmApiResponse = response
                    .json()
                    .await
                    .map_err(|e| FcmError::ResponseParse(e.to_string()))?;

                Ok(FcmSendResult {
                    message_id: fcm_response
                        .name
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    success: true,
                    error: None,
                })
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());

                Err(FcmError::Api(status.to_string(), error_text))
            }
        }
    }

    /// Get an access token for the service account (with caching)
    pub async fn get_access_token(&self) -> Result<String, FcmError> {
        // Reuse the cached token while it is valid for at least 60 more seconds
        {
            let cache = self.token_cache.lock().expect("Token cache lock poisoned");
            if let Some(cached) = cache.as_ref() {
                let now = Utc::now().timestamp();
                if cached.expires_at > now + 60 {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        // Generate new JWT and exchange for access token
        let now = Utc::now();
        let exp = (now + Duration::hours(1)).timestamp();
        let iat = now.timestamp();

        let claims = JwtClaims {
            iss: self.credentials.client_email.clone(),
            sub: self.credentials.client_email.clone(),
            scope: "https://www.googleapis.com/auth/cloud-platform".to_string(),
            aud: self.credentials.token_uri.clone(),
            exp,
            iat,
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(|e| FcmError::PrivateKey(e.to_string()))?;

        let token = encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| FcmError::JwtEncode(e.to_string()))?;

        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", &token),
        ];

        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| FcmError::TokenRequest(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FcmError::TokenStatus(response.status().to_string()));
        }

        let token_response: GoogleTokenResponse = response
            .json()
            .await
            .map_err(|e| FcmError::TokenParse(e.to_string()))?;

        let expires_at = Utc::now().timestamp() + token_response.expires_in;
        {
            let mut cache = self.token_cache.lock().expect("Token cache lock poisoned");
            *cache = Some(TokenCache {
                access_token: token_response.access_token.clone(),
                expires_at,
            });
        }

        Ok(token_response.access_token)
    }
}
