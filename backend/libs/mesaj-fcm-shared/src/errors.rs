use thiserror::Error;

/// FCM client error types
#[derive(Error, Debug)]
pub enum FcmError {
    #[error("failed to read service account key file: {0}")]
    KeyFile(String),

    #[error("failed to parse service account key: {0}")]
    KeyParse(String),

    #[error("failed to parse private key: {0}")]
    PrivateKey(String),

    #[error("failed to encode JWT: {0}")]
    JwtEncode(String),

    #[error("failed to get access token: {0}")]
    TokenRequest(String),

    #[error("token request failed with status: {0}")]
    TokenStatus(String),

    #[error("failed to parse token response: {0}")]
    TokenParse(String),

    #[error("FCM send request failed: {0}")]
    SendRequest(String),

    #[error("failed to parse FCM response: {0}")]
    ResponseParse(String),

    #[error("FCM API error: {0} - {1}")]
    Api(String, String),
}
