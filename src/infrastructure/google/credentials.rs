use std::fmt;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde_json::Value;

use crate::infrastructure::http::OutboundPolicy;

use super::service_account::{ServiceAccountKey, ServiceAccountTokenSource};

pub const API_KEY_HEADER: &str = "x-goog-api-key";
pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// Supplies OAuth access tokens, refreshing them as they expire.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String, CredentialsError>;
}

/// How requests to one Google service are authorized.
///
/// Loaded from a JSON file: a service-account key (`"type": "service_account"`)
/// or `{"api_key": "..."}`.
#[derive(Clone)]
pub enum GoogleCredentials {
    ApiKey(String),
    Bearer(Arc<dyn TokenSource>),
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("credentials location not configured: {0}")]
    NotConfigured(&'static str),
    #[error("failed to read credentials file {path}: {reason}")]
    Unreadable { path: String, reason: String },
    #[error("invalid credentials file {path}: {reason}")]
    Invalid { path: String, reason: String },
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
}

/// Header material for a single outbound call.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    ApiKey(String),
    Bearer(String),
}

impl Authorization {
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiKey(key) => request.header(API_KEY_HEADER, key),
            Self::Bearer(token) => request.bearer_auth(token),
        }
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("Authorization::ApiKey([REDACTED])"),
            Self::Bearer(_) => f.write_str("Authorization::Bearer([REDACTED])"),
        }
    }
}

impl GoogleCredentials {
    pub fn from_file(path: &Path, policy: OutboundPolicy) -> Result<Self, CredentialsError> {
        let invalid = |reason: String| CredentialsError::Invalid {
            path: path.display().to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| CredentialsError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let value: Value = serde_json::from_str(&contents).map_err(|e| invalid(e.to_string()))?;

        if value.get("type").and_then(Value::as_str) == Some(SERVICE_ACCOUNT_TYPE) {
            let key: ServiceAccountKey =
                serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
            let source = ServiceAccountTokenSource::new(key, policy).map_err(invalid)?;
            tracing::debug!(
                client_email = %source.client_email(),
                "Loaded service account credentials"
            );
            return Ok(Self::Bearer(Arc::new(source)));
        }

        match value.get("api_key").and_then(Value::as_str) {
            Some(key) if !key.trim().is_empty() => Ok(Self::ApiKey(key.to_string())),
            Some(_) => Err(invalid("empty api_key".to_string())),
            None => Err(invalid(
                "expected a service account key or an api_key".to_string(),
            )),
        }
    }

    /// Resolves the header for the next call, fetching a token when needed.
    pub async fn authorization(&self) -> Result<Authorization, CredentialsError> {
        match self {
            Self::ApiKey(key) => Ok(Authorization::ApiKey(key.clone())),
            Self::Bearer(source) => Ok(Authorization::Bearer(source.access_token().await?)),
        }
    }
}

impl fmt::Debug for GoogleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("GoogleCredentials::ApiKey([REDACTED])"),
            Self::Bearer(_) => f.write_str("GoogleCredentials::Bearer"),
        }
    }
}
