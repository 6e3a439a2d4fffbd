use std::future::Future;

use tracing::{debug, instrument};

use crate::domain::UserRecord;
use crate::error::ApiError;

/// Read-only source of user records.
///
/// The production implementation talks HTTP; tests substitute stubs.
pub trait UserSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Vec<UserRecord>, ApiError>> + Send;
}

/// Fetches the user list from `{base_url}/users` in a single request.
///
/// No retries, no timeout, no pagination. A transport failure maps to
/// [`ApiError::Network`], a non-success status to [`ApiError::HttpStatus`].
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

impl UserSource for HttpUserSource {
    #[instrument(skip(self))]
    async fn fetch(&self) -> Result<Vec<UserRecord>, ApiError> {
        let url = self.users_url();
        debug!(url = %url, "Fetching users");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}
