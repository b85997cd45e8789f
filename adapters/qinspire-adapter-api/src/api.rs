//! Quantum Inspire REST API client.
//!
//! Binds the project endpoints a job needs:
//!
//! - `GET /projects/{id}/jobs/` → executions of a project
//! - `DELETE /projects/{id}/` → remove a project and its executions
//!
//! Requests authenticate with HTTP basic auth (account e-mail and password).

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use qinspire_hal::{HalResult, ProjectApi, ProjectId, RemoteJob};

use crate::error::{QiApiError, QiApiResult};

/// Quantum Inspire API base URL.
pub const BASE_URL: &str = "https://api.quantum-inspire.com";

/// User agent string sent with every request.
const USER_AGENT: &str = concat!("qinspire-adapter-api/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`QiApiClient`].
#[derive(Clone)]
pub struct ApiConfig {
    /// API base URL (default: https://api.quantum-inspire.com).
    pub base_url: String,
    /// Account e-mail.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl ApiConfig {
    /// Create a config for the public platform.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Override the base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `API_USERNAME`: account e-mail
    /// - `API_PASSWORD`: account password
    /// - `QI_API_URL`: base URL (default: [`BASE_URL`])
    pub fn from_env() -> QiApiResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> QiApiResult<Self> {
        let username = lookup("API_USERNAME").filter(|s| !s.is_empty());
        let password = lookup("API_PASSWORD").filter(|s| !s.is_empty());
        let (Some(username), Some(password)) = (username, password) else {
            return Err(QiApiError::MissingCredentials);
        };

        let config = Self::new(username, password);
        Ok(match lookup("QI_API_URL") {
            Some(url) if !url.is_empty() => config.with_base_url(url),
            _ => config,
        })
    }
}

/// Quantum Inspire API client.
#[derive(Clone)]
pub struct QiApiClient {
    /// HTTP client.
    client: Client,
    /// Connection settings.
    config: ApiConfig,
}

impl fmt::Debug for QiApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QiApiClient")
            .field("config", &self.config)
            .finish()
    }
}

impl QiApiClient {
    /// Create a new client.
    pub fn new(config: ApiConfig) -> QiApiResult<Self> {
        if config.username.is_empty() || config.password.is_empty() {
            return Err(QiApiError::MissingCredentials);
        }
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(QiApiError::InvalidUrl(config.base_url));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(QiApiError::Http)?;

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> QiApiResult<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the full API URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// List the executions of a project.
    #[instrument(skip(self))]
    pub async fn list_project_jobs(&self, project_id: ProjectId) -> QiApiResult<Vec<RemoteJob>> {
        let url = self.url(&format!("/projects/{project_id}/jobs/"));
        debug!("Listing jobs from {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?;

        let (status, body) = read_response(response).await?;
        parse_body(status, &body, project_id)
    }

    /// Delete a project.
    #[instrument(skip(self))]
    pub async fn remove_project(&self, project_id: ProjectId) -> QiApiResult<()> {
        let url = self.url(&format!("/projects/{project_id}/"));
        debug!("Deleting project at {}", url);

        let response = self
            .client
            .delete(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?;

        let (status, body) = read_response(response).await?;
        check_status(status, &body, project_id)
    }
}

#[async_trait]
impl ProjectApi for QiApiClient {
    async fn get_jobs_from_project(&self, project_id: ProjectId) -> HalResult<Vec<RemoteJob>> {
        Ok(self.list_project_jobs(project_id).await?)
    }

    async fn delete_project(&self, project_id: ProjectId) -> HalResult<()> {
        Ok(self.remove_project(project_id).await?)
    }
}

async fn read_response(response: reqwest::Response) -> QiApiResult<(StatusCode, String)> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

/// Map a non-success status to an error.
fn check_status(status: StatusCode, body: &str, project_id: ProjectId) -> QiApiResult<()> {
    if status.is_success() {
        return Ok(());
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(QiApiError::AuthFailed(body.to_string()))
        }
        StatusCode::NOT_FOUND => Err(QiApiError::ProjectNotFound(project_id.to_string())),
        _ => Err(QiApiError::ApiError {
            status: status.as_u16(),
            message: body.to_string(),
        }),
    }
}

/// Check the status, then decode the JSON body.
fn parse_body<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    project_id: ProjectId,
) -> QiApiResult<T> {
    check_status(status, body, project_id)?;
    Ok(serde_json::from_str(body)?)
}
