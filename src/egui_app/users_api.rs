//! Users API Client
//!
//! The remote side of the user collection: five calls against the `users`
//! REST resource. [`UserService`] is the seam the store depends on;
//! [`HttpUserService`] is the reqwest implementation used by the app.

use std::future::Future;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::{NewUser, User, UserAttributes, UserPatch};

/// What went wrong with a remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The request never produced a response (connection refused, timeout, ...)
    Network,
    /// The service answered with a non-success status
    Status(u16),
    /// The response body was not the expected JSON
    Decode,
}

/// Failure of any remote call.
///
/// `message` is `None` when no specific cause is known; callers substitute
/// their own fallback text in that case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("remote call failed"))]
pub struct RemoteError {
    kind: RemoteErrorKind,
    message: Option<String>,
}

impl RemoteError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: RemoteErrorKind::Network,
            message: Some(message.into()),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            kind: RemoteErrorKind::Status(code),
            message: Some(format!("Request failed with status code {}", code)),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: RemoteErrorKind::Decode,
            message: Some(format!("Failed to parse response: {}", message.into())),
        }
    }

    /// An error with no human-readable cause
    pub fn without_message(kind: RemoteErrorKind) -> Self {
        Self { kind, message: None }
    }

    pub fn kind(&self) -> RemoteErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::status(status.as_u16())
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

/// The remote users resource.
///
/// Each call resolves with the documented payload or fails with a
/// [`RemoteError`].
pub trait UserService: Send + Sync {
    /// `GET /users`
    fn list(&self) -> impl Future<Output = Result<Vec<User>, RemoteError>> + Send;

    /// `POST /users`; the service assigns the id
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, RemoteError>> + Send;

    /// `PUT /users/{id}` with all three attributes
    fn replace(
        &self,
        id: &str,
        attributes: UserAttributes,
    ) -> impl Future<Output = Result<User, RemoteError>> + Send;

    /// `PATCH /users/{id}` with only the attributes present in `patch`
    fn merge(
        &self,
        id: &str,
        patch: UserPatch,
    ) -> impl Future<Output = Result<User, RemoteError>> + Send;

    /// `DELETE /users/{id}`; success is signalled by status alone
    fn remove(&self, id: &str) -> impl Future<Output = Result<(), RemoteError>> + Send;
}

/// reqwest-backed users client
#[derive(Debug, Clone)]
pub struct HttpUserService {
    config: Config,
    client: Client,
}

impl HttpUserService {
    pub fn new(config: Config) -> Result<Self, RemoteError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RemoteError::network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %response.url(), "users service rejected request");
            return Err(RemoteError::status(status.as_u16()));
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| RemoteError::decode(e.to_string()))
    }
}

impl UserService for HttpUserService {
    async fn list(&self) -> Result<Vec<User>, RemoteError> {
        let url = self.config.users_url();
        tracing::debug!(%url, "GET users");
        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }

    async fn create(&self, user: NewUser) -> Result<User, RemoteError> {
        let url = self.config.users_url();
        tracing::debug!(%url, "POST user");
        let response = self.send(self.client.post(url).json(&user)).await?;
        Self::read_json(response).await
    }

    async fn replace(&self, id: &str, attributes: UserAttributes) -> Result<User, RemoteError> {
        let url = self.config.user_url(id);
        tracing::debug!(%url, "PUT user");
        let response = self.send(self.client.put(url).json(&attributes)).await?;
        Self::read_json(response).await
    }

    async fn merge(&self, id: &str, patch: UserPatch) -> Result<User, RemoteError> {
        let url = self.config.user_url(id);
        tracing::debug!(%url, "PATCH user");
        let response = self.send(self.client.patch(url).json(&patch)).await?;
        Self::read_json(response).await
    }

    async fn remove(&self, id: &str) -> Result<(), RemoteError> {
        let url = self.config.user_url(id);
        tracing::debug!(%url, "DELETE user");
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
