//! The outbound side of a submission.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use shared::{
    error::ApiError,
    protocol::{SignupRequest, SignupResponse},
};
use tracing::{info, warn};
use url::Url;

use crate::error::{NetworkCause, RequestError};

/// Sends one registration request and reports how it went. Implementations
/// must not retry.
#[async_trait]
pub trait SignupTransport: Send + Sync {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, RequestError>;
}

#[async_trait]
impl<T> SignupTransport for Arc<T>
where
    T: SignupTransport + ?Sized,
{
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, RequestError> {
        (**self).signup(request).await
    }
}

/// JSON-over-HTTP transport for `POST /auth/signup`.
#[derive(Debug, Clone)]
pub struct HttpSignupTransport {
    http: Client,
    endpoint: Url,
}

impl HttpSignupTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SignupTransport for HttpSignupTransport {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, RequestError> {
        let res = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, "signup transport failure: {err}");
                RequestError::network(NetworkCause::from_reqwest(&err), err.to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.bytes().await.unwrap_or_default();
            let envelope = ApiError::from_body(&body);
            warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                code = ?envelope.as_ref().map(|envelope| &envelope.code),
                "signup rejected by server"
            );
            let detail = envelope.map(|envelope| envelope.message);
            return Err(RequestError::HttpStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SignupResponse = res.json().await.map_err(|err| {
            warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "invalid signup response payload: {err}"
            );
            RequestError::network(
                NetworkCause::InvalidPayload,
                format!("invalid signup response payload: {err}"),
            )
        })?;
        info!(endpoint = %self.endpoint, status = status.as_u16(), "signup accepted");
        Ok(body)
    }
}
