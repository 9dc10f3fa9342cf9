//! Failure taxonomy for a registration attempt.

use thiserror::Error;

/// Local checks that run before anything touches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields must be filled in")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Text shown to the user when the form refuses to submit.
    pub fn notice(self) -> &'static str {
        match self {
            ValidationError::MissingFields => "All fields must be filled in",
            ValidationError::PasswordMismatch => "Passwords do not match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The server answered, but not with a 2xx.
    #[error("signup endpoint returned HTTP {status}{}", format_detail(.detail))]
    HttpStatus { status: u16, detail: Option<String> },
    /// Transport failure, or a success body that is not JSON.
    #[error("signup request failed: {message}")]
    NetworkFailure { cause: NetworkCause, message: String },
}

impl RequestError {
    pub fn network(cause: NetworkCause, message: impl Into<String>) -> Self {
        RequestError::NetworkFailure {
            cause,
            message: message.into(),
        }
    }
}

/// What went wrong below the HTTP status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkCause {
    /// No connection could be established.
    Connect,
    Timeout,
    /// A 2xx answer whose body is not JSON.
    InvalidPayload,
    /// The request never left this process, e.g. the worker queue is gone.
    Unavailable,
    Other,
}

impl NetworkCause {
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkCause::Timeout
        } else if err.is_connect() {
            NetworkCause::Connect
        } else if err.is_decode() {
            NetworkCause::InvalidPayload
        } else {
            NetworkCause::Other
        }
    }
}

fn format_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("a signup request is already in flight")]
    InFlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_includes_server_detail_when_present() {
        let err = RequestError::HttpStatus {
            status: 409,
            detail: Some("email already registered".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "signup endpoint returned HTTP 409: email already registered"
        );

        let err = RequestError::HttpStatus {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "signup endpoint returned HTTP 500");
    }

    #[test]
    fn network_failure_message_omits_the_cause() {
        let err = RequestError::network(NetworkCause::Connect, "connection refused");
        assert_eq!(err.to_string(), "signup request failed: connection refused");
        assert!(matches!(
            err,
            RequestError::NetworkFailure {
                cause: NetworkCause::Connect,
                ..
            }
        ));
    }

    #[test]
    fn validation_errors_convert_into_submit_errors() {
        let err: SubmitError = ValidationError::PasswordMismatch.into();
        assert_eq!(err, SubmitError::Validation(ValidationError::PasswordMismatch));
        assert_eq!(err.to_string(), "Passwords do not match");
    }
}
