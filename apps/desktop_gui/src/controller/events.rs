//! UI/backend events for the desktop GUI controller.

use client_core::{NetworkCause, RequestError};
use shared::protocol::SignupResponse;

pub enum UiEvent {
    Info(String),
    SignupFinished(Result<SignupResponse, RequestError>),
    /// The worker could not start; no queued signup will ever finish.
    WorkerFailed(String),
}

/// Developer-facing summary of a failed signup, shown under the status line.
pub fn classify_signup_failure(err: &RequestError) -> String {
    match err {
        RequestError::HttpStatus { status, detail } => match detail {
            Some(detail) => format!("Server rejected signup (HTTP {status}): {detail}"),
            None => format!("Server rejected signup (HTTP {status})."),
        },
        RequestError::NetworkFailure { cause, message } => match cause {
            NetworkCause::InvalidPayload => {
                "Server answered with a malformed response.".to_string()
            }
            NetworkCause::Connect | NetworkCause::Timeout => {
                "Server unreachable; check endpoint/network and retry.".to_string()
            }
            NetworkCause::Unavailable => format!("Signup not sent: {message}"),
            NetworkCause::Other => format!("Signup request error: {message}"),
        },
    }
}
