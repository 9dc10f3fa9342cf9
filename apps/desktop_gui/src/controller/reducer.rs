//! Applies backend events to UI-owned state.

use client_core::{NetworkCause, RegistrationController, RequestError};

use crate::controller::events::{classify_signup_failure, UiEvent};

/// `backend_status` is the small diagnostics line under the form; the
/// user-facing outcome lives in the controller's status message.
pub fn apply_ui_event(
    controller: &mut RegistrationController,
    backend_status: &mut String,
    event: UiEvent,
) {
    match event {
        UiEvent::Info(message) => {
            *backend_status = message;
        }
        UiEvent::SignupFinished(outcome) => {
            *backend_status = match &outcome {
                Ok(_) => "Signup accepted".to_string(),
                Err(err) => classify_signup_failure(err),
            };
            let _ = controller.finish_submit(outcome);
        }
        UiEvent::WorkerFailed(message) => {
            tracing::error!("backend worker failed: {message}");
            if controller.is_submitting() {
                let _ = controller.finish_submit(Err(RequestError::network(
                    NetworkCause::Unavailable,
                    message.clone(),
                )));
            }
            *backend_status = message;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
    use shared::{domain::FormField, protocol::SignupResponse};

    fn submitting_controller() -> RegistrationController {
        let mut controller = RegistrationController::new();
        controller.set_field(FormField::Name, "Ana");
        controller.set_field(FormField::Email, "ana@example.com");
        controller.set_field(FormField::Password, "pw");
        controller.set_field(FormField::ConfirmPassword, "pw");
        controller.begin_submit().expect("valid");
        controller
    }

    #[test]
    fn success_event_resets_form() {
        let mut controller = submitting_controller();
        let mut status = String::new();

        apply_ui_event(
            &mut controller,
            &mut status,
            UiEvent::SignupFinished(Ok(SignupResponse(serde_json::json!({})))),
        );

        assert_eq!(controller.status_message(), Some(SUCCESS_MESSAGE));
        assert!(controller.form().is_empty());
        assert_eq!(status, "Signup accepted");
    }

    #[test]
    fn failure_event_keeps_form() {
        let mut controller = submitting_controller();
        let mut status = String::new();

        apply_ui_event(
            &mut controller,
            &mut status,
            UiEvent::SignupFinished(Err(RequestError::HttpStatus {
                status: 400,
                detail: None,
            })),
        );

        assert_eq!(controller.status_message(), Some(FAILURE_MESSAGE));
        assert_eq!(controller.form().email, "ana@example.com");
        assert_eq!(status, "Server rejected signup (HTTP 400).");
    }

    #[test]
    fn worker_failure_releases_busy_guard() {
        let mut controller = submitting_controller();
        let mut status = String::new();

        apply_ui_event(
            &mut controller,
            &mut status,
            UiEvent::WorkerFailed("failed to build runtime".to_string()),
        );

        assert!(!controller.is_submitting());
        assert_eq!(controller.status_message(), Some(FAILURE_MESSAGE));
        assert_eq!(controller.form().name, "Ana");
        assert_eq!(status, "failed to build runtime");
    }

    #[test]
    fn worker_failure_while_idle_leaves_status_message_alone() {
        let mut controller = RegistrationController::new();
        let mut status = String::new();

        apply_ui_event(
            &mut controller,
            &mut status,
            UiEvent::WorkerFailed("failed to build runtime".to_string()),
        );

        assert_eq!(controller.status_message(), None);
        assert_eq!(status, "failed to build runtime");
    }

    #[test]
    fn info_only_updates_backend_status() {
        let mut controller = RegistrationController::new();
        let mut status = String::new();

        apply_ui_event(
            &mut controller,
            &mut status,
            UiEvent::Info("Backend worker ready".to_string()),
        );

        assert_eq!(status, "Backend worker ready");
        assert_eq!(controller.status_message(), None);
    }
}
