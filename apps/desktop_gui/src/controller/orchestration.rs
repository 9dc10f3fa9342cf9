//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{NetworkCause, RegistrationController, RequestError};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Returns whether the command reached the queue; `status` explains why not.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            false
        }
    }
}

/// Submit button handler. Validation failures leave a notice on the
/// controller; a command that never reaches the worker counts as a failed
/// attempt so the busy guard is released.
pub fn submit_form(
    controller: &mut RegistrationController,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) {
    let Ok(request) = controller.begin_submit() else {
        return;
    };

    if !dispatch_backend_command(cmd_tx, BackendCommand::Signup { request }, status) {
        let _ = controller.finish_submit(Err(RequestError::network(
            NetworkCause::Unavailable,
            status.clone(),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{ValidationError, FAILURE_MESSAGE};
    use crossbeam_channel::bounded;
    use shared::domain::FormField;

    fn filled_controller() -> RegistrationController {
        let mut controller = RegistrationController::new();
        controller.set_field(FormField::Name, "Ana");
        controller.set_field(FormField::Email, "ana@example.com");
        controller.set_field(FormField::Password, "pw");
        controller.set_field(FormField::ConfirmPassword, "pw");
        controller
    }

    #[test]
    fn valid_form_queues_exactly_one_signup() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut controller = filled_controller();
        let mut status = String::new();

        submit_form(&mut controller, &cmd_tx, &mut status);
        submit_form(&mut controller, &cmd_tx, &mut status);

        assert!(controller.is_submitting());
        let queued: Vec<_> = cmd_rx.try_iter().collect();
        assert_eq!(queued.len(), 1);
        let BackendCommand::Signup { request } = &queued[0];
        assert_eq!(request.email, "ana@example.com");
    }

    #[test]
    fn invalid_form_queues_nothing() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut controller = filled_controller();
        controller.set_field(FormField::ConfirmPassword, "PW");
        let mut status = String::new();

        submit_form(&mut controller, &cmd_tx, &mut status);

        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(controller.notice(), Some(ValidationError::PasswordMismatch));
        assert!(!controller.is_submitting());
    }

    #[test]
    fn disconnected_backend_fails_the_attempt() {
        let (cmd_tx, cmd_rx) = bounded(4);
        drop(cmd_rx);
        let mut controller = filled_controller();
        let mut status = String::new();

        submit_form(&mut controller, &cmd_tx, &mut status);

        assert!(status.contains("disconnected"));
        assert!(!controller.is_submitting());
        assert_eq!(controller.status_message(), Some(FAILURE_MESSAGE));
        assert_eq!(controller.form().name, "Ana");
    }

    #[test]
    fn full_queue_reports_status() {
        let (cmd_tx, _cmd_rx) = bounded(0);
        let mut status = String::new();
        let request = filled_controller().begin_submit().expect("valid");

        let queued =
            dispatch_backend_command(&cmd_tx, BackendCommand::Signup { request }, &mut status);

        assert!(!queued);
        assert_eq!(status, "UI command queue is full; please retry");
    }
}
