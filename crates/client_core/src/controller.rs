//! Registration form controller.
//!
//! The controller owns the form, the visibility toggles and the last status
//! message. A submission is split in two so that an event loop can keep
//! handling input while the request is outstanding:
//!
//! 1. [`RegistrationController::begin_submit`] validates and arms the busy
//!    guard, handing back the request to send.
//! 2. [`RegistrationController::finish_submit`] applies the transport outcome.
//!
//! [`RegistrationController::submit`] runs both phases back to back.

use shared::{
    domain::{FormField, SecretField},
    protocol::{SignupRequest, SignupResponse},
};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::{
    error::{RequestError, SubmitError, ValidationError},
    form::{FormState, VisibilityFlags},
    transport::SignupTransport,
};

pub const SUCCESS_MESSAGE: &str = "Registration completed successfully!";
pub const FAILURE_MESSAGE: &str = "There was an error completing the registration.";

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged(FormField),
    VisibilityToggled { field: SecretField, visible: bool },
    Notice(ValidationError),
    SubmitStarted,
    SubmitFinished { succeeded: bool },
    Reset,
}

pub struct RegistrationController {
    form: FormState,
    visibility: VisibilityFlags,
    status_message: Option<String>,
    notice: Option<ValidationError>,
    in_flight: bool,
    events: broadcast::Sender<FormEvent>,
}

impl Default for RegistrationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationController {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            form: FormState::default(),
            visibility: VisibilityFlags::default(),
            status_message: None,
            notice: None,
            in_flight: false,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn visibility(&self) -> VisibilityFlags {
        self.visibility
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Pending validation notice, if the last submit was refused locally.
    pub fn notice(&self) -> Option<ValidationError> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value.into());
        self.emit(FormEvent::FieldChanged(field));
    }

    pub fn toggle_visibility(&mut self, field: SecretField) -> bool {
        let visible = self.visibility.toggle(field);
        self.emit(FormEvent::VisibilityToggled { field, visible });
        visible
    }

    pub fn begin_submit(&mut self) -> Result<SignupRequest, SubmitError> {
        if self.in_flight {
            warn!("signup submit ignored: request already in flight");
            return Err(SubmitError::InFlight);
        }

        let request = match self.form.validate() {
            Ok(request) => request,
            Err(err) => {
                debug!(reason = ?err, "signup refused by local validation");
                self.notice = Some(err);
                self.emit(FormEvent::Notice(err));
                return Err(err.into());
            }
        };

        self.notice = None;
        self.in_flight = true;
        info!("submitting signup");
        self.emit(FormEvent::SubmitStarted);
        Ok(request)
    }

    pub fn finish_submit(
        &mut self,
        outcome: Result<SignupResponse, RequestError>,
    ) -> Result<SignupResponse, SubmitError> {
        if !self.in_flight {
            debug!("applying signup outcome without a matching begin_submit");
        }
        self.in_flight = false;

        match outcome {
            Ok(response) => {
                self.status_message = Some(SUCCESS_MESSAGE.to_string());
                self.form.clear();
                self.emit(FormEvent::Reset);
                self.emit(FormEvent::SubmitFinished { succeeded: true });
                Ok(response)
            }
            Err(err) => {
                error!("signup failed: {err}");
                self.status_message = Some(FAILURE_MESSAGE.to_string());
                self.emit(FormEvent::SubmitFinished { succeeded: false });
                Err(err.into())
            }
        }
    }

    pub async fn submit<T>(&mut self, transport: &T) -> Result<SignupResponse, SubmitError>
    where
        T: SignupTransport + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = transport.signup(&request).await;
        self.finish_submit(outcome)
    }

    fn emit(&self, event: FormEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
