pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod transport;

pub use config::{load_settings, parse_endpoint, ConfigError, Settings};
pub use controller::{FormEvent, RegistrationController, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use error::{NetworkCause, RequestError, SubmitError, ValidationError};
pub use form::{FormState, VisibilityFlags};
pub use transport::{HttpSignupTransport, SignupTransport};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
