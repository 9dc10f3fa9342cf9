//! Backend commands queued from UI to backend worker.

use shared::protocol::SignupRequest;

pub enum BackendCommand {
    Signup { request: SignupRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Signup { .. } => "signup",
        }
    }
}
