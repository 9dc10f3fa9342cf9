//! UI layer for the desktop sign-up window.

pub mod app;

pub use app::{SignupApp, StartupConfig};
