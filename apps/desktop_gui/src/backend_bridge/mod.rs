//! Bridge between the UI thread and the backend worker that performs network I/O.

pub mod commands;
pub mod runtime;
