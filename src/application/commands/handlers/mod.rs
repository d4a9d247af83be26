//! Command Handlers

mod speak_handlers;

pub use speak_handlers::{SpeakHandler, TIMESTAMP_FORMAT};
