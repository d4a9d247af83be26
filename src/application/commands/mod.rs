//! Commands - 命令定义及处理器

pub mod handlers;
mod speak_commands;

pub use speak_commands::{SpeakCommand, SpeakResponse};
