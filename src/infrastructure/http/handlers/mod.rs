//! HTTP Handlers

mod ping;
mod speak;

pub use ping::*;
pub use speak::*;
