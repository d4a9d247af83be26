//! Synthesis Adapter - 外部合成进程调用实现

mod fake_synthesizer;
mod output;
mod process_synthesizer;

pub use fake_synthesizer::FakeSynthesizer;
pub use output::decode_output;
pub use process_synthesizer::{ProcessSynthesizer, ProcessSynthesizerConfig};
