//! Audio subsystem
//!
//! Best-effort, low-latency playback of the coin ping. Every failure in
//! here degrades to a silent flip; nothing in the audio path may ever block
//! or abort the animation.

pub mod pipeline;

pub use pipeline::{AudioError, AudioPipeline};
