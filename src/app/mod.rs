//! Application orchestration layer
//!
//! Coordinates between input, domain, audio, and UI: the session state
//! machine, the rotation animator, and the controller that wires them to
//! the frame loop.

pub mod animator;
pub mod controller;
pub mod state;

pub use controller::FlipController;
