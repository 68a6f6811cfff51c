//! Domain logic and core data structures
//!
//! This module contains pure flip logic that is independent of the window,
//! audio, and rendering layers: angle arithmetic, the coin face mapping,
//! the random outcome draw, and the flip rotation plan.

pub mod angle;
pub mod face;
pub mod geometry;
pub mod outcome;
pub mod timeline;
