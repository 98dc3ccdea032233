//! sg-core: Shared types, traits, and utilities for SlotGrid
//!
//! This crate provides the foundational types used across all SlotGrid crates:
//! the error type, easing curves for reel motion, and the audio collaborator
//! seam the game core talks to.

mod audio;
mod curve;
mod error;

pub use audio::*;
pub use curve::*;
pub use error::*;
