//! Game rules for SOS.
//!
//! Pure functions over boards and turn state. Rules are separated from
//! board storage so the engine, the invariants and the strategist can
//! share them.

pub mod mode;
pub mod scoring;

pub use mode::{Scores, apply_mode_transition};
pub use scoring::{completed_windows, count_sos, is_sos};
