//! Bunny Run - an endless runner
//!
//! Core modules:
//! - `sim`: Simulation core (state machine, difficulty ramp, checkpoint gates)
//! - `renderer`: Per-frame snapshot handed to the draw layer
//! - `platform`: Keyboard plumbing into per-tick input
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Simulation timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Number of checkpoint gates in a row
    pub const CHECKPOINT_COUNT: usize = 3;

    /// Stable entity slots
    pub const PLAYER_INDEX: usize = 0;
    pub const FIRST_CHECKPOINT_INDEX: usize = 1;
    pub const GROUND_INDEX: usize = FIRST_CHECKPOINT_INDEX + CHECKPOINT_COUNT;
    pub const ENTITY_COUNT: usize = GROUND_INDEX + 1;

    /// Reference window height; the score line sits at its top
    pub const HUD_HEIGHT: f32 = 720.0;

    /// Longest frame the runner hands to a single tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Project a world position onto the ground plane (drops height)
#[inline]
pub fn ground_plane(pos: Vec3) -> Vec2 {
    Vec2::new(pos.x, pos.z)
}

