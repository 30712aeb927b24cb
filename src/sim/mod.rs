//! Simulation core
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and windowing:
//! - Time comes in as `dt`, never read from a clock
//! - Seeded RNG only
//! - Entities in stable slots, iterated in slot order

pub mod checkpoints;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod state;
pub mod tick;
pub mod transform;

pub use checkpoints::{CheckpointRow, GateResult};
pub use collision::{CheckpointOutcome, evaluate_checkpoint, planar_distance};
pub use difficulty::Difficulty;
pub use entity::{Entity, EntityRole};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{Steer, TickInput, sanitize_dt, tick};
pub use transform::Transform;
