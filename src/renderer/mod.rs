//! Rendering interface
//!
//! The simulation hands the draw layer a snapshot per frame: transforms and
//! colors for every entity, the ground scroll, and the score line.

pub mod instance;
pub mod snapshot;

pub use instance::InstanceRaw;
pub use snapshot::{DrawItem, FrameSnapshot, GroundPattern, HudText};
