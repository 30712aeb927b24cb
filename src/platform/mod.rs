//! Platform abstraction layer
//!
//! Window and keyboard callbacks fire whenever the platform likes; the
//! simulation wants one input sample per tick. `input` bridges the two,
//! `clock` measures and caps the frame time handed to each tick.

#[cfg(not(target_arch = "wasm32"))]
pub mod clock;
pub mod input;

#[cfg(not(target_arch = "wasm32"))]
pub use clock::FrameClock;
pub use input::{InputLatch, Key};
