//! Keyboard state folded into per-tick input
//!
//! Key callbacks write into the latch; the frame loop calls `take` exactly
//! once per tick. Held keys persist across ticks, the reset edge does not.

use crate::sim::{Steer, TickInput};

/// Logical keys the game reacts to (A/Left, D/Right, R)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    left_held: bool,
    right_held: bool,
    reset_pending: bool,
    /// Demo mode flag carried into every tick
    pub autopilot: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
            Key::Reset => self.reset_pending = true,
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Reset => {}
        }
    }

    /// Current steering from the held keys
    pub fn steer(&self) -> Steer {
        Steer::from_keys(self.left_held, self.right_held)
    }

    /// Sample input for one tick, consuming the reset edge
    pub fn take(&mut self) -> TickInput {
        TickInput {
            steer: self.steer(),
            reset: std::mem::take(&mut self.reset_pending),
            autopilot: self.autopilot,
        }
    }
}
