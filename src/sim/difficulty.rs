//! Difficulty ramp
//!
//! Speeds creep up with elapsed time. The ramp accelerates itself, so the
//! ground speeds up quadratically while the bunny's own speeds follow at a
//! tenth of the rate.

use crate::tuning::RampTuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    /// Current ramp acceleration
    pub speed_addition: f32,
    pub speed_addition_increase_speed: f32,
    pub ground_speed: f32,
    pub bounce_speed: f32,
    pub side_speed: f32,
    /// Degrees per second
    pub spin_speed: f32,
    pub player_multiplier: f32,
    pub max_speed_addition: Option<f32>,
}

impl Difficulty {
    pub fn new(tuning: &RampTuning) -> Self {
        Self {
            speed_addition: tuning.speed_addition,
            speed_addition_increase_speed: tuning.speed_addition_increase_speed,
            ground_speed: tuning.ground_speed,
            bounce_speed: tuning.bounce_speed,
            side_speed: tuning.side_speed,
            spin_speed: tuning.spin_speed,
            player_multiplier: tuning.player_multiplier,
            max_speed_addition: tuning.max_speed_addition,
        }
    }

    /// Advance the ramp by `dt` seconds (dt >= 0)
    pub fn ramp(&mut self, dt: f32) {
        self.speed_addition += self.speed_addition_increase_speed * dt;
        if let Some(cap) = self.max_speed_addition {
            self.speed_addition = self.speed_addition.min(cap);
        }

        let step = self.speed_addition * dt;
        let player_step = step * self.player_multiplier;
        self.ground_speed += step;
        self.bounce_speed += player_step;
        self.side_speed += player_step;
        self.spin_speed += player_step;
    }
}
