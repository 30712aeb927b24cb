//! Data-driven game balance
//!
//! Every tuned number the simulation uses lives here so a run can be
//! retuned from a JSON file without touching the integrators.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Difficulty ramp starting values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RampTuning {
    /// Growth rate of `speed_addition` itself (per second)
    pub speed_addition_increase_speed: f32,
    /// Initial ramp acceleration
    pub speed_addition: f32,
    /// Initial ground scroll speed (units/s)
    pub ground_speed: f32,
    /// Initial bounce speed (units/s)
    pub bounce_speed: f32,
    /// Initial lateral speed (units/s)
    pub side_speed: f32,
    /// Initial spin speed (degrees/s)
    pub spin_speed: f32,
    /// Share of the ramp applied to bounce, side and spin speeds
    pub player_multiplier: f32,
    /// Upper bound on `speed_addition`; unbounded when `None`
    pub max_speed_addition: Option<f32>,
}

impl Default for RampTuning {
    fn default() -> Self {
        Self {
            speed_addition_increase_speed: 0.1,
            speed_addition: 1.0,
            ground_speed: 5.0,
            bounce_speed: 7.0,
            side_speed: 10.0,
            spin_speed: 720.0,
            player_multiplier: 0.1,
            max_speed_addition: None,
        }
    }
}

/// Entity colors (linear RGB)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub player: Vec3,
    pub ground: Vec3,
    pub goal: Vec3,
    pub obstacle: Vec3,
    /// Score text while running
    pub hud_running: Vec3,
    /// Score text while knocked over
    pub hud_failed: Vec3,
}

impl Default for Palette {
    fn default() -> Self {
        let bunny = Vec3::new(1.0, 202.0 / 255.0, 58.0 / 255.0);
        Self {
            player: bunny,
            ground: bunny,
            goal: Vec3::new(1.0, 1.0, 0.0),
            obstacle: Vec3::new(1.0, 0.0, 0.0),
            hud_running: Vec3::new(1.0, 1.0, 0.0),
            hud_failed: Vec3::new(1.0, 0.0, 0.0),
        }
    }
}

/// Complete balance sheet for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ramp: RampTuning,
    pub palette: Palette,

    // === Player ===
    /// Uniform player scale; its X component is the collision radius
    pub player_scale: f32,
    /// Lateral limit, the bunny stays within [-bound, +bound]
    pub lateral_bound: f32,
    /// Bounce turns downward above this height
    pub bounce_ceiling: f32,
    /// Bounce turns upward below this height
    pub bounce_floor: f32,
    /// Resting yaw in degrees (model faces down -Z)
    pub base_yaw_deg: f32,
    /// A spin ends once the angle exceeds this many degrees
    pub spin_limit_deg: f32,

    // === Checkpoints ===
    /// X of slot 0; slot i sits at `row_start_x + i * row_spacing`
    pub row_start_x: f32,
    pub row_spacing: f32,
    pub checkpoint_y: f32,
    /// Spawn depth of every gate
    pub spawn_z: f32,
    pub checkpoint_scale: Vec3,
    /// Gates scroll at this fraction of the ground speed
    pub checkpoint_speed_factor: f32,
    /// A gate is reached once its Z exceeds this
    pub recycle_z: f32,

    // === Ground ===
    pub ground_position: Vec3,
    pub ground_scale: Vec3,
    /// Checkerboard pattern frequency passed to the renderer
    pub checkerboard_scale: f32,

    // === Score ===
    pub score_per_tick: u64,
    pub goal_bonus: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ramp: RampTuning::default(),
            palette: Palette::default(),

            player_scale: 0.9,
            lateral_bound: 7.5,
            bounce_ceiling: 2.0,
            bounce_floor: 0.0,
            base_yaw_deg: -90.0,
            spin_limit_deg: 360.0,

            row_start_x: -6.0,
            row_spacing: 6.0,
            checkpoint_y: 0.75,
            spawn_z: -50.0,
            checkpoint_scale: Vec3::new(1.0, 1.5, 0.5),
            checkpoint_speed_factor: 0.95,
            recycle_z: -0.5,

            ground_position: Vec3::new(0.0, -1.0, 0.0),
            ground_scale: Vec3::new(15.0, 300.0, 1.0),
            checkerboard_scale: 0.1,

            score_per_tick: 1,
            goal_bonus: 1000,
        }
    }
}

impl Tuning {
    /// Spawn position of a checkpoint slot
    pub fn spawn_position(&self, slot: usize) -> Vec3 {
        Vec3::new(
            self.row_start_x + slot as f32 * self.row_spacing,
            self.checkpoint_y,
            self.spawn_z,
        )
    }

    /// Parse a tuning file; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_slots() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_position(0), Vec3::new(-6.0, 0.75, -50.0));
        assert_eq!(tuning.spawn_position(1), Vec3::new(0.0, 0.75, -50.0));
        assert_eq!(tuning.spawn_position(2), Vec3::new(6.0, 0.75, -50.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "goal_bonus": 250, "ramp": { "ground_speed": 8.0 } }"#)
            .unwrap();
        assert_eq!(tuning.goal_bonus, 250);
        assert_eq!(tuning.ramp.ground_speed, 8.0);
        assert_eq!(tuning.ramp.bounce_speed, 7.0);
        assert_eq!(tuning.recycle_z, -0.5);
        assert!(tuning.ramp.max_speed_addition.is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut tuning = Tuning::default();
        tuning.ramp.max_speed_addition = Some(4.0);
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ goal_bonus: }").is_err());
    }
}
