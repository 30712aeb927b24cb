//! Game state and core simulation types
//!
//! Everything the step mutates is owned by `GameState`; nothing lives in
//! globals. Entities are allocated once and only their fields are reset.

use glam::{Mat3, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::checkpoints::CheckpointRow;
use super::difficulty::Difficulty;
use super::entity::{Entity, EntityRole};
use super::transform::{Transform, yaw};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Normal play
    Running,
    /// Knocked over by an obstacle, spinning on the ground
    FailedSpinning,
    /// Reset requested; consumed by the next tick
    Resetting,
}

/// Notable things that happened during a tick, drained by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GoalReached { slot: usize },
    ObstacleHit { slot: usize },
    /// A spin (celebration or knock-over) finished
    SpinFinished,
    Reset,
}

/// Bunny motion state beyond its transform
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// +1 rising, -1 falling
    pub bounce_direction: f32,
    /// Extra yaw in degrees while spinning
    pub spin_deg: f32,
    /// Victory spin after a goal; does not interrupt play
    pub celebrating: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            bounce_direction: 1.0,
            spin_deg: 0.0,
            celebrating: false,
        }
    }
}

impl Player {
    /// Advance the spin; returns true once it completes a full turn
    pub fn advance_spin(&mut self, spin_speed: f32, dt: f32, limit_deg: f32) -> bool {
        self.spin_deg += spin_speed * dt;
        if self.spin_deg > limit_deg {
            self.spin_deg = 0.0;
            return true;
        }
        false
    }

    /// Ping-pong the bounce once the bunny leaves [floor, ceiling]
    pub fn update_bounce_direction(&mut self, y: f32, floor: f32, ceiling: f32) {
        if self.bounce_direction > 0.0 && y > ceiling {
            self.bounce_direction = -1.0;
        } else if self.bounce_direction < 0.0 && y < floor {
            self.bounce_direction = 1.0;
        }
    }

    /// Upright orientation including the current spin
    pub fn orientation(&self, base_yaw_deg: f32) -> Mat3 {
        yaw(base_yaw_deg + self.spin_deg)
    }

    /// Orientation while lying on its side after a crash
    pub fn knocked_over_orientation(&self, base_yaw_deg: f32) -> Mat3 {
        self.orientation(base_yaw_deg) * Mat3::from_rotation_x((-90.0f32).to_radians())
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Player, checkpoints and ground in stable slots
    pub entities: [Entity; ENTITY_COUNT],
    pub player: Player,
    pub row: CheckpointRow,
    pub difficulty: Difficulty,
    /// Checkerboard scroll offset fed to the renderer
    pub ground_offset: f32,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let row = CheckpointRow::new(&tuning, &mut rng);
        let [gate0, gate1, gate2] = row.spawn_gates(&tuning);

        let mut player = Entity::new(
            EntityRole::Player,
            Transform::new(Vec3::ZERO, Vec3::splat(tuning.player_scale)),
            tuning.palette.player,
        );
        let bunny = Player::default();
        player.transform.set_rotation(bunny.orientation(tuning.base_yaw_deg));

        let entities = [player, gate0, gate1, gate2, Self::ground_entity(&tuning)];

        Self {
            seed,
            rng,
            difficulty: Difficulty::new(&tuning.ramp),
            tuning,
            entities,
            player: bunny,
            row,
            ground_offset: 0.0,
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    fn ground_entity(tuning: &Tuning) -> Entity {
        let mut ground = Entity::new(
            EntityRole::Ground,
            Transform::new(tuning.ground_position, tuning.ground_scale),
            tuning.palette.ground,
        );
        // The quad is authored in XY; lay it flat
        ground.transform.rotate(-90.0, Vec3::X);
        ground
    }

    // === Role accessors ===

    #[inline]
    pub fn player_entity(&self) -> &Entity {
        &self.entities[PLAYER_INDEX]
    }

    #[inline]
    pub fn player_entity_mut(&mut self) -> &mut Entity {
        &mut self.entities[PLAYER_INDEX]
    }

    #[inline]
    pub fn checkpoint(&self, slot: usize) -> &Entity {
        &self.entities[FIRST_CHECKPOINT_INDEX + slot]
    }

    #[inline]
    pub fn checkpoint_mut(&mut self, slot: usize) -> &mut Entity {
        &mut self.entities[FIRST_CHECKPOINT_INDEX + slot]
    }

    pub fn checkpoints(&self) -> &[Entity] {
        &self.entities[FIRST_CHECKPOINT_INDEX..GROUND_INDEX]
    }

    #[inline]
    pub fn ground(&self) -> &Entity {
        &self.entities[GROUND_INDEX]
    }

    #[inline]
    pub fn goal_index(&self) -> usize {
        self.row.goal_index()
    }

    #[inline]
    pub fn is_goal(&self, slot: usize) -> bool {
        self.row.is_goal(slot)
    }

    /// Score line shown on the HUD
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// HUD text color: red while knocked over, yellow otherwise
    pub fn hud_color(&self) -> Vec3 {
        match self.phase {
            GamePhase::FailedSpinning => self.tuning.palette.hud_failed,
            _ => self.tuning.palette.hud_running,
        }
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Phase transitions ===

    /// Ask for a reset on the next tick (repeat requests are ignored)
    pub fn request_reset(&mut self) {
        if self.phase != GamePhase::Resetting {
            log::info!("Reset requested at score {}", self.score);
            self.phase = GamePhase::Resetting;
        }
    }

    /// Put every mutable field back to its startup value
    ///
    /// Entities are rewritten in place and keep their slots. The rng keeps
    /// running so each restart draws a fresh goal.
    pub fn apply_reset(&mut self) {
        let tuning = &self.tuning;

        self.row = CheckpointRow::new(tuning, &mut self.rng);
        let gates = self.row.spawn_gates(tuning);
        for (slot, gate) in gates.into_iter().enumerate() {
            self.entities[FIRST_CHECKPOINT_INDEX + slot] = gate;
        }
        self.entities[GROUND_INDEX] = Self::ground_entity(tuning);

        self.player = Player::default();
        let rotation = self.player.orientation(tuning.base_yaw_deg);
        let player = &mut self.entities[PLAYER_INDEX];
        player.transform.set_position(Vec3::ZERO);
        player.transform.set_uniform_scale(tuning.player_scale);
        player.transform.set_rotation(rotation);

        self.difficulty = Difficulty::new(&tuning.ramp);
        self.ground_offset = 0.0;
        self.score = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Reset);

        log::info!("Game reset, goal in slot {}", self.row.goal_index());
    }

    /// Enter the knocked-over spin after hitting an obstacle
    pub fn knock_over(&mut self, slot: usize) {
        self.player.celebrating = false;
        self.player.spin_deg = 0.0;
        self.phase = GamePhase::FailedSpinning;
        self.events.push(GameEvent::ObstacleHit { slot });
        log::debug!("Obstacle hit in slot {slot} at score {}", self.score);
    }

    /// Award the goal bonus and start the victory spin
    ///
    /// Ignored while knocked over. A goal passed during a victory spin that
    /// is still turning recycles without a second bonus.
    pub fn reach_goal(&mut self, slot: usize) {
        if self.phase == GamePhase::FailedSpinning {
            return;
        }
        if self.player.celebrating {
            log::debug!("Goal in slot {slot} passed mid-celebration, no bonus");
            return;
        }
        self.score += self.tuning.goal_bonus;
        self.player.celebrating = true;
        self.events.push(GameEvent::GoalReached { slot });
        log::debug!("Goal reached in slot {slot}, score {}", self.score);
    }
}
