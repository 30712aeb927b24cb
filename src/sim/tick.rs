//! Variable timestep simulation tick
//!
//! One call per rendered frame. The caller measures the frame time and hands
//! it in; the step owns no clock of its own.

use glam::Vec3;

use super::collision::CheckpointOutcome;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Lateral steering for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Left,
    #[default]
    Straight,
    Right,
}

impl Steer {
    /// Combine the two held keys; holding both cancels out
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => Steer::Left,
            (false, true) => Steer::Right,
            _ => Steer::Straight,
        }
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Steer::Left => -1.0,
            Steer::Straight => 0.0,
            Steer::Right => 1.0,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub steer: Steer,
    /// Reset edge (one-shot)
    pub reset: bool,
    /// Idle/demo mode - steer toward the goal gate automatically
    pub autopilot: bool,
}

/// Replace an out-of-contract frame time (negative or NaN) with 0
///
/// Long frames pass through untouched; capping them is the frame loop's job.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 {
        log::warn!("Rejected frame time {dt}, stepping with 0");
        return 0.0;
    }
    dt
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = sanitize_dt(dt);

    if input.reset {
        state.request_reset();
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Resetting => state.apply_reset(),
        GamePhase::FailedSpinning => tick_failed(state, dt),
        GamePhase::Running => {
            let steer = if input.autopilot {
                autopilot_steer(state)
            } else {
                input.steer
            };
            tick_running(state, steer, dt);
        }
    }
}

/// Knocked over: the bunny lies flat and spins, the world holds still
fn tick_failed(state: &mut GameState, dt: f32) {
    let tuning = &state.tuning;
    let finished = state
        .player
        .advance_spin(state.difficulty.spin_speed, dt, tuning.spin_limit_deg);
    let rotation = if finished {
        state.player.orientation(tuning.base_yaw_deg)
    } else {
        state.player.knocked_over_orientation(tuning.base_yaw_deg)
    };

    let player = &mut state.entities[PLAYER_INDEX];
    let pos = player.position();
    player.transform.set_position(Vec3::new(pos.x, 0.0, pos.z));
    player.transform.set_rotation(rotation);

    if finished {
        state.player.bounce_direction = 1.0;
        state.phase = GamePhase::Running;
        state.events.push(GameEvent::SpinFinished);
        log::debug!("Back on its feet");
    }
}

fn tick_running(state: &mut GameState, steer: Steer, dt: f32) {
    state.score += state.tuning.score_per_tick;

    state.difficulty.ramp(dt);
    state.ground_offset -= state.difficulty.ground_speed * dt;

    integrate_player(state, steer, dt);

    let results = {
        let (head, tail) = state.entities.split_at_mut(FIRST_CHECKPOINT_INDEX);
        let player = &head[PLAYER_INDEX];
        let gates = &mut tail[..CHECKPOINT_COUNT];
        state.row.advance(
            gates,
            player,
            state.phase,
            state.difficulty.ground_speed,
            dt,
            &state.tuning,
            &mut state.rng,
        )
    };

    // Gates judged in the same tick resolve to one outcome; an obstacle wins
    let hit = |outcome: CheckpointOutcome| {
        results
            .iter()
            .find(|r| r.outcome == outcome)
            .map(|r| r.slot)
    };
    if let Some(slot) = hit(CheckpointOutcome::ObstacleHit) {
        state.knock_over(slot);
    } else if let Some(slot) = hit(CheckpointOutcome::GoalReached) {
        state.reach_goal(slot);
    }
}

/// Lateral slide, bounce, facing and victory spin
fn integrate_player(state: &mut GameState, steer: Steer, dt: f32) {
    let tuning = &state.tuning;
    let speeds = &state.difficulty;
    let bunny = &mut state.player;
    let entity = &mut state.entities[PLAYER_INDEX];

    // A slide that would cross the edge is dropped for this tick, not truncated
    let mut dx = speeds.side_speed * steer.as_f32() * dt;
    let next_x = entity.position().x + dx;
    if next_x < -tuning.lateral_bound || next_x > tuning.lateral_bound {
        dx = 0.0;
    }
    let dy = bunny.bounce_direction * speeds.bounce_speed * dt;
    entity.transform.translate(Vec3::new(dx, dy, 0.0));

    entity
        .transform
        .set_rotation(bunny.orientation(tuning.base_yaw_deg));

    if bunny.celebrating && bunny.advance_spin(speeds.spin_speed, dt, tuning.spin_limit_deg) {
        bunny.celebrating = false;
        state.events.push(GameEvent::SpinFinished);
    }

    bunny.update_bounce_direction(
        entity.position().y,
        tuning.bounce_floor,
        tuning.bounce_ceiling,
    );
}

/// Steer toward the X slot of the current goal gate
fn autopilot_steer(state: &GameState) -> Steer {
    let target = state.checkpoint(state.goal_index()).position().x;
    let x = state.player_entity().position().x;
    let dead_zone = 0.25;

    if target - x > dead_zone {
        Steer::Right
    } else if x - target > dead_zone {
        Steer::Left
    } else {
        Steer::Straight
    }
}
