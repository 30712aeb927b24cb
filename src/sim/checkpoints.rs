//! Checkpoint row manager
//!
//! Three gates scroll toward the bunny. Once a gate passes the bunny's plane
//! it is judged, then sent back to its spawn slot. Whenever at least one gate
//! is recycled in a tick, a single new goal slot is drawn for the whole row.

use glam::Vec3;
use rand::Rng;

use super::collision::{CheckpointOutcome, evaluate_checkpoint};
use super::entity::{Entity, EntityRole};
use super::state::GamePhase;
use super::transform::Transform;
use crate::consts::CHECKPOINT_COUNT;
use crate::tuning::{Palette, Tuning};

/// A gate that reached the bunny this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateResult {
    pub slot: usize,
    pub outcome: CheckpointOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointRow {
    /// Slot currently holding the goal
    goal_index: usize,
    /// Recorded spawn position of each slot
    spawn: [Vec3; CHECKPOINT_COUNT],
}

impl CheckpointRow {
    pub fn new<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            goal_index: rng.random_range(0..CHECKPOINT_COUNT),
            spawn: std::array::from_fn(|slot| tuning.spawn_position(slot)),
        }
    }

    /// Build the gate entities at their spawn slots, colored for the current goal
    pub fn spawn_gates(&self, tuning: &Tuning) -> [Entity; CHECKPOINT_COUNT] {
        std::array::from_fn(|slot| {
            Entity::new(
                EntityRole::Checkpoint(slot),
                Transform::new(self.spawn[slot], tuning.checkpoint_scale),
                self.color_for(slot, &tuning.palette),
            )
        })
    }

    #[inline]
    pub fn goal_index(&self) -> usize {
        self.goal_index
    }

    #[inline]
    pub fn is_goal(&self, slot: usize) -> bool {
        slot == self.goal_index
    }

    pub fn spawn_position(&self, slot: usize) -> Vec3 {
        self.spawn[slot]
    }

    fn color_for(&self, slot: usize, palette: &Palette) -> Vec3 {
        if self.is_goal(slot) {
            palette.goal
        } else {
            palette.obstacle
        }
    }

    /// Draw a new goal slot and recolor the row
    pub fn reassign_goal<R: Rng + ?Sized>(
        &mut self,
        gates: &mut [Entity],
        palette: &Palette,
        rng: &mut R,
    ) {
        self.goal_index = rng.random_range(0..CHECKPOINT_COUNT);
        for (slot, gate) in gates.iter_mut().enumerate() {
            gate.color = self.color_for(slot, palette);
        }
        log::debug!("Goal moved to slot {}", self.goal_index);
    }

    /// Move every gate toward the bunny, judging and recycling the ones that pass
    ///
    /// Returns the outcome of each gate that reached the bunny, in slot order.
    #[allow(clippy::too_many_arguments)]
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        gates: &mut [Entity],
        player: &Entity,
        phase: GamePhase,
        ground_speed: f32,
        dt: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Vec<GateResult> {
        let step = ground_speed * dt * tuning.checkpoint_speed_factor;
        let mut results = Vec::new();

        for (slot, gate) in gates.iter_mut().enumerate() {
            gate.transform.translate(Vec3::new(0.0, 0.0, step));

            if gate.position().z > tuning.recycle_z {
                let outcome = evaluate_checkpoint(
                    player.position(),
                    player.radius(),
                    gate.position(),
                    gate.radius(),
                    self.is_goal(slot),
                    phase,
                );
                results.push(GateResult { slot, outcome });
                gate.transform.set_position(self.spawn[slot]);
            }
        }

        if !results.is_empty() {
            self.reassign_goal(gates, &tuning.palette, rng);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup(seed: u64) -> (Tuning, CheckpointRow, [Entity; CHECKPOINT_COUNT], Entity, Pcg32) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let row = CheckpointRow::new(&tuning, &mut rng);
        let gates = row.spawn_gates(&tuning);
        let player = Entity::new(
            EntityRole::Player,
            Transform::new(Vec3::ZERO, Vec3::splat(tuning.player_scale)),
            tuning.palette.player,
        );
        (tuning, row, gates, player, rng)
    }

    fn goal_count(row: &CheckpointRow) -> usize {
        (0..CHECKPOINT_COUNT).filter(|&s| row.is_goal(s)).count()
    }

    #[test]
    fn test_spawn_layout_and_colors() {
        let (tuning, row, gates, _, _) = setup(7);
        for (slot, gate) in gates.iter().enumerate() {
            assert_eq!(gate.role, EntityRole::Checkpoint(slot));
            assert_eq!(gate.position(), tuning.spawn_position(slot));
            let expected = if row.is_goal(slot) {
                tuning.palette.goal
            } else {
                tuning.palette.obstacle
            };
            assert_eq!(gate.color, expected);
        }
        assert_eq!(goal_count(&row), 1);
    }

    #[test]
    fn test_gates_scroll_at_reduced_speed() {
        let (tuning, mut row, mut gates, player, mut rng) = setup(1);
        let results = row.advance(
            &mut gates,
            &player,
            GamePhase::Running,
            10.0,
            0.5,
            &tuning,
            &mut rng,
        );
        assert!(results.is_empty());
        for gate in &gates {
            assert!((gate.position().z - (-50.0 + 10.0 * 0.5 * 0.95)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_recycle_returns_to_spawn_exactly() {
        let (tuning, mut row, mut gates, player, mut rng) = setup(3);
        // Slot 2 far past the threshold, the others still approaching
        gates[2].transform.set_position(Vec3::new(6.0, 0.75, 12.0));

        let results = row.advance(
            &mut gates,
            &player,
            GamePhase::Running,
            5.0,
            0.1,
            &tuning,
            &mut rng,
        );

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slot, 2);
        assert_eq!(results[0].outcome, CheckpointOutcome::NoHit);
        assert_eq!(gates[2].position(), row.spawn_position(2));
        assert!(gates[0].position().z > -50.0);
        assert_eq!(goal_count(&row), 1);
    }

    #[test]
    fn test_simultaneous_recycle_draws_goal_once() {
        let (tuning, mut row, mut gates, mut player, _) = setup(11);
        player.transform.set_position(Vec3::new(20.0, 0.0, 0.0));
        for gate in gates.iter_mut() {
            let mut p = gate.position();
            p.z = -0.45;
            gate.transform.set_position(p);
        }

        // Twin rng seeded identically; the row should consume exactly one draw
        let mut rng = Pcg32::seed_from_u64(99);
        let mut reference = Pcg32::seed_from_u64(99);
        let expected_goal = reference.random_range(0..CHECKPOINT_COUNT);

        let results = row.advance(
            &mut gates,
            &player,
            GamePhase::Running,
            5.0,
            0.01,
            &tuning,
            &mut rng,
        );

        assert_eq!(results.len(), 3);
        assert_eq!(row.goal_index(), expected_goal);
        // The shared rng advanced by exactly one draw
        assert_eq!(
            rng.random_range(0..1000u32),
            reference.random_range(0..1000u32)
        );
        for (slot, gate) in gates.iter().enumerate() {
            assert_eq!(gate.position(), row.spawn_position(slot));
        }
    }

    #[test]
    fn test_gate_in_lane_is_judged() {
        let (tuning, mut row, mut gates, player, mut rng) = setup(5);
        let goal = row.goal_index();
        let obstacle = (goal + 1) % CHECKPOINT_COUNT;

        // Move the obstacle into the bunny's lane right at the threshold
        gates[obstacle]
            .transform
            .set_position(Vec3::new(0.0, 0.75, -0.4));

        let results = row.advance(
            &mut gates,
            &player,
            GamePhase::Running,
            5.0,
            0.001,
            &tuning,
            &mut rng,
        );
        assert_eq!(
            results,
            vec![GateResult {
                slot: obstacle,
                outcome: CheckpointOutcome::ObstacleHit
            }]
        );
    }
}
