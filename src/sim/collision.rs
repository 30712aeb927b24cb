//! Checkpoint collision and scoring rule
//!
//! Collision is a flat footprint test: the bunny and a gate are discs on the
//! ground plane, height is ignored. The rule only classifies the contact;
//! the caller applies score and phase changes.

use glam::Vec3;

use super::state::GamePhase;
use crate::ground_plane;

/// What happened when a gate reached the bunny
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointOutcome {
    /// Passed without touching
    NoHit,
    /// Touched the goal gate
    GoalReached,
    /// Touched an obstacle gate
    ObstacleHit,
}

/// Distance between two points projected onto the XZ plane
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    ground_plane(a).distance(ground_plane(b))
}

/// Classify a gate passing the bunny
///
/// A goal touched while the bunny is already knocked over counts as a miss.
pub fn evaluate_checkpoint(
    player_pos: Vec3,
    player_radius: f32,
    checkpoint_pos: Vec3,
    checkpoint_radius: f32,
    is_goal: bool,
    phase: GamePhase,
) -> CheckpointOutcome {
    let hit = planar_distance(player_pos, checkpoint_pos) < player_radius + checkpoint_radius;

    match (hit, is_goal) {
        (true, true) if phase != GamePhase::FailedSpinning => CheckpointOutcome::GoalReached,
        (true, false) => CheckpointOutcome::ObstacleHit,
        _ => CheckpointOutcome::NoHit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_hit() {
        let outcome = evaluate_checkpoint(
            Vec3::ZERO,
            0.9,
            Vec3::new(0.0, 0.0, -0.4),
            1.0,
            true,
            GamePhase::Running,
        );
        assert_eq!(outcome, CheckpointOutcome::GoalReached);
    }

    #[test]
    fn test_obstacle_hit() {
        let outcome = evaluate_checkpoint(
            Vec3::ZERO,
            0.9,
            Vec3::new(0.0, 0.0, -0.4),
            1.0,
            false,
            GamePhase::Running,
        );
        assert_eq!(outcome, CheckpointOutcome::ObstacleHit);
    }

    #[test]
    fn test_far_gate_misses() {
        for is_goal in [true, false] {
            let outcome = evaluate_checkpoint(
                Vec3::ZERO,
                0.9,
                Vec3::new(10.0, 0.0, 0.0),
                1.0,
                is_goal,
                GamePhase::Running,
            );
            assert_eq!(outcome, CheckpointOutcome::NoHit);
        }
    }

    #[test]
    fn test_height_is_ignored() {
        // Bunny at the top of its bounce still clips a low gate
        let outcome = evaluate_checkpoint(
            Vec3::new(0.0, 2.0, 0.0),
            0.9,
            Vec3::new(1.5, 0.75, -0.2),
            1.0,
            false,
            GamePhase::Running,
        );
        assert_eq!(outcome, CheckpointOutcome::ObstacleHit);
    }

    #[test]
    fn test_touching_exactly_is_not_a_hit() {
        let outcome = evaluate_checkpoint(
            Vec3::ZERO,
            1.0,
            Vec3::new(2.0, 0.0, 0.0),
            1.0,
            false,
            GamePhase::Running,
        );
        assert_eq!(outcome, CheckpointOutcome::NoHit);
    }

    #[test]
    fn test_goal_while_failed_is_ignored() {
        let outcome = evaluate_checkpoint(
            Vec3::ZERO,
            0.9,
            Vec3::ZERO,
            1.0,
            true,
            GamePhase::FailedSpinning,
        );
        assert_eq!(outcome, CheckpointOutcome::NoHit);
    }

    #[test]
    fn test_planar_distance() {
        let d = planar_distance(Vec3::new(0.0, 5.0, 0.0), Vec3::new(3.0, -1.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }
}
