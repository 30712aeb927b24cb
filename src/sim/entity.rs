//! Entities: a transform plus a color, tagged with the role it plays
//!
//! All entities live in one fixed array (see `crate::consts`) so the renderer
//! can walk them uniformly while the simulation addresses them by role.

use glam::Vec3;

use super::transform::Transform;

/// What an entity is to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRole {
    Player,
    /// Checkpoint gate in the given row slot (0..3)
    Checkpoint(usize),
    /// The scrolling checkerboard floor
    Ground,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub role: EntityRole,
    pub transform: Transform,
    pub color: Vec3,
}

impl Entity {
    pub fn new(role: EntityRole, transform: Transform, color: Vec3) -> Self {
        Self {
            role,
            transform,
            color,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Collision radius (X scale by convention)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.transform.scale.x
    }
}
