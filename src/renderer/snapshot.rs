//! What the draw layer needs from one simulated frame
//!
//! Captured after the tick completes, so the renderer never observes a
//! half-updated world.

use glam::{Mat4, Vec3};

use super::instance::InstanceRaw;
use crate::consts::HUD_HEIGHT;
use crate::sim::{EntityRole, GameState};

/// Scrolling checkerboard parameters for the ground shader
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPattern {
    pub offset: f32,
    pub scale: f32,
}

/// One entity ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub role: EntityRole,
    pub position: Mat4,
    pub rotation: Mat4,
    pub scale: Mat4,
    pub color: Vec3,
    /// Point light hovering above and behind the entity
    pub light_pos: Vec3,
    /// Only set for the ground
    pub pattern: Option<GroundPattern>,
}

impl DrawItem {
    pub fn world_matrix(&self) -> Mat4 {
        self.position * self.rotation * self.scale
    }
}

/// Score line in screen space (origin bottom-left, y at the baseline)
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// In entity slot order
    pub items: Vec<DrawItem>,
    pub hud: HudText,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let items = state
            .entities
            .iter()
            .map(|entity| {
                let t = &entity.transform;
                let pattern = (entity.role == EntityRole::Ground).then(|| GroundPattern {
                    offset: state.ground_offset,
                    scale: state.tuning.checkerboard_scale,
                });
                DrawItem {
                    role: entity.role,
                    position: t.position_matrix(),
                    rotation: t.rotation_matrix(),
                    scale: t.scale_matrix(),
                    color: entity.color,
                    light_pos: t.position + Vec3::new(0.0, 3.0, 5.0),
                    pattern,
                }
            })
            .collect();

        Self {
            items,
            hud: HudText {
                text: state.score_text(),
                x: 0.0,
                y: HUD_HEIGHT,
                color: state.hud_color(),
            },
        }
    }

    /// GPU instance data in slot order
    pub fn instances(&self) -> Vec<InstanceRaw> {
        self.items.iter().map(InstanceRaw::from_item).collect()
    }
}
