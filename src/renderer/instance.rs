//! Per-instance data for drawing entity meshes

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::snapshot::DrawItem;

/// Model matrix, its inverse transpose (for normals) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4,
        9 => Float32x4,
        10 => Float32x4,
    ];

    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
            color,
        }
    }

    pub fn from_item(item: &DrawItem) -> Self {
        Self::new(item.world_matrix(), item.color.extend(1.0).to_array())
    }

    /// Layout for an instance-rate vertex buffer (locations 0-1 are the mesh)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_layout_matches_struct() {
        let desc = InstanceRaw::desc();
        assert_eq!(desc.array_stride, 144);
        assert_eq!(desc.attributes.len(), 9);
        assert_eq!(desc.attributes[8].offset, 128);
        assert_eq!(bytemuck::bytes_of(&InstanceRaw::zeroed()).len(), 144);
    }

    #[test]
    fn test_normal_matrix_of_uniform_scale() {
        let raw = InstanceRaw::new(Mat4::from_scale(Vec3::splat(2.0)), [1.0; 4]);
        assert!((raw.normal[0][0] - 0.5).abs() < 1e-6);
        assert_eq!(raw.model[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
