//! # Mesh Buffers
//!
//! Parallel vertex / normal / UV / index buffers shared by every mesh
//! builder. Builders only ever append; a reused buffer set is cleared first.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::error::MeshError;

/// Interleaved vertex layout for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Flat-shaded triangle mesh stored as parallel buffers.
///
/// `normals` and `uvs` always have one entry per vertex. `indices` holds
/// counter-clockwise triangles (seen from outside).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers with room for `boxes` oriented boxes.
    pub fn with_box_capacity(boxes: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(boxes * 24),
            normals: Vec::with_capacity(boxes * 24),
            uvs: Vec::with_capacity(boxes * 24),
            indices: Vec::with_capacity(boxes * 36),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Empties every buffer, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    /// Appends another buffer set, offsetting its indices.
    pub fn extend(&mut self, other: &MeshBuffers) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }

    /// Axis-aligned bounds as (min, max); zero for an empty mesh.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.vertices.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        self.vertices[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Checks that the buffers are parallel and every index is in range.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        if self.normals.len() != vertex_count || self.uvs.len() != vertex_count {
            return Err(MeshError::MismatchedBuffers {
                vertices: vertex_count,
                normals: self.normals.len(),
                uvs: self.uvs.len(),
            });
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle {
                count: self.indices.len(),
            });
        }

        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, &i)| i as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                position,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Interleaves the parallel buffers into one GPU vertex array.
    pub fn interleaved(&self) -> Vec<GpuVertex> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| GpuVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }

    /// Index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshBuffers {
        MeshBuffers {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            normals: vec![Vec3::Z; 3],
            uvs: vec![Vec2::ZERO, Vec2::X, Vec2::Y],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_new_is_empty() {
        let mesh = MeshBuffers::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_extend_offsets_indices() {
        let mut mesh = triangle();
        mesh.extend(&triangle());
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut mesh = triangle();
        let capacity = mesh.vertices.capacity();
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertices.capacity(), capacity);
    }

    #[test]
    fn test_validate_index_out_of_range() {
        let mut mesh = triangle();
        mesh.indices = vec![0, 1, 3];
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                index: 3,
                position: 2,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_validate_mismatched_buffers() {
        let mut mesh = triangle();
        mesh.normals.pop();
        assert!(matches!(mesh.validate(), Err(MeshError::MismatchedBuffers { .. })));
    }

    #[test]
    fn test_validate_partial_triangle() {
        let mut mesh = triangle();
        mesh.indices.push(0);
        assert_eq!(mesh.validate(), Err(MeshError::PartialTriangle { count: 4 }));
    }

    #[test]
    fn test_bounding_box() {
        let mesh = triangle();
        assert_eq!(mesh.bounding_box(), (Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(MeshBuffers::new().bounding_box(), (Vec3::ZERO, Vec3::ZERO));
    }

    #[test]
    fn test_interleaved_and_bytes() {
        let mesh = triangle();
        let verts = mesh.interleaved();
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[1].normal, [0.0, 0.0, 1.0]);
        assert_eq!(verts[2].uv, [0.0, 1.0]);
        assert_eq!(mesh.index_bytes().len(), 12);
        assert_eq!(std::mem::size_of::<GpuVertex>(), 32);
    }
}
