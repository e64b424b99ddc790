//! Hand-off to an external renderable-mesh sink.

// f64 -> f32 narrowing is intentional at the GPU-facing boundary
#![allow(clippy::cast_possible_truncation)]

use nalgebra::{Point3, Vector3};

use crate::error::{IcosphereError, IcosphereResult};
use crate::mesh::SphereMesh;

/// A sink that accepts a finished mesh one record at a time.
///
/// This is the narrow contract between the generator and whatever uploads
/// the data to a GPU: one `push_vertex` call per vertex+normal pair, then
/// one `push_triangle` call per face, both in list order.
pub trait MeshSink {
    /// Append one vertex with its normal.
    fn push_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>);

    /// Append one triangle as indices into the vertices pushed so far.
    fn push_triangle(&mut self, a: u32, b: u32, c: u32);
}

/// Push a finished mesh into a sink, preserving list order.
///
/// Purely a translation step. The mesh must already have normals for its
/// current vertex list (i.e. the normal pass ran after the final
/// topology change); emitting a mesh with stale or missing normals is
/// rejected rather than silently producing a broken buffer.
///
/// # Errors
///
/// Returns [`IcosphereError::NormalsNotComputed`] if the normal list does
/// not match the vertex list.
pub fn emit_mesh<S: MeshSink>(mesh: &SphereMesh, sink: &mut S) -> IcosphereResult<()> {
    if !mesh.has_normals() {
        return Err(IcosphereError::NormalsNotComputed {
            vertices: mesh.positions.len(),
            normals: mesh.normals.len(),
        });
    }

    for (position, normal) in mesh.positions.iter().zip(&mesh.normals) {
        sink.push_vertex(*position, *normal);
    }
    for &[a, b, c] in &mesh.faces {
        sink.push_triangle(a, b, c);
    }

    Ok(())
}

/// A [`MeshSink`] that collects flat GPU-ready buffers.
///
/// Positions and normals are narrowed to `f32` triplets and indices
/// flattened to a single `u32` array, the layout a vertex/index buffer
/// upload expects.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    /// Vertex positions as `[x, y, z]` triplets.
    pub positions: Vec<[f32; 3]>,

    /// Vertex normals as `[x, y, z]` triplets, parallel to `positions`.
    pub normals: Vec<[f32; 3]>,

    /// Triangle indices, three per face.
    pub indices: Vec<u32>,
}

impl BufferSink {
    /// Create an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }
}

impl MeshSink for BufferSink {
    fn push_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions
            .push([position.x as f32, position.y as f32, position.z as f32]);
        self.normals
            .push([normal.x as f32, normal.y as f32, normal.z as f32]);
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}
