//! Indexed sphere mesh container.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh approximating the unit sphere.
///
/// Positions, normals and faces are stored as parallel flat lists: the
/// normal at index `i` belongs to the vertex at index `i`, and each face
/// is a `[u32; 3]` index triple into the vertex list.
///
/// # Invariants
///
/// - Every position has Euclidean length 1 (within floating-point
///   epsilon); this is what makes the mesh a sphere approximation.
/// - Vertex indices never change once assigned; generation only appends.
/// - `normals` is either empty (not yet computed) or exactly as long as
///   `positions`.
///
/// # Winding Order
///
/// Faces are **counter-clockwise when viewed from outside**, so face
/// normals computed by the right-hand rule point away from the center.
///
/// # Example
///
/// ```
/// use icosphere::base_icosahedron;
///
/// let mesh = base_icosahedron();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.face_count(), 20);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereMesh {
    /// Vertex positions, each on the unit sphere.
    pub positions: Vec<Point3<f64>>,

    /// Per-vertex unit normals, same indexing as `positions`.
    /// Empty until the normal pass has run.
    pub normals: Vec<Vector3<f64>>,

    /// Triangle faces as indices into `positions`, CCW winding.
    pub faces: Vec<[u32; 3]>,
}

impl SphereMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::new(),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no renderable content.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Check whether per-vertex normals have been computed for the
    /// current vertex list.
    #[inline]
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.positions.is_empty() && self.normals.len() == self.positions.len()
    }

    /// Iterate over faces as resolved position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        self.faces.iter().map(|&[a, b, c]| {
            [
                self.positions[a as usize],
                self.positions[b as usize],
                self.positions[c as usize],
            ]
        })
    }

    /// The unnormalized face normal of face `face_index`.
    ///
    /// Cross product of the two edge vectors at the first corner; its
    /// direction follows the winding order and its magnitude is twice the
    /// triangle area. Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn face_normal_unnormalized(&self, face_index: usize) -> Option<Vector3<f64>> {
        let &[a, b, c] = self.faces.get(face_index)?;
        let va = self.positions[a as usize];
        let vb = self.positions[b as usize];
        let vc = self.positions[c as usize];
        Some((vb - va).cross(&(vc - va)))
    }
}
