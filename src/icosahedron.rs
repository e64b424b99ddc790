//! Base icosahedron construction.

use nalgebra::{Point3, Vector3};

use crate::mesh::SphereMesh;

/// The 20 faces of a regular icosahedron, CCW winding viewed from outside.
///
/// A fixed topological constant: each vertex touches exactly 5 faces and
/// each edge is shared by exactly 2 faces. Indices refer to the vertex
/// order produced by [`base_icosahedron`].
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    // 5 faces around vertex 0
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    // 5 adjacent faces
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    // 5 faces around vertex 3
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    // 5 adjacent faces
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Build the base icosahedron with all 12 vertices on the unit sphere.
///
/// The vertices are the cyclic-axis permutations of `(±1, ±t, 0)` where
/// `t = (1 + √5) / 2` is the golden ratio, each normalized to unit length.
/// Construction is unconditional and deterministic.
///
/// The returned mesh has no normals; run the full generation pipeline (or
/// [`generate_icosphere`](crate::generate_icosphere) with 0 subdivisions)
/// to obtain a shadeable mesh.
///
/// # Example
///
/// ```
/// use icosphere::base_icosahedron;
///
/// let ico = base_icosahedron();
/// assert_eq!(ico.vertex_count(), 12);
/// assert_eq!(ico.face_count(), 20);
/// for p in &ico.positions {
///     assert!((p.coords.norm() - 1.0).abs() < 1e-10);
/// }
/// ```
#[must_use]
pub fn base_icosahedron() -> SphereMesh {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;

    let raw = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ];

    let mut mesh = SphereMesh::with_capacity(12, 20);
    mesh.positions.extend(
        raw.iter()
            .map(|&(x, y, z)| Point3::from(Vector3::new(x, y, z).normalize())),
    );
    mesh.faces.extend_from_slice(&ICOSAHEDRON_FACES);
    mesh
}
