//! Midpoint subdivision of the sphere mesh.

// Vertex indices are u32 by design; counts are guarded by max_faces
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use nalgebra::Point3;
use tracing::debug;

use crate::mesh::SphereMesh;

/// Apply `rounds` rounds of uniform 1-to-4 triangle refinement.
///
/// Each round splits every face `(a, b, c)` into four by introducing one
/// deduplicated midpoint vertex per edge, projected back onto the unit
/// sphere. The face list is rebuilt wholesale each round; the vertex list
/// only grows, so existing indices stay valid.
///
/// Zero rounds is a no-op and leaves the base solid untouched.
pub(crate) fn subdivide(mesh: &mut SphereMesh, rounds: u32) {
    for round in 0..rounds {
        subdivide_once(mesh);
        debug!(
            round = round + 1,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "subdivision round complete"
        );
    }
}

/// One 1-to-4 refinement round.
///
/// The edge-midpoint cache lives for the whole round and is shared by
/// every lookup within it: an edge shared by two triangles must yield
/// exactly one new vertex, or the mesh ends up with coincident duplicate
/// vertices and cracked shading.
fn subdivide_once(mesh: &mut SphereMesh) {
    let old_faces = std::mem::take(&mut mesh.faces);
    let mut new_faces = Vec::with_capacity(old_faces.len() * 4);

    // Unordered edge (lo, hi) -> index of its midpoint vertex
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    for [a, b, c] in old_faces {
        let ab = midpoint_index(mesh, &mut midpoints, a, b);
        let bc = midpoint_index(mesh, &mut midpoints, b, c);
        let ca = midpoint_index(mesh, &mut midpoints, c, a);

        // Three corner triangles plus the central one, winding preserved
        new_faces.push([a, ab, ca]);
        new_faces.push([b, bc, ab]);
        new_faces.push([c, ca, bc]);
        new_faces.push([ab, bc, ca]);
    }

    mesh.faces = new_faces;
}

/// Get or create the midpoint vertex for the edge `(a, b)`.
///
/// On a cache miss the midpoint of the two endpoints is normalized back
/// onto the unit sphere, appended to the vertex list, and recorded under
/// the unordered edge key before returning.
fn midpoint_index(
    mesh: &mut SphereMesh,
    midpoints: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let edge = normalize_edge(a, b);

    if let Some(&index) = midpoints.get(&edge) {
        return index;
    }

    let pa = mesh.positions[a as usize].coords;
    let pb = mesh.positions[b as usize].coords;
    let midpoint = Point3::from(((pa + pb) * 0.5).normalize());

    let index = mesh.positions.len() as u32;
    mesh.positions.push(midpoint);
    midpoints.insert(edge, index);

    index
}

/// Normalize an edge so the smaller vertex index comes first.
const fn normalize_edge(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::icosahedron::base_icosahedron;
    use hashbrown::HashMap;

    /// Expected vertex count after `k` rounds: 2 + 10 * 4^k.
    fn expected_vertices(k: u32) -> usize {
        2 + 10 * 4usize.pow(k)
    }

    /// Expected face count after `k` rounds: 20 * 4^k.
    fn expected_faces(k: u32) -> usize {
        20 * 4usize.pow(k)
    }

    #[test]
    fn zero_rounds_is_identity() {
        let mut mesh = base_icosahedron();
        subdivide(&mut mesh, 0);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.face_count(), 20);
    }

    #[test]
    fn icosphere_growth_counts() {
        for k in 0..=3 {
            let mut mesh = base_icosahedron();
            subdivide(&mut mesh, k);
            assert_eq!(mesh.vertex_count(), expected_vertices(k), "vertices at k={k}");
            assert_eq!(mesh.face_count(), expected_faces(k), "faces at k={k}");
        }
    }

    #[test]
    fn all_vertices_stay_on_unit_sphere() {
        let mut mesh = base_icosahedron();
        subdivide(&mut mesh, 3);
        for p in &mesh.positions {
            assert!((p.coords.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn shared_edges_produce_shared_midpoints() {
        // If the cache were not shared across the round, every edge would
        // get its own midpoint and coincident duplicates would appear.
        let mut mesh = base_icosahedron();
        subdivide(&mut mesh, 2);

        let mut seen: HashMap<[i64; 3], u32> = HashMap::new();
        for (i, p) in mesh.positions.iter().enumerate() {
            let key = [
                (p.x * 1e9).round() as i64,
                (p.y * 1e9).round() as i64,
                (p.z * 1e9).round() as i64,
            ];
            if let Some(&first) = seen.get(&key) {
                panic!("vertices {first} and {i} are coincident at {p:?}");
            }
            seen.insert(key, i as u32);
        }
    }

    #[test]
    fn winding_preserved_through_subdivision() {
        let mut mesh = base_icosahedron();
        subdivide(&mut mesh, 2);
        for i in 0..mesh.face_count() {
            let [a, b, c] = mesh.faces[i];
            let normal = mesh.face_normal_unnormalized(i).expect("valid face index");
            let centroid = (mesh.positions[a as usize].coords
                + mesh.positions[b as usize].coords
                + mesh.positions[c as usize].coords)
                / 3.0;
            assert!(normal.dot(&centroid) > 0.0, "face {i} winds inward");
        }
    }

    #[test]
    fn subdivided_mesh_remains_closed() {
        let mut mesh = base_icosahedron();
        subdivide(&mut mesh, 1);

        let mut edge_count: HashMap<(u32, u32), u32> = HashMap::new();
        for face in &mesh.faces {
            for i in 0..3 {
                let edge = normalize_edge(face[i], face[(i + 1) % 3]);
                *edge_count.entry(edge).or_insert(0) += 1;
            }
        }
        assert!(edge_count.values().all(|&n| n == 2), "mesh has boundary edges");
    }

    #[test]
    fn normalize_edge_orders_pairs() {
        assert_eq!(normalize_edge(0, 1), (0, 1));
        assert_eq!(normalize_edge(1, 0), (0, 1));
        assert_eq!(normalize_edge(7, 7), (7, 7));
    }
}
