//! Per-vertex normal accumulation.

use nalgebra::Vector3;

use crate::mesh::SphereMesh;

/// Recompute the per-vertex normal list from scratch.
///
/// Every face adds its unnormalized face normal (cross product of the two
/// edge vectors at the first corner, magnitude twice the face area) into
/// the accumulators of its three corners; each accumulator is then
/// normalized in place. Vertices touched by more or larger faces weigh in
/// proportionally, giving an area-weighted approximation of the smooth
/// surface normal.
///
/// A vertex whose accumulated sum is degenerate (near zero) falls back to
/// its own radial direction instead of propagating NaN; on a sphere the
/// two coincide anyway.
pub(crate) fn compute_vertex_normals(mesh: &mut SphereMesh) {
    let mut normals = vec![Vector3::zeros(); mesh.positions.len()];

    for &[a, b, c] in &mesh.faces {
        let va = mesh.positions[a as usize];
        let vb = mesh.positions[b as usize];
        let vc = mesh.positions[c as usize];
        let face_normal = (vb - va).cross(&(vc - va));

        normals[a as usize] += face_normal;
        normals[b as usize] += face_normal;
        normals[c as usize] += face_normal;
    }

    for (normal, position) in normals.iter_mut().zip(&mesh.positions) {
        let len = normal.norm();
        if len > f64::EPSILON {
            *normal /= len;
        } else {
            // Degenerate accumulation: radial fallback, deterministic
            *normal = position.coords;
        }
    }

    mesh.normals = normals;
}
