//! Generation pipeline orchestration.

use tracing::debug;

use crate::displace::Displacement;
use crate::error::{IcosphereError, IcosphereResult};
use crate::icosahedron::base_icosahedron;
use crate::normals::compute_vertex_normals;
use crate::params::IcosphereParams;
use crate::result::GenerationResult;
use crate::subdivide::subdivide;

/// Generate an icosphere with smooth per-vertex normals.
///
/// Runs the full pipeline: base icosahedron, `params.subdivisions` rounds
/// of midpoint refinement, then normal accumulation. The result carries
/// `2 + 10 * 4^k` vertices and `20 * 4^k` triangles, every vertex on the
/// unit sphere.
///
/// Each call builds all internal state from scratch; nothing is shared
/// between generations.
///
/// # Errors
///
/// Returns [`IcosphereError::MeshTooLarge`] if the projected face count
/// exceeds `params.max_faces`. The check runs before any generation work,
/// so no partial mesh is ever produced.
///
/// # Example
///
/// ```
/// use icosphere::{generate_icosphere, IcosphereParams};
///
/// let result = generate_icosphere(&IcosphereParams::new())?;
/// assert_eq!(result.vertices, 12);
/// assert_eq!(result.triangles, 20);
/// assert!(result.is_base_solid());
/// # Ok::<(), icosphere::IcosphereError>(())
/// ```
pub fn generate_icosphere(params: &IcosphereParams) -> IcosphereResult<GenerationResult> {
    generate_inner(params, None)
}

/// Generate an icosphere with a displacement post-pass.
///
/// The displacement runs after subdivision and before normal computation,
/// so normals reflect the displaced surface. It operates on a fixed-length
/// slice and therefore cannot change vertex count or order.
///
/// # Errors
///
/// Returns [`IcosphereError::MeshTooLarge`] under the same conditions as
/// [`generate_icosphere`].
///
/// # Example
///
/// ```
/// use icosphere::{generate_icosphere_with, IcosphereParams, RadialWave};
///
/// let params = IcosphereParams::new().with_subdivisions(2);
/// let terrain = RadialWave::new(0.05, 4.0);
/// let result = generate_icosphere_with(&params, &terrain)?;
/// assert_eq!(result.vertices, 162);
/// # Ok::<(), icosphere::IcosphereError>(())
/// ```
pub fn generate_icosphere_with<D: Displacement>(
    params: &IcosphereParams,
    displacement: &D,
) -> IcosphereResult<GenerationResult> {
    generate_inner(params, Some(displacement))
}

fn generate_inner(
    params: &IcosphereParams,
    displacement: Option<&dyn Displacement>,
) -> IcosphereResult<GenerationResult> {
    let projected = params.expected_faces();
    if projected > params.max_faces {
        return Err(IcosphereError::MeshTooLarge {
            projected,
            max: params.max_faces,
        });
    }

    debug!(
        subdivisions = params.subdivisions,
        projected_faces = projected,
        "generating icosphere"
    );

    let mut mesh = base_icosahedron();
    subdivide(&mut mesh, params.subdivisions);

    if let Some(displacement) = displacement {
        displacement.displace(&mut mesh.positions);
        debug!("displacement post-pass applied");
    }

    compute_vertex_normals(&mut mesh);

    let vertices = mesh.vertex_count();
    let triangles = mesh.face_count();
    debug!(vertices, triangles, "icosphere complete");

    Ok(GenerationResult {
        mesh,
        vertices,
        triangles,
        subdivisions: params.subdivisions,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn base_solid_counts() {
        let result = generate_icosphere(&IcosphereParams::new()).expect("generation succeeds");
        assert_eq!(result.vertices, 12);
        assert_eq!(result.triangles, 20);
        assert!(result.mesh.has_normals());
    }

    #[test]
    fn counts_match_formula_for_each_k() {
        for k in 0..=3u32 {
            let params = IcosphereParams::new().with_subdivisions(k);
            let result = generate_icosphere(&params).expect("generation succeeds");
            assert_eq!(result.vertices, 2 + 10 * 4usize.pow(k));
            assert_eq!(result.triangles, 20 * 4usize.pow(k));
        }
    }

    #[test]
    fn too_many_faces_rejected_before_work() {
        let params = IcosphereParams::new()
            .with_subdivisions(5)
            .with_max_faces(1_000); // 20 * 4^5 = 20480 > 1000
        let result = generate_icosphere(&params);
        assert!(matches!(
            result,
            Err(IcosphereError::MeshTooLarge {
                projected: 20_480,
                max: 1_000
            })
        ));
    }

    #[test]
    fn displacement_runs_before_normals() {
        // Squash into an ellipsoid: if normals were computed before the
        // displacement, they would still be radial everywhere.
        let squash = |positions: &mut [Point3<f64>]| {
            for p in positions.iter_mut() {
                p.z *= 0.5;
            }
        };
        let params = IcosphereParams::new().with_subdivisions(2);
        let result = generate_icosphere_with(&params, &squash).expect("generation succeeds");

        assert_eq!(result.vertices, 162);
        assert_eq!(result.mesh.normals.len(), 162);

        // A vertex near the equator keeps a radial-ish normal, but one
        // near the pole must diverge from the squashed radial direction.
        let mut max_divergence = 0.0f64;
        for (n, p) in result.mesh.normals.iter().zip(&result.mesh.positions) {
            let radial = p.coords.normalize();
            max_divergence = max_divergence.max(1.0 - n.dot(&radial));
        }
        assert!(max_divergence > 1e-3, "normals ignore the displacement");
    }

    #[test]
    fn regeneration_is_deterministic() {
        let params = IcosphereParams::new().with_subdivisions(2);
        let a = generate_icosphere(&params).expect("generation succeeds");
        let b = generate_icosphere(&params).expect("generation succeeds");
        assert_eq!(a.mesh.positions, b.mesh.positions);
        assert_eq!(a.mesh.faces, b.mesh.faces);
        assert_eq!(a.mesh.normals, b.mesh.normals);
    }
}
