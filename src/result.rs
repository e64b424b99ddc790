//! Result type for icosphere generation.

use crate::mesh::SphereMesh;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The generated mesh, normals computed.
    pub mesh: SphereMesh,

    /// Number of vertices in the mesh.
    pub vertices: usize,

    /// Number of triangle faces in the mesh.
    pub triangles: usize,

    /// Number of subdivision rounds performed.
    pub subdivisions: u32,
}

impl GenerationResult {
    /// Whether the result is the unsubdivided base icosahedron.
    #[must_use]
    pub const fn is_base_solid(&self) -> bool {
        self.subdivisions == 0
    }
}

impl std::fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Icosphere: {} vertices, {} triangles, {} subdivisions",
            self.vertices, self.triangles, self.subdivisions
        )
    }
}
