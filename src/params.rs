//! Generation parameters.

/// Parameters for icosphere generation.
///
/// The subdivision count is unsigned by construction: a negative count is
/// unrepresentable, so the "invalid input" boundary case reduces to the
/// `max_faces` guard.
///
/// # Example
///
/// ```
/// use icosphere::IcosphereParams;
///
/// let params = IcosphereParams::new().with_subdivisions(2);
/// assert_eq!(params.expected_faces(), 320);
/// assert_eq!(params.expected_vertices(), 162);
/// ```
#[derive(Debug, Clone)]
pub struct IcosphereParams {
    /// Number of subdivision rounds. 0 yields the base icosahedron.
    pub subdivisions: u32,

    /// Maximum faces allowed in the result (prevents runaway 4^k growth).
    pub max_faces: usize,
}

impl Default for IcosphereParams {
    fn default() -> Self {
        Self {
            subdivisions: 0,
            max_faces: 10_000_000, // 10M faces max
        }
    }
}

impl IcosphereParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of subdivision rounds.
    #[must_use]
    pub const fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Set the maximum allowed face count.
    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Face count after generation: `20 * 4^k`.
    ///
    /// Saturates on overflow; anything that large fails the `max_faces`
    /// guard regardless.
    #[must_use]
    pub const fn expected_faces(&self) -> usize {
        let mut faces = 20usize;
        let mut i = 0;
        while i < self.subdivisions {
            faces = faces.saturating_mul(4);
            i += 1;
        }
        faces
    }

    /// Vertex count after generation: `2 + 10 * 4^k`.
    #[must_use]
    pub const fn expected_vertices(&self) -> usize {
        // 20 * 4^k faces -> 10 * 4^k + 2 vertices on a closed genus-0 mesh
        self.expected_faces() / 2 + 2
    }
}
