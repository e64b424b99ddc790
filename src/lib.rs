//! Icosphere generation for rendering and mesh processing.
//!
//! This crate builds a triangulated approximation of the unit sphere by
//! recursively subdividing a regular icosahedron:
//!
//! - [`generate_icosphere`] - Build a sphere mesh with smooth vertex normals
//! - [`SphereMesh`] - Indexed vertex/normal/triangle container
//! - [`MeshSink`] / [`emit_mesh`] - Hand-off contract to a rendering layer
//! - [`Displacement`] - Optional surface displacement post-pass
//!
//! # Quick Start
//!
//! ```
//! use icosphere::{generate_icosphere, IcosphereParams};
//!
//! // One subdivision round: every base triangle splits into 4
//! let params = IcosphereParams::new().with_subdivisions(1);
//! let result = generate_icosphere(&params)?;
//!
//! assert_eq!(result.vertices, 42);
//! assert_eq!(result.triangles, 80);
//! # Ok::<(), icosphere::IcosphereError>(())
//! ```
//!
//! # Hand-off to a Renderer
//!
//! The generator never talks to a GPU directly. A finished mesh is pushed
//! through the [`MeshSink`] trait, one vertex+normal pair and one index
//! triple at a time, in list order:
//!
//! ```
//! use icosphere::{generate_icosphere, emit_mesh, BufferSink, IcosphereParams};
//!
//! let result = generate_icosphere(&IcosphereParams::new().with_subdivisions(2))?;
//!
//! let mut sink = BufferSink::new();
//! emit_mesh(&result.mesh, &mut sink)?;
//!
//! assert_eq!(sink.positions.len(), result.vertices);
//! assert_eq!(sink.indices.len(), result.triangles * 3);
//! # Ok::<(), icosphere::IcosphereError>(())
//! ```
//!
//! # Coordinate System
//!
//! Right-handed coordinates, `f64` throughout. Every generated vertex lies
//! on the unit sphere. Faces use **counter-clockwise winding viewed from
//! outside**, so face normals point away from the center by the right-hand
//! rule and vertex normals coincide with the radial direction.
//!
//! # Architecture
//!
//! Generation is synchronous and single-pass: base icosahedron →
//! subdivision (0..k rounds) → optional displacement → normal
//! accumulation. The generator exclusively owns its vertex, triangle and
//! normal lists plus the edge-midpoint cache for the duration of a call;
//! only the finished mesh escapes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod displace;
mod emit;
mod error;
mod generate;
mod icosahedron;
mod io;
mod mesh;
mod normals;
mod params;
mod result;
mod subdivide;

pub use displace::{Displacement, RadialWave};
pub use emit::{emit_mesh, BufferSink, MeshSink};
pub use error::{IcosphereError, IcosphereResult, MeshIoError, MeshIoResult};
pub use generate::{generate_icosphere, generate_icosphere_with};
pub use icosahedron::base_icosahedron;
pub use io::{load_mesh, read_mesh, save_mesh, write_mesh};
pub use mesh::SphereMesh;
pub use params::IcosphereParams;
pub use result::GenerationResult;

// Re-export nalgebra types used in the public API
pub use nalgebra::{Point3, Vector3};
