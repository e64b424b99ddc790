//! Binary persistence for sphere meshes.
//!
//! # Format
//!
//! Little-endian throughout:
//!
//! ```text
//! UINT8[4]   – Magic "ICSP"
//! UINT32     – Format version (currently 1)
//! UINT32     – Vertex count
//! UINT32     – Triangle count
//! REAL64[3]  – per vertex: position
//! REAL64[3]  – per vertex: normal
//! UINT32[3]  – per triangle: indices
//! ```
//!
//! Positions, then normals, then indices: the same order the generator
//! hands records to a [`MeshSink`](crate::MeshSink), so a round-trip is
//! deterministic byte-for-byte.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use nalgebra::{Point3, Vector3};

use crate::error::{MeshIoError, MeshIoResult};
use crate::mesh::SphereMesh;

/// Magic bytes identifying a sphere mesh stream.
const MAGIC: [u8; 4] = *b"ICSP";

/// Current format version.
const VERSION: u32 = 1;

/// Save a mesh to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, or if the
/// mesh has no normals for its current vertex list.
pub fn save_mesh<P: AsRef<Path>>(mesh: &SphereMesh, path: P) -> MeshIoResult<()> {
    let file = File::create(path)?;
    write_mesh(mesh, BufWriter::new(file))
}

/// Load a mesh from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not contain a
/// valid sphere mesh stream.
pub fn load_mesh<P: AsRef<Path>>(path: P) -> MeshIoResult<SphereMesh> {
    let file = File::open(path)?;
    read_mesh(BufReader::new(file))
}

/// Write a mesh to a writer in the documented binary layout.
///
/// # Errors
///
/// Returns [`MeshIoError::CountMismatch`] if the normal list does not
/// match the vertex list, or an I/O error from the writer.
pub fn write_mesh<W: Write>(mesh: &SphereMesh, mut writer: W) -> MeshIoResult<()> {
    if mesh.normals.len() != mesh.positions.len() {
        return Err(MeshIoError::CountMismatch {
            what: "normals",
            expected: mesh.positions.len(),
            got: mesh.normals.len(),
        });
    }

    let vertex_count = u32::try_from(mesh.positions.len()).map_err(|_| {
        MeshIoError::CountMismatch {
            what: "vertices",
            expected: u32::MAX as usize,
            got: mesh.positions.len(),
        }
    })?;
    let triangle_count =
        u32::try_from(mesh.faces.len()).map_err(|_| MeshIoError::CountMismatch {
            what: "triangles",
            expected: u32::MAX as usize,
            got: mesh.faces.len(),
        })?;

    writer.write_all(&MAGIC)?;
    writer.write_all(&VERSION.to_le_bytes())?;
    writer.write_all(&vertex_count.to_le_bytes())?;
    writer.write_all(&triangle_count.to_le_bytes())?;

    for p in &mesh.positions {
        write_vec3(&mut writer, p.x, p.y, p.z)?;
    }
    for n in &mesh.normals {
        write_vec3(&mut writer, n.x, n.y, n.z)?;
    }
    for &[a, b, c] in &mesh.faces {
        writer.write_all(&a.to_le_bytes())?;
        writer.write_all(&b.to_le_bytes())?;
        writer.write_all(&c.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a mesh from a reader in the documented binary layout.
///
/// # Errors
///
/// Returns an error for a bad magic, unsupported version, truncated
/// stream, or face indices pointing past the vertex list.
pub fn read_mesh<R: Read>(mut reader: R) -> MeshIoResult<SphereMesh> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(MeshIoError::BadMagic { got: magic });
    }

    let version = read_u32(&mut reader)?;
    if version != VERSION {
        return Err(MeshIoError::UnsupportedVersion(version));
    }

    let vertex_count = read_u32(&mut reader)? as usize;
    let triangle_count = read_u32(&mut reader)? as usize;

    let mut mesh = SphereMesh::with_capacity(vertex_count, triangle_count);

    for _ in 0..vertex_count {
        let [x, y, z] = read_vec3(&mut reader)?;
        mesh.positions.push(Point3::new(x, y, z));
    }
    mesh.normals.reserve(vertex_count);
    for _ in 0..vertex_count {
        let [x, y, z] = read_vec3(&mut reader)?;
        mesh.normals.push(Vector3::new(x, y, z));
    }
    for _ in 0..triangle_count {
        let a = read_u32(&mut reader)?;
        let b = read_u32(&mut reader)?;
        let c = read_u32(&mut reader)?;
        for index in [a, b, c] {
            if index as usize >= vertex_count {
                return Err(MeshIoError::IndexOutOfRange {
                    index,
                    vertices: vertex_count,
                });
            }
        }
        mesh.faces.push([a, b, c]);
    }

    Ok(mesh)
}

fn write_vec3<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> MeshIoResult<()> {
    writer.write_all(&x.to_le_bytes())?;
    writer.write_all(&y.to_le_bytes())?;
    writer.write_all(&z.to_le_bytes())?;
    Ok(())
}

fn read_u32<R: Read>(reader: &mut R) -> MeshIoResult<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_vec3<R: Read>(reader: &mut R) -> MeshIoResult<[f64; 3]> {
    let mut buf = [0u8; 24];
    reader.read_exact(&mut buf)?;
    let mut out = [0.0f64; 3];
    for (i, chunk) in buf.chunks_exact(8).enumerate() {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        out[i] = f64::from_le_bytes(bytes);
    }
    Ok(out)
}
