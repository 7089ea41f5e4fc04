//! Mesh generation: boundary subdivision, quad panel assembly, and floor
//! plate triangulation.

mod floor_plate;
mod panel_quads;
mod subdivide;

pub use floor_plate::TessellateFloorPlate;
pub use panel_quads::{AssemblePanels, Panel};
pub use subdivide::SubdivideBoundary;

use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// Parameters controlling mesh quality.
#[derive(Debug, Clone, Copy)]
pub struct MeshingParams {
    /// Maximum allowed chord deviation when sampling arc boundaries.
    pub tolerance: f64,
}

impl Default for MeshingParams {
    fn default() -> Self {
        Self { tolerance: 0.01 }
    }
}

/// A quadrilateral panel mesh.
///
/// Vertices and faces are numbered sequentially in creation order; each quad
/// owns its four vertices, so vertex count is always four times the quad
/// count. Normals are per-vertex and computed after assembly.
#[derive(Debug, Clone, Default)]
pub struct QuadMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Quad indices (each quadruple defines a quad, counter-clockwise).
    pub quads: Vec<[u32; 4]>,
}

impl QuadMesh {
    /// Appends a quad with four fresh vertices, returning their indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_quad(&mut self, corners: [Point3; 4]) -> [u32; 4] {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        let ids = [base, base + 1, base + 2, base + 3];
        self.quads.push(ids);
        ids
    }

    /// Computes per-vertex normals by averaging incident quad normals.
    ///
    /// Resets any existing normals. Degenerate quads contribute nothing.
    pub fn compute_vertex_normals(&mut self) {
        self.normals = vec![Vector3::zeros(); self.vertices.len()];
        for quad in &self.quads {
            let [a, b, c, d] = quad.map(|i| self.vertices[i as usize]);
            // Quad normal from the diagonals; exact for planar quads.
            let n = (c - a).cross(&(d - b));
            let len = n.norm();
            if len < TOLERANCE {
                continue;
            }
            let n = n / len;
            for &i in quad {
                self.normals[i as usize] += n;
            }
        }
        for n in &mut self.normals {
            let len = n.norm();
            if len > TOLERANCE {
                *n /= len;
            }
        }
    }

    /// Appends all of `other` into this mesh, returning the vertex index
    /// offset applied to `other`'s indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn append(&mut self, other: &QuadMesh) -> u32 {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.quads
            .extend(other.quads.iter().map(|q| q.map(|i| i + offset)));
        offset
    }
}

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// In-plane UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}
