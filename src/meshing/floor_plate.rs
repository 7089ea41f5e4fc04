use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::FixedFaceHandle;
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{MeshingError, Result};
use crate::massing::FloorPlate;
use crate::math::Point2;

use super::{MeshingParams, TriangleMesh};

/// Tessellates a floor plate into a triangle mesh for display.
///
/// The plate's boundary loops are projected into its plane and triangulated
/// with a constrained Delaunay triangulation; triangles inside hole loops are
/// discarded by even-odd classification.
pub struct TessellateFloorPlate {
    params: MeshingParams,
}

impl TessellateFloorPlate {
    /// Creates a new `TessellateFloorPlate` operation.
    #[must_use]
    pub fn new(params: MeshingParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a boundary loop has fewer than three points or
    /// point insertion fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, plate: &FloorPlate) -> Result<TriangleMesh> {
        let plane = &plate.plane;
        let normal = *plane.normal();

        let project = |p: &crate::math::Point3| -> SpadePoint2<f64> {
            let (u, v) = plane.project(p);
            SpadePoint2::new(u, v)
        };

        let outer_2d: Vec<_> = plate
            .outer
            .sampled_points(self.params.tolerance)?
            .iter()
            .map(&project)
            .collect();
        let inner_2d_list: Vec<Vec<_>> = plate
            .inner
            .iter()
            .map(|hole| {
                Ok(hole
                    .sampled_points(self.params.tolerance)?
                    .iter()
                    .map(&project)
                    .collect())
            })
            .collect::<Result<_>>()?;

        let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
        insert_constraint_loop(&mut cdt, &outer_2d)?;
        for inner_2d in &inner_2d_list {
            insert_constraint_loop(&mut cdt, inner_2d)?;
        }

        let interior_faces = classify_interior_faces(&cdt);

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face_handle in cdt.inner_faces() {
            let fix = face_handle.fix();
            if !interior_faces.contains(&fix.index()) {
                continue;
            }

            let verts = face_handle.vertices();
            let mut tri_indices = [0u32; 3];

            for (i, vh) in verts.iter().enumerate() {
                let idx = vh.fix().index();
                let mesh_idx = if let Some(&existing) = vertex_map.get(&idx) {
                    existing
                } else {
                    let pos = vh.position();
                    let new_idx = mesh.vertices.len() as u32;
                    mesh.vertices.push(plane.point_at(pos.x, pos.y));
                    mesh.normals.push(normal);
                    mesh.uvs.push(Point2::new(pos.x, pos.y));
                    vertex_map.insert(idx, new_idx);
                    new_idx
                };
                tri_indices[i] = mesh_idx;
            }

            mesh.indices.push(tri_indices);
        }

        Ok(mesh)
    }
}

/// Inserts a closed polygon as constraint edges into the CDT.
fn insert_constraint_loop(
    cdt: &mut ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
    points: &[SpadePoint2<f64>],
) -> Result<()> {
    if points.len() < 3 {
        return Err(
            MeshingError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    let mut handles = Vec::with_capacity(points.len());
    for &pt in points {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| MeshingError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    Ok(())
}

/// Classifies which inner faces of the CDT are inside the polygon using
/// flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each
/// time a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(
    cdt: &ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<spade::handles::InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    // Seed: find inner faces adjacent to the outer face via directed edges
    for edge in cdt.directed_edges() {
        if edge.face().fix() == outer_fix {
            let rev_face = edge.rev().face();
            if let Some(inner) = rev_face.as_inner() {
                let idx = inner.fix().index();
                if depth_map.contains_key(&idx) {
                    continue;
                }
                let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                depth_map.insert(idx, depth);
                if depth % 2 == 1 {
                    interior.insert(idx);
                }
                queue.push_back((inner.fix(), depth));
            }
        }
    }

    // BFS flood-fill
    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let neighbor = edge.rev().face();
            if let Some(inner_neighbor) = neighbor.as_inner() {
                let n_idx = inner_neighbor.fix().index();
                if depth_map.contains_key(&n_idx) {
                    continue;
                }
                let new_depth = if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                    depth + 1
                } else {
                    depth
                };
                depth_map.insert(n_idx, new_depth);
                if new_depth % 2 == 1 {
                    interior.insert(n_idx);
                }
                queue.push_back((inner_neighbor.fix(), new_depth));
            }
        }
    }

    interior
}
