use crate::massing::FloorPlate;
use crate::math::{Point3, Vector3};

use super::QuadMesh;

/// One facade panel: a quad of mesh vertex indices on a boundary edge.
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    /// The panel's four vertex indices in its floor mesh, bottom edge first.
    pub points: [u32; 4],
    /// Index of the boundary edge the panel sits on (outer loop first, then
    /// holes, matching [`FloorPlate::boundary_edges`]).
    pub edge: u32,
}

/// Accumulates the panels of one floor plate into a quad mesh.
///
/// Every pair of consecutive division points on an edge becomes a quad; the
/// two points offset upward by the plate's panel height form the top edge.
/// Vertices and faces are numbered sequentially and every panel consumes
/// exactly four fresh vertices, so panels and mesh points stay one-to-one.
/// Vertex normals are computed once all panels are in.
#[derive(Debug, Default)]
pub struct AssemblePanels;

impl AssemblePanels {
    /// Creates a new `AssemblePanels` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the assembly over one plate's division rows (one row per
    /// boundary edge, as produced by
    /// [`SubdivideBoundary`](super::SubdivideBoundary)).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, plate: &FloorPlate, divisions: &[Vec<Point3>]) -> (QuadMesh, Vec<Panel>) {
        let lift = Vector3::new(0.0, 0.0, plate.panel_height);

        let mut mesh = QuadMesh::default();
        let mut panels = Vec::new();
        for (edge_index, row) in divisions.iter().enumerate() {
            for pair in row.windows(2) {
                let points = mesh.add_quad([pair[0], pair[1], pair[1] + lift, pair[0] + lift]);
                panels.push(Panel {
                    points,
                    edge: edge_index as u32,
                });
            }
        }
        mesh.compute_vertex_normals();

        tracing::debug!(
            mass = plate.mass,
            panels = panels.len(),
            "assembled panel quads"
        );
        (mesh, panels)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Line;
    use crate::geometry::Plane;
    use crate::massing::{BoundaryEdge, BoundaryLoop};
    use crate::meshing::SubdivideBoundary;
    use crate::topology::EdgeCurve;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn rect_plate(width: f64, depth: f64, panel_height: f64) -> FloorPlate {
        let corners = [p(0.0, 0.0), p(width, 0.0), p(width, depth), p(0.0, depth)];
        let edges = (0..4)
            .map(|i| {
                let (line, t_start, t_end) =
                    Line::through_points(corners[i], corners[(i + 1) % 4]).unwrap();
                BoundaryEdge {
                    curve: EdgeCurve::Line(line),
                    t_start,
                    t_end,
                }
            })
            .collect();
        FloorPlate {
            mass: 0,
            elevation: 0.0,
            panel_height,
            plane: Plane::from_normal(Point3::origin(), Vector3::z()).unwrap(),
            outer: BoundaryLoop { edges },
            inner: vec![],
        }
    }

    #[test]
    fn quad_count_matches_division_rule() {
        // Property: panels per edge = ⌊edge length / panel width⌋.
        let plate = rect_plate(10.0, 6.0, 3.0);
        let divisions = SubdivideBoundary::new(2.0).execute(&plate).unwrap();
        let (mesh, panels) = AssemblePanels::new().execute(&plate, &divisions);

        // Edges: 10, 6, 10, 6 → 5 + 3 + 5 + 3 = 16 panels.
        assert_eq!(panels.len(), 16);
        assert_eq!(mesh.quads.len(), 16);
    }

    #[test]
    fn panels_and_points_stay_one_to_one() {
        let plate = rect_plate(8.0, 4.0, 3.0);
        let divisions = SubdivideBoundary::new(2.0).execute(&plate).unwrap();
        let (mesh, panels) = AssemblePanels::new().execute(&plate, &divisions);

        assert_eq!(mesh.vertices.len(), 4 * panels.len());
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        // Sequential numbering: quad k owns vertices 4k..4k+4.
        for (k, quad) in mesh.quads.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let base = (4 * k) as u32;
            assert_eq!(*quad, [base, base + 1, base + 2, base + 3]);
        }
    }

    #[test]
    fn panel_height_equals_plate_panel_height() {
        // Property: panel height equals the owning mass's vertical extent.
        let plate = rect_plate(10.0, 6.0, 7.5);
        let divisions = SubdivideBoundary::new(2.0).execute(&plate).unwrap();
        let (mesh, panels) = AssemblePanels::new().execute(&plate, &divisions);

        for panel in &panels {
            let bottom = mesh.vertices[panel.points[0] as usize];
            let top = mesh.vertices[panel.points[3] as usize];
            assert_relative_eq!(top.z - bottom.z, 7.5, epsilon = 1e-12);
            assert_relative_eq!(top.x, bottom.x, epsilon = 1e-12);
            assert_relative_eq!(top.y, bottom.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn panel_normals_are_horizontal_units() {
        let plate = rect_plate(10.0, 6.0, 3.0);
        let divisions = SubdivideBoundary::new(2.0).execute(&plate).unwrap();
        let (mesh, _) = AssemblePanels::new().execute(&plate, &divisions);

        for n in &mesh.normals {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(n.z, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn edge_indices_follow_boundary_order() {
        let plate = rect_plate(4.0, 4.0, 3.0);
        let divisions = SubdivideBoundary::new(2.0).execute(&plate).unwrap();
        let (_, panels) = AssemblePanels::new().execute(&plate, &divisions);

        // 2 panels per edge, 4 edges.
        let edges: Vec<u32> = panels.iter().map(|w| w.edge).collect();
        assert_eq!(edges, vec![0, 0, 1, 1, 2, 2, 3, 3]);
    }
}
