use crate::error::{OperationError, Result};
use crate::math::polygon::newell_normal;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::creation::{MakeFace, MakeSolid, MakeWire};
use crate::topology::{EdgeCurve, FaceId, ShellData, SolidId, TopologyStore};

/// Extrudes a planar face along a direction vector to create a closed solid.
///
/// This is the canonical constructor of prismatic building masses: a footprint
/// face extruded by a height. The resulting shell has an outward-facing bottom,
/// top, and one side quad per footprint edge.
pub struct Extrude {
    face: FaceId,
    direction: Vector3,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self { face, direction }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is
    /// zero-length, the face has inner wires (holes are not supported), or
    /// the face boundary contains arc edges.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }

        let face = store.face(self.face)?;
        if !face.inner_wires.is_empty() {
            return Err(OperationError::InvalidInput(
                "extrusion of faces with holes is not supported".into(),
            )
            .into());
        }
        let outer_wire = face.outer_wire;

        for oe in &store.wire(outer_wire)?.edges {
            if matches!(store.edge(oe.edge)?.curve, EdgeCurve::Arc(_)) {
                return Err(OperationError::InvalidInput(
                    "extrusion of wires with arc edges is not supported".into(),
                )
                .into());
            }
        }

        let base_points = store.wire_points(outer_wire)?;
        let normal = newell_normal(&base_points)?;

        // Order base_points so their Newell normal aligns with the extrude
        // direction. Then:
        //   - bottom face = reversed base → normal ≈ -direction (outward below)
        //   - top face = translated base → normal ≈ +direction (outward above)
        //   - side quads naturally face outward
        let base_points = if normal.dot(&self.direction) > 0.0 {
            base_points
        } else {
            base_points.into_iter().rev().collect()
        };

        let bottom_points: Vec<Point3> = base_points.iter().rev().copied().collect();
        let bottom_face = make_planar_face(store, &bottom_points)?;

        let top_points: Vec<Point3> = base_points.iter().map(|p| p + self.direction).collect();
        let top_face = make_planar_face(store, &top_points)?;

        let n = base_points.len();
        let mut all_faces = Vec::with_capacity(n + 2);
        all_faces.push(bottom_face);
        all_faces.push(top_face);

        for i in 0..n {
            let j = (i + 1) % n;
            let quad = vec![
                base_points[i],
                base_points[j],
                top_points[j],
                top_points[i],
            ];
            all_faces.push(make_planar_face(store, &quad)?);
        }

        let shell_id = store.add_shell(ShellData {
            faces: all_faces,
            is_closed: true,
        });

        MakeSolid::new(shell_id, vec![]).execute(store)
    }
}

/// Creates a planar face from a closed loop of points.
fn make_planar_face(store: &mut TopologyStore, points: &[Point3]) -> Result<FaceId> {
    let wire = MakeWire::new(points.to_vec(), true).execute(store)?;
    MakeFace::new(wire, vec![]).execute(store)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeFace, MakeWire};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn make_face(store: &mut TopologyStore, points: Vec<Point3>) -> FaceId {
        let wire = MakeWire::new(points, true).execute(store).unwrap();
        MakeFace::new(wire, vec![]).execute(store).unwrap()
    }

    // ── Prism shapes ───────────────────────────────────────────

    #[test]
    fn unit_cube_has_6_faces() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
        );
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let solid_data = store.solid(solid).unwrap();
        let shell = store.shell(solid_data.outer_shell).unwrap();
        assert_eq!(shell.faces.len(), 6); // top + bottom + 4 sides
        assert!(shell.is_closed);
    }

    #[test]
    fn triangle_prism_has_5_faces() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(1.5, 2.0, 0.0)],
        );
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let solid_data = store.solid(solid).unwrap();
        let shell = store.shell(solid_data.outer_shell).unwrap();
        assert_eq!(shell.faces.len(), 5); // top + bottom + 3 sides
    }

    #[test]
    fn l_shape_has_8_faces() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![
                p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(4.0, 2.0, 0.0),
                p(2.0, 2.0, 0.0), p(2.0, 4.0, 0.0), p(0.0, 4.0, 0.0),
            ],
        );
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let solid_data = store.solid(solid).unwrap();
        let shell = store.shell(solid_data.outer_shell).unwrap();
        assert_eq!(shell.faces.len(), 8); // top + bottom + 6 sides
    }

    // ── Orientation ────────────────────────────────────────────

    #[test]
    fn all_face_normals_point_outward() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(0.0, 2.0, 0.0)],
        );
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let solid_data = store.solid(solid).unwrap();
        let shell = store.shell(solid_data.outer_shell).unwrap();
        let centroid = p(1.0, 1.0, 1.5); // center of 2x2x3 box

        for &face_id in &shell.faces {
            let face_data = store.face(face_id).unwrap();
            let face_normal = face_data.outward_normal();
            let to_face = face_data.plane.origin() - centroid;
            assert!(
                face_normal.dot(&to_face) > 0.0,
                "face normal {face_normal:?} should point outward (dot with {to_face:?} was {})",
                face_normal.dot(&to_face)
            );
        }
    }

    #[test]
    fn clockwise_footprint_still_builds_outward_solid() {
        let mut store = TopologyStore::new();
        // Clockwise winding seen from above: Newell normal points down.
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(2.0, 2.0, 0.0), p(2.0, 0.0, 0.0)],
        );
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 2.0))
            .execute(&mut store)
            .unwrap();

        let solid_data = store.solid(solid).unwrap();
        let shell = store.shell(solid_data.outer_shell).unwrap();
        let bottoms: Vec<_> = shell
            .faces
            .iter()
            .filter(|&&f| store.face(f).unwrap().outward_normal().z < -0.9)
            .collect();
        assert_eq!(bottoms.len(), 1);
    }

    // ── Error cases ────────────────────────────────────────────

    #[test]
    fn zero_direction_returns_error() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)],
        );
        let result = Extrude::new(face, Vector3::new(0.0, 0.0, 0.0)).execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn face_with_holes_returns_error() {
        let mut store = TopologyStore::new();
        let outer = MakeWire::new(
            vec![
                p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0),
                p(10.0, 10.0, 0.0), p(0.0, 10.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let inner = MakeWire::new(
            vec![
                p(2.0, 2.0, 0.0), p(8.0, 2.0, 0.0),
                p(8.0, 8.0, 0.0), p(2.0, 8.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(outer, vec![inner])
            .execute(&mut store)
            .unwrap();

        let result = Extrude::new(face, Vector3::new(0.0, 0.0, 1.0)).execute(&mut store);
        assert!(result.is_err());
    }
}
