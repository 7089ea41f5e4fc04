use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::Plane;
use crate::math::polygon::newell_normal;
use crate::topology::{FaceData, FaceId, TopologyStore, WireId};

/// Maximum out-of-plane deviation tolerated when fitting a face plane.
const PLANARITY_TOL: f64 = 1e-8;

/// Creates a planar face from an outer wire and optional hole wires.
///
/// The supporting plane is fitted from the outer wire's Newell normal, so the
/// face normal follows the wire's winding and `same_sense` is `true`.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a wire is not closed, the outer wire does not
    /// define a plane, or any wire vertex deviates from the fitted plane.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        let outer = store.wire(self.outer_wire)?;
        if !outer.is_closed {
            return Err(TopologyError::WireNotClosed.into());
        }
        for &inner in &self.inner_wires {
            if !store.wire(inner)?.is_closed {
                return Err(TopologyError::WireNotClosed.into());
            }
        }

        let points = store.wire_points(self.outer_wire)?;
        let normal = newell_normal(&points)?;
        let u_dir = points[1] - points[0];
        let plane = Plane::new(points[0], u_dir, normal.cross(&u_dir))?;

        for &wire_id in std::iter::once(&self.outer_wire).chain(&self.inner_wires) {
            for point in store.wire_points(wire_id)? {
                if plane.signed_distance(&point).abs() > PLANARITY_TOL {
                    return Err(GeometryError::Degenerate(
                        "wire vertices do not lie on a common plane".into(),
                    )
                    .into());
                }
            }
        }

        Ok(store.add_face(FaceData {
            plane,
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
            same_sense: true,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeWire;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn ccw_square_normal_points_up() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(2.0, 2.0, 0.0),
                p(0.0, 2.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let data = store.face(face).unwrap();
        assert_relative_eq!(data.outward_normal().z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cw_square_normal_points_down() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(0.0, 2.0, 0.0),
                p(2.0, 2.0, 0.0),
                p(2.0, 0.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let data = store.face(face).unwrap();
        assert_relative_eq!(data.outward_normal().z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn open_wire_is_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn non_planar_wire_is_rejected() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(2.0, 2.0, 1.0),
                p(0.0, 2.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn face_with_hole_keeps_inner_wire() {
        let mut store = TopologyStore::new();
        let outer = MakeWire::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(10.0, 0.0, 0.0),
                p(10.0, 10.0, 0.0),
                p(0.0, 10.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let inner = MakeWire::new(
            vec![
                p(3.0, 3.0, 0.0),
                p(7.0, 3.0, 0.0),
                p(7.0, 7.0, 0.0),
                p(3.0, 7.0, 0.0),
            ],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(outer, vec![inner]).execute(&mut store).unwrap();
        assert_eq!(store.face(face).unwrap().inner_wires.len(), 1);
    }
}
