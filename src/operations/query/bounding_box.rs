use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::topology::{SolidId, TopologyStore};

/// Chord tolerance used when bounding arc edges by sampling.
const ARC_BOUNDS_TOL: f64 = 1e-4;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns the center point of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        Point3::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// Returns the per-axis extent of the box.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the vertical (Z) extent of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.z - self.min.z
    }

    fn grow(&mut self, p: &Point3) {
        self.min = Point3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Point3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }
}

/// Computes the axis-aligned bounding box of a solid.
///
/// Line edges are bounded exactly by their vertices; arc edges are bounded by
/// chord sampling, which is close enough for the massing attributes this
/// feeds (center, height).
pub struct BoundingBox {
    solid: SolidId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid references missing entities or has no
    /// boundary points.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let solid = store.solid(self.solid)?;
        let shell = store.shell(solid.outer_shell)?;

        let mut bounds: Option<Aabb> = None;
        for &face_id in &shell.faces {
            let face = store.face(face_id)?;
            for &wire_id in std::iter::once(&face.outer_wire).chain(&face.inner_wires) {
                for point in store.wire_sampled_points(wire_id, ARC_BOUNDS_TOL)? {
                    match &mut bounds {
                        Some(b) => b.grow(&point),
                        None => {
                            bounds = Some(Aabb {
                                min: point,
                                max: point,
                            });
                        }
                    }
                }
            }
        }

        bounds.ok_or_else(|| {
            crate::error::TopologyError::InvalidTopology("solid has no boundary points".into())
                .into()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeBox;
    use approx::assert_relative_eq;

    #[test]
    fn box_bounds_match_corners() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 6.0, 8.0))
            .execute(&mut store)
            .unwrap();
        let aabb = BoundingBox::new(solid).execute(&store).unwrap();
        assert_relative_eq!(aabb.min.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.z, 8.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.height(), 5.0, epsilon = 1e-12);
        let c = aabb.center();
        assert_relative_eq!(c.x, 2.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(c.z, 5.5, epsilon = 1e-12);
    }
}
