use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::creation::{MakeFace, MakeWire};
use crate::operations::shaping::Extrude;
use crate::topology::{SolidId, TopologyStore};

/// Creates an axis-aligned box solid between two corner points.
///
/// Mostly a fixture for tests and demos: the simplest possible building mass.
pub struct MakeBox {
    min: Point3,
    max: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Executes the operation, creating the box solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the box has near-zero extent along any axis.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let extent = self.max - self.min;
        if extent.x < TOLERANCE || extent.y < TOLERANCE || extent.z < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "box corners must span a positive extent on every axis".into(),
            )
            .into());
        }

        let base = vec![
            self.min,
            Point3::new(self.max.x, self.min.y, self.min.z),
            Point3::new(self.max.x, self.max.y, self.min.z),
            Point3::new(self.min.x, self.max.y, self.min.z),
        ];
        let wire = MakeWire::new(base, true).execute(store)?;
        let face = MakeFace::new(wire, vec![]).execute(store)?;
        Extrude::new(face, Vector3::new(0.0, 0.0, extent.z)).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn box_is_a_closed_6_face_shell() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let shell = store.shell(store.solid(solid).unwrap().outer_shell).unwrap();
        assert_eq!(shell.faces.len(), 6);
        assert!(shell.is_closed);
    }

    #[test]
    fn flat_box_is_rejected() {
        let mut store = TopologyStore::new();
        let result = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 3.0, 0.0))
            .execute(&mut store);
        assert!(result.is_err());
    }
}
