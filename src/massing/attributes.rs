use crate::error::Result;
use crate::math::Point2;
use crate::operations::query::BoundingBox;
use crate::topology::{SolidId, TopologyStore};

use super::{FloorPlate, Mass};

/// Derives the per-mass attribute records (center, height, horizontal
/// position, footprint area) for a list of input masses.
pub struct DeriveMasses {
    solids: Vec<SolidId>,
}

impl DeriveMasses {
    /// Creates a new `DeriveMasses` operation.
    #[must_use]
    pub fn new(solids: Vec<SolidId>) -> Self {
        Self { solids }
    }

    /// Executes the derivation. `plates` are the extracted floor plates of
    /// the same input list; each mass's footprint area is the summed area of
    /// its plates.
    ///
    /// # Errors
    ///
    /// Returns an error if a solid references missing entities or plate
    /// sampling fails.
    pub fn execute(&self, store: &TopologyStore, plates: &[FloorPlate]) -> Result<Vec<Mass>> {
        let mut masses = Vec::with_capacity(self.solids.len());
        for (index, &solid) in self.solids.iter().enumerate() {
            let bounds = BoundingBox::new(solid).execute(store)?;
            let center = bounds.center();

            let mut footprint_area = 0.0;
            for plate in plates.iter().filter(|p| p.mass == index) {
                footprint_area += plate.area()?;
            }

            masses.push(Mass {
                solid,
                center,
                height: bounds.height(),
                position: Point2::new(center.x, center.y),
                footprint_area,
            });
        }
        Ok(masses)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::massing::ExtractBottomFaces;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use approx::assert_relative_eq;

    #[test]
    fn box_attributes() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 2.0, 10.0))
            .execute(&mut store)
            .unwrap();

        let plates = ExtractBottomFaces::new(vec![solid]).execute(&store).unwrap();
        let masses = DeriveMasses::new(vec![solid]).execute(&store, &plates).unwrap();

        assert_eq!(masses.len(), 1);
        let mass = &masses[0];
        assert_relative_eq!(mass.center.z, 5.0, epsilon = 1e-12);
        assert_relative_eq!(mass.height, 10.0, epsilon = 1e-12);
        assert_relative_eq!(mass.position.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(mass.position.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mass.footprint_area, 8.0, epsilon = 1e-9);
    }
}
