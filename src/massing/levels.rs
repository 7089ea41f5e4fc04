use crate::error::{MassingError, OperationError, Result};
use crate::math::{Vector3, TOLERANCE};
use crate::operations::query::BoundingBox;
use crate::topology::{SolidId, TopologyStore};

use super::bottom_face::bottom_plates;
use super::FloorPlate;

/// Alignment tolerance for classifying face normals as horizontal/vertical.
const AXIS_ALIGNMENT: f64 = 1e-6;

/// Slices a prismatic mass into floor plates at every multiple of the level
/// height between its base and top.
///
/// The component's "Level Height" input: instead of treating the whole mass
/// as one floor, the mass's footprint repeats at each level. Plates carry the
/// level height as their panel height; the top sliver keeps the remainder so
/// stacked panels never exceed the mass.
pub struct SliceLevels {
    solid: SolidId,
    mass_index: usize,
    level_height: f64,
}

impl SliceLevels {
    /// Creates a new `SliceLevels` operation.
    #[must_use]
    pub fn new(solid: SolidId, mass_index: usize, level_height: f64) -> Self {
        Self {
            solid,
            mass_index,
            level_height,
        }
    }

    /// Executes the slicing, returning plates from base to top.
    ///
    /// # Errors
    ///
    /// Returns an error if the level height is non-positive, the mass is not
    /// prismatic (a face normal neither horizontal nor vertical), or the mass
    /// has no bottom face.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<FloorPlate>> {
        if self.level_height <= 0.0 {
            return Err(
                OperationError::InvalidInput("level height must be positive".into()).into(),
            );
        }
        self.check_prismatic(store)?;

        let base_plates = bottom_plates(store, self.solid, self.mass_index)?;
        if base_plates.is_empty() {
            return Err(MassingError::NoBottomFace {
                mass: self.mass_index,
            }
            .into());
        }
        let bounds = BoundingBox::new(self.solid).execute(store)?;

        let mut plates = Vec::new();
        let mut z = bounds.min.z;
        while z < bounds.max.z - TOLERANCE {
            let panel_height = self.level_height.min(bounds.max.z - z);
            for base in &base_plates {
                let offset = Vector3::new(0.0, 0.0, z - base.elevation);
                plates.push(FloorPlate {
                    mass: self.mass_index,
                    elevation: z,
                    panel_height,
                    plane: base.plane.translated(offset),
                    outer: base.outer.translated(offset),
                    inner: base
                        .inner
                        .iter()
                        .map(|l| l.translated(offset))
                        .collect(),
                });
            }
            z += self.level_height;
        }

        tracing::debug!(
            mass = self.mass_index,
            levels = plates.len(),
            "sliced mass into levels"
        );
        Ok(plates)
    }

    /// A prismatic mass has only horizontal and vertical faces.
    fn check_prismatic(&self, store: &TopologyStore) -> Result<()> {
        let solid = store.solid(self.solid)?;
        let shell = store.shell(solid.outer_shell)?;
        for &face_id in &shell.faces {
            let nz = store.face(face_id)?.outward_normal().z.abs();
            if nz > AXIS_ALIGNMENT && nz < 1.0 - AXIS_ALIGNMENT {
                return Err(MassingError::NotPrismatic {
                    mass: self.mass_index,
                    reason: "face normal is neither horizontal nor vertical".into(),
                }
                .into());
            }
        }
        Ok(())
    }
}
