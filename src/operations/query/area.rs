use crate::error::Result;
use crate::math::polygon::polygon_area;
use crate::topology::{FaceId, TopologyStore};

/// Chord tolerance used when sampling arc edges of a face boundary.
const ARC_AREA_TOL: f64 = 1e-6;

/// Computes the area of a planar face, holes subtracted.
///
/// The boundary polygon of a planar face is exact for line edges, so no
/// tessellation is needed; arc edges are approximated by fine chords.
pub struct FaceArea {
    face: FaceId,
}

impl FaceArea {
    /// Creates a new `FaceArea` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning the face area.
    ///
    /// # Errors
    ///
    /// Returns an error if the face references missing entities.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let face = store.face(self.face)?;

        let outer = store.wire_sampled_points(face.outer_wire, ARC_AREA_TOL)?;
        let mut area = polygon_area(&outer);

        for &inner in &face.inner_wires {
            let hole = store.wire_sampled_points(inner, ARC_AREA_TOL)?;
            area -= polygon_area(&hole);
        }

        Ok(area.max(0.0))
    }
}
