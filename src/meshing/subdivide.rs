use crate::error::{MeshingError, Result};
use crate::massing::FloorPlate;
use crate::math::{Point3, TOLERANCE};

/// Divides each boundary curve of a floor plate into segments of a target
/// length.
///
/// Division points sit at every whole multiple of the segment length from
/// the curve start, start point included; a trailing remainder shorter than
/// the segment length produces no point (a multiple landing within tolerance
/// of the curve end counts as the end). An edge shorter than the segment
/// length yields only its start point.
pub struct SubdivideBoundary {
    segment_length: f64,
}

impl SubdivideBoundary {
    /// Creates a new `SubdivideBoundary` operation.
    #[must_use]
    pub fn new(segment_length: f64) -> Self {
        Self { segment_length }
    }

    /// Executes the subdivision, returning one point row per boundary edge
    /// (outer loop edges first, then hole edges).
    ///
    /// # Errors
    ///
    /// Returns an error if the segment length is non-positive or curve
    /// evaluation fails.
    pub fn execute(&self, plate: &FloorPlate) -> Result<Vec<Vec<Point3>>> {
        if self.segment_length <= 0.0 {
            return Err(
                MeshingError::InvalidParameters("segment length must be positive".into()).into(),
            );
        }

        let mut rows = Vec::new();
        for edge in plate.boundary_edges() {
            let length = edge.length();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let segments = ((length + TOLERANCE) / self.segment_length).floor() as usize;

            let mut row = Vec::with_capacity(segments + 1);
            for k in 0..=segments {
                #[allow(clippy::cast_precision_loss)]
                let s = (k as f64 * self.segment_length).min(length);
                row.push(edge.point_at_length(s)?);
            }
            rows.push(row);
        }
        Ok(rows)
    }
}
