use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// An infinite line defined by an origin point and a direction vector.
///
/// The direction is normalized on construction, so the parameter measures
/// distance along the line: `P(t) = origin + t * direction`.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < crate::math::TOLERANCE {
            return Err(crate::error::GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Creates the line through two points, with the parameter range of the
    /// segment between them.
    ///
    /// Returns the line and the segment's `(t_start, t_end)` parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn through_points(start: Point3, end: Point3) -> Result<(Self, f64, f64)> {
        let dir = end - start;
        let len = dir.norm();
        let line = Self::new(start, dir)?;
        Ok((line, 0.0, len))
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns a copy of the line translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            origin: self.origin + offset,
            direction: self.direction,
        }
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.origin + self.direction * t)
    }

    fn tangent(&self, _t: f64) -> Result<Vector3> {
        Ok(self.direction)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn length_between(&self, t_start: f64, t_end: f64) -> f64 {
        (t_end - t_start).abs()
    }

    fn param_at_length(&self, t_start: f64, t_end: f64, arc_length: f64) -> f64 {
        let span = t_end - t_start;
        let s = arc_length.clamp(0.0, span.abs());
        t_start + span.signum() * s
    }
}
