mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in 3D space.
///
/// Besides evaluation, curves expose exact arc length and its inverse over a
/// parameter span. Boundary subdivision walks curves by length, so both
/// directions of the mapping are part of the contract.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or the tangent is
    /// degenerate.
    fn tangent(&self, t: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Returns the arc length between two parameters.
    ///
    /// The result is non-negative regardless of parameter order.
    fn length_between(&self, t_start: f64, t_end: f64) -> f64;

    /// Returns the parameter at `arc_length` measured from `t_start` toward
    /// `t_end`.
    ///
    /// `arc_length` is clamped to the span's total length.
    fn param_at_length(&self, t_start: f64, t_end: f64, arc_length: f64) -> f64;
}
