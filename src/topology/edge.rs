use crate::geometry::curve::{Arc, Curve, Line};
use crate::math::Point3;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve associated with an edge.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A line segment.
    Line(Line),
    /// A circular arc.
    Arc(Arc),
}

impl EdgeCurve {
    /// Returns the underlying curve as a trait object.
    #[must_use]
    pub fn as_curve(&self) -> &dyn Curve {
        match self {
            EdgeCurve::Line(line) => line,
            EdgeCurve::Arc(arc) => arc,
        }
    }
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices and carries a geometric curve
/// that defines the shape of the edge between them.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// Parameter on the curve corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the curve corresponding to the end vertex.
    pub t_end: f64,
}

impl EdgeData {
    /// Returns the exact arc length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.curve.as_curve().length_between(self.t_start, self.t_end)
    }

    /// Evaluates the edge curve at `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if curve evaluation fails.
    pub fn point_at(&self, t: f64) -> crate::error::Result<Point3> {
        self.curve.as_curve().evaluate(t)
    }
}
