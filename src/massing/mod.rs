//! Building-mass analysis: floor plates, mass attributes, floor ordering,
//! level slicing, and building clustering.

mod attributes;
mod bottom_face;
mod cluster;
mod floor_sort;
mod levels;

pub use attributes::DeriveMasses;
pub use bottom_face::ExtractBottomFaces;
pub use cluster::{floor_assignments, Building, ClusterBuildings, FloorAssignment};
pub use floor_sort::SortFloors;
pub use levels::SliceLevels;

use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::geometry::Plane;
use crate::math::{polygon, Point2, Point3, Vector3};
use crate::topology::{arc_chord_segments, EdgeCurve, SolidId};

/// A single boundary curve of a floor plate, with its traversal span.
#[derive(Debug, Clone)]
pub struct BoundaryEdge {
    /// The curve geometry.
    pub curve: EdgeCurve,
    /// Parameter at the start of traversal.
    pub t_start: f64,
    /// Parameter at the end of traversal.
    pub t_end: f64,
}

impl BoundaryEdge {
    /// Returns the exact arc length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.curve.as_curve().length_between(self.t_start, self.t_end)
    }

    /// Evaluates the edge at an arc length measured from its start.
    ///
    /// # Errors
    ///
    /// Returns an error if curve evaluation fails.
    pub fn point_at_length(&self, arc_length: f64) -> Result<Point3> {
        let curve = self.curve.as_curve();
        let t = curve.param_at_length(self.t_start, self.t_end, arc_length);
        curve.evaluate(t)
    }

    /// Returns a copy of the edge translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector3) -> Self {
        let curve = match &self.curve {
            EdgeCurve::Line(line) => EdgeCurve::Line(line.translated(offset)),
            EdgeCurve::Arc(arc) => EdgeCurve::Arc(arc.translated(offset)),
        };
        Self {
            curve,
            t_start: self.t_start,
            t_end: self.t_end,
        }
    }
}

/// A closed loop of boundary edges, traversal order head-to-tail.
#[derive(Debug, Clone)]
pub struct BoundaryLoop {
    /// The edges of the loop.
    pub edges: Vec<BoundaryEdge>,
}

impl BoundaryLoop {
    /// Total length of the loop.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.edges.iter().map(BoundaryEdge::length).sum()
    }

    /// Returns a polyline approximation of the loop, one point per line edge
    /// start and chord-sampled arcs. The closing point is not repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if curve evaluation fails.
    pub fn sampled_points(&self, chord_tolerance: f64) -> Result<Vec<Point3>> {
        let mut points = Vec::new();
        for edge in &self.edges {
            match &edge.curve {
                EdgeCurve::Line(line) => {
                    points.push(line.evaluate(edge.t_start)?);
                }
                EdgeCurve::Arc(arc) => {
                    let sweep = (edge.t_end - edge.t_start).abs();
                    let n = arc_chord_segments(arc.radius(), sweep, chord_tolerance);
                    for i in 0..n {
                        #[allow(clippy::cast_precision_loss)]
                        let t = edge.t_start + (edge.t_end - edge.t_start) * i as f64 / n as f64;
                        points.push(arc.evaluate(t)?);
                    }
                }
            }
        }
        Ok(points)
    }

    /// Returns a copy of the loop translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            edges: self.edges.iter().map(|e| e.translated(offset)).collect(),
        }
    }
}

/// A mass's bottom face trimmed to standalone boundary loops: the floor
/// surface the facade pipeline panelizes.
#[derive(Debug, Clone)]
pub struct FloorPlate {
    /// Input index of the owning mass.
    pub mass: usize,
    /// Z elevation of the plate plane.
    pub elevation: f64,
    /// Vertical extrusion height for panels generated on this plate.
    pub panel_height: f64,
    /// The supporting plane.
    pub plane: Plane,
    /// The outer boundary loop.
    pub outer: BoundaryLoop,
    /// Hole loops.
    pub inner: Vec<BoundaryLoop>,
}

impl FloorPlate {
    /// Plate area, holes subtracted.
    ///
    /// # Errors
    ///
    /// Returns an error if boundary sampling fails.
    pub fn area(&self) -> Result<f64> {
        let mut area = polygon::polygon_area(&self.outer.sampled_points(1e-6)?);
        for hole in &self.inner {
            area -= polygon::polygon_area(&hole.sampled_points(1e-6)?);
        }
        Ok(area.max(0.0))
    }

    /// Iterates all boundary edges, outer loop first, then holes.
    pub fn boundary_edges(&self) -> impl Iterator<Item = &BoundaryEdge> + '_ {
        self.outer
            .edges
            .iter()
            .chain(self.inner.iter().flat_map(|l| l.edges.iter()))
    }
}

/// Derived attributes of a single building mass.
///
/// Recomputed wholesale on every run; identifiers are input indices, not
/// content-derived.
#[derive(Debug, Clone)]
pub struct Mass {
    /// The mass's solid in the topology store.
    pub solid: SolidId,
    /// Bounding-box center.
    pub center: Point3,
    /// Vertical bounding extent.
    pub height: f64,
    /// Horizontal (X, Y) position of the center.
    pub position: Point2,
    /// Total bottom-face area.
    pub footprint_area: f64,
}
