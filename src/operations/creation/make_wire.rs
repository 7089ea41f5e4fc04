use crate::error::{OperationError, Result};
use crate::geometry::curve::Line;
use crate::math::Point3;
use crate::topology::{EdgeCurve, EdgeData, OrientedEdge, TopologyStore, VertexData, WireData, WireId};

/// Creates a wire of line edges from a sequence of 3D points.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if there are too few points (two for an open wire,
    /// three for a closed one) or if consecutive points coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let n = self.points.len();
        let min = if self.close { 3 } else { 2 };
        if n < min {
            return Err(OperationError::InvalidInput(format!(
                "wire needs at least {min} points, got {n}"
            ))
            .into());
        }

        let vertex_ids: Vec<_> = self
            .points
            .iter()
            .map(|p| store.add_vertex(VertexData::new(*p)))
            .collect();

        let seg_count = if self.close { n } else { n - 1 };
        let mut edges = Vec::with_capacity(seg_count);
        for i in 0..seg_count {
            let j = (i + 1) % n;
            let (line, t_start, t_end) = Line::through_points(self.points[i], self.points[j])?;
            let edge = store.add_edge(EdgeData {
                start: vertex_ids[i],
                end: vertex_ids[j],
                curve: EdgeCurve::Line(line),
                t_start,
                t_end,
            });
            edges.push(OrientedEdge::new(edge, true));
        }

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}
