pub mod edge;
pub mod face;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeCurve, EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Generates the insert / get / `get_mut` accessor triple for one entity map.
macro_rules! entity_accessors {
    ($field:ident, $name:literal, $id:ty, $data:ty, $add:ident, $get:ident, $get_mut:ident) => {
        #[doc = concat!("Inserts a ", $name, " and returns its ID.")]
        pub fn $add(&mut self, data: $data) -> $id {
            self.$field.insert(data)
        }

        #[doc = concat!("Returns a reference to the ", $name, " data.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the entity is not found in the store.
        pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
            self.$field
                .get(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }

        #[doc = concat!("Returns a mutable reference to the ", $name, " data.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the entity is not found in the store.
        pub fn $get_mut(&mut self, id: $id) -> Result<&mut $data, TopologyError> {
            self.$field
                .get_mut(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }
    };
}

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    entity_accessors!(vertices, "vertex", VertexId, VertexData, add_vertex, vertex, vertex_mut);
    entity_accessors!(edges, "edge", EdgeId, EdgeData, add_edge, edge, edge_mut);
    entity_accessors!(wires, "wire", WireId, WireData, add_wire, wire, wire_mut);
    entity_accessors!(faces, "face", FaceId, FaceData, add_face, face, face_mut);
    entity_accessors!(shells, "shell", ShellId, ShellData, add_shell, shell, shell_mut);
    entity_accessors!(solids, "solid", SolidId, SolidData, add_solid, solid, solid_mut);

    /// Collects the vertex positions of a wire in traversal order.
    ///
    /// One point per oriented edge (its start in traversal direction), so a
    /// closed wire yields one point per corner without duplicating the seam.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing from the store.
    pub fn wire_points(&self, wire_id: WireId) -> Result<Vec<crate::math::Point3>, TopologyError> {
        let wire = self.wire(wire_id)?;
        let mut points = Vec::with_capacity(wire.edges.len());
        for oe in &wire.edges {
            let edge = self.edge(oe.edge)?;
            let vertex_id = if oe.forward { edge.start } else { edge.end };
            points.push(self.vertex(vertex_id)?.point);
        }
        Ok(points)
    }

    /// Collects a polyline approximation of a wire, sampling arc edges into
    /// chords within `chord_tolerance`.
    ///
    /// Line edges contribute only their start point (in traversal direction)
    /// to avoid duplicates at shared vertices; the closing point is likewise
    /// omitted for closed wires.
    ///
    /// # Errors
    ///
    /// Returns an error if any referenced entity is missing or curve
    /// evaluation fails.
    pub fn wire_sampled_points(
        &self,
        wire_id: WireId,
        chord_tolerance: f64,
    ) -> crate::error::Result<Vec<crate::math::Point3>> {
        use crate::geometry::curve::Curve;

        let wire = self.wire(wire_id)?;
        let mut points = Vec::new();
        for oe in &wire.edges {
            let edge = self.edge(oe.edge)?;
            let (t_start, t_end) = if oe.forward {
                (edge.t_start, edge.t_end)
            } else {
                (edge.t_end, edge.t_start)
            };
            match &edge.curve {
                EdgeCurve::Line(line) => {
                    points.push(line.evaluate(t_start)?);
                }
                EdgeCurve::Arc(arc) => {
                    let n = arc_chord_segments(arc.radius(), (t_end - t_start).abs(), chord_tolerance);
                    for i in 0..n {
                        #[allow(clippy::cast_precision_loss)]
                        let t = t_start + (t_end - t_start) * i as f64 / n as f64;
                        points.push(arc.evaluate(t)?);
                    }
                }
            }
        }
        Ok(points)
    }
}

/// Number of chord segments needed to keep an arc's sagitta below the
/// tolerance.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn arc_chord_segments(radius: f64, sweep: f64, tolerance: f64) -> usize {
    if radius < tolerance || tolerance <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(θ/2)) → θ = 2 * acos(1 - tol/r)
    let max_angle = 2.0 * (1.0 - tolerance / radius).acos();
    if max_angle < f64::EPSILON {
        return 1;
    }
    ((sweep / max_angle).ceil() as usize).max(1)
}
