use crate::error::{MassingError, Result, TopologyError};
use crate::operations::query::BoundingBox;
use crate::topology::{FaceData, SolidId, TopologyStore, WireId};

use super::{BoundaryEdge, BoundaryLoop, FloorPlate};

/// Alignment with straight down required of a face's outward normal for the
/// face to count as a bottom face (`n · -Z ≥ DOWN_ALIGNMENT`).
const DOWN_ALIGNMENT: f64 = 1.0 - 1e-9;

/// Extracts every downward-facing face of each input mass and trims it to
/// standalone boundary loops.
///
/// A mass may contribute several plates (stepped undersides); a mass with no
/// downward face is reported as an explicit error rather than failing later
/// by index.
pub struct ExtractBottomFaces {
    solids: Vec<SolidId>,
}

impl ExtractBottomFaces {
    /// Creates a new `ExtractBottomFaces` operation over the input masses.
    #[must_use]
    pub fn new(solids: Vec<SolidId>) -> Self {
        Self { solids }
    }

    /// Executes the extraction, returning the floor plates of all masses in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns [`MassingError::NoBottomFace`] if a mass has no
    /// downward-facing face, or a topology error if the store is
    /// inconsistent.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<FloorPlate>> {
        let mut plates = Vec::new();
        for (index, &solid_id) in self.solids.iter().enumerate() {
            let found = bottom_plates(store, solid_id, index)?;
            if found.is_empty() {
                return Err(MassingError::NoBottomFace { mass: index }.into());
            }
            plates.extend(found);
        }
        tracing::debug!(count = plates.len(), "extracted floor plates");
        Ok(plates)
    }
}

/// Collects the trimmed bottom plates of one solid.
///
/// The plate's panel height is the solid's vertical bounding extent; level
/// slicing overrides it.
pub(crate) fn bottom_plates(
    store: &TopologyStore,
    solid_id: SolidId,
    mass_index: usize,
) -> Result<Vec<FloorPlate>> {
    let solid = store.solid(solid_id)?;
    let shell = store.shell(solid.outer_shell)?;
    let bounds = BoundingBox::new(solid_id).execute(store)?;

    let mut plates = Vec::new();
    for &face_id in &shell.faces {
        let face = store.face(face_id)?;
        if face.outward_normal().z <= -DOWN_ALIGNMENT {
            plates.push(trim_to_plate(store, face, mass_index, bounds.height())?);
        }
    }
    Ok(plates)
}

/// Copies a face's boundary wires into a standalone plate.
fn trim_to_plate(
    store: &TopologyStore,
    face: &FaceData,
    mass: usize,
    panel_height: f64,
) -> Result<FloorPlate> {
    let outer = clone_loop(store, face.outer_wire)?;
    let inner = face
        .inner_wires
        .iter()
        .map(|&w| clone_loop(store, w))
        .collect::<Result<Vec<_>>>()?;

    let first = outer
        .edges
        .first()
        .ok_or_else(|| TopologyError::InvalidTopology("face boundary has no edges".into()))?;
    let elevation = first.point_at_length(0.0)?.z;

    Ok(FloorPlate {
        mass,
        elevation,
        panel_height,
        plane: face.plane.clone(),
        outer,
        inner,
    })
}

/// Copies a wire into an owned boundary loop, resolving edge orientation into
/// the traversal parameter span.
fn clone_loop(store: &TopologyStore, wire_id: WireId) -> Result<BoundaryLoop> {
    let wire = store.wire(wire_id)?;
    let mut edges = Vec::with_capacity(wire.edges.len());
    for oe in &wire.edges {
        let edge = store.edge(oe.edge)?;
        let (t_start, t_end) = if oe.forward {
            (edge.t_start, edge.t_end)
        } else {
            (edge.t_end, edge.t_start)
        };
        edges.push(BoundaryEdge {
            curve: edge.curve.clone(),
            t_start,
            t_end,
        });
    }
    Ok(BoundaryLoop { edges })
}
