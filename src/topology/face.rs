use crate::geometry::Plane;
use crate::math::Vector3;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// Faces in this kernel are always planar: a face is a bounded region of a
/// plane, defined by an outer wire and optionally inner wires (holes).
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The supporting plane of this face.
    pub plane: Plane,
    /// The outer boundary wire.
    pub outer_wire: WireId,
    /// Inner boundary wires (holes).
    pub inner_wires: Vec<WireId>,
    /// If `true`, the face's outward normal agrees with the plane normal.
    pub same_sense: bool,
}

impl FaceData {
    /// Returns the face's outward normal.
    #[must_use]
    pub fn outward_normal(&self) -> Vector3 {
        if self.same_sense {
            *self.plane.normal()
        } else {
            -*self.plane.normal()
        }
    }
}
