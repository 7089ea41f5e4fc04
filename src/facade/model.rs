use crate::error::{MassingError, Result};
use crate::massing::{Building, FloorPlate, Mass};
use crate::math::Point3;
use crate::meshing::{QuadMesh, TriangleMesh};

/// One facade window: a panel quad with its numbering attributes.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// Window id, sequential across the whole model.
    pub id: u32,
    /// Input index of the owning mass.
    pub mass: u32,
    /// Index of the owning floor plate in the model's sorted plate list.
    pub plate: u32,
    /// Building id from clustering.
    pub building: u32,
    /// Floor number within the building, ascending with elevation from 0.
    pub floor: u32,
    /// Boundary edge index within the owning plate.
    pub edge: u32,
    /// The quad's four vertex indices in the owning plate's panel mesh,
    /// bottom edge first.
    pub points: [u32; 4],
}

/// All windows of a solve, in id order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowTable {
    windows: Vec<Window>,
}

impl WindowTable {
    /// Appends a window; its `id` must equal the current length.
    pub(crate) fn push(&mut self, window: Window) {
        debug_assert_eq!(window.id as usize, self.windows.len());
        self.windows.push(window);
    }

    /// Number of windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Looks a window up by id.
    ///
    /// # Errors
    ///
    /// Returns [`MassingError::WindowOutOfRange`] for an unknown id.
    pub fn get(&self, id: usize) -> Result<&Window> {
        self.windows.get(id).ok_or_else(|| {
            MassingError::WindowOutOfRange {
                id,
                len: self.windows.len(),
            }
            .into()
        })
    }

    /// Iterates the windows in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Window> {
        self.windows.iter()
    }
}

impl<'a> IntoIterator for &'a WindowTable {
    type Item = &'a Window;
    type IntoIter = std::slice::Iter<'a, Window>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}

/// The output of a facade solve: every output slot the host reads.
///
/// Returned by value from [`GenerateFacade`](super::GenerateFacade); nothing
/// is carried over between invocations.
#[derive(Debug, Default)]
pub struct FacadeModel {
    /// Per-mass attribute records, in input order.
    pub masses: Vec<Mass>,
    /// Building clusters with floor-ordered member masses.
    pub buildings: Vec<Building>,
    /// Floor plates, sorted by floor order (the "floor surfaces" output).
    pub plates: Vec<FloorPlate>,
    /// Flattened subdivision points of all plate boundaries (the "edge
    /// points" output), in plate order.
    pub edge_points: Vec<Point3>,
    /// One panel mesh per plate, parallel to `plates`.
    pub panel_meshes: Vec<QuadMesh>,
    /// One floor surface mesh per plate, parallel to `plates`.
    pub floor_meshes: Vec<TriangleMesh>,
    /// All windows with their numbering attributes.
    pub windows: WindowTable,
}

impl FacadeModel {
    /// Looks a window up by id.
    ///
    /// # Errors
    ///
    /// Returns [`MassingError::WindowOutOfRange`] for an unknown id.
    pub fn window(&self, id: usize) -> Result<&Window> {
        self.windows.get(id)
    }

    /// Looks a floor plate up by id (its index in the sorted plate list).
    ///
    /// # Errors
    ///
    /// Returns [`MassingError::PlateOutOfRange`] for an unknown id.
    pub fn plate(&self, id: usize) -> Result<&FloorPlate> {
        self.plates.get(id).ok_or_else(|| {
            MassingError::PlateOutOfRange {
                id,
                len: self.plates.len(),
            }
            .into()
        })
    }

    /// Looks a building up by id.
    ///
    /// # Errors
    ///
    /// Returns [`MassingError::BuildingOutOfRange`] for an unknown id.
    pub fn building(&self, id: usize) -> Result<&Building> {
        self.buildings.get(id).ok_or_else(|| {
            MassingError::BuildingOutOfRange {
                id,
                len: self.buildings.len(),
            }
            .into()
        })
    }

    /// Merges the per-plate panel meshes into a single mesh, returning it
    /// together with the windows reindexed into the merged vertex space.
    #[must_use]
    pub fn combined_mesh(&self) -> (QuadMesh, Vec<Window>) {
        let mut mesh = QuadMesh::default();
        let mut offsets = Vec::with_capacity(self.panel_meshes.len());
        for plate_mesh in &self.panel_meshes {
            offsets.push(mesh.append(plate_mesh));
        }

        let windows = self
            .windows
            .iter()
            .map(|w| {
                let offset = offsets[w.plate as usize];
                Window {
                    points: w.points.map(|i| i + offset),
                    ..*w
                }
            })
            .collect();
        (mesh, windows)
    }
}
