use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::{OperationError, Result};
use crate::massing::{
    floor_assignments, ClusterBuildings, DeriveMasses, ExtractBottomFaces, FloorAssignment,
    FloorPlate, SliceLevels, SortFloors,
};
use crate::meshing::{AssemblePanels, MeshingParams, SubdivideBoundary, TessellateFloorPlate};
use crate::topology::{SolidId, TopologyStore};

use super::{FacadeModel, FacadeParams, Window};

/// The full facade solve: masses in, numbered floor plates, panel meshes and
/// windows out.
///
/// Stateless: every invocation recomputes the model from its inputs, so
/// rerunning on the same store is side-effect free.
pub struct GenerateFacade {
    params: FacadeParams,
}

impl GenerateFacade {
    /// Creates a new `GenerateFacade` operation.
    #[must_use]
    pub fn new(params: FacadeParams) -> Self {
        Self { params }
    }

    /// Executes the solve over the input masses.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the input list is
    /// empty, a mass has no bottom face (or is not prismatic under level
    /// slicing), or mesh generation fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, store: &TopologyStore, solids: &[SolidId]) -> Result<FacadeModel> {
        self.params.validate()?;
        if solids.is_empty() {
            return Err(OperationError::InvalidInput(
                "at least one building mass is required".into(),
            )
            .into());
        }
        tracing::info!(masses = solids.len(), "starting facade solve");

        let mut plates = if self.params.slice_levels {
            let mut all = Vec::new();
            for (index, &solid) in solids.iter().enumerate() {
                all.extend(
                    SliceLevels::new(solid, index, self.params.level_height).execute(store)?,
                );
            }
            all
        } else {
            ExtractBottomFaces::new(solids.to_vec()).execute(store)?
        };

        let masses = DeriveMasses::new(solids.to_vec()).execute(store, &plates)?;

        // Floor sort: plates follow their mass's vertical order, then their
        // own elevation within a mass.
        let order = SortFloors::new().execute(&masses);
        let mut rank = vec![0usize; masses.len()];
        for (r, &mass) in order.iter().enumerate() {
            rank[mass] = r;
        }
        plates.sort_by(|a, b| {
            rank[a.mass].cmp(&rank[b.mass]).then(
                a.elevation
                    .partial_cmp(&b.elevation)
                    .unwrap_or(Ordering::Equal),
            )
        });

        let buildings = ClusterBuildings::new(self.params.cluster_tolerance).execute(&masses);
        let assignments = floor_assignments(&buildings, masses.len());
        let plate_floors = plate_floor_numbers(&plates, &assignments);

        let subdivide = SubdivideBoundary::new(self.params.panel_width);
        let assemble = AssemblePanels::new();
        let tessellate = TessellateFloorPlate::new(MeshingParams::default());

        let mut model = FacadeModel {
            masses,
            buildings,
            ..FacadeModel::default()
        };

        for (plate_index, plate) in plates.iter().enumerate() {
            let divisions = subdivide.execute(plate)?;
            model.edge_points.extend(divisions.iter().flatten().copied());

            let (mesh, panels) = assemble.execute(plate, &divisions);
            let assignment = assignments[plate.mass];
            for panel in panels {
                let id = model.windows.len() as u32;
                model.windows.push(Window {
                    id,
                    mass: plate.mass as u32,
                    plate: plate_index as u32,
                    building: assignment.building,
                    floor: plate_floors[plate_index],
                    edge: panel.edge,
                    points: panel.points,
                });
            }
            model.panel_meshes.push(mesh);
            model.floor_meshes.push(tessellate.execute(plate)?);
        }
        model.plates = plates;

        tracing::info!(
            plates = model.plates.len(),
            buildings = model.buildings.len(),
            windows = model.windows.len(),
            "facade solve complete"
        );
        Ok(model)
    }
}

/// Floor numbers per plate: the plates of one building ranked by elevation,
/// ascending from 0.
#[allow(clippy::cast_possible_truncation)]
fn plate_floor_numbers(plates: &[FloorPlate], assignments: &[FloorAssignment]) -> Vec<u32> {
    let mut by_building: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, plate) in plates.iter().enumerate() {
        by_building
            .entry(assignments[plate.mass].building)
            .or_default()
            .push(index);
    }

    let mut floors = vec![0u32; plates.len()];
    for mut members in by_building.into_values() {
        members.sort_by(|&a, &b| {
            plates[a]
                .elevation
                .partial_cmp(&plates[b].elevation)
                .unwrap_or(Ordering::Equal)
        });
        for (floor, &index) in members.iter().enumerate() {
            floors[index] = floor as u32;
        }
    }
    floors
}
