use std::cmp::Ordering;

use crate::math::Point2;

use super::Mass;

/// A group of masses sharing horizontal position, floors numbered by height.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    /// Building id, assigned in order of first appearance.
    pub id: u32,
    /// Horizontal position of the cluster seed (the lowest-index member).
    pub position: Point2,
    /// Member mass indices ordered by ascending vertical center; the position
    /// in this list is the mass's floor number.
    pub floors: Vec<usize>,
}

/// Per-mass result of clustering: which building the mass belongs to and its
/// floor number within it.
#[derive(Debug, Clone, Copy)]
pub struct FloorAssignment {
    /// Building id.
    pub building: u32,
    /// Floor number, ascending with height from 0.
    pub floor: u32,
}

/// Groups masses into buildings by horizontal position.
///
/// A mass joins the first building whose seed position lies within the
/// distance tolerance; otherwise it starts a new building. Greedy and
/// order-stable, so reruns on the same input produce the same numbering.
/// With a tolerance of zero this degrades to exact-equality grouping.
pub struct ClusterBuildings {
    tolerance: f64,
}

impl ClusterBuildings {
    /// Creates a new `ClusterBuildings` operation with the given horizontal
    /// distance tolerance.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Executes the clustering, returning buildings with floors ordered by
    /// ascending vertical center.
    #[must_use]
    pub fn execute(&self, masses: &[Mass]) -> Vec<Building> {
        let mut buildings: Vec<Building> = Vec::new();

        for (index, mass) in masses.iter().enumerate() {
            match buildings
                .iter_mut()
                .find(|b| (b.position - mass.position).norm() <= self.tolerance)
            {
                Some(building) => building.floors.push(index),
                None => {
                    #[allow(clippy::cast_possible_truncation)]
                    let id = buildings.len() as u32;
                    buildings.push(Building {
                        id,
                        position: mass.position,
                        floors: vec![index],
                    });
                }
            }
        }

        for building in &mut buildings {
            building.floors.sort_by(|&a, &b| {
                masses[a]
                    .center
                    .z
                    .partial_cmp(&masses[b].center.z)
                    .unwrap_or(Ordering::Equal)
            });
        }

        tracing::debug!(
            masses = masses.len(),
            buildings = buildings.len(),
            "clustered masses into buildings"
        );
        buildings
    }
}

/// Flattens buildings into a per-mass `(building, floor)` assignment table.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn floor_assignments(buildings: &[Building], mass_count: usize) -> Vec<FloorAssignment> {
    let mut assignments = vec![
        FloorAssignment {
            building: 0,
            floor: 0,
        };
        mass_count
    ];
    for building in buildings {
        for (floor, &mass) in building.floors.iter().enumerate() {
            assignments[mass] = FloorAssignment {
                building: building.id,
                floor: floor as u32,
            };
        }
    }
    assignments
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::massing::{DeriveMasses, ExtractBottomFaces};
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::topology::TopologyStore;

    /// Builds one mass per `(x, y, z_min, z_max)` footprint corner.
    fn masses_at(positions: &[(f64, f64, f64, f64)]) -> Vec<Mass> {
        let mut store = TopologyStore::new();
        let solids: Vec<_> = positions
            .iter()
            .map(|&(x, y, z_min, z_max)| {
                MakeBox::new(
                    Point3::new(x, y, z_min),
                    Point3::new(x + 2.0, y + 2.0, z_max),
                )
                .execute(&mut store)
                .unwrap()
            })
            .collect();
        let plates = ExtractBottomFaces::new(solids.clone())
            .execute(&store)
            .unwrap();
        DeriveMasses::new(solids).execute(&store, &plates).unwrap()
    }

    #[test]
    fn stacked_masses_form_one_building() {
        let masses = masses_at(&[
            (0.0, 0.0, 0.0, 3.0),
            (0.0, 0.0, 3.0, 6.0),
            (0.0, 0.0, 6.0, 9.0),
        ]);
        let buildings = ClusterBuildings::new(0.01).execute(&masses);
        assert_eq!(buildings.len(), 1);
        assert_eq!(buildings[0].floors, vec![0, 1, 2]);
    }

    #[test]
    fn separate_towers_form_separate_buildings() {
        let masses = masses_at(&[
            (0.0, 0.0, 0.0, 3.0),
            (50.0, 0.0, 0.0, 3.0),
            (0.0, 0.0, 3.0, 6.0),
            (50.0, 0.0, 3.0, 6.0),
        ]);
        let buildings = ClusterBuildings::new(0.01).execute(&masses);
        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].floors, vec![0, 2]);
        assert_eq!(buildings[1].floors, vec![1, 3]);
    }

    #[test]
    fn nominally_aligned_masses_group_within_tolerance() {
        // Not bit-identical positions; equality-based grouping would split
        // these into two buildings.
        let masses = masses_at(&[
            (0.0, 0.0, 0.0, 3.0),
            (1e-9, -1e-9, 3.0, 6.0),
        ]);
        let buildings = ClusterBuildings::new(0.01).execute(&masses);
        assert_eq!(buildings.len(), 1);
    }

    #[test]
    fn floors_increase_strictly_with_height() {
        // Property: floor numbers within a group are strictly increasing
        // with vertical position; insertion order here is top-down.
        let masses = masses_at(&[
            (0.0, 0.0, 6.0, 9.0),
            (0.0, 0.0, 0.0, 3.0),
            (0.0, 0.0, 3.0, 6.0),
        ]);
        let buildings = ClusterBuildings::new(0.01).execute(&masses);
        assert_eq!(buildings.len(), 1);
        let floors = &buildings[0].floors;
        assert_eq!(floors, &vec![1, 2, 0]);
        for pair in floors.windows(2) {
            assert!(masses[pair[0]].center.z < masses[pair[1]].center.z);
        }
    }

    #[test]
    fn assignments_index_by_mass() {
        let masses = masses_at(&[
            (0.0, 0.0, 3.0, 6.0),
            (50.0, 0.0, 0.0, 3.0),
            (0.0, 0.0, 0.0, 3.0),
        ]);
        let buildings = ClusterBuildings::new(0.01).execute(&masses);
        let assignments = floor_assignments(&buildings, masses.len());
        // Mass 0 is the upper floor of building 0 (seeded by it), mass 2 the
        // lower floor; mass 1 is building 1.
        assert_eq!(assignments[0].building, 0);
        assert_eq!(assignments[0].floor, 1);
        assert_eq!(assignments[1].building, 1);
        assert_eq!(assignments[1].floor, 0);
        assert_eq!(assignments[2].building, 0);
        assert_eq!(assignments[2].floor, 0);
    }

    #[test]
    fn zero_tolerance_requires_exact_equality() {
        let masses = masses_at(&[
            (0.0, 0.0, 0.0, 3.0),
            (1e-9, 0.0, 3.0, 6.0),
        ]);
        let buildings = ClusterBuildings::new(0.0).execute(&masses);
        assert_eq!(buildings.len(), 2);
    }
}
