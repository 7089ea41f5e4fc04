use std::cmp::Ordering;

use super::Mass;

/// Orders masses by the vertical coordinate of their bounding-box center,
/// ascending.
///
/// The sort is stable, so masses at the same height keep their input order.
#[derive(Debug, Default)]
pub struct SortFloors;

impl SortFloors {
    /// Creates a new `SortFloors` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the sort, returning mass indices from lowest to highest.
    #[must_use]
    pub fn execute(&self, masses: &[Mass]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..masses.len()).collect();
        order.sort_by(|&a, &b| {
            masses[a]
                .center
                .z
                .partial_cmp(&masses[b].center.z)
                .unwrap_or(Ordering::Equal)
        });
        order
    }
}
