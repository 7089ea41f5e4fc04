use crate::error::Result;
use crate::topology::{TopologyStore, WireId};

/// Computes the exact total length of a wire's edges.
pub struct WireLength {
    wire: WireId,
}

impl WireLength {
    /// Creates a new `WireLength` query.
    #[must_use]
    pub fn new(wire: WireId) -> Self {
        Self { wire }
    }

    /// Executes the query, returning the summed edge length.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire references missing entities.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let wire = store.wire(self.wire)?;
        let mut total = 0.0;
        for oe in &wire.edges {
            total += store.edge(oe.edge)?.length();
        }
        Ok(total)
    }
}
