use crate::error::{Result, TopologyError};
use crate::topology::{SolidData, SolidId, TopologyStore};

/// Creates a solid from an outer shell and optional void shells.
pub struct MakeSolid {
    outer_shell: crate::topology::ShellId,
    inner_shells: Vec<crate::topology::ShellId>,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(
        outer_shell: crate::topology::ShellId,
        inner_shells: Vec<crate::topology::ShellId>,
    ) -> Self {
        Self {
            outer_shell,
            inner_shells,
        }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if any shell is missing from the store or the outer
    /// shell is not closed.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let outer = store.shell(self.outer_shell)?;
        if !outer.is_closed {
            return Err(
                TopologyError::InvalidTopology("outer shell of a solid must be closed".into())
                    .into(),
            );
        }
        for &inner in &self.inner_shells {
            store.shell(inner)?;
        }

        Ok(store.add_solid(SolidData {
            outer_shell: self.outer_shell,
            inner_shells: self.inner_shells.clone(),
        }))
    }
}
