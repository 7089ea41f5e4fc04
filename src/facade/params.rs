use crate::error::{OperationError, Result};

/// Input parameters of the facade solve.
///
/// Defaults mirror the component's parameter defaults: 4.0 for the level
/// height, 1.0 for the panel width.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacadeParams {
    /// Desired floor-to-floor height used when slicing masses into levels.
    pub level_height: f64,
    /// Desired panel width along floor boundary edges.
    pub panel_width: f64,
    /// Horizontal distance within which masses cluster into one building.
    pub cluster_tolerance: f64,
    /// When `true`, each mass is sliced into level plates of `level_height`
    /// instead of contributing only its bottom face.
    pub slice_levels: bool,
}

impl Default for FacadeParams {
    fn default() -> Self {
        Self {
            level_height: 4.0,
            panel_width: 1.0,
            cluster_tolerance: 0.01,
            slice_levels: false,
        }
    }
}

impl FacadeParams {
    /// Validates the parameters before any geometry runs.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for a non-positive level
    /// height or panel width, or a negative cluster tolerance.
    pub fn validate(&self) -> Result<()> {
        if self.level_height <= 0.0 {
            return Err(
                OperationError::InvalidInput("level height must be larger than 0.0".into()).into(),
            );
        }
        if self.panel_width <= 0.0 {
            return Err(
                OperationError::InvalidInput("panel width must be larger than 0.0".into()).into(),
            );
        }
        if self.cluster_tolerance < 0.0 {
            return Err(OperationError::InvalidInput(
                "cluster tolerance must not be negative".into(),
            )
            .into());
        }
        Ok(())
    }
}
