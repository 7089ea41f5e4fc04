use thiserror::Error;

/// Top-level error type for the facadekit kernel.
#[derive(Debug, Error)]
pub enum FacadeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Massing(#[from] MassingError),

    #[error(transparent)]
    Meshing(#[from] MeshingError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topological operations.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to operations and input validation.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to building-mass analysis.
#[derive(Debug, Error)]
pub enum MassingError {
    #[error("mass {mass} has no downward-facing face")]
    NoBottomFace { mass: usize },

    #[error("mass {mass} is not prismatic: {reason}")]
    NotPrismatic { mass: usize, reason: String },

    #[error("window id {id} is out of range (0..{len})")]
    WindowOutOfRange { id: usize, len: usize },

    #[error("floor plate id {id} is out of range (0..{len})")]
    PlateOutOfRange { id: usize, len: usize },

    #[error("building id {id} is out of range (0..{len})")]
    BuildingOutOfRange { id: usize, len: usize },
}

/// Errors related to mesh generation.
#[derive(Debug, Error)]
pub enum MeshingError {
    #[error("invalid meshing parameters: {0}")]
    InvalidParameters(String),

    #[error("meshing failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`FacadeError`].
pub type Result<T> = std::result::Result<T, FacadeError>;
