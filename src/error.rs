use thiserror::Error;

use crate::layout::Edge;

/// Top-level error type for plate generation.
#[derive(Debug, Error)]
pub enum KeyplateError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid connector: {0}")]
    InvalidConnector(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to descriptor matrices and their boundaries.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("parent of descriptor ({row}, {col}) is missing or not yet resolved")]
    UnresolvedParent { row: usize, col: usize },

    #[error("no present switch on {edge} scan line {line}")]
    EmptyMatrix { edge: Edge, line: usize },

    #[error("descriptor ({row}, {col}) cannot link to later cell ({parent_row}, {parent_col})")]
    InvalidLink {
        row: usize,
        col: usize,
        parent_row: usize,
        parent_col: usize,
    },

    #[error("no descriptor at ({row}, {col})")]
    CellNotFound { row: usize, col: usize },
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),

    #[error("no connector named `{0}`")]
    MissingConnector(String),
}

/// Convenience type alias for results using [`KeyplateError`].
pub type Result<T> = std::result::Result<T, KeyplateError>;
