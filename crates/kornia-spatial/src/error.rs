/// An error type for the spatial set actions.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialError {
    /// A spatial matrix does not have one row per spatial coordinate.
    #[error("Spatial matrix must have {expected} rows, got {got}")]
    InvalidRowCount {
        /// Number of rows of a spatial vector.
        expected: usize,
        /// Number of rows of the offending matrix.
        got: usize,
    },

    /// The source and destination sets do not have the same number of columns.
    #[error("Source set has {src} columns but destination set has {dst}")]
    ColumnCountMismatch {
        /// Number of columns of the source set.
        src: usize,
        /// Number of columns of the destination set.
        dst: usize,
    },
}
