use thiserror::Error;

/// Error types raised while constructing, parsing or restoring prior specifications.
///
/// Scalar priors accept any floating point input, so almost all of these
/// variants stem from the shape checks of the multivariate normal prior or
/// from the short-form parser.
#[derive(Debug, Error)]
pub enum PriorError {
    #[error("mu must be a vector, found an array with {0} dimensions")]
    MuNotVector(usize),

    #[error("Sigma must be a matrix, found an array with {0} dimensions")]
    SigmaNotMatrix(usize),

    #[error("Sigma must be square, found shape {rows}x{cols}")]
    SigmaNotSquare { rows: usize, cols: usize },

    #[error("mu and Sigma must be the same dimension: mu has length {mu}, Sigma is {sigma}x{sigma}")]
    DimensionMismatch { mu: usize, sigma: usize },

    #[error("Sigma row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid prior specification: {0}")]
    Parse(String),

    #[error("Array has an unexpected shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
