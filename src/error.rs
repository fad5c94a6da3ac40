use thiserror::Error;

pub type Result<T> = core::result::Result<T, FftError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Length is zero or not a power of two
    #[error("invalid input length {len}: must be a non-zero power of two")]
    InvalidInputLength { len: usize },

    /// Buffer length differs from the length a plan was built for
    #[error("buffer has {len} samples but the plan expects {expected}")]
    LengthMismatch { expected: usize, len: usize },

    /// Real and imaginary parts of a split input differ in length
    #[error("real part has {re} samples but imaginary part has {im}")]
    MismatchedParts { re: usize, im: usize },

    #[error("{len} values cannot form a {height}x{width} matrix")]
    DimensionMismatch {
        len: usize,
        height: usize,
        width: usize,
    },

    #[error(
        "block {block_height}x{block_width} at line {row} column {col} exceeds {height}x{width} matrix"
    )]
    BlockOutOfBounds {
        row: usize,
        col: usize,
        block_height: usize,
        block_width: usize,
        height: usize,
        width: usize,
    },
}
