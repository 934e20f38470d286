//! Error types for sentix

use thiserror::Error;

/// Main error type for sentix operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unexpected end of formula")]
    EndOfFormula,

    #[error("Expected '{expected}', got '{found}'")]
    UnexpectedChar { expected: char, found: char },

    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),

    #[error("Unknown band label '{0}'")]
    UnknownBandLabel(String),

    #[error("Band index {index} out of range for pixel with {bands} bands")]
    BandOutOfRange { index: usize, bands: usize },

    #[error("Invalid cube dimensions: {rows}x{cols}x{bands}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        bands: usize,
    },

    #[error("Index out of bounds: ({row}, {col}) in cube of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for sentix operations
pub type Result<T> = std::result::Result<T, Error>;
