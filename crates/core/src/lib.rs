//! # Sentix Core
//!
//! Core types and errors for the sentix spectral-index library.
//!
//! This crate provides:
//! - `BandCube`: multiband pixel stack (rows × cols × bands)
//! - `Error` / `Result`: shared error type for parsing and evaluation

pub mod cube;
pub mod error;

pub use cube::BandCube;
pub use error::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cube::BandCube;
    pub use crate::error::{Error, Result};
}
