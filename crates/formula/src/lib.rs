//! # Sentix Formula
//!
//! A compiler for spectral-index formulas in Hollstein notation [1]: a small
//! arithmetic language over multispectral bands, parsed once and evaluated
//! per pixel.
//!
//! The grammar of the language:
//!
//! ```text
//! E -> T | T ';' E
//! T -> I(T,T) | S(T,T) | R(T,T) | D(T,T,T) | B
//! B -> B1 | B2 | ... | B8 | B8A | B9 | B10 | B11 | B12
//! ```
//!
//! `I` is a normalized difference, `S` a difference, `R` a ratio, and `D` a
//! two-band sum divided by a third band. Band labels map onto the 13-band
//! Sentinel-2 MSI layout, where `B8A` sits between `B8` and `B9`; leading
//! zeros are accepted (`B04` equals `B4`). Whitespace is ignored everywhere.
//!
//! A formula string compiles into a [`FormulaSet`] that can be applied to
//! any number of per-pixel band vectors without re-parsing:
//!
//! ```
//! use sentix_formula::FormulaSet;
//!
//! // NDVI = (B8 - B4) / (B8 + B4)
//! let ndvi = FormulaSet::compile("I(B8,B4)").unwrap();
//!
//! let mut pixel = vec![0.0; 13];
//! pixel[7] = 0.6; // B8
//! pixel[3] = 0.2; // B4
//!
//! let values = ndvi.evaluate(&pixel).unwrap();
//! assert!((values[0] - 0.5).abs() < 1e-10);
//! ```
//!
//! Reference:
//! [1] Hollstein, A. et al. (2016). Ready-to-use methods for the detection
//! of clouds, cirrus, snow, shadow, water and clear sky pixels in Sentinel-2
//! MSI images. *Remote Sensing*, 8(8), 666.

mod bands;
mod expr;
mod extract;
mod lexer;
mod parser;

pub use bands::band_index;
pub use expr::{Expr, FormulaSet};
pub use extract::extract_features;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bands::band_index;
    pub use crate::expr::{Expr, FormulaSet};
    pub use crate::extract::extract_features;
    pub use sentix_core::prelude::*;
}
