//! Per-pixel feature extraction over a band cube

use log::debug;
use sentix_core::{BandCube, Result};

use crate::expr::FormulaSet;

/// Apply a compiled formula set to every pixel of a cube.
///
/// Walks the cube serially, evaluates the set against each pixel's band
/// vector, and assembles the results into an output cube with one band per
/// compiled term, in declaration order.
///
/// Pixels containing the input's no-data value (or NaN) come out as NaN
/// across all terms, and the output's no-data is NaN. Division edge cases
/// propagate as IEEE infinities/NaN values.
///
/// # Arguments
/// * `cube` - Input bands, (rows, cols, bands)
/// * `formulas` - Compiled formula set to evaluate per pixel
///
/// # Errors
/// A band reference past the end of the input's band dimension aborts the
/// extraction with [`Error::BandOutOfRange`](sentix_core::Error::BandOutOfRange).
pub fn extract_features(cube: &BandCube, formulas: &FormulaSet) -> Result<BandCube> {
    let (rows, cols, bands) = cube.shape();
    let n_terms = formulas.len();

    debug!("input cube shape: ({}, {}, {})", rows, cols, bands);

    let mut data = Vec::with_capacity(rows * cols * n_terms);
    let mut pixel = Vec::with_capacity(bands);

    for row in 0..rows {
        for col in 0..cols {
            pixel.clear();
            pixel.extend(cube.pixel(row, col)?.iter().copied());

            if pixel.iter().any(|&v| cube.is_nodata(v)) {
                data.extend(std::iter::repeat(f64::NAN).take(n_terms));
                continue;
            }

            data.extend(formulas.evaluate(&pixel)?);
        }
    }

    let mut output = BandCube::from_vec(data, rows, cols, n_terms)?;
    output.set_nodata(Some(f64::NAN));

    debug!("feature cube shape: ({}, {}, {})", rows, cols, n_terms);

    Ok(output)
}
