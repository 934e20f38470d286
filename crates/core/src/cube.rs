//! Multiband pixel stack

use crate::error::{Error, Result};
use ndarray::{s, Array3, ArrayView1, ArrayView3};

/// A stack of co-registered image bands.
///
/// `BandCube` stores one `f64` sample per (row, col, band) in row-major
/// order, so the band values of a single pixel are contiguous in memory.
///
/// # Example
///
/// ```ignore
/// use sentix_core::BandCube;
///
/// // A 100x100 tile with 13 bands
/// let mut cube = BandCube::new(100, 100, 13);
///
/// cube.set(10, 20, 0, 0.42)?;
/// let pixel = cube.pixel(10, 20)?;
/// ```
#[derive(Debug, Clone)]
pub struct BandCube {
    /// Samples stored as (row, col, band)
    data: Array3<f64>,
    /// No-data value
    nodata: Option<f64>,
}

impl BandCube {
    /// Create a new cube filled with zeros
    pub fn new(rows: usize, cols: usize, bands: usize) -> Self {
        Self {
            data: Array3::zeros((rows, cols, bands)),
            nodata: None,
        }
    }

    /// Create a new cube filled with a specific value
    pub fn filled(rows: usize, cols: usize, bands: usize, value: f64) -> Self {
        Self {
            data: Array3::from_elem((rows, cols, bands), value),
            nodata: None,
        }
    }

    /// Create a cube from existing data in (row, col, band) order
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize, bands: usize) -> Result<Self> {
        if data.len() != rows * cols * bands {
            return Err(Error::InvalidDimensions { rows, cols, bands });
        }

        let array = Array3::from_shape_vec((rows, cols, bands), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self {
            data: array,
            nodata: None,
        })
    }

    /// Create a cube from an ndarray
    pub fn from_array(data: Array3<f64>) -> Self {
        Self { data, nodata: None }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.shape()[0]
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.shape()[1]
    }

    /// Number of bands
    pub fn bands(&self) -> usize {
        self.data.shape()[2]
    }

    /// Dimensions as (rows, cols, bands)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the cube is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get the value of one band at (row, col)
    pub fn get(&self, row: usize, col: usize, band: usize) -> Result<f64> {
        self.check_pixel(row, col)?;
        if band >= self.bands() {
            return Err(Error::BandOutOfRange {
                index: band,
                bands: self.bands(),
            });
        }
        Ok(self.data[(row, col, band)])
    }

    /// Set the value of one band at (row, col)
    pub fn set(&mut self, row: usize, col: usize, band: usize, value: f64) -> Result<()> {
        self.check_pixel(row, col)?;
        if band >= self.bands() {
            return Err(Error::BandOutOfRange {
                index: band,
                bands: self.bands(),
            });
        }
        self.data[(row, col, band)] = value;
        Ok(())
    }

    /// Band values of the pixel at (row, col), in band order
    pub fn pixel(&self, row: usize, col: usize) -> Result<ArrayView1<'_, f64>> {
        self.check_pixel(row, col)?;
        Ok(self.data.slice(s![row, col, ..]))
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView3<'_, f64> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array3<f64> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array3<f64> {
        &mut self.data
    }

    /// Consume the cube and return the underlying array
    pub fn into_array(self) -> Array3<f64> {
        self.data
    }

    // Metadata

    /// Get the no-data value
    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// Set the no-data value
    pub fn set_nodata(&mut self, nodata: Option<f64>) {
        self.nodata = nodata;
    }

    /// Check if a value is no-data. NaN always counts as no-data.
    pub fn is_nodata(&self, value: f64) -> bool {
        if value.is_nan() {
            return true;
        }
        match self.nodata {
            Some(nd) => (value - nd).abs() < f64::EPSILON,
            None => false,
        }
    }

    fn check_pixel(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }
}
