//! Compiled formula expressions

use sentix_core::{Error, Result};

use crate::parser::Parser;

/// One compiled formula term.
///
/// Terms form a tree built once by the parser and evaluated by recursive
/// match against a pixel's band vector. A term is immutable and
/// side-effect-free, so it can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Value of a single band
    Band(usize),
    /// `(a - b) / (a + b)`
    NormDiff(Box<Expr>, Box<Expr>),
    /// `a - b`
    Diff(Box<Expr>, Box<Expr>),
    /// `a / b`
    Ratio(Box<Expr>, Box<Expr>),
    /// `(a + b) / c`
    SumRatio(Box<Expr>, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Evaluate against one pixel's band values.
    ///
    /// Division follows IEEE semantics: a zero denominator yields an
    /// infinity or NaN, never an error. Referencing a band past the end of
    /// the vector fails with [`Error::BandOutOfRange`].
    pub fn eval(&self, pixel: &[f64]) -> Result<f64> {
        match self {
            Expr::Band(index) => {
                pixel
                    .get(*index)
                    .copied()
                    .ok_or(Error::BandOutOfRange {
                        index: *index,
                        bands: pixel.len(),
                    })
            }
            Expr::NormDiff(a, b) => {
                let v1 = a.eval(pixel)?;
                let v2 = b.eval(pixel)?;
                Ok((v1 - v2) / (v1 + v2))
            }
            Expr::Diff(a, b) => Ok(a.eval(pixel)? - b.eval(pixel)?),
            Expr::Ratio(a, b) => Ok(a.eval(pixel)? / b.eval(pixel)?),
            Expr::SumRatio(a, b, c) => {
                let v1 = a.eval(pixel)?;
                let v2 = b.eval(pixel)?;
                let v3 = c.eval(pixel)?;
                Ok((v1 + v2) / v3)
            }
        }
    }
}

/// An ordered set of compiled formula terms.
///
/// Built once from a `;`-separated formula string; evaluation reuses the
/// compiled terms, so the parse cost is paid a single time no matter how
/// many pixels follow. The set owns plain data only and can be shared
/// across threads by reference.
#[derive(Debug, Clone)]
pub struct FormulaSet {
    terms: Vec<Expr>,
}

impl FormulaSet {
    /// Compile a formula string into a set of evaluable terms.
    ///
    /// Fails on the first grammar violation; no partial set is produced.
    pub fn compile(src: &str) -> Result<Self> {
        let terms = Parser::new(src).parse()?;
        Ok(Self { terms })
    }

    /// Number of compiled terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the set holds no terms (cannot happen via [`compile`](Self::compile))
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The compiled terms in declaration order
    pub fn terms(&self) -> &[Expr] {
        &self.terms
    }

    /// Evaluate every term against one pixel's band values.
    ///
    /// Returns one value per term, in declaration order.
    pub fn evaluate(&self, pixel: &[f64]) -> Result<Vec<f64>> {
        self.terms.iter().map(|term| term.eval(pixel)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(index: usize) -> Box<Expr> {
        Box::new(Expr::Band(index))
    }

    #[test]
    fn test_band_reads_vector_offset() {
        let expr = Expr::Band(2);
        assert_eq!(expr.eval(&[1.0, 2.0, 3.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_band_out_of_range() {
        let expr = Expr::Band(5);
        let err = expr.eval(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::BandOutOfRange { index: 5, bands: 2 }));
    }

    #[test]
    fn test_norm_diff() {
        let expr = Expr::NormDiff(band(0), band(1));
        let v = expr.eval(&[0.6, 0.2]).unwrap();
        assert!((v - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_diff_and_ratio() {
        let diff = Expr::Diff(band(0), band(1));
        assert!((diff.eval(&[7.0, 3.0]).unwrap() - 4.0).abs() < 1e-10);

        let ratio = Expr::Ratio(band(0), band(1));
        assert!((ratio.eval(&[7.0, 3.5]).unwrap() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_sum_ratio() {
        let expr = Expr::SumRatio(band(0), band(1), band(2));
        let v = expr.eval(&[3.0, 5.0, 4.0]).unwrap();
        assert!((v - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let ratio = Expr::Ratio(band(0), band(1));
        assert!(ratio.eval(&[1.0, 0.0]).unwrap().is_infinite());
        assert!(ratio.eval(&[0.0, 0.0]).unwrap().is_nan());

        let nd = Expr::NormDiff(band(0), band(1));
        assert!(nd.eval(&[0.0, 0.0]).unwrap().is_nan());
    }
}
