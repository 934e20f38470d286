//! Recursive descent parser for the formula grammar
//!
//! ```text
//! expr  -> term (';' term)*
//! term  -> 'I' '(' term ',' term ')'
//!        | 'S' '(' term ',' term ')'
//!        | 'R' '(' term ',' term ')'
//!        | 'D' '(' term ',' term ',' term ')'
//!        | 'B' label
//! label -> digit digit? | digit ('A' | 'a')
//! ```
//!
//! Each production compiles its children before building its own node, so
//! nesting composes to arbitrary depth. The grammar is LL(1) apart from the
//! one-character lookahead on band labels.

use sentix_core::{Error, Result};

use crate::bands::band_index;
use crate::expr::Expr;
use crate::lexer::Lexer;

pub(crate) struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub(crate) fn new(src: &str) -> Self {
        Self {
            lexer: Lexer::new(src),
        }
    }

    /// Parse the whole input: one or more `;`-separated terms.
    pub(crate) fn parse(mut self) -> Result<Vec<Expr>> {
        let mut terms = vec![self.parse_term()?];

        while !self.lexer.at_end() {
            self.expect(';')?;
            terms.push(self.parse_term()?);
        }

        Ok(terms)
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        let found = self.lexer.advance()?;
        if found != expected {
            return Err(Error::UnexpectedChar { expected, found });
        }
        Ok(())
    }

    fn parse_term(&mut self) -> Result<Expr> {
        match self.lexer.advance()? {
            'I' => {
                let (a, b) = self.parse_pair()?;
                Ok(Expr::NormDiff(Box::new(a), Box::new(b)))
            }
            'S' => {
                let (a, b) = self.parse_pair()?;
                Ok(Expr::Diff(Box::new(a), Box::new(b)))
            }
            'R' => {
                let (a, b) = self.parse_pair()?;
                Ok(Expr::Ratio(Box::new(a), Box::new(b)))
            }
            'D' => {
                self.expect('(')?;
                let a = self.parse_term()?;
                self.expect(',')?;
                let b = self.parse_term()?;
                self.expect(',')?;
                let c = self.parse_term()?;
                self.expect(')')?;
                Ok(Expr::SumRatio(Box::new(a), Box::new(b), Box::new(c)))
            }
            'B' => self.parse_band(),
            ch => Err(Error::UnknownOperator(ch)),
        }
    }

    /// `'(' term ',' term ')'` — the argument list shared by I, S and R
    fn parse_pair(&mut self) -> Result<(Expr, Expr)> {
        self.expect('(')?;
        let a = self.parse_term()?;
        self.expect(',')?;
        let b = self.parse_term()?;
        self.expect(')')?;
        Ok((a, b))
    }

    /// Band label: one or two digits, or a digit with an `A` suffix
    fn parse_band(&mut self) -> Result<Expr> {
        let first = self.lexer.advance()?;
        if !first.is_ascii_digit() {
            return Err(Error::UnknownBandLabel(first.to_string()));
        }

        let mut label = String::from(first);
        if let Ok(next) = self.lexer.peek() {
            if next.is_ascii_digit() || next.eq_ignore_ascii_case(&'a') {
                self.lexer.advance()?;
                label.push(next);
            }
        }

        Ok(Expr::Band(band_index(&label)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<Vec<Expr>> {
        Parser::new(src).parse()
    }

    #[test]
    fn test_single_band_term() {
        assert_eq!(parse("B04").unwrap(), vec![Expr::Band(3)]);
        assert_eq!(parse("B8A").unwrap(), vec![Expr::Band(8)]);
        assert_eq!(parse("B12").unwrap(), vec![Expr::Band(12)]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            parse("I(B1,B2)").unwrap(),
            vec![Expr::NormDiff(
                Box::new(Expr::Band(0)),
                Box::new(Expr::Band(1))
            )]
        );
        assert_eq!(
            parse("D(B1,B2,B3)").unwrap(),
            vec![Expr::SumRatio(
                Box::new(Expr::Band(0)),
                Box::new(Expr::Band(1)),
                Box::new(Expr::Band(2))
            )]
        );
    }

    #[test]
    fn test_nested_terms() {
        let terms = parse("I(S(B01,B02),D(B03,B04,B05))").unwrap();
        assert_eq!(
            terms,
            vec![Expr::NormDiff(
                Box::new(Expr::Diff(
                    Box::new(Expr::Band(0)),
                    Box::new(Expr::Band(1))
                )),
                Box::new(Expr::SumRatio(
                    Box::new(Expr::Band(2)),
                    Box::new(Expr::Band(3)),
                    Box::new(Expr::Band(4))
                )),
            )]
        );
    }

    #[test]
    fn test_semicolon_separated_terms() {
        let terms = parse("B01;B02;I(B01,B02)").unwrap();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0], Expr::Band(0));
        assert_eq!(terms[1], Expr::Band(1));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let spaced = parse(" I ( B08 ,\tB04 ) ").unwrap();
        let tight = parse("I(B08,B04)").unwrap();
        assert_eq!(spaced, tight);
    }

    #[test]
    fn test_trailing_whitespace_after_last_term() {
        assert!(parse("B01  \n").is_ok());
    }

    #[test]
    fn test_missing_closing_paren() {
        assert!(matches!(parse("I(B01,B02"), Err(Error::EndOfFormula)));
    }

    #[test]
    fn test_missing_comma() {
        assert!(matches!(
            parse("I(B01)"),
            Err(Error::UnexpectedChar {
                expected: ',',
                found: ')'
            })
        ));
    }

    #[test]
    fn test_unknown_operator() {
        assert!(matches!(
            parse("X(B01,B02)"),
            Err(Error::UnknownOperator('X'))
        ));
    }

    #[test]
    fn test_unknown_band_labels() {
        assert!(matches!(parse("B00"), Err(Error::UnknownBandLabel(_))));
        assert!(matches!(parse("B13"), Err(Error::UnknownBandLabel(_))));
        assert!(matches!(parse("B7A"), Err(Error::UnknownBandLabel(_))));
        assert!(matches!(parse("BX"), Err(Error::UnknownBandLabel(_))));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert!(matches!(parse(""), Err(Error::EndOfFormula)));
        assert!(matches!(parse("   "), Err(Error::EndOfFormula)));
    }

    #[test]
    fn test_garbage_after_term() {
        assert!(matches!(
            parse("B01 B02"),
            Err(Error::UnexpectedChar {
                expected: ';',
                found: 'B'
            })
        ));
    }
}
