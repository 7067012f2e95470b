use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::regexp::{Regexp, regexp_str};
use std::sync::LazyLock;

// Compiled once for the whole process; the parser itself is a unit struct
static INT_PATTERN: LazyLock<Regexp> = LazyLock::new(|| regexp_str(r"[+\-]?[0-9]+"));

/// Parser that matches a signed integer literal: an optional `+`/`-` sign
/// followed by one or more digits.
///
/// A failed match propagates the underlying [`ParseError::NoMatch`]. A
/// literal that matches the pattern but does not fit in an `i64` panics —
/// the pattern is taken as a guarantee of convertibility, so a conversion
/// failure is treated as an engine assertion, not a parse error.
pub struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let digits = INT_PATTERN.parse(cursor)?;
        match digits.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(err) => panic!("matched integer literal {digits:?} failed to convert: {err}"),
        }
    }
}

/// Convenience function to create an integer parser
pub fn int() -> IntParser {
    IntParser
}
