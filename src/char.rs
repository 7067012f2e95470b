use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that consumes one code point and succeeds iff it equals the
/// expected one.
///
/// The code point is consumed before the comparison, so a mismatch leaves
/// the cursor advanced past it — like any sequence failure, rollback is the
/// enclosing choice's job.
pub struct IsChar {
    expected: char,
}

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let (ch, _) = cursor.read_char()?;
        if ch != self.expected {
            return Err(ParseError::Mismatch {
                expected: format!("{:?}", self.expected),
                found: Some(format!("{ch:?}")),
                position: cursor.position(),
            });
        }
        Ok(ch)
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar { expected }
}
