use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that succeeds iff the remaining input starts with the expected
/// literal, consuming exactly its bytes.
///
/// On failure nothing is consumed. On success the returned slice borrows
/// from the input, so it lives as long as the source text rather than the
/// parser.
pub struct IsString {
    expected: String,
}

impl<'code> Parser<'code> for IsString {
    type Output = &'code str;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        if !cursor.remaining().starts_with(&self.expected) {
            return Err(ParseError::Mismatch {
                expected: format!("{:?}", self.expected),
                found: None,
                position: cursor.position(),
            });
        }
        let consumed = match cursor.consume_bytes(self.expected.len()) {
            Ok(consumed) => consumed,
            Err(_) => panic!(
                "literal {:?} matched the remaining input but its bytes could not be consumed",
                self.expected
            ),
        };
        // Post-consumption self-check: the cursor must have handed back the
        // very bytes the prefix check matched
        if consumed != self.expected {
            panic!(
                "literal {:?} consumed wrong bytes {:?}",
                self.expected, consumed
            );
        }
        Ok(consumed)
    }
}

/// Convenience function to create a parser that matches a literal string
pub fn is_string(expected: impl Into<String>) -> IsString {
    IsString {
        expected: expected.into(),
    }
}
