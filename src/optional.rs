use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or one occurrence of the given
/// parser, returning `Option`.
///
/// A failed attempt is rolled back and reported as `None`, so `Optional`
/// never fails and never leaves partial consumption behind.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        match cursor.attempt(|c| self.parser.parse(c)) {
            Ok(value) => Ok(Some(value)),
            Err(_) => Ok(None),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::char::is_char;
    use crate::int::int;

    #[test]
    fn test_optional_present() {
        let mut cursor = Cursor::new("-5");
        let parser = optional(is_char('-'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Some('-'));
        assert_eq!(cursor.remaining(), "5");
    }

    #[test]
    fn test_optional_absent() {
        let mut cursor = Cursor::new("5");
        let parser = optional(is_char('-'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_optional_rolls_back_partial_match() {
        // The inner sequence consumes the int before failing on ';'
        let mut cursor = Cursor::new("12.");
        let parser = optional(int().and(is_char(';')));

        assert_eq!(parser.parse(&mut cursor).unwrap(), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_optional_on_empty_input() {
        let mut cursor = Cursor::new("");
        let parser = optional(is_char('x'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), None);
    }

    #[test]
    fn test_optional_in_sequence() {
        let mut cursor = Cursor::new("x=3");
        let parser = is_char('x').and(optional(is_char('='))).and(int());

        let ((x, eq), value) = parser.parse(&mut cursor).unwrap();
        assert_eq!(x, 'x');
        assert_eq!(eq, Some('='));
        assert_eq!(value, 3);
    }
}
