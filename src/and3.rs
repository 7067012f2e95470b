use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences three parsers and returns a flat triple.
///
/// Behaves exactly like two nested [`And`](crate::and::And)s — first failure
/// short-circuits, consumed input stays consumed — but avoids the nested
/// `((a, b), c)` destructuring for the common delimiter/content/delimiter
/// shape.
pub struct And3<P1, P2, P3> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
}

impl<P1, P2, P3> And3<P1, P2, P3> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3) -> Self {
        And3 {
            parser1,
            parser2,
            parser3,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for And3<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = (P1::Output, P2::Output, P3::Output);

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let first = self.parser1.parse(cursor)?;
        let second = self.parser2.parse(cursor)?;
        let third = self.parser3.parse(cursor)?;
        Ok((first, second, third))
    }
}

/// Convenience function to create an And3 parser
pub fn and3<'code, P1, P2, P3>(parser1: P1, parser2: P2, parser3: P3) -> And3<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    And3::new(parser1, parser2, parser3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::int::int;

    #[test]
    fn test_and3_all_succeed() {
        let mut cursor = Cursor::new("(7)rest");
        let parser = and3(is_char('('), int(), is_char(')'));

        let (open, value, close) = parser.parse(&mut cursor).unwrap();
        assert_eq!(open, '(');
        assert_eq!(value, 7);
        assert_eq!(close, ')');
        assert_eq!(cursor.remaining(), "rest");
    }

    #[test]
    fn test_and3_first_fails() {
        let mut cursor = Cursor::new("[7)");
        let parser = and3(is_char('('), int(), is_char(')'));

        assert!(parser.parse(&mut cursor).is_err());
    }

    #[test]
    fn test_and3_middle_failure_keeps_consumption() {
        let mut cursor = Cursor::new("(x)");
        let parser = and3(is_char('('), int(), is_char(')'));

        assert!(parser.parse(&mut cursor).is_err());
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_and3_last_fails() {
        let mut cursor = Cursor::new("(7]");
        let parser = and3(is_char('('), int(), is_char(')'));

        let err = parser.parse(&mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::Mismatch { .. }));
        // The mismatched rune itself was consumed; no rollback in sequences
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_and3_matches_nested_and() {
        use crate::and::and;

        let mut flat = Cursor::new("(42)");
        let (a, b, c) = and3(is_char('('), int(), is_char(')'))
            .parse(&mut flat)
            .unwrap();

        let mut nested = Cursor::new("(42)");
        let (x, (y, z)) = and(is_char('('), and(int(), is_char(')')))
            .parse(&mut nested)
            .unwrap();

        assert_eq!((a, b, c), (x, y, z));
        assert_eq!(flat.offset(), nested.offset());
    }
}
