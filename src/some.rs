use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given
/// parser.
///
/// The first occurrence must succeed and its failure propagates verbatim;
/// every following iteration runs inside [`Cursor::attempt`] like
/// [`Many`](crate::many::Many).
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let mut results = vec![self.parser.parse(cursor)?];
        while let Ok(value) = cursor.attempt(|c| self.parser.parse(c)) {
            results.push(value);
        }
        Ok(results)
    }
}

/// Convenience function to create a Some parser
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;

    #[test]
    fn test_some_zero_matches_fails() {
        let mut cursor = Cursor::new("xyz");
        let parser = some(is_char('a'));

        let err = parser.parse(&mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::Mismatch { .. }));
    }

    #[test]
    fn test_some_one_match() {
        let mut cursor = Cursor::new("abc");
        let parser = some(is_char('a'));

        let results = parser.parse(&mut cursor).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(cursor.remaining(), "bc");
    }

    #[test]
    fn test_some_multiple_matches() {
        let mut cursor = Cursor::new("aaab");
        let parser = some(is_char('a'));

        let results = parser.parse(&mut cursor).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.remaining(), "b");
    }

    #[test]
    fn test_some_empty_input_fails() {
        let mut cursor = Cursor::new("");
        let parser = some(is_char('a'));

        let err = parser.parse(&mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::EndOfInput { .. }));
    }

    #[test]
    fn test_some_stops_cleanly_after_last_match() {
        let mut cursor = Cursor::new("aa");
        let parser = some(is_char('a'));

        let results = parser.parse(&mut cursor).unwrap();
        assert_eq!(results.len(), 2);
        assert!(cursor.at_end());
    }
}
