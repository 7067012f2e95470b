use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given
/// parser.
///
/// Each iteration runs inside [`Cursor::attempt`], so the iteration that
/// finally fails consumes nothing and the cursor stops exactly after the
/// last successful match. Matching zero times is a success, so `Many` never
/// fails.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::new();
        while let Ok(value) = cursor.attempt(|c| self.parser.parse(c)) {
            results.push(value);
        }
        Ok(results)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::char::is_char;
    use crate::int::int;

    #[test]
    fn test_many_zero_matches() {
        let mut cursor = Cursor::new("xyz");
        let parser = many(is_char('a'));

        let results = parser.parse(&mut cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_many_multiple_matches() {
        let mut cursor = Cursor::new("aaabcd");
        let parser = many(is_char('a'));

        let results = parser.parse(&mut cursor).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.remaining(), "bcd");
    }

    #[test]
    fn test_many_empty_input() {
        let mut cursor = Cursor::new("");
        let parser = many(is_char('a'));

        assert!(parser.parse(&mut cursor).unwrap().is_empty());
    }

    #[test]
    fn test_many_rolls_back_partial_final_iteration() {
        // Each element is a digit-comma pair; the last iteration consumes
        // "3" and then fails on the missing comma, which must be rolled back
        let mut cursor = Cursor::new("1,2,3");
        let parser = many(int().and(is_char(',')));

        let results = parser.parse(&mut cursor).unwrap();
        assert_eq!(results, vec![(1, ','), (2, ',')]);
        assert_eq!(cursor.remaining(), "3");
    }

    #[test]
    fn test_many_collects_values_in_order() {
        let mut cursor = Cursor::new("123");
        let parser = many(crate::regexp::regexp_str("[0-9]"));

        let results = parser.parse(&mut cursor).unwrap();
        assert_eq!(results, vec!["1", "2", "3"]);
    }
}
