use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser with a mapping
/// function.
///
/// The function is total over the already-validated parsed value: it cannot
/// fail and it never touches the cursor, so `Map` consumes exactly what the
/// inner parser consumes and any inner failure passes through unchanged.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::int::int;
    use crate::or::OrExt;
    use crate::string::is_string;

    #[derive(Debug, PartialEq)]
    enum Token {
        Word(String),
        Number(i64),
    }

    #[test]
    fn test_map_int_to_string() {
        let mut cursor = Cursor::new("123");
        let parser = int().map(|n| format!("number: {n}"));

        let result = parser.parse(&mut cursor).unwrap();
        assert_eq!(result, "number: 123");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_map_to_enum() {
        let mut cursor = Cursor::new("42");
        let parser = is_string("word")
            .map(|s| Token::Word(s.to_string()))
            .or(int().map(Token::Number));

        let token = parser.parse(&mut cursor).unwrap();
        assert_eq!(token, Token::Number(42));
    }

    #[test]
    fn test_map_chaining() {
        let mut cursor = Cursor::new("7");
        let parser = is_char('7')
            .map(|ch| ch.to_digit(10))
            .map(|digit| digit.map(|d| d * 10));

        let result = parser.parse(&mut cursor).unwrap();
        assert_eq!(result, Some(70));
    }

    #[test]
    fn test_map_consumes_exactly_what_inner_consumes() {
        let mut plain = Cursor::new("-9rest");
        int().parse(&mut plain).unwrap();

        let mut mapped = Cursor::new("-9rest");
        int().map(|n| n * 2).parse(&mut mapped).unwrap();

        assert_eq!(plain.offset(), mapped.offset());
        assert_eq!(plain.position(), mapped.position());
    }

    #[test]
    fn test_map_passes_errors_through_unchanged() {
        let mut cursor = Cursor::new("xyz");
        let parser = int().map(|n| n + 1);

        let err = parser.parse(&mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::NoMatch { .. }));
    }

    #[test]
    fn test_function_syntax() {
        let mut cursor = Cursor::new("a");
        let parser = map(is_char('a'), |ch| ch.is_alphabetic());

        assert!(parser.parse(&mut cursor).unwrap());
    }
}
