use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as
/// a tuple.
///
/// Sequencing is not transactional: the first failure short-circuits and
/// whatever the cursor consumed before it stays consumed. A sequence either
/// matches entirely from this point or is abandoned here, leaving rollback
/// to the enclosing choice (see [`or`](crate::or::or)).
///
/// Chaining `.and()` produces nested tuples like `((a, b), c)`; for the
/// common three-element case [`and3`](crate::and3::and3) yields a flat
/// triple.
///
/// Example:
/// ```
/// use descent::and::AndExt;
/// use descent::char::is_char;
/// use descent::cursor::Cursor;
/// use descent::int::int;
/// use descent::parser::Parser;
///
/// let mut cursor = Cursor::new("(42)");
/// let parser = is_char('(').and(int()).and(is_char(')'));
/// let ((open, value), close) = parser.parse(&mut cursor).unwrap();
/// assert_eq!(open, '(');
/// assert_eq!(value, 42);
/// assert_eq!(close, ')');
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let first = self.parser1.parse(cursor)?;
        let second = self.parser2.parse(cursor)?;
        Ok((first, second))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
