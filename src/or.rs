use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator for ordered choice: try the first parser, and only if
/// it fails, try the second from the same spot.
///
/// Each alternative runs inside [`Cursor::attempt`], so a failing
/// alternative never leaves partially-consumed input behind — the next one
/// starts from exactly the same offset. The first success wins and later
/// alternatives are never attempted.
///
/// When every alternative fails the result is a single
/// [`ParseError::Aggregate`] holding each alternative's error in order.
/// Appending flattens aggregates, so a chain like
/// `a.or(b).or(c)` reports three constituent errors, not a nested pair.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let first_err = match cursor.attempt(|c| self.parser1.parse(c)) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        match cursor.attempt(|c| self.parser2.parse(c)) {
            Ok(value) => Ok(value),
            Err(second_err) => Err(ParseError::aggregate(first_err, second_err)),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
