use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser.
///
/// Parses one item, then zero or more (separator, item) pairs. Each pair
/// runs inside a single [`Cursor::attempt`], so a separator with no item
/// after it is rolled back and left unconsumed instead of failing the list.
///
/// # Examples
/// - `"1,2,3"` with separator `,` → `vec![1, 2, 3]`
/// - `"1,2,"` with separator `,` → `vec![1, 2]`, cursor left on the last `,`
///
/// Requires at least one item; whitespace is not handled automatically.
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let mut results = vec![self.parser.parse(cursor)?];
        loop {
            let next = cursor.attempt(|c| {
                self.separator.parse(c)?;
                self.parser.parse(c)
            });
            match next {
                Ok(value) => results.push(value),
                Err(_) => break,
            }
        }
        Ok(results)
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
