use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that always succeeds with a clone of the stored value, consuming
/// no input.
///
/// Useful for injecting constants or defaults into a sequence or as the
/// last alternative of a choice, without requiring the cursor to advance.
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, _cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        Ok(self.value.clone())
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}
