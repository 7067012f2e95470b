use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that names a rule for diagnostics.
///
/// While the inner parser runs, `name` sits on the cursor's trace stack so
/// errors built deep inside the rule can report what was being parsed. On
/// failure the underlying error is wrapped in [`ParseError::Trace`] carrying
/// the name and the position at which the rule was *entered* — the message
/// reads as "failed to parse `name` at the place it started", however far
/// into the rule the actual failure happened.
///
/// Tracing never affects backtracking or success values.
pub struct Trace<P> {
    name: String,
    parser: P,
}

impl<P> Trace<P> {
    pub fn new(name: impl Into<String>, parser: P) -> Self {
        Trace {
            name: name.into(),
            parser,
        }
    }
}

impl<'code, P> Parser<'code> for Trace<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let entry = cursor.position();
        cursor
            .with_trace(&self.name, |c| self.parser.parse(c))
            .map_err(|err| ParseError::Trace {
                name: self.name.clone(),
                position: entry,
                source: Box::new(err),
            })
    }
}

/// Convenience function to create a Trace parser
pub fn trace<'code, P>(name: impl Into<String>, parser: P) -> Trace<P>
where
    P: Parser<'code>,
{
    Trace::new(name, parser)
}

/// Extension trait to add .trace() method support for parsers
pub trait TraceExt<'code>: Parser<'code> + Sized {
    fn trace(self, name: impl Into<String>) -> Trace<Self> {
        Trace::new(name, self)
    }
}

/// Implement TraceExt for all parsers
impl<'code, P> TraceExt<'code> for P where P: Parser<'code> {}
