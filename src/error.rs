use crate::position::Position;
use thiserror::Error;

/// Failure produced by a parser or by the [`Cursor`](crate::Cursor) itself.
///
/// Every variant carries the [`Position`] it occurred at. `Aggregate` and
/// `Trace` are structural: they hold other `ParseError`s, so the error
/// returned from a deeply nested grammar is a tree that renders as nested
/// rule names with positions and can still be inspected programmatically.
///
/// Internal engine faults (a terminal consuming different bytes than it
/// matched, an integer literal that the guaranteed pattern cannot convert)
/// are not represented here: they panic, so no combinator can catch and
/// retry what is actually a bug in the engine.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The cursor has no input left to read
    #[error("unexpected end of input at {position}{}", fmt_context(.context))]
    EndOfInput {
        position: Position,
        context: Vec<String>,
    },

    /// A byte consume requested more than the remaining length
    #[error(
        "cannot consume {requested} bytes, only {remaining} remain at {position}{}",
        fmt_context(.context)
    )]
    OutOfRange {
        requested: usize,
        remaining: usize,
        position: Position,
        context: Vec<String>,
    },

    /// A terminal's expected token was not found at the current position
    #[error("expected {expected}, {} at {position}", fmt_found(.found))]
    Mismatch {
        expected: String,
        found: Option<String>,
        position: Position,
    },

    /// An anchored pattern found no match at the current position
    #[error("expected to match /{pattern}/ at {position}")]
    NoMatch { pattern: String, position: Position },

    /// Every alternative of an ordered choice failed
    #[error("{} alternatives failed:{}", .errors.len(), fmt_alternatives(.errors))]
    Aggregate { errors: Vec<ParseError> },

    /// A named rule failed; `position` is where the rule was entered
    #[error("failed to parse {name:?} at {position}: {source}")]
    Trace {
        name: String,
        position: Position,
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Combine two alternative failures into one ordered aggregate.
    ///
    /// `Aggregate` operands are flattened, so chaining alternatives with
    /// [`or`](crate::or::or) yields a single flat list of one error per
    /// alternative, in alternative order.
    pub fn aggregate(first: ParseError, second: ParseError) -> ParseError {
        let mut errors = Vec::new();
        for err in [first, second] {
            match err {
                ParseError::Aggregate { errors: mut inner } => errors.append(&mut inner),
                other => errors.push(other),
            }
        }
        ParseError::Aggregate { errors }
    }

    /// Position the failure occurred at (for `Trace`, where the rule was
    /// entered; for `Aggregate`, the first alternative's position)
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::EndOfInput { position, .. }
            | ParseError::OutOfRange { position, .. }
            | ParseError::Mismatch { position, .. }
            | ParseError::NoMatch { position, .. }
            | ParseError::Trace { position, .. } => Some(*position),
            ParseError::Aggregate { errors } => errors.first().and_then(ParseError::position),
        }
    }
}

fn fmt_context(context: &[String]) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!(" (while parsing {})", context.join(" > "))
    }
}

fn fmt_found(found: &Option<String>) -> String {
    match found {
        Some(found) => format!("found {found}"),
        None => "but not found".to_string(),
    }
}

fn fmt_alternatives(errors: &[ParseError]) -> String {
    let mut out = String::new();
    for err in errors {
        out.push_str("\n  - ");
        // Indent nested multi-line messages so the list stays readable
        out.push_str(&err.to_string().replace('\n', "\n    "));
    }
    out
}
