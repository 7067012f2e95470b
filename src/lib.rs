//! # Descent - Backtracking Parser Combinators
//!
//! A library of composable parsing primitives for building recursive-descent
//! parsers over plain strings: config formats, DSLs, structured literals —
//! anywhere a hand-written lexer/parser pair would be overkill.
//!
//! Grammars are built once as immutable parser values and driven by a
//! [`Cursor`], the single piece of mutable state in a parse. The library
//! emphasizes:
//!
//! - **Transactional backtracking**: ordered choice retries alternatives
//!   through [`Cursor::attempt`], so a failed branch never leaks
//!   partially-consumed input
//! - **Rich error reporting**: every failure carries a line/column
//!   [`Position`]; choices aggregate all sibling failures and
//!   [`trace`](trace::trace) frames name the rule that failed
//! - **Composability**: small parsers combine into larger ones with
//!   sequencing, choice, repetition and mapping combinators
//! - **Reusability**: parser trees hold no per-call state and can be shared
//!   across independent parse calls
//!
//! ```
//! use descent::and::AndExt;
//! use descent::map::MapExt;
//! use descent::or::OrExt;
//! use descent::char::is_char;
//! use descent::int::int;
//!
//! // (<int>) or a bare <int>
//! let parser = is_char('(')
//!     .and(int())
//!     .and(is_char(')'))
//!     .map(|((_, n), _)| n)
//!     .or(int());
//!
//! assert_eq!(descent::parse("(42)", &parser).unwrap(), 42);
//! assert_eq!(descent::parse("42", &parser).unwrap(), 42);
//! assert!(descent::parse("(42", &parser).is_err());
//! ```

pub mod and;
pub mod and3;
pub mod between;
pub mod char;
pub mod cursor;
pub mod error;
pub mod int;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod pure;
pub mod regexp;
pub mod separated_list;
pub mod some;
pub mod string;
pub mod trace;

pub use cursor::Cursor;
pub use error::ParseError;
pub use parser::Parser;
pub use position::Position;

/// Run a parser over `input`, requiring it to consume the entire string.
///
/// A fresh [`Cursor`] is constructed for the call, so the same parser value
/// can be used concurrently from any number of calls. Input left over after
/// the parser succeeds is a [`ParseError::Mismatch`] against `end of input`;
/// parsers that should stop mid-input are driven against a [`Cursor`]
/// directly instead.
pub fn parse<'code, P>(input: &'code str, parser: &P) -> Result<P::Output, ParseError>
where
    P: Parser<'code>,
{
    let mut cursor = Cursor::new(input);
    let value = parser.parse(&mut cursor)?;
    match cursor.remaining().chars().next() {
        None => Ok(value),
        Some(ch) => Err(ParseError::Mismatch {
            expected: "end of input".to_string(),
            found: Some(format!("{ch:?}")),
            position: cursor.position(),
        }),
    }
}
