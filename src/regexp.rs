use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use regex::Regex;

/// Parser that matches a regular expression anchored to the start of the
/// remaining input.
///
/// A pattern that does not already begin with `^` is recompiled with one
/// prepended at construction time, so anchoring happens exactly once and
/// matching at parse time is a single find against the remaining suffix.
/// The match semantics are the `regex` crate's leftmost match at offset 0.
pub struct Regexp {
    re: Regex,
}

impl<'code> Parser<'code> for Regexp {
    type Output = &'code str;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError> {
        let rest = cursor.remaining();
        let m = match self.re.find(rest) {
            Some(m) => m,
            None => {
                return Err(ParseError::NoMatch {
                    pattern: self.re.as_str().to_string(),
                    position: cursor.position(),
                });
            }
        };
        if m.start() != 0 {
            panic!(
                "anchored pattern /{}/ matched at byte {} instead of the cursor position",
                self.re.as_str(),
                m.start()
            );
        }
        let consumed = match cursor.consume_bytes(m.end()) {
            Ok(consumed) => consumed,
            Err(_) => panic!(
                "pattern /{}/ matched {} bytes that could not be consumed",
                self.re.as_str(),
                m.end()
            ),
        };
        if consumed != m.as_str() {
            panic!(
                "pattern /{}/ consumed wrong bytes {:?}",
                self.re.as_str(),
                consumed
            );
        }
        Ok(consumed)
    }
}

/// Create a parser from a compiled regex, anchoring it if needed
pub fn regexp(re: Regex) -> Regexp {
    if re.as_str().starts_with('^') {
        return Regexp { re };
    }
    let anchored = format!("^{}", re.as_str());
    match Regex::new(&anchored) {
        Ok(re) => Regexp { re },
        Err(err) => panic!("anchored pattern /{anchored}/ failed to compile: {err}"),
    }
}

/// Compile `pattern` and create an anchored parser from it.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression; grammars are
/// built from fixed patterns, so an invalid one is a construction-time
/// programming error rather than a parse failure.
pub fn regexp_str(pattern: &str) -> Regexp {
    match Regex::new(pattern) {
        Ok(re) => regexp(re),
        Err(err) => panic!("invalid pattern /{pattern}/: {err}"),
    }
}
