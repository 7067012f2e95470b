use crate::error::ParseError;
use crate::position::Position;

/// The mutable, transactional view over the input that every parser reads
/// from and advances.
///
/// One `Cursor` is created per [`parse`](crate::parse) call and owned
/// exclusively by that call; parser values themselves hold no per-call
/// state. The cursor tracks a [`Position`] whose `offset` field is the read
/// index, so position and index can never drift apart.
///
/// Backtracking is not built into the read operations: a failed read leaves
/// whatever was consumed before it consumed. Combinators that need to retry
/// from a known point wrap the attempt in [`Cursor::attempt`].
#[derive(Debug)]
pub struct Cursor<'code> {
    input: &'code str,
    pos: Position,
    trace: Vec<String>,
}

impl<'code> Cursor<'code> {
    pub fn new(input: &'code str) -> Self {
        Cursor {
            input,
            pos: Position::start(),
            trace: Vec::new(),
        }
    }

    /// Decode and consume one code point, returning it with its byte width
    pub fn read_char(&mut self) -> Result<(char, usize), ParseError> {
        match self.remaining().chars().next() {
            Some(ch) => {
                let width = ch.len_utf8();
                self.pos.advance(ch);
                Ok((ch, width))
            }
            None => Err(self.end_of_input()),
        }
    }

    /// Consume exactly `n` bytes and return them as a slice of the input.
    ///
    /// The position is recomputed across every code point in the consumed
    /// span, so newlines inside it update the line count.
    ///
    /// # Panics
    ///
    /// Panics if `n` ends inside a UTF-8 sequence. Terminals only ever pass
    /// byte counts taken from successful matches against the remaining
    /// input, so a non-boundary count is an engine bug, not a parse error.
    pub fn consume_bytes(&mut self, n: usize) -> Result<&'code str, ParseError> {
        let rest = self.remaining();
        if n > rest.len() {
            return Err(ParseError::OutOfRange {
                requested: n,
                remaining: rest.len(),
                position: self.pos,
                context: self.trace.clone(),
            });
        }
        if !rest.is_char_boundary(n) {
            panic!("cursor asked to consume {n} bytes, which ends inside a UTF-8 sequence");
        }
        let consumed = &rest[..n];
        for ch in consumed.chars() {
            self.pos.advance(ch);
        }
        Ok(consumed)
    }

    /// The unconsumed suffix of the input, without advancing
    pub fn remaining(&self) -> &'code str {
        &self.input[self.pos.offset..]
    }

    /// Current position (line, column, byte offset)
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Current byte offset into the input
    pub fn offset(&self) -> usize {
        self.pos.offset
    }

    pub fn at_end(&self) -> bool {
        self.pos.offset == self.input.len()
    }

    /// Run `f` transactionally: on `Err` the cursor is rolled back to where
    /// it was before the call, un-consuming anything `f` read.
    ///
    /// This is the primitive that makes ordered choice safe — a failed
    /// alternative must never leave the cursor partway through the input.
    pub fn attempt<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let checkpoint = self.pos;
        let result = f(self);
        if result.is_err() {
            self.pos = checkpoint;
        }
        result
    }

    /// Run `f` with `name` pushed on the trace stack, popping it afterwards.
    ///
    /// The stack only feeds diagnostics: errors the cursor itself constructs
    /// report the rules being parsed at the point of failure.
    pub fn with_trace<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.trace.push(name.to_string());
        let result = f(self);
        self.trace.pop();
        result
    }

    /// The names of the rules currently being parsed, outermost first
    pub fn trace_path(&self) -> &[String] {
        &self.trace
    }

    fn end_of_input(&self) -> ParseError {
        ParseError::EndOfInput {
            position: self.pos,
            context: self.trace.clone(),
        }
    }
}
