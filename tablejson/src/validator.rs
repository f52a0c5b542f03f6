// SPDX-License-Identifier: Apache-2.0

//! The composer: a stack of automaton frames driven one byte at a time.
//!
//! Each frame pairs an automaton with its current state. `[` and `{` at
//! value positions push a frame; terminal states pop one. The stack is the
//! entire mutable state, so input may arrive in arbitrary chunks.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::error::{Error, ErrorKind};
use crate::tables::array::ArrayState;
use crate::tables::object::ObjectState;
use crate::tables::value::ValueState;
use crate::tables::{array, object, value, Class};

#[derive(Debug, Clone, Copy)]
enum Frame {
    Value(ValueState),
    Array(ArrayState),
    Object(ObjectState),
}

const fn is_ws(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Streaming JSON validator.
///
/// Feed bytes with [`validate_chunk`](Self::validate_chunk) and close the
/// stream with [`finish`](Self::finish), or hand everything to
/// [`validate_full`](Self::validate_full) at once. The first error latches:
/// every later call reports the identical [`Error`].
pub struct Validator {
    stack: Vec<Frame>,
    consumed: usize,
    line: usize,
    column: usize,
    max_depth: usize,
    complete: bool,
    error: Option<Error>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A validator with unbounded container nesting.
    pub fn new() -> Self {
        Self::with_max_depth(0)
    }

    /// A validator rejecting containers nested deeper than `max_depth`.
    /// Zero means unbounded.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Validator {
            stack: Vec::new(),
            consumed: 0,
            line: 1,
            column: 0,
            max_depth,
            complete: false,
            error: None,
        }
    }

    /// Total bytes consumed so far, across all chunks.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Current container nesting depth.
    pub fn depth(&self) -> usize {
        match self.stack.last() {
            Some(Frame::Value(_)) => self.stack.len() - 1,
            _ => self.stack.len(),
        }
    }

    /// 1-based line of the next byte.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte column within the current line, reset on every newline.
    pub fn column(&self) -> usize {
        self.column
    }

    /// True once the top-level value has fully closed.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Feeds one chunk. `Ok(n)` is the running total of consumed bytes;
    /// the stream is only known valid once [`finish`](Self::finish) says so.
    pub fn validate_chunk(&mut self, data: &[u8]) -> Result<usize, Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        for &byte in data {
            self.step(byte)?;
        }
        Ok(self.consumed)
    }

    /// Signals end of input and returns the final verdict.
    pub fn finish(&mut self) -> Result<usize, Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.complete {
            return Ok(self.consumed);
        }
        if self.stack.is_empty() {
            return self.fail(ErrorKind::EmptyStream, b' ', self.consumed);
        }
        // A bare top-level number has no closing delimiter; a synthetic
        // terminator completes it iff the grammar already allows an end here.
        if let [Frame::Value(state)] = self.stack.as_slice() {
            if state.accepts_eof() {
                self.dispatch(b' ', self.consumed)?;
                debug!("--finished-- {}", self.consumed);
                return Ok(self.consumed);
            }
        }
        self.fail(ErrorKind::UnfinishedStream, b' ', self.consumed)
    }

    /// One chunk, then [`finish`](Self::finish).
    pub fn validate_full(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.validate_chunk(data)?;
        self.finish()
    }

    fn step(&mut self, byte: u8) -> Result<(), Error> {
        let at = self.consumed;
        self.dispatch(byte, at)?;
        self.consumed += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Ok(())
    }

    /// Routes one byte to the top frame. Loops because a number terminator
    /// pops its frame and then belongs to the parent.
    fn dispatch(&mut self, byte: u8, at: usize) -> Result<(), Error> {
        loop {
            if self.complete {
                if is_ws(byte) {
                    return Ok(());
                }
                return self.fail(ErrorKind::ContentEnded, byte, at);
            }
            let Some(&frame) = self.stack.last() else {
                if is_ws(byte) {
                    return Ok(());
                }
                return self.open_value(byte, at);
            };
            let top = self.stack.len() - 1;
            trace!("{:?} <- {:?} at {}", frame, byte as char, at);
            match frame {
                Frame::Value(state) => {
                    let next = value::TABLE[state as usize][byte as usize];
                    match next.class() {
                        Class::Live => {
                            self.stack[top] = Frame::Value(next);
                            return Ok(());
                        }
                        Class::Error(kind) => return self.fail(kind, byte, at),
                        Class::Terminal => {
                            self.stack.pop();
                            debug!("pop {:?} at {}", next, at);
                            if self.stack.is_empty() {
                                self.complete = true;
                            }
                            if next.replays_delimiter() {
                                continue;
                            }
                            return Ok(());
                        }
                    }
                }
                Frame::Array(state) => {
                    if is_ws(byte) {
                        return Ok(());
                    }
                    let next = array::TABLE[state as usize][byte as usize];
                    match next.class() {
                        Class::Error(kind) => return self.fail(kind, byte, at),
                        Class::Terminal => {
                            self.stack.pop();
                            debug!("pop array at {}", at);
                            if self.stack.is_empty() {
                                self.complete = true;
                            }
                            return Ok(());
                        }
                        Class::Live => {
                            self.stack[top] = Frame::Array(next);
                            // Open/Comma are the element positions
                            if matches!(state, ArrayState::Open | ArrayState::Comma) {
                                return self.open_value(byte, at);
                            }
                            return Ok(());
                        }
                    }
                }
                Frame::Object(state) => {
                    if is_ws(byte) {
                        return Ok(());
                    }
                    let next = object::TABLE[state as usize][byte as usize];
                    match next.class() {
                        Class::Error(kind) => return self.fail(kind, byte, at),
                        Class::Terminal => {
                            self.stack.pop();
                            debug!("pop object at {}", at);
                            if self.stack.is_empty() {
                                self.complete = true;
                            }
                            return Ok(());
                        }
                        Class::Live => {
                            self.stack[top] = Frame::Object(next);
                            // key strings and member values run in a child
                            let starts_child = matches!(
                                (state, next),
                                (ObjectState::Open, ObjectState::Key)
                                    | (ObjectState::Comma, ObjectState::Key)
                                    | (ObjectState::Sep, ObjectState::Value)
                            );
                            if starts_child {
                                return self.open_value(byte, at);
                            }
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    /// Opens a value at a value position: containers push their own frame,
    /// anything else seeds the value automaton with this byte.
    fn open_value(&mut self, byte: u8, at: usize) -> Result<(), Error> {
        if byte == b'[' || byte == b'{' {
            if self.max_depth != 0 && self.depth() >= self.max_depth {
                return self.fail(ErrorKind::MaxDepthReached, byte, at);
            }
            let frame = if byte == b'[' {
                Frame::Array(ArrayState::Open)
            } else {
                Frame::Object(ObjectState::Open)
            };
            debug!("push {:?} at {}", frame, at);
            self.stack.push(frame);
            return Ok(());
        }
        let seeded = value::TABLE[ValueState::Start as usize][byte as usize];
        match seeded.class() {
            Class::Error(kind) => self.fail(kind, byte, at),
            // one byte never completes a value, so the seed state is live
            _ => {
                debug!("push {:?} at {}", seeded, at);
                self.stack.push(Frame::Value(seeded));
                Ok(())
            }
        }
    }

    fn fail<T>(&mut self, kind: ErrorKind, byte: u8, at: usize) -> Result<T, Error> {
        let res = Error::new(kind, byte, at);
        if let Err(err) = &res {
            debug!("latched {:?}", err);
            self.error = Some(*err);
        }
        res
    }
}

/// One-shot validation of a complete document.
pub fn validate(data: &[u8]) -> Result<usize, Error> {
    Validator::new().validate_full(data)
}
