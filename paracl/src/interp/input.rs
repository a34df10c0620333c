//! Integer input stream
//!
//! Integers are whitespace separated and may share a line, so one line of
//! input can feed several `?` reads.

use super::error::{InterpResult, RuntimeError};
use std::collections::VecDeque;
use std::io::BufRead;

pub struct IntReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> IntReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Block until the next integer is available
    pub fn next_int(&mut self) -> InterpResult<i32> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| RuntimeError::io_error(&e))?;
            if read == 0 {
                return Err(RuntimeError::end_of_input());
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }

        let word = self.pending.pop_front().unwrap_or_default();
        let value = word
            .parse::<i32>()
            .map_err(|_| RuntimeError::not_an_integer(&word))?;
        tracing::trace!(value, "read input");
        Ok(value)
    }
}
