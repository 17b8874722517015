// src/stream.rs
//! Incremental reader for a top-level JSON array of activities.
//!
//! The array brackets and separators are consumed here; each element is handed
//! to `serde_json` on its own, so only one record is materialized at a time no
//! matter how long the export is.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TallyError};
use crate::types::RawActivity;

/// Read buffer for input files.
pub const READ_BUFFER: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Opening `[` not seen yet.
    Start,
    /// Inside the array, before the first element.
    First,
    /// After an element; expecting `,` or `]`.
    Rest,
    /// Closed, failed, or exhausted.
    Done,
}

/// Lazy, single-pass sequence of activities read from `R`.
///
/// Yields `Err` at most once; after that (or after the closing `]`, or end of
/// input between elements) it only returns `None`.
pub struct ActivityStream<R> {
    reader: R,
    state: State,
    index: usize,
}

impl ActivityStream<BufReader<File>> {
    /// Opens `path` for streaming.
    ///
    /// # Errors
    /// Returns `TallyError::Io` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(TallyError::io(path))?;
        Ok(Self::new(BufReader::with_capacity(READ_BUFFER, file)))
    }
}

impl<R: BufRead> ActivityStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: State::Start,
            index: 0,
        }
    }

    fn step(&mut self) -> Result<Option<RawActivity>> {
        match self.state {
            State::Done => Ok(None),
            State::Start => {
                match self.peek_significant()? {
                    Some(b'[') => self.reader.consume(1),
                    _ => return Err(TallyError::NotAnArray),
                }
                self.state = State::First;
                self.step()
            }
            State::First => match self.peek_significant()? {
                None => Ok(self.finish()),
                Some(b']') => self.close(),
                Some(_) => self.decode_element().map(Some),
            },
            State::Rest => match self.peek_significant()? {
                None => Ok(self.finish()),
                Some(b']') => self.close(),
                Some(b',') => {
                    self.reader.consume(1);
                    self.decode_element().map(Some)
                }
                Some(other) => Err(TallyError::Syntax {
                    index: self.index.saturating_sub(1),
                    found: char::from(other),
                }),
            },
        }
    }

    fn close(&mut self) -> Result<Option<RawActivity>> {
        self.reader.consume(1);
        Ok(self.finish())
    }

    /// Ends the sequence. A missing `]` at end of input is tolerated, so every
    /// complete element before it still counts.
    fn finish(&mut self) -> Option<RawActivity> {
        self.state = State::Done;
        None
    }

    fn decode_element(&mut self) -> Result<RawActivity> {
        let index = self.index;
        let mut de = serde_json::Deserializer::from_reader(&mut self.reader);
        let activity = Option::<RawActivity>::deserialize(&mut de)
            .map_err(|source| TallyError::Decode { index, source })?
            .unwrap_or_default();
        self.index += 1;
        self.state = State::Rest;
        Ok(activity)
    }

    /// Skips JSON whitespace and returns the next byte without consuming it.
    fn peek_significant(&mut self) -> Result<Option<u8>> {
        loop {
            let buf = self.reader.fill_buf().map_err(TallyError::Read)?;
            if buf.is_empty() {
                return Ok(None);
            }
            match buf.iter().position(|b| !is_json_whitespace(*b)) {
                Some(pos) => {
                    let byte = buf[pos];
                    self.reader.consume(pos);
                    return Ok(Some(byte));
                }
                None => {
                    let len = buf.len();
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for ActivityStream<R> {
    type Item = Result<RawActivity>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(Some(activity)) => Some(Ok(activity)),
            Ok(None) => None,
            Err(e) => {
                self.state = State::Done;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for ActivityStream<R> {}

fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
