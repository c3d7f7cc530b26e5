//! Query stream reader.
//!
//! [`QueryReader`] reads the case count on construction, then yields one
//! [`QueryRecord`] per case. Tokens are whitespace separated and may be
//! split across lines in any way.

use std::collections::VecDeque;
use std::io::BufRead;

use prism_core::Query;

use crate::error::{BatchError, QueryError};

/// Integers per query: box dims, start point, end point.
pub const TOKENS_PER_QUERY: usize = 9;

/// One case from the input, parsed or rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRecord {
    /// 1-based position of the case in the input.
    pub index: usize,
    /// The validated query, or why it was rejected.
    pub parsed: Result<Query, QueryError>,
}

/// Whitespace tokenizer over a line-oriented source.
struct Tokens<R: BufRead> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Reads queries from a text stream.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production
/// code can use `BufReader<File>` or locked stdin.
///
/// # Examples
///
/// ```
/// use prism_batch::QueryReader;
///
/// let input = "2\n1 1 1 0 0 0 1 1 1\n2 2 2\n0 0 0 9 9 9\n";
/// let mut reader = QueryReader::open(input.as_bytes()).unwrap();
/// assert_eq!(reader.expected(), 2);
///
/// let first = reader.next_record().unwrap().unwrap();
/// assert_eq!(first.index, 1);
/// assert!(first.parsed.is_ok());
///
/// // The end point lies outside the 2x2x2 box.
/// let second = reader.next_record().unwrap().unwrap();
/// assert!(second.parsed.is_err());
///
/// assert!(reader.next_record().unwrap().is_none());
/// reader.finish().unwrap();
/// ```
pub struct QueryReader<R: BufRead> {
    tokens: Tokens<R>,
    expected: usize,
    records_read: usize,
}

impl<R: BufRead> QueryReader<R> {
    /// Open a query stream, reading and validating the case count.
    pub fn open(reader: R) -> Result<Self, BatchError> {
        let mut tokens = Tokens::new(reader);
        let token = tokens.next_token()?.ok_or(BatchError::MissingCount)?;
        let expected = token
            .parse::<usize>()
            .map_err(|_| BatchError::InvalidCount { token })?;
        Ok(Self {
            tokens,
            expected,
            records_read: 0,
        })
    }

    /// Number of queries the count promised.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Number of queries read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Read the next case, or `None` once every promised case was read.
    ///
    /// A malformed or invalid case is returned as a record carrying a
    /// [`QueryError`]; the reader still consumes exactly nine tokens for
    /// it. Running out of input mid-batch is a [`BatchError::Truncated`].
    pub fn next_record(&mut self) -> Result<Option<QueryRecord>, BatchError> {
        if self.records_read == self.expected {
            return Ok(None);
        }
        let mut values = [0i64; TOKENS_PER_QUERY];
        let mut malformed = None;
        for (slot, value) in values.iter_mut().enumerate() {
            let token = self.tokens.next_token()?.ok_or(BatchError::Truncated {
                expected: self.expected,
                found: self.records_read,
            })?;
            match token.parse::<i64>() {
                Ok(v) => *value = v,
                Err(_) => {
                    if malformed.is_none() {
                        malformed = Some(QueryError::MalformedInput {
                            position: slot + 1,
                            token,
                        });
                    }
                }
            }
        }
        self.records_read += 1;
        let parsed = match malformed {
            Some(e) => Err(e),
            None => Query::from_values(values).map_err(QueryError::from),
        };
        Ok(Some(QueryRecord {
            index: self.records_read,
            parsed,
        }))
    }

    /// Confirm nothing but whitespace follows the last promised case.
    pub fn finish(mut self) -> Result<(), BatchError> {
        match self.tokens.next_token()? {
            Some(token) => Err(BatchError::TrailingInput { token }),
            None => Ok(()),
        }
    }

    /// Convert into a record iterator.
    ///
    /// The iterator stops after the last promised case or the first
    /// [`BatchError`]; it does not check for trailing input.
    pub fn records(self) -> RecordIter<R> {
        RecordIter {
            reader: self,
            done: false,
        }
    }
}

/// Iterator adapter over query records.
pub struct RecordIter<R: BufRead> {
    reader: QueryReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for RecordIter<R> {
    type Item = Result<QueryRecord, BatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
