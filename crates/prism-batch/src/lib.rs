//! Batch processing for Prism surface-distance queries.
//!
//! Reads the whitespace-separated text protocol, solves each query, and
//! writes one `Universe #<n>: <distance>` line per solved query in input
//! order.
//!
//! # Architecture
//!
//! - [`QueryReader`] parses the case count and yields one [`QueryRecord`]
//!   per case from any `BufRead` source
//! - [`ResultWriter`] formats result lines to any `Write` sink
//! - [`BatchRunner`] drives reader, solver, and writer, either on the
//!   caller's thread or across a worker pool with in-order output
//! - [`BatchConfig`] holds worker count, precision, and label
//!
//! # Format
//!
//! ```text
//! <count>
//! x y z x1 y1 z1 x2 y2 z2     (count times; line breaks are free)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod reader;
pub mod runner;
pub mod writer;

pub use config::{BatchConfig, ConfigError};
pub use error::{BatchError, QueryError};
pub use reader::{QueryReader, QueryRecord, RecordIter};
pub use runner::{BatchReport, BatchRunner, RejectedQuery};
pub use writer::ResultWriter;
