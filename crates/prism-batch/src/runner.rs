//! Batch driver: read, solve, and write in input order.
//!
//! With one worker every query is solved on the caller's thread. With
//! more, the caller reads and parses while a pool of scoped threads
//! solves; results come back over a crossbeam channel and are held in a
//! reorder buffer until every earlier case has settled, so output order
//! always equals input order.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use prism_core::Query;
use prism_surface::Strategy;

use crate::config::{BatchConfig, ConfigError};
use crate::error::{BatchError, QueryError};
use crate::reader::{QueryReader, QueryRecord};
use crate::writer::ResultWriter;

/// Queued tasks per worker before the reader blocks.
const TASKS_PER_WORKER: usize = 4;

/// A query that produced no output line.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedQuery {
    /// 1-based case index.
    pub index: usize,
    /// Why it was rejected.
    pub error: QueryError,
}

/// Outcome of a completed batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Number of cases the input promised.
    pub expected: usize,
    /// Number of cases solved and written.
    pub solved: usize,
    /// Rejected cases in input order.
    pub rejected: Vec<RejectedQuery>,
    /// Solver threads used (1 = caller's thread).
    pub workers: usize,
}

impl BatchReport {
    fn new(expected: usize, workers: usize) -> Self {
        Self {
            expected,
            solved: 0,
            rejected: Vec::new(),
            workers,
        }
    }

    /// True when no case was rejected.
    pub fn all_solved(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Runs batches with a fixed, validated configuration.
///
/// # Examples
///
/// ```
/// use prism_batch::{BatchConfig, BatchRunner};
///
/// let runner = BatchRunner::new(BatchConfig::sequential()).unwrap();
/// let input = "2\n1 1 1 0 0 0 1 1 1\n10 10 10 5 5 0 5 5 10\n";
/// let mut out = Vec::new();
/// let report = runner.run(input.as_bytes(), &mut out).unwrap();
///
/// assert!(report.all_solved());
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Universe #1: 2.24\nUniverse #2: 20.00\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: BatchConfig,
    workers: usize,
}

impl BatchRunner {
    /// Validate `config` and resolve its worker count.
    pub fn new(config: BatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let workers = config.resolved_worker_count();
        Ok(Self { config, workers })
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Resolved number of solver threads.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Process one batch from `input`, writing result lines to `output`.
    ///
    /// Rejected cases are logged, recorded in the report, and skipped.
    /// On [`BatchError::Truncated`] or [`BatchError::TrailingInput`] every
    /// case read before the problem has already been written and flushed.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<BatchReport, BatchError> {
        let mut reader = QueryReader::open(input)?;
        let workers = self.workers.min(reader.expected()).max(1);
        let mut report = BatchReport::new(reader.expected(), workers);
        let mut sink = OrderedSink::new(ResultWriter::from_config(output, &self.config));

        let streamed = if workers == 1 {
            self.run_sequential(&mut reader, &mut sink, &mut report)
        } else {
            self.run_pooled(workers, &mut reader, &mut sink, &mut report)
        };
        let flushed = sink.flush();
        streamed?;
        flushed?;
        reader.finish()?;

        debug!(
            expected = report.expected,
            solved = report.solved,
            rejected = report.rejected.len(),
            "batch complete"
        );
        Ok(report)
    }

    fn run_sequential<R: BufRead, W: Write>(
        &self,
        reader: &mut QueryReader<R>,
        sink: &mut OrderedSink<W>,
        report: &mut BatchReport,
    ) -> Result<(), BatchError> {
        let strategy = self.config.strategy;
        while let Some(QueryRecord { index, parsed }) = reader.next_record()? {
            match parsed {
                Ok(query) => {
                    let distance = strategy.distance(&query);
                    report.solved += 1;
                    sink.settle(index, Some(distance))?;
                }
                Err(error) => {
                    reject(report, index, error);
                    sink.settle(index, None)?;
                }
            }
        }
        Ok(())
    }

    fn run_pooled<R: BufRead, W: Write>(
        &self,
        workers: usize,
        reader: &mut QueryReader<R>,
        sink: &mut OrderedSink<W>,
        report: &mut BatchReport,
    ) -> Result<(), BatchError> {
        let strategy = self.config.strategy;
        debug!(workers, %strategy, "starting solver pool");

        std::thread::scope(|scope| -> Result<(), BatchError> {
            let (task_tx, task_rx) = crossbeam_channel::bounded(workers * TASKS_PER_WORKER);
            let (done_tx, done_rx) = crossbeam_channel::unbounded();
            for _ in 0..workers {
                let task_rx = task_rx.clone();
                let done_tx = done_tx.clone();
                scope.spawn(move || worker_loop(task_rx, done_tx, strategy));
            }
            drop(task_rx);
            drop(done_tx);

            let fed = loop {
                match reader.next_record() {
                    Ok(Some(QueryRecord {
                        index,
                        parsed: Ok(query),
                    })) => {
                        if task_tx.send(SolveTask { index, query }).is_err() {
                            break Err(BatchError::WorkersLost);
                        }
                    }
                    Ok(Some(QueryRecord {
                        index,
                        parsed: Err(error),
                    })) => {
                        reject(report, index, error);
                        sink.settle(index, None)?;
                    }
                    Ok(None) => break Ok(()),
                    Err(e) => break Err(e),
                }
                for solved in done_rx.try_iter() {
                    report.solved += 1;
                    sink.settle(solved.index, Some(solved.distance))?;
                }
            };

            // Closing the task channel lets workers drain and exit.
            drop(task_tx);
            for solved in done_rx.iter() {
                report.solved += 1;
                sink.settle(solved.index, Some(solved.distance))?;
            }
            fed
        })
    }
}

fn reject(report: &mut BatchReport, index: usize, error: QueryError) {
    warn!(index, %error, "query rejected");
    report.rejected.push(RejectedQuery { index, error });
}

// ── Worker pool ────────────────────────────────────────────────────

struct SolveTask {
    index: usize,
    query: Query,
}

struct Solved {
    index: usize,
    distance: f64,
}

/// Runs until the task channel is closed (sender dropped).
fn worker_loop(tasks: Receiver<SolveTask>, done: Sender<Solved>, strategy: Strategy) {
    while let Ok(SolveTask { index, query }) = tasks.recv() {
        let distance = strategy.distance(&query);
        if done.send(Solved { index, distance }).is_err() {
            break;
        }
    }
}

// ── Reorder buffer ─────────────────────────────────────────────────

/// Writes results strictly in index order.
///
/// A case settles either with a distance or, when rejected, with `None`;
/// lines are released once every lower index has settled.
struct OrderedSink<W: Write> {
    writer: ResultWriter<W>,
    next: usize,
    pending: BTreeMap<usize, Option<f64>>,
}

impl<W: Write> OrderedSink<W> {
    fn new(writer: ResultWriter<W>) -> Self {
        Self {
            writer,
            next: 1,
            pending: BTreeMap::new(),
        }
    }

    fn settle(&mut self, index: usize, outcome: Option<f64>) -> io::Result<()> {
        self.pending.insert(index, outcome);
        while let Some(outcome) = self.pending.remove(&self.next) {
            if let Some(distance) = outcome {
                self.writer.write_result(self.next, distance)?;
            }
            self.next += 1;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
