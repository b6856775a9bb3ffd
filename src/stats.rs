//! Run-scoped accumulation state and the single forward pass over the
//! trace log.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::classify::{classify, LineKind};

/// Errors that abort a trace scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// An allocation record whose size token is not hexadecimal.
    #[error("malformed allocation record on line {line_number}: last token of {line:?} is not a hexadecimal size")]
    MalformedAllocationSize {
        /// 1-based line number of the offending record.
        line_number: usize,
        /// Full text of the offending line.
        line: String,
    },
}

/// Aggregate statistics for one scanned trace log.
///
/// The histogram key is the exact requested size in bytes; the value
/// is how many allocation calls requested that size. Every allocation
/// record bumps its histogram bucket and `malloc_calls` in lockstep,
/// so the bucket totals always sum to `malloc_calls`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TraceStats {
    /// Total lines consumed, recognized or not.
    pub lines_parsed: u64,
    /// Allocation calls observed.
    pub malloc_calls: u64,
    /// Free calls observed.
    pub free_calls: u64,
    /// Realloc calls observed.
    pub realloc_calls: u64,
    /// Requested size in bytes -> number of allocation calls.
    pub histogram: BTreeMap<u64, u64>,
}

impl TraceStats {
    /// Create empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all histogram buckets.
    #[must_use]
    pub fn histogram_total(&self) -> u64 {
        self.histogram.values().sum()
    }

    fn record(
        &mut self,
        kind: LineKind,
        line_number: usize,
        line: &str,
    ) -> Result<(), AnalyzeError> {
        match kind {
            LineKind::Allocate => {
                let size = parse_size_token(line).ok_or_else(|| {
                    AnalyzeError::MalformedAllocationSize {
                        line_number,
                        line: line.to_string(),
                    }
                })?;
                *self.histogram.entry(size).or_insert(0) += 1;
                self.malloc_calls += 1;
            }
            LineKind::Free => self.free_calls += 1,
            LineKind::Resize => self.realloc_calls += 1,
        }
        Ok(())
    }
}

/// Scan an ordered sequence of log lines into aggregate statistics.
///
/// Every line increments the line counter exactly once; recognized
/// lines additionally update their call counter, and allocation lines
/// update the size histogram. A malformed allocation record aborts
/// the scan with no partial result.
pub fn analyze_lines<I, S>(lines: I) -> Result<TraceStats, AnalyzeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stats = TraceStats::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        stats.lines_parsed += 1;
        if let Some(kind) = classify(line) {
            stats.record(kind, index + 1, line)?;
        }
    }

    debug!(
        lines = stats.lines_parsed,
        mallocs = stats.malloc_calls,
        frees = stats.free_calls,
        reallocs = stats.realloc_calls,
        distinct_sizes = stats.histogram.len(),
        "trace scan complete"
    );

    Ok(stats)
}

/// Extract the requested size from an allocation record: the last
/// whitespace-delimited token, read as hexadecimal with an optional
/// `0x`/`0X` prefix.
fn parse_size_token(line: &str) -> Option<u64> {
    let token = line.split_whitespace().next_back().unwrap_or_default();
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u64::from_str_radix(digits, 16).ok()
}
