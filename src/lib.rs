//! # mallocstat
//!
//! Aggregate statistics over debug-allocator trace logs.
//!
//! The allocator under diagnosis writes one line per heap call; this
//! crate scans that log in a single forward pass, counts allocate,
//! free, and resize calls, builds a histogram of requested allocation
//! sizes, and renders a fixed-format textual report.
//!
//! ## Usage Example
//!
//! ```
//! use mallocstat::{analyze_lines, render_report};
//!
//! let stats = analyze_lines([
//!     "MALLOC CALL: returning block of size 0x10",
//!     "DL FREE CALL: 0xdeadbeef",
//! ])?;
//! assert_eq!(stats.histogram.get(&16), Some(&1));
//! println!("{}", render_report(&stats)?);
//! # anyhow::Ok(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod classify; // Marker table and line categories
pub mod report; // Fixed-format report rendering
pub mod stats; // Counters, size histogram, and the scan pass

// Re-exports for convenience
pub use classify::{classify, LineKind, MARKERS};
pub use report::{render_report, write_report};
pub use stats::{analyze_lines, AnalyzeError, TraceStats};
