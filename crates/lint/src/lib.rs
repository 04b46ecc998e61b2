#![deny(missing_docs)]
//! curlyq lint host: span scanning, diagnostics, and batch checking on top
//! of the curlyq-core rewrite engine.

/// Parallel batch checking.
pub mod batch;
/// The curly-quote rule and its diagnostics.
pub mod rule;
/// Source span scanning.
pub mod scanner;

pub use batch::{BatchInput, BatchOutcome, BatchReport, BatchStats, check_batch};
pub use rule::{Diagnostic, MESSAGE, check_source, check_span, check_text};
pub use scanner::{SourceSpan, scan_literals, text_span};
