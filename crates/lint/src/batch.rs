//! Parallel batch checking across many documents.
//!
//! Spans and documents are independent by construction, so the batch layer
//! fans documents out over a rayon pool with no coordination.

use curlyq_core::RewriteOptions;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rule::{Diagnostic, check_source};

/// A single document to check.
#[derive(Clone, Debug, Deserialize)]
pub struct BatchInput {
    /// Document identifier (typically the file path).
    pub id: String,
    /// Source content.
    pub source: String,
}

/// Check results for one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Document identifier matching the input.
    pub id: String,
    /// Diagnostics found in the document, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Aggregate statistics for a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Total number of documents checked.
    pub total: usize,
    /// Documents with no diagnostics.
    pub clean: usize,
    /// Documents with at least one diagnostic.
    pub flagged: usize,
}

/// Batch run output: per-document outcomes plus aggregate statistics.
#[derive(Clone, Debug, Serialize)]
pub struct BatchReport {
    /// Outcomes in input order.
    pub outcomes: Vec<BatchOutcome>,
    /// Aggregate statistics.
    pub stats: BatchStats,
}

/// Checks every input in parallel.
///
/// `max_threads` caps the worker pool; the global rayon pool is used when it
/// is unset or a dedicated pool cannot be built.
pub fn check_batch(
    inputs: Vec<BatchInput>,
    options: &RewriteOptions,
    max_threads: Option<usize>,
) -> BatchReport {
    let pool = max_threads.and_then(|threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .ok()
    });

    let check = |input: BatchInput| -> BatchOutcome {
        let diagnostics = check_source(&input.source, options);
        BatchOutcome {
            id: input.id,
            diagnostics,
        }
    };

    let outcomes: Vec<BatchOutcome> = match pool {
        Some(pool) => pool.install(|| inputs.into_par_iter().map(check).collect()),
        None => inputs.into_par_iter().map(check).collect(),
    };

    let flagged = outcomes
        .iter()
        .filter(|outcome| !outcome.diagnostics.is_empty())
        .count();
    let stats = BatchStats {
        total: outcomes.len(),
        clean: outcomes.len() - flagged,
        flagged,
    };

    BatchReport { outcomes, stats }
}
