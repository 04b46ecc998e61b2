//! The curly-quote rule: checks spans and produces fixable diagnostics.

use curlyq_core::{RewriteOptions, SpanKind, rewrite_span, scan};
use serde::Serialize;

use crate::scanner::{SourceSpan, scan_literals, text_span};

/// Diagnostic message attached to every flagged span.
pub const MESSAGE: &str = "Strings must use curly quotes.";

/// A flagged span together with its optional fix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Byte offset of the span start in the source document.
    pub start: usize,
    /// Byte offset just past the span end.
    pub end: usize,
    /// The fixed diagnostic message.
    pub message: &'static str,
    /// Replacement text for the whole span, present when the rewrite
    /// changed it.
    pub fix: Option<String>,
}

/// Checks one span, returning a diagnostic when candidate quotes are
/// present.
///
/// A span is flagged whenever the scan pattern matches at all, even when
/// the apostrophe guard suppresses every replacement; `fix` is attached
/// only when the rewritten span differs from the original.
pub fn check_span(span: &SourceSpan<'_>, options: &RewriteOptions) -> Option<Diagnostic> {
    let content = match span.kind {
        SpanKind::Literal => interior(span.raw),
        SpanKind::Text => span.raw,
    };
    if scan(content, options.input_format).is_empty() {
        return None;
    }

    let result = rewrite_span(span.raw, span.kind, options);
    if !result.changed {
        log::trace!(
            "span at {}..{} flagged without a fix: every match suppressed",
            span.start,
            span.start + span.raw.len()
        );
    } else {
        log::debug!("span at {}..{} rewritten", span.start, span.start + span.raw.len());
    }

    Some(Diagnostic {
        start: span.start,
        end: span.start + span.raw.len(),
        message: MESSAGE,
        fix: result.changed.then_some(result.text),
    })
}

/// Scans `source` for string literals and checks each one, in source order.
pub fn check_source(source: &str, options: &RewriteOptions) -> Vec<Diagnostic> {
    scan_literals(source)
        .iter()
        .filter_map(|span| check_span(span, options))
        .collect()
}

/// Checks an entire input as one undelimited text run (markup text content,
/// plain prose).
pub fn check_text(text: &str, options: &RewriteOptions) -> Vec<Diagnostic> {
    check_span(&text_span(text), options).into_iter().collect()
}

/// Interior of a delimited literal: everything between the first and last
/// characters.
fn interior(raw: &str) -> &str {
    let open_len = raw.chars().next().map_or(0, char::len_utf8);
    let close_len = raw.chars().next_back().map_or(0, char::len_utf8);
    if raw.len() < open_len + close_len {
        return "";
    }
    &raw[open_len..raw.len() - close_len]
}
