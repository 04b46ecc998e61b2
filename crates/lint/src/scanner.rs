//! Source scanning: locates candidate rewrite spans in host source text.
//!
//! The scanner is deliberately lexical. It recognizes quoted string
//! literals and leaves everything else alone; it does not parse or validate
//! the surrounding grammar.

use curlyq_core::SpanKind;

/// One candidate span located in host source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceSpan<'s> {
    /// Byte offset of the span start. For literals this includes the
    /// opening delimiter.
    pub start: usize,
    /// Raw span text exactly as written in the source.
    pub raw: &'s str,
    /// How the rewriter should treat the span boundaries.
    pub kind: SpanKind,
}

/// Scans source text for string-literal spans.
///
/// Single- and double-quoted literals are recognized, with backslash
/// escapes honored inside them. Line (`//`) and block (`/* */`) comments
/// and backtick-delimited template bodies are skipped wholesale, and an
/// unterminated literal yields no span.
pub fn scan_literals(source: &str) -> Vec<SourceSpan<'_>> {
    let bytes = source.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                pos = skip_line_comment(bytes, pos);
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                pos = skip_block_comment(bytes, pos);
            }
            b'`' => {
                pos = match end_of_delimited(bytes, pos, b'`') {
                    Some(end) => end,
                    None => bytes.len(),
                };
            }
            quote @ (b'\'' | b'"') => match end_of_delimited(bytes, pos, quote) {
                Some(end) => {
                    spans.push(SourceSpan {
                        start: pos,
                        raw: &source[pos..end],
                        kind: SpanKind::Literal,
                    });
                    pos = end;
                }
                None => pos = bytes.len(),
            },
            _ => pos += 1,
        }
    }

    spans
}

/// Wraps a whole input as one undelimited text run, the way markup text
/// content reaches the rule.
pub fn text_span(text: &str) -> SourceSpan<'_> {
    SourceSpan {
        start: 0,
        raw: text,
        kind: SpanKind::Text,
    }
}

fn skip_line_comment(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos] != b'\n' {
        pos += 1;
    }
    pos
}

fn skip_block_comment(bytes: &[u8], mut pos: usize) -> usize {
    pos += 2;
    while pos < bytes.len() {
        if bytes[pos] == b'*' && bytes.get(pos + 1) == Some(&b'/') {
            return pos + 2;
        }
        pos += 1;
    }
    bytes.len()
}

/// Position just past the closing delimiter, or `None` when the literal
/// never terminates. A backslash escapes the following byte.
fn end_of_delimited(bytes: &[u8], start: usize, delimiter: u8) -> Option<usize> {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            byte if byte == delimiter => return Some(pos + 1),
            _ => pos += 1,
        }
    }
    None
}
