//! Disambiguation decisions: the ambiguous-apostrophe guard and open/close
//! glyph selection.

use crate::pattern::QuoteMatch;
use crate::table::{Encoding, QuoteFamily};

/// Whether single-quote rewrites are suppressed for an entire span.
///
/// A single span cannot reliably be both an apostrophe and a matched pair of
/// quotation marks using only local context, so more than one single-family
/// occurrence is read as genuine apostrophes and left alone. Double-family
/// matches are never subject to this guard. The threshold is exactly "more
/// than one"; changing it would change observable behavior.
pub fn suppress_single_quotes(matches: &[QuoteMatch<'_>]) -> bool {
    matches
        .iter()
        .filter(|m| m.family == QuoteFamily::Single)
        .count()
        > 1
}

/// A replacement pair resolved to a concrete output encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphPair {
    /// Opening glyph.
    pub open: &'static str,
    /// Closing glyph.
    pub close: &'static str,
}

/// Resolves the curly pair required by `family` in `encoding`.
pub fn replacement_pair(family: QuoteFamily, encoding: Encoding) -> GlyphPair {
    let (open, close) = family.requires();
    GlyphPair {
        open: open.repr(encoding),
        close: close.repr(encoding),
    }
}

/// Selects the glyph to emit for one match, given the output emitted so far.
///
/// Single-family matches default to the closing glyph (the apostrophe
/// reading); double-family matches default to the opening glyph. When the
/// pair's opening glyph was emitted more recently than its closing glyph a
/// quote is currently open, and the closing glyph wins. The selection reads
/// the accumulator and never rewrites earlier positions, so it pairs
/// correctly for properly alternating runs and stays confused by malformed
/// nesting (known limitation).
pub fn select_glyph(emitted: &str, family: QuoteFamily, pair: GlyphPair) -> &'static str {
    let last_open = emitted.rfind(pair.open);
    let last_close = emitted.rfind(pair.close);

    let currently_open = match (last_open, last_close) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, _) => false,
    };

    if currently_open {
        return pair.close;
    }

    match family {
        QuoteFamily::Single => pair.close,
        QuoteFamily::Double => pair.open,
    }
}
