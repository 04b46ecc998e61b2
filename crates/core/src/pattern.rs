//! Scan pattern construction: one alternation over every recognized input
//! form, found in a single left-to-right pass.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify;
use crate::config::Format;
use crate::table::{QuoteConcept, QuoteFamily};

/// A single candidate occurrence found by the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteMatch<'t> {
    /// Byte offset of the token in the scanned text.
    pub start: usize,
    /// The raw matched token: a quote character or an entity reference.
    pub token: &'t str,
    /// Quote family the token belongs to.
    pub family: QuoteFamily,
}

static PATTERN_ALL: Lazy<Regex> = Lazy::new(|| build_pattern(Format::All));
static PATTERN_CHARACTER: Lazy<Regex> = Lazy::new(|| build_pattern(Format::Character));
static PATTERN_NAMED: Lazy<Regex> = Lazy::new(|| build_pattern(Format::Named));
static PATTERN_NUMERIC: Lazy<Regex> = Lazy::new(|| build_pattern(Format::Numeric));

/// Finds every occurrence recognized by `format`: leftmost first,
/// non-overlapping, in strictly increasing start order.
pub fn scan(text: &str, format: Format) -> Vec<QuoteMatch<'_>> {
    pattern_for(format)
        .find_iter(text)
        .filter_map(|found| {
            let token = found.as_str();
            // The pattern only matches ASCII single/double forms, so the
            // family lookup never comes back empty.
            let family = classify::family_of(token)?;
            Some(QuoteMatch {
                start: found.start(),
                token,
                family,
            })
        })
        .collect()
}

fn pattern_for(format: Format) -> &'static Regex {
    match format {
        Format::All => &PATTERN_ALL,
        Format::Character => &PATTERN_CHARACTER,
        Format::Named => &PATTERN_NAMED,
        Format::Numeric => &PATTERN_NUMERIC,
    }
}

fn build_pattern(format: Format) -> Regex {
    let alternatives: Vec<String> = format
        .input_encodings()
        .iter()
        .flat_map(|&encoding| {
            [QuoteConcept::AsciiSingle, QuoteConcept::AsciiDouble]
                .into_iter()
                .map(move |concept| regex::escape(concept.repr(encoding)))
        })
        .collect();

    // The alternative set is a fixed, non-empty list of escaped literals;
    // compilation cannot fail.
    Regex::new(&alternatives.join("|")).expect("literal alternation compiles")
}
