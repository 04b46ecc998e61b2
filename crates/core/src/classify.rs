//! Match classification: quote family lookup and source-encoding resolution.

use crate::table::{ENCODINGS, Encoding, QuoteConcept, QuoteFamily};

/// Sentinel that starts every entity-reference token.
const ENTITY_SENTINEL: char = '&';

/// A matched token resolved to the value being replaced and the encoding it
/// was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classified<'t> {
    /// The value the replacement applies to: the entity token itself, or the
    /// literal character at the match position.
    pub value: &'t str,
    /// Encoding the value was written in.
    pub encoding: Encoding,
}

/// Resolves a raw matched token to its value and source encoding.
///
/// Tokens that begin with the entity sentinel and appear in the numeric or
/// named tables keep the whole token; anything else falls back to the
/// literal character with raw-character semantics. The fallback covers
/// character-class matches and is not expected to trigger for entity tokens
/// produced by a correctly built scan pattern.
pub fn classify<'t>(token: &'t str, literal: &'t str) -> Classified<'t> {
    if token.starts_with(ENTITY_SENTINEL) {
        if is_ascii_form(token, Encoding::Numeric) {
            return Classified {
                value: token,
                encoding: Encoding::Numeric,
            };
        }
        if is_ascii_form(token, Encoding::Named) {
            return Classified {
                value: token,
                encoding: Encoding::Named,
            };
        }
    }

    Classified {
        value: literal,
        encoding: Encoding::Character,
    }
}

/// The quote family of a value, checked against all three encoded forms of
/// each ASCII concept. `None` for anything that is not an ASCII quote form;
/// scan matches always have a family because the pattern only matches ASCII
/// forms.
pub fn family_of(value: &str) -> Option<QuoteFamily> {
    [QuoteFamily::Single, QuoteFamily::Double]
        .into_iter()
        .find(|family| {
            let concept = family.ascii();
            ENCODINGS
                .iter()
                .any(|&encoding| value == concept.repr(encoding))
        })
}

fn is_ascii_form(value: &str, encoding: Encoding) -> bool {
    value == QuoteConcept::AsciiSingle.repr(encoding)
        || value == QuoteConcept::AsciiDouble.repr(encoding)
}
