//! The rewrite driver: one pass over the input, applying scan matches in
//! order and emitting the final text.

use crate::classify;
use crate::config::RewriteOptions;
use crate::pattern;
use crate::policy;
use crate::table::QuoteFamily;

/// Outcome of one rewrite invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteResult {
    /// True when at least one replacement was applied.
    pub changed: bool,
    /// The full output text; equals the input when `changed` is false.
    pub text: String,
}

impl RewriteResult {
    fn unchanged(text: &str) -> Self {
        Self {
            changed: false,
            text: text.to_string(),
        }
    }
}

/// How a span's boundary characters are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanKind {
    /// Delimited literal: the first and last characters are delimiters,
    /// excluded from the scan and reattached unchanged around the result.
    Literal,
    /// Undelimited text run: the whole span is scanned.
    Text,
}

/// Rewrites straight quotes and apostrophes in `text` to their curly
/// equivalents.
///
/// The input is scanned once, left to right, for every form selected by
/// `options.input_format`; entity references are treated as opaque tokens,
/// never decoded. Replacement decisions are final: the pass only appends to
/// the output and never revisits earlier positions.
///
/// # Examples
///
/// ```
/// use curlyq_core::{RewriteOptions, rewrite};
///
/// let result = rewrite("They said \"here are smart quotes!\"", &RewriteOptions::default());
/// assert!(result.changed);
/// assert_eq!(result.text, "They said “here are smart quotes!”");
///
/// let result = rewrite("no quotes", &RewriteOptions::default());
/// assert!(!result.changed);
/// ```
pub fn rewrite(text: &str, options: &RewriteOptions) -> RewriteResult {
    let matches = pattern::scan(text, options.input_format);
    if matches.is_empty() {
        return RewriteResult::unchanged(text);
    }

    let suppress_singles = policy::suppress_single_quotes(&matches);

    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut match_index = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let literal_len = rest.chars().next().map_or(1, char::len_utf8);
        let literal = &rest[..literal_len];

        let at_match = match_index < matches.len() && matches[match_index].start == pos;
        if !at_match {
            out.push_str(literal);
            pos += literal_len;
            continue;
        }

        let matched = matches[match_index];
        match_index += 1;

        if matched.family == QuoteFamily::Single && suppress_singles {
            // Ambiguous apostrophe: the literal character passes through and
            // scanning resumes right behind it.
            out.push_str(literal);
            pos += literal_len;
            continue;
        }

        let classified = classify::classify(matched.token, literal);
        let encoding = options
            .output_format
            .output_encoding()
            .unwrap_or(classified.encoding);
        let pair = policy::replacement_pair(matched.family, encoding);
        let glyph = policy::select_glyph(&out, matched.family, pair);

        out.push_str(glyph);
        changed = true;
        pos += classified.value.len();
    }

    RewriteResult { changed, text: out }
}

/// Rewrites one host span, honoring its boundary delimiters.
///
/// For [`SpanKind::Literal`] only the interior between the first and last
/// characters is scanned, and the original delimiters are reattached
/// unchanged around the result. Degenerate literals (fewer than two
/// characters) have no interior and come back untouched.
pub fn rewrite_span(raw: &str, kind: SpanKind, options: &RewriteOptions) -> RewriteResult {
    match kind {
        SpanKind::Text => rewrite(raw, options),
        SpanKind::Literal => {
            let open_len = raw.chars().next().map_or(0, char::len_utf8);
            let close_len = raw.chars().next_back().map_or(0, char::len_utf8);
            if raw.len() < open_len + close_len {
                return RewriteResult::unchanged(raw);
            }

            let close_start = raw.len() - close_len;
            let interior = rewrite(&raw[open_len..close_start], options);
            if !interior.changed {
                return RewriteResult::unchanged(raw);
            }

            let mut text = String::with_capacity(open_len + interior.text.len() + close_len);
            text.push_str(&raw[..open_len]);
            text.push_str(&interior.text);
            text.push_str(&raw[close_start..]);
            RewriteResult {
                changed: true,
                text,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Format, OptionsSpec};

    fn fix(text: &str) -> RewriteResult {
        rewrite(text, &RewriteOptions::default())
    }

    fn fix_with(text: &str, options_json: &str) -> RewriteResult {
        let spec: OptionsSpec = serde_json::from_str(options_json).unwrap();
        rewrite(text, &RewriteOptions::from(spec))
    }

    #[test]
    fn pairs_double_quotes() {
        let result = fix("They said \"here are smart quotes!\"");
        assert!(result.changed);
        assert_eq!(result.text, "They said “here are smart quotes!”");
    }

    #[test]
    fn pairs_independent_double_quote_runs() {
        let result = fix("My name is \"Barry\" and your name is \"Jane\"");
        assert_eq!(result.text, "My name is “Barry” and your name is “Jane”");
    }

    #[test]
    fn pairs_adjacent_empty_quotes() {
        assert_eq!(fix("\"\"").text, "“”");
    }

    #[test]
    fn lone_apostrophe_becomes_curly() {
        let result = fix("This is Jane's friend");
        assert!(result.changed);
        assert_eq!(result.text, "This is Jane’s friend");
    }

    #[test]
    fn ambiguous_apostrophes_pass_through() {
        let result = fix("This is 'Jane's friend");
        assert!(!result.changed);
        assert_eq!(result.text, "This is 'Jane's friend");
    }

    #[test]
    fn doubles_still_rewritten_when_apostrophes_are_suppressed() {
        let result = fix("'Jane's friend said \"hi\"");
        assert!(result.changed);
        assert_eq!(result.text, "'Jane's friend said “hi”");
    }

    #[test]
    fn already_curly_text_is_untouched() {
        let result = fix("They said “here are straight quotes!”");
        assert!(!result.changed);
        assert_eq!(result.text, "They said “here are straight quotes!”");
    }

    #[test]
    fn rewriting_is_idempotent() {
        let inputs = [
            "They said \"here are smart quotes!\"",
            "This is Jane's friend",
            "My name is \"Barry\" and your name is \"Jane\"",
            "a\"b\"c\"d",
        ];
        for input in inputs {
            let once = fix(input);
            let twice = fix(&once.text);
            assert!(!twice.changed, "{input:?} was not idempotent");
            assert_eq!(twice.text, once.text);
        }
    }

    #[test]
    fn named_to_named_round_trip() {
        let result = fix_with("This is Jane&apos;s friend", "\"all\"");
        assert_eq!(result.text, "This is Jane&rsquo;s friend");
    }

    #[test]
    fn character_input_skips_entities() {
        let result = fix_with("This is Jane'&apos;s friend", "\"character\"");
        assert_eq!(result.text, "This is Jane’&apos;s friend");
    }

    #[test]
    fn numeric_input_preserves_raw_apostrophes() {
        let result = fix_with("This is Jane'&#39;s friend", "\"numeric\"");
        assert_eq!(result.text, "This is Jane'&#8217;s friend");
    }

    #[test]
    fn numeric_input_with_named_output() {
        let result = fix_with(
            "This is Jane'&#39;s friend",
            r#"{ "inputFormat": "numeric", "outputFormat": "named" }"#,
        );
        assert_eq!(result.text, "This is Jane'&rsquo;s friend");
    }

    #[test]
    fn named_output_converts_every_source_encoding() {
        let result = fix_with(
            "My name is \"Barry\" and your name is &quot;Jane&#34;",
            r#"{ "inputFormat": "all", "outputFormat": "named" }"#,
        );
        assert_eq!(
            result.text,
            "My name is &ldquo;Barry&rdquo; and your name is &ldquo;Jane&rdquo;"
        );
    }

    #[test]
    fn preserving_output_keeps_each_source_encoding() {
        let result = fix_with(
            "My name is \"Barry\" and your name is &quot;Jane&quot;",
            "\"all\"",
        );
        assert_eq!(
            result.text,
            "My name is “Barry” and your name is &ldquo;Jane&rdquo;"
        );
    }

    #[test]
    fn replacement_realigns_across_token_lengths() {
        // 1-char quote grows to a 7-char entity and a 5-char entity shrinks
        // to a 1-char glyph; surrounding text must stay aligned.
        let grown = fix_with("a\"b", r#"{ "outputFormat": "named" }"#);
        assert_eq!(grown.text, "a&ldquo;b");

        let shrunk = fix_with(
            "a&#34;b",
            r#"{ "inputFormat": "numeric", "outputFormat": "character" }"#,
        );
        assert_eq!(shrunk.text, "a“b");
    }

    #[test]
    fn odd_double_quote_count_reopens_after_a_closed_pair() {
        // Implementation-defined: with the pair closed, the trailing third
        // occurrence reads as opening again.
        let result = fix("a\"b\"c\"d");
        assert_eq!(result.text, "a“b”c“d");
    }

    #[test]
    fn multibyte_text_around_matches_is_preserved() {
        let result = fix("日本語で \"引用\" です");
        assert_eq!(result.text, "日本語で “引用” です");
    }

    #[test]
    fn empty_and_quoteless_inputs_are_unchanged() {
        assert_eq!(fix(""), RewriteResult::unchanged(""));
        assert_eq!(fix("no quotes here"), RewriteResult::unchanged("no quotes here"));
    }

    #[test]
    fn literal_span_delimiters_are_reattached() {
        let result = rewrite_span(
            "'They said \"here are smart quotes!\"'",
            SpanKind::Literal,
            &RewriteOptions::default(),
        );
        assert!(result.changed);
        assert_eq!(result.text, "'They said “here are smart quotes!”'");
    }

    #[test]
    fn literal_span_delimiters_are_not_scanned() {
        // The double-quote delimiters themselves never count as matches.
        let result = rewrite_span(
            "\"This is Jane's friend\"",
            SpanKind::Literal,
            &RewriteOptions::default(),
        );
        assert_eq!(result.text, "\"This is Jane’s friend\"");
    }

    #[test]
    fn degenerate_literal_spans_are_untouched() {
        let options = RewriteOptions::default();
        for raw in ["", "'", "''"] {
            let result = rewrite_span(raw, SpanKind::Literal, &options);
            assert!(!result.changed);
            assert_eq!(result.text, raw);
        }
    }

    #[test]
    fn text_spans_scan_the_whole_input() {
        let result = rewrite_span("Here's some quotes!", SpanKind::Text, &RewriteOptions::default());
        assert_eq!(result.text, "Here’s some quotes!");
    }

    #[test]
    fn uniform_numeric_options_round_trip() {
        let result = fix_with("a &#34;quote&#34;", "\"numeric\"");
        assert_eq!(result.text, "a &#8220;quote&#8221;");
    }
}
