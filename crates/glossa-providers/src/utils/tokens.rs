//! Token estimates for providers without a local tokenizer
//!
//! Subword vocabularies keep short common words whole, split long words into
//! several pieces and give every punctuation mark its own token. The estimate
//! follows the same shape so that budgets hold for punctuation-heavy text.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::constants::ESTIMATED_TOKEN_MAX_CHARS;

/// Byte ranges of the estimated tokens of `text`, in order
///
/// Whitespace produces no token. A word becomes one token per started run of
/// [`ESTIMATED_TOKEN_MAX_CHARS`] characters; any other segment becomes one
/// token per character.
pub fn estimate_token_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();

    for (offset, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }

        let chars: Vec<(usize, char)> = segment.char_indices().collect();
        let piece = if segment.chars().any(char::is_alphanumeric) {
            ESTIMATED_TOKEN_MAX_CHARS
        } else {
            1
        };

        for chunk in chars.chunks(piece) {
            if let (Some((start, _)), Some((last, c))) = (chunk.first(), chunk.last()) {
                spans.push(offset + start..offset + last + c.len_utf8());
            }
        }
    }

    spans
}
