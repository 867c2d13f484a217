//! Segment tokens for letter classification
//!
//! The normalizer does not need a full grammar: it only distinguishes runs of
//! letters from everything else. The segments are defined using the logos
//! derive macro so the classification stays declarative; letter membership
//! comes from the Unicode `\p{L}` class, so letters from any script qualify.

use logos::Logos;

/// A maximal run of letters or non-letters.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Segment {
    /// One or more consecutive letters, from any script.
    #[regex(r"\p{L}+")]
    Letters,

    /// One or more consecutive non-letters: whitespace, digits, punctuation, symbols.
    #[regex(r"[^\p{L}]+")]
    Other,
}

impl Segment {
    /// Check if this segment is a letter run.
    pub fn is_letters(&self) -> bool {
        matches!(self, Segment::Letters)
    }
}

/// Split source text into its letter / non-letter segments.
pub fn segment(source: &str) -> Vec<Segment> {
    Segment::lexer(source).filter_map(|token| token.ok()).collect()
}

/// Split source text into segments with their byte spans.
///
/// The two segment patterns cover every character, so the spans tile the
/// whole source.
pub fn segment_with_spans(source: &str) -> Vec<(Segment, std::ops::Range<usize>)> {
    Segment::lexer(source)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|segment| (segment, span)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(
            segment("hello world"),
            vec![Segment::Letters, Segment::Other, Segment::Letters]
        );
    }

    #[test]
    fn test_punctuation_and_digits_group_together() {
        assert_eq!(
            segment("abc, 123!"),
            vec![Segment::Letters, Segment::Other]
        );
    }

    #[test]
    fn test_non_ascii_letters() {
        // 'å' and the en dash exercise multi-byte boundaries
        assert_eq!(
            segment_with_spans("på – x"),
            vec![
                (Segment::Letters, 0..3),
                (Segment::Other, 3..8),
                (Segment::Letters, 8..9),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segment(""), vec![]);
    }

    #[test]
    fn test_segment_predicates() {
        assert!(Segment::Letters.is_letters());
        assert!(!Segment::Other.is_letters());
    }
}
