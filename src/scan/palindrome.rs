//! Palindrome peeling
//!
//! Peeling removes one matching first/last character pair per round, leaving
//! the middle remainder as the subject of the next round. A peel succeeds
//! only when the subject has at least three characters, its first and last
//! characters are equal, and every interior character is a letter. A failed
//! round leaves the subject unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Interior of a peelable subject: one or more letters, nothing else.
static INTERIOR_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{L}+$").unwrap());

/// Outcome of a single peel attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeelStep {
    /// The ends matched; the middle remainder is the next subject.
    Continue(String),
    /// The ends did not match, or the subject cannot be peeled.
    Failed,
}

/// Try to peel a matching end pair off `text`.
///
/// Subjects shorter than three characters cannot be peeled: there is nothing
/// between the ends for the interior to match.
pub fn peel(text: &str) -> PeelStep {
    let mut ends = text.char_indices();
    let (first, last_start, last) = match (ends.next(), ends.next_back()) {
        (Some((_, first)), Some((last_start, last))) => (first, last_start, last),
        _ => return PeelStep::Failed,
    };
    if first != last {
        return PeelStep::Failed;
    }
    let middle = &text[first.len_utf8()..last_start];
    if INTERIOR_LETTERS.is_match(middle) {
        PeelStep::Continue(middle.to_string())
    } else {
        PeelStep::Failed
    }
}

/// One recorded round of the bounded peeling loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeelRound {
    /// Whether the ends matched this round.
    pub matched: bool,
    /// The subject left for the next round.
    pub remainder: String,
}

/// Run the bounded peeling loop over `text`.
///
/// The number of rounds is fixed up front at half the character count,
/// regardless of how the rounds turn out. A failed round leaves the subject
/// unchanged, so every round after a failure attempts the same remainder and
/// fails again.
pub fn peel_rounds(text: &str) -> Vec<PeelRound> {
    let rounds = text.chars().count() / 2;
    let mut current = text.to_string();
    let mut recorded = Vec::with_capacity(rounds);
    for _ in 0..rounds {
        match peel(&current) {
            PeelStep::Continue(middle) => {
                current = middle;
                recorded.push(PeelRound {
                    matched: true,
                    remainder: current.clone(),
                });
            }
            PeelStep::Failed => {
                recorded.push(PeelRound {
                    matched: false,
                    remainder: current.clone(),
                });
            }
        }
    }
    recorded
}

/// Check palindromic structure by peeling until the subject is exhausted.
///
/// Intended for normalized input: interiors must be letters for a peel to
/// succeed, so punctuation or digits inside the subject read as a mismatch.
/// Empty and single-character subjects are palindromic, as is an equal pair.
pub fn is_palindrome(text: &str) -> bool {
    let mut current = text.to_string();
    loop {
        let mut chars = current.chars();
        match (chars.next(), chars.next_back()) {
            (None, _) | (Some(_), None) => return true,
            (Some(first), Some(last)) => {
                if first != last {
                    return false;
                }
                match peel(&current) {
                    PeelStep::Continue(middle) => current = middle,
                    // Equal ends with nothing between them
                    PeelStep::Failed if current.chars().count() == 2 => return true,
                    PeelStep::Failed => return false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peel_odd_palindrome() {
        assert_eq!(peel("aba"), PeelStep::Continue("b".to_string()));
    }

    #[test]
    fn test_peel_multibyte_ends() {
        assert_eq!(peel("åbå"), PeelStep::Continue("b".to_string()));
    }

    #[test]
    fn test_peel_short_subjects_fail() {
        assert_eq!(peel(""), PeelStep::Failed);
        assert_eq!(peel("a"), PeelStep::Failed);
        assert_eq!(peel("aa"), PeelStep::Failed);
    }

    #[test]
    fn test_peel_mismatched_ends_fail() {
        assert_eq!(peel("ab"), PeelStep::Failed);
        assert_eq!(peel("abc"), PeelStep::Failed);
    }

    #[test]
    fn test_peel_requires_letter_interior() {
        assert_eq!(peel("a-a"), PeelStep::Failed);
        assert_eq!(peel("a1a"), PeelStep::Failed);
    }

    #[test]
    fn test_rounds_count_is_half_the_length() {
        assert_eq!(peel_rounds("abcde").len(), 2);
        assert_eq!(peel_rounds("abcdef").len(), 3);
        assert_eq!(peel_rounds("a").len(), 0);
    }

    #[test]
    fn test_failed_round_keeps_subject() {
        let rounds = peel_rounds("abcdba");
        assert_eq!(
            rounds,
            vec![
                PeelRound {
                    matched: true,
                    remainder: "bcdb".to_string(),
                },
                PeelRound {
                    matched: true,
                    remainder: "cd".to_string(),
                },
                PeelRound {
                    matched: false,
                    remainder: "cd".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("aa"));
        assert!(is_palindrome("aba"));
        assert!(is_palindrome("otto"));
        assert!(!is_palindrome("ab"));
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome("a-a"));
    }
}
