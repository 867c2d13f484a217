//! Triple-run finding
//!
//! A triple is three consecutive occurrences of the same character. A run is
//! one or more adjacent triples; the triples inside one run may use different
//! characters, so `"aaabbb"` is a single six-character run. Runs never
//! overlap, and scanning resumes immediately after each run: a uniform
//! stretch of four characters contributes only its first triple, and the
//! leftover character is available to start a later run.
//!
//! The scan is a direct character procedure rather than a regex. Matching a
//! triple requires comparing a character against itself (a backreference),
//! which the regex crate's automaton engine does not support.

use serde::Serialize;

/// A single triple run located in a haystack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripleRun {
    /// The matched substring.
    pub text: String,
    /// Byte offset of the start of the run.
    pub start: usize,
    /// Byte offset one past the end of the run.
    pub end: usize,
}

/// Find all non-overlapping triple runs in `input`, in order of occurrence.
///
/// At each position the scan greedily consumes as many consecutive uniform
/// triples as it can; one or more consumed triples form a run. Absence of
/// runs is an empty vector, never an error.
pub fn find_triple_runs(input: &str) -> Vec<TripleRun> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let mut j = i;
        while j + 3 <= chars.len()
            && chars[j].1 == chars[j + 1].1
            && chars[j].1 == chars[j + 2].1
        {
            j += 3;
        }
        if j > i {
            let start = chars[i].0;
            let end = if j < chars.len() { chars[j].0 } else { input.len() };
            runs.push(TripleRun {
                text: input[start..end].to_string(),
                start,
                end,
            });
            i = j;
        } else {
            i += 1;
        }
    }
    runs
}

/// The matched substrings only, in order of occurrence.
pub fn triple_run_texts(input: &str) -> Vec<String> {
    find_triple_runs(input)
        .into_iter()
        .map(|run| run.text)
        .collect()
}
