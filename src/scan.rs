//! Scanning passes over plain text
//!
//! This module groups the three scanning passes and the reporting layer that
//! drives them:
//!
//! 1. Triple-run finding: locate non-overlapping groups of character triples.
//!    See [runs].
//! 2. Normalization: reduce text to its lowercase letters. The letter
//!    segmentation lives in [tokens], the fold in the normalize module.
//! 3. Palindrome peeling: strip matching end pairs one round at a time. See
//!    [palindrome].
//!
//! [report] runs all three against configured sample strings and renders the
//! results for console or JSON output.

pub mod normalize;
pub mod palindrome;
pub mod report;
pub mod runs;
pub mod tokens;

pub use normalize::normalize;
pub use palindrome::{is_palindrome, peel, peel_rounds, PeelRound, PeelStep};
pub use report::{run_demo, DemoReport, OutputFormat, PalindromeReport, ReportError, RunReport};
pub use runs::{find_triple_runs, triple_run_texts, TripleRun};
pub use tokens::Segment;
