//! Demonstration pipeline and output rendering
//!
//! Drives the scanning passes over sample strings and renders the combined
//! results. Two renderings are supported:
//!
//! - `simple`: the console lines of the demonstration. One match list per run
//!   sample, then the normalized phrase, then one `false` line per failed
//!   peel round.
//! - `json`: the full report serialized with serde_json, including match
//!   spans and every peel round.

use crate::config::TextscanConfig;
use crate::scan::normalize::normalize;
use crate::scan::palindrome::{peel_rounds, PeelRound};
use crate::scan::runs::{find_triple_runs, TripleRun};
use serde::Serialize;
use std::fmt;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

impl OutputFormat {
    /// Parse a format name like "simple" or "json".
    pub fn from_string(format: &str) -> Result<Self, ReportError> {
        match format {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReportError::InvalidFormat(other.to_string())),
        }
    }
}

/// Error type for report rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    /// Unknown output format name
    InvalidFormat(String),
    /// Report serialization failed
    Serialization(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::InvalidFormat(name) => write!(f, "Unknown output format: {}", name),
            ReportError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {}

/// Triple-run results for one sample string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// The scanned input.
    pub input: String,
    /// The runs found, in order of occurrence.
    pub matches: Vec<TripleRun>,
}

impl RunReport {
    /// Scan `input` for triple runs.
    pub fn scan(input: &str) -> Self {
        Self {
            input: input.to_string(),
            matches: find_triple_runs(input),
        }
    }

    /// Render this report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        match format {
            OutputFormat::Simple => Ok(self.render_simple()),
            OutputFormat::Json => to_json(self),
        }
    }

    fn render_simple(&self) -> String {
        let texts: Vec<&str> = self.matches.iter().map(|run| run.text.as_str()).collect();
        format!("{:?}\n", texts)
    }
}

/// Normalization and peeling results for one phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalindromeReport {
    /// The raw input phrase.
    pub input: String,
    /// The letters-only lowercase form that was peeled.
    pub normalized: String,
    /// Every round of the bounded peeling loop.
    pub rounds: Vec<PeelRound>,
}

impl PalindromeReport {
    /// Normalize `input`, then run the bounded peeling loop on the result.
    pub fn scan(input: &str) -> Self {
        let normalized = normalize(input);
        let rounds = peel_rounds(&normalized);
        Self {
            input: input.to_string(),
            normalized,
            rounds,
        }
    }

    /// Render this report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        match format {
            OutputFormat::Simple => Ok(self.render_simple()),
            OutputFormat::Json => to_json(self),
        }
    }

    fn render_simple(&self) -> String {
        let mut out = format!("{}\n", self.normalized);
        for round in &self.rounds {
            if !round.matched {
                out.push_str("false\n");
            }
        }
        out
    }
}

/// Combined results of the demonstration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    /// One report per configured run sample.
    pub runs: Vec<RunReport>,
    /// The palindrome sample report.
    pub palindrome: PalindromeReport,
}

impl DemoReport {
    /// Render the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        match format {
            OutputFormat::Simple => Ok(self.render_simple()),
            OutputFormat::Json => to_json(self),
        }
    }

    fn render_simple(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            out.push_str(&run.render_simple());
        }
        out.push_str(&self.palindrome.render_simple());
        out
    }
}

/// Scan the configured samples and collect the results.
pub fn run_demo(config: &TextscanConfig) -> DemoReport {
    DemoReport {
        runs: config
            .samples
            .runs
            .iter()
            .map(|input| RunReport::scan(input))
            .collect(),
        palindrome: PalindromeReport::scan(&config.samples.palindrome),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    serde_json::to_string_pretty(value).map_err(|e| ReportError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_string("simple"), Ok(OutputFormat::Simple));
        assert_eq!(OutputFormat::from_string("json"), Ok(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_string("yaml"),
            Err(ReportError::InvalidFormat("yaml".to_string()))
        );
    }

    #[test]
    fn test_run_report_simple_rendering() {
        let report = RunReport::scan("xxaaabbbxx cccc");
        assert_eq!(
            report.render(OutputFormat::Simple).unwrap(),
            "[\"aaabbb\", \"ccc\"]\n"
        );
    }

    #[test]
    fn test_palindrome_report_simple_rendering() {
        let report = PalindromeReport::scan("Hello!");
        assert_eq!(report.normalized, "hello");
        assert_eq!(
            report.render(OutputFormat::Simple).unwrap(),
            "hello\nfalse\nfalse\n"
        );
    }

    #[test]
    fn test_palindrome_report_clean_peel_prints_no_false() {
        let report = PalindromeReport::scan("aba");
        assert_eq!(report.render(OutputFormat::Simple).unwrap(), "aba\n");
    }

    #[test]
    fn test_json_rendering_round_trips() {
        let report = RunReport::scan("aaa");
        let json = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["matches"][0]["text"], "aaa");
        assert_eq!(value["matches"][0]["start"], 0);
        assert_eq!(value["matches"][0]["end"], 3);
    }
}
