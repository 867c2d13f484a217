//! Command-line interface for textscan
//!
//! Runs the character-run and palindrome demonstration, or scans arbitrary
//! text with one of the subcommands.
//!
//! Usage:
//!   textscan                                        - Run the demonstration on the built-in samples
//!   textscan demo [--config `<path>`] [--format `<format>`] - Same, with sample overrides
//!   textscan runs `<text>` [--format `<format>`]          - Find triple runs in the given text
//!   textscan normalize `<text>`                       - Strip non-letters and lowercase
//!   textscan peel `<text>` [--format `<format>`]          - Normalize, then peel matching end pairs

use clap::{Arg, Command};
use textscan::config::{Loader, TextscanConfig};
use textscan::scan::normalize::normalize;
use textscan::scan::report::{run_demo, OutputFormat, PalindromeReport, RunReport};

fn main() {
    let matches = Command::new("textscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scans text for repeated-character runs and palindromic structure")
        .subcommand(
            Command::new("demo")
                .about("Run the demonstration on the configured samples")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in samples"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("runs")
                .about("Find triple runs in the given text")
                .arg(
                    Arg::new("text")
                        .help("Text to scan")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("normalize")
                .about("Strip non-letters from the given text and lowercase it")
                .arg(
                    Arg::new("text")
                        .help("Text to normalize")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("peel")
                .about("Normalize the given text, then peel matching end pairs")
                .arg(
                    Arg::new("text")
                        .help("Text to peel")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .get_matches();

    // Handle subcommands; a bare invocation runs the demonstration
    match matches.subcommand() {
        Some(("demo", demo_matches)) => {
            let config_path = demo_matches.get_one::<String>("config");
            let format = demo_matches.get_one::<String>("format").unwrap();
            handle_demo_command(config_path.map(String::as_str), format);
        }
        Some(("runs", runs_matches)) => {
            let text = runs_matches.get_one::<String>("text").unwrap();
            let format = runs_matches.get_one::<String>("format").unwrap();
            handle_runs_command(text, format);
        }
        Some(("normalize", normalize_matches)) => {
            let text = normalize_matches.get_one::<String>("text").unwrap();
            handle_normalize_command(text);
        }
        Some(("peel", peel_matches)) => {
            let text = peel_matches.get_one::<String>("text").unwrap();
            let format = peel_matches.get_one::<String>("format").unwrap();
            handle_peel_command(text, format);
        }
        None => handle_demo_command(None, "simple"),
        _ => unreachable!(),
    }
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format ('simple' or 'json')")
        .default_value("simple")
}

fn parse_format(format: &str) -> OutputFormat {
    OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn load_config(path: Option<&str>) -> TextscanConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the demo command (and the bare invocation)
fn handle_demo_command(config_path: Option<&str>, format: &str) {
    let format = parse_format(format);
    let config = load_config(config_path);
    let report = run_demo(&config);
    print_rendered(report.render(format));
}

/// Handle the runs command
fn handle_runs_command(text: &str, format: &str) {
    let format = parse_format(format);
    let report = RunReport::scan(text);
    print_rendered(report.render(format));
}

/// Handle the normalize command
fn handle_normalize_command(text: &str) {
    println!("{}", normalize(text));
}

/// Handle the peel command
fn handle_peel_command(text: &str, format: &str) {
    let format = parse_format(format);
    let report = PalindromeReport::scan(text);
    print_rendered(report.render(format));
}

fn print_rendered(rendered: Result<String, textscan::scan::report::ReportError>) {
    match rendered {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
