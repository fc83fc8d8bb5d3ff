//! A CLI that resubmits failed scavenger solutions and keeps only the stragglers.

#![warn(clippy::all, clippy::pedantic)]

extern crate resubmit_common;
use resubmit_common::batch::{RunSummary, run_batch};
use resubmit_common::solutions_file::{load_lines, rewrite};
use resubmit_common::submit_api::{build_client, submit_solution};
use resubmit_common::{CLIENT_VERSION, DEFAULT_API_BASE, DEFAULT_SOLUTIONS_FILE};

use clap::Parser;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The base API URL to submit solutions to
    #[arg(long, default_value = DEFAULT_API_BASE, env = "RESUBMIT_API_BASE")]
    api_base: String,

    /// The solutions file, one address,challenge_id,nonce per line
    #[arg(short, long, default_value = DEFAULT_SOLUTIONS_FILE, env = "RESUBMIT_FILE")]
    file: PathBuf,

    /// Suppress per-record progress output
    #[arg(short, long, env = "RESUBMIT_QUIET")]
    quiet: bool,

    /// Show additional output
    #[arg(short, long, env = "RESUBMIT_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Set up logger
    env_logger::init();

    if cli.verbose {
        println!("Resubmit Client v{CLIENT_VERSION}");
        println!("CLI Inputs: {cli:?}");
    }

    // Read all solutions; a missing file is the only fatal startup error
    let all_lines = match load_lines(&cli.file) {
        Ok(all_lines) => all_lines,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    if all_lines.is_empty() {
        println!("{} is empty", cli.file.display());
        print!("{}", RunSummary::default());
        return ExitCode::SUCCESS;
    }

    if !cli.quiet {
        println!("Found {} solution(s) to resubmit", all_lines.len());
        println!("{}", "=".repeat(70));
    }

    let client = build_client();
    debug!("submitting {} line(s) to {}", all_lines.len(), cli.api_base);

    // One attempt per record, strictly sequential
    let report = run_batch(&all_lines, cli.quiet, |record| {
        submit_solution(&client, &cli.api_base, record)
    });

    println!();
    println!("{}", "=".repeat(70));
    print!("{}", report.summary);
    println!("{}", "=".repeat(70));

    // Rewrite the file so the next run only sees the stragglers
    if let Err(e) = rewrite(&cli.file, &report.retained) {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }

    if report.retained.is_empty() {
        println!(
            "\n✓ All solutions submitted successfully - wiped {}",
            cli.file.display()
        );
    } else {
        println!(
            "\n✓ Updated {} - kept {} failed solution(s)",
            cli.file.display(),
            report.retained.len()
        );
        println!(
            "  Removed {} successful/existing solution(s)",
            report.summary.success + report.summary.already_exists
        );
    }

    // Individual record failures are not a process failure
    ExitCode::SUCCESS
}
