//! The sequential batch driver: one submission attempt per line, in file order.

use crate::{Outcome, Record};
use std::fmt;
use std::io::{self, Write};

/// How many characters of the address and challenge id to show per line.
const PROGRESS_PREFIX_LEN: usize = 20;

/// Tallies for one run. Derived each run, never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub success: usize,
    pub already_exists: usize,
    pub rejected: usize,
    pub error: usize,
    /// Raw lines seen, including blank and malformed ones.
    pub total: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SUMMARY:")?;
        writeln!(f, "  Successful submissions:  {}", self.success)?;
        writeln!(f, "  Already existed:         {}", self.already_exists)?;
        writeln!(f, "  Rejected:                {}", self.rejected)?;
        writeln!(f, "  Errors:                  {}", self.error)?;
        writeln!(f, "  Total:                   {}", self.total)
    }
}

/// Everything the caller needs to finish a run: the tally for the console
/// report and the lines to write back for the next pass.
#[derive(Debug)]
pub struct BatchReport {
    pub summary: RunSummary,
    /// Original lines whose outcome was rejected, error, or malformed,
    /// in input order.
    pub retained: Vec<String>,
}

/// Run the batch over the raw file lines, strictly in order, submitting each
/// well-formed record with `submit`. Blank lines are dropped silently;
/// malformed lines are retained without ever being submitted. No per-record
/// fault aborts the batch: `submit` reports faults as [`Outcome`] values.
pub fn run_batch<F>(lines: &[String], quiet: bool, mut submit: F) -> BatchReport
where
    F: FnMut(&Record) -> Outcome,
{
    let total = lines.len();
    let mut summary = RunSummary {
        total,
        ..RunSummary::default()
    };
    let mut retained = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(record) = Record::parse(line) else {
            if !quiet {
                println!("[{}] SKIP: Invalid format: {line}", i + 1);
            }
            retained.push(line.to_string());
            continue;
        };

        if !quiet {
            print!(
                "[{}/{total}] Submitting: {}... / {}... ",
                i + 1,
                prefix(&record.address, PROGRESS_PREFIX_LEN),
                prefix(&record.challenge_id, PROGRESS_PREFIX_LEN)
            );
            // the outcome glyph lands on the same line after the request
            io::stdout().flush().ok();
        }

        match submit(&record) {
            Outcome::Success => {
                summary.success += 1;
                if !quiet {
                    println!("✓ SUCCESS");
                }
            }
            Outcome::AlreadyExists => {
                summary.already_exists += 1;
                if !quiet {
                    println!("✓ ALREADY EXISTS");
                }
            }
            Outcome::Rejected(message) => {
                summary.rejected += 1;
                if !quiet {
                    println!("✗ REJECTED: {message}");
                }
                retained.push(line.to_string());
            }
            Outcome::Error(message) => {
                summary.error += 1;
                if !quiet {
                    println!("✗ ERROR: {message}");
                }
                retained.push(line.to_string());
            }
        }
    }

    BatchReport { summary, retained }
}

/// Take at most `n` characters, respecting char boundaries.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
