//! A library with common utilities for resubmitting scavenger solutions.

pub mod batch;
pub mod solutions_file;
pub mod submit_api;

pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The production submission endpoint.
pub const DEFAULT_API_BASE: &str = "https://scavenger.prod.gd.midnighttge.io";

/// The file we read failed solutions from and rewrite at the end of a run.
pub const DEFAULT_SOLUTIONS_FILE: &str = "solutions.csv";

/// Per-request timeout. One attempt per record, no retries.
pub const SUBMIT_TIMEOUT_SECS: u64 = 15;

/// One persisted solution: the triple we resubmit to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: String,
    pub challenge_id: String,
    pub nonce: String,
}

impl Record {
    /// Parse one comma-separated line. Exactly three fields are required;
    /// any other field count is malformed. Fields are not unescaped, so a
    /// comma inside a field is indistinguishable from a field boundary.
    pub fn parse(line: &str) -> Option<Record> {
        let mut parts = line.split(',');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(address), Some(challenge_id), Some(nonce), None) => Some(Record {
                address: address.to_string(),
                challenge_id: challenge_id.to_string(),
                nonce: nonce.to_string(),
            }),
            _ => None,
        }
    }
}

/// How a single submission attempt resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the solution and issued a receipt.
    Success,
    /// The server already has this solution. Resolved, not a failure.
    AlreadyExists,
    /// The server answered with a success status but issued no receipt.
    Rejected(String),
    /// Transport failure, timeout, or an unrecognized error status.
    Error(String),
}
