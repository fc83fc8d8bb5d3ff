//! A module with client-server connection utilities for the solution endpoint.

use crate::{Outcome, Record, SUBMIT_TIMEOUT_SECS};
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// The only field of the submission response we inspect. A present, non-null
/// receipt is the sole success signal.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    crypto_receipt: Option<serde_json::Value>,
}

/// Build the blocking client used for every submission in a run.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built (should be extremely rare).
#[must_use]
pub fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(SUBMIT_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client")
}

/// Submit one solution to the server. Exactly one network attempt; every
/// failure mode folds into an [`Outcome`] so the batch loop keeps going.
pub fn submit_solution(client: &Client, api_base: &str, record: &Record) -> Outcome {
    let url = format!(
        "{api_base}/solution/{}/{}/{}",
        record.address, record.challenge_id, record.nonce
    );
    debug!("POST {url}");

    let response = match client.post(&url).json(&serde_json::json!({})).send() {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return Outcome::Error("Request timed out".to_string()),
        Err(e) => return Outcome::Error(e.to_string()),
    };

    let status = response.status();
    let body = match response.text() {
        Ok(body) => body,
        Err(e) if e.is_timeout() => return Outcome::Error("Request timed out".to_string()),
        Err(e) => return Outcome::Error(e.to_string()),
    };

    classify_response(status, &body)
}

/// Map a response status and raw body onto an outcome.
///
/// The "Solution already exists" check matches the server's error wording as
/// a plain substring. Brittle, but it is the contract the server actually
/// speaks; do not swap it for a structured code without a server change.
#[must_use]
pub fn classify_response(status: StatusCode, body: &str) -> Outcome {
    if status.is_success() {
        match serde_json::from_str::<SubmitResponse>(body) {
            Ok(data) => {
                if data.crypto_receipt.is_some() {
                    Outcome::Success
                } else {
                    Outcome::Rejected("No crypto receipt in response".to_string())
                }
            }
            Err(e) => Outcome::Error(e.to_string()),
        }
    } else if body.contains("Solution already exists") {
        Outcome::AlreadyExists
    } else {
        Outcome::Error(format!("HTTP {}: {body}", status.as_u16()))
    }
}
