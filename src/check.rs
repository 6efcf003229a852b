// src/check.rs
//
// Connectivity check against the FAST services: one suggest search, one record fetch.
// Each step reports on its own; a failing step does not stop the other.

use std::time::Duration;

use crate::{
    config::consts::{CHECK_JSON_SNIPPET, CHECK_MAX, CHECK_XML_SNIPPET},
    core::net,
    error::QueryFailure,
    lookup::{FastRecord, FastSuggest},
};

pub struct CheckReport {
    pub search: Result<String, QueryFailure>,
    pub record: Result<String, QueryFailure>,
}

/// First `max` chars of `text`, with a truncation marker when cut.
pub fn snippet(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}\n... (truncated)")
}

pub fn run(term: &str, identifier: &str, timeout: Duration) -> Result<CheckReport, QueryFailure> {
    let client = net::client(timeout)?;

    let search = FastSuggest::new(client.clone())
        .with_limit(CHECK_MAX)
        .search_raw(term)
        .map(|json| {
            let pretty = serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string());
            snippet(&pretty, CHECK_JSON_SNIPPET)
        });

    let record = FastRecord::new(client)
        .fetch(identifier)
        .map(|xml| snippet(&xml, CHECK_XML_SNIPPET));

    Ok(CheckReport { search, record })
}
