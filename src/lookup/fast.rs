// src/lookup/fast.rs
//! Suggestion-service adapter for OCLC FAST (`fastsuggest`).
//!
//! The endpoint is Solr-backed and answers
//! `{ "response": { "docs": [ { "suggestall": ["...", ...] }, ... ] } }`.
//! Each doc only carries a *list* of suggestion strings: no id, type or uri.
//! The first string becomes the label; everything else stays `None`.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::consts::{FAST_SEARCH_URL, MAX_RESULTS};
use crate::config::options::LookupOptions;
use crate::core::net;
use crate::error::QueryFailure;
use crate::record::{Source, SuggestionRecord};
use super::Lookup;

/* ---------------- Payload ---------------- */

#[derive(Debug, Default, Deserialize)]
pub struct FastPayload {
    #[serde(default)]
    pub response: FastResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct FastResponse {
    #[serde(default)]
    pub docs: Vec<FastDoc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FastDoc {
    /// `null` and a missing key both decode to `None`.
    #[serde(default)]
    pub suggestall: Option<Vec<String>>,
}

/// Turn a decoded payload into at most `limit` records for `term`.
/// Missing `response`/`docs` means no hits; an empty, null or missing `suggestall`
/// leaves that doc's label absent without touching its neighbours.
pub fn to_records(term: &str, payload: FastPayload, limit: usize) -> Vec<SuggestionRecord> {
    payload
        .response
        .docs
        .into_iter()
        .take(limit)
        .map(|doc| {
            let label = doc.suggestall.into_iter().flatten().next();
            SuggestionRecord::new(Source::Fast, term).with_label(label)
        })
        .collect()
}

/* ---------------- Adapter ---------------- */

pub struct FastSuggest {
    client: Client,
    url: String,
    limit: usize,
}

impl FastSuggest {
    pub fn new(client: Client) -> Self {
        Self { client, url: FAST_SEARCH_URL.to_string(), limit: MAX_RESULTS }
    }

    pub fn from_options(opts: &LookupOptions) -> Result<Self, QueryFailure> {
        Ok(Self::new(net::client(opts.timeout)?).with_url(&opts.fast_url))
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Raw JSON for `term`, as the endpoint sent it. Used by the connectivity check.
    pub fn search_raw(&self, term: &str) -> Result<serde_json::Value, QueryFailure> {
        self.fetch(term)
    }

    fn fetch<T: serde::de::DeserializeOwned>(&self, term: &str) -> Result<T, QueryFailure> {
        let max = self.limit.to_string();
        net::get_json(
            &self.client,
            &self.url,
            &[("query", term), ("max", max.as_str()), ("format", "json"), ("wt", "json")],
        )
    }
}

impl Lookup for FastSuggest {
    fn source(&self) -> Source {
        Source::Fast
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn query(&self, term: &str) -> Result<Vec<SuggestionRecord>, QueryFailure> {
        let payload: FastPayload = self.fetch(term)?;
        Ok(to_records(term, payload, self.limit))
    }
}
