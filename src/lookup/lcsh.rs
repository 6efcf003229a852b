// src/lookup/lcsh.rs
//! Authority-service adapter for Library of Congress subject headings.
//!
//! id.loc.gov answers the OpenSearch suggestion format:
//! `["<query>", [labels...], [descriptions...], [uris...]]`.
//! `labels[i]` pairs with `uris[i]`; descriptions are ignored. Every record
//! is tagged with the authority tag as its type.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::consts::{AUTHORITY_TAG, LCSH_SEARCH_URL, MAX_RESULTS};
use crate::config::options::LookupOptions;
use crate::core::net;
use crate::error::QueryFailure;
use crate::record::{Field, Source, SuggestionRecord};
use super::Lookup;

const LABELS: usize = 1;
const URIS: usize = 3;

/// Pair labels with uris for at most `limit` records.
///
/// A missing/short top-level array means no hits. A labels or uris entry that
/// is not an array is a shape error.
pub fn to_records(term: &str, payload: &Value, limit: usize) -> Result<Vec<SuggestionRecord>, QueryFailure> {
    let parts = match payload.as_array() {
        Some(parts) if parts.len() >= 4 => parts,
        _ => return Ok(Vec::new()),
    };

    let labels = parts[LABELS]
        .as_array()
        .ok_or_else(|| QueryFailure::Shape(format!("labels is not an array: {}", parts[LABELS])))?;
    let uris = parts[URIS]
        .as_array()
        .ok_or_else(|| QueryFailure::Shape(format!("uris is not an array: {}", parts[URIS])))?;

    let count = labels.len().min(limit);
    Ok((0..count)
        .map(|i| {
            let label = labels[i].as_str().map(str::to_string);
            let uri = uris.get(i).and_then(Value::as_str).map(str::to_string);
            SuggestionRecord::new(Source::Lcsh, term)
                .with_label(label)
                .with_uri(uri)
                .with_kind(Some(AUTHORITY_TAG.to_string()))
        })
        .collect())
}

pub struct LcshSuggest {
    client: Client,
    url: String,
    limit: usize,
}

impl LcshSuggest {
    pub fn new(client: Client) -> Self {
        Self { client, url: LCSH_SEARCH_URL.to_string(), limit: MAX_RESULTS }
    }

    pub fn from_options(opts: &LookupOptions) -> Result<Self, QueryFailure> {
        Ok(Self::new(net::client(opts.timeout)?).with_url(&opts.lcsh_url))
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }
}

impl Lookup for LcshSuggest {
    fn source(&self) -> Source {
        Source::Lcsh
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn slot_fields(&self) -> &'static [Field] {
        &[Field::Label, Field::Uri]
    }

    fn query(&self, term: &str) -> Result<Vec<SuggestionRecord>, QueryFailure> {
        let payload: Value = net::get_json(&self.client, &self.url, &[("q", term)])?;
        to_records(term, &payload, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_pair_with_uris_by_position() {
        let payload = json!([
            "abuse",
            ["Abuse of authority", "Abuse, Substance"],
            ["1 result", "1 result"],
            [
                "http://id.loc.gov/authorities/subjects/sh85000373",
                "http://id.loc.gov/authorities/subjects/sh85129291"
            ]
        ]);
        let records = to_records("abuse", &payload, 3).unwrap();

        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.label.as_deref(), Some("Abuse of authority"));
        assert_eq!(first.uri.as_deref(), Some("http://id.loc.gov/authorities/subjects/sh85000373"));
        assert_eq!(first.kind.as_deref(), Some("LCSH"));
        assert!(first.identifier.is_none());
        assert_eq!(records[1].label.as_deref(), Some("Abuse, Substance"));
        assert_eq!(records[1].source, Source::Lcsh);
    }

    #[test]
    fn at_most_limit_records() {
        let payload = json!(["x", ["a", "b", "c", "d"], [], ["u1", "u2", "u3", "u4"]]);
        let records = to_records("x", &payload, 3).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.kind.as_deref() == Some("LCSH")));
    }

    #[test]
    fn short_or_absent_payload_is_no_hits() {
        assert!(to_records("x", &json!(["x", ["a"], ["d"]]), 3).unwrap().is_empty());
        assert!(to_records("x", &json!([]), 3).unwrap().is_empty());
        assert!(to_records("x", &Value::Null, 3).unwrap().is_empty());
        assert!(to_records("x", &json!({"q": "x"}), 3).unwrap().is_empty());
    }

    #[test]
    fn short_uris_leave_uri_absent() {
        let payload = json!(["x", ["a", "b"], [], ["u1"]]);
        let records = to_records("x", &payload, 3).unwrap();
        assert_eq!(records[0].uri.as_deref(), Some("u1"));
        assert_eq!(records[1].uri, None);
    }

    #[test]
    fn non_string_entries_leave_fields_absent() {
        let payload = json!(["x", ["a", null, 3], [], ["u1", 7]]);
        let records = to_records("x", &payload, 3).unwrap();

        assert_eq!(records.len(), 3);
        let labels: Vec<_> = records.iter().map(|r| r.label.as_deref()).collect();
        let uris: Vec<_> = records.iter().map(|r| r.uri.as_deref()).collect();
        assert_eq!(labels, vec![Some("a"), None, None]);
        assert_eq!(uris, vec![Some("u1"), None, None]);
        assert!(records.iter().all(|r| r.kind.as_deref() == Some("LCSH")));
    }

    #[test]
    fn non_array_labels_is_a_shape_error() {
        let payload = json!(["x", "a", [], []]);
        assert!(matches!(to_records("x", &payload, 3), Err(QueryFailure::Shape(_))));
    }
}
