// src/lookup/record.rs
// FAST record fetch by identifier. Not part of the aggregation path.

use reqwest::blocking::Client;

use crate::config::consts::{FAST_RECORD_URL, RDF_XML};
use crate::core::net;
use crate::error::QueryFailure;

pub struct FastRecord {
    client: Client,
    base_url: String,
}

impl FastRecord {
    pub fn new(client: Client) -> Self {
        Self { client, base_url: FAST_RECORD_URL.to_string() }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn url_for(&self, identifier: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), identifier.trim())
    }

    /// Raw RDF/XML for `identifier`. JSON-LD gets a 406 on some networks, so ask for RDF.
    pub fn fetch(&self, identifier: &str) -> Result<String, QueryFailure> {
        if identifier.trim().is_empty() {
            return Err(QueryFailure::EmptyTerm);
        }
        net::get_text(&self.client, &self.url_for(identifier), RDF_XML)
    }
}
