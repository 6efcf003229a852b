// src/lookup/mod.rs
//! # Lookup adapters
//!
//! Each adapter wraps one suggestion endpoint and turns its native payload into
//! [`SuggestionRecord`]s at the boundary, so nothing downstream branches on
//! response shape.
//!
//! ## Contract
//! - [`Lookup::query`] does the actual request and may fail with a [`QueryFailure`].
//! - [`Lookup::suggest`] is what the aggregator calls. It never fails: a failed
//!   query becomes [`Outcome::Failed`], which reads as an empty record list.
//! - At most [`Lookup::limit`] records come back, in the service's own ranking.
//!
//! ## Adapters
//! - `fast` – OCLC FAST `fastsuggest` (Solr `response.docs[].suggestall[]`).
//! - `lcsh` – id.loc.gov subject suggest (OpenSearch `[q, labels, descs, uris]`).
//! - `record` – FAST record fetch by id; only the connectivity check uses it.

use tracing::debug;

use crate::error::QueryFailure;
use crate::record::{Field, Source, SuggestionRecord};

pub mod fast;
pub mod lcsh;
pub mod record;

pub use fast::FastSuggest;
pub use lcsh::LcshSuggest;
pub use record::FastRecord;

/// Result of one adapter call for one term.
#[derive(Debug)]
pub enum Outcome {
    Found(Vec<SuggestionRecord>),
    Failed(QueryFailure),
}

impl Outcome {
    /// Records to lay out; empty on failure.
    pub fn records(&self) -> &[SuggestionRecord] {
        match self {
            Outcome::Found(records) => records,
            Outcome::Failed(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<SuggestionRecord> {
        match self {
            Outcome::Found(records) => records,
            Outcome::Failed(_) => Vec::new(),
        }
    }

    pub fn failure(&self) -> Option<&QueryFailure> {
        match self {
            Outcome::Found(_) => None,
            Outcome::Failed(e) => Some(e),
        }
    }
}

pub trait Lookup {
    fn source(&self) -> Source;

    /// Maximum number of records returned per term.
    fn limit(&self) -> usize;

    /// Record fields this adapter fills in the wide layout's numbered slots.
    fn slot_fields(&self) -> &'static [Field] {
        &[Field::Label]
    }

    /// One request for `term`, normalized to records.
    fn query(&self, term: &str) -> Result<Vec<SuggestionRecord>, QueryFailure>;

    /// Best-effort variant of [`query`](Lookup::query): failures come back as
    /// [`Outcome::Failed`] for the caller to report; the list is cut to [`limit`](Lookup::limit).
    fn suggest(&self, term: &str) -> Outcome {
        if term.trim().is_empty() {
            return Outcome::Failed(QueryFailure::EmptyTerm);
        }
        match self.query(term) {
            Ok(mut records) => {
                records.truncate(self.limit());
                Outcome::Found(records)
            }
            Err(e) => {
                debug!(source = %self.source(), term, error = %e, "lookup failed");
                Outcome::Failed(e)
            }
        }
    }
}
