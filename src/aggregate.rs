// src/aggregate.rs
//! Row aggregation: per-term adapter results → one table.
//!
//! Two fixed layouts:
//! - **Wide**: one row per term. For each adapter, in the order given, `limit`
//!   numbered slots (`_1`, `_2`, ...) holding that adapter's slot fields
//!   (`LCSH_Label_1, LCSH_URI_1, ..., FAST_Label_1, ...`). Missing records → `None`.
//! - **Long**: one row per record, tagged with its source. Columns that are
//!   `None` in every row are pruned after all terms are in.
//!
//! Calls are strictly sequential: one per adapter per term, terms in input order.
//! A failed call contributes no records and is reported to `progress`.

use tracing::info;

use crate::config::consts::TERM_HEADER;
use crate::config::options::Layout;
use crate::lookup::Lookup;
use crate::progress::Progress;
use crate::record::{Field, SuggestionRecord};
use crate::table::{Cell, DataSet};

/// Long-layout columns, in output order.
pub const LONG_HEADERS: &[&str] = &["search_term", "source", "label", "identifier", "type", "uri"];

const LONG_FIELDS: &[Field] = &[Field::Label, Field::Identifier, Field::Type, Field::Uri];

/// Query every adapter for every term and assemble `layout`.
pub fn aggregate(
    terms: &[String],
    adapters: &[&dyn Lookup],
    layout: Layout,
    progress: Option<&mut dyn Progress>,
) -> DataSet {
    match layout {
        Layout::Wide => aggregate_wide(terms, adapters, progress),
        Layout::Long => aggregate_long(terms, adapters, progress),
    }
}

/// Header row for the wide layout with these adapters.
pub fn wide_headers(adapters: &[&dyn Lookup]) -> Vec<String> {
    let mut headers = vec![TERM_HEADER.to_string()];
    for a in adapters {
        for slot in 1..=a.limit() {
            for field in a.slot_fields() {
                headers.push(format!("{}_{}_{}", a.source(), field.wide_name(), slot));
            }
        }
    }
    headers
}

pub fn aggregate_wide(
    terms: &[String],
    adapters: &[&dyn Lookup],
    mut progress: Option<&mut dyn Progress>,
) -> DataSet {
    let mut ds = DataSet::new(wide_headers(adapters));
    if let Some(p) = progress.as_deref_mut() {
        p.begin(terms.len());
    }

    for term in terms {
        let mut row: Vec<Cell> = Vec::with_capacity(ds.headers.len());
        row.push(Some(term.clone()));

        for a in adapters {
            let outcome = a.suggest(term);
            if let (Some(e), Some(p)) = (outcome.failure(), progress.as_deref_mut()) {
                p.item_failed(term, a.source(), &e.to_string());
            }
            push_slots(&mut row, *a, outcome.records());
        }

        ds.rows.push(row);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(term);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    info!(terms = terms.len(), columns = ds.headers.len(), "wide table assembled");
    ds
}

pub fn aggregate_long(
    terms: &[String],
    adapters: &[&dyn Lookup],
    mut progress: Option<&mut dyn Progress>,
) -> DataSet {
    let mut ds = DataSet::new(LONG_HEADERS.iter().map(|h| h.to_string()).collect());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(terms.len());
    }

    for term in terms {
        for a in adapters {
            let outcome = a.suggest(term);
            if let (Some(e), Some(p)) = (outcome.failure(), progress.as_deref_mut()) {
                p.item_failed(term, a.source(), &e.to_string());
            }
            ds.rows.extend(outcome.records().iter().map(long_row));
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(term);
        }
    }

    let dropped = ds.drop_empty_columns();
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    info!(rows = ds.len(), ?dropped, "long table assembled");
    ds
}

/// Append `limit` slots of `slot_fields` for one adapter, `None`-filled past the last record.
fn push_slots(row: &mut Vec<Cell>, adapter: &dyn Lookup, records: &[SuggestionRecord]) {
    for i in 0..adapter.limit() {
        let record = records.get(i);
        for field in adapter.slot_fields() {
            row.push(record.and_then(|r| r.field(*field)).map(str::to_string));
        }
    }
}

fn long_row(r: &SuggestionRecord) -> Vec<Cell> {
    let mut row: Vec<Cell> = vec![Some(r.search_term.clone()), Some(r.source.to_string())];
    row.extend(LONG_FIELDS.iter().map(|f| r.field(*f).map(str::to_string)));
    row
}
