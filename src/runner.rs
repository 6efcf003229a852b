// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    aggregate,
    config::consts::{PREVIEW_COLUMNS, PREVIEW_COL_WIDTH, PREVIEW_ROWS},
    config::options::{AppOptions, Layout},
    file,
    lookup::{FastSuggest, LcshSuggest, Lookup},
    preview,
    progress::{self, Progress},
    table::DataSet,
    error::Result,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    /// Rendered preview, if requested and there was anything to show.
    pub preview: Option<String>,
}

/// Build the live adapters and run the whole batch.
/// LCSH goes first: its columns lead the wide layout.
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let lcsh = LcshSuggest::from_options(&opts.lookup)?;
    let fast = FastSuggest::from_options(&opts.lookup)?;
    let adapters: [&dyn Lookup; 2] = [&lcsh, &fast];
    run_with(opts, &adapters, progress)
}

/// Run with caller-supplied adapters: aggregate, export, optional preview.
/// Adapter failures never surface here; only export I/O can fail.
pub fn run_with(
    opts: &AppOptions,
    adapters: &[&dyn Lookup],
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let terms = &opts.lookup.terms;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Generating Assessment Spreadsheet for {} terms...", terms.len()));
    }
    info!(terms = terms.len(), layout = ?opts.export.layout, "run started");

    let ds = aggregate::aggregate(terms, adapters, opts.export.layout, progress::reborrow(&mut progress));

    let preview = if opts.export.preview {
        render_preview(&ds, opts.export.layout)
    } else {
        None
    };

    let path = file::write_export(&opts.export, &ds)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Complete assessment spreadsheet exported to '{}'", path.display()));
    }

    Ok(RunSummary { path, rows: ds.len(), columns: ds.headers.len(), preview })
}

/// Wide tables preview the fixed summary columns; long tables their first columns.
fn render_preview(ds: &DataSet, layout: Layout) -> Option<String> {
    let columns: Vec<&str> = match layout {
        Layout::Wide => PREVIEW_COLUMNS.to_vec(),
        Layout::Long => ds.headers.iter().map(String::as_str).take(PREVIEW_COLUMNS.len()).collect(),
    };
    let out = preview::render(ds, &columns, PREVIEW_ROWS, PREVIEW_COL_WIDTH);
    (!out.is_empty()).then_some(out)
}
