// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::consts::{CHECK_RECORD_ID, CHECK_TERM, TIMEOUT_SECS};
use crate::config::options::{AppOptions, ExportFormat, ExportOptions, Layout, LookupOptions};
use crate::config::terms::resolve_terms;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::record::Source;

/// Collect LCSH and FAST subject-heading suggestions for a list of terms into a spreadsheet.
///
/// With no arguments, looks up the built-in 20-term list and writes
/// `assessment_results.csv` in the wide layout.
#[derive(Debug, Parser)]
#[command(name = "subject_lookup", version, about)]
pub struct Args {
    /// Search terms (processed in order). Combined with --terms-file.
    pub terms: Vec<String>,

    /// File with one search term per line; `#` starts a comment line.
    #[arg(long, value_name = "PATH")]
    pub terms_file: Option<PathBuf>,

    /// Row layout of the exported table.
    #[arg(long, value_enum, default_value_t = LayoutArg::Wide)]
    pub layout: LayoutArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Output file, or a directory when it ends in a path separator.
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Skip the terminal preview.
    #[arg(long)]
    pub no_preview: bool,

    /// More logging on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Wide,
    Long,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<LayoutArg> for Layout {
    fn from(v: LayoutArg) -> Self {
        match v {
            LayoutArg::Wide => Layout::Wide,
            LayoutArg::Long => Layout::Long,
        }
    }
}

impl From<FormatArg> for ExportFormat {
    fn from(v: FormatArg) -> Self {
        match v {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn into_options(self) -> Result<AppOptions> {
        if self.timeout == 0 {
            return Err(Error::InvalidOption("--timeout must be at least 1 second".into()));
        }
        let terms = resolve_terms(&self.terms, self.terms_file.as_deref())?;

        Ok(AppOptions {
            lookup: LookupOptions {
                terms,
                timeout: Duration::from_secs(self.timeout),
                ..LookupOptions::default()
            },
            export: ExportOptions {
                layout: self.layout.into(),
                format: self.format.into(),
                out: self.out,
                preview: !self.no_preview,
            },
        })
    }
}

/// Progress sink that narrates to stdout; failures go to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    pub failures: usize,
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_failed(&mut self, term: &str, source: Source, msg: &str) {
        self.failures += 1;
        eprintln!("Error searching {source} for '{term}': {msg}");
    }
}

/// Batch run from parsed arguments.
pub fn run(args: Args) -> Result<()> {
    crate::log::init(args.verbose);
    let opts = args.into_options()?;

    let mut progress = ConsoleProgress::default();
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    if let Some(preview) = &summary.preview {
        println!("\n--- Assessment Spreadsheet Preview ---");
        print!("{preview}");
    }
    println!(
        "\nWrote {} rows x {} columns to '{}' ({} failed lookups).",
        summary.rows,
        summary.columns,
        summary.path.display(),
        progress.failures
    );
    println!("\nDone.");
    Ok(())
}

/* ---------------- Connectivity check ---------------- */

/// Check FAST search and record lookup endpoints.
#[derive(Debug, Parser)]
#[command(name = "fast_check", version, about)]
pub struct CheckArgs {
    /// Term to search for.
    #[arg(default_value = CHECK_TERM)]
    pub term: String,

    /// FAST record identifier to fetch.
    #[arg(long, default_value = CHECK_RECORD_ID)]
    pub id: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run the check and print both results. A failing step is printed, not returned.
pub fn run_check(args: CheckArgs) -> Result<()> {
    crate::log::init(args.verbose);
    println!("=== FAST API Connectivity Test ===\n");

    let report = crate::check::run(&args.term, &args.id, Duration::from_secs(args.timeout.max(1)))?;

    println!("--- 1. Search '{}' ---", args.term);
    match &report.search {
        Ok(snippet) => println!("Search successful!\nResponse Snippet:\n{snippet}"),
        Err(e) => println!("Search failed: {e}"),
    }

    println!("\n{}\n", "-".repeat(30));

    println!("--- 2. Record Lookup {} ---", args.id);
    match &report.record {
        Ok(snippet) => println!("Lookup successful!\nResponse Snippet (XML):\n{snippet}"),
        Err(e) => println!("Lookup failed: {e}"),
    }

    println!("\n=== Test Complete ===");
    Ok(())
}
