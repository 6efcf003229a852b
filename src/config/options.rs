// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub lookup: LookupOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    /// Processed in this order; never contains an empty string.
    pub terms: Vec<String>,
    pub timeout: Duration,
    pub fast_url: String,
    pub lcsh_url: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS.iter().map(|t| t.to_string()).collect(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            fast_url: FAST_SEARCH_URL.to_string(),
            lcsh_url: LCSH_SEARCH_URL.to_string(),
        }
    }
}

/// Row layout of the exported table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// One row per term, numbered slot columns per adapter.
    Wide,
    /// One row per record, tagged by source; all-empty columns dropped.
    Long,
}

impl Layout {
    fn default_stem(&self) -> &'static str {
        match self {
            Layout::Wide => WIDE_STEM,
            Layout::Long => LONG_STEM,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
    pub fn delim(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub layout: Layout,
    pub format: ExportFormat,
    /// User-supplied output path. `None` → `<stem>.<ext>` in the working directory.
    pub out: Option<PathBuf>,
    pub preview: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Wide,
            format: ExportFormat::Csv,
            out: None,
            preview: true,
        }
    }
}

impl ExportOptions {
    /// Final file path. A user path is kept as typed (extension included);
    /// a path ending in a separator is treated as a directory for the default file name.
    pub fn out_path(&self) -> PathBuf {
        let default_name = format!("{}.{}", self.layout.default_stem(), self.format.ext());
        match &self.out {
            None => PathBuf::from(default_name),
            Some(p) if crate::file::looks_like_dir_hint(p) || p.is_dir() => p.join(default_name),
            Some(p) => p.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_layout_and_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("assessment_results.csv"));

        export.format = ExportFormat::Tsv;
        export.layout = Layout::Long;
        assert_eq!(export.out_path(), PathBuf::from("suggestions_long.tsv"));
    }

    #[test]
    fn user_path_keeps_its_extension() {
        let export = ExportOptions {
            format: ExportFormat::Tsv,
            out: Some(PathBuf::from("out/results.txt")),
            ..ExportOptions::default()
        };
        assert_eq!(export.out_path(), PathBuf::from("out/results.txt"));
    }

    #[test]
    fn trailing_separator_means_directory() {
        let export = ExportOptions {
            out: Some(PathBuf::from("out/")),
            ..ExportOptions::default()
        };
        assert_eq!(export.out_path(), PathBuf::from("out/").join("assessment_results.csv"));
    }

    #[test]
    fn lookup_defaults_match_the_batch_script() {
        let lookup = LookupOptions::default();
        assert_eq!(lookup.terms.len(), 20);
        assert_eq!(lookup.terms[0], "abuse");
        assert_eq!(lookup.timeout, Duration::from_secs(10));
    }
}
