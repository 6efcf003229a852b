// src/config/terms.rs
//
// Search-term lists: CLI positionals, a terms file, or the built-in list.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use super::consts::DEFAULT_TERMS;

/// Parse a terms file: one term per line, `#` comments and blank lines skipped.
pub fn parse_terms(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_terms_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Terms {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_terms(&text))
}

/// Merge positionals and file terms (positionals first). Blank entries are dropped.
/// Nothing given at all → the default list.
pub fn resolve_terms(positional: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut terms: Vec<String> = positional
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(path) = file {
        terms.extend(load_terms_file(path)?);
    }

    if terms.is_empty() && positional.is_empty() && file.is_none() {
        terms = DEFAULT_TERMS.iter().map(|t| t.to_string()).collect();
    }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let text = "# topics\nabuse\n\n  climate change  \r\n#gender\nhistory";
        assert_eq!(parse_terms(text), vec!["abuse", "climate change", "history"]);
    }

    #[test]
    fn no_input_falls_back_to_defaults() {
        let terms = resolve_terms(&[], None).unwrap();
        assert_eq!(terms.len(), DEFAULT_TERMS.len());
    }

    #[test]
    fn blank_positionals_are_dropped_without_fallback() {
        let terms = resolve_terms(&["  ".to_string(), "poverty".to_string()], None).unwrap();
        assert_eq!(terms, vec!["poverty"]);

        // explicitly blank input is an empty batch, not the default list
        let terms = resolve_terms(&[" ".to_string()], None).unwrap();
        assert!(terms.is_empty());
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = resolve_terms(&[], Some(Path::new("definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
