// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::error::{Error, Result};
use crate::table::DataSet;

/// Write the table to the path implied by `export` (header row always included).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path();
    write_table_to_path(&path, ds, export.format.delim())?;
    info!(path = %path.display(), rows = ds.len(), "export written");
    Ok(path)
}

/// Ensure parent dir exists; create/truncate file; write header + rows.
pub fn write_table_to_path(path: &Path, ds: &DataSet, sep: char) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, ds, sep)?;
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hint_needs_trailing_separator() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(looks_like_dir_hint(Path::new("out\\")));
        assert!(!looks_like_dir_hint(Path::new("out/results.csv")));
    }

    #[test]
    fn file_in_the_way_of_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = ensure_directory(&blocker).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }
}
