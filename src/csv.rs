// src/csv.rs
use std::io::{self, Write};

use crate::table::{Cell, DataSet};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_field<W: Write>(w: &mut W, field: &str, sep: char) -> io::Result<()> {
    if needs_quotes(field, sep) {
        write!(w, "\"{}\"", field.replace('"', "\"\""))
    } else {
        write!(w, "{}", field)
    }
}

/// Write a header row.
pub fn write_header<W: Write>(mut w: W, headers: &[String], sep: char) -> io::Result<()> {
    for (i, h) in headers.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", sep)?;
        }
        write_field(&mut w, h, sep)?;
    }
    writeln!(w)
}

/// Write one data row. Absent cells become empty fields.
pub fn write_row<W: Write>(mut w: W, row: &[Cell], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", sep)?;
        }
        if let Some(v) = cell {
            write_field(&mut w, v, sep)?;
        }
    }
    writeln!(w)
}

/// Header + every row to any writer.
pub fn write_table<W: Write>(mut w: W, ds: &DataSet, sep: char) -> io::Result<()> {
    write_header(&mut w, &ds.headers, sep)?;
    for r in &ds.rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Whole table as one string (header line included).
pub fn to_export_string(ds: &DataSet, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, ds, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
