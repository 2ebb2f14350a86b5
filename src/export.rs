// src/export.rs
//
// Table rendering for the clipboard, files and the terminal.

use std::io::Write;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell as TextCell, CellAlignment, ContentArrangement, Table as TextTable};

use crate::table::{Cell, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimited {
    Csv,
    Tsv,
}

impl Delimited {
    pub fn delimiter(self) -> u8 {
        match self {
            Delimited::Csv => b',',
            Delimited::Tsv => b'\t',
        }
    }
}

/// Stream `table` as CSV/TSV. Null cells become empty fields.
pub fn write_delimited<W: Write>(
    out: W,
    table: &Table,
    format: Delimited,
    include_headers: bool,
) -> Result<(), csv::Error> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(out);

    if include_headers {
        w.write_record(table.columns())?;
    }
    for row in table.rows() {
        w.write_record(row.iter().map(Cell::to_string))?;
    }
    w.flush()?;
    Ok(())
}

/// Whole table as one string (Copy button, `--output csv|tsv`).
pub fn to_delimited_string(
    table: &Table,
    format: Delimited,
    include_headers: bool,
) -> Result<String, csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_delimited(&mut buf, table, format, include_headers)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Boxed text table for a terminal. Numeric columns are right-aligned.
pub fn render_text(table: &Table, include_headers: bool) -> String {
    let mut out = TextTable::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    if include_headers {
        out.set_header(table.columns().iter().map(TextCell::new));
    }
    for row in table.rows() {
        out.add_row(row.iter().map(|cell| {
            let c = TextCell::new(cell);
            if cell.is_numeric() { c.set_alignment(CellAlignment::Right) } else { c }
        }));
    }
    out.to_string()
}
