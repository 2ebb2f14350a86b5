// src/specs/records.rs
//
// All-time record tables ("topstats").
//
// The payload carries its own column labels in `headers` and one `values` list
// per entry. The first scalar of every entry is dropped and a 1-based `Rank`
// column is synthesized from row position instead.
//
// Two entry layouts are seen, told apart by width:
//   - id-prefixed: len(values) == len(headers) + 1. The dropped scalar is an
//     entity id; the rest lines up with `headers` one to one.
//   - placeholder: len(values) == len(headers). The first header is a row-index
//     label (e.g. "S.No") whose value is the dropped scalar; that column is kept
//     by name and left blank.
// Anything else, or a mix of both within one payload, is malformed.

use serde_json::Value;

use crate::core::json::{array_field, index_path, key_path, to_cell, to_label};
use crate::error::{MalformedPayload, ShapeError};
use crate::query::ResourceKind;
use crate::table::{Cell, Table};

pub const RANK_COLUMN: &str = "Rank";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    IdPrefixed,
    Placeholder,
}

/// Classify an entry by how many scalars remain after the leading one.
pub fn detect_layout(remaining: usize, headers: usize) -> Option<Layout> {
    if remaining == headers {
        Some(Layout::IdPrefixed)
    } else if headers > 0 && remaining + 1 == headers {
        Some(Layout::Placeholder)
    } else {
        None
    }
}

pub fn normalize(payload: &Value) -> Result<Table, MalformedPayload> {
    parse(payload).map_err(|source| MalformedPayload {
        kind: ResourceKind::Records,
        source,
    })
}

pub fn parse(payload: &Value) -> Result<Table, ShapeError> {
    let headers = array_field(payload, "headers", "")?
        .iter()
        .enumerate()
        .map(|(i, h)| to_label(h, &index_path("headers", i)))
        .collect::<Result<Vec<_>, _>>()?;
    let entries = array_field(payload, "values", "")?;

    let header_count = headers.len();
    let mut columns = Vec::with_capacity(header_count + 1);
    columns.push(s!(RANK_COLUMN));
    columns.extend(headers);
    let mut table = Table::new(columns).with_row_capacity(entries.len());

    let mut seen: Option<Layout> = None;

    for (i, entry) in entries.iter().enumerate() {
        let at = index_path("values", i);
        let values_at = key_path(&at, "values");
        let values = array_field(entry, "values", &at)?;

        let (_dropped, rest) = values
            .split_first()
            .ok_or_else(|| ShapeError::new(values_at.as_str(), "at least one value"))?;

        let layout = detect_layout(rest.len(), header_count).ok_or_else(|| {
            ShapeError::new(
                values_at.as_str(),
                format!(
                    "{} or {} values after the leading one, found {}",
                    header_count,
                    header_count.saturating_sub(1),
                    rest.len()
                ),
            )
        })?;
        match seen {
            None => seen = Some(layout),
            Some(prev) if prev != layout => {
                return Err(ShapeError::new(
                    values_at,
                    format!("{:?} layout like the entries before it", prev),
                ));
            }
            Some(_) => {}
        }

        let mut row = Vec::with_capacity(table.column_count());
        row.push(Cell::Int(i as i64 + 1));
        if layout == Layout::Placeholder {
            row.push(Cell::Null);
        }
        for (j, v) in rest.iter().enumerate() {
            row.push(to_cell(v, &index_path(&values_at, j + 1))?);
        }
        table.push_row(row)?;
    }

    Ok(table)
}
