// src/table.rs
//! Normalized Table: ordered columns plus rows of scalar cells.
//!
//! Every row is exactly as wide as the column list. The only way to add a row
//! is `push_row`, which refuses anything else, so a `Table` that exists is a
//! `Table` that holds the invariant.

use std::fmt;

use crate::error::ShapeError;

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing ".0" so 50.0 does not render as 50
            Cell::Float(v) => write!(f, "{v:?}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Null => Ok(()),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::Bool(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(s!(v))
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_row_capacity(mut self, n: usize) -> Self {
        self.rows.reserve(n);
        self
    }

    /// Append a row. Rejects rows whose width differs from the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), ShapeError> {
        if row.len() != self.columns.len() {
            return Err(ShapeError::new(
                format!("row[{}]", self.rows.len()),
                format!("{} cells, found {}", self.columns.len(), row.len()),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] { &self.columns }
    pub fn rows(&self) -> &[Vec<Cell>] { &self.rows }
    pub fn row(&self, i: usize) -> Option<&[Cell]> { self.rows.get(i).map(|r| r.as_slice()) }

    pub fn column_count(&self) -> usize { self.columns.len() }
    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Zero rows. Still a valid result, not a failure.
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |r| r.get(idx))
    }

    /// Same columns, only the rows at `indices` (in the order given).
    /// Out-of-range indices are skipped.
    pub fn subset<I>(&self, indices: I) -> Table
    where
        I: IntoIterator<Item = usize>,
    {
        Table {
            columns: self.columns.clone(),
            rows: indices
                .into_iter()
                .filter_map(|i| self.rows.get(i).cloned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let mut t = Table::new(["A", "B"]);
        t.push_row(cells![1, "x"]).unwrap();

        let err = t.push_row(cells![2]).unwrap_err();
        assert_eq!(err.path, "row[1]");
        assert_eq!(t.row_count(), 1);
    }

    #[test]
    fn column_iteration() {
        let mut t = Table::new(["Rank", "Player"]);
        t.push_row(cells![1, "P1"]).unwrap();
        t.push_row(cells![2, "P2"]).unwrap();

        let names: Vec<String> = t.column(1).map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["P1", "P2"]);
        assert_eq!(t.column(5).count(), 0);
    }

    #[test]
    fn subset_keeps_columns_and_skips_out_of_range() {
        let mut t = Table::new(["Rank", "Player"]);
        for (i, p) in ["P1", "P2", "P3"].into_iter().enumerate() {
            t.push_row(cells![i as i64 + 1, p]).unwrap();
        }

        let sub = t.subset([2, 0, 9]);
        assert_eq!(sub.columns(), t.columns());
        assert_eq!(sub.rows(), &[cells![3, "P3"], cells![1, "P1"]]);
        assert!(t.subset([]).is_empty());
    }

    #[test]
    fn cells_render_plainly() {
        assert_eq!(Cell::from(50.0).to_string(), "50.0");
        assert_eq!(Cell::from(7).to_string(), "7");
        assert_eq!(Cell::from("t1").to_string(), "t1");
        assert_eq!(Cell::Null.to_string(), "");
    }
}
