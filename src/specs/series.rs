// src/specs/series.rs

use serde_json::Value;

use crate::core::json::{array_field, field, index_path, key_path, scalar_field, to_label};
use crate::error::{MalformedPayload, ShapeError};
use crate::query::ResourceKind;
use crate::table::{Cell, Table};

pub const COLUMNS: [&str; 3] = ["Series ID", "Series Name", "Dates"];

/// Flatten date groups into one row per (series, date group).
/// Row order: date-group order, then series order within the group.
pub fn normalize(payload: &Value) -> Result<Table, MalformedPayload> {
    parse(payload).map_err(|source| MalformedPayload {
        kind: ResourceKind::SeriesCatalog,
        source,
    })
}

/// Split out for unit tests.
pub fn parse(payload: &Value) -> Result<Table, ShapeError> {
    let groups = array_field(payload, "seriesMapProto", "")?;
    let mut table = Table::new(COLUMNS);

    for (gi, group) in groups.iter().enumerate() {
        let at = index_path("seriesMapProto", gi);
        let date = scalar_field(group, "date", &at)?;
        let series = array_field(group, "series", &at)?;

        let series_at = key_path(&at, "series");
        for (si, entry) in series.iter().enumerate() {
            let eat = index_path(&series_at, si);
            // Ids are shown as text regardless of how the service encodes them
            let id = to_label(field(entry, "id", &eat)?, &key_path(&eat, "id"))?;
            let name = scalar_field(entry, "name", &eat)?;
            table.push_row(vec![Cell::Text(id), name, date.clone()])?;
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_row_per_series_in_payload_order() {
        let payload = json!({
            "seriesMapProto": [
                { "date": "JULY 2024", "series": [
                    { "id": 7607, "name": "Sri Lanka tour of India, 2024" },
                    { "id": 7572, "name": "Zimbabwe tour of India, 2024" }
                ]},
                { "date": "AUGUST 2024", "series": [
                    { "id": "8102", "name": "England tour of Ireland" }
                ]}
            ]
        });

        let t = parse(&payload).unwrap();
        assert_eq!(t.columns(), &COLUMNS);
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.rows()[0], cells!["7607", "Sri Lanka tour of India, 2024", "JULY 2024"]);
        assert_eq!(t.rows()[1], cells!["7572", "Zimbabwe tour of India, 2024", "JULY 2024"]);
        assert_eq!(t.rows()[2], cells!["8102", "England tour of Ireland", "AUGUST 2024"]);
    }

    #[test]
    fn empty_group_contributes_no_rows() {
        let payload = json!({
            "seriesMapProto": [
                { "date": "JULY 2024", "series": [] },
                { "date": "AUGUST 2024", "series": [ { "id": 1, "name": "S" } ] }
            ]
        });
        let t = parse(&payload).unwrap();
        assert_eq!(t.row_count(), 1);
        assert_eq!(t.rows()[0][2], Cell::from("AUGUST 2024"));
    }

    #[test]
    fn empty_catalog_is_an_empty_table() {
        let t = parse(&json!({ "seriesMapProto": [] })).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.column_count(), 3);
    }

    #[test]
    fn missing_series_key_is_malformed() {
        let payload = json!({ "seriesMapProto": [ { "date": "JULY 2024" } ] });
        let err = normalize(&payload).unwrap_err();
        assert_eq!(err.kind, ResourceKind::SeriesCatalog);
        assert_eq!(err.source.path, "seriesMapProto[0].series");
    }

    #[test]
    fn missing_top_level_key_is_malformed() {
        let err = normalize(&json!({ "appIndex": {} })).unwrap_err();
        assert_eq!(err.source.path, "seriesMapProto");
    }
}
