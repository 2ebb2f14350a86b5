// src/specs/rankings.rs

use serde_json::Value;

use crate::core::json::{array_field, index_path, scalar_field};
use crate::error::{MalformedPayload, ShapeError};
use crate::query::ResourceKind;
use crate::table::Table;

pub const COLUMNS: [&str; 7] = [
    "Player ID", "Rank No", "Player Name", "Country", "Points", "Avg", "last Updated On",
];

// Payload keys, aligned with COLUMNS
const KEYS: [&str; 7] = ["id", "rank", "name", "country", "points", "avg", "lastUpdatedOn"];

/// One row per ranked entry, payload order preserved. Values keep their JSON type.
pub fn normalize(payload: &Value) -> Result<Table, MalformedPayload> {
    parse(payload).map_err(|source| MalformedPayload {
        kind: ResourceKind::Rankings,
        source,
    })
}

pub fn parse(payload: &Value) -> Result<Table, ShapeError> {
    let entries = array_field(payload, "rank", "")?;
    let mut table = Table::new(COLUMNS).with_row_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let at = index_path("rank", i);
        let row = KEYS
            .iter()
            .map(|key| scalar_field(entry, key, &at))
            .collect::<Result<Vec<_>, _>>()?;
        table.push_row(row)?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_entry_round_trip() {
        let payload = json!({
            "rank": [
                { "id": 1, "rank": 1, "name": "A", "country": "X",
                  "points": 100, "avg": 50.0, "lastUpdatedOn": "t1" }
            ]
        });

        let t = parse(&payload).unwrap();
        assert_eq!(t.columns(), &COLUMNS);
        assert_eq!(t.rows(), &[cells![1, 1, "A", "X", 100, 50.0, "t1"]]);
    }

    #[test]
    fn keeps_payload_order_not_rank_order() {
        let entry = |id: &str, rank: &str| json!({
            "id": id, "rank": rank, "name": "n", "country": "c",
            "points": "1", "avg": "1", "lastUpdatedOn": "2024-07-01"
        });
        let payload = json!({ "rank": [entry("9", "3"), entry("4", "1"), entry("7", "2")] });

        let t = parse(&payload).unwrap();
        let ids: Vec<String> = t.column(0).map(|c| c.to_string()).collect();
        assert_eq!(ids, vec!["9", "4", "7"]);
    }

    #[test]
    fn missing_field_names_the_entry() {
        let payload = json!({
            "rank": [ { "id": 1, "rank": 1, "name": "A", "country": "X", "points": 100, "avg": 50.0 } ]
        });
        let err = normalize(&payload).unwrap_err();
        assert_eq!(err.kind, ResourceKind::Rankings);
        assert_eq!(err.source.path, "rank[0].lastUpdatedOn");
    }

    #[test]
    fn empty_rank_list_is_empty_not_malformed() {
        let t = parse(&json!({ "rank": [] })).unwrap();
        assert!(t.is_empty());
    }
}
