//! # Payload “specs” module
//!
//! One normalizer per resource kind. Each spec encodes *where the data lives in
//! the service's JSON* and *how to flatten it* into a [`Table`].
//!
//! ## What lives here
//! - **Pure functions** `&Value -> Result<Table, MalformedPayload>`; same payload,
//!   same table.
//! - **Stable column shapes** per kind (documented in each spec), so the GUI and
//!   exports can rely on them.
//! - **Loud failure**: a missing key or a non-scalar where a scalar belongs is a
//!   `MalformedPayload` naming the JSON path. No partially built tables.
//!
//! ## What does **not** live here
//! - **Network** (`fetch`) and **caching/invalidation** (`session`).
//! - **Presentation**: column widths, headings and export formats.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → Session::get_table → Fetcher::fetch (on cache miss)
//!                                ↘ specs::normalize(kind, &payload) → Table
//! ```
//!
//! ## Current specs
//! - `series` – `seriesMapProto[*].series[*]` flattened to `[Series ID, Series Name, Dates]`.
//! - `rankings` – `rank[*]` to `[Player ID, Rank No, Player Name, Country, Points, Avg, last Updated On]`.
//! - `records` – `headers` + `values[*].values` with a regenerated `Rank` column.
pub mod rankings;
pub mod records;
pub mod series;

use serde_json::Value;

use crate::{error::MalformedPayload, query::ResourceKind, table::Table};

pub fn normalize(kind: ResourceKind, payload: &Value) -> Result<Table, MalformedPayload> {
    match kind {
        ResourceKind::SeriesCatalog => series::normalize(payload),
        ResourceKind::Rankings => rankings::normalize(payload),
        ResourceKind::Records => records::normalize(payload),
    }
}
