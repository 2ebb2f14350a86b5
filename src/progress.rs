// src/progress.rs
use crate::{error::DashError, query::ResourceQuery, query::ResourceKind};

/// Lightweight progress reporting for fetches.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// A network fetch is about to start.
    fn begin(&mut self, _query: &ResourceQuery) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Fetch + normalize succeeded.
    fn item_done(&mut self, _kind: ResourceKind, _rows: usize) {}

    /// Fetch or normalize failed; the cache slot stays empty.
    fn item_failed(&mut self, _kind: ResourceKind, _err: &DashError) {}
}
