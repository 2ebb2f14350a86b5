// src/session/mod.rs
//
// Selection State: one explicit context per user session.
//
// A `Session` owns the live filters and one cache slot per resource kind.
// Nothing here is global; two sessions never observe each other's state.

pub mod policy;
pub mod slot;

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info, warn};

pub use policy::Invalidation;
pub use slot::{CacheEntry, CacheSlot, SlotState};

use crate::{
    error::DashError,
    fetch::Fetcher,
    progress::Progress,
    query::{ResourceKind, ResourceQuery},
    specs,
    table::Table,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    Empty,
    Populated { rows: usize, age: Duration },
}

#[derive(Debug)]
pub struct Session {
    live: HashMap<ResourceKind, ResourceQuery>,
    slots: HashMap<ResourceKind, CacheSlot>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// All kinds start Empty with their default filters.
    pub fn new() -> Self {
        let live = ResourceKind::ALL
            .into_iter()
            .map(|k| (k, ResourceQuery::default_for(k)))
            .collect();
        let slots = ResourceKind::ALL
            .into_iter()
            .map(|k| (k, CacheSlot::default()))
            .collect();
        Self { live, slots }
    }

    /// Current filters for `kind`.
    pub fn live(&self, kind: ResourceKind) -> Option<&ResourceQuery> {
        self.live.get(&kind)
    }

    /// Record new live filters and run the policy for that kind only.
    pub fn select(&mut self, query: ResourceQuery) -> Invalidation {
        let kind = query.kind();
        self.live.insert(kind, query);
        self.invalidate(kind)
    }

    /// Run the policy for `kind` against its live filters. Idempotent.
    pub fn invalidate(&mut self, kind: ResourceKind) -> Invalidation {
        let Some(live) = self.live.get(&kind) else {
            return Invalidation::Empty;
        };
        let outcome = self.slots.entry(kind).or_default().apply_policy(live);
        if let Invalidation::Cleared { changed } = &outcome {
            info!("Cache: cleared {kind} (changed: {})", changed.join(", "));
        }
        outcome
    }

    /// Drop the cached table for `kind` regardless of filters.
    pub fn refresh(&mut self, kind: ResourceKind) -> bool {
        let dropped = self.slots.entry(kind).or_default().clear();
        if dropped {
            info!("Cache: refresh {kind}");
        }
        dropped
    }

    fn entry(&self, kind: ResourceKind) -> Option<&CacheEntry> {
        self.slots.get(&kind).and_then(CacheSlot::entry)
    }

    pub fn cached(&self, kind: ResourceKind) -> Option<&Table> {
        self.entry(kind).map(CacheEntry::table)
    }

    pub fn status(&self, kind: ResourceKind) -> SlotStatus {
        match self.slots.get(&kind).map(CacheSlot::state) {
            Some(SlotState::Populated(entry)) => SlotStatus::Populated {
                rows: entry.table().row_count(),
                age: entry.age(),
            },
            Some(SlotState::Empty) | None => SlotStatus::Empty,
        }
    }

    /// select → cache hit, or fetch → normalize → populate.
    ///
    /// On failure the slot stays Empty and the typed error is returned, so the
    /// next call for the same filters goes back to the network.
    pub fn get_table<F>(
        &mut self,
        fetcher: &F,
        query: ResourceQuery,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<&Table, DashError>
    where
        F: Fetcher + ?Sized,
    {
        let kind = query.kind();
        self.select(query.clone());

        let slot = self.slots.entry(kind).or_default();
        if slot.is_populated() {
            debug!("Cache: hit {kind}");
        }

        let entry = slot.get_or_try_populate(|| {
            if let Some(p) = progress.as_deref_mut() {
                p.begin(&query);
                p.log(&format!("Fetching {query}"));
            }
            let outcome = fetch_table(fetcher, &query);
            if let Some(p) = progress.as_deref_mut() {
                match &outcome {
                    Ok(table) => p.item_done(kind, table.row_count()),
                    Err(e) => p.item_failed(kind, e),
                }
            }
            outcome.map(|table| CacheEntry::new(query, table))
        })?;

        Ok(entry.table())
    }
}

fn fetch_table<F>(fetcher: &F, query: &ResourceQuery) -> Result<Table, DashError>
where
    F: Fetcher + ?Sized,
{
    let kind = query.kind();
    let payload = fetcher.fetch(query).inspect_err(|e| {
        warn!("Fetch: {kind} failed: {e}");
    })?;
    let table = specs::normalize(kind, &payload).inspect_err(|e| {
        warn!("Fetch: {kind} payload rejected: {e}");
    })?;
    info!(
        "Fetch: {kind} ok, {} rows x {} cols",
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::RecordFilter;

    #[test]
    fn new_session_is_empty_with_defaults() {
        let session = Session::new();
        for kind in ResourceKind::ALL {
            assert_eq!(session.status(kind), SlotStatus::Empty);
            assert_eq!(session.live(kind), Some(&ResourceQuery::default_for(kind)));
        }
    }

    #[test]
    fn select_on_empty_slot_is_a_noop() {
        let mut session = Session::new();
        let q = ResourceQuery::from(RecordFilter { stats_type: s!("mostWickets") });
        assert_eq!(session.select(q.clone()), Invalidation::Empty);
        assert_eq!(session.live(ResourceKind::Records), Some(&q));
    }

    #[test]
    fn refresh_on_empty_slot_reports_nothing_dropped() {
        let mut session = Session::new();
        assert!(!session.refresh(ResourceKind::Rankings));
        assert_eq!(session.invalidate(ResourceKind::Rankings), Invalidation::Empty);
    }
}
