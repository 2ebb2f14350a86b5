// src/session/slot.rs
//
// Per-kind cache state machine:
//
//   Empty ──populate──▶ Populated ──drift / refresh──▶ Empty ──▶ …
//
// There is no Populated → Populated edge. A table and the filter snapshot it was
// fetched with are only ever stored, and dropped, together.

use std::time::{Duration, Instant};

use super::policy::{self, Invalidation};
use crate::{query::ResourceQuery, table::Table};

#[derive(Clone, Debug)]
pub struct CacheEntry {
    table: Table,
    snapshot: ResourceQuery,
    fetched_at: Instant,
}

impl CacheEntry {
    pub fn new(snapshot: ResourceQuery, table: Table) -> Self {
        Self { table, snapshot, fetched_at: Instant::now() }
    }

    pub fn table(&self) -> &Table { &self.table }
    pub fn age(&self) -> Duration { self.fetched_at.elapsed() }
}

/// Read-only view of a slot's state.
#[derive(Clone, Copy, Debug)]
pub enum SlotState<'a> {
    Empty,
    Populated(&'a CacheEntry),
}

#[derive(Clone, Debug, Default)]
pub struct CacheSlot {
    entry: Option<CacheEntry>,
}

impl CacheSlot {
    pub fn state(&self) -> SlotState<'_> {
        match &self.entry {
            Some(entry) => SlotState::Populated(entry),
            None => SlotState::Empty,
        }
    }

    pub fn is_populated(&self) -> bool {
        self.entry.is_some()
    }

    pub fn entry(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }

    /// Empty → Populated using `fill`; a populated slot is returned as is.
    /// When `fill` fails the slot stays Empty.
    pub fn get_or_try_populate<E, F>(&mut self, fill: F) -> Result<&CacheEntry, E>
    where
        F: FnOnce() -> Result<CacheEntry, E>,
    {
        match &mut self.entry {
            Some(entry) => Ok(&*entry),
            empty @ None => Ok(&*empty.insert(fill()?)),
        }
    }

    /// Populated → Empty when `live` diverges from the stored snapshot.
    pub fn apply_policy(&mut self, live: &ResourceQuery) -> Invalidation {
        let Some(entry) = &self.entry else {
            return Invalidation::Empty;
        };
        let changed = policy::drifted_fields(&entry.snapshot, live);
        if changed.is_empty() {
            Invalidation::Fresh
        } else {
            self.entry = None;
            Invalidation::Cleared { changed }
        }
    }

    /// Unconditional Populated → Empty. Returns whether anything was dropped.
    pub fn clear(&mut self) -> bool {
        self.entry.take().is_some()
    }
}
