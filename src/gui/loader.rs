// src/gui/loader.rs
//
// Frame-driven loading on top of a Session.
//
// `update()` runs every frame, so a failed fetch must not be retried on the
// next one. The failing query is remembered per kind until the filters move
// away from it or the user presses Refresh.
//
// Row selections live here too: they index into the cached table, so they are
// dropped whenever that table is invalidated or refreshed.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::DashError,
    fetch::Fetcher,
    progress::Progress,
    query::{ResourceKind, ResourceQuery},
    session::{Session, SlotStatus},
    table::Table,
};

use super::selection::RowSelection;

pub enum LoadState<'a> {
    Ready { table: &'a Table, selection: &'a mut RowSelection },
    Failed(&'a DashError),
    /// No fetcher configured (e.g. missing API key).
    Unavailable,
}

#[derive(Default)]
pub struct Loader {
    session: Session,
    failures: HashMap<ResourceKind, (ResourceQuery, DashError)>,
    selections: HashMap<ResourceKind, RowSelection>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, kind: ResourceKind) -> SlotStatus {
        self.session.status(kind)
    }

    /// Cached table, remembered failure, or a fresh fetch, in that order.
    pub fn ensure<F>(
        &mut self,
        fetcher: Option<&F>,
        query: ResourceQuery,
        progress: Option<&mut dyn Progress>,
    ) -> LoadState<'_>
    where
        F: Fetcher + ?Sized,
    {
        let kind = query.kind();
        if self.session.select(query.clone()).cleared() {
            debug!("UI: {kind} filters changed, selection dropped");
            self.selections.remove(&kind);
        }

        if self.failures.get(&kind).is_some_and(|(failed, _)| *failed != query) {
            self.failures.remove(&kind);
        }

        if self.session.cached(kind).is_none() && !self.failures.contains_key(&kind) {
            let Some(fetcher) = fetcher else {
                return LoadState::Unavailable;
            };
            if let Err(e) = self.session.get_table(fetcher, query.clone(), progress) {
                self.failures.insert(kind, (query, e));
            }
        }

        match (self.session.cached(kind), self.failures.get(&kind)) {
            (Some(table), _) => LoadState::Ready {
                table,
                selection: self.selections.entry(kind).or_default(),
            },
            (None, Some((_, e))) => LoadState::Failed(e),
            (None, None) => LoadState::Unavailable,
        }
    }

    /// Drop the cached table, its selection and any remembered failure;
    /// next `ensure` refetches.
    pub fn refresh(&mut self, kind: ResourceKind) {
        self.session.refresh(kind);
        self.failures.remove(&kind);
        self.selections.remove(&kind);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell as Counter;

    use serde_json::{Value, json};

    use super::*;
    use crate::error::{TransportFailure, TransportReason};
    use crate::gui::selection::ClickMods;
    use crate::query::RecordFilter;

    struct Flaky {
        calls: Counter<usize>,
        fail: Counter<bool>,
    }

    impl Fetcher for Flaky {
        fn fetch(&self, query: &ResourceQuery) -> Result<Value, TransportFailure> {
            self.calls.set(self.calls.get() + 1);
            if self.fail.get() {
                return Err(TransportFailure {
                    kind: query.kind(),
                    reason: TransportReason::Status,
                    status: Some(503),
                    raw_body: s!("busy"),
                    detail: s!("503 Service Unavailable"),
                });
            }
            Ok(json!({"headers": ["Player"], "values": [{"values": ["1", "A"]}]}))
        }
    }

    fn records(stats: &str) -> ResourceQuery {
        RecordFilter { stats_type: s!(stats) }.into()
    }

    #[test]
    fn failure_is_not_retried_every_frame() {
        let f = Flaky { calls: Counter::new(0), fail: Counter::new(true) };
        let mut loader = Loader::new();

        for _ in 0..5 {
            assert!(matches!(loader.ensure(Some(&f), records("mostRuns"), None), LoadState::Failed(_)));
        }
        assert_eq!(f.calls.get(), 1);
    }

    #[test]
    fn refresh_or_new_filters_retry_after_failure() {
        let f = Flaky { calls: Counter::new(0), fail: Counter::new(true) };
        let mut loader = Loader::new();
        loader.ensure(Some(&f), records("mostRuns"), None);

        f.fail.set(false);
        loader.refresh(ResourceKind::Records);
        assert!(matches!(loader.ensure(Some(&f), records("mostRuns"), None), LoadState::Ready { .. }));
        assert_eq!(f.calls.get(), 2);

        f.fail.set(true);
        assert!(matches!(loader.ensure(Some(&f), records("mostSixes"), None), LoadState::Failed(_)));
        f.fail.set(false);
        assert!(matches!(loader.ensure(Some(&f), records("mostWickets"), None), LoadState::Ready { .. }));
        assert_eq!(f.calls.get(), 4);
    }

    #[test]
    fn no_fetcher_reports_unavailable() {
        let mut loader = Loader::new();
        let none: Option<&Flaky> = None;
        assert!(matches!(loader.ensure(none, records("mostRuns"), None), LoadState::Unavailable));
    }

    fn select_rows(loader: &mut Loader, f: &Flaky, query: ResourceQuery, rows: &[usize]) {
        match loader.ensure(Some(f), query, None) {
            LoadState::Ready { selection, .. } => {
                for &ix in rows {
                    selection.click(ix, ClickMods { ctrl: true, ..ClickMods::default() });
                }
            }
            _ => panic!("expected a table"),
        }
    }

    fn selected(loader: &mut Loader, f: &Flaky, query: ResourceQuery) -> Vec<usize> {
        match loader.ensure(Some(f), query, None) {
            LoadState::Ready { selection, .. } => selection.iter().collect(),
            _ => panic!("expected a table"),
        }
    }

    #[test]
    fn selection_survives_frames_with_same_filters() {
        let f = Flaky { calls: Counter::new(0), fail: Counter::new(false) };
        let mut loader = Loader::new();
        select_rows(&mut loader, &f, records("mostRuns"), &[0]);
        assert_eq!(selected(&mut loader, &f, records("mostRuns")), vec![0]);
        assert_eq!(f.calls.get(), 1);
    }

    #[test]
    fn selection_dropped_on_filter_change_and_refresh() {
        let f = Flaky { calls: Counter::new(0), fail: Counter::new(false) };
        let mut loader = Loader::new();

        select_rows(&mut loader, &f, records("mostRuns"), &[0]);
        assert!(selected(&mut loader, &f, records("mostSixes")).is_empty());

        select_rows(&mut loader, &f, records("mostSixes"), &[0]);
        loader.refresh(ResourceKind::Records);
        assert!(selected(&mut loader, &f, records("mostSixes")).is_empty());
        assert!(matches!(loader.status(ResourceKind::Records), SlotStatus::Populated { rows: 1, .. }));
    }
}
