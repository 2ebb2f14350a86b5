// src/session/policy.rs
//
// Invalidation Policy: compare a cached entry's filter snapshot with the live
// filters of the same kind. Pure; the slot applies the decision.

use crate::query::ResourceQuery;

/// Outcome of running the policy for one resource kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invalidation {
    /// Nothing was cached.
    Empty,
    /// Snapshot matches the live filters; entry kept.
    Fresh,
    /// Snapshot diverged on these tracked fields; entry removed.
    Cleared { changed: Vec<&'static str> },
}

impl Invalidation {
    pub fn cleared(&self) -> bool {
        matches!(self, Invalidation::Cleared { .. })
    }
}

/// Tracked fields whose value differs between `snapshot` and `live`.
/// A kind mismatch counts every field of `live` as changed.
pub fn drifted_fields(snapshot: &ResourceQuery, live: &ResourceQuery) -> Vec<&'static str> {
    if snapshot.kind() != live.kind() {
        return live.tracked_fields().into_iter().map(|(name, _)| name).collect();
    }
    snapshot
        .tracked_fields()
        .into_iter()
        .zip(live.tracked_fields())
        .filter(|((_, was), (_, now))| was != now)
        .map(|((name, _), _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{RankingFilter, RecordFilter, SeriesFilter};

    #[test]
    fn identical_filters_do_not_drift() {
        let q = ResourceQuery::from(RankingFilter::default());
        assert!(drifted_fields(&q, &q.clone()).is_empty());
    }

    #[test]
    fn reports_each_changed_field_in_order() {
        let was = ResourceQuery::from(RankingFilter::default());
        let now = ResourceQuery::from(RankingFilter {
            format_type: s!("odi"),
            is_women: s!("0"),
            category: s!("teams"),
        });
        assert_eq!(drifted_fields(&was, &now), vec!["format_type", "category"]);
    }

    #[test]
    fn kind_mismatch_counts_as_full_drift() {
        let was = ResourceQuery::from(SeriesFilter::default());
        let now = ResourceQuery::from(RecordFilter::default());
        assert_eq!(drifted_fields(&was, &now), vec!["stats_type"]);
    }
}
