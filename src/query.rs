// src/query.rs
//
// What can be asked of the remote service.
//
// A `ResourceQuery` is one immutable request: a resource kind plus its filter
// values. The same value doubles as the Filter State snapshot stored next to a
// cached table, so the invalidation policy compares like with like.

use std::fmt;

use crate::config::consts::{RANKINGS_PATH, RECORDS_PATH, SERIES_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    SeriesCatalog,
    Rankings,
    Records,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::SeriesCatalog,
        ResourceKind::Rankings,
        ResourceKind::Records,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::SeriesCatalog => "series",
            ResourceKind::Rankings => "rankings",
            ResourceKind::Records => "records",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesFilter {
    pub series_type: String,
}

impl Default for SeriesFilter {
    fn default() -> Self {
        Self { series_type: s!("international") }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingFilter {
    pub format_type: String,
    /// "0" for men, "1" for women (the service's own encoding).
    pub is_women: String,
    pub category: String,
}

impl Default for RankingFilter {
    fn default() -> Self {
        Self {
            format_type: s!("test"),
            is_women: s!("0"),
            category: s!("batsmen"),
        }
    }
}

impl RankingFilter {
    pub fn gender_label(&self) -> &'static str {
        if self.is_women == "0" { "men" } else { "women" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFilter {
    pub stats_type: String,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self { stats_type: s!("mostRuns") }
    }
}

/// Relative path plus query string pairs, ready for the HTTP layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub params: Vec<(&'static str, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceQuery {
    SeriesCatalog(SeriesFilter),
    Rankings(RankingFilter),
    Records(RecordFilter),
}

impl ResourceQuery {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceQuery::SeriesCatalog(_) => ResourceKind::SeriesCatalog,
            ResourceQuery::Rankings(_) => ResourceKind::Rankings,
            ResourceQuery::Records(_) => ResourceKind::Records,
        }
    }

    /// Default filters for a kind (the dashboard's initial selections).
    pub fn default_for(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::SeriesCatalog => SeriesFilter::default().into(),
            ResourceKind::Rankings => RankingFilter::default().into(),
            ResourceKind::Records => RecordFilter::default().into(),
        }
    }

    /// Filter name → value, in a fixed order per kind.
    pub fn tracked_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            ResourceQuery::SeriesCatalog(f) => vec![("series_type", f.series_type.as_str())],
            ResourceQuery::Rankings(f) => vec![
                ("format_type", f.format_type.as_str()),
                ("is_women", f.is_women.as_str()),
                ("category", f.category.as_str()),
            ],
            ResourceQuery::Records(f) => vec![("stats_type", f.stats_type.as_str())],
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            ResourceQuery::SeriesCatalog(f) => Endpoint {
                path: format!("{}/{}", SERIES_PATH, f.series_type),
                params: Vec::new(),
            },
            ResourceQuery::Rankings(f) => {
                let mut params = vec![("formatType", f.format_type.clone())];
                // The service treats an absent flag as "men"; only send it for women.
                if f.is_women != "0" {
                    params.push(("isWomen", f.is_women.clone()));
                }
                Endpoint {
                    path: format!("{}/{}", RANKINGS_PATH, f.category),
                    params,
                }
            }
            ResourceQuery::Records(f) => Endpoint {
                path: s!(RECORDS_PATH),
                params: vec![("statsType", f.stats_type.clone())],
            },
        }
    }
}

impl fmt::Display for ResourceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        for (i, (name, value)) in self.tracked_fields().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}

impl From<SeriesFilter> for ResourceQuery {
    fn from(f: SeriesFilter) -> Self {
        ResourceQuery::SeriesCatalog(f)
    }
}

impl From<RankingFilter> for ResourceQuery {
    fn from(f: RankingFilter) -> Self {
        ResourceQuery::Rankings(f)
    }
}

impl From<RecordFilter> for ResourceQuery {
    fn from(f: RecordFilter) -> Self {
        ResourceQuery::Records(f)
    }
}
