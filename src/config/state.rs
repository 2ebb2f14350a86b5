// src/config/state.rs
use crate::query::{RankingFilter, RecordFilter, ResourceKind, ResourceQuery, SeriesFilter};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Copy button -> include the header line
    pub copy_headers: bool,

    /// Records page free-text box, committed on Enter
    pub stats_draft: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            copy_headers: true,
            stats_draft: RecordFilter::default().stats_type,
        }
    }
}

/// Live filter values as edited in the side panel, plus GUI-only bits.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub series: SeriesFilter,
    pub rankings: RankingFilter,
    pub records: RecordFilter,
    pub gui: GuiState,
}

impl AppState {
    pub fn query_for(&self, kind: ResourceKind) -> ResourceQuery {
        match kind {
            ResourceKind::SeriesCatalog => self.series.clone().into(),
            ResourceKind::Rankings => self.rankings.clone().into(),
            ResourceKind::Records => self.records.clone().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_queries_match_session_defaults() {
        let state = AppState::default();
        for kind in ResourceKind::ALL {
            assert_eq!(state.query_for(kind), ResourceQuery::default_for(kind));
        }
    }
}
