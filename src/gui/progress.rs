// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::{error::DashError, progress::Progress, query::{ResourceKind, ResourceQuery}};

/// Writes fetch progress into the status line shown under the table.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, query: &ResourceQuery) {
        self.set_status(format!("Fetching {query}…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, kind: ResourceKind, rows: usize) {
        self.set_status(format!("Loaded {kind}: {rows} rows"));
    }
    fn item_failed(&mut self, kind: ResourceKind, _err: &DashError) {
        self.set_status(format!("Loading {kind} failed"));
    }
}
