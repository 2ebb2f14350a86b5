// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui::{self, Color32};
use tracing::{error, info};

use crate::{
    config::{options::ApiConfig, state::AppState},
    export::{self, Delimited},
    fetch::{Fetcher, HttpFetcher},
    table::Table,
};

use super::{
    components::{action_bar::{self, BarAction}, data_table, filter_panel, tabs},
    loader::{LoadState, Loader},
    pages::Page,
    progress::GuiProgress,
    router,
    selection::RowSelection,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Cricket Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default(), connect())))),
    )?;
    Ok(())
}

/// Build the HTTP fetcher from env / cric_dash.toml. The error text is shown in
/// place of every table so the app still opens without a key.
fn connect() -> Result<Box<dyn Fetcher>, String> {
    let cfg = ApiConfig::load(None).map_err(|e| e.to_string())?;
    let fetcher = HttpFetcher::new(&cfg).map_err(|e| e.to_string())?;
    info!("Init: base_url={}", cfg.base_url);
    Ok(Box::new(fetcher))
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // per-session cache + remembered failures
    pub loader: Loader,

    pub fetcher: Option<Box<dyn Fetcher>>,
    pub setup_error: Option<String>,

    // status line; GuiProgress writes here
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, fetcher: Result<Box<dyn Fetcher>, String>) -> Self {
        let (fetcher, setup_error) = match fetcher {
            Ok(f) => (Some(f), None),
            Err(e) => {
                error!("Init: no API client: {e}");
                (None, Some(e))
            }
        };
        Self {
            state,
            loader: Loader::new(),
            fetcher,
            setup_error,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Load (or reuse) the current page's table and draw it.
    fn draw_body(&mut self, ui: &mut egui::Ui, action: BarAction) {
        let page = self.current_page();
        let kind = page.kind();

        if action == BarAction::Refresh {
            info!("UI: Refresh {kind}");
            self.loader.refresh(kind);
        }

        let query = self.state.query_for(kind);
        let headers = self.state.gui.copy_headers;
        let mut gp = GuiProgress::new(Arc::clone(&self.status));

        let copied = match self.loader.ensure(self.fetcher.as_deref(), query, Some(&mut gp)) {
            LoadState::Ready { table, selection } => {
                let copied = (action == BarAction::Copy).then(|| {
                    clipboard_text(Some((table, &*selection)), headers).map(|(txt, rows)| {
                        ui.ctx().copy_text(txt);
                        rows
                    })
                });
                if table.is_empty() {
                    ui.label("No results for these filters.");
                } else {
                    if !selection.is_empty() {
                        ui.label(format!("{} of {} rows selected", selection.len(), table.row_count()));
                    }
                    data_table::draw(ui, page, table, selection);
                }
                copied
            }
            LoadState::Failed(e) => {
                ui.colored_label(Color32::RED, page.error_text());
                ui.label(e.user_message());
                (action == BarAction::Copy).then(|| clipboard_text(None, headers).map(|(_, rows)| rows))
            }
            LoadState::Unavailable => {
                let msg = self.setup_error.as_deref().unwrap_or("No API client configured");
                ui.colored_label(Color32::RED, msg);
                (action == BarAction::Copy).then(|| clipboard_text(None, headers).map(|(_, rows)| rows))
            }
        };

        match copied {
            Some(Ok(rows)) => {
                info!("UI: Copy page={kind} rows={rows} headers={headers}");
                self.status(format!("Copied {rows} rows to clipboard"));
            }
            Some(Err(CopyError::Nothing)) => {
                info!("UI: Copy clicked, but there's nothing to copy");
                self.status("Nothing to copy");
            }
            Some(Err(CopyError::Export(e))) => {
                error!("UI: Copy failed: {e}");
                self.status("Copy failed");
            }
            None => {}
        }
    }
}

#[derive(Debug)]
enum CopyError {
    Nothing,
    Export(csv::Error),
}

/// TSV for the clipboard: the selected rows when any are selected, else the
/// whole table. Returns the text and the number of rows in it. `None` means no
/// table is loaded (failed or unavailable).
fn clipboard_text(
    ready: Option<(&Table, &RowSelection)>,
    headers: bool,
) -> Result<(String, usize), CopyError> {
    let Some((table, selection)) = ready.filter(|(t, _)| !t.is_empty()) else {
        return Err(CopyError::Nothing);
    };
    let picked;
    let out = if selection.is_empty() {
        table
    } else {
        picked = table.subset(selection.iter());
        &picked
    };
    let txt = export::to_delimited_string(out, Delimited::Tsv, headers).map_err(CopyError::Export)?;
    Ok((txt, out.row_count()))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::draw(ui, self);

            ui.separator();

            ui.heading(self.current_page().heading(&self.state));
            let action = action_bar::draw(ui, self);

            ui.separator();

            self.draw_body(ui, action);
        });
    }
}
