// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        mpsc::{Receiver, TryRecvError},
    },
    time::Instant,
};

use eframe::egui;

use crate::{
    config::{consts::CONFIG_FILE, file as config_file, state::AppState},
    debounce::Debouncer,
    loader::Loaded,
    share::ShareState,
    store::CatalogStore,
};

/// What the window starts with: options from disk and an optional shared link.
pub struct Launch {
    pub config_path: PathBuf,
    pub share: Option<ShareState>,
}

impl Default for Launch {
    fn default() -> Self {
        Self { config_path: PathBuf::from(CONFIG_FILE), share: None }
    }
}

pub fn run(options: eframe::NativeOptions, launch: Launch) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "ARC Raiders Items",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, launch)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub config_path: PathBuf,

    // catalog + filtered view + selection
    pub store: CatalogStore,

    // search box → debounced query
    pub debounce: Debouncer,

    // share link for the current query/selection
    pub link: String,
    // shared state waiting for the catalog to arrive
    pub pending_share: Option<ShareState>,

    // export path text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // keyboard moved the selection; table should scroll to it
    pub scroll_to_selected: bool,

    // status/progress (loader thread writes here)
    pub status: Arc<Mutex<String>>,
    pub loading: Option<Receiver<Loaded>>,
}

impl App {
    pub fn new(ctx: &egui::Context, launch: Launch) -> Self {
        let options = config_file::load_or_default(&launch.config_path);
        let mut state = AppState::with_options(options);

        if let Some(share) = &launch.share {
            state.gui.search_text = share.query.clone();
        }

        let debounce = Debouncer::new(state.options.search.quiet());
        let out_path_text = state
            .options
            .export
            .dir
            .join(&state.options.export.stem)
            .to_string_lossy()
            .into_owned();

        let mut app = Self {
            state,
            config_path: launch.config_path,
            store: CatalogStore::new(),
            debounce,
            link: s!(),
            pending_share: launch.share,
            out_path_text,
            out_path_dirty: false,
            scroll_to_selected: false,
            status: Arc::new(Mutex::new(s!("Loading…"))),
            loading: None,
        };

        logf!("Init: sources primary={} secondary={}", app.state.options.sources.primary, app.state.options.sources.secondary);
        super::actions::start_load(&mut app, ctx);
        app.refresh_link();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn refresh_link(&mut self) {
        self.link = self.store.share_state().to_link();
    }

    /// Run a query now (bypassing the debouncer) and sync the link.
    pub fn apply_query(&mut self, query: &str) {
        self.store.apply_query(query);
        self.refresh_link();
    }

    /// Validated select; updates the link only when something changed.
    pub fn select(&mut self, i: usize) {
        if self.store.select(i) {
            self.refresh_link();
        }
    }

    pub fn clear_search(&mut self) {
        self.debounce.cancel();
        self.state.gui.search_text.clear();
        self.store.clear_query();
        self.refresh_link();
    }

    /// Catalog arrived from the loader thread.
    fn install(&mut self, loaded: Loaded) {
        self.store.install(loaded);
        self.status(self.store.status().to_string());

        if let Some(share) = self.pending_share.take() {
            let found = self.store.restore(&share);
            logf!("Restore: query={:?} anchor={:?} found={}", share.query, share.anchor, found);
            self.scroll_to_selected = found;
        } else {
            self.store.apply_query(&self.state.gui.search_text.clone());
        }
        self.refresh_link();
    }

    fn poll_loader(&mut self) {
        let Some(rx) = &self.loading else { return };
        match rx.try_recv() {
            Ok(loaded) => {
                self.loading = None;
                self.install(loaded);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                loge!("Load: worker vanished without a result");
                self.loading = None;
                self.status("Load failed");
            }
        }
    }

    fn poll_debounce(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if let Some(q) = self.debounce.poll(now) {
            self.apply_query(&q);
        }
        if let Some(left) = self.debounce.time_left(now) {
            ctx.request_repaint_after(left);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (down, up, esc) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if esc && self.store.selected_index().is_some() {
            self.store.clear_selection();
            self.refresh_link();
            return;
        }
        let moved = if down {
            self.store.select_next()
        } else if up {
            self.store.select_prev()
        } else {
            false
        };
        if moved {
            self.refresh_link();
            self.scroll_to_selected = true;
        }
    }

    pub fn save_config(&self) {
        match config_file::write(&self.config_path, &self.state.options) {
            Ok(()) => logd!("Config: saved {}", self.config_path.display()),
            Err(e) => loge!("Config: save failed: {}", e),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();
        self.poll_debounce(ctx);
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            super::components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            super::components::action_buttons::draw(ui, self);
        });

        if self.state.gui.show_detail {
            egui::SidePanel::right("detail")
                .resizable(true)
                .default_width(340.0)
                .show(ctx, |ui| {
                    super::components::detail_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::item_table::draw(ui, self);
        });
    }
}
