//! Application event loop and action wiring.
//!
//! The app owns the immutable catalog (inside [`AppState`]), the UI
//! renderer, and the channel pair to the download worker thread. All install
//! actions are fire-and-forget: spawning a terminal returns immediately and
//! the spawned process is never waited on. Download completions come back
//! over the response channel and are drained once per loop tick.

pub mod state;

pub use state::{AppMode, AppState, Row, SourceToggles, DEFAULT_PAGE_SIZE};

use crate::catalog::{Catalog, SourceType};
use crate::dispatch::{self, InstallAction};
use crate::downloader::{
    spawn_downloader_thread, DownloadId, DownloadRequest, DownloadResponse,
};
use crate::launcher::{self, BootstrapOutcome};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info};
use ratatui::{backend::Backend, Terminal};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// How long the event loop waits for input before draining worker responses.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application: state, renderer, and the download worker channels.
pub struct App {
    pub state: AppState,
    ui: UiRenderer,
    download_tx: Sender<DownloadRequest>,
    response_rx: Receiver<DownloadResponse>,
    next_download_id: DownloadId,
    should_quit: bool,
}

impl App {
    /// Create the app for a loaded catalog and start the download worker.
    pub fn new(catalog: Catalog) -> Self {
        let (download_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_downloader_thread(request_rx, response_tx);

        Self {
            state: AppState::new(catalog),
            ui: UiRenderer::new(),
            download_tx,
            response_rx,
            next_download_id: 0,
            should_quit: false,
        }
    }

    /// Run the UI event loop until the user quits.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("entering browse loop with {} catalog entries", self.state.catalog.len());

        while !self.should_quit {
            self.drain_download_responses();

            terminal.draw(|f| self.ui.render(f, &self.state))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Route a key press based on the current mode.
    fn handle_key(&mut self, key: KeyEvent) {
        match self.state.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::Search => self.handle_search_key(key),
            AppMode::Help => {
                // Any key closes the overlay.
                self.state.mode = AppMode::Browse;
            }
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => self.state.prev_page(),
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => self.state.next_page(),
            KeyCode::Enter | KeyCode::Char('i') => self.install_selected(),
            KeyCode::Char('/') => self.state.mode = AppMode::Search,
            KeyCode::Char('w') => self.state.toggle_source(SourceType::Winget),
            KeyCode::Char('c') => self.state.toggle_source(SourceType::Choco),
            KeyCode::Char('d') => self.state.toggle_source(SourceType::Installer),
            KeyCode::Char('u') => self.update_winget_client(),
            KeyCode::Char('r') => self.refresh_winget_sources(),
            KeyCode::Char('R') => self.reset_winget_sources(),
            KeyCode::Char('b') => self.bootstrap_chocolatey(),
            KeyCode::Char('?') => self.state.mode = AppMode::Help,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.state.mode = AppMode::Browse,
            KeyCode::Backspace => {
                let mut query = self.state.search_query.clone();
                query.pop();
                self.state.set_search_query(query);
            }
            KeyCode::Char(c) => {
                let mut query = self.state.search_query.clone();
                query.push(c);
                self.state.set_search_query(query);
            }
            _ => {}
        }
    }

    /// Dispatch an install action for the selected entry.
    fn install_selected(&mut self) {
        let Some(entry) = self.state.selected_entry().cloned() else {
            self.state.set_status("Nothing selected", false);
            return;
        };

        let enabled = self.state.toggles.enabled();
        match dispatch::dispatch(&entry, &enabled) {
            None => {
                // The filter normally hides such entries; keep the control
                // inert instead of erroring.
                self.state
                    .set_status(format!("No enabled source can install {}", entry.name), true);
            }
            Some(InstallAction::WingetInstall { package_id }) => {
                let command = dispatch::winget_install_command(&package_id);
                self.spawn_install_terminal(&entry.name, "winget", &command);
            }
            Some(InstallAction::ChocoInstall { package_id }) => {
                let command = dispatch::choco_install_command(&package_id);
                self.spawn_install_terminal(&entry.name, "Chocolatey", &command);
            }
            Some(InstallAction::DownloadAndRun { url }) => {
                self.request_download(&entry.name, &url);
            }
        }
    }

    fn spawn_install_terminal(&mut self, app_name: &str, backend: &str, command: &str) {
        match launcher::spawn_in_terminal(command) {
            Ok(()) => {
                info!("started {} install of {}", backend, app_name);
                self.state.set_status(
                    format!(
                        "Started installation of {} using {} in a new terminal window",
                        app_name, backend
                    ),
                    false,
                );
            }
            Err(e) => {
                self.state.set_status(
                    format!("Failed to start installation for {}: {}", app_name, e),
                    true,
                );
            }
        }
    }

    fn request_download(&mut self, app_name: &str, url: &str) {
        let request = DownloadRequest {
            id: self.next_download_id,
            app_name: app_name.to_string(),
            url: url.to_string(),
        };
        self.next_download_id += 1;

        if self.download_tx.send(request).is_ok() {
            self.state.downloads_in_flight += 1;
            self.state.set_status(
                format!("Downloading installer for {}... this may take a moment", app_name),
                false,
            );
        } else {
            self.state.set_status(
                format!("Failed to start download for {}: worker unavailable", app_name),
                true,
            );
        }
    }

    /// Pull completed downloads off the response channel without blocking.
    fn drain_download_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            debug!("download response: {:?}", response);
            self.state.downloads_in_flight = self.state.downloads_in_flight.saturating_sub(1);
            match response.result {
                Ok(path) => {
                    self.state.set_status(
                        format!(
                            "Downloaded {} installer to {} and launched it",
                            response.app_name,
                            path.display()
                        ),
                        false,
                    );
                }
                Err(e) => {
                    self.state.set_status(
                        format!(
                            "Failed to download or launch installer for {}: {}",
                            response.app_name, e
                        ),
                        true,
                    );
                }
            }
        }
    }

    fn update_winget_client(&mut self) {
        match launcher::update_winget_client() {
            Ok(()) => self.state.set_status(
                "Started updating the winget client in a new terminal window",
                false,
            ),
            Err(e) => self
                .state
                .set_status(format!("Failed to start winget client update: {}", e), true),
        }
    }

    fn refresh_winget_sources(&mut self) {
        match launcher::refresh_winget_sources() {
            Ok(()) => self.state.set_status(
                "Started refreshing winget sources in a new terminal window",
                false,
            ),
            Err(e) => self
                .state
                .set_status(format!("Failed to refresh winget sources: {}", e), true),
        }
    }

    fn reset_winget_sources(&mut self) {
        match launcher::reset_winget_sources() {
            Ok(()) => self.state.set_status(
                "Started resetting winget sources in a new terminal window",
                false,
            ),
            Err(e) => self
                .state
                .set_status(format!("Failed to reset winget sources: {}", e), true),
        }
    }

    fn bootstrap_chocolatey(&mut self) {
        match launcher::bootstrap_chocolatey() {
            Ok(BootstrapOutcome::AlreadyInstalled) => self
                .state
                .set_status("Chocolatey is already installed", false),
            Ok(BootstrapOutcome::Started) => self.state.set_status(
                "Started Chocolatey installation in a new terminal window",
                false,
            ),
            Err(e) => self
                .state
                .set_status(format!("Failed to start Chocolatey install: {}", e), true),
        }
    }
}
