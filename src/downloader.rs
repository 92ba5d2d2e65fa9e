//! downloader.rs - Runs blocking installer downloads on a dedicated background thread.
//!
//! This module provides the types and a function to spawn a thread that
//! listens for `DownloadRequest`s, performs the blocking HTTP fetch, launches
//! the downloaded installer as a detached process, and sends a
//! `DownloadResponse` back to the main application thread. This keeps the
//! TUI thread responsive while a download is in flight.
//!
//! There is no cancellation and no timeout: a hung connection blocks the one
//! worker task until the OS gives up.

use crate::dispatch::installer_filename;
use crate::error::{Result, WintuiError};
use crate::launcher;
use log::{debug, error, info};
use std::fs::File;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

/// Unique identifier for each download request/response pair.
pub type DownloadId = u64;

/// A request to download and launch one installer.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub id: DownloadId,
    /// Display name of the application, echoed back for status messages.
    pub app_name: String,
    pub url: String,
}

/// The response for a completed (or failed) download request.
#[derive(Debug)]
pub struct DownloadResponse {
    pub id: DownloadId,
    pub app_name: String,
    /// Ok(path of the launched installer), Err(error message).
    pub result: std::result::Result<PathBuf, String>,
}

/// Fetch `url` into the system temp directory and return the file path.
///
/// The local filename is inferred from the URL path. A non-2xx response is
/// an error; a partially written file is not cleaned up.
pub fn fetch_to_temp(url: &str) -> Result<PathBuf> {
    let dest = std::env::temp_dir().join(installer_filename(url));
    debug!("downloading {} -> {}", url, dest.display());

    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| WintuiError::download(e.to_string()))?;

    let mut file = File::create(&dest)
        .map_err(|e| WintuiError::download(format!("cannot write {}: {}", dest.display(), e)))?;
    let mut body = response;
    std::io::copy(&mut body, &mut file)
        .map_err(|e| WintuiError::download(format!("write failed: {}", e)))?;

    Ok(dest)
}

/// Download the installer for one request and launch it detached.
fn handle_request(request: &DownloadRequest) -> Result<PathBuf> {
    let path = fetch_to_temp(&request.url)?;
    info!("downloaded installer for {}, launching", request.app_name);
    launcher::launch_detached(&path)?;
    Ok(path)
}

/// Spawns the dedicated download worker thread.
///
/// The thread continuously listens for `DownloadRequest`s on `request_rx`.
/// Upon receiving one, it fetches the installer, launches it, and sends a
/// `DownloadResponse` back via `response_tx`. The thread exits when the
/// request channel closes.
pub fn spawn_downloader_thread(
    request_rx: Receiver<DownloadRequest>,
    response_tx: Sender<DownloadResponse>,
) {
    std::thread::spawn(move || {
        debug!("download worker thread started.");
        while let Ok(request) = request_rx.recv() {
            debug!("handling download request: {:?}", request);
            let result = handle_request(&request).map_err(|e| e.to_string());

            let response = DownloadResponse {
                id: request.id,
                app_name: request.app_name,
                result,
            };
            if response_tx.send(response).is_err() {
                error!("Failed to send download response. Receiver probably dropped.");
                break;
            }
        }
        debug!("download worker thread shut down.");
    });
}
