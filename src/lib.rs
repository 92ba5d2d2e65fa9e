//! WinTUI Library
//!
//! Core functionality for the WinTUI application launcher: catalog loading
//! and normalization, install dispatch, detached process launching, and the
//! browse TUI.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod dispatch;
pub mod downloader;
pub mod error;
pub mod launcher;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, Row, SourceToggles};
pub use catalog::{
    default_catalog_path, normalize, AppEntry, Catalog, InstallSource, RawEntry, Registry,
    SourceType,
};
pub use dispatch::{
    choco_install_command, dispatch, installer_filename, winget_install_command, InstallAction,
};
pub use downloader::{DownloadId, DownloadRequest, DownloadResponse};
pub use error::{Result, WintuiError};
pub use launcher::BootstrapOutcome;
