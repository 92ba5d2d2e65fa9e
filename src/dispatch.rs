//! Install dispatch: pick a source, produce an action.
//!
//! Given a normalized [`AppEntry`] and the set of source types the user has
//! enabled, [`dispatch`] selects the first source (in the entry's fixed
//! stored order) whose type is enabled and maps it to an [`InstallAction`].
//! `None` means no enabled source is compatible; the caller keeps the
//! control inert rather than failing at activation time.

use crate::catalog::{AppEntry, InstallSource, SourceType};

/// Recognized installer extensions for downloaded files.
const INSTALLER_EXTENSIONS: [&str; 2] = [".exe", ".msi"];

/// Fallback local filename when the URL path has no usable basename.
const FALLBACK_INSTALLER_NAME: &str = "installer";

/// The concrete action produced by a dispatch decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallAction {
    /// Run the winget install command for this package id in a new terminal.
    WingetInstall { package_id: String },
    /// Run the Chocolatey install command for this package id in a new terminal.
    ChocoInstall { package_id: String },
    /// Download the installer at this URL to a temp file and launch it.
    DownloadAndRun { url: String },
}

impl InstallAction {
    /// The shell command line for package-manager actions.
    ///
    /// `DownloadAndRun` has no single command line; it is handled by the
    /// download worker.
    pub fn command_line(&self) -> Option<String> {
        match self {
            Self::WingetInstall { package_id } => Some(winget_install_command(package_id)),
            Self::ChocoInstall { package_id } => Some(choco_install_command(package_id)),
            Self::DownloadAndRun { .. } => None,
        }
    }
}

/// Select an action for `entry` given the enabled source types.
///
/// Iterates the entry's sources in their fixed stored order and returns the
/// action for the first source whose type is in `enabled`. Returns `None`
/// when nothing matches, including for an empty `enabled` set.
pub fn dispatch(entry: &AppEntry, enabled: &[SourceType]) -> Option<InstallAction> {
    entry
        .sources
        .iter()
        .find(|source| enabled.contains(&source.source_type()))
        .map(|source| match source {
            InstallSource::Winget { id } => InstallAction::WingetInstall {
                package_id: id.clone(),
            },
            InstallSource::Choco { id } => InstallAction::ChocoInstall {
                package_id: id.clone(),
            },
            InstallSource::Installer { url } => InstallAction::DownloadAndRun { url: url.clone() },
        })
}

/// The winget install command line for a package id.
pub fn winget_install_command(package_id: &str) -> String {
    format!(
        "winget install --id \"{}\" --silent --accept-package-agreements --accept-source-agreements",
        package_id
    )
}

/// The Chocolatey install command line for a package id.
pub fn choco_install_command(package_id: &str) -> String {
    format!("choco install {} -y", package_id)
}

/// Infer a local filename for a downloaded installer.
///
/// Takes the basename of the URL path (query string stripped) and appends
/// `.exe` unless the name already ends in a recognized installer extension.
pub fn installer_filename(url: &str) -> String {
    let path = url.split('?').next().unwrap_or(url);
    let basename = path.rsplit('/').next().unwrap_or(path);
    let mut filename = if basename.is_empty() {
        FALLBACK_INSTALLER_NAME.to_string()
    } else {
        basename.to_string()
    };

    let lower = filename.to_lowercase();
    if !INSTALLER_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        filename.push_str(".exe");
    }
    filename
}
