//! Detached process launching and package-manager maintenance actions.
//!
//! Every install and maintenance action ends in a fire-and-forget process
//! spawn: the launcher opens a new interactive terminal running the command
//! and returns immediately without waiting on, monitoring, or owning the
//! child. Success means "started", never "succeeded"; outcome is conveyed
//! to the user by the terminal the command runs in.

use crate::error::{Result, WintuiError};
use log::info;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Command line that updates the winget client itself.
pub const WINGET_CLIENT_UPDATE_COMMAND: &str = "winget install --id Microsoft.DesktopAppInstaller --source winget --silent --accept-package-agreements --accept-source-agreements";

/// Command line that refreshes the winget source list.
pub const WINGET_SOURCE_UPDATE_COMMAND: &str = "winget source update";

/// Command line that force-resets the winget source list.
pub const WINGET_SOURCE_RESET_COMMAND: &str = "winget source reset --force";

/// PowerShell script that installs Chocolatey when it is not yet present.
///
/// The script re-checks for an existing `choco` binary so running it twice
/// changes nothing.
const CHOCO_BOOTSTRAP_SCRIPT: &str = r#"
$ErrorActionPreference = 'Stop'
Write-Host "Checking if Chocolatey is installed..."
if (Get-Command choco -ErrorAction SilentlyContinue) {
    Write-Host "Chocolatey is already installed."
    exit 0
}
Write-Host "Chocolatey is not installed, installing now."
Set-ExecutionPolicy Bypass -Scope Process -Force;
[System.Net.ServicePointManager]::SecurityProtocol = [System.Net.ServicePointManager]::SecurityProtocol -bor 3072;
Invoke-Expression ((New-Object System.Net.WebClient).DownloadString('https://community.chocolatey.org/install.ps1'))
"#;

/// Outcome of the Chocolatey bootstrap action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// `choco` already answers; nothing was spawned.
    AlreadyInstalled,
    /// The install script was started in a new terminal.
    Started,
}

/// Build the command that opens a new terminal running `command`.
///
/// On Windows this is `cmd /C start powershell -NoExit -Command <command>`,
/// which detaches the terminal from the launcher. Elsewhere the command runs
/// under `sh -c` for development use.
#[cfg(target_os = "windows")]
fn terminal_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "powershell", "-NoExit", "-Command", command]);
    cmd
}

#[cfg(not(target_os = "windows"))]
fn terminal_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

/// Build the command that opens a new terminal running a PowerShell script file.
#[cfg(target_os = "windows")]
fn terminal_script_command(script: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "powershell", "-NoExit", "-File"])
        .arg(script);
    cmd
}

#[cfg(not(target_os = "windows"))]
fn terminal_script_command(script: &Path) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg(script);
    cmd
}

/// Spawn `command` in a new detached terminal and return immediately.
pub fn spawn_in_terminal(command: &str) -> Result<()> {
    info!("spawning terminal for command: {}", command);
    terminal_command(command)
        .spawn()
        .map_err(|e| WintuiError::spawn(e.to_string()))?;
    Ok(())
}

/// Launch a downloaded installer as a detached process.
#[cfg(target_os = "windows")]
pub fn launch_detached(path: &Path) -> Result<()> {
    info!("launching installer: {}", path.display());
    // `start ""` keeps the installer window independent of the launcher.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd.spawn().map_err(|e| WintuiError::spawn(e.to_string()))?;
    Ok(())
}

#[cfg(not(target_os = "windows"))]
pub fn launch_detached(path: &Path) -> Result<()> {
    info!("launching installer: {}", path.display());
    Command::new(path)
        .spawn()
        .map_err(|e| WintuiError::spawn(e.to_string()))?;
    Ok(())
}

/// Start a self-update of the winget client in a new terminal.
pub fn update_winget_client() -> Result<()> {
    spawn_in_terminal(WINGET_CLIENT_UPDATE_COMMAND)
}

/// Start a winget source refresh in a new terminal.
pub fn refresh_winget_sources() -> Result<()> {
    spawn_in_terminal(WINGET_SOURCE_UPDATE_COMMAND)
}

/// Start a forced winget source reset in a new terminal.
pub fn reset_winget_sources() -> Result<()> {
    spawn_in_terminal(WINGET_SOURCE_RESET_COMMAND)
}

/// Probe for an existing Chocolatey client.
pub fn choco_is_installed() -> bool {
    Command::new("choco")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Install Chocolatey if it is not already present.
///
/// Probes for `choco` first so the action is idempotent; when absent, writes
/// the bootstrap script to a temp `.ps1` file and runs it in a new terminal.
/// The script file is intentionally kept on disk: the spawned terminal reads
/// it after this function returns.
pub fn bootstrap_chocolatey() -> Result<BootstrapOutcome> {
    if choco_is_installed() {
        info!("choco already present, skipping bootstrap");
        return Ok(BootstrapOutcome::AlreadyInstalled);
    }

    let mut file = tempfile::Builder::new()
        .prefix("wintui-choco-bootstrap")
        .suffix(".ps1")
        .tempfile()
        .map_err(|e| WintuiError::spawn(format!("failed to create bootstrap script: {}", e)))?;
    file.write_all(CHOCO_BOOTSTRAP_SCRIPT.as_bytes())
        .map_err(|e| WintuiError::spawn(format!("failed to write bootstrap script: {}", e)))?;
    let (_file, path) = file
        .keep()
        .map_err(|e| WintuiError::spawn(format!("failed to keep bootstrap script: {}", e)))?;

    info!("spawning Chocolatey bootstrap script: {}", path.display());
    terminal_script_command(&path)
        .spawn()
        .map_err(|e| WintuiError::spawn(e.to_string()))?;
    Ok(BootstrapOutcome::Started)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winget_client_update_command_flags() {
        assert!(WINGET_CLIENT_UPDATE_COMMAND.contains("Microsoft.DesktopAppInstaller"));
        assert!(WINGET_CLIENT_UPDATE_COMMAND.contains("--silent"));
        assert!(WINGET_CLIENT_UPDATE_COMMAND.contains("--accept-source-agreements"));
    }

    #[test]
    fn test_winget_source_commands() {
        assert_eq!(WINGET_SOURCE_UPDATE_COMMAND, "winget source update");
        assert_eq!(WINGET_SOURCE_RESET_COMMAND, "winget source reset --force");
    }

    #[test]
    fn test_bootstrap_script_is_idempotent_in_shape() {
        // The script must probe before installing, otherwise re-running the
        // bootstrap action would reinstall over an existing client.
        assert!(CHOCO_BOOTSTRAP_SCRIPT.contains("Get-Command choco"));
        assert!(CHOCO_BOOTSTRAP_SCRIPT.contains("community.chocolatey.org/install.ps1"));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_terminal_command_shape() {
        let cmd = terminal_command("echo hi");
        assert_eq!(cmd.get_program(), "sh");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["-c", "echo hi"]);
    }
}
