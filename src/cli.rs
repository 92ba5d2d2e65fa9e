use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// WinTUI - a terminal launcher for installing Windows applications
#[derive(Parser)]
#[command(name = "wintui")]
#[command(about = "Browse a catalog of Windows applications and install them via winget, Chocolatey, or direct download")]
#[command(version)]
pub struct Cli {
    /// Path to the catalog file.
    ///
    /// Defaults to `applications.json` in the working directory, falling
    /// back to the directory of the executable.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive browse TUI (the default)
    Browse,
    /// Load and check a catalog file, reporting entries without usable sources
    Validate {
        /// Path to the catalog file to validate
        path: PathBuf,
    },
    /// Install a single catalog entry without the TUI
    Install {
        /// Display name of the application (case-insensitive)
        name: String,
        /// Restrict dispatch to one source type (winget, choco, installer)
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Package manager maintenance actions
    Tools {
        #[command(subcommand)]
        tool: ToolCommands,
    },
}

#[derive(Subcommand)]
pub enum ToolCommands {
    /// Update the winget client itself in a new terminal
    WingetUpdate,
    /// Refresh the winget source list in a new terminal
    WingetRefresh,
    /// Force-reset the winget source list in a new terminal
    WingetReset,
    /// Install Chocolatey if it is not already present
    ChocoBootstrap,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
