//! WinTUI - Main entry point
//!
//! Loads the application catalog, then either launches the browse TUI or
//! runs one of the headless subcommands (validate, install, tools).

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;

use wintui::cli::{Cli, Commands, ToolCommands};
use wintui::launcher::BootstrapOutcome;
use wintui::{dispatch, downloader, error, launcher};
use wintui::{App, Catalog, InstallAction, SourceType};

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    info!("WinTUI starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(wintui::default_catalog_path);

    match cli.command {
        Some(Commands::Validate { path }) => run_validate(&path),
        Some(Commands::Install { name, source }) => {
            run_headless_install(&catalog_path, &name, source.as_deref())
        }
        Some(Commands::Tools { tool }) => run_tool_command(&tool),
        Some(Commands::Browse) | None => run_browser(&catalog_path),
    }
}

/// Load the catalog or exit with a clear message.
///
/// A missing or malformed catalog is the only fatal error class.
fn load_catalog_or_exit(path: &Path) -> Catalog {
    match Catalog::load_from_file(path) {
        Ok(catalog) => {
            info!("loaded {} installable entries from {:?}", catalog.len(), path);
            catalog
        }
        Err(e) => {
            error!("Failed to load catalog: {:#}", e);
            eprintln!("✗ Failed to load catalog {:?}: {:#}", path, e);
            std::process::exit(1);
        }
    }
}

/// Run the browse TUI
fn run_browser(catalog_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog_or_exit(catalog_path);

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(catalog);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

/// Validate a catalog file and report its shape.
fn run_validate(catalog_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match Catalog::load_from_file(catalog_path) {
        Ok(catalog) => {
            println!(
                "✓ Catalog is valid: {} installable entries across {} source type(s)",
                catalog.len(),
                catalog.available_source_types().len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Catalog validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Install one named entry without the TUI.
///
/// The download path runs synchronously here; there is no UI to keep
/// responsive.
fn run_headless_install(
    catalog_path: &Path,
    name: &str,
    source: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog_or_exit(catalog_path);

    let Some(entry) = catalog.find_by_name(name) else {
        eprintln!("✗ No catalog entry named {:?}", name);
        std::process::exit(1);
    };

    let enabled: Vec<SourceType> = match source {
        Some(raw) => {
            let ty: SourceType = raw.parse().unwrap_or_else(|_| {
                eprintln!("✗ Unknown source type {:?}", raw);
                eprintln!("   Valid sources: winget, choco, installer");
                std::process::exit(1);
            });
            vec![ty]
        }
        None => {
            use strum::IntoEnumIterator;
            SourceType::iter().collect()
        }
    };

    let Some(action) = dispatch::dispatch(entry, &enabled) else {
        eprintln!("✗ No enabled source can install {}", entry.name);
        std::process::exit(1);
    };

    match action {
        InstallAction::WingetInstall { package_id } => {
            launcher::spawn_in_terminal(&dispatch::winget_install_command(&package_id))?;
            println!("✓ Started installation of {} using winget", entry.name);
        }
        InstallAction::ChocoInstall { package_id } => {
            launcher::spawn_in_terminal(&dispatch::choco_install_command(&package_id))?;
            println!("✓ Started installation of {} using Chocolatey", entry.name);
        }
        InstallAction::DownloadAndRun { url } => {
            println!("Downloading installer for {}...", entry.name);
            let path = downloader::fetch_to_temp(&url)?;
            launcher::launch_detached(&path)?;
            println!("✓ Downloaded {} installer and launched it", entry.name);
        }
    }

    Ok(())
}

/// Run a maintenance tool command
fn run_tool_command(tool: &ToolCommands) -> Result<(), Box<dyn std::error::Error>> {
    match tool {
        ToolCommands::WingetUpdate => {
            launcher::update_winget_client()?;
            println!("✓ Started winget client update in a new terminal window");
        }
        ToolCommands::WingetRefresh => {
            launcher::refresh_winget_sources()?;
            println!("✓ Started winget source refresh in a new terminal window");
        }
        ToolCommands::WingetReset => {
            launcher::reset_winget_sources()?;
            println!("✓ Started winget source reset in a new terminal window");
        }
        ToolCommands::ChocoBootstrap => match launcher::bootstrap_chocolatey()? {
            BootstrapOutcome::AlreadyInstalled => {
                println!("✓ Chocolatey is already installed, nothing to do");
            }
            BootstrapOutcome::Started => {
                println!("✓ Started Chocolatey installation in a new terminal window");
            }
        },
    }
    Ok(())
}
