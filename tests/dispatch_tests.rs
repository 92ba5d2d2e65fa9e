//! Tests for install dispatch
//!
//! These tests verify the dispatch contract end to end: source selection by
//! fixed preference order, the produced command lines, and installer
//! filename inference for the download path.

use wintui::{
    dispatch, installer_filename, normalize, InstallAction, RawEntry, Registry, SourceType,
};

fn seven_zip_registry() -> Registry {
    let mut registry = Registry::new();
    registry.insert(
        "7zip".to_string(),
        RawEntry {
            content: Some("7-Zip".to_string()),
            description: None,
            category: None,
            winget: Some("7zip.7zip".to_string()),
            choco: Some("na".to_string()),
            download: Some("".to_string()),
        },
    );
    registry
}

#[test]
fn test_scenario_winget_only_entry() {
    let entries = normalize(&seven_zip_registry());
    let entry = &entries[0];

    // Only the secondary source enabled: nothing to do.
    assert_eq!(dispatch(entry, &[SourceType::Choco]), None);

    // Managed + secondary enabled: the winget source wins.
    let action = dispatch(entry, &[SourceType::Winget, SourceType::Choco]);
    assert_eq!(
        action,
        Some(InstallAction::WingetInstall {
            package_id: "7zip.7zip".to_string()
        })
    );
}

#[test]
fn test_dispatch_follows_entry_order_not_filter_order() {
    let mut registry = Registry::new();
    registry.insert(
        "vlc".to_string(),
        RawEntry {
            content: Some("VLC".to_string()),
            description: None,
            category: None,
            winget: Some("VideoLAN.VLC".to_string()),
            choco: Some("vlc".to_string()),
            download: Some("https://example.com/vlc.exe".to_string()),
        },
    );
    let entries = normalize(&registry);

    // The filter is a set; preference comes from the entry's stored order.
    let action = dispatch(&entries[0], &[SourceType::Installer, SourceType::Winget]);
    assert!(matches!(action, Some(InstallAction::WingetInstall { .. })));
}

#[test]
fn test_dispatch_empty_filter_is_always_inert() {
    let entries = normalize(&seven_zip_registry());
    assert_eq!(dispatch(&entries[0], &[]), None);
}

#[test]
fn test_command_lines_match_external_tools() {
    let action = InstallAction::WingetInstall {
        package_id: "Mozilla.Firefox".to_string(),
    };
    assert_eq!(
        action.command_line().unwrap(),
        "winget install --id \"Mozilla.Firefox\" --silent --accept-package-agreements --accept-source-agreements"
    );

    let action = InstallAction::ChocoInstall {
        package_id: "firefox".to_string(),
    };
    assert_eq!(action.command_line().unwrap(), "choco install firefox -y");
}

#[test]
fn test_installer_filename_inference() {
    // No extension on the URL path: default to .exe.
    assert_eq!(installer_filename("https://example.com/app/setup"), "setup.exe");

    // Recognized extensions are kept as-is.
    assert_eq!(installer_filename("https://example.com/a/b/tool.msi"), "tool.msi");

    // Query strings do not leak into the filename.
    assert_eq!(
        installer_filename("https://example.com/setup.exe?version=2&os=win"),
        "setup.exe"
    );

    // Unrecognized extensions still get the fallback suffix.
    assert_eq!(installer_filename("https://example.com/app.zip"), "app.zip.exe");
}
