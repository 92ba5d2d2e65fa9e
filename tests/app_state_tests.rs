//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - Source toggle filtering
//! - Search, grouping, and pagination derived from one row list
//! - Selection behavior over category headers

use wintui::catalog::{normalize, RawEntry, Registry};
use wintui::{AppMode, AppState, Catalog, Row, SourceType};

fn raw(name: &str, category: &str, winget: Option<&str>, download: Option<&str>) -> RawEntry {
    RawEntry {
        content: Some(name.to_string()),
        description: Some(format!("{} does things", name)),
        category: Some(category.to_string()),
        winget: winget.map(String::from),
        choco: None,
        download: download.map(String::from),
    }
}

fn state_with(entries: Vec<(&str, &str, RawEntry)>) -> AppState {
    let mut registry = Registry::new();
    for (key, _, entry) in entries {
        registry.insert(key.to_string(), entry);
    }
    AppState::new(Catalog::from_entries(normalize(&registry)))
}

fn small_state() -> AppState {
    state_with(vec![
        ("vlc", "media", raw("VLC", "media", Some("VideoLAN.VLC"), None)),
        (
            "steam",
            "games",
            raw("Steam", "games", None, Some("https://example.com/SteamSetup.exe")),
        ),
        ("7zip", "utilities", raw("7-Zip", "utilities", Some("7zip.7zip"), None)),
    ])
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_default_mode_is_browse() {
    let state = small_state();
    assert_eq!(state.mode, AppMode::Browse);
}

#[test]
fn test_default_has_welcome_message() {
    let state = small_state();
    assert!(state.status_message.contains("Welcome"));
    assert!(!state.status_is_error);
}

#[test]
fn test_default_all_sources_enabled() {
    let state = small_state();
    assert_eq!(
        state.toggles.enabled(),
        vec![SourceType::Winget, SourceType::Choco, SourceType::Installer]
    );
}

#[test]
fn test_default_no_downloads_in_flight() {
    let state = small_state();
    assert_eq!(state.downloads_in_flight, 0);
}

// =============================================================================
// Grouping and Filtering
// =============================================================================

#[test]
fn test_categories_sorted_entries_grouped() {
    let state = small_state();
    let rows = state.visible_rows();

    let headers: Vec<String> = rows
        .iter()
        .filter_map(|row| match row {
            Row::Category(name) => Some(name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(headers, vec!["Games", "Media", "Utilities"]);
}

#[test]
fn test_disabling_installer_hides_download_only_entry() {
    let mut state = small_state();
    state.toggle_source(SourceType::Installer);

    let rows = state.visible_rows();
    assert!(!rows.contains(&Row::Category("Games".to_string())));
}

#[test]
fn test_search_is_case_insensitive() {
    let mut state = small_state();
    state.set_search_query("vlc".to_string());
    assert_eq!(
        state.selected_entry().map(|e| e.name.clone()),
        Some("VLC".to_string())
    );

    state.set_search_query("STEAM".to_string());
    assert_eq!(
        state.selected_entry().map(|e| e.name.clone()),
        Some("Steam".to_string())
    );
}

#[test]
fn test_search_with_no_match_gives_inert_view() {
    let mut state = small_state();
    state.set_search_query("does-not-exist".to_string());
    assert!(state.visible_rows().is_empty());
    assert!(state.selected_entry().is_none());
    assert_eq!(state.page_count(), 1);
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn test_pagination_over_large_catalog() {
    let mut entries = Vec::new();
    let raws: Vec<RawEntry> = (0..45)
        .map(|i| raw(&format!("App {:02}", i), "tools", Some("x.y"), None))
        .collect();
    let keys: Vec<String> = (0..45).map(|i| format!("app{:02}", i)).collect();
    for (key, entry) in keys.iter().zip(raws.iter()) {
        entries.push((key.as_str(), "tools", entry.clone()));
    }
    let mut state = state_with(entries);

    // 45 apps + 1 header = 46 rows -> 3 pages of 20.
    assert_eq!(state.page_count(), 3);
    assert_eq!(state.page_rows().len(), 20);

    state.next_page();
    state.next_page();
    assert_eq!(state.current_page, 2);
    assert_eq!(state.page_rows().len(), 6);

    // Clamped at the last page.
    state.next_page();
    assert_eq!(state.current_page, 2);
}

#[test]
fn test_page_count_follows_filtered_rows() {
    let raws: Vec<RawEntry> = (0..45)
        .map(|i| raw(&format!("App {:02}", i), "tools", Some("x.y"), None))
        .collect();
    let keys: Vec<String> = (0..45).map(|i| format!("app{:02}", i)).collect();
    let mut entries = Vec::new();
    for (key, entry) in keys.iter().zip(raws.iter()) {
        entries.push((key.as_str(), "tools", entry.clone()));
    }
    let mut state = state_with(entries);
    assert_eq!(state.page_count(), 3);

    // Narrowing the search must shrink the page count to match the
    // displayed list, and pull the view back to the first page.
    state.next_page();
    state.set_search_query("App 07".to_string());
    assert_eq!(state.page_count(), 1);
    assert_eq!(state.current_page, 0);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_initial_selection_is_an_app_row() {
    let state = small_state();
    assert!(state.selected_entry().is_some());
}

#[test]
fn test_selection_walks_app_rows_only() {
    let mut state = small_state();
    let mut seen = Vec::new();
    seen.push(state.selected_entry().unwrap().name.clone());
    state.select_next();
    seen.push(state.selected_entry().unwrap().name.clone());
    state.select_next();
    seen.push(state.selected_entry().unwrap().name.clone());

    // Categories sort Games < Media < Utilities.
    assert_eq!(seen, vec!["Steam", "VLC", "7-Zip"]);

    // Walking past the end stays put.
    state.select_next();
    assert_eq!(state.selected_entry().unwrap().name, "7-Zip");
}

#[test]
fn test_status_message_update() {
    let mut state = small_state();
    state.set_status("Started installation of VLC", false);
    assert_eq!(state.status_message, "Started installation of VLC");
    assert!(!state.status_is_error);

    state.set_status("Failed to start installation", true);
    assert!(state.status_is_error);
}
