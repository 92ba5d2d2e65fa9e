//! Property-Based Tests for WinTUI
//!
//! Uses proptest for testing the normalizer and dispatcher invariants:
//! - `sources` contains only qualifying fields, in fixed order
//! - dispatch returns the first enabled source or nothing
//! - normalization is pure

use proptest::prelude::*;
use wintui::{dispatch, normalize, InstallAction, RawEntry, Registry, SourceType};

/// Strategy for one optional source field: absent, empty, the "na" sentinel
/// in assorted cases, or a plausible identifier.
fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("na".to_string())),
        Just(Some("NA".to_string())),
        Just(Some("Na".to_string())),
        "[a-z]{2,10}(\\.[a-z]{2,10})?".prop_map(Some),
    ]
}

/// Whether a generated field value qualifies as an available source.
fn qualifies(field: &Option<String>) -> bool {
    match field {
        Some(v) => !v.is_empty() && !v.eq_ignore_ascii_case("na"),
        None => false,
    }
}

fn raw_entry_strategy() -> impl Strategy<Value = RawEntry> {
    (field_strategy(), field_strategy(), field_strategy()).prop_map(
        |(winget, choco, download)| RawEntry {
            content: Some("App".to_string()),
            description: None,
            category: None,
            winget,
            choco,
            download,
        },
    )
}

fn source_set_strategy() -> impl Strategy<Value = Vec<SourceType>> {
    proptest::collection::vec(
        prop_oneof![
            Just(SourceType::Winget),
            Just(SourceType::Choco),
            Just(SourceType::Installer),
        ],
        0..4,
    )
}

proptest! {
    /// The sources list contains exactly the qualifying fields, in the
    /// fixed order {winget, choco, installer}.
    #[test]
    fn normalize_sources_match_field_presence(raw in raw_entry_strategy()) {
        let mut registry = Registry::new();
        registry.insert("app".to_string(), raw.clone());
        let entries = normalize(&registry);

        let mut expected = Vec::new();
        if qualifies(&raw.winget) {
            expected.push(SourceType::Winget);
        }
        if qualifies(&raw.choco) {
            expected.push(SourceType::Choco);
        }
        if qualifies(&raw.download) {
            expected.push(SourceType::Installer);
        }

        let actual: Vec<SourceType> =
            entries[0].sources.iter().map(|s| s.source_type()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Normalization is pure: the same registry always produces the same
    /// output.
    #[test]
    fn normalize_is_pure(raw in raw_entry_strategy()) {
        let mut registry = Registry::new();
        registry.insert("app".to_string(), raw);
        prop_assert_eq!(normalize(&registry), normalize(&registry));
    }

    /// Dispatch returns the first stored source whose type is enabled, or
    /// nothing when no source matches (including the empty filter).
    #[test]
    fn dispatch_returns_first_enabled_source(
        raw in raw_entry_strategy(),
        enabled in source_set_strategy(),
    ) {
        let mut registry = Registry::new();
        registry.insert("app".to_string(), raw);
        let entries = normalize(&registry);
        let entry = &entries[0];

        let expected_type = entry
            .sources
            .iter()
            .map(|s| s.source_type())
            .find(|ty| enabled.contains(ty));

        let action = dispatch(entry, &enabled);
        let actual_type = action.as_ref().map(|a| match a {
            InstallAction::WingetInstall { .. } => SourceType::Winget,
            InstallAction::ChocoInstall { .. } => SourceType::Choco,
            InstallAction::DownloadAndRun { .. } => SourceType::Installer,
        });
        prop_assert_eq!(actual_type, expected_type);
    }

    /// An empty enabled set never yields an action.
    #[test]
    fn dispatch_with_empty_filter_is_none(raw in raw_entry_strategy()) {
        let mut registry = Registry::new();
        registry.insert("app".to_string(), raw);
        let entries = normalize(&registry);
        prop_assert_eq!(dispatch(&entries[0], &[]), None);
    }
}
