//! Application catalog loading and normalization.
//!
//! The catalog is a JSON registry keyed by a unique application id. Each raw
//! record carries optional identifiers for up to three install sources
//! (winget, Chocolatey, direct-download URL). Normalization turns the
//! heterogeneous records into a uniform list of [`AppEntry`] values, each
//! with an ordered list of the sources actually present.
//!
//! The catalog is loaded once at startup and is immutable for the process
//! lifetime. It is passed into the app explicitly; there is no global state.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter, EnumString};

/// Default catalog filename, looked up in the working directory and next to
/// the executable.
pub const DEFAULT_CATALOG_FILE: &str = "applications.json";

/// Sentinel token marking a source field as unavailable.
///
/// Compared case-insensitively, so `"NA"` and `"na"` are equivalent to the
/// field being absent.
const UNAVAILABLE: &str = "na";

/// The three install source types, in dispatch preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SourceType {
    /// winget, the managed package source.
    #[strum(serialize = "winget")]
    Winget,
    /// Chocolatey, the secondary package source.
    #[strum(serialize = "choco")]
    Choco,
    /// Direct download of a vendor installer.
    #[strum(serialize = "installer")]
    Installer,
}

impl SourceType {
    /// Human-readable label for toggles and status messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Winget => "Winget",
            Self::Choco => "Chocolatey",
            Self::Installer => "Source Installer",
        }
    }
}

/// One concrete install source attached to an [`AppEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    /// winget package id, e.g. `7zip.7zip`.
    Winget { id: String },
    /// Chocolatey package id, e.g. `7zip`.
    Choco { id: String },
    /// Direct URL to a vendor installer.
    Installer { url: String },
}

impl InstallSource {
    /// The type tag of this source, used for filter matching.
    pub fn source_type(&self) -> SourceType {
        match self {
            Self::Winget { .. } => SourceType::Winget,
            Self::Choco { .. } => SourceType::Choco,
            Self::Installer { .. } => SourceType::Installer,
        }
    }
}

/// Raw catalog record as it appears in the JSON registry.
///
/// All fields are optional; missing fields default per the normalization
/// rules. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEntry {
    /// Display name; falls back to the registry key when absent.
    pub content: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Free-text grouping label; defaults to "Other".
    pub category: Option<String>,
    /// winget package id, or "na" for unavailable.
    pub winget: Option<String>,
    /// Chocolatey package id, or "na" for unavailable.
    pub choco: Option<String>,
    /// Direct installer URL, or "na" for unavailable.
    pub download: Option<String>,
}

/// The raw registry: key -> record, in file order.
pub type Registry = IndexMap<String, RawEntry>;

/// A normalized, installable catalog entry held for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    /// Display name.
    pub name: String,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Normalized category (trimmed, capitalized).
    pub category: String,
    /// Available sources in fixed preference order {winget, choco, installer}.
    pub sources: Vec<InstallSource>,
}

impl AppEntry {
    /// Whether any of this entry's sources has a type in `enabled`.
    pub fn matches_sources(&self, enabled: &[SourceType]) -> bool {
        self.sources
            .iter()
            .any(|s| enabled.contains(&s.source_type()))
    }

    /// Case-insensitive substring match against name, description, and
    /// category. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}

/// True if a source field holds a usable value (present, non-empty, not the
/// "na" sentinel in any case).
fn source_available(field: &Option<String>) -> bool {
    match field {
        Some(value) => !value.is_empty() && !value.eq_ignore_ascii_case(UNAVAILABLE),
        None => false,
    }
}

/// Trim and capitalize a category label: first letter uppercase, remainder
/// lowercase. Empty input stays empty.
fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Normalize a raw registry into a uniform list of installable entries.
///
/// Pure and order-preserving: the output follows registry order, and calling
/// it twice on the same input yields structurally identical output. Records
/// with zero qualifying sources are still emitted; filtering them is the
/// loader's decision, not the normalizer's.
pub fn normalize(registry: &Registry) -> Vec<AppEntry> {
    registry
        .iter()
        .map(|(key, raw)| {
            let mut sources = Vec::new();
            if source_available(&raw.winget) {
                sources.push(InstallSource::Winget {
                    id: raw.winget.clone().unwrap_or_default(),
                });
            }
            if source_available(&raw.choco) {
                sources.push(InstallSource::Choco {
                    id: raw.choco.clone().unwrap_or_default(),
                });
            }
            if source_available(&raw.download) {
                sources.push(InstallSource::Installer {
                    url: raw.download.clone().unwrap_or_default(),
                });
            }

            AppEntry {
                name: raw.content.clone().unwrap_or_else(|| key.clone()),
                description: raw.description.clone().unwrap_or_default(),
                category: normalize_category(raw.category.as_deref().unwrap_or("Other")),
                sources,
            }
        })
        .collect()
}

/// Immutable application catalog, constructed once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<AppEntry>,
}

impl Catalog {
    /// Build a catalog from already-normalized entries, dropping entries
    /// with no usable source.
    ///
    /// An entry without sources would render an inert install control, so it
    /// is hidden with a warning rather than shown.
    pub fn from_entries(entries: Vec<AppEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|entry| {
                if entry.sources.is_empty() {
                    warn!(
                        "catalog entry {:?} has no usable install source, hiding it",
                        entry.name
                    );
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { entries }
    }

    /// Load and normalize a catalog from a JSON registry file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let registry: Registry =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(Self::from_entries(normalize(&registry)))
    }

    /// All installable entries, in registry order.
    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    /// Number of installable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no installable entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by display name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&AppEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Source types that appear on at least one entry, in preference order.
    pub fn available_source_types(&self) -> Vec<SourceType> {
        use strum::IntoEnumIterator;
        SourceType::iter()
            .filter(|ty| {
                self.entries
                    .iter()
                    .any(|entry| entry.sources.iter().any(|s| s.source_type() == *ty))
            })
            .collect()
    }
}

/// Resolve the default catalog path: `applications.json` in the working
/// directory, falling back to the directory of the running executable.
pub fn default_catalog_path() -> PathBuf {
    let cwd_path = PathBuf::from(DEFAULT_CATALOG_FILE);
    if cwd_path.exists() {
        return cwd_path;
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let exe_path = dir.join(DEFAULT_CATALOG_FILE);
            if exe_path.exists() {
                return exe_path;
            }
        }
    }
    cwd_path
}
