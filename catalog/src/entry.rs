use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One board revision in the catalog.
///
/// The name doubles as the key for every asset path belonging to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub has_schematic: bool,
    /// Informational only. Scans are looked up whether or not this is set.
    #[serde(default)]
    pub has_extra_images: bool,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        has_schematic: bool,
        has_extra_images: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            has_schematic,
            has_extra_images,
            description: description.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate board name: {0}")]
    DuplicateName(String),
    #[error("Board at position {0} has an empty name")]
    EmptyName(usize),
    #[error("Catalog contains no boards")]
    Empty,
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The immutable, ordered board table.
///
/// Construction validates that names are non-empty and unique; after that the
/// table is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(position));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub(crate) fn from_validated(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Self::new(entries)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        crate::builtin::builtin_catalog()
    }
}
