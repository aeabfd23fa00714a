//! The compiled-in board table.

use crate::entry::{Catalog, CatalogEntry};

/// (name, has_schematic, has_extra_images, description)
const BOARDS: &[(&str, bool, bool, &str)] = &[
    ("DMG-A02", true, true, "Game Boy main board revision A02"),
    ("DMG-A03", false, false, "Game Boy main board revision A03"),
    ("DMG-A06", false, false, "Game Boy main board revision A06"),
    ("DMG-A07", false, false, "Game Boy main board revision A07"),
    ("DMG-A08", false, false, "Game Boy main board revision A08"),
    ("DMG-AAA", true, true, "Game Boy main board revision AAA"),
    ("DMG-BEAN", false, false, "Game Boy BEAN revision"),
    ("DMG-DECN", false, false, "Game Boy DECN revision"),
    ("DMG-GDAN", true, true, "Game Boy GDAN revision"),
    ("DMG-KFCN", false, false, "Game Boy KFCN revision"),
    ("DMG-KFDN", false, false, "Game Boy KFDN revision"),
    ("DMG-KGDU", true, true, "Game Boy KGDU revision"),
    ("DMG-MHEU", false, false, "Game Boy MHEU revision"),
    ("DMG-Z02", false, false, "Game Boy Z02 revision"),
    ("DMG-Z03", false, false, "Game Boy Z03 revision"),
];

pub fn builtin_entries() -> Vec<CatalogEntry> {
    BOARDS
        .iter()
        .map(|&(name, schematic, extra, description)| {
            CatalogEntry::new(name, schematic, extra, description)
        })
        .collect()
}

pub fn builtin_catalog() -> Catalog {
    // Uniqueness of the table above is checked by `test_builtin_table_is_valid`.
    Catalog::from_validated(builtin_entries())
}
