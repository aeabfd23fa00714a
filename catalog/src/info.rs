//! Text for the board info panel.

use crate::entry::CatalogEntry;

pub const NO_SELECTION_TITLE: &str = "Select a PCB Model";
pub const NO_SELECTION_MESSAGE: &str = "Select a board to view details";
/// Shown next to boards that ship a schematic file.
pub const SCHEMATIC_MARKER: &str = "\u{26a1}";

const USAGE_HINTS: &[&str] = &[
    "\u{2022} Use \u{2190}/\u{2192} (or \u{2191}/\u{2193}) to navigate",
    "\u{2022} Type to search, Backspace to erase",
    "\u{2022} Click a scan or press F2/F3 to zoom",
    "\u{2022} \u{26a1} marks boards with schematic files",
];

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Summary of an entry followed by the static usage hints.
///
/// Returns `(label, value)` pairs; a separator line has an empty label and
/// value, and hint lines have an empty label.
pub fn info_lines(entry: &CatalogEntry) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Board", entry.name.clone()),
        ("Description", entry.description.clone()),
        ("Schematic Design", yes_no(entry.has_schematic).to_string()),
        ("Additional Images", yes_no(entry.has_extra_images).to_string()),
        ("", String::new()),
        ("Navigation", String::new()),
    ];
    lines.extend(USAGE_HINTS.iter().map(|hint| ("", (*hint).to_string())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_lines_reflect_flags() {
        let entry = CatalogEntry::new("DMG-A02", true, false, "Game Boy main board");
        let lines = info_lines(&entry);
        assert_eq!(lines[0], ("Board", "DMG-A02".to_string()));
        assert_eq!(lines[1], ("Description", "Game Boy main board".to_string()));
        assert_eq!(lines[2], ("Schematic Design", "Yes".to_string()));
        assert_eq!(lines[3], ("Additional Images", "No".to_string()));
    }

    #[test]
    fn test_info_lines_are_deterministic() {
        let entry = CatalogEntry::new("DMG-Z03", false, false, "Game Boy Z03 revision");
        assert_eq!(info_lines(&entry), info_lines(&entry));
        assert_eq!(info_lines(&entry).len(), 6 + USAGE_HINTS.len());
    }
}
