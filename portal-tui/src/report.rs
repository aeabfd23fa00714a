//! Asset availability report for `--list --check`.

use asset_client::AssetSource;
use catalog::{path_for, AssetKind, CatalogEntry};

/// Which assets of one board the source actually has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetAvailability {
    pub name: String,
    pub front: bool,
    pub back: bool,
    pub schematic: bool,
}

impl AssetAvailability {
    /// One line per board, e.g. `DMG-A02    front:yes back:no  schematic:yes`.
    pub fn summary(&self) -> String {
        let flag = |present: bool| if present { "yes" } else { "no " };
        format!(
            "{:<10} front:{} back:{} schematic:{}",
            self.name,
            flag(self.front),
            flag(self.back),
            flag(self.schematic).trim_end()
        )
    }
}

async fn present(source: &dyn AssetSource, identifier: &str, kind: AssetKind) -> bool {
    let path = path_for(identifier, kind);
    match source.probe(&path).await {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(path = %path, "Asset check failed: {}", e);
            false
        }
    }
}

/// Check every board's scans, and its schematic when the table lists one.
pub async fn check_assets<'a>(
    source: &dyn AssetSource,
    entries: impl IntoIterator<Item = &'a CatalogEntry>,
) -> Vec<AssetAvailability> {
    let mut report = Vec::new();
    for entry in entries {
        let schematic = entry.has_schematic
            && present(source, &entry.name, AssetKind::Schematic).await;
        report.push(AssetAvailability {
            name: entry.name.clone(),
            front: present(source, &entry.name, AssetKind::FrontScan).await,
            back: present(source, &entry.name, AssetKind::BackScan).await,
            schematic,
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_client::{AssetError, MockAssetSource, MockCall};

    #[tokio::test]
    async fn test_report_uses_presence_checks() {
        let source = MockAssetSource::new()
            .with_asset("A/scans/front.png", &b"png"[..])
            .with_asset("A/A.schematic", &b"(kicad_sch)"[..])
            .with_asset("B/B.schematic", &b"(kicad_sch)"[..]);
        let a = CatalogEntry::new("A", true, false, "");
        let b = CatalogEntry::new("B", false, false, "");

        let report = check_assets(&source, [&a, &b]).await;
        assert_eq!(
            report,
            vec![
                AssetAvailability {
                    name: "A".to_string(),
                    front: true,
                    back: false,
                    schematic: true,
                },
                AssetAvailability {
                    name: "B".to_string(),
                    front: false,
                    back: false,
                    schematic: false,
                },
            ]
        );

        let calls = source.get_calls();
        assert!(calls.contains(&MockCall::Probe {
            path: "A/A.schematic".to_string()
        }));
        // no schematic listed for B, so none is looked up
        assert!(!calls.contains(&MockCall::Probe {
            path: "B/B.schematic".to_string()
        }));
    }

    #[tokio::test]
    async fn test_failed_check_counts_as_missing() {
        let source = MockAssetSource::new().with_response("A/scans/back.png", || {
            Err(AssetError::Status {
                path: "A/scans/back.png".to_string(),
                status: 503,
            })
        });
        let a = CatalogEntry::new("A", false, false, "");
        let report = check_assets(&source, [&a]).await;
        assert!(!report[0].back);
    }

    #[test]
    fn test_summary_line() {
        let row = AssetAvailability {
            name: "DMG-A02".to_string(),
            front: true,
            back: false,
            schematic: true,
        };
        assert_eq!(row.summary(), "DMG-A02    front:yes back:no  schematic:yes");
    }
}
