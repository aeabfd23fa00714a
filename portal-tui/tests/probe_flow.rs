use asset_client::{AssetError, MockAssetSource, MockCall};
use catalog::{Catalog, CatalogEntry};
use image::{ImageFormat, Rgb, RgbImage};
use portal_tui::display::{ImageSlot, SchematicSlot};
use portal_tui::input::InputEvent;
use portal_tui::probe::ProbeDispatcher;
use portal_tui::schematic::TextViewerFactory;
use portal_tui::CatalogController;
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

fn png(color: [u8; 3]) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    RgbImage::from_pixel(4, 4, Rgb(color))
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new("DMG-A02", true, true, "first"),
        CatalogEntry::new("DMG-A03", false, false, "second"),
    ])
    .unwrap()
}

#[tokio::test]
async fn slow_probe_for_old_selection_is_ignored() {
    let source = Arc::new(
        MockAssetSource::new()
            .with_asset("DMG-A02/scans/front.png", png([255, 0, 0]))
            .with_delay("DMG-A02/scans/front.png", Duration::from_millis(150))
            .with_asset("DMG-A03/scans/front.png", png([0, 0, 255])),
    );
    let (dispatcher, mut rx) = ProbeDispatcher::new(source.clone());
    let mut controller = CatalogController::new(catalog(), Box::new(TextViewerFactory));

    dispatcher.dispatch(controller.handle(InputEvent::ActivateItem(0)));
    dispatcher.dispatch(controller.handle(InputEvent::ActivateItem(1)));

    // 3 probes for the first board, 2 for the second
    let mut applied = Vec::new();
    for _ in 0..5 {
        let completion = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        let path = completion.ticket.path.clone();
        applied.push((path, controller.apply(completion)));
    }

    for (path, was_applied) in &applied {
        assert_eq!(*was_applied, path.starts_with("DMG-A03/"), "{}", path);
    }
    // the delayed probe really was the last one in
    assert_eq!(applied[4].0, "DMG-A02/scans/front.png");

    let front = controller.display().front.image().unwrap();
    assert_eq!(front.path, "DMG-A03/scans/front.png");
    assert_eq!(front.sample(0.5, 0.5), [0, 0, 255]);
    assert!(matches!(controller.display().back, ImageSlot::Missing));
    assert_eq!(controller.display().schematic, SchematicSlot::Unavailable);
    assert!(!controller.viewer().is_mounted());
}

#[tokio::test]
async fn schematic_mounts_through_dispatcher() {
    let source = Arc::new(
        MockAssetSource::new().with_asset("DMG-A02/DMG-A02.schematic", &b"(kicad_sch\n)"[..]),
    );
    let (dispatcher, mut rx) = ProbeDispatcher::new(source.clone());
    let mut controller = CatalogController::new(catalog(), Box::new(TextViewerFactory));

    dispatcher.dispatch(controller.handle(InputEvent::ActivateItem(0)));
    for _ in 0..3 {
        let completion = rx.recv().await.unwrap();
        assert!(controller.apply(completion));
    }

    assert_eq!(controller.display().schematic, SchematicSlot::Mounted);
    assert_eq!(
        controller.viewer().current().unwrap().path(),
        "DMG-A02/DMG-A02.schematic"
    );
    assert!(source
        .get_calls()
        .contains(&MockCall::Fetch {
            path: "DMG-A02/DMG-A02.schematic".to_string()
        }));
}

#[tokio::test]
async fn transport_errors_become_placeholders() {
    let source = Arc::new(
        MockAssetSource::new()
            .with_response("DMG-A03/scans/front.png", || {
                Err(AssetError::Status {
                    path: "DMG-A03/scans/front.png".to_string(),
                    status: 500,
                })
            }),
    );
    let (dispatcher, mut rx) = ProbeDispatcher::new(source);
    let mut controller = CatalogController::new(catalog(), Box::new(TextViewerFactory));

    dispatcher.dispatch(controller.handle(InputEvent::ActivateItem(1)));
    for _ in 0..2 {
        let completion = rx.recv().await.unwrap();
        controller.apply(completion);
    }

    assert!(matches!(controller.display().front, ImageSlot::Missing));
    assert!(matches!(controller.display().back, ImageSlot::Missing));
}
