use hotspotkit_core::{
    FigureKind, GeometryError, HotspotError, HotspotRecord, HotspotSettings, PercentPoint,
    PercentSize, Size,
};
use hotspotkit_editor::headless::HeadlessSurface;
use hotspotkit_editor::{HotspotCollection, ManipulationAdapter, SurfaceEvent, SurfaceMetrics};

fn metrics() -> SurfaceMetrics {
    SurfaceMetrics::new(Size::new(400.0, 400.0), 16.0)
}

fn collection() -> (HotspotCollection, HeadlessSurface) {
    let mut surface = HeadlessSurface::new(metrics());
    let record = HotspotRecord::new(
        FigureKind::Rectangle,
        PercentPoint::new(30.0, 40.0),
        PercentSize::new(10.0, 10.0),
        HotspotSettings::default(),
    );
    let collection = HotspotCollection::hydrate(vec![record], &mut surface);
    (collection, surface)
}

#[test]
fn test_resize_scales_units_by_font_size() {
    let (mut collection, _surface) = collection();
    let adapter = ManipulationAdapter::new();

    // 5 units * 16 px / (400 px / 100) = 20%
    let applied = adapter
        .on_resize(&mut collection, 0, 5.0, 2.5, metrics())
        .unwrap();

    assert!(applied);
    let size = collection.get(0).unwrap().size();
    assert!((size.width - 20.0).abs() < 1e-9);
    assert!((size.height - 10.0).abs() < 1e-9);
}

#[test]
fn test_resize_follows_font_size() {
    let (mut collection, _surface) = collection();
    let adapter = ManipulationAdapter::new();
    let large_font = SurfaceMetrics::new(Size::new(400.0, 400.0), 24.0);

    adapter
        .on_resize(&mut collection, 0, 5.0, 5.0, large_font)
        .unwrap();

    let size = collection.get(0).unwrap().size();
    assert!((size.width - 30.0).abs() < 1e-9);
}

#[test]
fn test_resize_rejects_empty_and_non_finite_sizes() {
    let (mut collection, _surface) = collection();
    let adapter = ManipulationAdapter::new();
    let before = collection.get(0).unwrap().size();

    for (width, height) in [
        (0.0, 3.0),
        (3.0, -1.0),
        (f64::NAN, 3.0),
        (3.0, f64::INFINITY),
    ] {
        let applied = adapter
            .on_resize(&mut collection, 0, width, height, metrics())
            .unwrap();
        assert!(!applied, "{width}x{height} should be refused");
        assert_eq!(collection.get(0).unwrap().size(), before);
    }
}

#[test]
fn test_dispatch_routes_resize() {
    let (mut collection, _surface) = collection();
    let mut adapter = ManipulationAdapter::new();
    let element = collection.handle_of(0).unwrap();

    let request = adapter
        .dispatch(
            &mut collection,
            SurfaceEvent::ResizeSettled {
                element,
                width: 2.5,
                height: 5.0,
            },
            metrics(),
        )
        .unwrap();

    assert!(request.is_none());
    let size = collection.get(0).unwrap().size();
    assert!((size.width - 10.0).abs() < 1e-9);
    assert!((size.height - 20.0).abs() < 1e-9);
}

#[test]
fn test_degenerate_container_aborts_gesture() {
    let (mut collection, _surface) = collection();
    let adapter = ManipulationAdapter::new();
    let flat = SurfaceMetrics::new(Size::new(0.0, 400.0), 16.0);
    let before = collection.get(0).cloned();

    let err = adapter
        .on_move(&mut collection, 0, 10.0, 10.0, flat)
        .unwrap_err();
    assert!(matches!(
        err,
        HotspotError::Geometry(GeometryError::DegenerateContainer { .. })
    ));

    let err = adapter
        .on_resize(&mut collection, 0, 5.0, 5.0, flat)
        .unwrap_err();
    assert!(matches!(
        err,
        HotspotError::Geometry(GeometryError::DegenerateContainer { .. })
    ));
    assert_eq!(collection.get(0).cloned(), before);
}
