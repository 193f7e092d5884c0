use hotspotkit_core::{PixelRect, Point, Size};
use hotspotkit_editor::{place_dialog, PlacementInput, PlacementMode};

fn hotspot() -> PixelRect {
    PixelRect::new(100.0, 100.0, 40.0, 40.0)
}

#[test]
fn test_side_placement() {
    let placement = place_dialog(&PlacementInput {
        container_width: 800.0,
        image_region: Size::new(500.0, 400.0),
        dialog: Size::new(250.0, 200.0),
        hotspot: hotspot(),
        anchor: Point::ZERO,
    });

    assert_eq!(placement.mode, PlacementMode::Side);
    assert_eq!(placement.width, 250.0);
}

#[test]
fn test_underneath_placement() {
    let placement = place_dialog(&PlacementInput {
        container_width: 800.0,
        image_region: Size::new(780.0, 100.0),
        dialog: Size::new(250.0, 300.0),
        hotspot: hotspot(),
        anchor: Point::ZERO,
    });

    assert_eq!(placement.mode, PlacementMode::Underneath);
}

#[test]
fn test_inside_placement_centres_on_anchor() {
    let placement = place_dialog(&PlacementInput {
        container_width: 400.0,
        image_region: Size::new(400.0, 400.0),
        dialog: Size::new(200.0, 150.0),
        hotspot: hotspot(),
        anchor: Point::new(40.0, 40.0),
    });

    assert_eq!(placement.mode, PlacementMode::Inside);
    assert!((placement.x - 60.0).abs() < 1e-9, "x = {}", placement.x);
    assert!((placement.y - 85.0).abs() < 1e-9, "y = {}", placement.y);
    assert_eq!(placement.width, 200.0);
}

#[test]
fn test_placement_depends_only_on_input() {
    let input = PlacementInput {
        container_width: 600.0,
        image_region: Size::new(500.0, 350.0),
        dialog: Size::new(220.0, 180.0),
        hotspot: PixelRect::new(450.0, 10.0, 30.0, 30.0),
        anchor: Point::new(-5.0, 12.0),
    };

    let first = place_dialog(&input);
    let second = place_dialog(&input);
    assert_eq!(first, second);
    assert_eq!(first.mode, PlacementMode::Inside);
    assert!(first.x >= 0.0 && first.x + first.width <= 500.0);
    assert!(first.y >= 0.0 && first.y + 180.0 <= 350.0);
}
