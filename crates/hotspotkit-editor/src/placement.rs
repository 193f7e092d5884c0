//! Dialog placement.
//!
//! Decides where the hotspot editing dialog goes. The rules are tried in
//! order and the first one that fits wins:
//!
//! 1. **Side** - the editor is wider than the image region by at least
//!    the dialog width plus [`DIALOG_MARGIN`]; the dialog follows the
//!    image region.
//! 2. **Underneath** - the image region is shorter than the dialog height
//!    plus [`DIALOG_MARGIN`]; the dialog goes below the image.
//! 3. **Inside** - the dialog is centred on the anchor and clamped to
//!    the image region.
//!
//! [`place_dialog`] is a pure function of its input and must be called
//! again on every open, since both the editor and the dialog may have
//! changed size in between.

use hotspotkit_core::constants::DIALOG_MARGIN;
use hotspotkit_core::{PixelRect, Point, Size};

/// Where the dialog ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementMode {
    Side,
    Underneath,
    Inside,
}

/// Measurements the placement is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementInput {
    /// Outer width of the whole editor.
    pub container_width: f64,
    /// Size of the image region hotspots live in.
    pub image_region: Size,
    /// Natural size of the dialog with its form attached.
    pub dialog: Size,
    /// Pixel bounds of the selected hotspot inside the image region.
    pub hotspot: PixelRect,
    /// Click or release point, measured from the hotspot centre.
    pub anchor: Point,
}

/// Computed dialog position.
///
/// `x` and `y` are offsets inside the image region and only meaningful
/// for [`PlacementMode::Inside`]. `width` is the dialog's natural width,
/// or the image region width when the dialog had to be stretched to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogPlacement {
    pub mode: PlacementMode,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Places the dialog for the given measurements.
pub fn place_dialog(input: &PlacementInput) -> DialogPlacement {
    let dialog = input.dialog;
    let region = input.image_region;
    let room_beside = input.container_width - region.width;

    if room_beside >= dialog.width + DIALOG_MARGIN {
        return DialogPlacement {
            mode: PlacementMode::Side,
            x: 0.0,
            y: 0.0,
            width: dialog.width,
        };
    }

    if region.height < dialog.height + DIALOG_MARGIN {
        return DialogPlacement {
            mode: PlacementMode::Underneath,
            x: 0.0,
            y: 0.0,
            width: dialog.width,
        };
    }

    let center = input.hotspot.center();
    let raw_x = center.x + input.anchor.x - dialog.width / 2.0;
    let raw_y = center.y + input.anchor.y - dialog.height / 2.0;

    let (x, width) = if dialog.width >= region.width {
        (0.0, region.width)
    } else {
        (raw_x.min(region.width - dialog.width).max(0.0), dialog.width)
    };
    // Region height covers dialog height here; the underneath rule caught the rest.
    let y = raw_y.min(region.height - dialog.height).max(0.0);

    DialogPlacement {
        mode: PlacementMode::Inside,
        x,
        y,
        width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(container_width: f64, region: Size, dialog: Size) -> PlacementInput {
        PlacementInput {
            container_width,
            image_region: region,
            dialog,
            hotspot: PixelRect::new(100.0, 100.0, 40.0, 40.0),
            anchor: Point::ZERO,
        }
    }

    #[test]
    fn test_side_when_room_beside() {
        let placement = place_dialog(&input(
            800.0,
            Size::new(500.0, 400.0),
            Size::new(250.0, 150.0),
        ));
        assert_eq!(placement.mode, PlacementMode::Side);
    }

    #[test]
    fn test_side_boundary_is_inclusive() {
        // 300 of room for a 280 wide dialog: exactly width + margin
        let placement = place_dialog(&input(
            800.0,
            Size::new(500.0, 400.0),
            Size::new(280.0, 150.0),
        ));
        assert_eq!(placement.mode, PlacementMode::Side);

        let placement = place_dialog(&input(
            800.0,
            Size::new(500.0, 400.0),
            Size::new(281.0, 150.0),
        ));
        assert_ne!(placement.mode, PlacementMode::Side);
    }

    #[test]
    fn test_underneath_when_image_too_short() {
        let placement = place_dialog(&input(
            800.0,
            Size::new(780.0, 100.0),
            Size::new(200.0, 300.0),
        ));
        assert_eq!(placement.mode, PlacementMode::Underneath);
    }

    #[test]
    fn test_inside_stretches_wide_dialog() {
        let placement = place_dialog(&input(
            400.0,
            Size::new(400.0, 400.0),
            Size::new(450.0, 150.0),
        ));
        assert_eq!(placement.mode, PlacementMode::Inside);
        assert_eq!(placement.x, 0.0);
        assert_eq!(placement.width, 400.0);
    }

    #[test]
    fn test_inside_clamps_to_region() {
        let mut i = input(400.0, Size::new(400.0, 400.0), Size::new(200.0, 150.0));
        i.hotspot = PixelRect::new(380.0, 380.0, 20.0, 20.0);
        let placement = place_dialog(&i);
        assert_eq!(placement.x, 200.0);
        assert_eq!(placement.y, 250.0);

        i.hotspot = PixelRect::new(0.0, 0.0, 20.0, 20.0);
        let placement = place_dialog(&i);
        assert_eq!(placement.x, 0.0);
        assert_eq!(placement.y, 0.0);
    }
}
