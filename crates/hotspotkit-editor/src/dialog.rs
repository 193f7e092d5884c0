//! Dialog host interface.
//!
//! The dialog is a panel with the hotspot's sub-form and done/remove
//! buttons. Whoever draws it reports the measurements placement needs
//! and shows or hides the panel; showing also disables the rest of the
//! editor until the panel is hidden again.

use hotspotkit_core::Size;

use crate::placement::DialogPlacement;
use crate::subform::Subform;

pub trait DialogHost {
    /// Outer width of the whole editor.
    fn container_width(&self) -> f64;

    /// Size of the image region hotspots are drawn in.
    fn image_region(&self) -> Size;

    /// Natural size of the dialog once `form` is attached to it.
    fn measure_dialog(&mut self, form: &dyn Subform) -> Size;

    /// Shows the dialog at `placement`.
    fn show(&mut self, placement: &DialogPlacement);

    /// Hides the dialog and re-enables the editor.
    fn hide(&mut self);
}
