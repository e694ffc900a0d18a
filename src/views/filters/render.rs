use eframe::egui;

use crate::types::{ContentKind, KindFilter};
use crate::views::filters::items::segmented_panel::segmented_panel;

/// Catalog tabs: All / Music / Covers / Texts. Returns true when changed.
pub fn draw_kind_tabs(ui: &mut egui::Ui, filter: &mut KindFilter) -> bool {
    let width = ui.available_width().min(460.0);
    let changed = segmented_panel(ui, "catalog_kind_tabs", filter, width);
    if changed {
        log::debug!("catalog filter -> {}", filter);
    }
    changed
}

/// Kind selector of the "create" form, spans the full form width.
pub fn draw_kind_picker(ui: &mut egui::Ui, kind: &mut ContentKind) -> bool {
    let width = ui.available_width();
    segmented_panel(ui, "create_kind_picker", kind, width)
}
