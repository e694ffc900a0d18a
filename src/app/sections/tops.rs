use eframe::egui;

use super::owned;
use crate::app::StoreApp;
use crate::localization::translate;
use crate::types::Section;
use crate::ui_constants::{palette, spacing};
use crate::views::filters::EnumWithAlternativeNames;
use crate::views::ui_helpers::section_heading;

pub(super) fn draw(app: &mut StoreApp, ui: &mut egui::Ui) {
    section_heading(
        ui,
        Section::Tops.alternative_name(),
        (palette::SECONDARY_FROM, palette::SECONDARY_TO),
        &translate("tops-title"),
        Some(&translate("tops-subtitle")),
    );
    ui.add_space(spacing::XLARGE);
    // Ranked by likes; the first places get a badge.
    let items = owned(app.catalog.tops());
    app.draw_items_grid(ui, "tops", &items, true);
}
