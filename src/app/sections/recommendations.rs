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
        Section::Recommendations.alternative_name(),
        (palette::ACCENT_FROM, palette::ACCENT_TO),
        &translate("recommendations-title"),
        Some(&translate("recommendations-subtitle")),
    );
    ui.add_space(spacing::XLARGE);
    let items = owned(app.catalog.recommended());
    app.draw_items_grid(ui, "recommendations", &items, false);
}
