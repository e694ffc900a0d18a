use eframe::egui::{self, RichText};

use super::owned;
use crate::app::StoreApp;
use crate::localization::{translate, translate_with};
use crate::ui_constants::{palette, spacing};
use crate::views::filters::draw_kind_tabs;

pub(super) fn draw(app: &mut StoreApp, ui: &mut egui::Ui) {
    ui.label(
        RichText::new(translate("catalog-title"))
            .size(30.0)
            .strong()
            .color(palette::TEXT),
    );
    ui.add_space(spacing::LARGE);
    draw_kind_tabs(ui, &mut app.view.kind_filter);
    ui.add_space(spacing::XLARGE);

    let items = owned(app.catalog.browse(app.view.kind_filter, &app.view.query));
    if app.view.has_query() {
        ui.label(
            RichText::new(translate_with(
                "catalog-search-results",
                &[
                    ("query", app.view.query.trim().to_string()),
                    ("count", items.len().to_string()),
                ],
            ))
            .color(palette::MUTED_TEXT),
        );
        ui.add_space(spacing::LARGE);
    }

    if items.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(spacing::SECTION);
            ui.label(RichText::new("🔍").size(48.0).color(palette::MUTED_TEXT));
            ui.add_space(spacing::MEDIUM);
            ui.label(
                RichText::new(translate("catalog-nothing-found"))
                    .size(18.0)
                    .color(palette::MUTED_TEXT),
            );
        });
        return;
    }
    app.draw_items_grid(ui, "catalog", &items, false);
}
