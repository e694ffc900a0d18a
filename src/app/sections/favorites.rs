use eframe::egui::{self, RichText};

use super::owned;
use crate::app::StoreApp;
use crate::localization::translate;
use crate::types::Section;
use crate::ui_constants::{palette, spacing};
use crate::views::ui_helpers::empty_placeholder;

pub(super) fn draw(app: &mut StoreApp, ui: &mut egui::Ui) {
    ui.label(
        RichText::new(translate("favorites-title"))
            .size(30.0)
            .strong()
            .color(palette::TEXT),
    );
    ui.add_space(spacing::XLARGE);

    if app.favorites.is_empty() {
        let go = empty_placeholder(
            ui,
            "♡",
            &translate("favorites-empty-title"),
            &translate("favorites-empty-hint"),
            &translate("go-to-catalog"),
        );
        if go {
            app.view.navigate(Section::Catalog);
        }
        return;
    }

    let items = owned(app.favorites.items(&app.catalog));
    app.draw_items_grid(ui, "favorites", &items, false);
}
