use eframe::egui::{self, RichText, Vec2};

use super::owned;
use crate::app::StoreApp;
use crate::localization::translate;
use crate::ui_constants::{palette, spacing};
use crate::views::ui_helpers::{gradient_button, highlight_frame, outline_button, paint_pill};

pub(super) fn draw(app: &mut StoreApp, ui: &mut egui::Ui) {
    draw_hero(ui);
    ui.add_space(spacing::SECTION);

    let trending = owned(app.catalog.trending());
    row_heading(ui, &translate("home-trending"));
    ui.add_space(spacing::LARGE);
    app.draw_items_grid(ui, "home_trending", &trending, false);

    ui.add_space(spacing::XLARGE);
    let newest = owned(app.catalog.newest());
    row_heading(ui, &translate("home-newest"));
    ui.add_space(spacing::LARGE);
    app.draw_items_grid(ui, "home_newest", &newest, false);
}

fn draw_hero(ui: &mut egui::Ui) {
    highlight_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            let (badge_rect, _) = ui.allocate_exact_size(Vec2::new(260.0, 28.0), egui::Sense::hover());
            paint_pill(
                ui.painter(),
                badge_rect.center(),
                egui::Align2::CENTER_CENTER,
                &translate("home-hero-badge"),
                egui::FontId::proportional(13.0),
                palette::MUTED_FILL,
                egui::Stroke::new(1.0, palette::BORDER),
            );
            ui.add_space(spacing::LARGE);
            ui.label(
                RichText::new(translate("home-hero-title"))
                    .size(40.0)
                    .strong()
                    .color(palette::TEXT),
            );
            ui.label(
                RichText::new(translate("home-hero-title-accent"))
                    .size(40.0)
                    .strong()
                    .color(palette::PRIMARY_TO),
            );
            ui.add_space(spacing::MEDIUM);
            ui.label(
                RichText::new(translate("home-hero-subtitle"))
                    .size(17.0)
                    .color(palette::MUTED_TEXT),
            );
            ui.add_space(spacing::XLARGE);

            let button_size = Vec2::new(180.0, 44.0);
            let row_w = button_size.x * 2.0 + spacing::LARGE;
            ui.allocate_ui_with_layout(
                Vec2::new(row_w, button_size.y),
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    if gradient_button(ui, translate("home-start-selling"), button_size).clicked() {
                        log::debug!("start selling clicked (no action)");
                    }
                    ui.add_space(spacing::LARGE);
                    if outline_button(ui, translate("home-see-tops"), button_size).clicked() {
                        log::debug!("see tops clicked (no action)");
                    }
                },
            );
        });
    });
}

fn row_heading(ui: &mut egui::Ui, title: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).size(24.0).strong().color(palette::TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .link(RichText::new(translate("home-see-all")).color(palette::PRIMARY_TO))
                .clicked()
            {
                log::debug!("see all clicked (no action)");
            }
        });
    });
}
