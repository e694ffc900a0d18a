use eframe::egui::{self, RichText, Vec2};

use super::owned;
use crate::app::StoreApp;
use crate::localization::translate;
use crate::market::{group_thousands, ProfileStats};
use crate::ui_constants::{palette, spacing};
use crate::views::ui_helpers::{card_frame, highlight_frame, icon_tile, outline_button, paint_pill};

pub(super) fn draw(app: &mut StoreApp, ui: &mut egui::Ui) {
    draw_header_card(ui, &app.profile);
    ui.add_space(spacing::XLARGE);
    draw_stat_tiles(ui, &app.profile);
    ui.add_space(spacing::SECTION);

    ui.label(
        RichText::new(translate("profile-my-works"))
            .size(24.0)
            .strong()
            .color(palette::TEXT),
    );
    ui.add_space(spacing::LARGE);
    let works = owned(app.catalog.my_works());
    app.draw_items_grid(ui, "my_works", &works, false);
}

fn draw_header_card(ui: &mut egui::Ui, stats: &ProfileStats) {
    highlight_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            icon_tile(ui, 96.0, "👤", palette::PRIMARY_FROM, palette::PRIMARY_TO);
            ui.add_space(spacing::XLARGE);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(translate("profile-title"))
                            .size(28.0)
                            .strong()
                            .color(palette::TEXT),
                    );
                    if stats.verified {
                        ui.add_space(spacing::MEDIUM);
                        let (rect, _) = ui.allocate_exact_size(Vec2::new(110.0, 24.0), egui::Sense::hover());
                        paint_pill(
                            ui.painter(),
                            rect.left_center(),
                            egui::Align2::LEFT_CENTER,
                            &translate("profile-verified"),
                            egui::FontId::proportional(12.0),
                            palette::PRIMARY_FROM.gamma_multiply(0.35),
                            egui::Stroke::new(1.0, palette::PRIMARY_FROM),
                        );
                    }
                });
                ui.label(RichText::new(translate("profile-roles")).color(palette::MUTED_TEXT));
                ui.add_space(spacing::LARGE);
                ui.horizontal(|ui| {
                    stat_figure(ui, &stats.sales.to_string(), &translate("profile-sales"));
                    ui.add_space(spacing::XLARGE);
                    stat_figure(ui, &stats.rating_label(), &translate("profile-rating"));
                    ui.add_space(spacing::XLARGE);
                    stat_figure(ui, &stats.works.to_string(), &translate("profile-works"));
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if outline_button(ui, translate("profile-settings"), Vec2::new(120.0, 36.0)).clicked() {
                    log::debug!("profile settings clicked (no action)");
                }
            });
        });
    });
}

fn stat_figure(ui: &mut egui::Ui, value: &str, label: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(value).size(22.0).strong().color(palette::TEXT));
        ui.label(RichText::new(label).small().color(palette::MUTED_TEXT));
    });
}

fn draw_stat_tiles(ui: &mut egui::Ui, stats: &ProfileStats) {
    let tiles = [
        ("💰", translate("profile-earned"), format!("{}₽", group_thousands(stats.earned)), palette::SUCCESS),
        ("📈", translate("profile-growth"), stats.growth_label(), palette::INFO),
        ("👥", translate("profile-followers"), group_thousands(u64::from(stats.followers)), palette::PRIMARY_TO),
    ];
    ui.columns(tiles.len(), |cols| {
        for (ui, (glyph, label, value, accent)) in cols.iter_mut().zip(tiles) {
            card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    icon_tile(ui, 48.0, glyph, accent, accent.gamma_multiply(0.7));
                    ui.add_space(spacing::LARGE);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(label).color(palette::MUTED_TEXT));
                        ui.label(RichText::new(value).size(22.0).strong().color(accent));
                    });
                });
            });
        }
    });
}
