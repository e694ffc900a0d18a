use eframe::egui::{self, RichText, Stroke};

use crate::localization::translate;
use crate::ui_constants::{palette, spacing};

/// Bottom strip with the copyright line.
pub fn draw_footer_panel(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer_panel")
        .frame(
            egui::Frame::none()
                .fill(palette::PANEL)
                .stroke(Stroke::new(1.0, palette::BORDER))
                .inner_margin(egui::Margin::symmetric(spacing::LARGE, spacing::LARGE)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(translate("footer-text"))
                        .small()
                        .color(palette::MUTED_TEXT),
                );
            });
        });
}
