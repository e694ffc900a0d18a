use eframe::egui::{self, RichText, Vec2};

use crate::app::StoreApp;
use crate::localization::{translate, translate_with};
use crate::market::{format_price, CartEntry, CartSummary, PLATFORM_FEE_PERCENT};
use crate::types::Section;
use crate::ui_constants::{palette, spacing, CART_STACK_BREAKPOINT};
use crate::views::filters::EnumWithAlternativeNames;
use crate::views::ui_helpers::{
    card_frame, empty_placeholder, gradient_button_with, icon_tile, kind_gradient,
};

pub(super) fn draw(app: &mut StoreApp, ui: &mut egui::Ui) {
    ui.label(
        RichText::new(translate("cart-title"))
            .size(30.0)
            .strong()
            .color(palette::TEXT),
    );
    ui.add_space(spacing::XLARGE);

    if app.cart.is_empty() {
        let go = empty_placeholder(
            ui,
            "🛒",
            &translate("cart-empty-title"),
            &translate("cart-empty-hint"),
            &translate("go-to-catalog"),
        );
        if go {
            app.view.navigate(Section::Catalog);
        }
        return;
    }

    let summary = app.cart.summary();
    let mut remove: Option<u32> = None;
    let avail = ui.available_width();

    if avail < CART_STACK_BREAKPOINT {
        for entry in app.cart.entries() {
            if entry_row(ui, entry) {
                remove = Some(entry.item.id);
            }
            ui.add_space(spacing::LARGE);
        }
        summary_card(ui, &summary);
    } else {
        let list_w = ((avail - spacing::XLARGE) * 2.0 / 3.0).floor();
        let summary_w = avail - spacing::XLARGE - list_w;
        ui.horizontal_top(|ui| {
            ui.allocate_ui_with_layout(
                Vec2::new(list_w, 0.0),
                egui::Layout::top_down(egui::Align::Min),
                |ui| {
                    ui.set_width(list_w);
                    for entry in app.cart.entries() {
                        if entry_row(ui, entry) {
                            remove = Some(entry.item.id);
                        }
                        ui.add_space(spacing::LARGE);
                    }
                },
            );
            ui.add_space(spacing::XLARGE);
            ui.allocate_ui_with_layout(
                Vec2::new(summary_w, 0.0),
                egui::Layout::top_down(egui::Align::Min),
                |ui| {
                    ui.set_width(summary_w);
                    summary_card(ui, &summary);
                },
            );
        });
    }

    if let Some(id) = remove {
        app.cart.remove(id);
    }
}

/// One line of the cart. Returns true when the remove button was clicked.
fn entry_row(ui: &mut egui::Ui, entry: &CartEntry) -> bool {
    let mut removed = false;
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let (from, to) = kind_gradient(entry.item.kind);
            icon_tile(ui, 80.0, entry.item.kind.alternative_name(), from, to);
            ui.add_space(spacing::LARGE);
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&entry.item.title)
                        .size(17.0)
                        .strong()
                        .color(palette::TEXT),
                );
                ui.label(RichText::new(format!("@{}", entry.item.creator)).color(palette::MUTED_TEXT));
                ui.add_space(spacing::SMALL);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format_price(entry.item.price))
                            .size(17.0)
                            .strong()
                            .color(palette::PRIMARY_TO),
                    );
                    ui.label(RichText::new(quantity_label(entry.quantity)).color(palette::MUTED_TEXT));
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                removed = ui
                    .add(egui::Button::new(RichText::new("🗑").size(18.0).color(palette::FAVORITE)).frame(false))
                    .on_hover_text(translate("cart-remove-tooltip"))
                    .clicked();
            });
        });
    });
    removed
}

fn quantity_label(quantity: u32) -> String {
    format!("×{quantity}")
}

/// The fee is shown as a deduction: "-310₽".
fn fee_label(fee: u64) -> String {
    format!("-{}", format_price(fee))
}

fn summary_line(ui: &mut egui::Ui, label: &str, value: String, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(palette::MUTED_TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).strong().color(color));
        });
    });
}

fn summary_card(ui: &mut egui::Ui, summary: &CartSummary) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(translate("cart-summary-title"))
                .size(20.0)
                .strong()
                .color(palette::TEXT),
        );
        ui.add_space(spacing::LARGE);
        summary_line(ui, &translate("cart-works-cost"), format_price(summary.total), palette::TEXT);
        summary_line(
            ui,
            &translate_with("cart-platform-fee", &[("percent", PLATFORM_FEE_PERCENT.to_string())]),
            fee_label(summary.fee_rounded()),
            palette::TEXT,
        );
        summary_line(
            ui,
            &translate("cart-creators-get"),
            format_price(summary.earnings_rounded()),
            palette::SUCCESS,
        );
        ui.add_space(spacing::MEDIUM);
        ui.separator();
        ui.add_space(spacing::MEDIUM);
        ui.horizontal(|ui| {
            ui.label(RichText::new(translate("cart-to-pay")).size(18.0).strong().color(palette::TEXT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format_price(summary.total))
                        .size(22.0)
                        .strong()
                        .color(palette::PRIMARY_TO),
                );
            });
        });
        ui.add_space(spacing::XLARGE);
        let width = ui.available_width();
        let pay = gradient_button_with(
            ui,
            translate("cart-pay-button"),
            Vec2::new(width, 48.0),
            palette::SUCCESS,
            palette::SUCCESS.gamma_multiply(0.8),
            16.0,
        );
        if pay.clicked() {
            log::info!("pay clicked for {} (payments are not connected)", format_price(summary.total));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_reads_as_a_deduction() {
        assert_eq!(fee_label(310), "-310₽");
        assert_eq!(fee_label(0), "-0₽");
    }

    #[test]
    fn quantity_shown_even_for_one() {
        assert_eq!(quantity_label(1), "×1");
        assert_eq!(quantity_label(3), "×3");
    }
}
