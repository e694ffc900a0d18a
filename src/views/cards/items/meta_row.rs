use eframe::egui::{self, Align, Layout, RichText, Vec2};

use crate::localization::translate;
use crate::market::{format_price, ContentItem};
use crate::ui_constants::{card, palette};
use crate::views::ui_helpers::gradient_button;

/// Bottom row of a card: likes, price and the add-to-cart button.
/// Returns true when the cart button was clicked.
pub fn draw_meta_row(ui: &mut egui::Ui, item: &ContentItem) -> bool {
    let mut add_clicked = false;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.label(
            RichText::new(format!("♥ {}", item.likes))
                .small()
                .color(palette::MUTED_TEXT),
        );
        ui.label(
            RichText::new(format_price(item.price))
                .size(18.0)
                .strong()
                .color(palette::PRIMARY_TO),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            add_clicked = gradient_button(ui, "🛒", Vec2::splat(card::CART_BUTTON_SIZE))
                .on_hover_text(translate("card-add-to-cart"))
                .clicked();
        });
    });
    add_clicked
}
