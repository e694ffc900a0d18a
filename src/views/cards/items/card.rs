use eframe::egui::{self, Label, RichText, Rounding, Stroke};

use crate::market::ContentItem;
use crate::ui_constants::{card, palette};

use super::cover::draw_cover;
use super::meta_row::draw_meta_row;

/// What the user did with a card this frame; the caller applies it to the cart/favorites.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardActions {
    pub favorite_toggled: bool,
    pub add_to_cart: bool,
}

/// Fixed-width content card.
/// Strictly constrained to `width` so rows form a proper grid.
/// `rank` puts a place badge on the cover (tops list).
pub fn content_card(
    ui: &mut egui::Ui,
    item: &ContentItem,
    width: f32,
    is_favorite: bool,
    rank: Option<usize>,
) -> CardActions {
    ui.set_min_width(width);
    ui.set_max_width(width);

    // Border lights up while hovered; the hover state comes from the previous frame.
    let hover_id = ui.id().with(("content_card_hovered", item.id));
    let was_hovered = ui
        .ctx()
        .memory(|m| m.data.get_temp::<bool>(hover_id))
        .unwrap_or(false);
    let stroke = if was_hovered {
        Stroke::new(1.0, palette::PRIMARY_FROM.gamma_multiply(0.7))
    } else {
        Stroke::new(1.0, palette::BORDER)
    };

    let mut actions = CardActions::default();

    let frame_out = egui::Frame::none()
        .fill(palette::CARD_FILL)
        .stroke(stroke)
        .rounding(Rounding::same(card::ROUNDING))
        .inner_margin(egui::Margin::same(card::INNER_MARGIN))
        .show(ui, |ui| {
            let inner_w = width - 2.0 * card::INNER_MARGIN;
            ui.set_width(inner_w);

            let cover = draw_cover(ui, item, inner_w, is_favorite, rank);
            actions.favorite_toggled = cover.favorite_clicked;

            ui.add_space(crate::ui_constants::spacing::MEDIUM);
            ui.add(
                Label::new(RichText::new(&item.title).size(17.0).strong().color(palette::TEXT))
                    .truncate(true),
            );
            ui.add(
                Label::new(
                    RichText::new(format!("👤 {}", item.creator))
                        .small()
                        .color(palette::MUTED_TEXT),
                )
                .truncate(true),
            );
            ui.add_space(crate::ui_constants::spacing::SMALL);

            actions.add_to_cart = draw_meta_row(ui, item);
        });

    let hovered = frame_out.response.hovered() || ui.rect_contains_pointer(frame_out.response.rect);
    if hovered != was_hovered {
        ui.ctx().request_repaint();
    }
    ui.ctx()
        .memory_mut(|m| m.data.insert_temp(hover_id, hovered));

    actions
}
