use eframe::egui;

use crate::market::catalog::rank_badge;
use crate::market::ContentItem;
use crate::views::cards::content_card;

/// Column count and left padding that center `cols` cards of `card_w` in `avail_w`.
pub fn grid_layout(avail_w: f32, card_w: f32, gap: f32) -> (usize, f32) {
    let cols = (((avail_w + gap) / (card_w + gap)).floor() as usize).max(1);
    let row_w = cols as f32 * card_w + (cols - 1) as f32 * gap;
    let left_pad = ((avail_w - row_w) / 2.0).max(0.0);
    (cols, left_pad)
}

/// Card grid rendering split from app.rs. Card clicks are collected while
/// drawing and applied to the cart/favorites afterwards.
impl super::StoreApp {
    pub(super) fn draw_items_grid(
        &mut self,
        ui: &mut egui::Ui,
        grid_id: &str,
        items: &[ContentItem],
        ranked: bool,
    ) {
        if items.is_empty() {
            return;
        }
        let card_w = self.card_width();
        let gap = crate::ui_constants::CARD_GAP;
        let avail_w = ui.available_width().floor();
        let (cols, left_pad) = grid_layout(avail_w, card_w, gap);

        let mut toggled: Vec<u32> = Vec::new();
        let mut added: Vec<usize> = Vec::new();

        for (r, row) in items.chunks(cols).enumerate() {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.add_space(left_pad);
                for (c, item) in row.iter().enumerate() {
                    let position = r * cols + c;
                    let rank = if ranked { rank_badge(position) } else { None };
                    let is_favorite = self.favorites.contains(item.id);
                    // The same item may show up in two grids of one page
                    let actions = ui
                        .push_id((grid_id, position), |ui| {
                            ui.vertical(|ui| content_card(ui, item, card_w, is_favorite, rank))
                                .inner
                        })
                        .inner;
                    if actions.favorite_toggled {
                        toggled.push(item.id);
                    }
                    if actions.add_to_cart {
                        added.push(position);
                    }
                    if c + 1 < row.len() {
                        ui.add_space(gap);
                    }
                }
            });
            ui.add_space(gap);
        }

        for id in toggled {
            self.favorites.toggle(id);
        }
        for position in added {
            if let Some(item) = items.get(position) {
                self.cart.add(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::grid_layout;

    #[test]
    fn three_columns_fit_exactly() {
        // 3 * 280 + 2 * 16 = 872
        let (cols, pad) = grid_layout(872.0, 280.0, 16.0);
        assert_eq!(cols, 3);
        assert_eq!(pad, 0.0);
    }

    #[test]
    fn leftover_is_split_evenly() {
        let (cols, pad) = grid_layout(900.0, 280.0, 16.0);
        assert_eq!(cols, 3);
        assert_eq!(pad, 14.0);
    }

    #[test]
    fn narrow_window_still_has_one_column() {
        let (cols, pad) = grid_layout(100.0, 280.0, 16.0);
        assert_eq!(cols, 1);
        assert_eq!(pad, 0.0);
    }
}
