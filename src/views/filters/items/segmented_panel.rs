use eframe::egui::{self, Align2, Color32, FontId, Rect, Rounding, Stroke, Ui, Vec2};
use strum::{EnumCount, IntoEnumIterator};

use crate::localization::translate;
use crate::ui_constants::palette;
use crate::views::filters::{EnumWithAlternativeNames, LocalizableName};
use crate::views::ui_helpers::paint_diagonal_gradient;

/// Stateless segmented selector over all variants of `T`.
/// Each segment shows the variant glyph and its localized name; the selected
/// one is filled with the primary gradient. Returns true when the selection
/// changed this frame.
pub fn segmented_panel<T>(ui: &mut Ui, id_source: &str, current: &mut T, width: f32) -> bool
where
    T: IntoEnumIterator + EnumCount + EnumWithAlternativeNames + LocalizableName + PartialEq + Clone,
{
    let count = T::COUNT.max(1);
    let height = (ui.spacing().interact_size.y * 1.5).clamp(30.0, 40.0);
    let rounding = Rounding::same(6.0);

    let (container_rect, _) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    let painter = ui.painter_at(container_rect);
    painter.rect(container_rect, rounding, palette::MUTED_FILL, Stroke::new(1.0, palette::BORDER));

    let seg_w = container_rect.width() / count as f32;
    let mut changed = false;

    for (i, variant) in T::iter().enumerate() {
        let seg_min = container_rect.min + Vec2::new(i as f32 * seg_w, 0.0);
        let seg_rect = Rect::from_min_size(seg_min, Vec2::new(seg_w, container_rect.height()));
        let inner = seg_rect.shrink(3.0);
        let is_selected = *current == variant;

        let id = ui.id().with(("segmented_panel", id_source, i));
        let response = ui
            .interact(seg_rect, id, egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if is_selected {
            paint_diagonal_gradient(&painter, inner, palette::PRIMARY_FROM, palette::PRIMARY_TO);
        } else if response.hovered() {
            painter.rect_filled(inner, Rounding::same(4.0), Color32::from_white_alpha(8));
        }

        let text_color = if is_selected { Color32::WHITE } else { palette::MUTED_TEXT };
        painter.text(
            seg_rect.center(),
            Align2::CENTER_CENTER,
            format!("{} {}", variant.alternative_name(), translate(variant.loc_key())),
            FontId::proportional(14.0),
            text_color,
        );

        if response.clicked() && !is_selected {
            *current = variant;
            changed = true;
        }
    }

    changed
}
