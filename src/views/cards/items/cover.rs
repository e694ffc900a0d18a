use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Vec2};

use crate::localization::translate;
use crate::market::ContentItem;
use crate::ui_constants::{card, palette};
use crate::views::filters::{EnumWithAlternativeNames, LocalizableName};
use crate::views::ui_helpers::{kind_gradient, mix, paint_diagonal_gradient, paint_pill, paint_vertical_fade};

pub struct CoverActions {
    pub favorite_clicked: bool,
}

/// Draws the kind gradient cover with its overlays:
/// - rank circle (tops) and "Trending" pill on the top-left,
/// - heart toggle on the top-right,
/// - kind pill on the bottom-left over a dark fade.
pub fn draw_cover(
    ui: &mut egui::Ui,
    item: &ContentItem,
    inner_w: f32,
    is_favorite: bool,
    rank: Option<usize>,
) -> CoverActions {
    let cover_h = inner_w * card::COVER_ASPECT;
    let (cover_rect, _) = ui.allocate_exact_size(Vec2::new(inner_w, cover_h), Sense::hover());
    if !ui.is_rect_visible(cover_rect) {
        return CoverActions { favorite_clicked: false };
    }
    let painter = ui.painter_at(cover_rect);

    // Gradient at 80% over the card fill
    let (from, to) = kind_gradient(item.kind);
    paint_diagonal_gradient(
        &painter,
        cover_rect,
        mix(palette::CARD_FILL, from, 0.8),
        mix(palette::CARD_FILL, to, 0.8),
    );
    painter.text(
        cover_rect.center(),
        Align2::CENTER_CENTER,
        item.kind.alternative_name(),
        FontId::proportional(cover_h * 0.3),
        Color32::from_white_alpha(60),
    );

    let pad = card::BADGE_PAD;
    let r = card::ROUND_BUTTON_RADIUS;
    let mut left_x = cover_rect.min.x + pad;

    if let Some(place) = rank {
        let center = egui::pos2(left_x + r, cover_rect.min.y + pad + r);
        painter.circle(
            center,
            r,
            mix(palette::SECONDARY_FROM, palette::SECONDARY_TO, 0.5),
            Stroke::new(2.0, Color32::WHITE),
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            place.to_string(),
            FontId::proportional(16.0),
            Color32::WHITE,
        );
        left_x += 2.0 * r + crate::ui_constants::spacing::SMALL;
    }

    if item.trending {
        paint_pill(
            &painter,
            egui::pos2(left_x, cover_rect.min.y + pad + r),
            Align2::LEFT_CENTER,
            &translate("card-trending"),
            FontId::proportional(12.0),
            mix(palette::PRIMARY_FROM, palette::PRIMARY_TO, 0.5),
            Stroke::NONE,
        );
    }

    // Heart toggle
    let heart_center = egui::pos2(cover_rect.max.x - pad - r, cover_rect.min.y + pad + r);
    let heart_rect = egui::Rect::from_center_size(heart_center, Vec2::splat(2.0 * r));
    let heart_resp = ui
        .interact(heart_rect, ui.id().with(("card_heart", item.id)), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(if is_favorite {
            translate("card-favorite-remove")
        } else {
            translate("card-favorite-add")
        });
    let heart_bg = if heart_resp.hovered() {
        Color32::from_black_alpha(150)
    } else {
        Color32::from_black_alpha(100)
    };
    painter.circle_filled(heart_center, r, heart_bg);
    let (glyph, color) = if is_favorite {
        ("♥", palette::FAVORITE)
    } else {
        ("♡", Color32::WHITE)
    };
    painter.text(heart_center, Align2::CENTER_CENTER, glyph, FontId::proportional(16.0), color);

    // Bottom shade + kind pill
    let shade = egui::Rect::from_min_max(
        egui::pos2(cover_rect.min.x, cover_rect.max.y - 44.0),
        cover_rect.max,
    );
    paint_vertical_fade(&painter, shade, Color32::from_black_alpha(200));
    paint_pill(
        &painter,
        egui::pos2(cover_rect.min.x + pad, cover_rect.max.y - pad),
        Align2::LEFT_BOTTOM,
        &format!("{} {}", item.kind.alternative_name(), translate(item.kind.loc_key())),
        FontId::proportional(11.0),
        Color32::from_black_alpha(100),
        Stroke::new(1.0, Color32::from_white_alpha(50)),
    );

    CoverActions {
        favorite_clicked: heart_resp.clicked(),
    }
}
