use eframe::egui::epaint::Mesh;
use eframe::egui::{self, Align2, Color32, FontId, Rect, Response, RichText, Rounding, Sense, Shape, Stroke, Vec2};

use crate::types::ContentKind;
use crate::ui_constants::{palette, spacing};

/// Linear blend of two colors, `t` in 0..=1.
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let l = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        l(a.r(), b.r()),
        l(a.g(), b.g()),
        l(a.b(), b.b()),
        l(a.a(), b.a()),
    )
}

/// Gradient stops for a content kind.
pub fn kind_gradient(kind: ContentKind) -> (Color32, Color32) {
    let ([r0, g0, b0], [r1, g1, b1]) = kind.gradient_rgb();
    (Color32::from_rgb(r0, g0, b0), Color32::from_rgb(r1, g1, b1))
}

/// Fills `rect` with a top-left -> bottom-right gradient.
/// Mesh quads have no rounding, so callers keep gradients off rounded frame corners.
pub fn paint_diagonal_gradient(painter: &egui::Painter, rect: Rect, from: Color32, to: Color32) {
    let mid = mix(from, to, 0.5);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), from);
    mesh.colored_vertex(rect.right_top(), mid);
    mesh.colored_vertex(rect.right_bottom(), to);
    mesh.colored_vertex(rect.left_bottom(), mid);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Vertical fade from transparent to `to` (bottom shade under cover badges).
pub fn paint_vertical_fade(painter: &egui::Painter, rect: Rect, to: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), Color32::TRANSPARENT);
    mesh.colored_vertex(rect.right_top(), Color32::TRANSPARENT);
    mesh.colored_vertex(rect.right_bottom(), to);
    mesh.colored_vertex(rect.left_bottom(), to);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Rounded pill with centered text. Returns its rect.
pub fn paint_pill(
    painter: &egui::Painter,
    anchor: egui::Pos2,
    align: Align2,
    text: &str,
    font: FontId,
    fill: Color32,
    stroke: Stroke,
) -> Rect {
    let galley = painter.layout_no_wrap(text.to_string(), font, Color32::WHITE);
    let size = galley.size() + Vec2::new(14.0, 6.0);
    let rect = align.anchor_size(anchor, size);
    painter.rect(rect, Rounding::same(size.y / 2.0), fill, stroke);
    painter.galley(rect.center() - galley.size() / 2.0, galley, Color32::WHITE);
    rect
}

/// Small round counter (cart entries, notifications) on the top-right corner of `target`.
pub fn paint_counter_badge(painter: &egui::Painter, target: Rect, count: usize) {
    if count == 0 {
        return;
    }
    let center = target.right_top() + Vec2::new(-2.0, 2.0);
    let radius = 9.0;
    painter.circle_filled(center, radius, mix(palette::SECONDARY_FROM, palette::SECONDARY_TO, 0.5));
    painter.text(
        center,
        Align2::CENTER_CENTER,
        count.to_string(),
        FontId::proportional(11.0),
        Color32::WHITE,
    );
}

/// Button painted with the primary gradient.
pub fn gradient_button(ui: &mut egui::Ui, text: impl Into<String>, min_size: Vec2) -> Response {
    gradient_button_with(ui, text, min_size, palette::PRIMARY_FROM, palette::PRIMARY_TO, 15.0)
}

pub fn gradient_button_with(
    ui: &mut egui::Ui,
    text: impl Into<String>,
    min_size: Vec2,
    from: Color32,
    to: Color32,
    font_size: f32,
) -> Response {
    let text = text.into();
    let font = FontId::proportional(font_size);
    let galley = ui.painter().layout_no_wrap(text, font, Color32::WHITE);
    let size = Vec2::new(
        (galley.size().x + 2.0 * spacing::LARGE).max(min_size.x),
        (galley.size().y + spacing::MEDIUM * 2.0).max(min_size.y),
    );
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let (from, to) = if response.hovered() {
            (from.gamma_multiply(0.9), to.gamma_multiply(0.9))
        } else {
            (from, to)
        };
        paint_diagonal_gradient(&painter, rect, from, to);
        painter.galley(rect.center() - galley.size() / 2.0, galley, Color32::WHITE);
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Plain bordered button in the muted style.
pub fn outline_button(ui: &mut egui::Ui, text: impl Into<String>, min_size: Vec2) -> Response {
    ui.add(
        egui::Button::new(RichText::new(text.into()).color(palette::TEXT))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, palette::BORDER))
            .min_size(min_size),
    )
}

/// Square tile with a gradient and a centered glyph (logo, section icons, cart rows).
pub fn icon_tile(ui: &mut egui::Ui, size: f32, glyph: &str, from: Color32, to: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let painter = ui.painter_at(rect);
    paint_diagonal_gradient(&painter, rect, from, to);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(size * 0.5),
        Color32::WHITE,
    );
    response
}

/// Section title with an icon tile and optional subtitle.
pub fn section_heading(
    ui: &mut egui::Ui,
    glyph: &str,
    gradient: (Color32, Color32),
    title: &str,
    subtitle: Option<&str>,
) {
    ui.horizontal(|ui| {
        icon_tile(ui, 48.0, glyph, gradient.0, gradient.1);
        ui.add_space(spacing::MEDIUM);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).size(26.0).strong().color(palette::TEXT));
            if let Some(sub) = subtitle {
                ui.label(RichText::new(sub).color(palette::MUTED_TEXT));
            }
        });
    });
}

/// Centered "nothing here" card with a call-to-action. Returns true when the button was clicked.
pub fn empty_placeholder(ui: &mut egui::Ui, glyph: &str, title: &str, hint: &str, action: &str) -> bool {
    let mut clicked = false;
    card_frame().inner_margin(egui::Margin::same(48.0)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(glyph).size(56.0).color(palette::MUTED_TEXT));
            ui.add_space(spacing::LARGE);
            ui.label(RichText::new(title).size(20.0).strong().color(palette::TEXT));
            ui.add_space(spacing::SMALL);
            ui.label(RichText::new(hint).color(palette::MUTED_TEXT));
            ui.add_space(spacing::LARGE);
            clicked = gradient_button(ui, action, Vec2::new(180.0, 36.0)).clicked();
        });
    });
    clicked
}

/// Standard card frame of the storefront.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(palette::CARD_FILL)
        .stroke(Stroke::new(1.0, palette::BORDER))
        .rounding(Rounding::same(crate::ui_constants::card::ROUNDING))
        .inner_margin(egui::Margin::same(spacing::LARGE))
}

/// Card frame tinted with the primary color, used by hero and profile header.
pub fn highlight_frame() -> egui::Frame {
    card_frame()
        .fill(mix(palette::CARD_FILL, palette::PRIMARY_FROM, 0.12))
        .stroke(Stroke::new(1.0, palette::PRIMARY_FROM.gamma_multiply(0.5)))
        .inner_margin(egui::Margin::same(spacing::SECTION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints_and_midpoint() {
        let a = Color32::from_rgb(0, 100, 200);
        let b = Color32::from_rgb(100, 200, 0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Color32::from_rgb(50, 150, 100));
        assert_eq!(mix(a, b, 7.0), b);
    }
}
