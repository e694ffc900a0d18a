use eframe::egui::{self, RichText, Stroke, Vec2};

use crate::app::StoreApp;
use crate::localization::{translate, translate_with};
use crate::market::listing::{ACCEPTED_FORMATS, MAX_UPLOAD_MB};
use crate::market::{ListingError, Payout};
use crate::ui_constants::{palette, spacing, FORM_MAX_WIDTH};
use crate::views::filters::draw_kind_picker;
use crate::views::ui_helpers::{card_frame, gradient_button, outline_button};

pub(super) fn draw(app: &mut StoreApp, ui: &mut egui::Ui) {
    let width = ui.available_width().min(FORM_MAX_WIDTH);
    let pad = ((ui.available_width() - width) / 2.0).max(0.0);

    ui.horizontal_top(|ui| {
        ui.add_space(pad);
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.label(
                RichText::new(translate("create-title"))
                    .size(30.0)
                    .strong()
                    .color(palette::TEXT),
            );
            ui.label(RichText::new(translate("create-subtitle")).color(palette::MUTED_TEXT));
            ui.add_space(spacing::XLARGE);

            card_frame().inner_margin(egui::Margin::same(spacing::XLARGE)).show(ui, |ui| {
                ui.set_width(ui.available_width());
                draw_form(app, ui);
            });
        });
    });
}

fn field_label(ui: &mut egui::Ui, key: &str) {
    ui.label(RichText::new(translate(key)).strong().color(palette::TEXT));
    ui.add_space(spacing::SMALL);
}

fn draw_form(app: &mut StoreApp, ui: &mut egui::Ui) {
    let draft = &mut app.draft;

    field_label(ui, "create-kind");
    draw_kind_picker(ui, &mut draft.kind);
    ui.add_space(spacing::LARGE);

    field_label(ui, "create-name");
    ui.add(
        egui::TextEdit::singleline(&mut draft.title)
            .hint_text(translate("create-name-placeholder"))
            .desired_width(f32::INFINITY),
    );
    ui.add_space(spacing::LARGE);

    field_label(ui, "create-description");
    ui.add(
        egui::TextEdit::multiline(&mut draft.description)
            .hint_text(translate("create-description-placeholder"))
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(spacing::LARGE);

    field_label(ui, "create-price");
    ui.add(
        egui::TextEdit::singleline(&mut draft.price_input)
            .hint_text("1000")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(spacing::SMALL);
    let percent = Payout::CREATOR_PERCENT.to_string();
    let (hint, color) = match draft.payout() {
        Ok(None) => (
            translate_with("create-price-hint", &[("percent", percent)]),
            palette::MUTED_TEXT,
        ),
        Ok(Some(payout)) => (
            translate_with(
                "create-price-payout",
                &[
                    ("amount", payout.creator_share.to_string()),
                    ("percent", percent),
                ],
            ),
            palette::SUCCESS,
        ),
        Err(ListingError::Zero) => (translate("create-price-zero"), palette::ERROR),
        Err(ListingError::NotANumber(_)) => (translate("create-price-invalid"), palette::ERROR),
        Err(ListingError::TooLarge(_)) => (translate("create-price-too-large"), palette::ERROR),
    };
    ui.label(RichText::new(hint).small().color(color));
    ui.add_space(spacing::LARGE);

    field_label(ui, "create-file");
    draw_drop_zone(ui);
    ui.add_space(spacing::XLARGE);

    ui.horizontal(|ui| {
        let half = ((ui.available_width() - spacing::LARGE) / 2.0).floor();
        if gradient_button(ui, translate("create-publish"), Vec2::new(half, 44.0)).clicked() {
            log::info!(
                "publish clicked: {} {:?} (publishing is not connected)",
                draft.kind,
                draft.title.trim()
            );
        }
        ui.add_space(spacing::LARGE);
        if outline_button(ui, translate("create-cancel"), Vec2::new(half, 44.0)).clicked() {
            draft.reset();
            log::debug!("listing draft reset");
        }
    });
}

fn draw_drop_zone(ui: &mut egui::Ui) {
    let size = Vec2::new(ui.available_width(), 140.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let hovered = response.hovered();
    let stroke_color = if hovered { palette::PRIMARY_FROM } else { palette::BORDER };
    let painter = ui.painter_at(rect);
    painter.rect(
        rect.shrink(1.0),
        crate::ui_constants::card::ROUNDING,
        if hovered { palette::MUTED_FILL } else { palette::CARD_FILL },
        Stroke::new(2.0, stroke_color),
    );
    painter.text(
        rect.center() - Vec2::new(0.0, 28.0),
        egui::Align2::CENTER_CENTER,
        "⬆",
        egui::FontId::proportional(30.0),
        palette::MUTED_TEXT,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 8.0),
        egui::Align2::CENTER_CENTER,
        translate("create-file-drop"),
        egui::FontId::proportional(14.0),
        palette::TEXT,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 30.0),
        egui::Align2::CENTER_CENTER,
        translate_with(
            "create-file-formats",
            &[
                ("formats", ACCEPTED_FORMATS.to_string()),
                ("size", MAX_UPLOAD_MB.to_string()),
            ],
        ),
        egui::FontId::proportional(12.0),
        palette::MUTED_TEXT,
    );
    if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
        log::debug!("file picker clicked (uploads are not connected)");
    }
}
