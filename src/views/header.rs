use eframe::egui::{self, Align, Align2, Color32, FontId, Layout, RichText, Sense, Stroke, Vec2};

use crate::localization::{translate, translate_with};
use crate::types::Section;
use crate::ui_constants::{palette, spacing};
use crate::views::filters::items::search_field::search_field;
use crate::views::filters::{EnumWithAlternativeNames, LocalizableName};
use crate::views::ui_helpers::{gradient_button, icon_tile, mix, paint_counter_badge};

/// Clicks collected from the header this frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderActions {
    pub navigate: Option<Section>,
    pub query_changed: bool,
    pub bell_clicked: bool,
    pub open_settings: bool,
    pub open_logs: bool,
    pub open_about: bool,
}

/// Draws the sticky top panel: logo, search, cart/bell/avatar buttons and the
/// navigation tabs. State is passed in by reference; `query` is edited in place.
pub fn draw_header_panel(
    ctx: &egui::Context,
    active: Section,
    query: &mut String,
    cart_len: usize,
    notifications: u32,
) -> HeaderActions {
    let mut actions = HeaderActions::default();

    egui::TopBottomPanel::top("header_panel")
        .frame(
            egui::Frame::none()
                .fill(palette::PANEL)
                .stroke(Stroke::new(1.0, palette::BORDER))
                .inner_margin(egui::Margin::symmetric(spacing::LARGE, spacing::LARGE)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Logo
                icon_tile(ui, 40.0, "✨", palette::PRIMARY_FROM, palette::PRIMARY_TO);
                ui.add_space(spacing::MEDIUM);
                ui.label(
                    RichText::new(translate("app-name"))
                        .size(24.0)
                        .strong()
                        .color(palette::PRIMARY_TO),
                );

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = spacing::MEDIUM;

                    // Avatar -> profile
                    if avatar_button(ui, active == Section::Profile)
                        .on_hover_text(translate("header-profile-tooltip"))
                        .clicked()
                    {
                        actions.navigate = Some(Section::Profile);
                    }

                    // Bell (inert counter)
                    let bell = icon_button(ui, "🔔", notifications as usize)
                        .on_hover_text(translate_with(
                            "header-notifications-tooltip",
                            &[("count", notifications.to_string())],
                        ));
                    actions.bell_clicked = bell.clicked();

                    // Cart
                    if icon_button(ui, "🛒", cart_len)
                        .on_hover_text(translate("header-cart-tooltip"))
                        .clicked()
                    {
                        actions.navigate = Some(Section::Cart);
                    }

                    // App menu
                    ui.menu_button("☰", |ui| {
                        if ui.button(translate("menu-settings")).clicked() {
                            actions.open_settings = true;
                            ui.close_menu();
                        }
                        if ui.button(translate("menu-logs")).clicked() {
                            actions.open_logs = true;
                            ui.close_menu();
                        }
                        if ui.button(translate("menu-about")).clicked() {
                            actions.open_about = true;
                            ui.close_menu();
                        }
                    });

                    // Search takes what is left in the middle, capped like a md:max-w-md field
                    let search_w = (ui.available_width() - 2.0 * spacing::XLARGE).clamp(120.0, 440.0);
                    ui.add_space(spacing::XLARGE);
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.add_space((ui.available_width() - search_w).max(0.0) / 2.0);
                        actions.query_changed = search_field(ui, query, search_w);
                    });
                });
            });

            ui.add_space(spacing::LARGE);

            // Navigation tabs
            egui::ScrollArea::horizontal()
                .id_source("nav_tabs_scroll")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = spacing::SMALL;
                        for section in Section::NAV {
                            let label = format!("{}  {}", section.alternative_name(), translate(section.loc_key()));
                            let clicked = if section == active {
                                gradient_button(ui, label, Vec2::new(0.0, 34.0)).clicked()
                            } else {
                                ui.add(
                                    egui::Button::new(RichText::new(label).size(15.0).color(palette::TEXT))
                                        .frame(false)
                                        .min_size(Vec2::new(0.0, 34.0)),
                                )
                                .clicked()
                            };
                            if clicked && section != active {
                                actions.navigate = Some(section);
                            }
                        }
                    });
                });
        });

    actions
}

/// Frameless glyph button with an optional counter badge.
fn icon_button(ui: &mut egui::Ui, glyph: &str, count: usize) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(36.0), Sense::click());
    let painter = ui.painter();
    if response.hovered() {
        painter.rect_filled(rect, egui::Rounding::same(8.0), palette::MUTED_FILL);
    }
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(20.0),
        palette::TEXT,
    );
    paint_counter_badge(painter, rect, count);
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Round avatar with the "YOU" fallback initials.
fn avatar_button(ui: &mut egui::Ui, active: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(36.0), Sense::click());
    let painter = ui.painter();
    let radius = rect.width() / 2.0;
    painter.circle_filled(rect.center(), radius, mix(palette::PRIMARY_FROM, palette::PRIMARY_TO, 0.5));
    let ring = if active || response.hovered() {
        Color32::WHITE
    } else {
        palette::PRIMARY_FROM
    };
    painter.circle_stroke(rect.center(), radius, Stroke::new(2.0, ring));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        translate("header-avatar"),
        FontId::proportional(12.0),
        Color32::WHITE,
    );
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
