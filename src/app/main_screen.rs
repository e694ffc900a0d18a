use eframe::egui;

use super::{about_ui, logs_ui, sections, settings, StoreApp};
use crate::ui_constants::{palette, spacing, NOTIFICATIONS_COUNT};
use crate::views::footer::draw_footer_panel;
use crate::views::header::draw_header_panel;

pub(super) fn update_main(app: &mut StoreApp, ctx: &egui::Context) {
    // Header: logo, search, cart/bell/avatar and the nav bar
    let actions = draw_header_panel(
        ctx,
        app.view.section,
        &mut app.view.query,
        app.cart.len(),
        NOTIFICATIONS_COUNT,
    );
    if let Some(section) = actions.navigate {
        app.view.navigate(section);
    }
    if actions.query_changed {
        app.view.on_query_changed();
    }
    if actions.bell_clicked {
        log::debug!("notifications clicked (no action)");
    }
    if actions.open_settings {
        settings::open_settings();
        ctx.request_repaint();
    }
    if actions.open_logs {
        logs_ui::open_logs();
        ctx.request_repaint();
    }
    if actions.open_about {
        about_ui::open_about();
        ctx.request_repaint();
    }

    if settings::with_settings(|s| s.show_footer) {
        draw_footer_panel(ctx);
    }

    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(palette::BACKGROUND)
                .inner_margin(egui::Margin::same(spacing::XLARGE)),
        )
        .show(ctx, |ui| {
            // One scroll position per section
            egui::ScrollArea::vertical()
                .id_source(("section_scroll", app.view.section as usize))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    sections::draw_section(app, ui);
                });
        });

    logs_ui::draw_logs_viewport(ctx);
    about_ui::draw_about_viewport(ctx);
    settings::draw_settings_viewport(ctx);
}
