// Logs viewport: the in-app log buffer, narrowed down by minimum level.

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;
use std::sync::RwLock;

use crate::localization::{translate, translate_with};
use crate::logger::LogEntry;

#[derive(Debug, Clone, Copy)]
struct LogsWindow {
    open: bool,
    autoscroll: bool,
    /// Least severe level still listed.
    min_level: Level,
}

impl Default for LogsWindow {
    fn default() -> Self {
        Self {
            open: false,
            autoscroll: true,
            min_level: Level::Trace,
        }
    }
}

lazy_static! {
    static ref LOGS_WINDOW: RwLock<LogsWindow> = RwLock::new(LogsWindow::default());
}

fn window_state() -> LogsWindow {
    LOGS_WINDOW.read().map(|w| *w).unwrap_or_default()
}

fn store_state(state: LogsWindow) {
    if let Ok(mut w) = LOGS_WINDOW.write() {
        *w = state;
    }
}

pub fn open_logs() {
    let mut state = window_state();
    state.open = true;
    store_state(state);
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    let mut state = window_state();
    if !state.open {
        return;
    }

    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("logs_window"),
        egui::ViewportBuilder::default()
            .with_title(translate("logs-title"))
            .with_inner_size([820.0, 520.0])
            .with_resizable(true),
        |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                state.open = false;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            let entries = crate::logger::at_least(state.min_level);
            egui::TopBottomPanel::top("logs_toolbar").show(ctx, |ui| {
                draw_toolbar(ui, &mut state, &entries);
            });
            egui::CentralPanel::default().show(ctx, |ui| {
                draw_rows(ui, &entries, state.autoscroll);
            });
        },
    );

    store_state(state);
}

fn draw_toolbar(ui: &mut egui::Ui, state: &mut LogsWindow, entries: &[LogEntry]) {
    ui.horizontal(|ui| {
        ui.label(translate("logs-level"));
        egui::ComboBox::from_id_source("logs_min_level")
            .selected_text(state.min_level.as_str())
            .show_ui(ui, |ui| {
                for level in Level::iter() {
                    ui.selectable_value(&mut state.min_level, level, level.as_str());
                }
            });
        ui.separator();
        if ui.button(translate("logs-clear")).clicked() {
            crate::logger::clear();
        }
        if ui.button(translate("logs-copy")).clicked() {
            let text = entries.iter().map(LogEntry::line).collect::<Vec<_>>().join("\n");
            ui.output_mut(|o| o.copied_text = text);
        }
        ui.checkbox(&mut state.autoscroll, translate("logs-autoscroll"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(translate_with(
                "logs-lines",
                &[("count", entries.len().to_string())],
            ));
        });
    });
}

fn draw_rows(ui: &mut egui::Ui, entries: &[LogEntry], autoscroll: bool) {
    let font = egui::FontId::monospace(12.0);
    let row_height = ui.fonts(|f| f.row_height(&font)) + 2.0;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(autoscroll)
        .show_rows(ui, row_height, entries.len(), |ui, range| {
            for entry in &entries[range] {
                ui.label(
                    egui::RichText::new(entry.line())
                        .font(font.clone())
                        .color(color_for_level(entry.level)),
                );
            }
        });
}

fn color_for_level(level: Level) -> egui::Color32 {
    use crate::ui_constants::palette;
    match level {
        Level::Error => palette::ERROR,
        Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        Level::Info => palette::TEXT,
        Level::Debug => palette::INFO,
        Level::Trace => palette::MUTED_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_starts_closed_listing_everything() {
        let w = LogsWindow::default();
        assert!(!w.open);
        assert!(w.autoscroll);
        assert_eq!(w.min_level, Level::Trace);
    }

    #[test]
    fn levels_are_told_apart() {
        assert_ne!(color_for_level(Level::Error), color_for_level(Level::Warn));
        assert_ne!(color_for_level(Level::Debug), color_for_level(Level::Info));
    }
}
