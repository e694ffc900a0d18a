// Settings UI: egui viewport window with staged values (applied on Save).

use eframe::egui;
use lazy_static::lazy_static;
use std::sync::RwLock;

use super::store::save_settings_to_disk;
use super::{with_settings, with_settings_mut, AppSettings};
use crate::localization::{self, translate, SupportedLang};
use crate::ui_constants::{CARD_WIDTH_MAX, CARD_WIDTH_MIN};

lazy_static! {
    static ref SETTINGS_OPEN: RwLock<bool> = RwLock::new(false);
    static ref STAGED: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

pub fn open_settings() {
    let current = with_settings(|s| s.clone());
    if let Ok(mut staged) = STAGED.write() {
        *staged = current;
    }
    if let Ok(mut open) = SETTINGS_OPEN.write() {
        *open = true;
    }
}

fn close_settings() {
    if let Ok(mut open) = SETTINGS_OPEN.write() {
        *open = false;
    }
}

fn apply_staged() {
    let staged = STAGED.read().map(|s| s.clone()).unwrap_or_default().normalized();
    let language = staged.language;
    with_settings_mut(|st| *st = staged);
    save_settings_to_disk();
    if let Err(e) = localization::initialize_localization(language) {
        log::error!("Failed to switch language: {e}");
    }
}

fn language_label(lang: Option<SupportedLang>) -> String {
    match lang {
        Some(l) => l.native_name().to_string(),
        None => translate("settings-language-auto"),
    }
}

pub fn draw_settings_viewport(ctx: &egui::Context) {
    if !SETTINGS_OPEN.read().map(|g| *g).unwrap_or(false) {
        return;
    }
    let viewport_id = egui::ViewportId::from_hash_of("settings_window");
    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(translate("settings-title"))
            .with_inner_size([420.0, 240.0])
            .with_resizable(false),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                close_settings();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            let mut staged = STAGED.read().map(|s| s.clone()).unwrap_or_default();
            let mut save = false;
            let mut cancel = false;

            egui::CentralPanel::default().show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([16.0, 10.0])
                    .show(ui, |ui| {
                        ui.label(translate("settings-language"));
                        egui::ComboBox::from_id_source("settings_language")
                            .selected_text(language_label(staged.language))
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut staged.language, None, language_label(None));
                                for lang in SupportedLang::ALL {
                                    ui.selectable_value(&mut staged.language, Some(lang), lang.native_name());
                                }
                            });
                        ui.end_row();

                        ui.label(translate("settings-card-width"));
                        ui.add(
                            egui::Slider::new(&mut staged.card_width, CARD_WIDTH_MIN..=CARD_WIDTH_MAX)
                                .step_by(10.0)
                                .suffix(" px"),
                        );
                        ui.end_row();

                        ui.label(translate("settings-show-footer"));
                        ui.checkbox(&mut staged.show_footer, "");
                        ui.end_row();
                    });

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    save = ui.button(translate("settings-save")).clicked();
                    cancel = ui.button(translate("settings-cancel")).clicked();
                });
            });

            if let Ok(mut w) = STAGED.write() {
                *w = staged;
            }
            if save {
                apply_staged();
            }
            if save || cancel {
                close_settings();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        },
    );
}
