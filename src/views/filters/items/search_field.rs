use eframe::egui::{TextEdit, Ui};

/// Header search input. Returns true if the text changed this frame.
pub fn search_field(ui: &mut Ui, text: &mut String, width: f32) -> bool {
    let resp = ui.add_sized(
        [width, 32.0],
        TextEdit::singleline(text)
            .hint_text(format!("🔍 {}", crate::localization::translate("header-search-placeholder"))),
    );
    resp.changed()
}
