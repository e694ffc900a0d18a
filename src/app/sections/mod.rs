// One file per content block of the central panel.

use eframe::egui;

use super::StoreApp;
use crate::market::ContentItem;
use crate::types::Section;

mod cart;
mod catalog;
mod create;
mod favorites;
mod home;
mod profile;
mod recommendations;
mod tops;

pub(super) fn draw_section(app: &mut StoreApp, ui: &mut egui::Ui) {
    match app.view.section {
        Section::Home => home::draw(app, ui),
        Section::Catalog => catalog::draw(app, ui),
        Section::Recommendations => recommendations::draw(app, ui),
        Section::Tops => tops::draw(app, ui),
        Section::Favorites => favorites::draw(app, ui),
        Section::Cart => cart::draw(app, ui),
        Section::Profile => profile::draw(app, ui),
        Section::Create => create::draw(app, ui),
    }
}

/// Detach a catalog query from the app borrow so the grid can mutate the cart.
fn owned(items: Vec<&ContentItem>) -> Vec<ContentItem> {
    items.into_iter().cloned().collect()
}
