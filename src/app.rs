// Application state and the eframe entry point. Drawing lives in the submodules:
// main_screen lays out the panels, sections draws the central block, grid
// renders card grids.

use eframe::{egui, App};

use crate::market::{Cart, Catalog, Favorites, ListingDraft, ProfileStats};
use crate::ui_constants::{palette, CARD_WIDTH_MAX, CARD_WIDTH_MIN};

mod about_ui;
mod grid;
mod logs_ui;
mod main_screen;
mod sections;
pub mod settings;
mod state;

use state::ViewState;

pub struct StoreApp {
    catalog: Catalog,
    profile: ProfileStats,
    view: ViewState,
    cart: Cart,
    favorites: Favorites,
    draft: ListingDraft,
}

impl Default for StoreApp {
    fn default() -> Self {
        Self {
            catalog: Catalog::mock(),
            profile: ProfileStats::mock(),
            view: ViewState::default(),
            cart: Cart::new(),
            favorites: Favorites::new(),
            draft: ListingDraft::default(),
        }
    }
}

impl StoreApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = palette::PANEL;
        visuals.window_fill = palette::PANEL;
        visuals.extreme_bg_color = palette::MUTED_FILL;
        visuals.override_text_color = Some(palette::TEXT);
        visuals.selection.bg_fill = palette::PRIMARY_FROM;
        cc.egui_ctx.set_visuals(visuals);

        let app = Self::default();
        log::info!("storefront ready: {} items in catalog", app.catalog.len());
        app
    }

    fn card_width(&self) -> f32 {
        settings::with_settings(|s| s.card_width).clamp(CARD_WIDTH_MIN, CARD_WIDTH_MAX)
    }
}

impl App for StoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep the logs window live while it is open
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }
        main_screen::update_main(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_empty_on_home() {
        let app = StoreApp::default();
        assert_eq!(app.view.section, crate::types::Section::Home);
        assert!(app.cart.is_empty());
        assert!(app.favorites.is_empty());
        assert_eq!(app.catalog.len(), 6);
        assert!(app.draft.payout().is_ok());
    }
}
