// Building blocks for selectors and inputs used by render.rs and the header.
pub mod search_field;
pub mod segmented_panel;
