pub mod cards;
pub mod filters;
pub mod footer;
pub mod header;
pub mod ui_helpers;
