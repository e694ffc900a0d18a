pub mod items;
pub mod render;
pub use render::{draw_kind_picker, draw_kind_tabs};

/// Short glyph shown for an enum variant in compact selectors.
pub trait EnumWithAlternativeNames {
    fn alternative_name(&self) -> &'static str;
}

/// Fluent message id for an enum variant.
pub trait LocalizableName {
    fn loc_key(&self) -> &'static str;
}
