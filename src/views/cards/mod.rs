pub mod items;
pub mod render;
pub use render::{content_card, CardActions};
