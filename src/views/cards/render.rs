// Render facade for cards: re-export the implementation from views::cards::items
// so sections keep using views::cards::{content_card, CardActions}.

pub use crate::views::cards::items::{content_card, CardActions};
