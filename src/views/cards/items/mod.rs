// Facade module for card building blocks.
// Re-export card primitives so render.rs can import via views::cards::items.
pub mod card;
mod cover;
mod meta_row;
pub use card::{content_card, CardActions};
