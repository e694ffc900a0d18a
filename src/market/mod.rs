// Storefront domain: mock catalog, cart, favorites, listing draft and profile figures.
// Everything here is plain data without egui so it can be unit-tested.

pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod listing;
pub mod profile;

pub use cart::{Cart, CartEntry, CartSummary, PLATFORM_FEE_PERCENT};
pub use catalog::{Catalog, ContentItem};
pub use favorites::Favorites;
pub use listing::{ListingDraft, ListingError, Payout};
pub use profile::ProfileStats;

/// Price label as shown on cards: "2500₽".
pub fn format_price(rubles: u64) -> String {
    format!("{rubles}₽")
}

/// Amount with thousands separated by spaces: 45890 -> "45 890".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(892), "892");
        assert_eq!(group_thousands(2500), "2 500");
        assert_eq!(group_thousands(45890), "45 890");
        assert_eq!(group_thousands(1234567), "1 234 567");
    }

    #[test]
    fn price_label_has_no_grouping() {
        assert_eq!(format_price(2500), "2500₽");
    }
}
