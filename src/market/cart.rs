use super::catalog::ContentItem;

/// Share of each sale kept by the platform.
pub const PLATFORM_FEE_PERCENT: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub item: ContentItem,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> u64 {
        self.item.price * u64::from(self.quantity)
    }
}

/// Totals block of the cart page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    pub total: u64,
    pub platform_fee: f64,
    pub creator_earnings: f64,
}

impl CartSummary {
    pub fn from_total(total: u64) -> Self {
        let platform_fee = total as f64 * PLATFORM_FEE_PERCENT as f64 / 100.0;
        Self {
            total,
            platform_fee,
            creator_earnings: total as f64 - platform_fee,
        }
    }

    /// Fee in whole rubles, halves rounded up.
    pub fn fee_rounded(&self) -> u64 {
        self.platform_fee.round() as u64
    }

    pub fn earnings_rounded(&self) -> u64 {
        self.creator_earnings.round() as u64
    }
}

/// Transient shopping cart. Entries keep the order they were first added in.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, merging with an existing entry of the same id.
    /// Returns the resulting quantity.
    pub fn add(&mut self, item: &ContentItem) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == item.id) {
            entry.quantity += 1;
            log::debug!("cart: id={} quantity -> {}", item.id, entry.quantity);
            return entry.quantity;
        }
        self.entries.push(CartEntry {
            item: item.clone(),
            quantity: 1,
        });
        log::debug!("cart: added id={} ({})", item.id, item.title);
        1
    }

    /// Drops the whole entry regardless of quantity. Returns false if absent.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.item.id != id);
        let removed = self.entries.len() != before;
        if removed {
            log::debug!("cart: removed id={}", id);
        }
        removed
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct entries (what the header badge shows).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_total(self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::Catalog;

    #[test]
    fn adding_same_item_increments_quantity() {
        let catalog = Catalog::mock();
        let mut cart = Cart::new();
        let item = catalog.find(1).unwrap();
        assert_eq!(cart.add(item), 1);
        assert_eq!(cart.add(item), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].quantity, 2);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let catalog = Catalog::mock();
        let mut cart = Cart::new();
        cart.add(catalog.find(4).unwrap());
        cart.add(catalog.find(2).unwrap());
        cart.add(catalog.find(4).unwrap());
        let ids: Vec<u32> = cart.entries().iter().map(|e| e.item.id).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn remove_drops_entry_with_any_quantity() {
        let catalog = Catalog::mock();
        let mut cart = Cart::new();
        let item = catalog.find(3).unwrap();
        cart.add(item);
        cart.add(item);
        cart.add(item);
        assert!(cart.remove(3));
        assert!(cart.is_empty());
        assert!(!cart.remove(3));
    }

    #[test]
    fn totals_and_fee() {
        let catalog = Catalog::mock();
        let mut cart = Cart::new();
        cart.add(catalog.find(1).unwrap());
        cart.add(catalog.find(1).unwrap());
        cart.add(catalog.find(3).unwrap());
        assert_eq!(cart.total(), 2500 * 2 + 1200);

        let s = cart.summary();
        assert_eq!(s.total, 6200);
        assert_eq!(s.fee_rounded(), 310);
        assert_eq!(s.earnings_rounded(), 5890);
    }

    #[test]
    fn half_ruble_fee_rounds_up() {
        // 5% of 1250 is 62.5
        let s = CartSummary::from_total(1250);
        assert_eq!(s.fee_rounded(), 63);
        assert_eq!(s.earnings_rounded(), 1188);
    }

    #[test]
    fn empty_cart_summary_is_zero() {
        let s = Cart::new().summary();
        assert_eq!(s.total, 0);
        assert_eq!(s.fee_rounded(), 0);
        assert_eq!(s.earnings_rounded(), 0);
    }
}
