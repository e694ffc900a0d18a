// "Create listing" form state. Publishing is not wired to anything; the draft
// only drives the payout hint and is reset by Cancel.

use thiserror::Error;

use super::cart::PLATFORM_FEE_PERCENT;
use crate::types::ContentKind;

/// Accepted upload formats, shown under the drop zone.
pub const ACCEPTED_FORMATS: &str = "MP3, PNG, JPG, TXT";
pub const MAX_UPLOAD_MB: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("price must be a whole number of rubles: {0:?}")]
    NotANumber(String),
    #[error("price must be greater than zero")]
    Zero,
    #[error("price is too large: {0}")]
    TooLarge(u64),
}

/// What the creator receives for a given price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub price: u64,
    pub creator_share: u64,
}

impl Payout {
    pub const CREATOR_PERCENT: u64 = 100 - PLATFORM_FEE_PERCENT;

    /// None when the share does not fit the arithmetic (absurdly large prices).
    pub fn for_price(price: u64) -> Option<Self> {
        // rounded to the nearest ruble, halves up
        let scaled = price.checked_mul(Self::CREATOR_PERCENT)?.checked_add(50)?;
        Some(Self {
            price,
            creator_share: scaled / 100,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub kind: ContentKind,
    pub title: String,
    pub description: String,
    pub price_input: String,
}

impl ListingDraft {
    /// Parses the price field. `Ok(None)` while it is still empty.
    pub fn payout(&self) -> Result<Option<Payout>, ListingError> {
        let raw = self.price_input.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let price: u64 = raw
            .parse()
            .map_err(|_| ListingError::NotANumber(raw.to_string()))?;
        if price == 0 {
            return Err(ListingError::Zero);
        }
        Payout::for_price(price)
            .map(Some)
            .ok_or(ListingError::TooLarge(price))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_price(p: &str) -> ListingDraft {
        ListingDraft {
            price_input: p.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_kind_is_music() {
        assert_eq!(ListingDraft::default().kind, ContentKind::Music);
    }

    #[test]
    fn payout_is_ninety_five_percent() {
        let p = draft_with_price(" 2500 ").payout().unwrap().unwrap();
        assert_eq!(p.price, 2500);
        assert_eq!(p.creator_share, 2375);
        // 95% of 10 = 9.5 -> 10
        assert_eq!(Payout::for_price(10).map(|p| p.creator_share), Some(10));
    }

    #[test]
    fn huge_prices_are_rejected_without_overflow() {
        assert_eq!(
            draft_with_price("200000000000000000").payout(),
            Err(ListingError::TooLarge(200_000_000_000_000_000))
        );
        assert_eq!(
            draft_with_price(&u64::MAX.to_string()).payout(),
            Err(ListingError::TooLarge(u64::MAX))
        );
        // largest price whose share still fits
        let edge = (u64::MAX - 50) / Payout::CREATOR_PERCENT;
        assert!(draft_with_price(&edge.to_string()).payout().is_ok());
        assert!(Payout::for_price(edge + 1).is_none());
    }

    #[test]
    fn empty_price_has_no_payout() {
        assert_eq!(draft_with_price("").payout(), Ok(None));
    }

    #[test]
    fn bad_prices_are_rejected() {
        assert_eq!(
            draft_with_price("12.5").payout(),
            Err(ListingError::NotANumber("12.5".to_string()))
        );
        assert_eq!(
            draft_with_price("-3").payout(),
            Err(ListingError::NotANumber("-3".to_string()))
        );
        assert_eq!(draft_with_price("0").payout(), Err(ListingError::Zero));
    }

    #[test]
    fn reset_clears_everything() {
        let mut d = ListingDraft {
            kind: ContentKind::Text,
            title: "t".into(),
            description: "d".into(),
            price_input: "100".into(),
        };
        d.reset();
        assert_eq!(d, ListingDraft::default());
    }
}
