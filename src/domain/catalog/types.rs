// SPDX-License-Identifier: MPL-2.0
//! Product value objects.

use crate::domain::swipe::Decision;
use std::fmt;

// =============================================================================
// ItemId
// =============================================================================

/// Opaque identifier of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Price
// =============================================================================

/// Price in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u32);

impl Price {
    /// Currency symbol prepended on display.
    pub const SYMBOL: char = '₹';

    #[must_use]
    pub fn new(amount: u32) -> Self {
        Self(amount)
    }

    #[must_use]
    pub fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    /// Formats as `₹4,999` (thousands grouped with commas).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "{}{grouped}", Self::SYMBOL)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A product shown on a swipe card.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    image: String,
    brand: String,
    name: String,
    price: Price,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        image: impl Into<String>,
        brand: impl Into<String>,
        name: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            image: image.into(),
            brand: brand.into(),
            name: name.into(),
            price,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Image reference (asset name or URL), resolved by the host.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }
}

// =============================================================================
// ItemStatus
// =============================================================================

/// Session-local reaction to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemStatus {
    /// Not reacted to yet.
    #[default]
    Unseen,
    /// Accepted through the like button.
    Liked,
    /// Accepted by swiping right or through the save button.
    Saved,
    /// Rejected by swiping left.
    Skipped,
}

impl ItemStatus {
    /// Status recorded when a swipe commits with `decision`.
    #[must_use]
    pub fn from_decision(decision: Decision) -> Self {
        match decision {
            Decision::Accept => Self::Saved,
            Decision::Reject => Self::Skipped,
        }
    }

    /// Returns whether the item ended up on the wishlist.
    #[must_use]
    pub fn is_kept(self) -> bool {
        matches!(self, Self::Liked | Self::Saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_groups_thousands() {
        assert_eq!(Price::new(899).to_string(), "₹899");
        assert_eq!(Price::new(2499).to_string(), "₹2,499");
        assert_eq!(Price::new(1_234_567).to_string(), "₹1,234,567");
        assert_eq!(Price::new(0).to_string(), "₹0");
    }

    #[test]
    fn item_accessors_return_payload() {
        let item = Item::new("7", "hoodie.jpg", "UrbanVibes", "Hoodie", Price::new(2499));
        assert_eq!(item.id().as_str(), "7");
        assert_eq!(item.image(), "hoodie.jpg");
        assert_eq!(item.brand(), "UrbanVibes");
        assert_eq!(item.name(), "Hoodie");
        assert_eq!(item.price().amount(), 2499);
    }

    #[test]
    fn status_follows_decision() {
        assert_eq!(ItemStatus::from_decision(Decision::Accept), ItemStatus::Saved);
        assert_eq!(ItemStatus::from_decision(Decision::Reject), ItemStatus::Skipped);
    }

    #[test]
    fn only_liked_and_saved_are_kept() {
        assert!(ItemStatus::Liked.is_kept());
        assert!(ItemStatus::Saved.is_kept());
        assert!(!ItemStatus::Skipped.is_kept());
        assert!(!ItemStatus::Unseen.is_kept());
    }
}
