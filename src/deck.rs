// SPDX-License-Identifier: MPL-2.0
//! Deck of swipe cards with a cursor and a pluggable refill policy.
//!
//! The deck is the single source of truth for which item is on top. The
//! cursor always stays within `[0, len]`; `cursor == len` means the deck is
//! exhausted and there is no current item. When the cursor reaches the end,
//! the [`RefillPolicy`] decides whether a new batch replaces the deck.

use crate::domain::catalog::{Item, ItemId, ItemStatus};
use std::collections::HashMap;
use std::fmt;

/// Decides what happens when the last card of the deck has been swiped.
pub trait RefillPolicy: fmt::Debug {
    /// Returns the next batch of items, or `None` to leave the deck exhausted.
    ///
    /// `source` is the list the deck was originally created from. An empty
    /// batch is treated like `None`.
    fn refill(&mut self, source: &[Item]) -> Option<Vec<Item>>;
}

/// Replays the original item list from the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReloadSource;

impl RefillPolicy for ReloadSource {
    fn refill(&mut self, source: &[Item]) -> Option<Vec<Item>> {
        Some(source.to_vec())
    }
}

/// Leaves the deck exhausted once every card has been swiped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWhenExhausted;

impl RefillPolicy for StopWhenExhausted {
    fn refill(&mut self, _source: &[Item]) -> Option<Vec<Item>> {
        None
    }
}

/// Fetches the next batch from a closure (e.g. the next page of a feed).
pub struct FetchWith<F>(pub F);

impl<F> fmt::Debug for FetchWith<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FetchWith(..)")
    }
}

impl<F> RefillPolicy for FetchWith<F>
where
    F: FnMut() -> Vec<Item>,
{
    fn refill(&mut self, _source: &[Item]) -> Option<Vec<Item>> {
        Some((self.0)())
    }
}

/// Result of advancing the cursor by one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved to the next card of the same batch.
    Moved,
    /// The batch ran out and the refill policy supplied a new one.
    Refilled,
    /// No card is left and the policy declined to refill.
    Exhausted,
}

/// Snapshot of the deck position for UI rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeckInfo {
    /// Zero-based cursor.
    pub position: usize,
    /// Number of cards in the current batch.
    pub total: usize,
    /// Whether there is no current card.
    pub exhausted: bool,
    /// How many times the deck has been refilled this session.
    pub refills: u32,
    /// Distinct items liked or saved this session.
    pub kept: usize,
}

/// Ordered cards plus the cursor pointing at the one on top.
pub struct Deck {
    source: Vec<Item>,
    items: Vec<Item>,
    cursor: usize,
    statuses: HashMap<ItemId, ItemStatus>,
    policy: Box<dyn RefillPolicy>,
    refills: u32,
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("len", &self.items.len())
            .field("cursor", &self.cursor)
            .field("policy", &self.policy)
            .field("refills", &self.refills)
            .finish_non_exhaustive()
    }
}

impl Deck {
    /// Creates a deck that reloads `items` when exhausted.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_policy(items, Box::new(ReloadSource))
    }

    /// Creates a deck with a custom refill policy.
    #[must_use]
    pub fn with_policy(items: Vec<Item>, policy: Box<dyn RefillPolicy>) -> Self {
        Self {
            source: items.clone(),
            items,
            cursor: 0,
            statuses: HashMap::new(),
            policy,
            refills: 0,
        }
    }

    /// Returns the card on top, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Item> {
        self.items.get(self.cursor)
    }

    /// Returns the card right below the top one, if any.
    #[must_use]
    pub fn peek_next(&self) -> Option<&Item> {
        self.items.get(self.cursor + 1)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether there is no current card.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    /// Returns whether the top card is the first of its batch.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.cursor == 0 && !self.items.is_empty()
    }

    /// Returns the cards of the current batch in order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn info(&self) -> DeckInfo {
        DeckInfo {
            position: self.cursor,
            total: self.items.len(),
            exhausted: self.is_exhausted(),
            refills: self.refills,
            kept: self.kept_count(),
        }
    }

    /// Moves the cursor past the current card.
    ///
    /// When that empties the batch, the refill policy is consulted. Calling
    /// this on an exhausted deck only retries the refill.
    pub fn advance(&mut self) -> Advance {
        if self.cursor < self.items.len() {
            self.cursor += 1;
        }
        if self.cursor < self.items.len() {
            return Advance::Moved;
        }

        match self.policy.refill(&self.source) {
            Some(batch) if !batch.is_empty() => {
                self.items = batch;
                self.cursor = 0;
                self.refills += 1;
                Advance::Refilled
            }
            _ => Advance::Exhausted,
        }
    }

    /// Returns the recorded status of an item.
    #[must_use]
    pub fn status(&self, id: &ItemId) -> ItemStatus {
        self.statuses.get(id).copied().unwrap_or_default()
    }

    /// Records a status for an item.
    pub fn mark(&mut self, id: &ItemId, status: ItemStatus) {
        self.statuses.insert(id.clone(), status);
    }

    /// Returns how many distinct items were kept (liked or saved).
    #[must_use]
    pub fn kept_count(&self) -> usize {
        self.statuses.values().filter(|s| s.is_kept()).count()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
