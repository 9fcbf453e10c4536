use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::table::models::Rank;

/// Shared handle to a deck.
///
/// A `Hand` never owns its deck; it holds one of these, and a `Dealer` holds
/// another to the same instance. Identity (not mere equality) is observable
/// through [`Rc::ptr_eq`].
pub type DeckHandle = Rc<RefCell<Deck>>;

/// A 52-rank deck: four copies of each rank 2..=14 in randomized order.
///
/// The front of `cards` is the next card to deal. The deck only ever
/// shrinks — it is never refilled or reshuffled mid-life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Rank>,
}

impl Deck {
    /// Build a fresh shuffled deck from OS entropy.
    pub fn new() -> Self {
        Self::new_shuffled(&mut StdRng::from_entropy())
    }

    /// Build a fresh deck and shuffle it with `rng`.
    ///
    /// Pass a seeded [`StdRng`] to get a reproducible order.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards: Vec<Rank> = (0..4)
            .flat_map(|_| (Rank::MIN..=Rank::MAX).map(Rank))
            .collect();

        // Fisher-Yates shuffle
        for i in (1..cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            cards.swap(i, j);
        }

        Deck { cards }
    }

    /// Wrap the deck in a [`DeckHandle`] so hands can share it.
    pub fn into_handle(self) -> DeckHandle {
        Rc::new(RefCell::new(self))
    }

    /// Deal the front card, or `None` once the deck is exhausted.
    ///
    /// An empty deck is a normal outcome, not an error; the call leaves an
    /// empty deck unchanged.
    pub fn deal(&mut self) -> Option<Rank> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Remaining undealt cards in dealing order (front = next to deal).
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
