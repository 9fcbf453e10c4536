use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::table::deck::{Deck, DeckHandle};
use crate::table::hand::Hand;

/// Composition root: one deck plus one hand bound to that same deck.
///
/// The dealer does nothing beyond the wiring — callers deal through
/// [`deck`](Self::deck) and draw through [`hand_mut`](Self::hand_mut).
#[derive(Debug)]
pub struct Dealer {
    deck: DeckHandle,
    hand: Hand,
}

impl Dealer {
    /// New dealer with an entropy-shuffled deck and an empty hand.
    pub fn new() -> Self {
        Self::with_rng(&mut StdRng::from_entropy())
    }

    /// New dealer whose deck order is driven by `rng`.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let deck = Deck::new_shuffled(rng).into_handle();
        let hand = Hand::new(deck.clone());
        Dealer { deck, hand }
    }

    /// The dealer's deck — the same instance the hand draws from.
    pub fn deck(&self) -> &DeckHandle {
        &self.deck
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}
