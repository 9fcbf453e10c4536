use crate::table::deck::DeckHandle;
use crate::table::models::Rank;

/// Cards drawn from one deck, in draw order.
///
/// A hand is bound to exactly one deck for its whole life. Drawing from an
/// exhausted deck records `None` in the hand rather than failing, so the
/// hand's history mirrors every `hit` that happened.
#[derive(Debug, Clone)]
pub struct Hand {
    deck: DeckHandle,
    cards: Vec<Option<Rank>>,
}

impl Hand {
    /// Create an empty hand bound to `deck`.
    pub fn new(deck: DeckHandle) -> Self {
        Hand { deck, cards: Vec::new() }
    }

    /// Draw one card from the bound deck and append the outcome.
    ///
    /// When the deck is exhausted this appends `None`, growing the hand by
    /// an empty slot. Callers who only want real cards can filter the
    /// sentinel out of [`cards`](Self::cards).
    pub fn hit(&mut self) {
        let dealt = self.deck.borrow_mut().deal();
        self.cards.push(dealt);
    }

    /// `n` hits in sequence.
    pub fn hit_n(&mut self, n: usize) {
        for _ in 0..n {
            self.hit();
        }
    }

    /// Everything drawn so far, `None` marking hits on an empty deck.
    pub fn cards(&self) -> &[Option<Rank>] {
        &self.cards
    }

    /// The deck this hand draws from.
    pub fn deck(&self) -> &DeckHandle {
        &self.deck
    }
}
