//! # card_dealer
//!
//! A small in-memory card-dealing domain: a shuffled deck of card ranks, a
//! hand that draws from one specific deck, and a dealer that owns both.
//!
//! ## How it works
//!
//! 1. Create a [`Dealer`] — it builds a shuffled 52-card [`Deck`] and an
//!    empty [`Hand`] bound to that same deck instance.
//! 2. Call [`Hand::hit`] to draw the deck's front card into the hand, or
//!    [`Deck::deal`] to deal directly.
//! 3. Inspect `cards()` on either component to see the current state.
//!
//! ## Key points
//!
//! - **Ranks only**: a card is a [`Rank`] in 2..=14 (11=J, 12=Q, 13=K,
//!   14=A); suits are not modeled, so a deck holds four copies of each rank.
//! - **Total operations**: dealing from an empty deck yields `None`, never
//!   a panic — an exhausted deck is a normal outcome, not an error.
//! - **Shared deck, fixed binding**: a hand holds a [`DeckHandle`]
//!   (`Rc<RefCell<Deck>>`) to the deck it was built against and never
//!   switches decks; `Rc::ptr_eq` makes the binding observable.
//! - **Deterministic when you want it**: every constructor has a
//!   `with_rng`/`new_shuffled` variant taking `&mut impl Rng`, so a seeded
//!   `StdRng` reproduces the exact same deck order.
//!
//! ## Quick start
//!
//! ```rust
//! use card_dealer::Dealer;
//!
//! // Entropy-shuffled table:
//! let mut dealer = Dealer::new();
//! dealer.hand_mut().hit();
//! assert_eq!(dealer.hand().cards().len(), 1);
//! assert!(dealer.hand().cards()[0].is_some());
//! assert_eq!(dealer.deck().borrow().remaining(), 51);
//!
//! // Seeded for reproducibility:
//! use rand::{rngs::StdRng, SeedableRng};
//! let mut rng = StdRng::seed_from_u64(42);
//! let dealer = Dealer::with_rng(&mut rng);
//! println!("next card: {}", dealer.deck().borrow().cards()[0]);
//! ```

pub mod snapshot;
pub mod table;

// Convenience re-exports so callers can use `card_dealer::Dealer` directly
// without reaching into `table::`.
pub use table::{Dealer, Deck, DeckHandle, Hand, Rank};
