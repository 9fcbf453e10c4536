//! The card-dealing domain — ranks, decks, hands, and the dealer wiring.
//!
//! ## Module overview
//!
//! | Module   | Purpose |
//! |----------|---------|
//! | `models` | The `Rank` primitive shared by every component |
//! | `deck`   | 52-rank deck with Fisher-Yates shuffle and FIFO dealing |
//! | `hand`   | Draw history bound to one shared deck |
//! | `dealer` | Composition root that wires a fresh deck to a fresh hand |

pub mod dealer;
pub mod deck;
pub mod hand;
pub mod models;

// Re-export the public API surface so callers can use `table::Dealer`
// without reaching into sub-modules.
pub use dealer::Dealer;
pub use deck::{Deck, DeckHandle};
pub use hand::Hand;
pub use models::Rank;
