//! End-to-end walk-through of the card_dealer API.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows:
//!
//! 1. **Seeded table** — a `Dealer` built from a fixed seed, so the output
//!    is deterministic and reproducible.
//! 2. **Hitting** — the hand draws five cards through its shared deck.
//! 3. **Exhaustion** — the rest of the deck is drawn, then one more hit
//!    records the empty-deck sentinel.
//! 4. **Snapshot** — the JSON table state a UI client would receive.

use card_dealer::{snapshot, Dealer, Rank};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn show_hand(cards: &[Option<Rank>]) -> String {
    cards
        .iter()
        .map(|c| match c {
            Some(r) => r.to_string(),
            None => "-".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut dealer = Dealer::with_rng(&mut rng);

    println!("fresh deck: {} cards", dealer.deck().borrow().remaining());

    dealer.hand_mut().hit_n(5);
    println!("after 5 hits:");
    println!("  hand: {}", show_hand(dealer.hand().cards()));
    println!("  deck: {} cards left", dealer.deck().borrow().remaining());

    // Draw everything that remains, then one more.
    let remaining = dealer.deck().borrow().remaining();
    dealer.hand_mut().hit_n(remaining + 1);
    println!("after draining the deck:");
    println!("  hand: {}", show_hand(dealer.hand().cards()));
    println!("  last slot is the empty-deck sentinel: {:?}", dealer.hand().cards().last());

    let state = snapshot::table_state(&dealer);
    println!("client snapshot:");
    println!("{}", serde_json::to_string_pretty(&state).unwrap());
}
