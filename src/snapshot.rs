use serde_json::{json, Value};

use crate::table::{Dealer, Rank};

/// Convert a `Rank` to the string format expected by table-UI clients.
/// rank 10 → "10", all others → the one-letter `Display` form, i.e. "A", "K".
fn to_client_rank(r: Rank) -> String {
    if r.0 == 10 {
        "10".to_string()
    } else {
        r.to_string()
    }
}

/// Build one slot of the hand array: the dealt rank, or `null` for a hit
/// that found the deck empty.
fn hand_slot(id: usize, card: Option<Rank>) -> Value {
    match card {
        Some(r) => json!({ "id": id, "card": to_client_rank(r) }),
        None => json!({ "id": id, "card": null }),
    }
}

/// Map a `Dealer` to a table-state JSON object ready for a client.
///
/// Reports the deck's remaining-card count and the hand's full draw history
/// in order, sentinel slots included.
pub fn table_state(dealer: &Dealer) -> Value {
    let deck = dealer.deck().borrow();
    let hand = dealer.hand();

    let hand_cards: Vec<Value> = hand
        .cards()
        .iter()
        .enumerate()
        .map(|(id, &card)| hand_slot(id, card))
        .collect();

    json!({
        "deck": {
            "remaining": deck.remaining(),
            "exhausted": deck.is_empty()
        },
        "hand": {
            "drawn": hand.cards().len(),
            "cards": Value::Array(hand_cards)
        }
    })
}
