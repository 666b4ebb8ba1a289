//! Swipe-based attraction selection.
//!
//! A recommendation session deals a deck of candidates one card at a time.
//! Swiping right keeps a card, swiping left skips it. The session ends when
//! enough cards are kept or the deck runs out; either way the kept cards are
//! the selection handed to the itinerary builder.

mod config;
mod deck;

pub use config::SelectionConfig;
pub use deck::{DeckState, SwipeDeck, SwipeOutcome};
