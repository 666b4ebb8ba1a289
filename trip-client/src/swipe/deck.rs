//! The swipe deck state machine.

use crate::domain::{Attraction, AttractionId};

/// Where a deck is in its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// A card is on top and swipes are accepted.
    Showing,
    /// The accepted set reached the threshold.
    Complete,
    /// Every card was swiped before the threshold was reached.
    Exhausted,
}

impl DeckState {
    /// Whether the session is over and an itinerary can be generated.
    pub fn is_terminal(self) -> bool {
        !matches!(self, DeckState::Showing)
    }
}

/// What a swipe did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The next card is now on top.
    Advanced,
    /// The swipe completed the selection.
    Completed,
    /// The swipe used up the last card.
    Exhausted,
    /// The deck was already terminal; nothing changed.
    Ignored,
}

/// A deck of candidate attractions for one recommendation session.
///
/// The cursor only moves forward and the accepted set only grows. Once the
/// deck is terminal, further swipes are ignored.
#[derive(Debug, Clone)]
pub struct SwipeDeck {
    cards: Vec<Attraction>,
    cursor: usize,
    accepted: Vec<AttractionId>,
    threshold: usize,
    complete: bool,
}

impl SwipeDeck {
    /// Start a session over the given candidates.
    ///
    /// A threshold of zero is treated as one.
    pub fn new(cards: Vec<Attraction>, threshold: usize) -> Self {
        Self {
            cards,
            cursor: 0,
            accepted: Vec::new(),
            threshold: threshold.max(1),
            complete: false,
        }
    }

    pub fn state(&self) -> DeckState {
        if self.complete {
            DeckState::Complete
        } else if self.cursor >= self.cards.len() {
            DeckState::Exhausted
        } else {
            DeckState::Showing
        }
    }

    /// The card on top, while the deck is showing.
    pub fn current(&self) -> Option<&Attraction> {
        match self.state() {
            DeckState::Showing => self.cards.get(self.cursor),
            _ => None,
        }
    }

    /// Swipe right: keep the card on top.
    pub fn accept(&mut self) -> SwipeOutcome {
        let Some(card) = self.current() else {
            return SwipeOutcome::Ignored;
        };

        let id = card.id.clone();
        if !self.accepted.contains(&id) {
            self.accepted.push(id);
        }

        if self.accepted.len() >= self.threshold {
            self.complete = true;
            return SwipeOutcome::Completed;
        }

        self.advance()
    }

    /// Swipe left: skip the card on top.
    pub fn reject(&mut self) -> SwipeOutcome {
        if self.current().is_none() {
            return SwipeOutcome::Ignored;
        }
        self.advance()
    }

    fn advance(&mut self) -> SwipeOutcome {
        self.cursor += 1;
        if self.cursor >= self.cards.len() {
            SwipeOutcome::Exhausted
        } else {
            SwipeOutcome::Advanced
        }
    }

    /// Accepted ids, in the order they were picked.
    pub fn accepted(&self) -> &[AttractionId] {
        &self.accepted
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}
