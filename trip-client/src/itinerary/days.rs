//! The stored itinerary and its day grouping.

use std::collections::BTreeSet;

use crate::domain::{DayNumber, ItineraryEntry};

/// A generated itinerary, in the order the backend returned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Itinerary {
    entries: Vec<ItineraryEntry>,
}

impl Itinerary {
    pub fn new(entries: Vec<ItineraryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ItineraryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct days present in the itinerary, ascending.
    pub fn days(&self) -> Vec<DayNumber> {
        self.entries
            .iter()
            .map(|e| e.day)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Entries for one day, keeping their relative order.
    pub fn entries_for(&self, day: DayNumber) -> impl Iterator<Item = &ItineraryEntry> + '_ {
        self.entries.iter().filter(move |e| e.day == day)
    }
}
