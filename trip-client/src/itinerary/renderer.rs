//! Itinerary screen state: entry list, day selector and map.

use tracing::debug;

use crate::domain::{DayNumber, ItineraryEntry};

use super::days::Itinerary;
use super::map::{MapConfig, MapScene, render_day};

/// One line of the flat itinerary list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub day: DayNumber,
    pub name: String,
    pub note: String,
}

impl ListRow {
    /// "Day1. 故宫 - 上午参观"
    pub fn text(&self) -> String {
        format!("{}. {} - {}", self.day.label(), self.name, self.note)
    }
}

/// One option of the day selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOption {
    pub day: DayNumber,
    pub label: String,
    pub selected: bool,
}

/// Owns the current itinerary and everything derived from it.
///
/// Loading an itinerary rebuilds the list, the day group and the map.
/// Selecting a day rebuilds only the map.
#[derive(Debug, Clone)]
pub struct ItineraryRenderer {
    config: MapConfig,
    itinerary: Itinerary,
    rows: Vec<ListRow>,
    days: Vec<DayNumber>,
    selected: Option<DayNumber>,
    map: Option<MapScene>,
}

impl ItineraryRenderer {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            itinerary: Itinerary::default(),
            rows: Vec::new(),
            days: Vec::new(),
            selected: None,
            map: None,
        }
    }

    /// Replace the itinerary and re-render everything.
    pub fn load(&mut self, entries: Vec<ItineraryEntry>) {
        self.itinerary = Itinerary::new(entries);

        self.rows = self
            .itinerary
            .entries()
            .iter()
            .map(|e| ListRow {
                day: e.day,
                name: e.attraction.name.clone(),
                note: e.note.clone(),
            })
            .collect();

        self.days = self.itinerary.days();
        self.selected = self.days.first().copied();

        debug!(
            entries = self.itinerary.len(),
            days = self.days.len(),
            "itinerary loaded"
        );

        self.render_map();
    }

    /// Switch the map to another day.
    ///
    /// A day with no entries leaves the map empty.
    pub fn select_day(&mut self, day: DayNumber) {
        self.selected = Some(day);
        self.render_map();
    }

    fn render_map(&mut self) {
        self.map = self
            .selected
            .and_then(|day| render_day(self.itinerary.entries(), day, &self.config));
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// List rows in the order the entries were received.
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// The day group: distinct days, ascending.
    pub fn days(&self) -> &[DayNumber] {
        &self.days
    }

    pub fn day_options(&self) -> Vec<DayOption> {
        self.days
            .iter()
            .map(|&day| DayOption {
                day,
                label: day.label(),
                selected: Some(day) == self.selected,
            })
            .collect()
    }

    pub fn selected_day(&self) -> Option<DayNumber> {
        self.selected
    }

    pub fn map(&self) -> Option<&MapScene> {
        self.map.as_ref()
    }
}

impl Default for ItineraryRenderer {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}
