//! Controller configuration.

use crate::domain::TripDays;
use crate::itinerary::MapConfig;
use crate::swipe::SelectionConfig;

/// Parameters sent with searches typed into the search box.
#[derive(Debug, Clone)]
pub struct SearchDefaults {
    pub days: TripDays,
    pub preferences: Vec<String>,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            days: TripDays::default(),
            preferences: vec!["文化".to_string()],
        }
    }
}

/// Everything the controller needs besides a backend.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub search: SearchDefaults,
    pub selection: SelectionConfig,
    pub map: MapConfig,
}

impl AppConfig {
    /// Set the swipe session parameters.
    pub fn with_selection(mut self, selection: SelectionConfig) -> Self {
        self.selection = selection;
        self
    }

    /// Set the map parameters.
    pub fn with_map(mut self, map: MapConfig) -> Self {
        self.map = map;
        self
    }
}
