//! Configuration for recommendation sessions.

use crate::domain::{SearchQuery, TripDays, ValidationError};

/// Parameters for a swipe session.
///
/// The defaults mirror the values the product currently ships with; they are
/// tuning knobs rather than meaningful constants.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Number of accepted cards that completes a session.
    pub threshold: usize,

    /// Destination searched to fill the deck.
    pub destination: String,

    /// Trip length sent with the deck search.
    pub days: TripDays,

    /// Preference tags sent with the deck search.
    pub preferences: Vec<String>,
}

impl SelectionConfig {
    /// Create a configuration with the given parameters.
    pub fn new(
        threshold: usize,
        destination: impl Into<String>,
        days: TripDays,
        preferences: Vec<String>,
    ) -> Self {
        Self {
            threshold,
            destination: destination.into(),
            days,
            preferences,
        }
    }

    /// Set the completion threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// The search that fills a new deck.
    pub fn deck_query(&self) -> Result<SearchQuery, ValidationError> {
        SearchQuery::new(&self.destination, self.days, self.preferences.clone())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            threshold: 10,
            destination: "北京".to_string(),
            days: TripDays::default(),
            preferences: vec!["文化".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SelectionConfig::default();

        assert_eq!(config.threshold, 10);
        assert_eq!(config.destination, "北京");
        assert_eq!(config.days.get(), 1);
        assert_eq!(config.preferences, vec!["文化".to_string()]);
    }

    #[test]
    fn deck_query_from_defaults() {
        let query = SelectionConfig::default().deck_query().unwrap();

        assert_eq!(query.destination(), "北京");
        assert_eq!(query.days().get(), 1);
        assert_eq!(query.preferences(), ["文化".to_string()]);
    }

    #[test]
    fn custom_config() {
        let config = SelectionConfig::new(3, "Chengdu", TripDays::new(2).unwrap(), vec![])
            .with_threshold(5);

        assert_eq!(config.threshold, 5);
        assert_eq!(config.deck_query().unwrap().destination(), "Chengdu");
    }

    #[test]
    fn blank_destination_is_invalid() {
        let config = SelectionConfig::new(10, " ", TripDays::default(), vec![]);
        assert_eq!(config.deck_query(), Err(ValidationError::EmptyDestination));
    }
}
