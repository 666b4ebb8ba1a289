//! Validated request parameters.
//!
//! Queries enforce their invariants at construction time, so a request that
//! reaches the backend client always has a non-empty destination and a
//! positive day count.

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

use super::{AttractionId, ValidationError};

/// Length of a trip in days (at least one).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TripDays(NonZeroU32);

impl TripDays {
    /// Create a day count, rejecting zero and negative values.
    pub fn new(days: i64) -> Result<Self, ValidationError> {
        u32::try_from(days)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(ValidationError::NonPositiveDays(days))
    }

    /// Parse free-text input, falling back to one day.
    ///
    /// Leading digits are read the way a form field is usually read
    /// (`"3"` and `"3 days"` both give 3). Anything that does not start with
    /// a digit, or reads as zero, falls back to the default.
    ///
    /// ```
    /// use trip_client::domain::TripDays;
    ///
    /// assert_eq!(TripDays::parse_or_default("4").get(), 4);
    /// assert_eq!(TripDays::parse_or_default(" 2天").get(), 2);
    /// assert_eq!(TripDays::parse_or_default("abc").get(), 1);
    /// assert_eq!(TripDays::parse_or_default("-3").get(), 1);
    /// assert_eq!(TripDays::parse_or_default("").get(), 1);
    /// ```
    pub fn parse_or_default(input: &str) -> Self {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        digits[..end]
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for TripDays {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl fmt::Debug for TripDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripDays({})", self.0)
    }
}

impl fmt::Display for TripDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An attraction search: destination keyword, trip length and preference tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    destination: String,
    days: TripDays,
    preferences: Vec<String>,
}

impl SearchQuery {
    /// Create a query. The destination is trimmed and must not be empty.
    pub fn new(
        destination: &str,
        days: TripDays,
        preferences: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(ValidationError::EmptyDestination);
        }

        Ok(Self {
            destination: destination.to_string(),
            days,
            preferences,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn days(&self) -> TripDays {
        self.days
    }

    pub fn preferences(&self) -> &[String] {
        &self.preferences
    }

    /// Query-string pairs in request order; `preferences` repeats once per tag.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("destination", self.destination.clone()),
            ("days", self.days.to_string()),
        ];
        pairs.extend(
            self.preferences
                .iter()
                .map(|p| ("preferences", p.clone())),
        );
        pairs
    }
}

/// Body of an itinerary build request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryRequest {
    /// Accepted attractions in the order they were picked.
    pub selected_ids: Vec<AttractionId>,
    pub days: TripDays,
    pub preferences: Vec<String>,
}

impl ItineraryRequest {
    pub fn new(selected_ids: Vec<AttractionId>, days: TripDays, preferences: Vec<String>) -> Self {
        Self {
            selected_ids,
            days,
            preferences,
        }
    }
}
