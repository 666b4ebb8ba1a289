//! Itinerary entry types.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize};

use super::Attraction;

/// A 1-based trip day.
///
/// Day zero cannot be represented; decoding a `0` day fails.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayNumber(NonZeroU32);

impl DayNumber {
    /// The first day of a trip.
    pub const FIRST: DayNumber = DayNumber(NonZeroU32::MIN);

    /// Returns `None` for zero.
    pub fn new(day: u32) -> Option<Self> {
        NonZeroU32::new(day).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Display label, e.g. "Day2".
    pub fn label(self) -> String {
        format!("Day{}", self.0)
    }
}

impl fmt::Debug for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day({})", self.0)
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stop of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryEntry {
    pub day: DayNumber,

    pub attraction: Attraction,

    /// Free-text note from the itinerary generator.
    #[serde(rename = "notes", default, deserialize_with = "null_as_empty")]
    pub note: String,
}

impl ItineraryEntry {
    pub fn new(day: DayNumber, attraction: Attraction, note: impl Into<String>) -> Self {
        Self {
            day,
            attraction,
            note: note.into(),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_zero_is_rejected() {
        assert!(DayNumber::new(0).is_none());
        assert_eq!(DayNumber::new(3).map(DayNumber::get), Some(3));
        assert_eq!(DayNumber::FIRST.get(), 1);
    }

    #[test]
    fn day_label() {
        assert_eq!(DayNumber::new(2).unwrap().label(), "Day2");
        assert_eq!(format!("{:?}", DayNumber::FIRST), "Day(1)");
    }

    #[test]
    fn decode_entry() {
        let json = r#"{
            "day": 2,
            "attraction": {"id": "1", "name": "故宫", "lat": 39.9, "lon": 116.4, "tags": []},
            "notes": "上午参观"
        }"#;

        let entry: ItineraryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.day.get(), 2);
        assert_eq!(entry.attraction.name, "故宫");
        assert_eq!(entry.note, "上午参观");
    }

    #[test]
    fn decode_entry_without_notes() {
        let json = r#"{
            "day": 1,
            "attraction": {"id": "1", "name": "故宫", "lat": 39.9, "lon": 116.4},
            "notes": null
        }"#;

        let entry: ItineraryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.note.is_empty());
    }

    #[test]
    fn decode_rejects_day_zero() {
        let json = r#"{
            "day": 0,
            "attraction": {"id": "1", "name": "故宫", "lat": 39.9, "lon": 116.4},
            "notes": ""
        }"#;

        assert!(serde_json::from_str::<ItineraryEntry>(json).is_err());
    }
}
