//! Domain types for the trip planner client.
//!
//! This module contains the validated data model shared by the backend
//! client, the swipe engine and the itinerary renderer. Types enforce their
//! invariants at construction (or decode) time, so code that receives them
//! can trust their validity.

mod attraction;
mod error;
mod itinerary;
mod query;

pub use attraction::{Attraction, AttractionId, InvalidAttractionId, LatLon};
pub use error::ValidationError;
pub use itinerary::{DayNumber, ItineraryEntry};
pub use query::{ItineraryRequest, SearchQuery, TripDays};
