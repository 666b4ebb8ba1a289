//! Trip planning client.
//!
//! Client-side controller for a trip planner: search attractions by
//! destination, browse their details, pick favourites from a swipe deck, and
//! view a day-by-day itinerary on a map routed from the lodging point.

pub mod api;
pub mod app;
pub mod domain;
pub mod itinerary;
pub mod navigator;
pub mod swipe;
pub mod telemetry;
