//! Trip backend client.
//!
//! This module provides the HTTP client for the attraction and itinerary
//! endpoints, plus an in-memory mock with the same interface.
//!
//! Key characteristics of the backend:
//! - Attraction ids are stable, but nothing is cached here: every view
//!   transition re-fetches
//! - A missing attraction is reported as a 404 or an empty body
//! - Itinerary entries come back flat, in generation order

mod backend;
mod client;
mod error;
mod mock;

pub use backend::Backend;
pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
pub use mock::MockBackend;

#[cfg(test)]
pub(crate) use mock::fixtures;
