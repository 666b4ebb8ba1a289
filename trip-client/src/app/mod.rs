//! The client controller.
//!
//! [`App`] owns all client state and changes it in response to [`Event`]s.
//! Backend requests leave as [`Command`]s and return as [`Event::Reply`];
//! [`Runtime`] connects the two on a single task.

mod config;
mod controller;
mod event;
mod runtime;
mod views;

pub use config::{AppConfig, SearchDefaults};
pub use controller::{App, DetailView, SearchResults};
pub use event::{Command, Event, Reply, ReplyPayload, RequestToken};
pub use runtime::Runtime;
pub use views::{
    AttractionDetailTemplate, AttractionView, CardStackTemplate, CardView, HomeTemplate,
    SearchResultsTemplate, TripDetailTemplate, ViewError,
};
