//! Itinerary rendering.
//!
//! Takes the flat entry list returned by the itinerary builder and derives
//! everything the trip screen shows: the entry list, the day selector, and a
//! routed map for the selected day that always starts at the lodging point.

mod days;
mod geojson;
mod map;
mod renderer;

pub use days::Itinerary;
pub use geojson::{Feature, FeatureCollection, Point, StopProperties};
pub use map::{
    Bounds, IconSpec, MapConfig, MapScene, Marker, MarkerIcon, ORIGIN_ID, Origin, Polyline,
    Popup, Stop, TileLayer, Tooltip, TooltipDirection, Viewport, render_day,
};
pub use renderer::{DayOption, ItineraryRenderer, ListRow};
