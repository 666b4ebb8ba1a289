//! The backend seam.

use crate::domain::{Attraction, AttractionId, ItineraryEntry, ItineraryRequest, SearchQuery};

use super::error::ApiError;

/// Source of attraction data and generated itineraries.
///
/// This abstraction lets the controller run against the HTTP client or the
/// in-memory mock. Implementations hold no session state; every call goes to
/// the source afresh.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Attractions matching a destination, in backend ranking order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Attraction>, ApiError>;

    /// A single attraction, or `ApiError::NotFound`.
    async fn attraction(&self, id: &AttractionId) -> Result<Attraction, ApiError>;

    /// Turn a selection into a day-partitioned itinerary.
    ///
    /// Entries come back in backend order; grouping by day is the caller's job.
    async fn build_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<Vec<ItineraryEntry>, ApiError>;
}
