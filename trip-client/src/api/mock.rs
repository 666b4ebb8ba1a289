//! Mock backend for running without a server.
//!
//! Serves attractions from memory or from a JSON file, and generates a
//! simple itinerary by spreading the selection evenly over the trip days.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    Attraction, AttractionId, DayNumber, ItineraryEntry, ItineraryRequest, SearchQuery,
};

use super::backend::Backend;
use super::error::ApiError;

/// Note attached to every generated itinerary entry.
const GENERATED_NOTE: &str = "推荐游玩";

/// In-memory backend.
///
/// This is useful for development and testing without a running backend.
#[derive(Debug, Clone)]
pub struct MockBackend {
    attractions: Arc<Vec<Attraction>>,
}

impl MockBackend {
    /// Create a mock serving the given attractions.
    pub fn new(attractions: Vec<Attraction>) -> Self {
        Self {
            attractions: Arc::new(attractions),
        }
    }

    /// Load attractions from a JSON file holding an array of attractions.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| ApiError::Api {
            status: 0,
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let attractions: Vec<Attraction> =
            serde_json::from_str(&json).map_err(|e| ApiError::decode(&e, &json))?;

        debug!(count = attractions.len(), path = %path.display(), "loaded mock attractions");

        Ok(Self::new(attractions))
    }

    /// All attractions known to the mock.
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Look up an attraction by id.
    pub fn find(&self, id: &AttractionId) -> Option<&Attraction> {
        self.attractions.iter().find(|a| &a.id == id)
    }

    /// Attractions whose name, address or tags mention the destination.
    pub fn matching(&self, query: &SearchQuery) -> Vec<Attraction> {
        self.attractions
            .iter()
            .filter(|a| matches_destination(a, query.destination()))
            .cloned()
            .collect()
    }

    /// Generate an itinerary for the known ids in the request.
    ///
    /// Unknown ids are skipped; an empty selection gives an empty itinerary.
    pub fn plan(&self, request: &ItineraryRequest) -> Vec<ItineraryEntry> {
        let selected: Vec<&Attraction> = request
            .selected_ids
            .iter()
            .filter_map(|id| self.find(id))
            .collect();

        let count = selected.len();
        let days = request.days.get() as usize;

        // Contiguous chunks: the first count/days picks go to day 1, and so on.
        selected
            .into_iter()
            .enumerate()
            .filter_map(|(i, attraction)| {
                let day = DayNumber::new((i * days / count) as u32 + 1)?;
                Some(ItineraryEntry::new(day, attraction.clone(), GENERATED_NOTE))
            })
            .collect()
    }
}

/// Whether an attraction matches a destination keyword.
fn matches_destination(attraction: &Attraction, destination: &str) -> bool {
    let needle = destination.to_lowercase();
    attraction.name.to_lowercase().contains(&needle)
        || attraction.address.to_lowercase().contains(&needle)
        || attraction
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&needle))
}

impl Backend for MockBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Attraction>, ApiError> {
        Ok(self.matching(query))
    }

    async fn attraction(&self, id: &AttractionId) -> Result<Attraction, ApiError> {
        self.find(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("attraction {id}")))
    }

    async fn build_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<Vec<ItineraryEntry>, ApiError> {
        Ok(self.plan(request))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{attraction, beijing};
    use super::*;
    use crate::domain::TripDays;

    fn query(destination: &str) -> SearchQuery {
        SearchQuery::new(destination, TripDays::default(), vec!["文化".into()]).unwrap()
    }

    #[tokio::test]
    async fn search_filters_by_destination() {
        let mut data = beijing();
        data.push(Attraction {
            address: "上海市黄浦区".into(),
            ..attraction("sh1", "外滩", 31.24, 121.49)
        });
        let backend = MockBackend::new(data);

        let bj = backend.search(&query("北京")).await.unwrap();
        assert_eq!(bj.len(), 12);

        let sh = backend.search(&query("上海")).await.unwrap();
        assert_eq!(sh.len(), 1);
        assert_eq!(sh[0].name, "外滩");

        let none = backend.search(&query("Paris")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn detail_found_and_not_found() {
        let backend = MockBackend::new(beijing());

        let found = backend
            .attraction(&AttractionId::parse("bj3").unwrap())
            .await
            .unwrap();
        assert_eq!(found.name, "景点3");

        let missing = backend
            .attraction(&AttractionId::parse("nope").unwrap())
            .await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn itinerary_spreads_selection_over_days() {
        let backend = MockBackend::new(beijing());
        let ids: Vec<AttractionId> = backend.attractions()[..10]
            .iter()
            .map(|a| a.id.clone())
            .collect();
        let request = ItineraryRequest::new(ids.clone(), TripDays::new(3).unwrap(), vec![]);

        let entries = backend.build_itinerary(&request).await.unwrap();

        assert_eq!(entries.len(), 10);
        assert!(entries.iter().all(|e| (1..=3).contains(&e.day.get())));
        assert_eq!(entries.first().map(|e| e.day.get()), Some(1));
        assert_eq!(entries.last().map(|e| e.day.get()), Some(3));
        // Selection order is kept.
        let order: Vec<&AttractionId> = entries.iter().map(|e| &e.attraction.id).collect();
        assert_eq!(order, ids.iter().collect::<Vec<_>>());
        assert!(entries.iter().all(|e| e.note == GENERATED_NOTE));
    }

    #[tokio::test]
    async fn itinerary_ignores_unknown_ids() {
        let backend = MockBackend::new(beijing());
        let request = ItineraryRequest::new(
            vec![AttractionId::parse("ghost").unwrap()],
            TripDays::new(2).unwrap(),
            vec![],
        );

        let entries = backend.build_itinerary(&request).await.unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attractions.json");
        std::fs::write(&path, serde_json::to_string(&beijing()).unwrap()).unwrap();

        let backend = MockBackend::from_file(&path).unwrap();
        assert_eq!(backend.attractions().len(), 12);
    }

    #[test]
    fn load_from_bad_file() {
        let dir = tempfile::tempdir().unwrap();

        let missing = MockBackend::from_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ApiError::Api { status: 0, .. })));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let broken = MockBackend::from_file(&path);
        assert!(matches!(broken, Err(ApiError::Decode { .. })));
    }
}
