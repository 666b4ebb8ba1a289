//! Single-task event loop driving an [`App`] against a backend.

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::Backend;

use super::controller::App;
use super::event::Event;

/// Owns the controller and runs its commands.
///
/// Every state change happens on the task calling [`Runtime::run`]; backend
/// calls run concurrently but their replies are fed back through
/// [`App::handle`] one at a time.
pub struct Runtime<B> {
    app: App,
    backend: B,
}

impl<B: Backend> Runtime<B> {
    pub fn new(app: App, backend: B) -> Self {
        Self { app, backend }
    }

    /// Process events until the sender side closes.
    ///
    /// Requests still in flight when the channel closes are awaited and
    /// applied before the final state is returned.
    pub async fn run(self, mut events: mpsc::Receiver<Event>) -> App {
        let Runtime { mut app, backend } = self;
        let mut in_flight = FuturesUnordered::new();

        info!("runtime started");

        loop {
            tokio::select! {
                biased;

                Some(reply) = in_flight.next(), if !in_flight.is_empty() => {
                    if let Some(command) = app.handle(reply) {
                        in_flight.push(command.execute(&backend));
                    }
                }

                event = events.recv() => {
                    let Some(event) = event else {
                        break;
                    };
                    if let Some(command) = app.handle(event) {
                        debug!(token = %command.token(), "command dispatched");
                        in_flight.push(command.execute(&backend));
                    }
                }
            }
        }

        debug!(pending = in_flight.len(), "event channel closed, draining");
        while let Some(reply) = in_flight.next().await {
            if let Some(command) = app.handle(reply) {
                in_flight.push(command.execute(&backend));
            }
        }

        info!("runtime stopped");
        app
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::api::fixtures::{attraction, beijing};
    use crate::api::{ApiError, MockBackend};
    use crate::app::{AppConfig, SearchResults};
    use crate::domain::{
        Attraction, AttractionId, DayNumber, ItineraryEntry, ItineraryRequest, SearchQuery,
    };
    use crate::navigator::Screen;
    use crate::swipe::{DeckState, SelectionConfig};

    async fn run_events(app: App, backend: impl Backend, events: Vec<Event>) -> App {
        let (tx, rx) = mpsc::channel(events.len().max(1));
        for event in events {
            tx.send(event).await.unwrap();
        }
        drop(tx);

        Runtime::new(app, backend).run(rx).await
    }

    /// Answers searches for "上海" slowly and everything else immediately.
    struct SlowShanghai;

    impl Backend for SlowShanghai {
        async fn search(&self, query: &SearchQuery) -> Result<Vec<Attraction>, ApiError> {
            if query.destination() == "上海" {
                tokio::time::sleep(Duration::from_millis(50)).await;
                return Ok(vec![attraction("sh1", "外滩", 31.24, 121.49)]);
            }
            Ok(beijing())
        }

        async fn attraction(&self, id: &AttractionId) -> Result<Attraction, ApiError> {
            Err(ApiError::NotFound(format!("attraction {id}")))
        }

        async fn build_itinerary(
            &self,
            _request: &ItineraryRequest,
        ) -> Result<Vec<ItineraryEntry>, ApiError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn full_recommendation_flow() {
        let mut events = vec![Event::StartRecommendation];
        events.extend((0..10).map(|_| Event::SwipeRight));
        events.push(Event::GenerateItinerary { days: "3".into() });

        let app = run_events(App::default(), MockBackend::new(beijing()), events).await;

        assert_eq!(app.deck().unwrap().state(), DeckState::Complete);
        assert_eq!(app.screen(), Screen::TripDetail);

        let trip = app.trip();
        assert_eq!(trip.rows().len(), 10);
        assert!(
            trip.itinerary()
                .entries()
                .iter()
                .all(|e| (1..=3).contains(&e.day.get()))
        );
        assert_eq!(trip.selected_day(), Some(DayNumber::FIRST));

        let scene = trip.map().unwrap();
        let day_one = trip.itinerary().entries_for(DayNumber::FIRST).count();
        assert_eq!(scene.point_count(), day_one + 1);
    }

    #[tokio::test]
    async fn search_then_detail() {
        let events = vec![
            Event::Search {
                destination: "北京".into(),
            },
            Event::OpenAttraction(AttractionId::parse("bj4").unwrap()),
        ];

        let app = run_events(App::default(), MockBackend::new(beijing()), events).await;

        assert_eq!(app.screen(), Screen::AttractionDetail);
        assert!(matches!(app.search_results(), SearchResults::Loaded { .. }));
        assert!(app.render().unwrap().contains("景点4"));
    }

    #[tokio::test]
    async fn slow_stale_search_does_not_overwrite() {
        let events = vec![
            Event::Search {
                destination: "上海".into(),
            },
            Event::Search {
                destination: "北京".into(),
            },
        ];

        let app = run_events(App::default(), SlowShanghai, events).await;

        let SearchResults::Loaded {
            destination,
            attractions,
        } = app.search_results()
        else {
            panic!("expected loaded results");
        };
        assert_eq!(destination, "北京");
        assert_eq!(attractions.len(), 12);
    }

    #[tokio::test]
    async fn empty_deck_is_immediately_exhausted() {
        let config = AppConfig::default().with_selection(SelectionConfig::new(
            10,
            "火星",
            Default::default(),
            vec![],
        ));
        let events = vec![
            Event::StartRecommendation,
            Event::GenerateItinerary { days: "2".into() },
        ];

        let app = run_events(App::new(config), MockBackend::new(beijing()), events).await;

        assert_eq!(app.deck().unwrap().state(), DeckState::Exhausted);
        assert_eq!(app.screen(), Screen::TripDetail);
        assert!(app.trip().rows().is_empty());
        assert!(app.trip().map().is_none());
    }
}
