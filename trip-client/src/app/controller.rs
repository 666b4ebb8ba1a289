//! Application state and event handling.

use tracing::{debug, info, warn};

use crate::api::ApiError;
use crate::domain::{Attraction, AttractionId, ItineraryRequest, SearchQuery, TripDays};
use crate::itinerary::ItineraryRenderer;
use crate::navigator::{Navigator, Screen};
use crate::swipe::{SwipeDeck, SwipeOutcome};

use super::config::AppConfig;
use super::event::{Command, Event, Reply, ReplyPayload, RequestToken};

/// What the search results screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// No search has been issued yet.
    Idle,
    Loading {
        destination: String,
    },
    Loaded {
        destination: String,
        attractions: Vec<Attraction>,
    },
    Failed {
        destination: String,
        message: String,
    },
}

impl SearchResults {
    /// Screen title, e.g. "搜索：北京".
    pub fn title(&self) -> Option<String> {
        match self {
            SearchResults::Idle => None,
            SearchResults::Loading { destination }
            | SearchResults::Loaded { destination, .. }
            | SearchResults::Failed { destination, .. } => Some(format!("搜索：{destination}")),
        }
    }
}

/// What the attraction detail screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Empty,
    Loading(AttractionId),
    Loaded(Box<Attraction>),
    NotFound(AttractionId),
    Failed { id: AttractionId, message: String },
}

/// Latest outstanding request per flow.
#[derive(Debug, Clone, Copy, Default)]
struct Pending {
    search: Option<RequestToken>,
    detail: Option<RequestToken>,
    deck: Option<RequestToken>,
    build: Option<RequestToken>,
}

/// Take the pending token if the reply answers it.
fn claim(slot: &mut Option<RequestToken>, token: RequestToken) -> bool {
    if *slot == Some(token) {
        *slot = None;
        true
    } else {
        false
    }
}

/// The client controller.
///
/// All state lives here and is mutated only through [`App::handle`]. Backend
/// work is returned as a [`Command`]; its outcome comes back later as an
/// [`Event::Reply`]. A reply is applied only if it answers the most recent
/// request of its flow.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    navigator: Navigator,
    last_token: u64,
    pending: Pending,
    results: SearchResults,
    detail: DetailView,
    deck: Option<SwipeDeck>,
    /// Screen that was visible when the latest deck was requested.
    deck_requested_on: Screen,
    trip: ItineraryRenderer,
    notice: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let trip = ItineraryRenderer::new(config.map.clone());
        Self {
            config,
            navigator: Navigator::new(),
            last_token: 0,
            pending: Pending::default(),
            results: SearchResults::Idle,
            detail: DetailView::Empty,
            deck: None,
            deck_requested_on: Screen::Home,
            trip,
            notice: None,
        }
    }

    /// Apply an event, returning backend work to run, if any.
    pub fn handle(&mut self, event: Event) -> Option<Command> {
        if !matches!(event, Event::Reply(_)) {
            self.notice = None;
        }

        match event {
            Event::Search { destination } => self.search(&destination),
            Event::OpenAttraction(id) => Some(self.open_attraction(id)),
            Event::StartRecommendation => self.start_recommendation(),
            Event::SwipeRight => {
                self.swipe(SwipeDeck::accept);
                None
            }
            Event::SwipeLeft => {
                self.swipe(SwipeDeck::reject);
                None
            }
            Event::GenerateItinerary { days } => self.generate_itinerary(&days),
            Event::SelectDay(day) => {
                self.trip.select_day(day);
                None
            }
            Event::Back => {
                self.navigator.go_back();
                None
            }
            Event::Home => {
                self.navigator.go_home();
                None
            }
            Event::Reply(reply) => {
                self.apply(reply);
                None
            }
        }
    }

    fn issue(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    fn search(&mut self, destination: &str) -> Option<Command> {
        let query = match SearchQuery::new(
            destination,
            self.config.search.days,
            self.config.search.preferences.clone(),
        ) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, "search not issued");
                return None;
            }
        };

        self.navigator.show(Screen::SearchResults);
        self.results = SearchResults::Loading {
            destination: query.destination().to_string(),
        };

        let token = self.issue();
        self.pending.search = Some(token);
        info!(%token, destination = query.destination(), "search issued");

        Some(Command::Search { token, query })
    }

    fn open_attraction(&mut self, id: AttractionId) -> Command {
        self.navigator.show(Screen::AttractionDetail);
        self.detail = DetailView::Loading(id.clone());

        let token = self.issue();
        self.pending.detail = Some(token);
        debug!(%token, %id, "detail requested");

        Command::FetchAttraction { token, id }
    }

    fn start_recommendation(&mut self) -> Option<Command> {
        let query = match self.config.selection.deck_query() {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, "invalid recommendation settings");
                self.notice = Some(format!("无法开始推荐：{e}"));
                return None;
            }
        };

        let token = self.issue();
        self.pending.deck = Some(token);
        // A new session abandons any build still in flight for the old one.
        self.pending.build = None;
        self.deck_requested_on = self.navigator.current();
        info!(%token, destination = query.destination(), "deck requested");

        Some(Command::LoadDeck { token, query })
    }

    fn swipe(&mut self, action: fn(&mut SwipeDeck) -> SwipeOutcome) {
        if !self.navigator.is_visible(Screen::Recommend) {
            debug!("swipe outside recommendation screen ignored");
            return;
        }
        let Some(deck) = self.deck.as_mut() else {
            return;
        };

        let outcome = action(deck);
        debug!(
            ?outcome,
            cursor = deck.cursor(),
            accepted = deck.accepted().len(),
            "swipe"
        );
    }

    fn generate_itinerary(&mut self, days_input: &str) -> Option<Command> {
        let Some(deck) = &self.deck else {
            debug!("no selection session");
            return None;
        };
        if !deck.state().is_terminal() {
            debug!(state = ?deck.state(), "selection still open");
            return None;
        }

        let days = TripDays::parse_or_default(days_input);
        let request = ItineraryRequest::new(
            deck.accepted().to_vec(),
            days,
            self.config.selection.preferences.clone(),
        );

        let token = self.issue();
        self.pending.build = Some(token);
        info!(%token, %days, selected = request.selected_ids.len(), "itinerary requested");

        Some(Command::BuildItinerary { token, request })
    }

    fn apply(&mut self, reply: Reply) {
        let Reply { token, payload } = reply;

        match payload {
            ReplyPayload::SearchResults(result) => {
                if !claim(&mut self.pending.search, token) {
                    debug!(%token, "stale search reply dropped");
                    return;
                }
                let destination = match &self.results {
                    SearchResults::Loading { destination } => destination.clone(),
                    _ => String::new(),
                };
                self.results = match result {
                    Ok(attractions) => {
                        debug!(%token, count = attractions.len(), "search results");
                        SearchResults::Loaded {
                            destination,
                            attractions,
                        }
                    }
                    Err(e) => {
                        warn!(%token, error = %e, "search failed");
                        self.notice = Some(format!("搜索失败：{e}"));
                        SearchResults::Failed {
                            destination,
                            message: e.to_string(),
                        }
                    }
                };
            }

            ReplyPayload::Attraction(result) => {
                if !claim(&mut self.pending.detail, token) {
                    debug!(%token, "stale detail reply dropped");
                    return;
                }
                let DetailView::Loading(id) = &self.detail else {
                    return;
                };
                let id = id.clone();
                self.detail = match result {
                    Ok(attraction) => DetailView::Loaded(Box::new(attraction)),
                    Err(ApiError::NotFound(_)) => {
                        info!(%id, "attraction not found");
                        DetailView::NotFound(id)
                    }
                    Err(e) => {
                        warn!(%id, error = %e, "detail failed");
                        self.notice = Some(format!("加载失败：{e}"));
                        DetailView::Failed {
                            id,
                            message: e.to_string(),
                        }
                    }
                };
            }

            ReplyPayload::Deck(result) => {
                if !claim(&mut self.pending.deck, token) {
                    debug!(%token, "stale deck reply dropped");
                    return;
                }
                match result {
                    Ok(cards) => {
                        debug!(%token, cards = cards.len(), "deck loaded");
                        self.deck = Some(SwipeDeck::new(cards, self.config.selection.threshold));
                        if self.navigator.current() == self.deck_requested_on {
                            self.navigator.show(Screen::Recommend);
                        } else {
                            debug!(
                                %token,
                                screen = %self.navigator.current(),
                                "deck ready, user moved on"
                            );
                        }
                    }
                    Err(e) => {
                        warn!(%token, error = %e, "deck failed");
                        self.notice = Some(format!("加载推荐失败：{e}"));
                    }
                }
            }

            ReplyPayload::Itinerary(result) => {
                if !claim(&mut self.pending.build, token) {
                    debug!(%token, "stale itinerary reply dropped");
                    return;
                }
                match result {
                    Ok(entries) => {
                        info!(%token, entries = entries.len(), "itinerary built");
                        self.trip.load(entries);
                        if self.navigator.is_visible(Screen::Recommend) {
                            self.navigator.show(Screen::TripDetail);
                        } else {
                            debug!(
                                %token,
                                screen = %self.navigator.current(),
                                "itinerary ready, user moved on"
                            );
                        }
                    }
                    Err(e) => {
                        warn!(%token, error = %e, "itinerary failed");
                        self.notice = Some(format!("生成行程失败：{e}"));
                    }
                }
            }
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn search_results(&self) -> &SearchResults {
        &self.results
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn deck(&self) -> Option<&SwipeDeck> {
        self.deck.as_ref()
    }

    pub fn trip(&self) -> &ItineraryRenderer {
        &self.trip
    }

    /// Message for the last failed request, cleared by the next user action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
