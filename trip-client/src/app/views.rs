//! Askama templates for the client screens.
//!
//! Each screen renders as a fragment wrapped in its container element, so the
//! host page can swap the visible container in place.

use askama::Template;

use crate::domain::Attraction;
use crate::itinerary::{DayOption, ItineraryRenderer, ListRow};
use crate::navigator::Screen;
use crate::swipe::SwipeDeck;

use super::controller::{App, DetailView, SearchResults};

/// Errors from rendering a screen.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("map encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

// ============================================================================
// Screen Templates
// ============================================================================

/// Home screen: search box and recommendation entry point.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub notice: Option<String>,
}

/// Search results: one card per attraction.
#[derive(Template)]
#[template(path = "search_results.html")]
pub struct SearchResultsTemplate {
    pub notice: Option<String>,
    pub title: String,
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<CardView>,
}

/// Attraction detail.
#[derive(Template)]
#[template(path = "attraction_detail.html")]
pub struct AttractionDetailTemplate {
    pub notice: Option<String>,
    pub attraction: Option<AttractionView>,
    /// Shown in place of the attraction while loading or after a failure.
    pub status: Option<String>,
}

/// Swipe card stack.
#[derive(Template)]
#[template(path = "card_stack.html")]
pub struct CardStackTemplate {
    pub notice: Option<String>,
    pub card: Option<CardView>,
    pub accepted: usize,
    pub threshold: usize,
    /// Whether the session is over and an itinerary can be requested.
    pub finished: bool,
}

/// Itinerary list, day selector and map.
#[derive(Template)]
#[template(path = "trip_detail.html")]
pub struct TripDetailTemplate {
    pub notice: Option<String>,
    pub rows: Vec<String>,
    pub days: Vec<DayOption>,
    /// The selected day's map scene, as JSON for the map widget.
    pub scene: Option<String>,
}

// ============================================================================
// View Models
// ============================================================================

/// Summary card for result lists and the swipe stack.
#[derive(Debug, Clone)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub address: String,
    pub tags: String,
    pub image: Option<String>,
}

impl CardView {
    pub fn from_attraction(a: &Attraction) -> Self {
        Self {
            id: a.id.as_str().to_string(),
            name: a.name.clone(),
            address: a.address.clone(),
            tags: a.tag_line(),
            image: a.cover_image().map(str::to_string),
        }
    }
}

/// Everything the detail screen shows about one attraction.
#[derive(Debug, Clone)]
pub struct AttractionView {
    pub name: String,
    pub address: String,
    pub description: String,
    pub tags: String,
    pub images: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub source_posts: Vec<String>,
}

impl AttractionView {
    pub fn from_attraction(a: &Attraction) -> Self {
        Self {
            name: a.name.clone(),
            address: a.address.clone(),
            description: a.description.clone(),
            tags: a.tag_line(),
            images: a.images.clone(),
            pros: a.pros.clone(),
            cons: a.cons.clone(),
            source_posts: a.source_posts.clone(),
        }
    }
}

impl SearchResultsTemplate {
    fn from_results(results: &SearchResults, notice: Option<String>) -> Self {
        let title = results.title().unwrap_or_default();
        let (loading, error, cards) = match results {
            SearchResults::Idle => (false, None, Vec::new()),
            SearchResults::Loading { .. } => (true, None, Vec::new()),
            SearchResults::Loaded { attractions, .. } => (
                false,
                None,
                attractions.iter().map(CardView::from_attraction).collect(),
            ),
            SearchResults::Failed { message, .. } => (false, Some(message.clone()), Vec::new()),
        };

        Self {
            notice,
            title,
            loading,
            error,
            cards,
        }
    }
}

impl AttractionDetailTemplate {
    fn from_detail(detail: &DetailView, notice: Option<String>) -> Self {
        let (attraction, status) = match detail {
            DetailView::Loaded(a) => (Some(AttractionView::from_attraction(a)), None),
            DetailView::Empty => (None, Some("请选择一个景点".to_string())),
            DetailView::Loading(_) => (None, Some("加载中…".to_string())),
            DetailView::NotFound(_) => (None, Some("未找到该景点".to_string())),
            DetailView::Failed { .. } => (None, Some("加载失败，请稍后重试".to_string())),
        };

        Self {
            notice,
            attraction,
            status,
        }
    }
}

impl CardStackTemplate {
    fn from_deck(deck: Option<&SwipeDeck>, notice: Option<String>) -> Self {
        match deck {
            Some(deck) => Self {
                notice,
                card: deck.current().map(CardView::from_attraction),
                accepted: deck.accepted().len(),
                threshold: deck.threshold(),
                finished: deck.state().is_terminal(),
            },
            None => Self {
                notice,
                card: None,
                accepted: 0,
                threshold: 0,
                finished: false,
            },
        }
    }
}

impl TripDetailTemplate {
    fn from_renderer(trip: &ItineraryRenderer, notice: Option<String>) -> Result<Self, ViewError> {
        let scene = trip.map().map(serde_json::to_string).transpose()?;

        Ok(Self {
            notice,
            rows: trip.rows().iter().map(ListRow::text).collect(),
            days: trip.day_options(),
            scene,
        })
    }
}

impl App {
    /// Render the visible screen.
    pub fn render(&self) -> Result<String, ViewError> {
        let notice = self.notice().map(str::to_string);

        let html = match self.screen() {
            Screen::Home => HomeTemplate { notice }.render()?,
            Screen::SearchResults => {
                SearchResultsTemplate::from_results(self.search_results(), notice).render()?
            }
            Screen::AttractionDetail => {
                AttractionDetailTemplate::from_detail(self.detail(), notice).render()?
            }
            Screen::Recommend => CardStackTemplate::from_deck(self.deck(), notice).render()?,
            Screen::TripDetail => TripDetailTemplate::from_renderer(self.trip(), notice)?.render()?,
        };

        Ok(html)
    }
}
