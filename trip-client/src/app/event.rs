//! Events consumed by the controller and commands it issues.

use std::fmt;

use crate::api::{ApiError, Backend};
use crate::domain::{
    Attraction, AttractionId, DayNumber, ItineraryEntry, ItineraryRequest, SearchQuery,
};

/// Tag attached to every backend request.
///
/// Tokens increase monotonically over the controller's lifetime, so a reply
/// can be matched against the latest request of its flow.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(pub(crate) u64);

impl RequestToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestToken({})", self.0)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Input to the controller: user actions and backend replies.
#[derive(Debug)]
pub enum Event {
    /// Enter pressed in the search box.
    Search { destination: String },

    /// A search result card was clicked.
    OpenAttraction(AttractionId),

    /// The recommendation entry point was clicked.
    StartRecommendation,

    /// Keep the card on top.
    SwipeRight,

    /// Skip the card on top.
    SwipeLeft,

    /// "Generate itinerary" with the raw content of the days field.
    GenerateItinerary { days: String },

    /// The day selector changed.
    SelectDay(DayNumber),

    Back,

    Home,

    Reply(Reply),
}

/// A backend response, tagged with its request's token.
#[derive(Debug)]
pub struct Reply {
    pub token: RequestToken,
    pub payload: ReplyPayload,
}

#[derive(Debug)]
pub enum ReplyPayload {
    SearchResults(Result<Vec<Attraction>, ApiError>),
    Attraction(Result<Attraction, ApiError>),
    Deck(Result<Vec<Attraction>, ApiError>),
    Itinerary(Result<Vec<ItineraryEntry>, ApiError>),
}

/// Backend work requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search {
        token: RequestToken,
        query: SearchQuery,
    },
    FetchAttraction {
        token: RequestToken,
        id: AttractionId,
    },
    LoadDeck {
        token: RequestToken,
        query: SearchQuery,
    },
    BuildItinerary {
        token: RequestToken,
        request: ItineraryRequest,
    },
}

impl Command {
    pub fn token(&self) -> RequestToken {
        match self {
            Command::Search { token, .. }
            | Command::FetchAttraction { token, .. }
            | Command::LoadDeck { token, .. }
            | Command::BuildItinerary { token, .. } => *token,
        }
    }

    /// Run the command against a backend and wrap the outcome as a reply.
    pub async fn execute<B: Backend>(self, backend: &B) -> Event {
        let token = self.token();
        let payload = match self {
            Command::Search { query, .. } => ReplyPayload::SearchResults(backend.search(&query).await),
            Command::FetchAttraction { id, .. } => {
                ReplyPayload::Attraction(backend.attraction(&id).await)
            }
            Command::LoadDeck { query, .. } => ReplyPayload::Deck(backend.search(&query).await),
            Command::BuildItinerary { request, .. } => {
                ReplyPayload::Itinerary(backend.build_itinerary(&request).await)
            }
        };

        Event::Reply(Reply { token, payload })
    }
}
