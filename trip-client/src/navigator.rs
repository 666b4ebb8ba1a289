//! Screen navigation.
//!
//! Exactly one screen is visible at a time. The navigator remembers the
//! screen it last replaced so a single-level "back" can restore it.

use std::fmt;

use tracing::debug;

/// Error returned when parsing an unknown screen id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen id: {0}")]
pub struct InvalidScreen(String);

/// The application's screens.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    SearchResults,
    AttractionDetail,
    Recommend,
    TripDetail,
}

impl Screen {
    /// Every screen, in display order.
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::SearchResults,
        Screen::AttractionDetail,
        Screen::Recommend,
        Screen::TripDetail,
    ];

    /// Stable element id of the screen's container.
    pub fn id(self) -> &'static str {
        match self {
            Screen::Home => "home-page",
            Screen::SearchResults => "search-results-page",
            Screen::AttractionDetail => "attraction-detail-page",
            Screen::Recommend => "recommend-page",
            Screen::TripDetail => "trip-detail-page",
        }
    }

    /// Parse a container id such as `"recommend-page"`.
    pub fn parse(id: &str) -> Result<Self, InvalidScreen> {
        Screen::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| InvalidScreen(id.to_string()))
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Screen({})", self.id())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Tracks the visible screen and the one it replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
    previous: Screen,
}

impl Navigator {
    /// Start on the home screen.
    pub fn new() -> Self {
        Self {
            current: Screen::Home,
            previous: Screen::Home,
        }
    }

    /// Show a screen, hiding all others.
    ///
    /// The replaced screen becomes the back target. Showing the screen that
    /// is already visible changes nothing.
    pub fn show(&mut self, screen: Screen) {
        if screen == self.current {
            return;
        }
        debug!(from = %self.current, to = %screen, "navigate");
        self.previous = self.current;
        self.current = screen;
    }

    /// Re-show the screen that was last replaced.
    ///
    /// This does not record a new back target.
    pub fn go_back(&mut self) {
        debug!(from = %self.current, to = %self.previous, "navigate back");
        self.current = self.previous;
    }

    /// Show the home screen.
    pub fn go_home(&mut self) {
        self.show(Screen::Home);
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn previous(&self) -> Screen {
        self.previous
    }

    pub fn is_visible(&self, screen: Screen) -> bool {
        self.current == screen
    }

    /// Visibility of every screen, for rendering the container toggles.
    pub fn visibility(&self) -> impl Iterator<Item = (Screen, bool)> + '_ {
        Screen::ALL.into_iter().map(|s| (s, s == self.current))
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn screen() -> impl Strategy<Value = Screen> {
        prop::sample::select(Screen::ALL.to_vec())
    }

    #[derive(Debug, Clone)]
    enum Action {
        Show(Screen),
        Back,
        Home,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            screen().prop_map(Action::Show),
            Just(Action::Back),
            Just(Action::Home),
        ]
    }

    proptest! {
        /// show(a) then show(b) leaves exactly b visible; back shows a.
        #[test]
        fn show_then_back(a in screen(), b in screen()) {
            prop_assume!(a != b);
            let mut nav = Navigator::new();
            nav.show(a);
            nav.show(b);

            prop_assert!(nav.is_visible(b));
            prop_assert_eq!(nav.visibility().filter(|(_, v)| *v).count(), 1);

            nav.go_back();
            prop_assert!(nav.is_visible(a));
        }

        /// Exactly one screen is visible after any sequence of calls.
        #[test]
        fn exactly_one_visible(actions in prop::collection::vec(action(), 0..30)) {
            let mut nav = Navigator::new();
            for action in actions {
                match action {
                    Action::Show(s) => nav.show(s),
                    Action::Back => nav.go_back(),
                    Action::Home => nav.go_home(),
                }
                prop_assert_eq!(nav.visibility().filter(|(_, v)| *v).count(), 1);
            }
        }
    }
}
