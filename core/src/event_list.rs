// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Upcoming events, with category filter and keyword search.

use std::fmt;
use std::str::FromStr;

use eventhub_api::{Event, EventCategory, Rsvp, RsvpStatus};

use crate::backend::Backend;
use crate::session::Session;
use crate::ui::Ui;

/// Category selection of the event list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// A single category.
    Only(EventCategory),
}

impl CategoryFilter {
    fn matches(self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => event.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Controller of the event list view.
///
/// The category filter always re-slices the loaded upcoming events, so picking
/// [`CategoryFilter::All`] after a search brings back every upcoming event.
#[derive(Debug)]
pub struct EventList<'a, B: Backend> {
    backend: &'a B,
    session: &'a Session,
    events: Vec<Event>,
    filtered: Vec<Event>,
    user_rsvps: Vec<Rsvp>,
    selected_category: CategoryFilter,
    search_keyword: String,
    loading: bool,
}

impl<'a, B: Backend> EventList<'a, B> {
    /// Creates an empty list. Call [`EventList::load`] to fill it.
    #[must_use]
    pub fn new(backend: &'a B, session: &'a Session) -> Self {
        Self {
            backend,
            session,
            events: Vec::new(),
            filtered: Vec::new(),
            user_rsvps: Vec::new(),
            selected_category: CategoryFilter::All,
            search_keyword: String::new(),
            loading: false,
        }
    }

    /// Loads upcoming events and, when signed in, the viewer's own responses.
    pub async fn load(&mut self, ui: &mut dyn Ui) {
        self.loading = true;

        let backend = self.backend;
        let user_id = self.session.user_id();
        let rsvps = async move {
            match user_id {
                Some(id) => Some(backend.user_rsvps(id).await),
                None => None,
            }
        };
        let (events, rsvps) = tokio::join!(backend.upcoming_events(), rsvps);

        match events {
            Ok(events) => {
                tracing::debug!(count = events.len(), "loaded upcoming events");
                self.filtered.clone_from(&events);
                self.events = events;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load events");
                ui.alert("Failed to load events");
            }
        }

        match rsvps {
            Some(Ok(rsvps)) => {
                self.user_rsvps = rsvps
                    .into_iter()
                    .filter(|r| r.status.is_participating())
                    .collect();
            }
            Some(Err(e)) => tracing::warn!(error = %e, "failed to load RSVPs"),
            None => {}
        }

        self.loading = false;
    }

    /// Shows only events of the selected category, out of every upcoming event.
    pub fn filter_by_category(&mut self, filter: CategoryFilter) {
        self.selected_category = filter;
        self.filtered = self
            .events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
    }

    /// Replaces the shown events with the backend's search results.
    ///
    /// An empty keyword shows every upcoming event again without asking the backend.
    pub async fn search(&mut self, keyword: &str, ui: &mut dyn Ui) {
        keyword.clone_into(&mut self.search_keyword);
        if keyword.trim().is_empty() {
            self.filtered.clone_from(&self.events);
            return;
        }

        let result = self.backend.search_events(keyword).await;
        match result {
            Ok(events) => self.filtered = events,
            Err(e) => {
                tracing::error!(keyword, error = %e, "failed to search events");
                ui.alert("Failed to search events");
            }
        }
    }

    /// The viewer's response to an event, if participating.
    #[must_use]
    pub fn user_rsvp_status(&self, event_id: i64) -> Option<RsvpStatus> {
        self.user_rsvps
            .iter()
            .find(|r| r.event_id() == Some(event_id))
            .map(|r| r.status)
    }

    /// The events currently shown.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.filtered
    }

    /// Every loaded upcoming event.
    #[must_use]
    pub fn upcoming(&self) -> &[Event] {
        &self.events
    }

    /// The selected category.
    #[must_use]
    pub const fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    /// The last searched keyword.
    #[must_use]
    pub fn search_keyword(&self) -> &str {
        &self.search_keyword
    }

    /// Whether a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}
