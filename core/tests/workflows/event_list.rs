// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventhub_core::{CategoryFilter, EventCategory, EventList, RsvpStatus, Session, UserRole};

use crate::common::{FakeBackend, RecordingUi, event, rsvp, session};

fn backend() -> FakeBackend {
    let jam = event(1, "Spring Jam", EventCategory::Music, "2025-04-01T19:00:00", 7);
    let run = event(2, "Park Run", EventCategory::Sports, "2025-04-02T08:00:00", 7);
    let swap = event(3, "Book Swap", EventCategory::Social, "2025-04-03T10:00:00", 9);
    FakeBackend::new()
        .with_rsvps([
            rsvp(1, 8, &jam, RsvpStatus::Going),
            rsvp(2, 8, &run, RsvpStatus::NotGoing),
        ])
        .with_events([jam, run, swap])
}

fn titles(list: &EventList<'_, FakeBackend>) -> Vec<String> {
    list.events().iter().map(|e| e.title.clone()).collect()
}

#[tokio::test]
async fn load_shows_upcoming_events_and_own_responses() {
    // Arrange
    let backend = backend();
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut list = EventList::new(&backend, &session);

    // Act
    list.load(&mut ui).await;

    // Assert
    assert_eq!(list.events().len(), 3);
    assert_eq!(list.user_rsvp_status(1), Some(RsvpStatus::Going));
    assert_eq!(list.user_rsvp_status(2), None);
    assert!(!list.is_loading());
}

#[tokio::test]
async fn anonymous_load_skips_responses() {
    // Arrange
    let backend = backend();
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut list = EventList::new(&backend, &session);

    // Act
    list.load(&mut ui).await;

    // Assert
    assert_eq!(backend.calls(), vec!["upcoming_events"]);
    assert_eq!(list.events().len(), 3);
}

#[tokio::test]
async fn failed_load_alerts() {
    // Arrange
    let backend = backend().fail("upcoming_events");
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut list = EventList::new(&backend, &session);

    // Act
    list.load(&mut ui).await;

    // Assert
    assert_eq!(ui.alerts, vec!["Failed to load events"]);
    assert!(list.events().is_empty());
}

#[tokio::test]
async fn category_filter_narrows_locally() {
    // Arrange
    let backend = backend();
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut list = EventList::new(&backend, &session);
    list.load(&mut ui).await;

    // Act
    list.filter_by_category(CategoryFilter::Only(EventCategory::Sports));

    // Assert
    assert_eq!(titles(&list), vec!["Park Run"]);
    assert_eq!(
        list.selected_category(),
        CategoryFilter::Only(EventCategory::Sports)
    );
    assert!(!backend.called("events_by_category"));
}

#[tokio::test]
async fn all_after_search_restores_upcoming_events() {
    // Arrange
    let backend = backend();
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut list = EventList::new(&backend, &session);
    list.load(&mut ui).await;

    // Act
    list.search("jam", &mut ui).await;

    // Assert
    assert_eq!(titles(&list), vec!["Spring Jam"]);
    assert_eq!(list.search_keyword(), "jam");

    // Act
    list.filter_by_category(CategoryFilter::All);

    // Assert
    assert_eq!(titles(&list), vec!["Spring Jam", "Park Run", "Book Swap"]);
}

#[tokio::test]
async fn blank_search_resets_without_a_request() {
    // Arrange
    let backend = backend();
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut list = EventList::new(&backend, &session);
    list.load(&mut ui).await;
    list.filter_by_category(CategoryFilter::Only(EventCategory::Music));

    // Act
    list.search("  ", &mut ui).await;

    // Assert
    assert_eq!(list.events().len(), 3);
    assert!(!backend.called("search_events"));
}

#[tokio::test]
async fn failed_search_alerts_and_keeps_results() {
    // Arrange
    let backend = backend().fail("search_events");
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut list = EventList::new(&backend, &session);
    list.load(&mut ui).await;

    // Act
    list.search("jam", &mut ui).await;

    // Assert
    assert_eq!(ui.alerts, vec!["Failed to search events"]);
    assert_eq!(list.events().len(), 3);
}
