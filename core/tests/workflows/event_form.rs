// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventhub_core::{
    ApiError, EventCategory, EventForm, Field, FieldError, FormMode, Route, Session, Submission,
    UserRole,
};
use jiff::civil::date;

use crate::common::{FakeBackend, RecordingUi, event, session};

fn fill(form: &mut EventForm<'_, FakeBackend>) {
    let values = form.values_mut();
    values.title = "Spring Jam".to_string();
    values.description = "Bring an instrument".to_string();
    values.location = "Room 4".to_string();
    values.date = Some(date(2025, 4, 1));
    values.time = "19:00".to_string();
    values.category = Some(EventCategory::Music);
}

#[tokio::test]
async fn create_sends_draft_and_returns_to_list() {
    // Arrange
    let backend = FakeBackend::new();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut form = EventForm::new(&backend, &session, FormMode::Create);
    fill(&mut form);

    // Act
    let outcome = form.submit(&mut ui).await;

    // Assert
    let Submission::Saved(created) = outcome else {
        panic!("expected a saved event, got {outcome:?}");
    };
    assert_eq!(created.event_date, "2025-04-01T19:00:00");
    assert_eq!(created.organizer_id(), Some(7));
    assert_eq!(ui.navigations, vec![Route::Events]);
    assert!(ui.alerts.is_empty());
}

#[tokio::test]
async fn invalid_submit_touches_every_field_and_sends_nothing() {
    // Arrange
    let backend = FakeBackend::new();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut form = EventForm::new(&backend, &session, FormMode::Create);
    form.values_mut().title = "x".repeat(201);

    // Act
    let outcome = form.submit(&mut ui).await;

    // Assert
    assert!(matches!(outcome, Submission::Invalid));
    assert!(backend.calls().is_empty());
    assert!(ui.navigations.is_empty());
    for field in Field::ALL {
        assert!(form.is_touched(field), "{field:?} should be touched");
    }
    let errors = form.visible_errors();
    assert!(errors.contains(&(Field::Title, FieldError::TooLong { max: 200 })));
    assert!(errors.contains(&(Field::Date, FieldError::Required)));
}

#[tokio::test]
async fn untouched_errors_stay_hidden() {
    // Arrange
    let backend = FakeBackend::new();
    let session = session(7, UserRole::User);
    let mut form = EventForm::new(&backend, &session, FormMode::Create);

    // Act
    form.touch(Field::Location);

    // Assert
    assert_eq!(
        form.visible_errors(),
        vec![(Field::Location, FieldError::Required)]
    );
}

#[tokio::test]
async fn anonymous_submit_goes_to_login() {
    // Arrange
    let backend = FakeBackend::new();
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut form = EventForm::new(&backend, &session, FormMode::Create);
    fill(&mut form);

    // Act
    let outcome = form.submit(&mut ui).await;

    // Assert
    assert!(matches!(outcome, Submission::Unauthenticated));
    assert_eq!(ui.navigations, vec![Route::login()]);
    assert!(!backend.called("create_event"));
}

#[tokio::test]
async fn failed_create_alerts_and_keeps_values() {
    // Arrange
    let backend = FakeBackend::new().fail("create_event");
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut form = EventForm::new(&backend, &session, FormMode::Create);
    fill(&mut form);

    // Act
    let outcome = form.submit(&mut ui).await;

    // Assert
    assert!(matches!(outcome, Submission::Failed(_)));
    assert_eq!(ui.alerts, vec!["Failed to create event. Please try again."]);
    assert!(ui.navigations.is_empty());
    assert_eq!(form.values().title, "Spring Jam");
}

#[tokio::test]
async fn edit_round_trips_stored_date() {
    // Arrange
    let stored = event(5, "Jam", EventCategory::Music, "2025-03-10T14:30:00", 7);
    let backend = FakeBackend::new().with_events([stored]);
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut form = EventForm::for_route(&backend, &session, &Route::EditEvent(5)).unwrap();

    // Act
    form.init(&mut ui).await;

    // Assert - the fields show the stored local date and time
    assert_eq!(form.values().date, Some(date(2025, 3, 10)));
    assert_eq!(form.values().time, "14:30");

    // Act - submit without changes
    let outcome = form.submit(&mut ui).await;

    // Assert - the same timestamp is sent back
    let Submission::Saved(updated) = outcome else {
        panic!("expected a saved event, got {outcome:?}");
    };
    assert_eq!(updated.event_date, "2025-03-10T14:30:00");
    assert_eq!(ui.navigations, vec![Route::EventDetail(5)]);
}

#[tokio::test]
async fn edit_keeps_stored_seconds_when_date_is_unchanged() {
    // Arrange
    let stored = event(5, "Jam", EventCategory::Music, "2025-03-10T14:30:45", 7);
    let backend = FakeBackend::new().with_events([stored]);
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut form = EventForm::new(&backend, &session, FormMode::Edit(5));
    form.init(&mut ui).await;

    // Act
    form.values_mut().title = "Late Jam".to_string();
    let outcome = form.submit(&mut ui).await;

    // Assert
    let Submission::Saved(updated) = outcome else {
        panic!("expected a saved event, got {outcome:?}");
    };
    assert_eq!(updated.title, "Late Jam");
    assert_eq!(updated.event_date, "2025-03-10T14:30:45");
}

#[tokio::test]
async fn edit_with_new_time_writes_whole_minutes() {
    // Arrange
    let stored = event(5, "Jam", EventCategory::Music, "2025-03-10T14:30:45", 7);
    let backend = FakeBackend::new().with_events([stored]);
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut form = EventForm::new(&backend, &session, FormMode::Edit(5));
    form.init(&mut ui).await;

    // Act
    form.values_mut().time = "16:00".to_string();
    let outcome = form.submit(&mut ui).await;

    // Assert
    let Submission::Saved(updated) = outcome else {
        panic!("expected a saved event, got {outcome:?}");
    };
    assert_eq!(updated.event_date, "2025-03-10T16:00:00");
}

#[tokio::test]
async fn edit_load_failure_returns_to_list() {
    // Arrange
    let backend = FakeBackend::new();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut form = EventForm::new(&backend, &session, FormMode::Edit(99));

    // Act
    form.init(&mut ui).await;

    // Assert
    assert_eq!(ui.alerts, vec!["Failed to load event."]);
    assert_eq!(ui.navigations, vec![Route::Events]);
    assert!(matches!(form.take_load_error(), Some(ApiError::NotFound(_))));
}

#[tokio::test]
async fn edit_by_someone_else_is_sent_to_the_event() {
    // Arrange
    let stored = event(5, "Jam", EventCategory::Music, "2025-03-10T14:30:00", 7);
    let backend = FakeBackend::new().with_events([stored]);
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut form = EventForm::new(&backend, &session, FormMode::Edit(5));

    // Act
    form.init(&mut ui).await;

    // Assert
    assert_eq!(ui.navigations, vec![Route::EventDetail(5)]);
    assert!(form.values().title.is_empty());
}

#[tokio::test]
async fn cancel_goes_back() {
    // Arrange
    let backend = FakeBackend::new();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();

    // Act
    EventForm::new(&backend, &session, FormMode::Create).cancel(&mut ui);
    EventForm::new(&backend, &session, FormMode::Edit(3)).cancel(&mut ui);

    // Assert
    assert_eq!(ui.navigations, vec![Route::Events, Route::EventDetail(3)]);
}
