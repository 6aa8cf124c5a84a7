// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventhub_core::{EventCategory, Profile, Route, RsvpStatus, Session, UserPatch, UserRole};

use crate::common::{FakeBackend, RecordingUi, event, rsvp, session};

fn backend() -> FakeBackend {
    let jam = event(1, "Spring Jam", EventCategory::Music, "2025-04-01T19:00:00", 7);
    let run = event(2, "Park Run", EventCategory::Sports, "2025-04-02T08:00:00", 9);
    FakeBackend::new()
        .with_rsvps([
            rsvp(1, 7, &run, RsvpStatus::Interested),
            rsvp(2, 7, &jam, RsvpStatus::NotGoing),
        ])
        .with_events([jam, run])
}

#[tokio::test]
async fn load_collects_account_events_and_responses() {
    // Arrange
    let backend = backend();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut profile = Profile::new(&backend, &session);

    // Act
    profile.load(&mut ui).await;

    // Assert
    assert_eq!(profile.user().map(|u| u.username.as_str()), Some("user7"));
    assert_eq!(profile.created_events().len(), 1);
    assert_eq!(profile.rsvps().len(), 1);
    assert_eq!(profile.rsvps()[0].status, RsvpStatus::Interested);
}

#[tokio::test]
async fn anonymous_profile_goes_to_login() {
    // Arrange
    let backend = backend();
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut profile = Profile::new(&backend, &session);

    // Act
    profile.load(&mut ui).await;

    // Assert
    assert_eq!(ui.navigations, vec![Route::login()]);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn update_replaces_the_account() {
    // Arrange
    let backend = backend();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut profile = Profile::new(&backend, &session);
    let patch = UserPatch {
        email: Some("new@example.com".to_string()),
        ..Default::default()
    };

    // Act
    profile.update_profile(&patch, &mut ui).await.unwrap();

    // Assert
    let user = profile.user().unwrap();
    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.username, "user7");
}

#[tokio::test]
async fn wrong_password_shows_server_message() {
    // Arrange
    let backend = backend();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let profile = Profile::new(&backend, &session);

    // Act
    let result = profile.change_password("wrong", "secret", &mut ui).await;

    // Assert
    assert!(result.is_err());
    assert_eq!(ui.alerts, vec!["Old password is incorrect"]);
}

#[tokio::test]
async fn view_event_opens_detail() {
    // Arrange
    let backend = backend();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::default();
    let profile = Profile::new(&backend, &session);

    // Act
    profile.view_event(2, &mut ui);

    // Assert
    assert_eq!(ui.navigations, vec![Route::EventDetail(2)]);
}
