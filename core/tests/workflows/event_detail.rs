// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventhub_core::{
    Action, ApiError, EventCategory, EventDetail, Route, RsvpStatus, Session, UserRole,
};

use crate::common::{FakeBackend, RecordingUi, comment, event, rsvp, session};

const STAMP: &str = "2025-03-10T14:30:00";

fn backend() -> FakeBackend {
    let jam = event(5, "Jam", EventCategory::Music, STAMP, 7);
    FakeBackend::new()
        .with_rsvps([
            rsvp(1, 7, &jam, RsvpStatus::Going),
            rsvp(2, 8, &jam, RsvpStatus::Interested),
            rsvp(3, 9, &jam, RsvpStatus::NotGoing),
        ])
        .with_comments([
            comment(11, 8, &jam, "See you there"),
            comment(12, 9, &jam, "Can't wait"),
        ])
        .with_events([jam])
}

#[tokio::test]
async fn load_fills_participants_and_comments() {
    // Arrange
    let backend = backend();
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);

    // Act
    detail.load(5, &mut ui).await;

    // Assert
    assert_eq!(detail.event().map(|e| e.title.as_str()), Some("Jam"));
    assert_eq!(detail.participants().len(), 2);
    assert_eq!(detail.going_count(), 1);
    assert_eq!(detail.interested_count(), 1);
    assert_eq!(detail.user_rsvp_status(), Some(RsvpStatus::Interested));
    assert_eq!(detail.comments().len(), 2);
    assert!(!detail.is_loading());
    assert!(ui.navigations.is_empty());
}

#[tokio::test]
async fn missing_event_returns_to_list() {
    // Arrange
    let backend = backend();
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);

    // Act
    detail.load(404, &mut ui).await;

    // Assert
    assert_eq!(ui.navigations, vec![Route::Events]);
    assert!(detail.event().is_none());
    assert!(!backend.called("participants"));
    assert!(matches!(detail.take_load_error(), Some(ApiError::NotFound(_))));
    assert!(detail.take_load_error().is_none());
}

#[tokio::test]
async fn server_failure_on_load_is_kept() {
    // Arrange
    let backend = backend().fail("get_event");
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);

    // Act
    detail.load(5, &mut ui).await;

    // Assert
    assert_eq!(ui.navigations, vec![Route::Events]);
    assert!(matches!(
        detail.take_load_error(),
        Some(ApiError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn secondary_failures_leave_the_event_shown() {
    // Arrange
    let backend = backend().fail("comments");
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);

    // Act
    detail.load(5, &mut ui).await;

    // Assert
    assert!(detail.event().is_some());
    assert!(detail.comments().is_empty());
    assert_eq!(detail.participants().len(), 2);
    assert!(ui.alerts.is_empty());
}

#[tokio::test]
async fn not_going_removes_the_user_from_participants() {
    // Arrange
    let backend = backend();
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;

    // Act
    let action = detail.rsvp(RsvpStatus::NotGoing, &mut ui).await;

    // Assert
    assert!(matches!(action, Action::Done));
    assert_eq!(detail.user_rsvp_status(), None);
    assert_eq!(detail.interested_count(), 0);
    assert!(detail.participants().iter().all(|r| r.user.id != Some(8)));
}

#[tokio::test]
async fn going_updates_counts() {
    // Arrange
    let backend = backend();
    let session = session(20, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;

    // Act
    let action = detail.rsvp(RsvpStatus::Going, &mut ui).await;

    // Assert
    assert!(matches!(action, Action::Done));
    assert_eq!(detail.user_rsvp_status(), Some(RsvpStatus::Going));
    assert_eq!(detail.going_count(), 2);
}

#[tokio::test]
async fn anonymous_rsvp_goes_to_login() {
    // Arrange
    let backend = backend();
    let session = Session::anonymous();
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;

    // Act
    let action = detail.rsvp(RsvpStatus::Going, &mut ui).await;

    // Assert
    assert!(matches!(action, Action::Unauthenticated));
    assert_eq!(ui.navigations, vec![Route::login()]);
    assert!(!backend.called("rsvp"));
}

#[tokio::test]
async fn failed_rsvp_shows_server_message() {
    // Arrange
    let backend = backend().fail("rsvp");
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;

    // Act
    let action = detail.rsvp(RsvpStatus::Going, &mut ui).await;

    // Assert
    assert!(matches!(action, Action::Failed(_)));
    assert_eq!(ui.alerts, vec!["rsvp failed"]);
}

#[tokio::test]
async fn comment_is_prepended_and_draft_cleared() {
    // Arrange
    let backend = backend();
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;
    detail.new_comment = "Bringing snacks".to_string();

    // Act
    let action = detail.add_comment(&mut ui).await;

    // Assert
    assert!(matches!(action, Action::Done));
    assert_eq!(detail.comments()[0].content, "Bringing snacks");
    assert_eq!(detail.comments().len(), 3);
    assert!(detail.new_comment.is_empty());
}

#[tokio::test]
async fn blank_comment_is_not_sent() {
    // Arrange
    let backend = backend();
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::default();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;
    detail.new_comment = "   ".to_string();

    // Act
    let action = detail.add_comment(&mut ui).await;

    // Assert
    assert!(matches!(action, Action::Skipped));
    assert!(!backend.called("create_comment"));
}

#[tokio::test]
async fn only_author_or_admin_may_delete_comment() {
    // Arrange
    let backend = backend();
    let stranger = session(20, UserRole::User);
    let author = session(8, UserRole::User);
    let admin = session(1, UserRole::Admin);
    let mut ui = RecordingUi::confirming();

    // Act - someone else
    let mut detail = EventDetail::new(&backend, &stranger);
    detail.load(5, &mut ui).await;
    let denied = detail.delete_comment(11, &mut ui).await;

    // Assert - denied before asking
    assert!(matches!(denied, Action::Denied));
    assert!(ui.confirmations.is_empty());
    assert!(!backend.called("delete_comment"));

    // Act - the author
    let mut detail = EventDetail::new(&backend, &author);
    detail.load(5, &mut ui).await;
    let by_author = detail.delete_comment(11, &mut ui).await;

    // Assert
    assert!(matches!(by_author, Action::Done));
    assert!(detail.comments().iter().all(|c| c.id != Some(11)));

    // Act - an administrator
    let mut detail = EventDetail::new(&backend, &admin);
    detail.load(5, &mut ui).await;
    let by_admin = detail.delete_comment(12, &mut ui).await;

    // Assert
    assert!(matches!(by_admin, Action::Done));
    assert!(backend.comments_stored().is_empty());
}

#[tokio::test]
async fn declined_comment_deletion_keeps_comment() {
    // Arrange
    let backend = backend();
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::declining();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;

    // Act
    let action = detail.delete_comment(11, &mut ui).await;

    // Assert
    assert!(matches!(action, Action::Skipped));
    assert_eq!(
        ui.confirmations,
        vec!["Are you sure you want to delete this comment?"]
    );
    assert_eq!(detail.comments().len(), 2);
}

#[tokio::test]
async fn organizer_may_edit_and_delete_the_event() {
    // Arrange
    let backend = backend();
    let session = session(7, UserRole::User);
    let mut ui = RecordingUi::confirming();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;

    // Act
    let edit = detail.edit_event(&mut ui);
    let delete = detail.delete_event(&mut ui).await;

    // Assert
    assert!(detail.is_organizer());
    assert!(matches!(edit, Action::Done));
    assert!(matches!(delete, Action::Done));
    assert_eq!(ui.navigations, vec![Route::EditEvent(5), Route::Events]);
    assert_eq!(ui.alerts, vec!["Event deleted successfully"]);
    assert!(backend.events().is_empty());
}

#[tokio::test]
async fn non_organizer_cannot_delete_the_event() {
    // Arrange
    let backend = backend();
    let session = session(8, UserRole::User);
    let mut ui = RecordingUi::confirming();
    let mut detail = EventDetail::new(&backend, &session);
    detail.load(5, &mut ui).await;

    // Act
    let action = detail.delete_event(&mut ui).await;

    // Assert
    assert!(matches!(action, Action::Denied));
    assert!(ui.confirmations.is_empty());
    assert_eq!(backend.events().len(), 1);
}
