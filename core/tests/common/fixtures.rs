// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use eventhub_core::{
    Comment, Event, EventCategory, Rsvp, RsvpStatus, Session, SessionUser, User, UserRole,
};

/// Creates a user named `user{id}`.
#[must_use]
pub fn user(id: i64, role: UserRole) -> User {
    User {
        id: Some(id),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        role,
        created_at: None,
        is_active: Some(true),
    }
}

/// Creates a session signed in as `user{id}`.
#[must_use]
pub fn session(id: i64, role: UserRole) -> Session {
    Session::signed_in(SessionUser {
        user_id: id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        role,
    })
}

/// Creates a persisted event organized by `organizer_id`.
///
/// # Example
///
/// ```ignore
/// let event = event(5, "Jam", EventCategory::Music, "2025-03-10T14:30:00", 7);
/// ```
#[must_use]
pub fn event(
    id: i64,
    title: &str,
    category: EventCategory,
    event_date: &str,
    organizer_id: i64,
) -> Event {
    Event {
        id: Some(id),
        title: title.to_string(),
        description: format!("About {title}"),
        location: "Community hall".to_string(),
        event_date: event_date.to_string(),
        category,
        max_participants: None,
        created_at: None,
        is_active: Some(true),
        organizer: Some(user(organizer_id, UserRole::User)),
    }
}

/// Creates a response of `user_id` to `event`.
#[must_use]
pub fn rsvp(id: i64, user_id: i64, event: &Event, status: RsvpStatus) -> Rsvp {
    Rsvp {
        id: Some(id),
        user: user(user_id, UserRole::User),
        event: Some(event.clone()),
        status,
        rsvp_date: None,
    }
}

/// Creates a comment of `author_id` on `event`.
#[must_use]
pub fn comment(id: i64, author_id: i64, event: &Event, content: &str) -> Comment {
    Comment {
        id: Some(id),
        user: user(author_id, UserRole::User),
        event: Some(event.clone()),
        content: content.to_string(),
        created_at: None,
    }
}
