// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use eventhub_api::{
    ApiError, Comment, Event, EventCategory, EventDraft, EventHubClient, Rsvp, RsvpStatus, User,
    UserPatch,
};

/// The remote operations the controllers depend on.
///
/// [`EventHubClient`] is the production implementation.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Lists every event.
    async fn list_events(&self) -> Result<Vec<Event>, ApiError>;

    /// Lists events that have not started yet.
    async fn upcoming_events(&self) -> Result<Vec<Event>, ApiError>;

    /// Lists events of a category.
    async fn events_by_category(&self, category: EventCategory) -> Result<Vec<Event>, ApiError>;

    /// Full-text search over events.
    async fn search_events(&self, keyword: &str) -> Result<Vec<Event>, ApiError>;

    /// Gets a single event.
    async fn get_event(&self, id: i64) -> Result<Event, ApiError>;

    /// Creates an event organized by `organizer_id`.
    async fn create_event(&self, draft: &EventDraft, organizer_id: i64)
    -> Result<Event, ApiError>;

    /// Replaces the fields of an event.
    async fn update_event(&self, id: i64, draft: &EventDraft) -> Result<Event, ApiError>;

    /// Deletes an event.
    async fn delete_event(&self, id: i64) -> Result<(), ApiError>;

    /// Records a user's response to an event.
    async fn rsvp(&self, event_id: i64, user_id: i64, status: RsvpStatus) -> Result<(), ApiError>;

    /// Lists every RSVP of an event.
    async fn participants(&self, event_id: i64) -> Result<Vec<Rsvp>, ApiError>;

    /// Gets a user.
    async fn get_user(&self, id: i64) -> Result<User, ApiError>;

    /// Lists events organized by a user.
    async fn user_events(&self, user_id: i64) -> Result<Vec<Event>, ApiError>;

    /// Lists every RSVP of a user.
    async fn user_rsvps(&self, user_id: i64) -> Result<Vec<Rsvp>, ApiError>;

    /// Updates a user profile.
    async fn update_user(&self, user_id: i64, patch: &UserPatch) -> Result<User, ApiError>;

    /// Changes a user's password.
    async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError>;

    /// Lists the comments of an event.
    async fn comments(&self, event_id: i64) -> Result<Vec<Comment>, ApiError>;

    /// Posts a comment on behalf of a user.
    async fn create_comment(
        &self,
        event_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Comment, ApiError>;

    /// Deletes a comment on behalf of a user.
    async fn delete_comment(&self, comment_id: i64, user_id: i64) -> Result<(), ApiError>;
}

#[async_trait]
impl Backend for EventHubClient {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        EventHubClient::list_events(self).await
    }

    async fn upcoming_events(&self) -> Result<Vec<Event>, ApiError> {
        EventHubClient::upcoming_events(self).await
    }

    async fn events_by_category(&self, category: EventCategory) -> Result<Vec<Event>, ApiError> {
        EventHubClient::events_by_category(self, category).await
    }

    async fn search_events(&self, keyword: &str) -> Result<Vec<Event>, ApiError> {
        EventHubClient::search_events(self, keyword).await
    }

    async fn get_event(&self, id: i64) -> Result<Event, ApiError> {
        EventHubClient::get_event(self, id).await
    }

    async fn create_event(
        &self,
        draft: &EventDraft,
        organizer_id: i64,
    ) -> Result<Event, ApiError> {
        EventHubClient::create_event(self, draft, organizer_id).await
    }

    async fn update_event(&self, id: i64, draft: &EventDraft) -> Result<Event, ApiError> {
        EventHubClient::update_event(self, id, draft).await
    }

    async fn delete_event(&self, id: i64) -> Result<(), ApiError> {
        EventHubClient::delete_event(self, id).await
    }

    async fn rsvp(
        &self,
        event_id: i64,
        user_id: i64,
        status: RsvpStatus,
    ) -> Result<(), ApiError> {
        EventHubClient::rsvp(self, event_id, user_id, status).await
    }

    async fn participants(&self, event_id: i64) -> Result<Vec<Rsvp>, ApiError> {
        EventHubClient::participants(self, event_id).await
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        EventHubClient::get_user(self, id).await
    }

    async fn user_events(&self, user_id: i64) -> Result<Vec<Event>, ApiError> {
        EventHubClient::user_events(self, user_id).await
    }

    async fn user_rsvps(&self, user_id: i64) -> Result<Vec<Rsvp>, ApiError> {
        EventHubClient::user_rsvps(self, user_id).await
    }

    async fn update_user(&self, user_id: i64, patch: &UserPatch) -> Result<User, ApiError> {
        EventHubClient::update_user(self, user_id, patch).await
    }

    async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        EventHubClient::change_password(self, user_id, old_password, new_password).await
    }

    async fn comments(&self, event_id: i64) -> Result<Vec<Comment>, ApiError> {
        EventHubClient::comments(self, event_id).await
    }

    async fn create_comment(
        &self,
        event_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Comment, ApiError> {
        EventHubClient::create_comment(self, event_id, user_id, content).await
    }

    async fn delete_comment(&self, comment_id: i64, user_id: i64) -> Result<(), ApiError> {
        EventHubClient::delete_comment(self, comment_id, user_id).await
    }
}
