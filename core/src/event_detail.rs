// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A single event with its participants and comments.

use eventhub_api::{ApiError, Comment, Event, Rsvp, RsvpStatus};

use crate::authz::Authorizer;
use crate::backend::Backend;
use crate::route::Route;
use crate::session::Session;
use crate::ui::Ui;

/// Result of a mutation attempted from the detail view.
#[derive(Debug)]
pub enum Action {
    /// The backend accepted the change.
    Done,
    /// Nothing to do: no event loaded, empty input, or the user declined the confirmation.
    Skipped,
    /// Nobody is signed in; the shell was sent to the login page.
    Unauthenticated,
    /// The signed-in user may not do this.
    Denied,
    /// The backend rejected the request.
    Failed(ApiError),
}

/// Controller of the event detail view.
#[derive(Debug)]
pub struct EventDetail<'a, B: Backend> {
    backend: &'a B,
    session: &'a Session,
    event: Option<Event>,
    participants: Vec<Rsvp>,
    comments: Vec<Comment>,
    user_rsvp_status: Option<RsvpStatus>,
    going_count: usize,
    interested_count: usize,
    loading: bool,
    load_error: Option<ApiError>,

    /// Draft text of a new comment.
    pub new_comment: String,
}

impl<'a, B: Backend> EventDetail<'a, B> {
    /// Creates an empty view. Call [`EventDetail::load`] to fill it.
    #[must_use]
    pub fn new(backend: &'a B, session: &'a Session) -> Self {
        Self {
            backend,
            session,
            event: None,
            participants: Vec::new(),
            comments: Vec::new(),
            user_rsvp_status: None,
            going_count: 0,
            interested_count: 0,
            loading: false,
            load_error: None,
            new_comment: String::new(),
        }
    }

    /// Loads the event, then its participants and comments side by side.
    ///
    /// If the event cannot be loaded the shell goes back to the list. Failures
    /// of the two secondary loads are only logged.
    pub async fn load(&mut self, event_id: i64, ui: &mut dyn Ui) {
        self.loading = true;
        self.load_error = None;

        let result = self.backend.get_event(event_id).await;
        match result {
            Ok(event) => self.event = Some(event),
            Err(e) => {
                tracing::error!(event_id, error = %e, "failed to load event");
                self.loading = false;
                self.load_error = Some(e);
                ui.navigate(Route::Events);
                return;
            }
        }

        let (participants, comments) = tokio::join!(
            self.backend.participants(event_id),
            self.backend.comments(event_id)
        );
        match participants {
            Ok(rsvps) => self.set_participants(rsvps),
            Err(e) => tracing::warn!(event_id, error = %e, "failed to load participants"),
        }
        match comments {
            Ok(comments) => self.comments = comments,
            Err(e) => tracing::warn!(event_id, error = %e, "failed to load comments"),
        }

        self.loading = false;
    }

    /// Why the last [`EventDetail::load`] gave up on the event, if it did.
    pub fn take_load_error(&mut self) -> Option<ApiError> {
        self.load_error.take()
    }

    /// Reloads the participant list.
    pub async fn reload_participants(&mut self) {
        let Some(event_id) = self.event_id() else {
            return;
        };

        let result = self.backend.participants(event_id).await;
        match result {
            Ok(rsvps) => self.set_participants(rsvps),
            Err(e) => tracing::warn!(event_id, error = %e, "failed to load participants"),
        }
    }

    fn set_participants(&mut self, rsvps: Vec<Rsvp>) {
        self.participants = rsvps
            .into_iter()
            .filter(|r| r.status.is_participating())
            .collect();

        self.going_count = self.count(RsvpStatus::Going);
        self.interested_count = self.count(RsvpStatus::Interested);

        if let Some(user_id) = self.session.user_id() {
            self.user_rsvp_status = self
                .participants
                .iter()
                .find(|r| r.user.id == Some(user_id))
                .map(|r| r.status);
        }
    }

    fn count(&self, status: RsvpStatus) -> usize {
        self.participants
            .iter()
            .filter(|r| r.status == status)
            .count()
    }

    /// Responds to the event on behalf of the signed-in user.
    pub async fn rsvp(&mut self, status: RsvpStatus, ui: &mut dyn Ui) -> Action {
        let Some(user_id) = self.session.user_id() else {
            ui.navigate(Route::login());
            return Action::Unauthenticated;
        };
        let Some(event_id) = self.event_id() else {
            return Action::Skipped;
        };

        let result = self.backend.rsvp(event_id, user_id, status).await;
        match result {
            Ok(()) => {
                self.user_rsvp_status = status.is_participating().then_some(status);
                self.reload_participants().await;
                Action::Done
            }
            Err(e) => {
                tracing::error!(event_id, %status, error = %e, "failed to submit RSVP");
                ui.alert(e.server_message().unwrap_or("Failed to RSVP"));
                Action::Failed(e)
            }
        }
    }

    /// Posts [`EventDetail::new_comment`] and puts the stored comment on top.
    pub async fn add_comment(&mut self, ui: &mut dyn Ui) -> Action {
        let Some(user_id) = self.session.user_id() else {
            ui.navigate(Route::login());
            return Action::Unauthenticated;
        };
        if self.new_comment.trim().is_empty() {
            return Action::Skipped;
        }
        let Some(event_id) = self.event_id() else {
            return Action::Skipped;
        };

        let result = self
            .backend
            .create_comment(event_id, user_id, &self.new_comment)
            .await;
        match result {
            Ok(comment) => {
                self.comments.insert(0, comment);
                self.new_comment.clear();
                Action::Done
            }
            Err(e) => {
                tracing::error!(event_id, error = %e, "failed to add comment");
                ui.alert("Failed to add comment");
                Action::Failed(e)
            }
        }
    }

    /// Deletes a comment after confirmation, if the signed-in user may.
    pub async fn delete_comment(&mut self, comment_id: i64, ui: &mut dyn Ui) -> Action {
        let Some(user_id) = self.session.user_id() else {
            ui.navigate(Route::login());
            return Action::Unauthenticated;
        };
        let Some(comment) = self.comments.iter().find(|c| c.id == Some(comment_id)) else {
            return Action::Skipped;
        };
        if !self.can_delete_comment(comment) {
            tracing::warn!(comment_id, user_id, "comment deletion denied");
            return Action::Denied;
        }
        if !ui.confirm("Are you sure you want to delete this comment?") {
            return Action::Skipped;
        }

        let result = self.backend.delete_comment(comment_id, user_id).await;
        match result {
            Ok(()) => {
                self.comments.retain(|c| c.id != Some(comment_id));
                Action::Done
            }
            Err(e) => {
                tracing::error!(comment_id, error = %e, "failed to delete comment");
                ui.alert("Failed to delete comment");
                Action::Failed(e)
            }
        }
    }

    /// Opens the edit form, for the organizer only.
    pub fn edit_event(&self, ui: &mut dyn Ui) -> Action {
        match &self.event {
            Some(event) if self.is_organizer() => {
                if let Some(id) = event.id {
                    ui.navigate(Route::EditEvent(id));
                }
                Action::Done
            }
            Some(_) => Action::Denied,
            None => Action::Skipped,
        }
    }

    /// Deletes the event after confirmation, for the organizer only.
    pub async fn delete_event(&mut self, ui: &mut dyn Ui) -> Action {
        let Some(event_id) = self.event_id() else {
            return Action::Skipped;
        };
        if !self.is_organizer() {
            return Action::Denied;
        }
        if !ui.confirm("Are you sure you want to delete this event?") {
            return Action::Skipped;
        }

        match self.backend.delete_event(event_id).await {
            Ok(()) => {
                ui.alert("Event deleted successfully");
                ui.navigate(Route::Events);
                Action::Done
            }
            Err(e) => {
                tracing::error!(event_id, error = %e, "failed to delete event");
                ui.alert("Failed to delete event");
                Action::Failed(e)
            }
        }
    }

    /// Whether the signed-in user may delete the comment.
    #[must_use]
    pub fn can_delete_comment(&self, comment: &Comment) -> bool {
        Authorizer::new(self.session).can_delete_comment(comment)
    }

    /// Whether the signed-in user organizes the event.
    #[must_use]
    pub fn is_organizer(&self) -> bool {
        self.event
            .as_ref()
            .is_some_and(|e| Authorizer::new(self.session).can_manage_event(e))
    }

    /// The loaded event.
    #[must_use]
    pub const fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    fn event_id(&self) -> Option<i64> {
        self.event.as_ref().and_then(|e| e.id)
    }

    /// Participants, without those who are not going.
    #[must_use]
    pub fn participants(&self) -> &[Rsvp] {
        &self.participants
    }

    /// Comments, newest additions first.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The signed-in user's own response, if participating.
    #[must_use]
    pub const fn user_rsvp_status(&self) -> Option<RsvpStatus> {
        self.user_rsvp_status
    }

    /// Number of participants going.
    #[must_use]
    pub const fn going_count(&self) -> usize {
        self.going_count
    }

    /// Number of participants interested.
    #[must_use]
    pub const fn interested_count(&self) -> usize {
        self.interested_count
    }

    /// Whether the primary load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}
