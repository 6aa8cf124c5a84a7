// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventhub_api::{ApiError, Event, Rsvp, User, UserPatch};

use crate::backend::Backend;
use crate::route::Route;
use crate::session::Session;
use crate::ui::Ui;

/// Controller of the signed-in user's profile.
#[derive(Debug)]
pub struct Profile<'a, B: Backend> {
    backend: &'a B,
    session: &'a Session,
    user: Option<User>,
    created_events: Vec<Event>,
    rsvps: Vec<Rsvp>,
    loading: bool,
}

impl<'a, B: Backend> Profile<'a, B> {
    /// Creates an empty profile view. Call [`Profile::load`] to fill it.
    #[must_use]
    pub fn new(backend: &'a B, session: &'a Session) -> Self {
        Self {
            backend,
            session,
            user: None,
            created_events: Vec::new(),
            rsvps: Vec::new(),
            loading: false,
        }
    }

    /// Loads the account, its events and its responses side by side.
    pub async fn load(&mut self, ui: &mut dyn Ui) {
        let Some(user_id) = self.session.user_id() else {
            ui.navigate(Route::login());
            return;
        };

        self.loading = true;
        let (user, events, rsvps) = tokio::join!(
            self.backend.get_user(user_id),
            self.backend.user_events(user_id),
            self.backend.user_rsvps(user_id)
        );

        match user {
            Ok(user) => self.user = Some(user),
            Err(e) => tracing::warn!(user_id, error = %e, "failed to load user"),
        }
        match events {
            Ok(events) => self.created_events = events,
            Err(e) => tracing::warn!(user_id, error = %e, "failed to load created events"),
        }
        match rsvps {
            Ok(rsvps) => {
                self.rsvps = rsvps
                    .into_iter()
                    .filter(|r| r.status.is_participating())
                    .collect();
            }
            Err(e) => tracing::warn!(user_id, error = %e, "failed to load RSVPs"),
        }
        self.loading = false;
    }

    /// Opens an event.
    pub fn view_event(&self, event_id: i64, ui: &mut dyn Ui) {
        ui.navigate(Route::EventDetail(event_id));
    }

    /// Updates the account's username or email.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    pub async fn update_profile(
        &mut self,
        patch: &UserPatch,
        ui: &mut dyn Ui,
    ) -> Result<(), ApiError> {
        let Some(user_id) = self.session.user_id() else {
            ui.navigate(Route::login());
            return Ok(());
        };

        let result = self.backend.update_user(user_id, patch).await;
        match result {
            Ok(user) => {
                self.user = Some(user);
                Ok(())
            }
            Err(e) => {
                tracing::error!(user_id, error = %e, "failed to update profile");
                ui.alert("Failed to update profile");
                Err(e)
            }
        }
    }

    /// Changes the account's password.
    ///
    /// # Errors
    ///
    /// Returns the backend error after alerting the user.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
        ui: &mut dyn Ui,
    ) -> Result<(), ApiError> {
        let Some(user_id) = self.session.user_id() else {
            ui.navigate(Route::login());
            return Ok(());
        };

        match self
            .backend
            .change_password(user_id, old_password, new_password)
            .await
        {
            Ok(()) => {
                ui.alert("Password changed");
                Ok(())
            }
            Err(e) => {
                tracing::error!(user_id, error = %e, "failed to change password");
                ui.alert(e.server_message().unwrap_or("Failed to change password"));
                Err(e)
            }
        }
    }

    /// The account, once loaded.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Events organized by the account.
    #[must_use]
    pub fn created_events(&self) -> &[Event] {
        &self.created_events
    }

    /// The account's responses, without those not going.
    #[must_use]
    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    /// Whether a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}
