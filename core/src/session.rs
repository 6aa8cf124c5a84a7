// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventhub_api::UserRole;

/// The signed-in user, as known to the client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SessionUser {
    /// Backend id of the user.
    pub user_id: i64,
    /// Login name.
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Account role.
    #[serde(default)]
    pub role: UserRole,
}

/// Authentication context passed explicitly to every controller.
///
/// A session without a user is anonymous. Nothing here is a security boundary:
/// the backend re-checks every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    /// An anonymous session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    /// A session for the given user.
    #[must_use]
    pub const fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Id of the signed-in user, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.user_id)
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == UserRole::Admin)
    }

    /// Replaces the signed-in user.
    pub fn sign_in(&mut self, user: SessionUser) {
        tracing::debug!(user_id = user.user_id, "signed in");
        self.user = Some(user);
    }

    /// Drops the signed-in user.
    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

impl From<Option<SessionUser>> for Session {
    fn from(user: Option<SessionUser>) -> Self {
        Self { user }
    }
}
