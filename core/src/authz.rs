// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client-side authorization decisions.
//!
//! These decide which affordances to offer. The backend enforces the real rules.

use eventhub_api::{Comment, Event, UserRole};

use crate::session::Session;

/// Answers "may the signed-in user do X" for every controller.
#[derive(Debug, Clone, Copy)]
pub struct Authorizer<'a> {
    session: &'a Session,
}

impl<'a> Authorizer<'a> {
    /// Creates an authorizer over the given session.
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Whether the signed-in user organizes the event, and so may edit or delete it.
    #[must_use]
    pub fn can_manage_event(&self, event: &Event) -> bool {
        match (self.session.user_id(), event.organizer_id()) {
            (Some(user_id), Some(organizer_id)) => user_id == organizer_id,
            _ => false,
        }
    }

    /// Whether the signed-in user wrote the comment or is an administrator.
    #[must_use]
    pub fn can_delete_comment(&self, comment: &Comment) -> bool {
        let Some(user_id) = self.session.user_id() else {
            return false;
        };
        comment.user.id == Some(user_id) || self.session.is_admin()
    }

    /// Whether the signed-in user holds one of the roles.
    #[must_use]
    pub fn has_role(&self, roles: &[UserRole]) -> bool {
        self.session.user().is_some_and(|u| roles.contains(&u.role))
    }
}
