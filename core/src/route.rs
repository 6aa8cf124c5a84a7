// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client routes and the navigation gate in front of guarded ones.

use std::fmt;
use std::str::FromStr;

use eventhub_api::UserRole;

use crate::authz::Authorizer;
use crate::session::Session;

/// A navigable client location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/events`
    Events,
    /// `/event/:id`
    EventDetail(i64),
    /// `/create-event`
    CreateEvent,
    /// `/edit-event/:id`
    EditEvent(i64),
    /// `/login`, optionally resuming `return_url` afterwards.
    Login {
        /// Path to resume after signing in.
        return_url: Option<String>,
    },
    /// `/register`
    Register,
    /// `/profile`
    Profile,
}

impl Route {
    /// The login page, without a path to resume.
    #[must_use]
    pub const fn login() -> Self {
        Self::Login { return_url: None }
    }

    /// Resolves a path. `/` and unknown paths resolve to the event list.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["events"] => Self::Events,
            ["event", id] => id.parse().map_or(Self::Events, Self::EventDetail),
            ["create-event"] => Self::CreateEvent,
            ["edit-event", id] => id.parse().map_or(Self::Events, Self::EditEvent),
            ["login"] => Self::Login {
                return_url: query
                    .split('&')
                    .find_map(|kv| kv.strip_prefix("returnUrl="))
                    .filter(|v| !v.is_empty())
                    .map(str::to_string),
            },
            ["register"] => Self::Register,
            ["profile"] => Self::Profile,
            _ => Self::Events,
        }
    }

    /// The path of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Events => "/events".to_string(),
            Self::EventDetail(id) => format!("/event/{id}"),
            Self::CreateEvent => "/create-event".to_string(),
            Self::EditEvent(id) => format!("/edit-event/{id}"),
            Self::Login { return_url: None } => "/login".to_string(),
            Self::Login {
                return_url: Some(url),
            } => format!("/login?returnUrl={url}"),
            Self::Register => "/register".to_string(),
            Self::Profile => "/profile".to_string(),
        }
    }

    /// The guard in front of the route, if it is guarded.
    #[must_use]
    pub fn guard(&self) -> Option<Guard> {
        match self {
            Self::CreateEvent | Self::EditEvent(_) | Self::Profile => Some(Guard::authenticated()),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Entry requirements of a guarded route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guard {
    roles: Option<Vec<UserRole>>,
}

impl Guard {
    /// Requires a signed-in user.
    #[must_use]
    pub const fn authenticated() -> Self {
        Self { roles: None }
    }

    /// Requires a signed-in user holding one of `roles`.
    #[must_use]
    pub fn with_roles(roles: impl Into<Vec<UserRole>>) -> Self {
        Self {
            roles: Some(roles.into()),
        }
    }

    /// Decides whether `session` may enter `requested`.
    ///
    /// Anonymous users go to the login page, which resumes `requested` afterwards.
    /// Users lacking a required role go home.
    #[must_use]
    pub fn check(&self, session: &Session, requested: &Route) -> GuardDecision {
        if !session.is_authenticated() {
            tracing::debug!(route = %requested, "anonymous user redirected to login");
            return GuardDecision::Redirect(Route::Login {
                return_url: Some(requested.path()),
            });
        }

        match &self.roles {
            Some(roles) if !Authorizer::new(session).has_role(roles) => {
                tracing::debug!(route = %requested, "user lacks a required role");
                GuardDecision::Redirect(Route::Events)
            }
            _ => GuardDecision::Allow,
        }
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Enter the requested route.
    Allow,
    /// Go elsewhere instead.
    Redirect(Route),
}

/// Resolves `path` and runs its guard, returning the route actually entered.
#[must_use]
pub fn navigate(session: &Session, path: &str) -> Route {
    let route = Route::parse(path);
    match route.guard().map(|g| g.check(session, &route)) {
        Some(GuardDecision::Redirect(to)) => to,
        Some(GuardDecision::Allow) | None => route,
    }
}
