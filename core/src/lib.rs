// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Controllers of the `EventHub` client: event list, event detail, the
//! create/edit form and the profile, plus the session, authorization and
//! routing they share.

mod authz;
mod backend;
mod datetime;
mod event_detail;
mod event_form;
mod event_list;
mod profile;
mod route;
mod session;
mod ui;

pub use eventhub_api::{
    ApiConfig, ApiError, AuthMethod, Comment, Event, EventCategory, EventDraft, EventHubClient,
    Rsvp, RsvpStatus, User, UserPatch, UserRole,
};

pub use crate::authz::Authorizer;
pub use crate::backend::Backend;
pub use crate::datetime::{
    DateTimeError, combine_timestamp, format_long, format_short, parse_date, parse_time,
    split_timestamp,
};
pub use crate::event_detail::{Action, EventDetail};
pub use crate::event_form::{
    EventForm, EventFormValues, Field, FieldError, FormMode, Submission, TITLE_MAX_LEN,
};
pub use crate::event_list::{CategoryFilter, EventList};
pub use crate::profile::Profile;
pub use crate::route::{Guard, GuardDecision, Route, navigate};
pub use crate::session::{Session, SessionUser};
pub use crate::ui::Ui;

/// The name of the application.
pub const APP_NAME: &str = "eventhub";
