// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The event form, shared by event creation and event editing.

use std::collections::BTreeSet;
use std::fmt;

use eventhub_api::{ApiError, Event, EventCategory, EventDraft};
use jiff::civil::Date;

use crate::authz::Authorizer;
use crate::backend::Backend;
use crate::datetime::{DateTimeError, combine_timestamp, parse_time, split_timestamp};
use crate::route::Route;
use crate::session::Session;
use crate::ui::Ui;

/// Longest accepted title, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Whether the form creates a new event or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Create a new event.
    Create,
    /// Edit the event with this id.
    Edit(i64),
}

/// A field of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Title
    Title,
    /// Description
    Description,
    /// Location
    Location,
    /// Calendar date
    Date,
    /// `HH:MM` time
    Time,
    /// Category
    Category,
    /// Participant limit
    MaxParticipants,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 7] = [
        Self::Title,
        Self::Description,
        Self::Location,
        Self::Date,
        Self::Time,
        Self::Category,
        Self::MaxParticipants,
    ];

    /// Human readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Location => "Location",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Category => "Category",
            Self::MaxParticipants => "Max participants",
        }
    }
}

/// Why a field value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field is required but empty.
    Required,
    /// The text is longer than allowed.
    TooLong {
        /// Maximum length in characters.
        max: usize,
    },
    /// The time is not `HH:MM`.
    InvalidTime,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
            Self::InvalidTime => write!(f, "must be a time like 14:30"),
        }
    }
}

/// Current values of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFormValues {
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Location
    pub location: String,
    /// Calendar date
    pub date: Option<Date>,
    /// `HH:MM` time
    pub time: String,
    /// Category
    pub category: Option<EventCategory>,
    /// Participant limit
    pub max_participants: Option<u32>,
}

impl EventFormValues {
    /// Pre-populates the fields from a stored event.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored timestamp cannot be split. Every other
    /// field is still filled in the returned values.
    pub fn from_event(event: &Event) -> (Self, Result<(), DateTimeError>) {
        let mut values = Self {
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            date: None,
            time: String::new(),
            category: Some(event.category),
            max_participants: event.max_participants,
        };

        match split_timestamp(&event.event_date) {
            Ok((date, time)) => {
                values.date = Some(date);
                values.time = time;
                (values, Ok(()))
            }
            Err(e) => (values, Err(e)),
        }
    }

    /// Validation errors, in field order. Empty when the form may be submitted.
    #[must_use]
    pub fn errors(&self) -> Vec<(Field, FieldError)> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push((Field::Title, FieldError::Required));
        } else if self.title.chars().count() > TITLE_MAX_LEN {
            errors.push((Field::Title, FieldError::TooLong { max: TITLE_MAX_LEN }));
        }
        if self.description.trim().is_empty() {
            errors.push((Field::Description, FieldError::Required));
        }
        if self.location.trim().is_empty() {
            errors.push((Field::Location, FieldError::Required));
        }
        if self.date.is_none() {
            errors.push((Field::Date, FieldError::Required));
        }
        if self.time.trim().is_empty() {
            errors.push((Field::Time, FieldError::Required));
        } else if parse_time(&self.time).is_err() {
            errors.push((Field::Time, FieldError::InvalidTime));
        }
        if self.category.is_none() {
            errors.push((Field::Category, FieldError::Required));
        }

        errors
    }

    /// Builds the request body. `None` unless every required field is set.
    #[must_use]
    pub fn to_draft(&self) -> Option<EventDraft> {
        if !self.errors().is_empty() {
            return None;
        }

        let event_date = combine_timestamp(self.date?, &self.time).ok()?;
        Some(EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            event_date,
            category: self.category?,
            max_participants: self.max_participants,
        })
    }
}

/// Result of submitting the form.
#[derive(Debug)]
pub enum Submission {
    /// Some field is invalid; every field is now touched and nothing was sent.
    Invalid,
    /// Nobody is signed in; the shell was sent to the login page.
    Unauthenticated,
    /// The backend stored the event.
    Saved(Event),
    /// The backend rejected the request; the form is left as it was.
    Failed(ApiError),
}

/// Controller of the create/edit event form.
#[derive(Debug)]
pub struct EventForm<'a, B: Backend> {
    backend: &'a B,
    session: &'a Session,
    mode: FormMode,
    values: EventFormValues,
    touched: BTreeSet<Field>,
    stored: Option<StoredDate>,
    load_error: Option<ApiError>,
}

/// Date and time as loaded in edit mode, with the raw timestamp they came from.
#[derive(Debug)]
struct StoredDate {
    date: Date,
    time: String,
    stamp: String,
}

impl<'a, B: Backend> EventForm<'a, B> {
    /// Creates an empty form in the given mode. Call [`EventForm::init`] before use.
    #[must_use]
    pub fn new(backend: &'a B, session: &'a Session, mode: FormMode) -> Self {
        Self {
            backend,
            session,
            mode,
            values: EventFormValues::default(),
            touched: BTreeSet::new(),
            stored: None,
            load_error: None,
        }
    }

    /// Creates the form a route asks for: edit mode when it names an event.
    #[must_use]
    pub fn for_route(backend: &'a B, session: &'a Session, route: &Route) -> Option<Self> {
        match route {
            Route::CreateEvent => Some(Self::new(backend, session, FormMode::Create)),
            Route::EditEvent(id) => Some(Self::new(backend, session, FormMode::Edit(*id))),
            _ => None,
        }
    }

    /// Loads the event being edited into the form. Does nothing in create mode.
    pub async fn init(&mut self, ui: &mut dyn Ui) {
        let FormMode::Edit(id) = self.mode else {
            return;
        };

        let event = match self.backend.get_event(id).await {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(id, error = %e, "failed to load event for editing");
                self.load_error = Some(e);
                ui.alert("Failed to load event.");
                ui.navigate(Route::Events);
                return;
            }
        };

        if !Authorizer::new(self.session).can_manage_event(&event) {
            tracing::warn!(id, "edit attempted by someone other than the organizer");
            ui.alert("Only the organizer can edit this event.");
            ui.navigate(Route::EventDetail(id));
            return;
        }

        let (values, split) = EventFormValues::from_event(&event);
        match split {
            Ok(()) => {
                self.stored = values.date.map(|date| StoredDate {
                    date,
                    time: values.time.clone(),
                    stamp: event.event_date.clone(),
                });
            }
            Err(e) => tracing::warn!(id, error = %e, "stored event date could not be split"),
        }
        self.values = values;
    }

    /// Why [`EventForm::init`] could not load the event, if it could not.
    pub fn take_load_error(&mut self) -> Option<ApiError> {
        self.load_error.take()
    }

    /// The mode of the form.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Current field values.
    #[must_use]
    pub const fn values(&self) -> &EventFormValues {
        &self.values
    }

    /// Mutable field values, for the front end to fill in.
    pub fn values_mut(&mut self) -> &mut EventFormValues {
        &mut self.values
    }

    /// Marks a field as visited, so its errors show.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Whether a field has been visited or a submit was attempted.
    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Errors of touched fields, the ones a front end should show inline.
    #[must_use]
    pub fn visible_errors(&self) -> Vec<(Field, FieldError)> {
        self.values
            .errors()
            .into_iter()
            .filter(|(field, _)| self.is_touched(*field))
            .collect()
    }

    /// Validates and sends the form.
    ///
    /// On success the shell goes to the event list (create) or to the edited
    /// event (edit). On failure an alert is shown and the values are kept.
    pub async fn submit(&mut self, ui: &mut dyn Ui) -> Submission {
        let Some(mut draft) = self.values.to_draft() else {
            self.touched.extend(Field::ALL);
            tracing::debug!(errors = ?self.values.errors(), "form rejected");
            return Submission::Invalid;
        };

        let Some(user_id) = self.session.user_id() else {
            ui.navigate(Route::login());
            return Submission::Unauthenticated;
        };

        // An untouched date keeps the stored seconds.
        if let Some(stored) = &self.stored
            && self.values.date == Some(stored.date)
            && self.values.time == stored.time
        {
            draft.event_date.clone_from(&stored.stamp);
        }

        match self.mode {
            FormMode::Create => match self.backend.create_event(&draft, user_id).await {
                Ok(event) => {
                    tracing::info!(id = ?event.id, "event created");
                    ui.navigate(Route::Events);
                    Submission::Saved(event)
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to create event");
                    ui.alert("Failed to create event. Please try again.");
                    Submission::Failed(e)
                }
            },
            FormMode::Edit(id) => match self.backend.update_event(id, &draft).await {
                Ok(event) => {
                    tracing::info!(id, "event updated");
                    ui.navigate(Route::EventDetail(id));
                    Submission::Saved(event)
                }
                Err(e) => {
                    tracing::error!(id, error = %e, "failed to update event");
                    ui.alert("Failed to update event. Please try again.");
                    Submission::Failed(e)
                }
            },
        }
    }

    /// Leaves without saving.
    pub fn cancel(&self, ui: &mut dyn Ui) {
        match self.mode {
            FormMode::Create => ui.navigate(Route::Events),
            FormMode::Edit(id) => ui.navigate(Route::EventDetail(id)),
        }
    }
}
