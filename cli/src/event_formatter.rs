// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use eventhub_core::{Event, RsvpStatus, format_short};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::OutputFormat;

/// An event together with the viewer's response to it.
#[derive(Debug, Clone, Copy)]
pub struct EventRow<'a> {
    pub event: &'a Event,
    pub rsvp: Option<RsvpStatus>,
}

impl<'a> EventRow<'a> {
    pub const fn new(event: &'a Event) -> Self {
        Self { event, rsvp: None }
    }

    pub const fn with_rsvp(mut self, rsvp: Option<RsvpStatus>) -> Self {
        self.rsvp = rsvp;
        self
    }
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub const fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [EventRow<'a>]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [EventRow<'a>],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.formatter.columns.as_slice();
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.rows)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Date,
    Category,
    Title,
    Location,
    Organizer,
    Rsvp,
}

impl EventColumn {
    /// Columns of an event listing.
    pub fn list(verbose: bool) -> Vec<Self> {
        if verbose {
            vec![
                Self::Id,
                Self::Date,
                Self::Category,
                Self::Rsvp,
                Self::Location,
                Self::Organizer,
                Self::Title,
            ]
        } else {
            vec![Self::Id, Self::Date, Self::Category, Self::Rsvp, Self::Title]
        }
    }
}

impl<'r> TableColumn<EventRow<'r>> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "id",
            Self::Date => "date",
            Self::Category => "category",
            Self::Title => "title",
            Self::Location => "location",
            Self::Organizer => "organizer",
            Self::Rsvp => "rsvp",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a EventRow<'r>) -> Cow<'a, str> {
        let event = row.event;
        match self {
            Self::Id => event
                .id
                .map_or_else(|| "-".to_string(), |id| format!("#{id}"))
                .into(),
            Self::Date => format_short(&event.event_date).into(),
            Self::Category => event.category.label().into(),
            Self::Title => event.title.as_str().into(),
            Self::Location => event.location.as_str().into(),
            Self::Organizer => event
                .organizer
                .as_ref()
                .map_or("", |u| u.username.as_str())
                .into(),
            Self::Rsvp => row.rsvp.map_or("", rsvp_label).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &EventRow<'r>) -> Option<Color> {
        match (self, row.rsvp) {
            (Self::Rsvp, Some(RsvpStatus::Going)) => Some(Color::Green),
            (Self::Rsvp, Some(RsvpStatus::Interested)) => Some(Color::Yellow),
            _ => None,
        }
    }
}

pub const fn rsvp_label(status: RsvpStatus) -> &'static str {
    match status {
        RsvpStatus::Going => "Going",
        RsvpStatus::Interested => "Interested",
        RsvpStatus::NotGoing => "Not going",
    }
}
