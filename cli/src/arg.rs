// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use eventhub_core::{CategoryFilter, EventCategory, EventFormValues, parse_date};
use jiff::civil::Date;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn yes() -> Arg {
        arg!(-y --yes "Do not ask for confirmation")
    }

    pub fn get_yes(matches: &ArgMatches) -> bool {
        matches.get_flag("yes")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event").value_parser(value_parser!(i64))
    }

    pub fn get_id(matches: &ArgMatches) -> i64 {
        matches.get_one("id").copied().unwrap_or_default()
    }

    pub fn category_filter() -> Arg {
        arg!(--category <CATEGORY> "Only show events of this category, or ALL")
            .value_parser(|s: &str| s.parse::<CategoryFilter>())
    }

    pub fn get_category_filter(matches: &ArgMatches) -> CategoryFilter {
        matches
            .get_one("category")
            .copied()
            .unwrap_or(CategoryFilter::All)
    }

    pub fn search() -> Arg {
        arg!(--search <KEYWORD> "Search events by keyword").conflicts_with("category")
    }

    pub fn get_search(matches: &ArgMatches) -> Option<String> {
        matches.get_one("search").cloned()
    }
}

/// Flags filling in the fields of the event form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<Date>,
    pub time: Option<String>,
    pub category: Option<EventCategory>,
    pub max_participants: Option<u32>,
}

impl FormArgs {
    pub fn args() -> [Arg; 7] {
        [
            arg!(title: -t --title <TITLE> "Title of the event"),
            arg!(--description <DESCRIPTION> "Description of the event"),
            arg!(--location <LOCATION> "Where the event takes place"),
            arg!(--date <DATE> "Date of the event, YYYY-MM-DD").value_parser(parse_date),
            arg!(--time <TIME> "Start time of the event, HH:MM"),
            arg!(--category <CATEGORY> "Category of the event")
                .value_parser(|s: &str| s.parse::<EventCategory>()),
            arg!(--"max-participants" <N> "Participant limit")
                .value_parser(value_parser!(u32).range(1..)),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: matches.get_one("title").cloned(),
            description: matches.get_one("description").cloned(),
            location: matches.get_one("location").cloned(),
            date: matches.get_one("date").copied(),
            time: matches.get_one("time").cloned(),
            category: matches.get_one("category").copied(),
            max_participants: matches.get_one("max-participants").copied(),
        }
    }

    /// Whether no field was given on the command line.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrites the fields that were given.
    pub fn apply(self, values: &mut EventFormValues) {
        if let Some(title) = self.title {
            values.title = title;
        }
        if let Some(description) = self.description {
            values.description = description;
        }
        if let Some(location) = self.location {
            values.location = location;
        }
        if let Some(date) = self.date {
            values.date = Some(date);
        }
        if let Some(time) = self.time {
            values.time = time;
        }
        if let Some(category) = self.category {
            values.category = Some(category);
        }
        if let Some(max) = self.max_participants {
            values.max_participants = Some(max);
        }
    }
}
