// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use eventhub_core::{
    CategoryFilter, EventDetail, EventHubClient, EventList, RsvpStatus, format_long, format_short,
};

use crate::arg::{CommonArgs, EventArgs};
use crate::cli::Context;
use crate::event_formatter::{EventColumn, EventFormatter, EventRow, rsvp_label};
use crate::terminal::TerminalUi;
use crate::util::{OutputFormat, finish, load_failure};

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub category: CategoryFilter,
    pub search: Option<String>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl Default for CmdEventList {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: None,
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List upcoming events")
            .arg(EventArgs::category_filter())
            .arg(EventArgs::search())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            category: EventArgs::get_category_filter(matches),
            search: EventArgs::get_search(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let mut ui = TerminalUi::new();
        let mut list = EventList::new(&ctx.client, &ctx.session);
        list.load(&mut ui).await;

        match &self.search {
            Some(keyword) => list.search(keyword, &mut ui).await,
            None => list.filter_by_category(self.category),
        }

        if list.events().is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        let rows: Vec<_> = list
            .events()
            .iter()
            .map(|e| {
                let rsvp = e.id.and_then(|id| list.user_rsvp_status(id));
                EventRow::new(e).with_rsvp(rsvp)
            })
            .collect();
        let formatter = EventFormatter::new(EventColumn::list(self.verbose))
            .with_output_format(self.output_format);
        println!("{}", formatter.format(&rows));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventShow {
    pub id: i64,
    pub output_format: OutputFormat,
}

impl CmdEventShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show an event with its participants and comments")
            .arg(EventArgs::id())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing event...");
        let mut ui = TerminalUi::new();
        let detail = load_detail(ctx, self.id, &mut ui).await?;
        match self.output_format {
            OutputFormat::Json => print_detail_json(&detail)?,
            OutputFormat::Table => print_detail(&detail),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventRsvp {
    pub id: i64,
    pub status: RsvpStatus,
}

impl CmdEventRsvp {
    pub const NAME: &str = "rsvp";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Respond to an event")
            .arg(EventArgs::id())
            .arg(
                arg!(status: <STATUS> "Your response: going, interested or not-going")
                    .value_parser(|s: &str| s.parse::<RsvpStatus>()),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            status: matches
                .get_one("status")
                .copied()
                .unwrap_or(RsvpStatus::Going),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "responding to event...");
        let mut ui = TerminalUi::new();
        let mut detail = load_detail(ctx, self.id, &mut ui).await?;
        let action = detail.rsvp(self.status, &mut ui).await;
        finish(action, || {
            println!(
                "{} {} going, {} interested",
                rsvp_label(self.status).bold(),
                detail.going_count(),
                detail.interested_count()
            );
        })
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventComment {
    pub id: i64,
    pub content: String,
}

impl CmdEventComment {
    pub const NAME: &str = "comment";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Comment on an event")
            .arg(EventArgs::id())
            .arg(arg!(content: <TEXT> "The comment"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            content: matches
                .get_one::<String>("content")
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding comment...");
        let mut ui = TerminalUi::new();
        let mut detail = load_detail(ctx, self.id, &mut ui).await?;
        detail.new_comment = self.content;
        let action = detail.add_comment(&mut ui).await;
        finish(action, || {
            if let Some(id) = detail.comments().first().and_then(|c| c.id) {
                println!("Comment {} added", format!("#{id}").bold());
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventUncomment {
    pub event_id: i64,
    pub comment_id: i64,
    pub yes: bool,
}

impl CmdEventUncomment {
    pub const NAME: &str = "uncomment";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Delete a comment")
            .arg(EventArgs::id())
            .arg(
                arg!(comment: <COMMENT_ID> "The id of the comment")
                    .value_parser(value_parser!(i64)),
            )
            .arg(CommonArgs::yes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            event_id: EventArgs::get_id(matches),
            comment_id: matches.get_one("comment").copied().unwrap_or_default(),
            yes: CommonArgs::get_yes(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting comment...");
        let mut ui = TerminalUi::new().assume_yes(self.yes);
        let mut detail = load_detail(ctx, self.event_id, &mut ui).await?;
        if !detail.comments().iter().any(|c| c.id == Some(self.comment_id)) {
            let message = format!(
                "Comment {} not found on event {}",
                self.comment_id, self.event_id
            );
            return Err(message.into());
        }

        let action = detail.delete_comment(self.comment_id, &mut ui).await;
        finish(action, || println!("Comment #{} deleted", self.comment_id))
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: i64,
    pub yes: bool,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event you organize")
            .arg(EventArgs::id())
            .arg(CommonArgs::yes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            yes: CommonArgs::get_yes(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let mut ui = TerminalUi::new().assume_yes(self.yes);
        let mut detail = load_detail(ctx, self.id, &mut ui).await?;
        let action = detail.delete_event(&mut ui).await;
        // the controller already reported success
        finish(action, || {})
    }
}

/// Loads an event, failing when the controller gave up on it.
async fn load_detail<'a>(
    ctx: &'a Context,
    id: i64,
    ui: &mut TerminalUi,
) -> Result<EventDetail<'a, EventHubClient>, Box<dyn Error>> {
    let mut detail = EventDetail::new(&ctx.client, &ctx.session);
    detail.load(id, ui).await;
    let _ = ui.take_route();
    match detail.take_load_error() {
        Some(e) => Err(load_failure(id, e)),
        None => Ok(detail),
    }
}

fn print_detail(detail: &EventDetail<'_, EventHubClient>) {
    let Some(event) = detail.event() else {
        return;
    };

    println!("{}", event.title.bold());
    println!("{}", format_long(&event.event_date));
    println!("{} · {}", event.location, event.category.label());
    if let Some(organizer) = &event.organizer {
        println!("Organized by {}", organizer.username);
    }
    if let Some(max) = event.max_participants {
        println!("Limited to {max} participants");
    }
    println!();
    println!("{}", event.description);
    println!();

    let mut summary = format!(
        "{} going, {} interested",
        detail.going_count(),
        detail.interested_count()
    );
    if let Some(status) = detail.user_rsvp_status() {
        summary.push_str(&format!(" (you: {})", rsvp_label(status)));
    }
    println!("{}", summary.italic());
    for rsvp in detail.participants() {
        println!("  {} {}", rsvp.user.username, rsvp_label(rsvp.status).dimmed());
    }

    if detail.comments().is_empty() {
        return;
    }
    println!();
    println!("{}", "Comments".bold());
    for comment in detail.comments() {
        let id = comment.id.map_or_else(String::new, |id| format!("#{id}"));
        let when = comment
            .created_at
            .as_deref()
            .map(format_short)
            .unwrap_or_default();
        println!(
            "  {} {} {}",
            id.dimmed(),
            comment.user.username.bold(),
            when.dimmed()
        );
        println!("    {}", comment.content);
    }
}

fn print_detail_json(detail: &EventDetail<'_, EventHubClient>) -> Result<(), Box<dyn Error>> {
    let value = serde_json::json!({
        "event": detail.event(),
        "participants": detail.participants(),
        "comments": detail.comments(),
        "goingCount": detail.going_count(),
        "interestedCount": detail.interested_count(),
        "userRsvpStatus": detail.user_rsvp_status(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
