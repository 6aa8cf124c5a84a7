// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use eventhub_core::{EventHubClient, Profile, Route, UserPatch};

use crate::arg::CommonArgs;
use crate::cli::Context;
use crate::event_formatter::{EventColumn, EventFormatter, EventRow};
use crate::prompt::prompt_password;
use crate::terminal::TerminalUi;
use crate::util::{OutputFormat, SIGN_IN_REQUIRED};

#[derive(Debug, Clone)]
pub struct CmdProfile {
    pub username: Option<String>,
    pub email: Option<String>,
    pub change_password: bool,

    pub output_format: OutputFormat,
}

impl Default for CmdProfile {
    fn default() -> Self {
        Self {
            username: None,
            email: None,
            change_password: false,
            output_format: OutputFormat::Table,
        }
    }
}

impl CmdProfile {
    pub const NAME: &str = "profile";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("me")
            .about("Show the signed-in account, its events and responses")
            .arg(arg!(--username <USERNAME> "Change the username"))
            .arg(arg!(--email <EMAIL> "Change the email address"))
            .arg(arg!(--"change-password" "Change the password interactively"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            username: matches.get_one("username").cloned(),
            email: matches.get_one("email").cloned(),
            change_password: matches.get_flag("change-password"),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing profile...");
        let mut ui = TerminalUi::new();
        let mut profile = Profile::new(&ctx.client, &ctx.session);
        profile.load(&mut ui).await;
        if let Some(Route::Login { .. }) = ui.take_route() {
            return Err(SIGN_IN_REQUIRED.into());
        }

        if self.username.is_some() || self.email.is_some() {
            let patch = UserPatch {
                username: self.username,
                email: self.email,
            };
            profile.update_profile(&patch, &mut ui).await?;
        }

        if self.change_password {
            let (old, new) = prompt_password()?;
            profile.change_password(&old, &new, &mut ui).await?;
        }

        match self.output_format {
            OutputFormat::Json => print_profile_json(&profile)?,
            OutputFormat::Table => print_profile(&profile),
        }
        Ok(())
    }
}

fn print_profile(profile: &Profile<'_, EventHubClient>) {
    if let Some(user) = profile.user() {
        println!(
            "{} <{}> {}",
            user.username.bold(),
            user.email,
            user.role.as_str().dimmed()
        );
    }

    println!();
    println!("{}", "Organizing".bold());
    if profile.created_events().is_empty() {
        println!("{}", "No events yet".italic());
    } else {
        let rows: Vec<_> = profile.created_events().iter().map(EventRow::new).collect();
        let formatter = EventFormatter::new(vec![
            EventColumn::Id,
            EventColumn::Date,
            EventColumn::Category,
            EventColumn::Title,
        ]);
        println!("{}", formatter.format(&rows));
    }

    println!();
    println!("{}", "Attending".bold());
    let rows: Vec<_> = profile
        .rsvps()
        .iter()
        .filter_map(|r| Some(EventRow::new(r.event.as_ref()?).with_rsvp(Some(r.status))))
        .collect();
    if rows.is_empty() {
        println!("{}", "No responses yet".italic());
    } else {
        let formatter = EventFormatter::new(vec![
            EventColumn::Id,
            EventColumn::Date,
            EventColumn::Rsvp,
            EventColumn::Title,
        ]);
        println!("{}", formatter.format(&rows));
    }
}

fn print_profile_json(profile: &Profile<'_, EventHubClient>) -> Result<(), Box<dyn Error>> {
    let value = serde_json::json!({
        "user": profile.user(),
        "createdEvents": profile.created_events(),
        "rsvps": profile.rsvps(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
