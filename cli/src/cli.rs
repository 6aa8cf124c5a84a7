// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use eventhub_core::{APP_NAME, EventHubClient, Session};
use futures::{FutureExt, future::LocalBoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{
    CmdEventComment, CmdEventDelete, CmdEventList, CmdEventRsvp, CmdEventShow, CmdEventUncomment,
};
use crate::cmd_form::{CmdEventEdit, CmdEventNew};
use crate::cmd_open::CmdOpen;
use crate::cmd_profile::CmdProfile;
use crate::config::parse_config;

/// Run the `EventHub` command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse, create and RSVP to community events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/eventhub/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/eventhub/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventShow::command())
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventRsvp::command())
            .subcommand(CmdEventComment::command())
            .subcommand(CmdEventUncomment::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdProfile::command())
            .subcommand(CmdOpen::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdEventList::NAME, matches)) => List(CmdEventList::from(matches)),
            Some((CmdEventShow::NAME, matches)) => Show(CmdEventShow::from(matches)),
            Some((CmdEventNew::NAME, matches)) => New(CmdEventNew::from(matches)),
            Some((CmdEventEdit::NAME, matches)) => Edit(CmdEventEdit::from(matches)),
            Some((CmdEventRsvp::NAME, matches)) => Rsvp(CmdEventRsvp::from(matches)),
            Some((CmdEventComment::NAME, matches)) => Comment(CmdEventComment::from(matches)),
            Some((CmdEventUncomment::NAME, matches)) => {
                Uncomment(CmdEventUncomment::from(matches))
            }
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            Some((CmdProfile::NAME, matches)) => Profile(CmdProfile::from(matches)),
            Some((CmdOpen::NAME, matches)) => Open(CmdOpen::from(matches)),
            None => List(CmdEventList::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List upcoming events
    List(CmdEventList),

    /// Show an event with its participants and comments
    Show(CmdEventShow),

    /// Create an event
    New(CmdEventNew),

    /// Edit an event
    Edit(CmdEventEdit),

    /// Respond to an event
    Rsvp(CmdEventRsvp),

    /// Comment on an event
    Comment(CmdEventComment),

    /// Delete a comment
    Uncomment(CmdEventUncomment),

    /// Delete an event
    Delete(CmdEventDelete),

    /// Show or update the signed-in account
    Profile(CmdProfile),

    /// Open a client path through the navigation gate
    Open(CmdOpen),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            List(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Show(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            New(a)       => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Edit(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Rsvp(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Comment(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Uncomment(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Delete(a)    => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Profile(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Open(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Context) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let ctx = Context {
            session: config.session(),
            client: EventHubClient::new(config.api)?,
        };

        f(&ctx).await
    }
}

/// What every command runs against: the backend and who is signed in.
#[derive(Debug, Clone)]
pub struct Context {
    pub client: EventHubClient,
    pub session: Session,
}
