// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use eventhub_core::{Route, navigate};

use crate::arg::{CommonArgs, FormArgs};
use crate::cli::Context;
use crate::cmd_event::{CmdEventList, CmdEventShow};
use crate::cmd_form::{CmdEventEdit, CmdEventNew};
use crate::cmd_profile::CmdProfile;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdOpen {
    pub path: String,
    pub output_format: OutputFormat,
}

impl CmdOpen {
    pub const NAME: &str = "open";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open a client path such as /event/5 or /create-event")
            .arg(arg!(path: <PATH> "The path to open"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: matches
                .get_one::<String>("path")
                .cloned()
                .unwrap_or_default(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening path...");
        let route = navigate(&ctx.session, &self.path);
        if route.path() != self.path {
            println!("{}", format!("→ {route}").italic());
        }

        let output_format = self.output_format;
        match route {
            Route::Events => {
                let cmd = CmdEventList {
                    output_format,
                    ..Default::default()
                };
                cmd.run(ctx).await
            }
            Route::EventDetail(id) => CmdEventShow { id, output_format }.run(ctx).await,
            Route::CreateEvent => {
                let cmd = CmdEventNew {
                    fields: FormArgs::default(),
                    interactive: true,
                    output_format,
                };
                cmd.run(ctx).await
            }
            Route::EditEvent(id) => {
                let cmd = CmdEventEdit {
                    id,
                    fields: FormArgs::default(),
                    interactive: true,
                    output_format,
                };
                cmd.run(ctx).await
            }
            Route::Profile => {
                let cmd = CmdProfile {
                    output_format,
                    ..Default::default()
                };
                cmd.run(ctx).await
            }
            Route::Login { return_url } => Err(format!(
                "Sign in to open {}: add a [session] section to the configuration file",
                return_url.as_deref().unwrap_or("/events")
            )
            .into()),
            Route::Register => Err("Registration is not available from the terminal".into()),
        }
    }
}
