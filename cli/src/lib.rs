// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal front end of `EventHub`: argument parsing, configuration and output.

mod arg;
mod cli;
mod cmd_event;
mod cmd_form;
mod cmd_open;
mod cmd_profile;
mod config;
mod event_formatter;
mod prompt;
mod table;
mod terminal;
mod util;

pub use crate::cli::{Cli, Commands, Context, run};
pub use crate::config::{Config, parse_config};
