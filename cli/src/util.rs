// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Colorize;
use eventhub_core::{Action, ApiError};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

pub const SIGN_IN_REQUIRED: &str =
    "Sign-in required: add a [session] section to the configuration file";

/// Turns the outcome of a controller action into the command result.
pub fn finish(action: Action, done: impl FnOnce()) -> Result<(), Box<dyn Error>> {
    match action {
        Action::Done => {
            done();
            Ok(())
        }
        Action::Skipped => {
            println!("{}", "Nothing changed".italic());
            Ok(())
        }
        Action::Unauthenticated => Err(SIGN_IN_REQUIRED.into()),
        Action::Denied => Err("You are not allowed to do that".into()),
        Action::Failed(e) => Err(e.into()),
    }
}

/// Error for an event that could not be loaded.
pub fn load_failure(id: i64, err: ApiError) -> Box<dyn Error> {
    match err {
        ApiError::NotFound(_) => format!("Event {id} not found").into(),
        e => format!("Failed to load event {id}: {e}").into(),
    }
}
