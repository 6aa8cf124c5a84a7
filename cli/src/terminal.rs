// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use eventhub_core::{Route, Ui};

/// The terminal as the shell around the controllers.
///
/// Alerts go to stderr, confirmations are asked with a prompt, and the last
/// navigation is kept for the command to act on.
#[derive(Debug, Default)]
pub struct TerminalUi {
    assume_yes: bool,
    route: Option<Route>,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every confirmation with yes, without asking.
    pub const fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// The route a controller navigated to since the last call.
    pub fn take_route(&mut self) -> Option<Route> {
        self.route.take()
    }
}

impl Ui for TerminalUi {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(%route, "navigating");
        self.route = Some(route);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{} {}", "Notice:".yellow(), message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        match cliclack::confirm(message).initial_value(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}
