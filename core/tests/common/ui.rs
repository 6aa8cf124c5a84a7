// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventhub_core::{Route, Ui};

/// A UI shell that remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub navigations: Vec<Route>,
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
    answer: bool,
}

impl RecordingUi {
    /// A shell whose user accepts every confirmation.
    #[must_use]
    pub fn confirming() -> Self {
        Self {
            answer: true,
            ..Default::default()
        }
    }

    /// A shell whose user declines every confirmation.
    #[must_use]
    pub fn declining() -> Self {
        Self::default()
    }
}

impl Ui for RecordingUi {
    fn navigate(&mut self, route: Route) {
        self.navigations.push(route);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }
}
