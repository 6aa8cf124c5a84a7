// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::route::Route;

/// The presentation shell a controller drives.
///
/// Controllers never render. They ask the shell to move elsewhere, to show a
/// blocking notice, or to confirm a destructive action.
pub trait Ui {
    /// Leaves the current view for `route`.
    fn navigate(&mut self, route: Route);

    /// Shows a blocking notice.
    fn alert(&mut self, message: &str);

    /// Asks a yes/no question; `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;
}
