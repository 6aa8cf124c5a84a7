// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflow tests for the eventhub-core controllers.
//!
//! Each controller is driven against an in-memory backend while a recording
//! shell captures navigations, alerts and confirmations.

mod event_detail;
mod event_form;
mod event_list;
mod navigation;
mod profile;
