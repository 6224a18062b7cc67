// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-app navigation: routes, history, and deep links.
//!
//! The controller is the single source of truth for "what screen is shown"
//! and "how did we get here". It is a plain owned value injected into the
//! app facade — there is no process-wide navigation singleton — and it is
//! never persisted: every process start begins with an empty history.

mod controller;
mod deeplink;
mod route;

pub use controller::{BackOutcome, NavigationController};
pub use deeplink::{resolve, DeepLinkTarget};
pub use route::Route;
