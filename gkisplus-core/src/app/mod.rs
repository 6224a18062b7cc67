// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Top-level application facade.
//!
//! [`GkiPlus`] wires navigation, content, preferences, and connectivity into
//! a single handle the platform shell (or the mobile bindings) talks to.

mod config;
mod events;
mod facade;

pub use config::GkiPlusConfig;
pub use events::{AppEvent, CallbackHandler, EventDispatcher, EventHandler};
pub use facade::{GkiPlus, GkiPlusError};
