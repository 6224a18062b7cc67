// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Events the facade pushes to the platform shell.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::content::ContentDomain;
use crate::navigation::Route;

/// Something the UI layer may want to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The current route changed (navigate, back, or forward).
    RouteChanged {
        /// The route now showing.
        route: Route,
    },
    /// A refresh replaced the live document for a domain.
    RefreshApplied {
        /// Domain whose document changed.
        domain: ContentDomain,
    },
    /// A refresh attempt for a domain failed; the old document stays live.
    RefreshFailed {
        /// Domain that failed.
        domain: ContentDomain,
        /// Human-readable cause.
        error: String,
    },
    /// A domain was already up to date and not re-fetched.
    RefreshSkipped {
        /// Domain that was skipped.
        domain: ContentDomain,
    },
    /// The online/offline assumption flipped.
    ConnectivityChanged {
        /// New assumption.
        online: bool,
    },
}

/// Receives [`AppEvent`]s. Implementations must be cheap; dispatch happens
/// inline on the calling thread.
pub trait EventHandler: Send + Sync {
    fn handle_event(&self, event: &AppEvent);
}

/// Wraps a closure as an [`EventHandler`].
pub struct CallbackHandler<F>
where
    F: Fn(&AppEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(&AppEvent) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(&AppEvent) + Send + Sync,
{
    fn handle_event(&self, event: &AppEvent) {
        (self.callback)(event);
    }
}

/// Fan-out of events to registered handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler. Handlers cannot be removed; they live as long
    /// as the dispatcher.
    pub fn add_handler(&self, handler: Arc<dyn EventHandler>) {
        self.handlers.write().push(handler);
    }

    /// Delivers an event to every handler, in registration order.
    pub fn dispatch(&self, event: &AppEvent) {
        for handler in self.handlers.read().iter() {
            handler.handle_event(event);
        }
    }
}
