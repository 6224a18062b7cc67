// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Navigation history controller.
//!
//! State is `(history, cursor, current, default_route)` with the invariant
//! `0 <= cursor <= history.len()`. Every operation is a total function over
//! that state; there is nothing to retry or report. The only caller-visible
//! edge is the default-route fallback when history is exhausted, which is
//! designed behavior, not an error.

use super::route::Route;

/// Result of a back gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Moved to an earlier history entry.
    Moved(Route),
    /// History is exhausted; resolved to the default route. Whether this
    /// should exit the app is the caller's policy, not the controller's.
    AtRoot(Route),
}

impl BackOutcome {
    /// The route now current, whichever way the gesture resolved.
    pub fn route(&self) -> Route {
        match self {
            BackOutcome::Moved(route) | BackOutcome::AtRoot(route) => *route,
        }
    }
}

/// Ordered history of visited routes plus the cursor into it.
#[derive(Debug, Clone)]
pub struct NavigationController {
    history: Vec<Route>,
    cursor: usize,
    current: Route,
    default_route: Route,
    entry_point: Option<Route>,
}

impl NavigationController {
    /// Empty history, showing the default route.
    pub fn new(default_route: Route) -> Self {
        NavigationController {
            history: Vec::new(),
            cursor: 0,
            current: default_route,
            default_route,
            entry_point: None,
        }
    }

    /// Cold-start constructor for deep-link launches: starts with `initial`
    /// on top of an otherwise empty history, so one back gesture lands on
    /// the default route.
    pub fn with_initial(initial: Route, default_route: Route) -> Self {
        let mut controller = Self::new(default_route);
        if initial != default_route {
            controller.navigate(initial);
        }
        controller
    }

    /// The route currently shown.
    pub fn current(&self) -> Route {
        self.current
    }

    /// The configured bottom-of-stack route.
    pub fn default_route(&self) -> Route {
        self.default_route
    }

    /// Number of history entries (including entries ahead of the cursor).
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Whether a forward entry exists to re-enter.
    pub fn can_go_forward(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Records and applies a route change.
    ///
    /// Any forward history beyond the cursor is discarded first (branch on
    /// navigate): entries popped away from become unreachable.
    pub fn navigate(&mut self, route: Route) {
        self.history.truncate(self.cursor);
        self.history.push(route);
        self.cursor = self.history.len();
        self.current = route;
    }

    /// Like [`navigate`](Self::navigate), additionally marking `route` as
    /// the entry point for the next cold start (deep-link launches). The
    /// caller persists the mark; the controller itself is never persisted.
    pub fn navigate_as_entry_point(&mut self, route: Route) {
        self.entry_point = Some(route);
        self.navigate(route);
    }

    /// Takes the pending cold-start mark, if any.
    pub fn take_entry_point(&mut self) -> Option<Route> {
        self.entry_point.take()
    }

    /// Moves one entry back. At the bottom of the stack the current route
    /// resolves to the default route instead of underflowing.
    pub fn pop_back(&mut self) -> BackOutcome {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        if self.cursor == 0 {
            self.current = self.default_route;
            BackOutcome::AtRoot(self.current)
        } else {
            self.current = self.history[self.cursor - 1];
            BackOutcome::Moved(self.current)
        }
    }

    /// Re-enters the entry previously backed away from. No-op when the
    /// cursor is already at the top of history.
    pub fn pop_forward(&mut self) -> Option<Route> {
        if self.cursor < self.history.len() {
            self.cursor += 1;
            self.current = self.history[self.cursor - 1];
            Some(self.current)
        } else {
            None
        }
    }
}
