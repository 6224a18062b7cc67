// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared "is the device online" signal.
//!
//! Flipped false by any network-layer failure and back to true by any
//! success. UI layers read it to decide whether to show the offline banner;
//! nothing in the core blocks on it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable connectivity signal. All clones share one flag.
#[derive(Clone, Debug)]
pub struct ConnectivitySignal {
    online: Arc<AtomicBool>,
}

impl ConnectivitySignal {
    /// Creates a signal that starts online.
    pub fn new() -> Self {
        ConnectivitySignal {
            online: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Current value of the signal.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }

    /// Sets the signal. Returns true when the value actually changed, so
    /// callers can dispatch a change event exactly once.
    pub fn set_online(&self, online: bool) -> bool {
        self.online.swap(online, Ordering::Relaxed) != online
    }
}

impl Default for ConnectivitySignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_online() {
        assert!(ConnectivitySignal::new().is_online());
    }

    #[test]
    fn test_set_online_reports_change() {
        let signal = ConnectivitySignal::new();
        assert!(signal.set_online(false));
        assert!(!signal.is_online());
        // Same value again is not a change
        assert!(!signal.set_online(false));
        assert!(signal.set_online(true));
    }

    #[test]
    fn test_clones_share_state() {
        let signal = ConnectivitySignal::new();
        let clone = signal.clone();
        signal.set_online(false);
        assert!(!clone.is_online());
    }
}
