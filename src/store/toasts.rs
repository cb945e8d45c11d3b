//! Single-slot toast notifications.
//!
//! The app shows at most one toast at a time; posting a new one replaces
//! whatever was on screen. Auto-expiry is the renderer's job (see
//! `ToastHost`), which is why each message carries an epoch: a timer armed
//! for toast N must stand down when toast N+1 has already replaced it.

use leptos::{create_rw_signal, RwSignal, SignalGet, SignalSet, SignalWithUntracked};

#[derive(Clone, Copy)]
pub struct ToastsSlice {
    message: RwSignal<Option<String>>,
    epoch: RwSignal<u64>,
}

impl ToastsSlice {
    pub fn new() -> Self {
        Self {
            message: create_rw_signal(None),
            epoch: create_rw_signal(0),
        }
    }

    /// Show `message`, replacing any toast currently on screen.
    pub fn set_toast(&self, message: &str) {
        self.epoch.set(self.epoch.with_untracked(|e| *e) + 1);
        self.message.set(Some(message.to_owned()));
    }

    /// Dismiss the current toast unconditionally.
    pub fn clear_toast(&self) {
        if self.message.with_untracked(|m| m.is_none()) {
            return;
        }
        self.message.set(None);
    }

    /// Dismiss the toast only if it is still the one posted at `epoch`.
    ///
    /// Expiry timers call this so a timer left over from an already
    /// replaced toast cannot cut the newer one short.
    pub fn clear_toast_if(&self, epoch: u64) {
        if self.epoch.with_untracked(|e| *e) != epoch {
            return;
        }
        self.clear_toast();
    }

    /// The toast currently on screen, reactively.
    pub fn current(&self) -> Option<String> {
        self.message.get()
    }

    /// Epoch of the current toast, for arming an expiry timer.
    pub fn epoch(&self) -> u64 {
        self.epoch.with_untracked(|e| *e)
    }
}

impl Default for ToastsSlice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn last_write_wins() {
        let runtime = create_runtime();
        let toasts = ToastsSlice::new();

        assert_eq!(toasts.current(), None);
        toasts.set_toast("Saved!");
        toasts.set_toast("Deleted!");
        assert_eq!(toasts.current(), Some("Deleted!".to_string()));

        runtime.dispose();
    }

    #[test]
    fn clear_dismisses_the_current_toast() {
        let runtime = create_runtime();
        let toasts = ToastsSlice::new();

        toasts.set_toast("Saved!");
        toasts.clear_toast();
        assert_eq!(toasts.current(), None);
        // Clearing an empty slot is harmless
        toasts.clear_toast();
        assert_eq!(toasts.current(), None);

        runtime.dispose();
    }

    #[test]
    fn stale_epoch_cannot_dismiss_a_newer_toast() {
        let runtime = create_runtime();
        let toasts = ToastsSlice::new();

        toasts.set_toast("first");
        let stale = toasts.epoch();
        toasts.set_toast("second");

        // The timer armed for "first" fires after "second" replaced it
        toasts.clear_toast_if(stale);
        assert_eq!(toasts.current(), Some("second".to_string()));

        // The timer for "second" still works
        toasts.clear_toast_if(toasts.epoch());
        assert_eq!(toasts.current(), None);

        runtime.dispose();
    }
}
