use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Quiescence window for search inputs.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Generation-counted debounce: every keystroke invalidates the token handed
/// to the previous timer, so only a timer that outlives a full quiet window
/// propagates its value.
#[derive(Debug, Default)]
pub struct DebounceCore {
    seq: u64,
    pending: Option<String>,
}

impl DebounceCore {
    /// Records a new input value; the returned token must be presented by the
    /// timer that eventually fires for it.
    pub fn submit(&mut self, value: String) -> u64 {
        self.seq += 1;
        self.pending = Some(value);
        self.seq
    }

    /// Settles the window for `token`. Yields the value only when no newer
    /// keystroke has restarted the window since.
    pub fn settle(&mut self, token: u64) -> Option<String> {
        if token == self.seq {
            self.pending.take()
        } else {
            None
        }
    }
}

#[hook]
pub fn use_debounced_value(value: String, window_ms: u32) -> String {
    let settled = use_state_eq(|| value.clone());
    let core: Rc<RefCell<DebounceCore>> = use_mut_ref(DebounceCore::default);
    {
        let settled = settled.clone();
        use_effect_with_deps(
            move |value: &String| {
                let token = core.borrow_mut().submit(value.clone());
                let timer = Timeout::new(window_ms, move || {
                    if let Some(value) = core.borrow_mut().settle(token) {
                        settled.set(value);
                    }
                });
                // Dropping the timer on the next keystroke restarts the window.
                move || drop(timer)
            },
            value,
        );
    }
    (*settled).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_quiet_window_propagates_the_value() {
        let mut core = DebounceCore::default();
        let token = core.submit("john".to_string());
        assert_eq!(core.settle(token), Some("john".to_string()));
    }

    #[test]
    fn a_keystroke_inside_the_window_restarts_it() {
        // Typing "jo", pausing less than the window, then typing "hn": the
        // first timer's token is stale by the time it fires, so exactly one
        // value ("john") comes out.
        let mut core = DebounceCore::default();
        let first = core.submit("jo".to_string());
        let second = core.submit("john".to_string());
        assert_eq!(core.settle(first), None);
        assert_eq!(core.settle(second), Some("john".to_string()));
    }

    #[test]
    fn a_settled_window_does_not_fire_twice() {
        let mut core = DebounceCore::default();
        let token = core.submit("jo".to_string());
        assert!(core.settle(token).is_some());
        assert_eq!(core.settle(token), None);
    }

    #[test]
    fn stale_tokens_never_resurface_old_values() {
        let mut core = DebounceCore::default();
        let old = core.submit("first".to_string());
        let new = core.submit("second".to_string());
        assert_eq!(core.settle(new), Some("second".to_string()));
        assert_eq!(core.settle(old), None);
    }
}
