//! The single, session-wide slot holding the latest user-visible error.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Last-write-wins error slot shared by every workflow instance.
///
/// Clones share the same slot, so a message published by one workflow is
/// immediately readable through every other handle. An optional listener is
/// invoked after each change; the root component uses it to re-render the
/// error banner.
#[derive(Clone, Default)]
pub struct ErrorChannel {
    slot: Rc<RefCell<Option<String>>>,
    listener: Option<Rc<dyn Fn()>>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(listener: impl Fn() + 'static) -> Self {
        Self {
            slot: Rc::default(),
            listener: Some(Rc::new(listener)),
        }
    }

    /// Overwrites whatever message is currently held.
    pub fn publish(&self, message: impl Into<String>) {
        *self.slot.borrow_mut() = Some(message.into());
        self.notify();
    }

    pub fn clear(&self) {
        let had_message = self.slot.borrow_mut().take().is_some();
        if had_message {
            self.notify();
        }
    }

    pub fn current(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener();
        }
    }
}

impl PartialEq for ErrorChannel {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for ErrorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorChannel")
            .field("current", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn latest_publish_wins_and_is_visible_through_clones() {
        let channel = ErrorChannel::new();
        let other = channel.clone();

        channel.publish("first");
        other.publish("second");

        assert_eq!(channel.current().as_deref(), Some("second"));
        assert_eq!(other, channel);
    }

    #[test]
    fn listener_fires_on_change_only() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let channel = ErrorChannel::with_listener(move || counter.set(counter.get() + 1));

        channel.clear();
        assert_eq!(calls.get(), 0);

        channel.publish("bad column");
        channel.clear();
        assert_eq!(calls.get(), 2);
        assert_eq!(channel.current(), None);
    }

    #[test]
    fn separate_channels_are_not_equal() {
        assert_ne!(ErrorChannel::new(), ErrorChannel::new());
    }
}
