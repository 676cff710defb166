//! Single-slot Mailbox
//!
//! A rendezvous point holding at most one value. Putting a new value displaces
//! the old one (most recent wins); nothing is ever queued.

/// Single-slot, most-recent-wins mailbox
#[derive(Clone, Debug, PartialEq)]
pub struct Mailbox<T> {
    slot: Option<T>,
}

impl<T> Mailbox<T> {
    /// Create an empty mailbox
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Store a value, returning the one it displaced
    pub fn put(&mut self, value: T) -> Option<T> {
        self.slot.replace(value)
    }

    /// Remove and return the current value
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Look at the current value without removing it
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Whether the slot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Drop whatever is in the slot
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_displaces_previous() {
        let mut mailbox = Mailbox::new();
        assert_eq!(mailbox.put("design"), None);
        assert_eq!(mailbox.put("film"), Some("design"));
        assert_eq!(mailbox.peek(), Some(&"film"));
    }

    #[test]
    fn test_take_empties_slot() {
        let mut mailbox = Mailbox::new();
        mailbox.put(1);
        assert_eq!(mailbox.take(), Some(1));
        assert!(mailbox.is_empty());
        assert_eq!(mailbox.take(), None);
    }
}
