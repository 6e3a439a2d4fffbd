//! Modal dialog lifecycle.
//!
//! The page scroll lock is held exactly while a modal is open and released
//! on every close path, explicit or not.

/// How a modal was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Default)]
pub struct Modal {
    title: Option<String>,
    scroll_locked: bool,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal and locks page scroll. Re-opening replaces the title.
    pub fn open(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
        self.scroll_locked = true;
    }

    pub fn close(&mut self, _reason: CloseReason) {
        self.title = None;
        self.scroll_locked = false;
    }

    /// Routes a key press; returns `true` when it closed the modal.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.is_open() && key == Key::Escape {
            self.close(CloseReason::Escape);
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.title.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}
