//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the update logic (and its tests) never depend on crossterm.

/// A key press as seen by the key handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, symbols)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    Backspace,
}

impl InputKey {
    /// Whether this key should abort the application in any mode
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}
