//! Keyboard input as seen by the session.

/// One logical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    /// Pasted text; line breaks are removed on insertion.
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Enter,
    Tab,
    /// Control chord, lower-case letter (`Ctrl('c')`).
    Ctrl(char),
}

impl InputEvent {
    /// Events for typing `text` and pressing Enter.
    pub fn line(text: &str) -> Vec<InputEvent> {
        text.chars()
            .map(InputEvent::Char)
            .chain(std::iter::once(InputEvent::Enter))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_events() {
        assert_eq!(
            InputEvent::line("ls"),
            vec![InputEvent::Char('l'), InputEvent::Char('s'), InputEvent::Enter]
        );
        assert_eq!(InputEvent::line(""), vec![InputEvent::Enter]);
    }
}
