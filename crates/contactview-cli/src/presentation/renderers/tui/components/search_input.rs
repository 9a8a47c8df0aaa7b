use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Changed,
    Leave,
}

/// Search field contents. The query itself is applied later, after debounce.
#[derive(Debug, Default)]
pub struct SearchInput {
    value: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SearchAction> {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.value.push(c);
                Some(SearchAction::Changed)
            }
            KeyCode::Backspace => self.value.pop().map(|_| SearchAction::Changed),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(SearchAction::Leave),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = SearchInput::new();
        assert_eq!(
            input.handle_input(key(KeyCode::Char('J'))),
            Some(SearchAction::Changed)
        );
        input.handle_input(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::SHIFT));
        assert_eq!(input.value(), "Jo");

        assert_eq!(
            input.handle_input(key(KeyCode::Backspace)),
            Some(SearchAction::Changed)
        );
        assert_eq!(input.value(), "J");
    }

    #[test]
    fn test_backspace_on_empty_is_not_a_change() {
        let mut input = SearchInput::new();
        assert_eq!(input.handle_input(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_control_chords_are_not_text() {
        let mut input = SearchInput::new();
        let chord = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_input(chord), None);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_escape_leaves_field() {
        let mut input = SearchInput::new();
        assert_eq!(
            input.handle_input(key(KeyCode::Esc)),
            Some(SearchAction::Leave)
        );
    }
}
