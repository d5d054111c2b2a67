/// Cursor into the item list. Selection lives in the UI layer only; the
/// domain list knows nothing about it.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        self.selected = Some(self.selected.map_or(0, |idx| idx.saturating_sub(1)));
    }

    /// Keep the cursor valid after the list shrank.
    pub fn clamp_to(&mut self, len: usize) {
        match self.selected {
            Some(_) if len == 0 => self.selected = None,
            Some(idx) if idx >= len => self.selected = Some(len - 1),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_stops_at_last_item() {
        let mut selection = SelectionState::new();
        selection.next(2);
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn next_on_empty_list_selects_nothing() {
        let mut selection = SelectionState::new();
        selection.next(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn clamp_to_pulls_cursor_back_after_removal() {
        let mut selection = SelectionState::new();
        selection.set(Some(2));
        selection.clamp_to(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn clamp_to_clears_on_empty_list() {
        let mut selection = SelectionState::new();
        selection.set(Some(0));
        selection.clamp_to(0);
        assert_eq!(selection.get(), None);
    }
}
