/// Visibility of the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Inputs that drive the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    FocusIn,
    /// A keystroke in the input; `non_empty` is whether the query now has text.
    Input { non_empty: bool },
    Shortcut,
    Escape,
    OutsideClick,
    Select,
}

impl PanelState {
    pub fn transition(self, event: PanelEvent) -> PanelState {
        match event {
            PanelEvent::FocusIn | PanelEvent::Shortcut | PanelEvent::Input { non_empty: true } => {
                PanelState::Open
            }
            PanelEvent::Escape | PanelEvent::OutsideClick | PanelEvent::Select => {
                PanelState::Closed
            }
            PanelEvent::Input { non_empty: false } => self,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open)
    }
}

/// Query text, panel state and the keyboard-highlighted row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub query: String,
    pub panel: PanelState,
    pub highlighted: usize,
}

impl QueryState {
    fn apply(&mut self, event: PanelEvent) {
        self.panel = self.panel.transition(event);
    }

    pub fn set_query(&mut self, text: String) {
        let non_empty = !text.trim().is_empty();
        self.query = text;
        self.highlighted = 0;
        self.apply(PanelEvent::Input { non_empty });
    }

    pub fn focus(&mut self) {
        self.apply(PanelEvent::FocusIn);
    }

    pub fn shortcut(&mut self) {
        self.apply(PanelEvent::Shortcut);
    }

    pub fn escape(&mut self) {
        self.apply(PanelEvent::Escape);
    }

    pub fn outside_click(&mut self) {
        self.apply(PanelEvent::OutsideClick);
    }

    /// A result was picked: the query is cleared and the panel closes.
    pub fn select(&mut self) {
        self.query.clear();
        self.highlighted = 0;
        self.apply(PanelEvent::Select);
    }

    /// Moves the highlight by `delta` rows over `len` results, wrapping around.
    pub fn move_highlight(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.highlighted = 0;
            return;
        }
        let current = self.highlighted.min(len - 1) as isize;
        self.highlighted = (current + delta).rem_euclid(len as isize) as usize;
    }

    /// The panel is drawn only while open and the query has text.
    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_open() && !self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let state = QueryState::default();
        assert_eq!(state.panel, PanelState::Closed);
        assert!(!state.is_panel_visible());
    }

    #[test]
    fn test_opening_transitions() {
        for event in [
            PanelEvent::FocusIn,
            PanelEvent::Shortcut,
            PanelEvent::Input { non_empty: true },
        ] {
            assert_eq!(PanelState::Closed.transition(event), PanelState::Open);
        }
        assert_eq!(
            PanelState::Closed.transition(PanelEvent::Input { non_empty: false }),
            PanelState::Closed
        );
        assert_eq!(
            PanelState::Open.transition(PanelEvent::Input { non_empty: false }),
            PanelState::Open
        );
    }

    #[test]
    fn test_closing_transitions() {
        for event in [PanelEvent::Escape, PanelEvent::OutsideClick, PanelEvent::Select] {
            assert_eq!(PanelState::Open.transition(event), PanelState::Closed);
            assert_eq!(PanelState::Closed.transition(event), PanelState::Closed);
        }
    }

    #[test]
    fn test_typing_opens_panel() {
        let mut state = QueryState::default();
        state.set_query("   ".to_string());
        assert_eq!(state.panel, PanelState::Closed);
        state.set_query("sar".to_string());
        assert!(state.is_panel_visible());
    }

    #[test]
    fn test_select_clears_query_and_closes() {
        let mut state = QueryState::default();
        state.focus();
        state.set_query("sara".to_string());
        state.move_highlight(1, 3);

        state.select();
        assert_eq!(state, QueryState::default());

        // Selecting while closed still resets the query
        let mut state = QueryState {
            query: "x".to_string(),
            ..Default::default()
        };
        state.select();
        assert!(state.query.is_empty());
        assert_eq!(state.panel, PanelState::Closed);
    }

    #[test]
    fn test_escape_keeps_query() {
        let mut state = QueryState::default();
        state.set_query("reza".to_string());
        state.escape();
        assert_eq!(state.query, "reza");
        assert!(!state.is_panel_visible());
        state.focus();
        assert!(state.is_panel_visible());
    }

    #[test]
    fn test_highlight_wraps() {
        let mut state = QueryState::default();
        state.move_highlight(-1, 3);
        assert_eq!(state.highlighted, 2);
        state.move_highlight(1, 3);
        assert_eq!(state.highlighted, 0);
        state.highlighted = 7;
        state.move_highlight(1, 3);
        assert_eq!(state.highlighted, 0);
        state.move_highlight(1, 0);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_new_query_resets_highlight() {
        let mut state = QueryState::default();
        state.set_query("a".to_string());
        state.move_highlight(2, 5);
        state.set_query("ab".to_string());
        assert_eq!(state.highlighted, 0);
    }
}
