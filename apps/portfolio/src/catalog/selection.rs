/// Where a click inside an open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The explicit close button.
    CloseControl,
    /// The dimmed area around the content panel.
    Backdrop,
    /// Anything inside the content panel. Never closes the modal.
    Panel,
}

impl ClickTarget {
    /// Query-string value carried by dismiss links.
    pub fn param(self) -> &'static str {
        match self {
            ClickTarget::CloseControl => "close",
            ClickTarget::Backdrop => "backdrop",
            ClickTarget::Panel => "panel",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "close" => Some(ClickTarget::CloseControl),
            "backdrop" => Some(ClickTarget::Backdrop),
            "panel" => Some(ClickTarget::Panel),
            _ => None,
        }
    }
}

/// At most one inspected entry per page. `None` is the closed state.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    current: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `entry`, replacing whatever was open. There is no stack.
    pub fn open_with(&mut self, entry: T) {
        self.current = Some(entry);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::CloseControl | ClickTarget::Backdrop => self.close(),
            ClickTarget::Panel => {}
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(current: Option<T>) -> Self {
        Self { current }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_target_params() {
        for target in [
            ClickTarget::CloseControl,
            ClickTarget::Backdrop,
            ClickTarget::Panel,
        ] {
            assert_eq!(ClickTarget::from_param(target.param()), Some(target));
        }
        assert_eq!(ClickTarget::from_param("elsewhere"), None);
    }

    #[test]
    fn test_starts_closed() {
        let s: Selection<u32> = Selection::new();
        assert!(!s.is_open());
        assert_eq!(s.current(), None);
    }

    #[test]
    fn test_open_replaces_previous_entry() {
        let mut s = Selection::new();
        s.open_with("P1");
        s.open_with("P2");
        assert_eq!(s.current(), Some(&"P2"));
        s.close();
        assert!(!s.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut s: Selection<u32> = Selection::new();
        s.close();
        s.close();
        assert!(!s.is_open());
    }

    #[test]
    fn test_panel_click_keeps_modal_open() {
        let mut s = Selection::new();
        s.open_with(7);
        s.handle_click(ClickTarget::Panel);
        assert_eq!(s.current(), Some(&7));
        s.handle_click(ClickTarget::Backdrop);
        assert!(!s.is_open());

        s.open_with(8);
        s.handle_click(ClickTarget::CloseControl);
        assert!(!s.is_open());
    }

    #[test]
    fn test_at_most_one_open_across_any_sequence() {
        #[derive(Clone, Copy)]
        enum Op {
            Open(u32),
            Close,
            Click(ClickTarget),
        }
        let ops = [
            Op::Open(1),
            Op::Open(2),
            Op::Click(ClickTarget::Panel),
            Op::Close,
            Op::Close,
            Op::Open(3),
            Op::Click(ClickTarget::Backdrop),
            Op::Open(4),
            Op::Open(1),
        ];
        let mut s = Selection::new();
        let mut last_opened = None;
        for op in ops {
            match op {
                Op::Open(id) => {
                    s.open_with(id);
                    last_opened = Some(id);
                }
                Op::Close => {
                    s.close();
                    last_opened = None;
                }
                Op::Click(target) => {
                    s.handle_click(target);
                    if target != ClickTarget::Panel {
                        last_opened = None;
                    }
                }
            }
            assert_eq!(s.current().copied(), last_opened);
        }
        assert_eq!(s.current(), Some(&1));
    }
}
