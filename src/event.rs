/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
}

impl Event {
    /// Convert a crossterm mouse press into a click with no target yet.
    /// The target is filled in after hit testing. Non-press mouse events
    /// (moves, drags, releases, scrolls) produce no event.
    pub fn from_mouse(mouse: &crossterm::event::MouseEvent) -> Option<Self> {
        match mouse.kind {
            crossterm::event::MouseEventKind::Down(button) => Some(Event::Click {
                target: None,
                x: mouse.column,
                y: mouse.row,
                button: button.into(),
            }),
            _ => None,
        }
    }

    /// Attach a target element ID to this event.
    pub fn with_target(self, id: impl Into<String>) -> Self {
        match self {
            Event::Click { x, y, button, .. } => Event::Click {
                target: Some(id.into()),
                x,
                y,
                button,
            },
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target, .. } => target.as_deref(),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
