/// Visibility of an element, reduced to the two display values the widget
/// observes: shown (`Block`) or hidden (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

impl Display {
    pub const fn is_shown(&self) -> bool {
        matches!(self, Display::Block)
    }
}
