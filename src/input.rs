/// Keys the carousel cares about. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Help,
    Other,
}

/// A navigation command for the slide controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Prev,
    Next,
    Key(Key),
    /// A click on the dot row, carrying the clicked dot's tag.
    DotClicked(usize),
}
