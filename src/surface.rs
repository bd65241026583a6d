//! The two surfaces the slide controller draws through.
//!
//! The controller only ever writes to these. Whatever sits behind them
//! (raylib panels, test recorders) decides how an offset or an active flag
//! actually looks.

/// Horizontal offset of a slide panel, in percent of the track width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Offset(pub i64);

impl Offset {
    /// Offset of slide `index` while slide `current` is on screen.
    pub fn for_slide(index: usize, current: usize) -> Self {
        Offset(100 * (index as i64 - current as i64))
    }

    pub fn percent(self) -> i64 {
        self.0
    }
}

/// One indicator marker. The tag is the slide index it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub tag: usize,
    pub active: bool,
}

impl Dot {
    pub fn new(tag: usize) -> Self {
        Self { tag, active: false }
    }
}

pub trait SlideSurface {
    fn slide_count(&self) -> usize;
    fn set_offset(&mut self, index: usize, offset: Offset);
}

pub trait IndicatorSurface {
    fn append(&mut self, dot: Dot);
    fn set_active(&mut self, tag: usize, active: bool);
    fn clear_active(&mut self);
}
