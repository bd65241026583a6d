use tracing::debug;

use crate::error::{CarouselError, Result};
use crate::input::{Input, Key};
use crate::surface::{Dot, IndicatorSurface, Offset, SlideSurface};

/// Owns the current slide index and keeps both surfaces in step with it.
///
/// Every transition re-renders the whole slide set and the whole dot row,
/// so after any call the active dot and every panel offset agree with
/// `current()`.
pub struct SlideController<S, I> {
    slides: S,
    indicators: I,
    current: usize,
    len: usize,
}

impl<S: SlideSurface, I: IndicatorSurface> SlideController<S, I> {
    /// Renders slide 0, appends one dot per slide and activates dot 0.
    pub fn initialize(slides: S, indicators: I) -> Self {
        let len = slides.slide_count();
        let mut controller = Self {
            slides,
            indicators,
            current: 0,
            len,
        };

        controller.render_slides();
        for tag in 0..len {
            controller.indicators.append(Dot::new(tag));
        }
        controller.render_dots();

        debug!(slides = len, "carousel initialized");
        controller
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.render();
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.render();
        self.current
    }

    /// Jumps straight to `index`. Out-of-range indices leave everything untouched.
    pub fn go_to(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        self.render();
        Ok(self.current)
    }

    pub fn handle(&mut self, input: Input) -> Result<usize> {
        match input {
            Input::Next | Input::Key(Key::ArrowRight) => Ok(self.next()),
            Input::Prev | Input::Key(Key::ArrowLeft) => Ok(self.prev()),
            Input::DotClicked(tag) => self.go_to(tag),
            Input::Key(_) => Ok(self.current),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn slides(&self) -> &S {
        &self.slides
    }

    /// For presentation updates (animation, loading) that never touch the index.
    pub fn slides_mut(&mut self) -> &mut S {
        &mut self.slides
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    pub fn indicators_mut(&mut self) -> &mut I {
        &mut self.indicators
    }

    fn render(&mut self) {
        self.render_slides();
        self.render_dots();
        debug!(current = self.current, "slide changed");
    }

    fn render_slides(&mut self) {
        for index in 0..self.len {
            self.slides
                .set_offset(index, Offset::for_slide(index, self.current));
        }
    }

    fn render_dots(&mut self) {
        self.indicators.clear_active();
        if self.len > 0 {
            self.indicators.set_active(self.current, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Default)]
    struct RecordingSlides {
        offsets: Vec<Offset>,
    }

    impl RecordingSlides {
        fn with_len(len: usize) -> Self {
            Self {
                offsets: vec![Offset(i64::MIN); len],
            }
        }

        fn percents(&self) -> Vec<i64> {
            self.offsets.iter().map(|o| o.percent()).collect()
        }
    }

    impl SlideSurface for RecordingSlides {
        fn slide_count(&self) -> usize {
            self.offsets.len()
        }

        fn set_offset(&mut self, index: usize, offset: Offset) {
            self.offsets[index] = offset;
        }
    }

    #[derive(Debug, Default)]
    struct RecordingDots {
        dots: Vec<Dot>,
    }

    impl RecordingDots {
        fn active_tags(&self) -> Vec<usize> {
            self.dots.iter().filter(|d| d.active).map(|d| d.tag).collect()
        }
    }

    impl IndicatorSurface for RecordingDots {
        fn append(&mut self, dot: Dot) {
            self.dots.push(dot);
        }

        fn set_active(&mut self, tag: usize, active: bool) {
            if let Some(dot) = self.dots.iter_mut().find(|d| d.tag == tag) {
                dot.active = active;
            }
        }

        fn clear_active(&mut self) {
            for dot in &mut self.dots {
                dot.active = false;
            }
        }
    }

    fn controller(len: usize) -> SlideController<RecordingSlides, RecordingDots> {
        SlideController::initialize(RecordingSlides::with_len(len), RecordingDots::default())
    }

    fn assert_consistent(c: &SlideController<RecordingSlides, RecordingDots>) {
        assert_eq!(c.indicators().active_tags(), vec![c.current()]);
        for (i, offset) in c.slides().offsets.iter().enumerate() {
            assert_eq!(offset.percent(), 100 * (i as i64 - c.current() as i64));
        }
    }

    #[test]
    fn initialize_renders_first_slide_and_dots() {
        let c = controller(3);
        assert_eq!(c.current(), 0);
        assert_eq!(c.slides().percents(), vec![0, 100, 200]);
        let tags: Vec<usize> = c.indicators().dots.iter().map(|d| d.tag).collect();
        assert_eq!(tags, vec![0, 1, 2]);
        assert_eq!(c.indicators().active_tags(), vec![0]);
    }

    #[test]
    fn next_moves_right() {
        let mut c = controller(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.indicators().active_tags(), vec![1]);
        assert_eq!(c.slides().percents(), vec![-100, 0, 100]);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut c = controller(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.indicators().active_tags(), vec![2]);
        assert_eq!(c.slides().percents(), vec![-200, -100, 0]);
    }

    #[test]
    fn go_to_matches_wrapped_prev() {
        let mut jumped = controller(3);
        let mut wrapped = controller(3);
        jumped.go_to(2).unwrap();
        wrapped.prev();
        assert_eq!(jumped.current(), wrapped.current());
        assert_eq!(jumped.slides().percents(), wrapped.slides().percents());
        assert_eq!(
            jumped.indicators().active_tags(),
            wrapped.indicators().active_tags()
        );
    }

    #[test]
    fn single_slide_never_moves() {
        let mut c = controller(1);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert_consistent(&c);
    }

    #[test]
    fn out_of_range_go_to_is_rejected() {
        let mut c = controller(3);
        c.next();
        let err = c.go_to(3).unwrap_err();
        assert!(matches!(
            err,
            CarouselError::IndexOutOfRange { index: 3, len: 3 }
        ));
        assert_eq!(c.current(), 1);
        assert_consistent(&c);
    }

    #[test]
    fn empty_set_is_inert() {
        let mut c = controller(0);
        assert!(c.is_empty());
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert!(c.go_to(0).is_err());
        assert!(c.indicators().active_tags().is_empty());
    }

    #[test]
    fn handle_dispatches_inputs() {
        let mut c = controller(4);
        assert_eq!(c.handle(Input::Next).unwrap(), 1);
        assert_eq!(c.handle(Input::Key(Key::ArrowRight)).unwrap(), 2);
        assert_eq!(c.handle(Input::Key(Key::ArrowLeft)).unwrap(), 1);
        assert_eq!(c.handle(Input::Prev).unwrap(), 0);
        assert_eq!(c.handle(Input::DotClicked(3)).unwrap(), 3);
        assert!(c.handle(Input::DotClicked(9)).is_err());
        assert_consistent(&c);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut c = controller(4);
        c.next();
        for key in [Key::Escape, Key::Help, Key::Other] {
            assert_eq!(c.handle(Input::Key(key)).unwrap(), 1);
        }
        assert_consistent(&c);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_index_stays_in_range(len in 1usize..12, steps in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut c = controller(len);
            for forward in steps {
                let index = if forward { c.next() } else { c.prev() };
                prop_assert!(index < len);
            }
            assert_consistent(&c);
        }

        #[test]
        fn prop_full_cycle_returns_home(len in 1usize..12, start in 0usize..12) {
            let start = start % len;
            let mut c = controller(len);
            c.go_to(start).unwrap();
            for _ in 0..len {
                c.next();
            }
            prop_assert_eq!(c.current(), start);
            for _ in 0..len {
                c.prev();
            }
            prop_assert_eq!(c.current(), start);
        }

        #[test]
        fn prop_prev_undoes_next(len in 1usize..12, start in 0usize..12) {
            let start = start % len;
            let mut c = controller(len);
            c.go_to(start).unwrap();
            c.next();
            c.prev();
            prop_assert_eq!(c.current(), start);
            c.prev();
            c.next();
            prop_assert_eq!(c.current(), start);
            assert_consistent(&c);
        }
    }
}
