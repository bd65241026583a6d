use std::path::PathBuf;

use raylib::prelude::*;
use tracing::{debug, warn};

use crate::controller::SlideController;
use crate::error::Result;
use crate::input::{Input, Key};
use crate::stage::{Control, Controls, DotRow, Modal, Track};

/// What a single pointer click or key press asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Navigate(Input),
    OpenHelp,
    CloseHelp,
    Ignore,
}

impl From<KeyboardKey> for Key {
    fn from(key: KeyboardKey) -> Self {
        match key {
            KeyboardKey::KEY_LEFT => Key::ArrowLeft,
            KeyboardKey::KEY_RIGHT => Key::ArrowRight,
            KeyboardKey::KEY_ESCAPE => Key::Escape,
            KeyboardKey::KEY_H => Key::Help,
            _ => Key::Other,
        }
    }
}

pub struct App {
    controller: SlideController<Track, DotRow>,
    controls: Controls,
    modal: Modal,
    width: f32,
    height: f32,
}

impl App {
    pub fn new(paths: Vec<PathBuf>, width: f32, height: f32) -> Self {
        let controller = SlideController::initialize(
            Track::new(paths, width, height),
            DotRow::new(width, height),
        );
        Self {
            controller,
            controls: Controls::new(width, height),
            modal: Modal::new(),
            width,
            height,
        }
    }

    pub fn controller(&self) -> &SlideController<Track, DotRow> {
        &self.controller
    }

    pub fn help_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Moves to `index` without animating, for the initial slide.
    pub fn start_at(&mut self, index: usize) -> Result<()> {
        self.controller.go_to(index)?;
        self.controller.slides_mut().snap();
        Ok(())
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.controller.slides_mut().resize(width, height);
        self.controller.indicators_mut().layout(width, height);
        self.controls.layout(width, height);
    }

    pub fn pointer_click(&self, point: Vector2) -> UiAction {
        if self.modal.is_open() {
            return UiAction::CloseHelp;
        }
        if let Some(control) = self.controls.hit_test(point) {
            return match control {
                Control::Help => UiAction::OpenHelp,
                Control::Prev => UiAction::Navigate(Input::Prev),
                Control::Next => UiAction::Navigate(Input::Next),
            };
        }
        match self.controller.indicators().hit_test(point) {
            Some(tag) => UiAction::Navigate(Input::DotClicked(tag)),
            None => UiAction::Ignore,
        }
    }

    pub fn key_press(&self, key: Key) -> UiAction {
        match key {
            Key::ArrowLeft | Key::ArrowRight => UiAction::Navigate(Input::Key(key)),
            Key::Escape if self.modal.is_open() => UiAction::CloseHelp,
            Key::Help => UiAction::OpenHelp,
            Key::Escape | Key::Other => UiAction::Ignore,
        }
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Navigate(input) => {
                if let Err(e) = self.controller.handle(input) {
                    warn!("ignoring {input:?}: {e}");
                }
            }
            UiAction::OpenHelp => self.modal.open(),
            UiAction::CloseHelp => self.modal.close(),
            UiAction::Ignore => {}
        }
    }

    /// Drains this frame's key presses and clicks, applying each in order.
    pub fn poll_input(&mut self, rl: &mut RaylibHandle) {
        while let Some(key) = rl.get_key_pressed() {
            let action = self.key_press(key.into());
            self.apply(action);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let action = self.pointer_click(rl.get_mouse_position());
            debug!(?action, "click");
            self.apply(action);
        }
    }

    pub fn update(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, dt: f32) {
        let track = self.controller.slides_mut();
        track.update(dt);
        track.load_in_view(rl, thread);
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        self.controller.slides().draw(d);
        self.controls.draw(d);
        self.controller.indicators().draw(d);
        self.modal
            .draw(d, self.width, self.height, self.controller.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn app(len: usize) -> App {
        let paths = (0..len).map(|i| PathBuf::from(format!("{i:03}.jpg"))).collect();
        App::new(paths, 800.0, 600.0)
    }

    fn dot_point(app: &App, tag: usize) -> Vector2 {
        let n = app.controller().len() as f32;
        let x = 400.0 - (n - 1.0) * DOT_SPACING * 0.5 + tag as f32 * DOT_SPACING;
        Vector2::new(x, 600.0 - DOT_BOTTOM_MARGIN)
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut a = app(3);
        a.apply(a.key_press(Key::ArrowRight));
        assert_eq!(a.controller().current(), 1);
        a.apply(a.key_press(Key::ArrowLeft));
        a.apply(a.key_press(Key::ArrowLeft));
        assert_eq!(a.controller().current(), 2);
    }

    #[test]
    fn dot_click_jumps() {
        let mut a = app(5);
        let action = a.pointer_click(dot_point(&a, 3));
        assert_eq!(action, UiAction::Navigate(Input::DotClicked(3)));
        a.apply(action);
        assert_eq!(a.controller().current(), 3);
        assert_eq!(a.controller().indicators().active_tag(), Some(3));
    }

    #[test]
    fn arrow_buttons_navigate() {
        let mut a = app(3);
        let next = Vector2::new(800.0 - BUTTON_MARGIN - 1.0, 300.0);
        let prev = Vector2::new(BUTTON_MARGIN + 1.0, 300.0);
        a.apply(a.pointer_click(next));
        a.apply(a.pointer_click(next));
        assert_eq!(a.controller().current(), 2);
        a.apply(a.pointer_click(prev));
        assert_eq!(a.controller().current(), 1);
    }

    #[test]
    fn open_modal_swallows_clicks() {
        let mut a = app(3);
        a.apply(a.key_press(Key::Help));
        assert!(a.help_open());
        let action = a.pointer_click(dot_point(&a, 2));
        assert_eq!(action, UiAction::CloseHelp);
        a.apply(action);
        assert!(!a.help_open());
        assert_eq!(a.controller().current(), 0);
    }

    #[test]
    fn escape_only_closes_an_open_modal() {
        let mut a = app(2);
        assert_eq!(a.key_press(Key::Escape), UiAction::Ignore);
        a.apply(UiAction::OpenHelp);
        assert_eq!(a.key_press(Key::Escape), UiAction::CloseHelp);
    }

    #[test]
    fn arrows_still_work_behind_the_modal() {
        let mut a = app(3);
        a.apply(UiAction::OpenHelp);
        a.apply(a.key_press(Key::ArrowRight));
        assert_eq!(a.controller().current(), 1);
        assert!(a.help_open());
    }

    #[test]
    fn bad_dot_tag_is_dropped() {
        let mut a = app(2);
        a.apply(UiAction::Navigate(Input::DotClicked(7)));
        assert_eq!(a.controller().current(), 0);
    }

    #[test]
    fn start_at_snaps_track() {
        let mut a = app(3);
        a.start_at(2).unwrap();
        let shown: Vec<f32> = a
            .controller()
            .slides()
            .panels()
            .iter()
            .map(|p| p.displayed())
            .collect();
        assert_eq!(shown, vec![-200.0, -100.0, 0.0]);
        assert!(a.start_at(3).is_err());
    }

    #[test]
    fn resize_relayouts_dots() {
        let mut a = app(1);
        a.resize(1000.0, 900.0);
        let point = Vector2::new(500.0, 900.0 - DOT_BOTTOM_MARGIN);
        assert_eq!(a.pointer_click(point), UiAction::Navigate(Input::DotClicked(0)));
    }
}
