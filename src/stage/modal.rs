use raylib::prelude::*;
use tracing::debug;

use crate::constants::*;
use crate::state::ModalState;

const HELP_LINES: [&str; 5] = [
    "Left / Right arrow   previous / next slide",
    "Click a dot          jump to that slide",
    "H                    show this help",
    "Esc or click         close this help",
    "Q                    quit",
];

/// Help overlay. While shown it covers the whole window.
#[derive(Default)]
pub struct Modal {
    state: ModalState,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Shown
    }

    pub fn open(&mut self) {
        if !self.is_open() {
            debug!("help opened");
            self.state = ModalState::Shown;
        }
    }

    pub fn close(&mut self) {
        if self.is_open() {
            debug!("help closed");
            self.state = ModalState::Hidden;
        }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, width: f32, height: f32, slide_count: usize) {
        if !self.is_open() {
            return;
        }
        d.draw_rectangle(
            0,
            0,
            width as i32,
            height as i32,
            Color::new(0, 0, 0, MODAL_BACKDROP_ALPHA),
        );

        let bx = (width - MODAL_WIDTH) * 0.5;
        let by = (height - MODAL_HEIGHT) * 0.5;
        d.draw_rectangle_rec(
            Rectangle::new(bx, by, MODAL_WIDTH, MODAL_HEIGHT),
            Color::new(245, 245, 245, 255),
        );

        let x = (bx + 28.0) as i32;
        let mut y = (by + 28.0) as i32;
        d.draw_text(&format!("{slide_count} slides"), x, y, 28, Color::DARKGRAY);
        y += 52;
        for line in HELP_LINES {
            d.draw_text(line, x, y, 20, Color::DARKGRAY);
            y += 34;
        }
    }
}
