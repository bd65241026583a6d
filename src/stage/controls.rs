use raylib::prelude::*;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    Help,
}

/// The on-screen buttons: arrows at the window edges and a help button top-right.
pub struct Controls {
    prev: Rectangle,
    next: Rectangle,
    help: Rectangle,
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

impl Controls {
    pub fn new(width: f32, height: f32) -> Self {
        let mut controls = Self {
            prev: Rectangle::new(0.0, 0.0, 0.0, 0.0),
            next: Rectangle::new(0.0, 0.0, 0.0, 0.0),
            help: Rectangle::new(0.0, 0.0, 0.0, 0.0),
        };
        controls.layout(width, height);
        controls
    }

    pub fn layout(&mut self, width: f32, height: f32) {
        let mid_y = (height - BUTTON_SIZE) * 0.5;
        self.prev = Rectangle::new(BUTTON_MARGIN, mid_y, BUTTON_SIZE, BUTTON_SIZE);
        self.next = Rectangle::new(
            width - BUTTON_MARGIN - BUTTON_SIZE,
            mid_y,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );
        self.help = Rectangle::new(
            width - BUTTON_MARGIN - BUTTON_SIZE,
            BUTTON_MARGIN,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        [
            (Control::Help, &self.help),
            (Control::Prev, &self.prev),
            (Control::Next, &self.next),
        ]
        .into_iter()
        .find(|(_, rect)| contains(rect, point))
        .map(|(control, _)| control)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        for (rect, label) in [(&self.prev, "<"), (&self.next, ">"), (&self.help, "?")] {
            d.draw_rectangle_rec(*rect, Color::new(255, 255, 255, 60));
            d.draw_text(
                label,
                (rect.x + BUTTON_SIZE * 0.35) as i32,
                (rect.y + BUTTON_SIZE * 0.2) as i32,
                (BUTTON_SIZE * 0.6) as i32,
                Color::RAYWHITE,
            );
        }
    }
}
