use raylib::prelude::*;

use crate::constants::*;
use crate::surface::{Dot, IndicatorSurface};

/// Row of indicator dots centered along the bottom of the window.
pub struct DotRow {
    dots: Vec<Dot>,
    center_x: f32,
    center_y: f32,
}

impl DotRow {
    pub fn new(width: f32, height: f32) -> Self {
        let mut row = Self {
            dots: Vec::new(),
            center_x: 0.0,
            center_y: 0.0,
        };
        row.layout(width, height);
        row
    }

    pub fn layout(&mut self, width: f32, height: f32) {
        self.center_x = width * 0.5;
        self.center_y = height - DOT_BOTTOM_MARGIN;
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn active_tag(&self) -> Option<usize> {
        self.dots.iter().find(|d| d.active).map(|d| d.tag)
    }

    fn position(&self, slot: usize) -> Vector2 {
        let span = self.dots.len().saturating_sub(1) as f32 * DOT_SPACING;
        Vector2::new(
            self.center_x - span * 0.5 + slot as f32 * DOT_SPACING,
            self.center_y,
        )
    }

    /// Tag of the dot under `point`, if any. This is the single click listener for the whole row.
    pub fn hit_test(&self, point: Vector2) -> Option<usize> {
        self.dots.iter().enumerate().find_map(|(slot, dot)| {
            let center = self.position(slot);
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            (dx * dx + dy * dy <= DOT_HIT_RADIUS * DOT_HIT_RADIUS).then_some(dot.tag)
        })
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        for (slot, dot) in self.dots.iter().enumerate() {
            let color = if dot.active {
                Color::RAYWHITE
            } else {
                Color::new(245, 245, 245, 90)
            };
            d.draw_circle_v(self.position(slot), DOT_RADIUS, color);
        }
    }
}

impl IndicatorSurface for DotRow {
    fn append(&mut self, dot: Dot) {
        self.dots.push(dot);
    }

    fn set_active(&mut self, tag: usize, active: bool) {
        if let Some(dot) = self.dots.iter_mut().find(|d| d.tag == tag) {
            dot.active = active;
        }
    }

    fn clear_active(&mut self) {
        for dot in self.dots.iter_mut() {
            dot.active = false;
        }
    }
}
