use std::path::PathBuf;

use raylib::prelude::*;
use tracing::debug;

use crate::stage::panel::Panel;
use crate::surface::{Offset, SlideSurface};

/// The horizontal strip of slide panels, one window wide per panel.
pub struct Track {
    panels: Vec<Panel>,
    width: f32,
    height: f32,
}

impl Track {
    pub fn new(paths: Vec<PathBuf>, width: f32, height: f32) -> Self {
        let panels = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| Panel::new(path, Offset::for_slide(i, 0).percent()))
            .collect();
        Self {
            panels,
            width,
            height,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn update(&mut self, dt: f32) {
        for panel in self.panels.iter_mut() {
            panel.update(dt);
        }
    }

    /// Jumps every panel to its target without animating.
    pub fn snap(&mut self) {
        for panel in self.panels.iter_mut() {
            panel.snap();
        }
    }

    /// Indices of panels that overlap the viewport but have no texture yet.
    pub fn pending_in_view(&self) -> Vec<usize> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.needs_load())
            .map(|(i, _)| i)
            .collect()
    }

    /// Loads textures for panels that just came into view. Each panel loads at most once.
    pub fn load_in_view(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> usize {
        let pending = self.pending_in_view();
        for &index in &pending {
            debug!(index, path = %self.panels[index].path().display(), "lazy loading slide");
            self.panels[index].load(rl, thread);
        }
        pending.len()
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        for panel in self.panels.iter() {
            panel.draw(d, self.width, self.height);
        }
    }
}

impl SlideSurface for Track {
    fn slide_count(&self) -> usize {
        self.panels.len()
    }

    fn set_offset(&mut self, index: usize, offset: Offset) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.set_target(offset.percent());
        }
    }
}
