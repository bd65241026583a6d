use std::path::{Path, PathBuf};

use raylib::prelude::*;
use tracing::warn;

use crate::constants::*;
use crate::texture_loader::load_texture_with_exif_rotation;

pub enum TextureState {
    Pending,
    Loaded(Texture2D),
    Failed,
}

/// One slide: an image that is only decoded once it scrolls into view.
pub struct Panel {
    path: PathBuf,
    texture: TextureState,

    displayed: f32, // percent of track width, what is drawn
    start: f32,
    target: f32,

    animation_timer: f32,
    pub is_animating: bool,
    fade_timer: f32,
}

/// Whether a panel at `displayed` percent overlaps the viewport, widened by `margin` percent.
pub fn intersects_viewport(displayed: f32, margin: i64) -> bool {
    displayed.abs() < (100 + margin) as f32
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Largest rectangle with the texture's aspect ratio that fits the panel at `panel_x`.
pub fn fit_rect(tex_width: f32, tex_height: f32, panel_x: f32, width: f32, height: f32) -> Rectangle {
    let scale = (width * PANEL_FILL / tex_width).min(height * PANEL_FILL / tex_height);
    let w = tex_width * scale;
    let h = tex_height * scale;
    Rectangle::new(panel_x + (width - w) * 0.5, (height - h) * 0.5, w, h)
}

impl Panel {
    pub fn new(path: PathBuf, offset_percent: i64) -> Self {
        let offset = offset_percent as f32;
        Self {
            path,
            texture: TextureState::Pending,
            displayed: offset,
            start: offset,
            target: offset,
            animation_timer: 0.0,
            is_animating: false,
            fade_timer: 0.0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.texture, TextureState::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.texture, TextureState::Loaded(_))
    }

    pub fn needs_load(&self) -> bool {
        self.is_pending() && intersects_viewport(self.displayed, LAZY_MARGIN_PERCENT)
    }

    pub fn set_target(&mut self, offset_percent: i64) {
        let target = offset_percent as f32;
        if target == self.target {
            return;
        }
        self.start = self.displayed;
        self.target = target;
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn snap(&mut self) {
        self.displayed = self.target;
        self.start = self.target;
        self.is_animating = false;
    }

    pub fn update(&mut self, dt: f32) {
        if self.is_loaded() {
            self.fade_timer = (self.fade_timer + dt).min(FADE_DURATION);
        }
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / TRANSITION_DURATION).min(1.0);
        self.displayed = self.start + (self.target - self.start) * ease_out_cubic(t);

        if self.animation_timer >= TRANSITION_DURATION {
            self.snap();
        }
    }

    pub fn load(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.texture = match load_texture_with_exif_rotation(rl, thread, &self.path) {
            Ok(texture) => TextureState::Loaded(texture),
            Err(e) => {
                warn!("{e:#}");
                TextureState::Failed
            }
        };
        self.fade_timer = 0.0;
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, width: f32, height: f32) {
        let x = width * self.displayed / 100.0;
        if x >= width || x + width <= 0.0 {
            return;
        }

        match &self.texture {
            TextureState::Loaded(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let alpha = (self.fade_timer / FADE_DURATION).clamp(0.0, 1.0);
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    fit_rect(tex_width, tex_height, x, width, height),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::new(255, 255, 255, (alpha * 255.0) as u8),
                );
            }
            TextureState::Pending => {
                d.draw_rectangle_rec(placeholder(x, width, height), Color::new(40, 40, 40, 255));
            }
            TextureState::Failed => {
                let rect = placeholder(x, width, height);
                d.draw_rectangle_rec(rect, Color::new(60, 20, 20, 255));
                let name = self
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                d.draw_text(
                    &format!("Could not load {name}"),
                    (rect.x + 20.0) as i32,
                    (rect.y + 20.0) as i32,
                    20,
                    Color::LIGHTGRAY,
                );
            }
        }
    }
}

fn placeholder(x: f32, width: f32, height: f32) -> Rectangle {
    let w = width * PANEL_FILL;
    let h = height * PANEL_FILL;
    Rectangle::new(x + (width - w) * 0.5, (height - h) * 0.5, w, h)
}
