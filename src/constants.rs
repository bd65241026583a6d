pub const DEFAULT_WIDTH: i32 = 1280;             // Default window width
pub const DEFAULT_HEIGHT: i32 = 720;             // Default window height
pub const DEFAULT_FPS: u32 = 60;                 // Frames per second

pub const TRANSITION_DURATION: f32 = 0.4;        // Time for a panel to slide to its new offset (seconds)
pub const FADE_DURATION: f32 = 0.3;              // Fade-in of a freshly loaded texture (seconds)
pub const LAZY_MARGIN_PERCENT: i64 = 0;          // Extra reach of the viewport when deciding what to load

pub const PANEL_FILL: f32 = 0.9;                 // Fraction of the window an image may cover

pub const DOT_RADIUS: f32 = 7.0;                 // Indicator dot radius (px)
pub const DOT_HIT_RADIUS: f32 = 11.0;            // Click tolerance around a dot center (px)
pub const DOT_SPACING: f32 = 28.0;               // Distance between dot centers (px)
pub const DOT_BOTTOM_MARGIN: f32 = 36.0;         // Dot row center to window bottom (px)

pub const BUTTON_SIZE: f32 = 56.0;               // Arrow/help button side (px)
pub const BUTTON_MARGIN: f32 = 24.0;             // Button to window edge (px)

pub const MODAL_WIDTH: f32 = 520.0;
pub const MODAL_HEIGHT: f32 = 300.0;
pub const MODAL_BACKDROP_ALPHA: u8 = 160;
