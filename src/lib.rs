//! Scribble Bounce - draw lines, watch a ball bounce off them
//!
//! Core modules:
//! - `sim`: Scene simulation (ball motion, wall and segment collisions, stroke capture)
//! - `style`: Random scene-start styles (ball and decorative word)
//! - `renderer`: Drawing-surface contract and the per-frame draw passes
//! - `session`: Frame scheduler body and input entry points for the host

pub mod renderer;
pub mod session;
pub mod sim;
pub mod style;

pub use session::{FrameGate, Session};
pub use style::{Hsl, SceneStyle, WordStyle};

/// Scene constants
pub mod consts {
    /// Ball radius range (pixels), sampled once at scene start
    pub const BALL_MIN_RADIUS: f32 = 10.0;
    pub const BALL_MAX_RADIUS: f32 = 30.0;
    /// Initial velocity components are uniform in [-SPREAD/2, SPREAD/2) px/frame
    pub const BALL_SPEED_SPREAD: f32 = 5.0;
    /// Ball colour saturation/lightness (percent); hue is random
    pub const BALL_SATURATION: f32 = 100.0;
    pub const BALL_LIGHTNESS: f32 = 50.0;

    /// Stroke appearance
    pub const STROKE_COLOR: &str = "black";
    pub const STROKE_WIDTH: f64 = 2.0;

    /// Decorative word
    pub const WORDS: &[&str] = &["Imagine"];
    pub const WORD_FONT_FAMILY: &str = "Arial";
    /// Font size is an integer in [MIN, MIN + SPREAD)
    pub const WORD_MIN_FONT_SIZE: u32 = 60;
    pub const WORD_FONT_SIZE_SPREAD: u32 = 20;
    pub const WORD_SATURATION: f32 = 70.0;
    pub const WORD_LIGHTNESS: f32 = 80.0;
    /// Word is vertically centred at this fraction of the canvas height
    pub const WORD_HEIGHT_FRACTION: f64 = 1.0 / 6.0;

    /// Segments shorter than this have no usable direction
    pub const MIN_SEGMENT_LENGTH: f32 = 1e-6;
}
