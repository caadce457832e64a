//! 2D drawing-surface rendering
//!
//! The scene is drawn through the `Surface` trait, a thin slice of the
//! canvas 2D API. The browser implementation is `CanvasSurface`;
//! `RecordingSurface` captures calls for headless runs and tests.

use std::fmt;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod record;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use record::{DrawOp, RecordingSurface};
pub use shapes::{draw_ball, draw_polyline, draw_word};

/// Line end style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Round => "round",
        }
    }
}

/// Corner style between segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Round,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Round => "round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Middle,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Middle => "middle",
        }
    }
}

/// Stroke settings for a path
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

/// Fill settings for text
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: String,
    pub color: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// The drawing operations the scene needs
pub trait Surface {
    /// Current size in pixels. May change between frames.
    fn size(&self) -> (f64, f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Stroke the current path
    fn stroke(&mut self, style: &LineStyle);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    /// Clear the whole surface
    fn clear(&mut self) {
        let (width, height) = self.size();
        self.clear_rect(0.0, 0.0, width, height);
    }
}

/// Why a drawing surface could not be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    NoWindow,
    NoDocument,
    /// No canvas element with this id
    NoCanvas(String),
    /// The canvas refused a 2D context
    NoContext,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NoWindow => write!(f, "no window"),
            SurfaceError::NoDocument => write!(f, "no document"),
            SurfaceError::NoCanvas(id) => write!(f, "no canvas element with id '{}'", id),
            SurfaceError::NoContext => write!(f, "2d context unavailable"),
        }
    }
}

impl std::error::Error for SurfaceError {}
