//! Scene state and core simulation types
//!
//! One ball, the strokes the user has finished, and the stroke being drawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::style::{BallStyle, Hsl};

/// A coordinate in canvas pixel space
pub type Point = Vec2;

/// Canvas dimensions, re-read every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// One freehand stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub color: String,
}

impl Polyline {
    /// Start a stroke containing only `start`
    pub fn new(start: Point, color: impl Into<String>) -> Self {
        Self {
            points: vec![start],
            color: color.into(),
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// A stroke needs two points to form a segment
    #[inline]
    pub fn has_segments(&self) -> bool {
        self.points.len() >= 2
    }

    /// Consecutive point pairs, in drawing order
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// The bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    radius: f32,
    color: Hsl,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Hsl) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Place a ball described by `style` at `pos`
    pub fn from_style(pos: Vec2, style: &BallStyle) -> Self {
        Self::new(pos, style.velocity, style.radius, style.color)
    }

    /// Fixed at creation
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Fixed at creation
    #[inline]
    pub fn color(&self) -> Hsl {
        self.color
    }
}

/// Complete scene state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub bounds: Bounds,
    pub ball: Ball,
    /// Finished strokes, in commit order. Never mutated after commit.
    pub(super) completed: Vec<Polyline>,
    pub(super) in_progress: Option<Polyline>,
    /// Set by the first finished stroke, never cleared
    pub(super) moving: bool,
    /// Frames in which the ball actually moved
    pub(super) ticks: u64,
}

impl Scene {
    pub fn new(bounds: Bounds, ball: Ball) -> Self {
        Self {
            bounds,
            ball,
            completed: Vec::new(),
            in_progress: None,
            moving: false,
            ticks: 0,
        }
    }

    /// New scene with the ball centred on the canvas
    pub fn with_centered_ball(bounds: Bounds, style: &BallStyle) -> Self {
        Self::new(bounds, Ball::from_style(bounds.center(), style))
    }

    pub fn completed(&self) -> &[Polyline] {
        &self.completed
    }

    pub fn in_progress(&self) -> Option<&Polyline> {
        self.in_progress.as_ref()
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Everything the ball can hit this frame: completed strokes, then the one being drawn
    pub fn obstacles(&self) -> impl Iterator<Item = &Polyline> {
        self.completed.iter().chain(self.in_progress.iter())
    }

    /// Only future wall checks see the new size; the ball and strokes stay put
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            log::trace!("Scene resized to {}x{}", bounds.width, bounds.height);
            self.bounds = bounds;
        }
    }
}
