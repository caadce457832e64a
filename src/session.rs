//! One drawing session: scene state plus the per-frame pass
//!
//! The host owns a `Session`, forwards pointer transitions to `pointer`, and
//! calls `frame` once per display refresh. All calls happen on one thread.

use std::cell::Cell;

use serde::Serialize;

use crate::renderer::{Surface, draw_ball, draw_polyline, draw_word};
use crate::sim::{
    Ball, Bounds, Scene, StrokeEvent, StrokeOutcome, TickReport, handle_stroke, tick,
};
use crate::style::{SceneStyle, WordStyle};

/// Scene plus the styles rolled at start
#[derive(Debug, Clone)]
pub struct Session {
    scene: Scene,
    style: SceneStyle,
    frames: u64,
}

/// Snapshot for logs and debugging
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub frames: u64,
    pub ticks: u64,
    pub strokes: usize,
    pub moving: bool,
    pub bounds: Bounds,
    pub ball: Ball,
}

impl Session {
    /// Start a session on a `width` x `height` canvas, styles rolled from `seed`
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self::with_style(SceneStyle::from_seed(seed), Bounds::new(width, height))
    }

    pub fn with_style(style: SceneStyle, bounds: Bounds) -> Self {
        log::info!(
            "Session started (seed {}, {}x{}, ball r={:.1})",
            style.seed,
            bounds.width,
            bounds.height,
            style.ball.radius
        );
        Self {
            scene: Scene::with_centered_ball(bounds, &style.ball),
            style,
            frames: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn word(&self) -> &WordStyle {
        &self.style.word
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Feed a pointer transition into stroke capture
    pub fn pointer(&mut self, event: StrokeEvent) -> StrokeOutcome {
        handle_stroke(&mut self.scene, event)
    }

    /// Run one frame: clear, word, strokes, ball step, ball
    ///
    /// The surface size is read first so wall checks use the current bounds.
    pub fn frame(&mut self, surface: &mut impl Surface) -> TickReport {
        let (width, height) = surface.size();
        self.scene.resize(Bounds::new(width as f32, height as f32));

        surface.clear();
        draw_word(surface, &self.style.word);
        for line in self.scene.obstacles() {
            draw_polyline(surface, line);
        }

        let report = tick(&mut self.scene);

        draw_ball(surface, &self.scene.ball);
        self.frames += 1;
        report
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.style.seed,
            frames: self.frames,
            ticks: self.scene.ticks(),
            strokes: self.scene.completed().len(),
            moving: self.scene.is_moving(),
            bounds: self.scene.bounds,
            ball: self.scene.ball.clone(),
        }
    }
}

/// Frame-chain state shared between the frame callback and page lifecycle
/// handlers
///
/// At most one frame request is outstanding at a time: the host records the
/// handle of each request and cancels it when the page is hidden.
#[derive(Debug)]
pub struct FrameGate {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self {
            running: Cell::new(true),
            pending: Cell::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop the chain. Returns the outstanding request to cancel, if any.
    ///
    /// `None` from a gate that was already stopped as well.
    pub fn stop(&self) -> Option<i32> {
        self.running.set(false);
        self.pending.take()
    }

    /// Restart the chain. True when the caller must request the first frame.
    pub fn resume(&self) -> bool {
        !self.running.replace(true) && self.pending.get().is_none()
    }

    /// Record the handle of a frame request
    pub fn scheduled(&self, handle: i32) {
        self.pending.set(Some(handle));
    }

    /// The requested frame is running; nothing is outstanding
    pub fn fired(&self) {
        self.pending.set(None);
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new()
    }
}
