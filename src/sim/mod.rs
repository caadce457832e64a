//! Scene simulation module
//!
//! All motion and collision logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Randomness only enters through `style`, at scene start
//! - Stable obstacle order (commit order, then the stroke in progress)

pub mod collision;
pub mod state;
pub mod stroke;
pub mod tick;

pub use collision::{
    SegmentContact, WallHit, ball_segment_collision, ball_wall_collision, reflect_velocity,
    segment_normal,
};
pub use state::{Ball, Bounds, Point, Polyline, Scene};
pub use stroke::{StrokeEvent, StrokeOutcome, handle_stroke};
pub use tick::{TickReport, tick};
