//! Collision detection and response for straight geometry
//!
//! Walls are the canvas edges; obstacles are the straight segments between
//! consecutive stroke points. Resolution only changes velocity: there is no
//! penetration correction, so a ball can sink into a line or a wall.

use glam::Vec2;

use super::state::{Bounds, Point};
use crate::consts::MIN_SEGMENT_LENGTH;

/// A ball touching a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentContact {
    /// Unit normal of the segment, for reflection
    pub normal: Vec2,
    /// Distance from ball centre to the closest point on the segment
    pub distance: f32,
}

/// Which velocity components a wall hit flips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub horizontal: bool,
    pub vertical: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Closest point on the finite segment `start..end` to `p`
///
/// Returns `None` for zero-length segments, which have no direction.
pub fn closest_point_on_segment(p: Point, start: Point, end: Point) -> Option<Point> {
    let line_vec = end - start;
    let line_len = line_vec.length();
    if line_len < MIN_SEGMENT_LENGTH {
        return None;
    }

    let unit = line_vec / line_len;
    let projection = (p - start).dot(unit).clamp(0.0, line_len);
    Some(start + unit * projection)
}

/// Unit normal of the segment, rotated a quarter turn from its direction
///
/// For a left-to-right segment on screen (y down) this points up.
#[inline]
pub fn segment_normal(start: Point, end: Point) -> Vec2 {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    Vec2::new(angle.sin(), -angle.cos())
}

/// Check a ball against one segment
///
/// Touching counts: a ball whose edge is exactly on the line collides.
pub fn ball_segment_collision(
    center: Point,
    radius: f32,
    start: Point,
    end: Point,
) -> Option<SegmentContact> {
    let point = closest_point_on_segment(center, start, end)?;
    let distance = center.distance(point);
    if distance <= radius {
        Some(SegmentContact {
            normal: segment_normal(start, end),
            distance,
        })
    } else {
        None
    }
}

/// Check a ball against the canvas edges, using its current position
pub fn ball_wall_collision(pos: Vec2, radius: f32, bounds: Bounds) -> WallHit {
    WallHit {
        horizontal: pos.x + radius > bounds.width || pos.x - radius < 0.0,
        vertical: pos.y + radius > bounds.height || pos.y - radius < 0.0,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Apply a wall hit by inverting the flagged components
#[inline]
pub fn bounce_off_walls(velocity: Vec2, hit: WallHit) -> Vec2 {
    Vec2::new(
        if hit.horizontal { -velocity.x } else { velocity.x },
        if hit.vertical { -velocity.y } else { velocity.y },
    )
}
