//! Per-frame ball step
//!
//! Velocity is in pixels per frame, so motion speed follows the display's
//! refresh rate. There is no timestep correction.

use super::collision::{
    WallHit, ball_segment_collision, ball_wall_collision, bounce_off_walls, reflect_velocity,
};
use super::state::Scene;

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// False until the first pointer release
    pub moved: bool,
    pub wall: WallHit,
    /// Segments that reflected the ball this frame
    pub segment_hits: u32,
}

/// Advance the ball by one frame
///
/// Walls and segments are all tested against the position at the start of
/// the frame. Every touching segment reflects the velocity in turn, in
/// obstacle order, before the position is integrated.
pub fn tick(scene: &mut Scene) -> TickReport {
    if !scene.moving {
        return TickReport::default();
    }

    let pos = scene.ball.pos;
    let radius = scene.ball.radius();

    let wall = ball_wall_collision(pos, radius, scene.bounds);
    let mut vel = bounce_off_walls(scene.ball.vel, wall);

    let mut segment_hits = 0;
    for line in scene.obstacles() {
        for (start, end) in line.segments() {
            if let Some(contact) = ball_segment_collision(pos, radius, start, end) {
                vel = reflect_velocity(vel, contact.normal);
                segment_hits += 1;
            }
        }
    }

    if segment_hits > 0 {
        log::trace!("Ball hit {} segment(s) at ({:.1}, {:.1})", segment_hits, pos.x, pos.y);
    }

    scene.ball.vel = vel;
    scene.ball.pos = pos + vel;
    scene.ticks += 1;

    TickReport {
        moved: true,
        wall,
        segment_hits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Bounds, Polyline};
    use crate::sim::stroke::{StrokeEvent, handle_stroke};
    use crate::style::Hsl;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball(pos: Vec2, vel: Vec2, radius: f32) -> Ball {
        Ball::new(pos, vel, radius, Hsl::new(30.0, 100.0, 50.0))
    }

    fn release(scene: &mut Scene) {
        handle_stroke(scene, StrokeEvent::Start(Vec2::new(1000.0, 1000.0)));
        handle_stroke(scene, StrokeEvent::Move(Vec2::new(1001.0, 1000.0)));
        handle_stroke(scene, StrokeEvent::End);
    }

    #[test]
    fn test_ball_still_until_released() {
        let mut scene = Scene::new(
            Bounds::new(400.0, 300.0),
            ball(Vec2::new(200.0, 150.0), Vec2::new(2.0, 1.0), 10.0),
        );

        for _ in 0..10 {
            let report = tick(&mut scene);
            assert!(!report.moved);
        }
        assert_eq!(scene.ball.pos, Vec2::new(200.0, 150.0));
        assert_eq!(scene.ticks(), 0);

        release(&mut scene);

        let mut last = scene.ball.pos;
        for _ in 0..10 {
            assert!(tick(&mut scene).moved);
            assert_ne!(scene.ball.pos, last);
            last = scene.ball.pos;
        }
    }

    #[test]
    fn test_left_wall_reflection() {
        let mut scene = Scene::new(
            Bounds::new(400.0, 300.0),
            ball(Vec2::new(5.0, 150.0), Vec2::new(-3.0, 2.0), 6.0),
        );
        scene.moving = true;

        let report = tick(&mut scene);
        assert!(report.wall.horizontal);
        assert!(!report.wall.vertical);
        assert_eq!(scene.ball.vel, Vec2::new(3.0, 2.0));
        assert_eq!(scene.ball.pos, Vec2::new(8.0, 152.0));
    }

    #[test]
    fn test_segment_reflection() {
        let mut scene = Scene::new(
            Bounds::new(400.0, 300.0),
            ball(Vec2::new(100.0, 105.0), Vec2::new(0.0, 5.0), 6.0),
        );
        scene.moving = true;
        scene.completed.push(Polyline {
            points: vec![Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0)],
            color: "black".into(),
        });

        let report = tick(&mut scene);
        assert_eq!(report.segment_hits, 1);
        assert!(scene.ball.vel.x.abs() < 1e-5);
        assert!((scene.ball.vel.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_in_progress_stroke_is_an_obstacle() {
        let mut scene = Scene::new(
            Bounds::new(400.0, 300.0),
            ball(Vec2::new(100.0, 105.0), Vec2::new(0.0, 5.0), 6.0),
        );
        scene.moving = true;
        handle_stroke(&mut scene, StrokeEvent::Start(Vec2::new(0.0, 100.0)));
        handle_stroke(&mut scene, StrokeEvent::Move(Vec2::new(200.0, 100.0)));

        let report = tick(&mut scene);
        assert_eq!(report.segment_hits, 1);
        assert!(scene.ball.vel.y < 0.0);
    }

    #[test]
    fn test_two_touching_segments_compound() {
        // The same horizontal line twice: the two reflections cancel out
        let mut scene = Scene::new(
            Bounds::new(400.0, 300.0),
            ball(Vec2::new(100.0, 105.0), Vec2::new(1.0, 5.0), 6.0),
        );
        scene.moving = true;
        for _ in 0..2 {
            scene.completed.push(Polyline {
                points: vec![Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0)],
                color: "black".into(),
            });
        }

        let report = tick(&mut scene);
        assert_eq!(report.segment_hits, 2);
        assert!((scene.ball.vel - Vec2::new(1.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_duplicate_points_do_not_collide() {
        let mut scene = Scene::new(
            Bounds::new(400.0, 300.0),
            ball(Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0), 6.0),
        );
        scene.moving = true;
        scene.completed.push(Polyline {
            points: vec![Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0)],
            color: "black".into(),
        });

        let report = tick(&mut scene);
        assert_eq!(report.segment_hits, 0);
        assert_eq!(scene.ball.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_second_stroke_keeps_motion_continuous() {
        let mut scene = Scene::new(
            Bounds::new(400.0, 300.0),
            ball(Vec2::new(200.0, 150.0), Vec2::new(2.0, 1.0), 10.0),
        );
        release(&mut scene);
        tick(&mut scene);
        let before = scene.ball.clone();

        release(&mut scene);
        assert!(scene.is_moving());
        assert_eq!(scene.ball, before);

        tick(&mut scene);
        assert_eq!(scene.ball.pos, before.pos + before.vel);
    }

    proptest! {
        #[test]
        fn ball_stays_near_walls(
            width in 100.0f32..800.0,
            height in 100.0f32..800.0,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            vx in -2.5f32..2.5,
            vy in -2.5f32..2.5,
            radius in 10.0f32..30.0,
        ) {
            let bounds = Bounds::new(width, height);
            let x = radius + fx * (width - 2.0 * radius);
            let y = radius + fy * (height - 2.0 * radius);
            prop_assume!(width > 2.0 * radius && height > 2.0 * radius);

            let mut scene = Scene::new(bounds, ball(Vec2::new(x, y), Vec2::new(vx, vy), radius));
            scene.moving = true;

            for _ in 0..2000 {
                tick(&mut scene);
                let p = scene.ball.pos;
                prop_assert!(p.x >= -radius && p.x <= width + radius);
                prop_assert!(p.y >= -radius && p.y <= height + radius);
            }
        }
    }
}
