//! Stroke capture from pointer transitions

use super::state::{Point, Polyline, Scene};
use crate::consts::STROKE_COLOR;

/// Pointer transition, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeEvent {
    /// Pointer pressed
    Start(Point),
    /// Pointer moved (pressed or not)
    Move(Point),
    /// Pointer released or left the surface
    End,
}

/// What a transition did to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// A new in-progress stroke was opened
    Started,
    /// A point was appended to the in-progress stroke
    Extended,
    /// The in-progress stroke moved to the completed set
    Committed,
    /// The in-progress stroke had a single point and was dropped
    Discarded,
    /// Nothing was in progress
    Ignored,
}

/// Apply one pointer transition to the scene
///
/// A new `Start` replaces any stroke still in progress. Every `End` releases
/// the ball, including one with no stroke open (the pointer leaving the
/// surface) and one that discards a single-point stroke.
pub fn handle_stroke(scene: &mut Scene, event: StrokeEvent) -> StrokeOutcome {
    match event {
        StrokeEvent::Start(point) => {
            scene.in_progress = Some(Polyline::new(point, STROKE_COLOR));
            StrokeOutcome::Started
        }
        StrokeEvent::Move(point) => match scene.in_progress.as_mut() {
            Some(line) => {
                line.push(point);
                StrokeOutcome::Extended
            }
            None => StrokeOutcome::Ignored,
        },
        StrokeEvent::End => {
            if !scene.moving {
                log::debug!("Pointer released, ball moving");
                scene.moving = true;
            }

            let Some(line) = scene.in_progress.take() else {
                return StrokeOutcome::Ignored;
            };

            if line.has_segments() {
                log::debug!(
                    "Stroke committed ({} points, {} total strokes)",
                    line.points.len(),
                    scene.completed.len() + 1
                );
                scene.completed.push(line);
                StrokeOutcome::Committed
            } else {
                StrokeOutcome::Discarded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Bounds};
    use crate::style::Hsl;
    use glam::Vec2;

    fn scene() -> Scene {
        let ball = Ball::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, 1.0),
            10.0,
            Hsl::new(200.0, 100.0, 50.0),
        );
        Scene::new(Bounds::new(400.0, 300.0), ball)
    }

    #[test]
    fn test_stroke_commit() {
        let mut scene = scene();
        assert_eq!(
            handle_stroke(&mut scene, StrokeEvent::Start(Vec2::new(10.0, 10.0))),
            StrokeOutcome::Started
        );
        assert_eq!(
            handle_stroke(&mut scene, StrokeEvent::Move(Vec2::new(20.0, 20.0))),
            StrokeOutcome::Extended
        );
        assert_eq!(handle_stroke(&mut scene, StrokeEvent::End), StrokeOutcome::Committed);

        assert_eq!(scene.completed().len(), 1);
        assert_eq!(
            scene.completed()[0].points,
            vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)]
        );
        assert_eq!(scene.completed()[0].color, STROKE_COLOR);
        assert!(scene.in_progress().is_none());
        assert!(scene.is_moving());
    }

    #[test]
    fn test_single_point_stroke_discarded() {
        let mut scene = scene();
        handle_stroke(&mut scene, StrokeEvent::Start(Vec2::new(10.0, 10.0)));
        assert_eq!(handle_stroke(&mut scene, StrokeEvent::End), StrokeOutcome::Discarded);
        assert!(scene.completed().is_empty());
        assert!(scene.in_progress().is_none());
        assert!(scene.is_moving());
    }

    #[test]
    fn test_move_without_stroke_ignored() {
        let mut scene = scene();
        assert_eq!(
            handle_stroke(&mut scene, StrokeEvent::Move(Vec2::new(5.0, 5.0))),
            StrokeOutcome::Ignored
        );
        assert!(scene.in_progress().is_none());
    }

    #[test]
    fn test_leave_without_stroke_releases_ball() {
        let mut scene = scene();
        assert!(!scene.is_moving());
        assert_eq!(handle_stroke(&mut scene, StrokeEvent::End), StrokeOutcome::Ignored);
        assert!(scene.is_moving());
        assert!(scene.completed().is_empty());

        let report = crate::sim::tick(&mut scene);
        assert!(report.moved);
        assert_eq!(scene.ball.pos, Vec2::new(101.0, 101.0));
    }

    #[test]
    fn test_repeated_end_is_idempotent() {
        let mut scene = scene();
        handle_stroke(&mut scene, StrokeEvent::End);
        let ball = scene.ball.clone();
        handle_stroke(&mut scene, StrokeEvent::End);
        assert!(scene.is_moving());
        assert_eq!(scene.ball, ball);
    }

    #[test]
    fn test_start_replaces_in_progress() {
        let mut scene = scene();
        handle_stroke(&mut scene, StrokeEvent::Start(Vec2::new(1.0, 1.0)));
        handle_stroke(&mut scene, StrokeEvent::Move(Vec2::new(2.0, 2.0)));
        handle_stroke(&mut scene, StrokeEvent::Start(Vec2::new(50.0, 50.0)));

        let line = scene.in_progress().unwrap();
        assert_eq!(line.points, vec![Vec2::new(50.0, 50.0)]);
        assert!(scene.completed().is_empty());
    }

    #[test]
    fn test_completed_strokes_are_frozen() {
        let mut scene = scene();
        handle_stroke(&mut scene, StrokeEvent::Start(Vec2::new(0.0, 0.0)));
        handle_stroke(&mut scene, StrokeEvent::Move(Vec2::new(5.0, 0.0)));
        handle_stroke(&mut scene, StrokeEvent::End);
        let first = scene.completed()[0].clone();

        // Moves after the stroke ended touch nothing
        handle_stroke(&mut scene, StrokeEvent::Move(Vec2::new(9.0, 9.0)));
        handle_stroke(&mut scene, StrokeEvent::Start(Vec2::new(30.0, 30.0)));
        handle_stroke(&mut scene, StrokeEvent::Move(Vec2::new(40.0, 30.0)));
        handle_stroke(&mut scene, StrokeEvent::End);

        assert_eq!(scene.completed().len(), 2);
        assert_eq!(scene.completed()[0], first);
    }
}
