//! Draw passes for scene elements

use super::{LineCap, LineJoin, LineStyle, Surface, TextAlign, TextBaseline, TextStyle};
use crate::consts::{STROKE_WIDTH, WORD_HEIGHT_FRACTION};
use crate::sim::{Ball, Polyline};
use crate::style::WordStyle;

/// Stroke settings for a user-drawn line
pub fn stroke_style(color: &str) -> LineStyle {
    LineStyle {
        color: color.to_string(),
        width: STROKE_WIDTH,
        cap: LineCap::Round,
        join: LineJoin::Round,
    }
}

/// Draw the decorative word, centred horizontally near the top
pub fn draw_word(surface: &mut impl Surface, word: &WordStyle) {
    let (width, height) = surface.size();
    let style = TextStyle {
        font: word.font(),
        color: word.color.to_string(),
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };
    surface.fill_text(&word.text, width / 2.0, height * WORD_HEIGHT_FRACTION, &style);
}

/// Draw a stroke as connected segments. Single points draw nothing.
pub fn draw_polyline(surface: &mut impl Surface, line: &Polyline) {
    let Some((first, rest)) = line.points.split_first() else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    surface.begin_path();
    surface.move_to(first.x as f64, first.y as f64);
    for p in rest {
        surface.line_to(p.x as f64, p.y as f64);
    }
    surface.stroke(&stroke_style(&line.color));
}

/// Draw the ball as a filled circle
pub fn draw_ball(surface: &mut impl Surface, ball: &Ball) {
    surface.fill_circle(
        ball.pos.x as f64,
        ball.pos.y as f64,
        ball.radius() as f64,
        &ball.color().to_string(),
    );
}
