//! Scene-start styles
//!
//! Everything random about a session is rolled once, from one seed, when the
//! scene starts: the ball's size, colour and heading, and the decorative word.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A CSS `hsl()` colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Degrees, [0, 360)
    pub hue: f32,
    /// Percent
    pub saturation: f32,
    /// Percent
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Random hue with fixed saturation and lightness
    pub fn random_hue<R: Rng + ?Sized>(rng: &mut R, saturation: f32, lightness: f32) -> Self {
        Self::new(rng.random_range(0.0..360.0), saturation, lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// How the ball looks and where it heads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallStyle {
    pub radius: f32,
    pub color: Hsl,
    /// Pixels per frame
    pub velocity: Vec2,
}

impl BallStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let half = BALL_SPEED_SPREAD / 2.0;
        Self {
            radius: rng.random_range(BALL_MIN_RADIUS..BALL_MAX_RADIUS),
            color: Hsl::random_hue(rng, BALL_SATURATION, BALL_LIGHTNESS),
            velocity: Vec2::new(rng.random_range(-half..half), rng.random_range(-half..half)),
        }
    }
}

/// The decorative word drawn behind the strokes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStyle {
    pub text: String,
    pub color: Hsl,
    /// Pixels
    pub font_size: u32,
}

impl WordStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let text = WORDS[rng.random_range(0..WORDS.len())];
        Self {
            text: text.to_string(),
            color: Hsl::random_hue(rng, WORD_SATURATION, WORD_LIGHTNESS),
            font_size: WORD_MIN_FONT_SIZE + rng.random_range(0..WORD_FONT_SIZE_SPREAD),
        }
    }

    /// CSS font shorthand, e.g. `bold 64px Arial`
    pub fn font(&self) -> String {
        format!("bold {}px {}", self.font_size, WORD_FONT_FAMILY)
    }
}

/// All scene-start styles, rolled from one seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    pub seed: u64,
    pub ball: BallStyle,
    pub word: WordStyle,
}

impl SceneStyle {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let word = WordStyle::random(&mut rng);
        let ball = BallStyle::random(&mut rng);
        Self { seed, ball, word }
    }
}
