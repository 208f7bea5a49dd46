//! Vertex colors and the scalar-to-color ramp used to tint displacement.

use serde::{Deserialize, Serialize};

/// Linear RGBA color.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Neutral color for undisplaced meshes.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Linear blend: `t = 0.0` returns `self`, `t = 1.0` returns `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Components as `[r, g, b, a]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Maps a scalar in `[0, 1]` to a color.
pub trait ColorRamp: Send + Sync {
    /// Color at `t`. Callers pass `t` in `[0, 1]`.
    fn evaluate(&self, t: f32) -> Color;
}

/// One key of a [`Gradient`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position of the key in `[0, 1]`.
    pub t: f32,
    /// Color at the key.
    pub color: Color,
}

impl GradientStop {
    /// Create a key.
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Piecewise-linear color ramp over sorted keys.
///
/// Values before the first key or after the last key take the end colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<GradientStop>", into = "Vec<GradientStop>")]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Build a gradient, sorting keys by position.
    pub fn new(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { stops }
    }

    /// Sorted keys.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Returns `true` if the gradient has no keys.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Ocean-to-snow ramp.
    pub fn earth() -> Self {
        Self::new(vec![
            GradientStop::new(0.0, Color::rgb(0.0, 0.0, 0.5)),
            GradientStop::new(0.1, Color::rgb(0.12, 0.31, 0.78)),
            GradientStop::new(0.2, Color::rgb(0.86, 0.78, 0.51)),
            GradientStop::new(0.4, Color::rgb(0.12, 0.63, 0.12)),
            GradientStop::new(0.7, Color::rgb(0.55, 0.4, 0.25)),
            GradientStop::new(1.0, Color::WHITE),
        ])
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::earth()
    }
}

impl From<Vec<GradientStop>> for Gradient {
    fn from(stops: Vec<GradientStop>) -> Self {
        Self::new(stops)
    }
}

impl From<Gradient> for Vec<GradientStop> {
    fn from(gradient: Gradient) -> Self {
        gradient.stops
    }
}

impl ColorRamp for Gradient {
    fn evaluate(&self, t: f32) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::WHITE;
        };
        if t.is_nan() || t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        // First key strictly after t; the window is [upper - 1, upper].
        let upper = self.stops.partition_point(|stop| stop.t <= t);
        let lo = self.stops[upper - 1];
        let hi = self.stops[upper];
        let span = hi.t - lo.t;
        if span <= 0.0 {
            return hi.color;
        }
        lo.color.lerp(hi.color, (t - lo.t) / span)
    }
}
