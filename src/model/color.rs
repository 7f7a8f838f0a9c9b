use serde::{Deserialize, Serialize};

/// Display tint with linear channels in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Channel distance below which two colors count as the same tint.
const COLOR_EPSILON: f32 = 1e-3;

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `target`. `t` is clamped to `[0, 1]`.
    pub fn lerp(self, target: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
        }
    }

    pub fn approx_eq(self, other: Rgb) -> bool {
        (self.r - other.r).abs() < COLOR_EPSILON
            && (self.g - other.g).abs() < COLOR_EPSILON
            && (self.b - other.b).abs() < COLOR_EPSILON
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}
