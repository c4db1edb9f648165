//! RGBA color with floating-point channels
//!
//! Channels are nominally in `[0, 1]` but arithmetic does not enforce that;
//! only [`Color::clamp`] and the packing in [`Color::to_rgba`] do.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Unpack a `0xRRGGBBAA` pixel
    pub fn from_rgba(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Copy with every channel clamped to `[0, 1]`. NaN channels become 1.
    pub fn clamp(&self) -> Self {
        Self::new(
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b),
            clamp_channel(self.a),
        )
    }

    /// Quantize a `[0, 1]` channel to a byte, truncating toward zero.
    ///
    /// No clamping happens here. The float-to-int cast saturates, so inputs
    /// above 1 give 255 and negative or NaN inputs give 0.
    pub fn to_byte(v: f32) -> u8 {
        (v * 255.0) as u8
    }

    /// Pack as `R << 24 | G << 16 | B << 8 | A`, clamping first
    pub fn to_rgba(&self) -> u32 {
        let c = self.clamp();
        u32::from_be_bytes([
            Self::to_byte(c.r),
            Self::to_byte(c.g),
            Self::to_byte(c.b),
            Self::to_byte(c.a),
        ])
    }
}

// `min`/`max` return the non-NaN operand, so NaN lands on the upper bound
fn clamp_channel(v: f32) -> f32 {
    0.0_f32.max(1.0_f32.min(v))
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color::new(
            self.r + other.r,
            self.g + other.g,
            self.b + other.b,
            self.a + other.a,
        )
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, other: Color) -> Color {
        Color::new(
            self.r - other.r,
            self.g - other.g,
            self.b - other.b,
            self.a - other.a,
        )
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, scalar: f32) -> Color {
        Color::new(
            self.r * scalar,
            self.g * scalar,
            self.b * scalar,
            self.a * scalar,
        )
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, c: Color) -> Color {
        c * self
    }
}

impl Div<f32> for Color {
    type Output = Color;

    fn div(self, scalar: f32) -> Color {
        Color::new(
            self.r / scalar,
            self.g / scalar,
            self.b / scalar,
            self.a / scalar,
        )
    }
}

impl Neg for Color {
    type Output = Color;

    fn neg(self) -> Color {
        Color::new(-self.r, -self.g, -self.b, -self.a)
    }
}

impl AbsDiffEq for Color {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.a.abs_diff_eq(&other.a, epsilon)
    }
}

impl RelativeEq for Color {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.a.relative_eq(&other.a, epsilon, max_relative)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_arithmetic_is_unclamped() {
        let c = Color::new(0.8, 0.5, 0.2, 1.0) + Color::new(0.4, 0.5, 0.0, 1.0);
        assert_abs_diff_eq!(c, Color::new(1.2, 1.0, 0.2, 2.0), epsilon = 1e-6);

        let d = Color::new(0.1, 0.2, 0.3, 0.4) - Color::new(0.5, 0.5, 0.5, 0.5);
        assert!(d.r < 0.0 && d.a < 0.0);

        assert_eq!(Color::WHITE * 2.0, Color::new(2.0, 2.0, 2.0, 2.0));
        assert_eq!(0.5 * Color::WHITE, Color::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(Color::WHITE / 4.0, Color::new(0.25, 0.25, 0.25, 0.25));
        assert_eq!(-Color::RED, Color::new(-1.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_clamp() {
        let c = Color::new(1.5, -0.2, 0.5, 1.0);
        assert_eq!(c.clamp(), Color::new(1.0, 0.0, 0.5, 1.0));
        // receiver is unchanged
        assert_eq!(c.r, 1.5);
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).to_rgba(), 0xFF0000FF);
        assert_eq!(Color::BLUE.to_rgba(), 0x0000FFFF);
        assert_eq!(Color::new(0.0, 0.0, 0.0, 0.0).to_rgba(), 0);
        // 0.5 * 255 = 127.5 truncates to 0x7F
        assert_eq!(Color::new(0.5, 0.5, 0.5, 0.5).to_rgba(), 0x7F7F7F7F);
    }

    #[test]
    fn test_to_rgba_clamps_out_of_range() {
        assert_eq!(Color::new(3.0, -1.0, 2.0, 1.0).to_rgba(), 0xFF00FFFF);
    }

    #[test]
    fn test_clamp_maps_nan_to_one() {
        // 0/0 in the red channel, 1/0 elsewhere
        let c = Color::new(0.0, 1.0, 1.0, 1.0) / 0.0;
        assert!(c.r.is_nan());

        let clamped = c.clamp();
        assert_eq!(clamped, Color::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(c.to_rgba(), 0xFFFFFFFF);
        assert_eq!(Color::new(f32::NAN, 0.0, 0.0, 0.0).to_rgba(), 0xFF000000);
    }

    #[test]
    fn test_to_byte_saturates() {
        assert_eq!(Color::to_byte(1.0), 255);
        assert_eq!(Color::to_byte(0.0), 0);
        assert_eq!(Color::to_byte(2.0), 255);
        assert_eq!(Color::to_byte(-1.0), 0);
        assert_eq!(Color::to_byte(f32::NAN), 0);
    }

    #[test]
    fn test_from_rgba() {
        assert_eq!(Color::from_rgba(0xFF0000FF), Color::RED);
        assert_eq!(Color::from_rgba(0x00FF00FF), Color::GREEN);
        assert_eq!(Color::from_rgba(0xFFFFFF00), Color::new(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(1.0, 0.5, 0.0, 1.0).to_string(), "(1, 0.5, 0, 1)");
    }
}
