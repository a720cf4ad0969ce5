//! RGB colour with unbounded channels.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// An RGB colour.
///
/// Channels are not clamped by arithmetic; shading accumulates freely and
/// calls [`Color::limit`] once at the end.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Add `s` to every channel and clamp the result to [0, 1].
    pub fn add_scalar(self, s: f64) -> Self {
        let mut result = Color::new(self.red + s, self.green + s, self.blue + s);
        result.limit();
        result
    }

    /// Clamp each channel to [0, 1] in place.
    ///
    /// NaN channels become 0.
    pub fn limit(&mut self) {
        self.red = clamp_channel(self.red);
        self.green = clamp_channel(self.green);
        self.blue = clamp_channel(self.blue);
    }

    /// A clamped copy.
    pub fn limited(mut self) -> Self {
        self.limit();
        self
    }

    /// Sum of the absolute channel differences.
    pub fn distance(&self, other: &Color) -> f64 {
        (self.red - other.red).abs() + (self.green - other.green).abs() + (self.blue - other.blue).abs()
    }

    /// Linear interpolation towards `other` by weight `w`.
    pub fn blend(self, other: Color, w: f64) -> Self {
        self * (1.0 - w) + other * w
    }

    /// Channels quantised to 8 bits by flooring `channel * 255`.
    ///
    /// Only meaningful for limited colours; out-of-range values are
    /// returned as-is.
    pub fn quantized(&self) -> [i64; 3] {
        [
            (self.red * 255.0).floor() as i64,
            (self.green * 255.0).floor() as i64,
            (self.blue * 255.0).floor() as i64,
        ]
    }

    /// Luminance-weighted brightness in [0, 255] for a limited colour.
    pub fn brightness(&self) -> i64 {
        let [r, g, b] = self.quantized();
        (r * 77 + g * 150 + b * 29) >> 8
    }

    /// 8-bit RGBA, saturating out-of-range channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let [r, g, b] = self.quantized();
        [
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
            255,
        ]
    }
}

#[inline]
fn clamp_channel(c: f64) -> f64 {
    if c > 0.0 {
        if c > 1.0 {
            1.0
        } else {
            c
        }
    } else {
        0.0
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, c: Color) -> Color {
        Color::new(self.red + c.red, self.green + c.green, self.blue + c.blue)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, c: Color) {
        *self = *self + c;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, c: Color) -> Color {
        Color::new(self.red - c.red, self.green - c.green, self.blue - c.blue)
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, c: Color) -> Color {
        Color::new(self.red * c.red, self.green * c.green, self.blue * c.blue)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, s: f64) -> Color {
        Color::new(self.red * s, self.green * s, self.blue * s)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, f: f64) -> Color {
        Color::new(self.red / f, self.green / f, self.blue / f)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.quantized();
        write!(f, "rgb({},{},{})", r, g, b)
    }
}
