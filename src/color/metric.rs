//! Perceptual color similarity through CIE Lab distance
//!
//! Colors are scaled to the 0-255 range, mapped to CIE XYZ with the linear
//! sRGB matrix and then to Lab against the D65 reference white. Similarity is
//! `(1 - deltaE) * 100`, which reaches 100 for identical colors and drops
//! below zero as soon as deltaE exceeds 1. Strongly negative scores are
//! normal for unrelated colors.

/// D65 reference white X component
pub const REFERENCE_X: f64 = 95.047;
/// D65 reference white Y component
pub const REFERENCE_Y: f64 = 100.0;
/// D65 reference white Z component
pub const REFERENCE_Z: f64 = 108.883;

const CHANNEL_SCALE: f64 = 255.0;
const COMPANDING_THRESHOLD: f64 = 6.0 / 29.0;
const LINEAR_SLOPE: f64 = 841.0 / 108.0;
const LINEAR_OFFSET: f64 = 4.0 / 29.0;

/// RGB color with channels normalized to 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
}

/// CIE L*a*b* triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Color {
    /// Create a color from normalized channels
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from 8-bit channels
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        let [red, green, blue] = rgb.map(|channel| f64::from(channel) / CHANNEL_SCALE);
        Self { red, green, blue }
    }

    /// Convert to CIE Lab through XYZ with the D65 white point
    pub fn to_lab(self) -> Lab {
        let red = self.red * CHANNEL_SCALE;
        let green = self.green * CHANNEL_SCALE;
        let blue = self.blue * CHANNEL_SCALE;

        let x = 0.412_456_4 * red + 0.357_576_1 * green + 0.180_437_5 * blue;
        let y = 0.212_672_9 * red + 0.715_152_2 * green + 0.072_175_0 * blue;
        let z = 0.019_333_9 * red + 0.119_192_0 * green + 0.950_304_1 * blue;

        let fx = compand(x / REFERENCE_X);
        let fy = compand(y / REFERENCE_Y);
        let fz = compand(z / REFERENCE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

// Cube root above 6/29, linear segment below, with these exact constants
fn compand(t: f64) -> f64 {
    if t > COMPANDING_THRESHOLD {
        t.cbrt()
    } else {
        t.mul_add(LINEAR_SLOPE, LINEAR_OFFSET)
    }
}

/// Euclidean distance between the Lab representations of two colors
pub fn delta_e(first: Color, second: Color) -> f64 {
    let lab1 = first.to_lab();
    let lab2 = second.to_lab();

    let delta_l = lab2.l - lab1.l;
    let delta_a = lab2.a - lab1.a;
    let delta_b = lab2.b - lab1.b;

    (delta_l * delta_l + delta_a * delta_a + delta_b * delta_b).sqrt()
}

/// Similarity score of two colors, 100 for identical colors
///
/// Unbounded below; anything further apart than deltaE 0.03 scores under
/// the default accuracy factor of 97.
pub fn similarity(first: Color, second: Color) -> f64 {
    (1.0 - delta_e(first, second)) * 100.0
}
