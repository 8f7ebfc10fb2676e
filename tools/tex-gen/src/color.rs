//! RGBA colors with normalized components
//!
//! Generators describe their palettes with `f32` channels in `[0, 1]`; the
//! canvas stores 8-bit channels, so every write goes through [`Color::to_rgba8`].

/// An RGBA color with components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create a color from all four components
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Gray level with the given opacity
    pub const fn gray(level: f32, alpha: f32) -> Self {
        Self::rgba(level, level, level, alpha)
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, alpha)
    }

    /// Quantize to 8-bit channels, rounding to nearest
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Expand 8-bit channels back to `[0, 1]`
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        let f = |v: u8| v as f32 / 255.0;
        Self::rgba(f(rgba[0]), f(rgba[1]), f(rgba[2]), f(rgba[3]))
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_rgba8(rgba)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_rgba8()
    }
}

#[inline]
pub(crate) fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba8_rounds_to_nearest() {
        assert_eq!(Color::rgb(0.73, 0.0, 1.0).to_rgba8(), [186, 0, 255, 255]);
        assert_eq!(Color::gray(0.5, 0.0).to_rgba8(), [128, 128, 128, 0]);
    }

    #[test]
    fn test_out_of_range_components_clamp() {
        assert_eq!(Color::rgba(-1.0, 2.0, 0.0, 1.5).to_rgba8(), [0, 255, 0, 255]);
    }

    #[test]
    fn test_rgba8_conversion_is_stable() {
        let rgba = [10, 200, 37, 128];
        assert_eq!(Color::from_rgba8(rgba).to_rgba8(), rgba);
        let back: [u8; 4] = Color::from(rgba).into();
        assert_eq!(back, rgba);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Color::rgb(0.2, 0.4, 0.6).with_alpha(0.25);
        assert_eq!((c.r, c.g, c.b, c.a), (0.2, 0.4, 0.6, 0.25));
    }
}
