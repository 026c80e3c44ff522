//! 8-bit RGBA color carried by emitters and particles.

use glam::Vec4;

/// RGBA color with 8-bit channels.
///
/// Particles inherit the emitter's color at spawn time. Renderers receive
/// colors as normalized [`Vec4`] values via [`Color::to_vec4`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Default particle tint of the settings panel.
    pub const AZURE: Color = Color::rgba(0, 128, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Normalized `(r, g, b, a)` in `[0, 1]`.
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }

    /// Normalized color with alpha multiplied by `factor` (clamped to `[0, 1]`).
    pub fn to_vec4_faded(self, factor: f32) -> Vec4 {
        let mut c = self.to_vec4();
        c.w *= factor.clamp(0.0, 1.0);
        c
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}
