pub use kurbo::Point;

/// Straight (non-premultiplied) RGBA color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Color from explicit channels.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a replaced alpha channel.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale each RGB channel by `brightness`; negative brightness clamps
    /// to black, values above 1 saturate.
    pub fn scaled_rgb(self, brightness: f32) -> Self {
        fn scale(c: u8, brightness: f32) -> u8 {
            (f32::from(c) * brightness).clamp(0.0, 255.0) as u8
        }

        Self {
            r: scale(self.r, brightness),
            g: scale(self.g, brightness),
            b: scale(self.b, brightness),
            a: self.a,
        }
    }

    /// Replace the alpha channel with `255 * brightness`, clamped to the
    /// channel range.
    pub fn with_brightness_alpha(self, brightness: f32) -> Self {
        Self {
            a: (255.0 * brightness).clamp(0.0, 255.0) as u8,
            ..self
        }
    }
}

/// Ordered effect color palette.
///
/// Spawned shapes cycle round-robin through the palette. Lookups are total:
/// an empty palette yields opaque white.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette(Vec<Rgba8>);

impl Palette {
    /// Palette over the given colors, in order.
    pub fn new(colors: Vec<Rgba8>) -> Self {
        Self(colors)
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at `idx`, wrapping modulo the palette size; white when empty.
    pub fn color(&self, idx: usize) -> Rgba8 {
        if self.0.is_empty() {
            return Rgba8::WHITE;
        }
        self.0[idx % self.0.len()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
