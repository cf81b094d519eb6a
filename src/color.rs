use serde::{Deserialize, Serialize};

/// A single cell color. Serialized as an `[r, g, b]` array; out-of-range
/// channels in incoming data are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from externally supplied values, clamping each channel
    /// to 0..=255 independently.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Expands to an opaque RGBA pixel.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[i64; 3]> for Rgb {
    fn from(c: [i64; 3]) -> Self {
        Rgb::clamped(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.channels()
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const PINK: Rgb = Rgb::new(255, 200, 200);
pub const MINT: Rgb = Rgb::new(200, 255, 200);
pub const SKY: Rgb = Rgb::new(200, 200, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);

/// Fill of a freshly created image.
pub const DEFAULT_FILL: Rgb = SKY;

/// Brush colors offered by the palette controls, in activation order.
pub const PRESETS: [(&str, Rgb); 6] = [
    ("black", BLACK),
    ("white", WHITE),
    ("pink", PINK),
    ("mint", MINT),
    ("sky", SKY),
    ("red", RED),
];

/// Looks up the preset bound to palette slot `index` (zero based).
pub fn preset(index: usize) -> Option<Rgb> {
    PRESETS.get(index).map(|&(_, color)| color)
}
