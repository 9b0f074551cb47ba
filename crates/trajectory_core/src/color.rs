//! Color Assigner
//!
//! Maps a class index to a display color. The mapping is a pure function of
//! the index, so a legend entry and its bars always agree across frames.

use std::fmt;

/// Hand-picked colors for the first ten classes.
pub const PALETTE: [&str; 10] = [
    "#FF0000", "#FF7F00", "#E8E857", "#7FFF00", "#00FF00", "#00FF7F", "#00FFFF", "#007FFF",
    "#0000FF", "#990000",
];

/// Stroke color of the single loss line.
pub const LOSS_LINE_COLOR: ClassColor = ClassColor::Palette("#8884D8");

const HUE_STEP: u32 = 40;
const SATURATION: u8 = 70;
const LIGHTNESS: u8 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassColor {
    /// `#RRGGBB` literal.
    Palette(&'static str),
    /// Hue in degrees, saturation and lightness in percent.
    Hsl {
        hue: u32,
        saturation: u8,
        lightness: u8,
    },
}

/// Color for the class at `class_index`.
///
/// Indices past the palette get a generated HSL color whose hue advances by
/// 40 degrees per class (mod 360).
pub fn color_for(class_index: usize) -> ClassColor {
    match PALETTE.get(class_index) {
        Some(hex) => ClassColor::Palette(*hex),
        None => ClassColor::Hsl {
            // Reduce first so huge indices cannot overflow the multiply.
            hue: ((class_index % 360) as u32 * HUE_STEP) % 360,
            saturation: SATURATION,
            lightness: LIGHTNESS,
        },
    }
}

impl ClassColor {
    /// sRGB bytes for drawing backends.
    pub fn to_rgb(&self) -> [u8; 3] {
        match *self {
            ClassColor::Palette(hex) => parse_hex(hex),
            ClassColor::Hsl {
                hue,
                saturation,
                lightness,
            } => hsl_to_rgb(hue, saturation, lightness),
        }
    }
}

impl fmt::Display for ClassColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassColor::Palette(hex) => f.write_str(hex),
            ClassColor::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
        }
    }
}

fn parse_hex(hex: &str) -> [u8; 3] {
    let digits = hex.trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    [channel(0), channel(2), channel(4)]
}

fn hsl_to_rgb(hue: u32, saturation: u8, lightness: u8) -> [u8; 3] {
    let h = (hue % 360) as f64 / 60.0;
    let s = f64::from(saturation.min(100)) / 100.0;
    let l = f64::from(lightness.min(100)) / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_byte(r), to_byte(g), to_byte(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_range() {
        for (k, hex) in PALETTE.iter().enumerate() {
            assert_eq!(color_for(k), ClassColor::Palette(*hex));
        }
        assert_eq!(color_for(0).to_string(), "#FF0000");
        assert_eq!(color_for(9).to_string(), "#990000");
    }

    #[test]
    fn test_generated_hue() {
        for k in [10usize, 11, 17, 18, 100, 12345] {
            match color_for(k) {
                ClassColor::Hsl {
                    hue,
                    saturation,
                    lightness,
                } => {
                    assert_eq!(hue as usize, (k * 40) % 360);
                    assert_eq!((saturation, lightness), (70, 50));
                }
                other => panic!("expected HSL for {k}, got {other:?}"),
            }
        }
        assert_eq!(color_for(10).to_string(), "hsl(40, 70%, 50%)");
        assert_eq!(color_for(18).to_string(), "hsl(0, 70%, 50%)");
    }

    #[test]
    fn test_deterministic() {
        for k in 0..64 {
            assert_eq!(color_for(k), color_for(k));
        }
        // No overflow panic at the top of the range.
        let _ = color_for(usize::MAX);
    }

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(color_for(0).to_rgb(), [255, 0, 0]);
        assert_eq!(color_for(2).to_rgb(), [0xE8, 0xE8, 0x57]);
        assert_eq!(LOSS_LINE_COLOR.to_rgb(), [0x88, 0x84, 0xD8]);
        // hsl(0, 70%, 50%) -> rgb(217, 38, 38)
        assert_eq!(color_for(18).to_rgb(), [217, 38, 38]);
        // hsl(120, 70%, 50%) -> rgb(38, 217, 38)
        assert_eq!(color_for(12).to_rgb(), [38, 217, 38]);
    }
}
