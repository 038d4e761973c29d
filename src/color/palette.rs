use crate::color::rgba::Rgba8;
use crate::foundation::error::{TesseraError, TesseraResult};
use crate::random::prng::SeededRng;

/// Number of colors in every palette.
pub const PALETTE_LEN: usize = 6;

/// A named set of six colors.
///
/// Index 0 is the background reference; indices 1..=5 are accents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    /// Display name.
    pub name: &'static str,
    /// Hex colors, background first.
    pub colors: [&'static str; PALETTE_LEN],
}

macro_rules! palette {
    ($name:literal, [$($c:literal),* $(,)?]) => {
        Palette { name: $name, colors: [$($c),*] }
    };
}

/// Built-in palettes, in registry order.
pub static PALETTES: [Palette; 15] = [
    palette!("Deep Navy Pop", ["#0A0B1A", "#1F3BFF", "#F43F5E", "#FF8A00", "#19E1FF", "#FFFFFF"]),
    palette!("ICLR Classic", ["#0B1026", "#2B3AF6", "#EE3E7A", "#F7B500", "#FF6A00", "#FFFFFF"]),
    palette!("Sunset Blocks", ["#0F0F10", "#2E3192", "#F2467D", "#FF6A00", "#FFB36B", "#FFFFFF"]),
    palette!("Pastel Steps", ["#FFFFFF", "#EAC6D8", "#D9B8A8", "#B69E86", "#8FA5C2", "#E9C2B2"]),
    palette!("Electric", ["#101010", "#0072F5", "#00E7F0", "#FF4ECD", "#FF8C00", "#F5F5F7"]),
    palette!("Citrus", ["#10131B", "#2A6CF6", "#FF3366", "#FFB100", "#00D48A", "#FFFFFF"]),
    palette!("Bauhaus Primary", ["#0D0D0D", "#0057FF", "#FF2B00", "#FFB400", "#00B050", "#FFFFFF"]),
    palette!("Midnight Neon", ["#0B0B1E", "#00E5FF", "#6C63FF", "#FF3EA5", "#FFB800", "#FFFFFF"]),
    palette!("Vaporwave", ["#0F1026", "#7A77FF", "#FF68C6", "#FFA54B", "#4DE6FF", "#FFFFFF"]),
    palette!("Nordic Calm", ["#FFFFFF", "#CFE6FF", "#C9E4D8", "#F9D6D1", "#E5D6FF", "#A8B6C6"]),
    palette!("Retro Pop", ["#111111", "#00C2A8", "#FF4E4E", "#FFC542", "#3D6BFF", "#FFFFFF"]),
    palette!("Aurora", ["#0B1022", "#57D2FF", "#4DE38A", "#FFD166", "#C77DFF", "#FFFFFF"]),
    palette!("Desert Dusk", ["#0E0C0A", "#F2994A", "#F2C94C", "#EB5757", "#6FCF97", "#FFFFFF"]),
    palette!("Moss Forest", ["#0C0F0C", "#6EE7B7", "#34D399", "#93C5FD", "#FBBF24", "#FFFFFF"]),
    palette!("Mono Blues", ["#070B1A", "#143DFF", "#386BFF", "#71A1FF", "#AFC6FF", "#FFFFFF"]),
];

impl Palette {
    /// Palette at `index` in [`PALETTES`].
    pub fn by_index(index: usize) -> TesseraResult<&'static Palette> {
        PALETTES.get(index).ok_or_else(|| {
            TesseraError::validation(format!(
                "palette index {index} out of range (0..{})",
                PALETTES.len()
            ))
        })
    }

    /// Case-insensitive lookup by display name.
    pub fn by_name(name: &str) -> Option<&'static Palette> {
        PALETTES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Parsed color at `i`; out-of-range indices yield black.
    pub fn color(&self, i: usize) -> Rgba8 {
        self.colors
            .get(i)
            .map_or(Rgba8::BLACK, |hex| Rgba8::from_hex(hex))
    }

    /// Background reference color (index 0).
    pub fn background(&self) -> Rgba8 {
        self.color(0)
    }

    /// Accent colors (indices 1..=5).
    pub fn accents(&self) -> Vec<Rgba8> {
        self.colors[1..].iter().map(|hex| Rgba8::from_hex(hex)).collect()
    }
}

/// Up to `n` accents in shuffled order. Consumes one draw per accent.
pub fn pick_colors(rng: &mut SeededRng, palette: &Palette, n: usize) -> Vec<Rgba8> {
    let mut picked = rng.shuffle(&palette.accents());
    picked.truncate(n);
    picked
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
