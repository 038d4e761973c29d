use std::str::FromStr;

use crate::foundation::error::{TesseraError, TesseraResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Largest accepted side, the raster limit of the CPU backend at scale 1.
    pub const MAX_SIDE: u32 = u16::MAX as u32;

    /// Validated constructor; both sides must be in `1..=MAX_SIDE`.
    pub fn new(width: u32, height: u32) -> TesseraResult<Self> {
        if width == 0 || height == 0 {
            return Err(TesseraError::validation(
                "dimensions width/height must be > 0",
            ));
        }
        if width > Self::MAX_SIDE || height > Self::MAX_SIDE {
            return Err(TesseraError::validation(format!(
                "dimensions {width}x{height} exceed {} per side",
                Self::MAX_SIDE
            )));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Shorter side.
    pub fn min_side(self) -> f64 {
        self.w().min(self.h())
    }

    /// Longer side.
    pub fn max_side(self) -> f64 {
        self.w().max(self.h())
    }

    /// Canvas center.
    pub fn center(self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }

    /// Full-canvas rectangle at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }
}

/// The fixed set of output aspect presets.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AspectPreset {
    /// 1200x1200.
    Square,
    /// 1920x1080.
    Landscape,
    /// 1200x1600.
    #[default]
    Portrait,
}

impl AspectPreset {
    /// Every preset in display order.
    pub const ALL: [AspectPreset; 3] = [Self::Square, Self::Landscape, Self::Portrait];

    /// Stable identifier used in requests and file names.
    pub fn id(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }

    /// Human-readable ratio.
    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "3:4",
        }
    }

    /// Pixel size of the preset.
    pub fn dimensions(self) -> Dimensions {
        match self {
            Self::Square => Dimensions {
                width: 1200,
                height: 1200,
            },
            Self::Landscape => Dimensions {
                width: 1920,
                height: 1080,
            },
            Self::Portrait => Dimensions {
                width: 1200,
                height: 1600,
            },
        }
    }
}

impl FromStr for AspectPreset {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TesseraError::validation(format!("unknown aspect preset '{s}'")))
    }
}

impl std::fmt::Display for AspectPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
