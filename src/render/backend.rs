use crate::composition::pipeline::Composition;
use crate::foundation::error::{TesseraError, TesseraResult};

/// Largest supported pixel density multiplier.
pub const MAX_SCALE: u32 = 4;

/// A rendered frame, row-major RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Turns a [`Composition`] into pixels.
pub trait RenderBackend {
    /// Rasterize every primitive in paint order.
    fn render(&mut self, comp: &Composition) -> TesseraResult<FrameRGBA>;
}

/// Available backend implementations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// `vello_cpu` software rasterizer.
    #[default]
    Cpu,
}

/// Backend configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// Pixel density multiplier in `1..=4`; the output is `scale` times the canvas size.
    pub scale: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

impl RenderSettings {
    /// Settings with the given density multiplier.
    pub fn with_scale(scale: u32) -> TesseraResult<Self> {
        let settings = Self { scale };
        settings.validate()?;
        Ok(settings)
    }

    /// Reject a scale outside `1..=4`.
    pub fn validate(&self) -> TesseraResult<()> {
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(TesseraError::validation(format!(
                "render scale must be in 1..={MAX_SCALE}, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// Instantiate a backend after validating `settings`.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> TesseraResult<Box<dyn RenderBackend>> {
    settings.validate()?;
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
