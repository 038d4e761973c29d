use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::core::{AspectPreset, Dimensions};
use crate::foundation::error::{TesseraError, TesseraResult};
use crate::params::schema::ParamValue;
use crate::styles::StyleId;

fn default_true() -> bool {
    true
}

/// Everything needed to reproduce one artwork.
///
/// `style` stays a string until composition so an unrecognized id surfaces as
/// [`TesseraError::UnknownStyle`] rather than a deserialization failure.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationRequest {
    /// Style identifier, e.g. `isoCubes`.
    pub style: String,
    /// Index into the built-in palette registry.
    #[serde(default)]
    pub palette_index: usize,
    /// Seed text; empty hashes the default seed for the first PRNG word only.
    #[serde(default)]
    pub seed: String,
    /// Output aspect preset.
    #[serde(default)]
    pub aspect: AspectPreset,
    /// Explicit width; must be given together with `height`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Explicit height; must be given together with `width`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Use gradient paints where the style supports them.
    #[serde(default = "default_true")]
    pub use_gradient: bool,
    /// Paint the background with palette color 0 instead of white.
    #[serde(default = "default_true")]
    pub dark_background: bool,
    /// Darken the canvas edges with a radial overlay.
    #[serde(default)]
    pub use_vignette: bool,
    /// Raw style parameters; clamped against the style schema during composition.
    #[serde(default)]
    pub style_params: BTreeMap<String, ParamValue>,
}

impl GenerationRequest {
    /// Request with default flags: palette 0, portrait, gradients and dark background on.
    pub fn new(style: StyleId, seed: impl Into<String>) -> Self {
        Self {
            style: style.id().to_string(),
            palette_index: 0,
            seed: seed.into(),
            aspect: AspectPreset::default(),
            width: None,
            height: None,
            use_gradient: true,
            dark_background: true,
            use_vignette: false,
            style_params: BTreeMap::new(),
        }
    }

    /// Parse from JSON text.
    pub fn from_json_str(s: &str) -> TesseraResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON request file.
    pub fn from_path(path: &Path) -> TesseraResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            anyhow::Error::new(e).context(format!("read request '{}'", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Resolved style id.
    pub fn style_id(&self) -> TesseraResult<StyleId> {
        self.style.parse()
    }

    /// Canvas size: explicit overrides when both are set, otherwise the aspect preset.
    pub fn dimensions(&self) -> TesseraResult<Dimensions> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Dimensions::new(w, h),
            (None, None) => Ok(self.aspect.dimensions()),
            _ => Err(TesseraError::validation(
                "width and height must be given together",
            )),
        }
    }

    /// Set one raw style parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.style_params.insert(name.into(), value);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/request.rs"]
mod tests;
