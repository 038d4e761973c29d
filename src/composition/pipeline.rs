use kurbo::Point;

use crate::color::palette::Palette;
use crate::color::rgba::Rgba8;
use crate::composition::fingerprint::{CompositionFingerprint, fingerprint};
use crate::composition::request::GenerationRequest;
use crate::foundation::core::Dimensions;
use crate::foundation::error::TesseraResult;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::{StyleCtx, generate};

/// Peak edge darkness of the vignette overlay.
pub const VIGNETTE_PEAK_ALPHA: f64 = 0.18;
const VIGNETTE_INNER: f64 = 0.2;
const VIGNETTE_OUTER: f64 = 0.75;

/// A fully resolved artwork: canvas size plus primitives in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    /// Canvas size.
    pub dims: Dimensions,
    /// Background, style output, then the optional vignette.
    pub primitives: Vec<Primitive>,
}

impl Composition {
    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> TesseraResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Stable 128-bit content hash.
    pub fn fingerprint(&self) -> CompositionFingerprint {
        fingerprint(self)
    }
}

/// Resolve `req` into a [`Composition`].
///
/// Fails only for caller mistakes: unknown style, palette index out of range or invalid
/// dimension overrides. Style parameters are clamped, never rejected.
#[tracing::instrument(skip(req), fields(style = %req.style, seed = %req.seed))]
pub fn compose(req: &GenerationRequest) -> TesseraResult<Composition> {
    let style = req.style_id()?;
    let dims = req.dimensions()?;
    let palette = Palette::by_index(req.palette_index)?;
    let params = style.clamp_params(&req.style_params);

    let mut primitives = vec![background(dims, palette, req.dark_background)];

    let ctx = StyleCtx {
        dims,
        palette,
        params: &params,
        use_gradient: req.use_gradient,
    };
    let mut rng = SeededRng::new(&req.seed);
    primitives.extend(generate(style, &ctx, &mut rng));

    if req.use_vignette {
        primitives.push(vignette(dims));
    }

    tracing::debug!(
        width = dims.width,
        height = dims.height,
        primitives = primitives.len(),
        "composed"
    );
    Ok(Composition { dims, primitives })
}

fn background(dims: Dimensions, palette: &Palette, dark: bool) -> Primitive {
    let color = if dark {
        palette.background()
    } else {
        Rgba8::WHITE
    };
    Primitive::fill(
        Geometry::Rect { rect: dims.rect() },
        Paint::solid(color),
    )
}

fn vignette(dims: Dimensions) -> Primitive {
    let center: Point = dims.center();
    Primitive::fill(
        Geometry::Rect { rect: dims.rect() },
        Paint::radial(
            center,
            dims.min_side() * VIGNETTE_INNER,
            center,
            dims.max_side() * VIGNETTE_OUTER,
            &[
                (0.0, Rgba8::BLACK.with_alpha(0.0)),
                (1.0, Rgba8::BLACK.with_alpha(VIGNETTE_PEAK_ALPHA)),
            ],
        ),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/composition/pipeline.rs"]
mod tests;
