//! Procedural style generators.
//!
//! Every generator is a pure function of its [`StyleCtx`] and the seeded stream: it returns
//! declarative [`Primitive`]s in paint order and never draws, allocates canvases or logs above
//! `debug`.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::color::palette::Palette;
use crate::color::rgba::Rgba8;
use crate::foundation::core::Dimensions;
use crate::foundation::error::{TesseraError, TesseraResult};
use crate::foundation::math::wrap_index;
use crate::params::schema::{
    CORNER_STEPS_SCHEMA, ISO_CUBES_SCHEMA, ORB_TRAIL_SCHEMA, ParamSpec, ParamValue, StyleParams,
};
use crate::random::prng::SeededRng;
use crate::scene::primitive::Primitive;

mod advanced;
mod basic;
mod flows;
mod geometric;
mod iso_cubes;
mod ml;
mod orb_trail;
mod perspective;
mod x_overlay;

/// Inputs shared by every generator.
#[derive(Clone, Debug)]
pub struct StyleCtx<'a> {
    /// Canvas size.
    pub dims: Dimensions,
    /// Active palette.
    pub palette: &'a Palette,
    /// Clamped style parameters.
    pub params: &'a StyleParams,
    /// Use gradient paints where the style supports them.
    pub use_gradient: bool,
}

impl StyleCtx<'_> {
    pub(crate) fn w(&self) -> f64 {
        self.dims.w()
    }

    pub(crate) fn h(&self) -> f64 {
        self.dims.h()
    }
}

type Generator = fn(&StyleCtx<'_>, &mut SeededRng) -> Vec<Primitive>;

macro_rules! styles {
    ($($variant:ident => $id:literal, $label:literal, $gen:path;)*) => {
        /// Closed set of registered styles.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum StyleId {
            $(
                #[doc = $label]
                $variant,
            )*
        }

        impl StyleId {
            /// Every style in registry order.
            pub const ALL: &'static [StyleId] = &[$(StyleId::$variant),*];

            /// Canonical identifier.
            pub fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)*
                }
            }

            /// Display label.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }

            fn generator(self) -> Generator {
                match self {
                    $(Self::$variant => $gen,)*
                }
            }
        }
    };
}

styles! {
    Concentric => "concentric", "Concentric", basic::concentric;
    Diamonds => "diamonds", "Diamonds", basic::diamonds;
    Orbs => "orbs", "Orbs", basic::orbs;
    Bands => "bands", "Bands", basic::bands;
    Grid => "grid", "Grid", geometric::grid;
    Waves => "waves", "Waves", flows::waves;
    Kites => "kites", "Kites", geometric::kites;
    CornerSteps => "cornerSteps", "Corner Steps", advanced::corner_steps;
    OrbTrail => "orbTrail", "Orb Trail", orb_trail::orb_trail;
    Chevron => "chevron", "Chevron", advanced::chevron;
    RhombusWeave => "rhombusWeave", "Rhombus Weave", advanced::rhombus_weave;
    IsoCubes => "isoCubes", "Iso Cubes", iso_cubes::iso_cubes;
    XOverlay => "xOverlay", "X Overlay", x_overlay::x_overlay;
    FlowRibbons => "flowRibbons", "Flow Ribbons", flows::flow_ribbons;
    Sunburst => "sunburst", "Sunburst", geometric::sunburst;
    DiagStripes => "diagStripes", "Diag Stripes", geometric::diag_stripes;
    ConcentricDiamonds => "concentricDiamonds", "Concentric Diamonds", geometric::concentric_diamonds;
    TransformerAttention => "transformerAttention", "Transformer Attention", ml::transformer_attention;
    LatentSpace => "latentSpace", "Latent Space", ml::latent_space;
    GradientFlow => "gradientFlow", "Gradient Flow", ml::gradient_flow;
    PerspectiveGrid => "perspectiveGrid", "Perspective Grid", perspective::perspective_grid;
}

impl StyleId {
    /// Declared parameters; empty for styles without tunables.
    pub fn schema(self) -> &'static [ParamSpec] {
        match self {
            Self::OrbTrail => &ORB_TRAIL_SCHEMA,
            Self::CornerSteps => &CORNER_STEPS_SCHEMA,
            Self::IsoCubes => &ISO_CUBES_SCHEMA,
            _ => &[],
        }
    }

    /// Clamp caller input against this style's schema.
    pub fn clamp_params(self, raw: &BTreeMap<String, ParamValue>) -> StyleParams {
        StyleParams::clamp(self, raw)
    }
}

impl FromStr for StyleId {
    type Err = TesseraError;

    /// Accepts the canonical id as well as kebab-case and snake_case spellings.
    fn from_str(s: &str) -> TesseraResult<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.id().eq_ignore_ascii_case(&key))
            .ok_or_else(|| TesseraError::unknown_style(s))
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Run the generator for `style`.
pub fn generate(style: StyleId, ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let out = (style.generator())(ctx, rng);
    tracing::debug!(style = style.id(), primitives = out.len(), "style generated");
    out
}

/// `colors[i mod len]`; black for an empty list.
pub(crate) fn cycle(colors: &[Rgba8], i: i64) -> Rgba8 {
    colors
        .get(wrap_index(i, colors.len()))
        .copied()
        .unwrap_or(Rgba8::BLACK)
}

#[cfg(test)]
#[path = "../../tests/unit/styles/mod.rs"]
mod tests;
