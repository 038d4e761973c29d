//! Tessera turns a short text seed into deterministic geometric artwork.
//!
//! A [`GenerationRequest`] names a style, a palette, a seed and an output size. Composition
//! resolves it into an ordered list of declarative [`Primitive`]s; the same request always
//! yields the same list on every platform. Rendering is a separate, optional step:
//!
//! - [`compose`] a request into a [`Composition`] (background, style output, vignette)
//! - rasterize it with a [`RenderBackend`] such as [`CpuBackend`] into a [`FrameRGBA`]
//! - [`encode_png`] the frame, named by [`export_file_name`]
//!
//! [`render_batch`] renders many requests in parallel with results identical to the
//! sequential path.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod composition;
mod foundation;
mod params;
mod random;
mod render;
mod scene;
mod styles;

pub use crate::color::palette::{PALETTE_LEN, PALETTES, Palette, pick_colors};
pub use crate::color::rgba::{Rgba8, hex_to_rgb};
pub use crate::composition::fingerprint::{CompositionFingerprint, fingerprint};
pub use crate::composition::pipeline::{Composition, VIGNETTE_PEAK_ALPHA, compose};
pub use crate::composition::request::GenerationRequest;
pub use crate::foundation::core::{AspectPreset, BezPath, Dimensions, Point, Rect, Vec2};
pub use crate::foundation::error::{TesseraError, TesseraResult};
pub use crate::foundation::math::{Circumcircle, circle_from_three_points};
pub use crate::params::schema::{ParamKind, ParamSpec, ParamValue, StyleParams};
pub use crate::random::prng::{DEFAULT_SEED, SeededRng};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, MAX_SCALE, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::export::{encode_png, export_file_name, render_batch, render_request};
pub use crate::scene::primitive::{Geometry, GradientStop, Paint, Primitive, StrokeStyle};
pub use crate::styles::{StyleCtx, StyleId, generate};
