use kurbo::Point;

use crate::color::rgba::Rgba8;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::StyleCtx;

const FALLBACK: Rgba8 = Rgba8::rgb(0xFF, 0x6A, 0x00);

/// Six triangles forming an X; the central diamond is left unpainted.
///
/// Ignores the random stream and the gradient toggle: side triangles use the first four accents
/// in order and the top and bottom triangles always blend their neighbours horizontally.
pub(super) fn x_overlay(ctx: &StyleCtx<'_>, _rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let Point { x: cx, y: cy } = ctx.dims.center();
    let accents = ctx.palette.accents();
    let colors: [Rgba8; 4] =
        std::array::from_fn(|i| accents.get(i % accents.len().max(1)).copied().unwrap_or(FALLBACK));

    let left_mid = Point::new(0.0, cy);
    let right_mid = Point::new(w, cy);
    let top_q = Point::new(cx, h / 4.0);
    let bottom_q = Point::new(cx, 3.0 * h / 4.0);
    let tl = Point::new(0.0, 0.0);
    let tr = Point::new(w, 0.0);
    let bl = Point::new(0.0, h);
    let br = Point::new(w, h);

    let tri = |pts: [Point; 3], paint: Paint| Primitive::fill(Geometry::polygon(pts), paint);
    vec![
        tri([tl, left_mid, top_q], Paint::solid(colors[0])),
        tri([left_mid, bl, bottom_q], Paint::solid(colors[1])),
        tri([tr, right_mid, top_q], Paint::solid(colors[2])),
        tri([right_mid, br, bottom_q], Paint::solid(colors[3])),
        tri([tl, tr, top_q], Paint::linear(tl, tr, &[colors[0], colors[2]])),
        tri([bl, br, bottom_q], Paint::linear(bl, br, &[colors[1], colors[3]])),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/styles/x_overlay.rs"]
mod tests;
