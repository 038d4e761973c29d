//! Gradient rasterization.
//!
//! Gradients are baked into a premultiplied RGBA8 tile covering the device-pixel bounds of
//! the shape they fill; the CPU backend then paints the tile as an image. Linear gradients
//! project onto the start/end segment. Radial gradients follow the two-circle cone model:
//! a pixel takes the color of the largest interpolation parameter whose circle passes
//! through it with a non-negative radius. Both pad outside `[0, 1]`.
//!
//! `vello_cpu`'s native gradient paints are not used. The output must match canvas rules
//! that its encoder does not guarantee: a zero-length linear segment or two identical circles
//! paint nothing, and stops blend in premultiplied space. Baking keeps that pixel math free of
//! the renderer, which is what the tests in this module check.

use kurbo::{Point, Rect, Vec2};

use crate::color::rgba::Rgba8;
use crate::scene::primitive::{GradientStop, Paint};

const DEGENERATE_EPSILON: f64 = 1e-9;

/// Integer pixel rectangle in device space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelBox {
    pub(crate) x0: u32,
    pub(crate) y0: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl PixelBox {
    /// Device pixels touched by `bounds` (user units) at `scale`, clipped to the target.
    /// `None` when nothing of `bounds` is visible.
    pub(crate) fn covering(
        bounds: Rect,
        scale: f64,
        target_width: u32,
        target_height: u32,
    ) -> Option<Self> {
        if !bounds.is_finite() {
            return None;
        }
        let x0 = (bounds.x0 * scale).floor().max(0.0);
        let y0 = (bounds.y0 * scale).floor().max(0.0);
        let x1 = (bounds.x1 * scale).ceil().min(f64::from(target_width));
        let y1 = (bounds.y1 * scale).ceil().min(f64::from(target_height));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self {
            x0: x0 as u32,
            y0: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}

/// Premultiplied RGBA8 bytes for `paint` over `area`, sampled at pixel centers.
///
/// Solid paints fill the whole tile with their color.
pub(crate) fn bake(paint: &Paint, area: PixelBox, scale: f64) -> Vec<u8> {
    let mut out = Vec::with_capacity(area.width as usize * area.height as usize * 4);
    for j in 0..area.height {
        for i in 0..area.width {
            let p = Point::new(
                (f64::from(area.x0 + i) + 0.5) / scale,
                (f64::from(area.y0 + j) + 0.5) / scale,
            );
            let rgba = color_at(paint, p).unwrap_or([0.0; 4]);
            out.extend(rgba.map(to_u8));
        }
    }
    out
}

/// Premultiplied color of `paint` at user-space point `p`, `None` where nothing is painted.
pub(crate) fn color_at(paint: &Paint, p: Point) -> Option<[f64; 4]> {
    match paint {
        Paint::Solid { color } => Some(premul(*color)),
        Paint::Linear { start, end, stops } => {
            let t = linear_param(p, *start, *end)?;
            sample_stops(stops, t)
        }
        Paint::Radial {
            start,
            start_radius,
            end,
            end_radius,
            stops,
        } => {
            let t = radial_param(p, *start, *start_radius, *end, *end_radius)?;
            sample_stops(stops, t)
        }
    }
}

/// Projection of `p` onto `start -> end`; `None` for a zero-length segment.
pub(crate) fn linear_param(p: Point, start: Point, end: Point) -> Option<f64> {
    let d = end - start;
    let len2 = d.hypot2();
    if len2 < DEGENERATE_EPSILON {
        return None;
    }
    Some((p - start).dot(d) / len2)
}

/// Largest `w` with `|p - c(w)| = r(w)` and `r(w) >= 0`, where `c` and `r` interpolate
/// linearly between the two circles.
pub(crate) fn radial_param(p: Point, c0: Point, r0: f64, c1: Point, r1: f64) -> Option<f64> {
    let dc: Vec2 = c1 - c0;
    let dr = r1 - r0;
    if dc.hypot2() < DEGENERATE_EPSILON && dr.abs() < DEGENERATE_EPSILON {
        return None;
    }
    let pd = p - c0;
    let radius_ok = |w: f64| r0 + w * dr >= 0.0;

    // a*w^2 - 2*b*w + c = 0
    let a = dc.hypot2() - dr * dr;
    let b = pd.dot(dc) + r0 * dr;
    let c = pd.hypot2() - r0 * r0;

    if a.abs() < DEGENERATE_EPSILON {
        if b.abs() < DEGENERATE_EPSILON {
            return None;
        }
        let w = c / (2.0 * b);
        return radius_ok(w).then_some(w);
    }

    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let w1 = (b + root) / a;
    let w2 = (b - root) / a;
    let (hi, lo) = if w1 >= w2 { (w1, w2) } else { (w2, w1) };
    if radius_ok(hi) {
        Some(hi)
    } else if radius_ok(lo) {
        Some(lo)
    } else {
        None
    }
}

/// Premultiplied color at `t`, padded to the end stops and interpolated in premultiplied
/// space between neighbours.
pub(crate) fn sample_stops(stops: &[GradientStop], t: f64) -> Option<[f64; 4]> {
    let first = stops.first()?;
    let last = stops.last()?;
    if t <= first.offset {
        return Some(premul(first.color));
    }
    if t >= last.offset {
        return Some(premul(last.color));
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t > b.offset {
            continue;
        }
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return Some(premul(b.color));
        }
        let f = ((t - a.offset) / span).clamp(0.0, 1.0);
        let (ca, cb) = (premul(a.color), premul(b.color));
        return Some(std::array::from_fn(|k| ca[k] + (cb[k] - ca[k]) * f));
    }
    Some(premul(last.color))
}

fn premul(c: Rgba8) -> [f64; 4] {
    let a = c.alpha_f64();
    [
        f64::from(c.r) / 255.0 * a,
        f64::from(c.g) / 255.0 * a,
        f64::from(c.b) / 255.0 * a,
        a,
    ]
}

fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
