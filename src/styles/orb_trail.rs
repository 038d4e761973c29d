use std::f64::consts::{FRAC_1_SQRT_2, TAU};

use kurbo::Point;

use crate::color::rgba::Rgba8;
use crate::foundation::math::circle_from_three_points;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::{StyleCtx, cycle};

/// Equal-radius discs spaced along a circular arc toward the bottom-right, the last one white.
///
/// The arc passes through a start point, a middle point offset from the canvas center along the
/// anti-diagonal normal by `curvature`, and the end point. Collinear anchors yield no discs.
pub(super) fn orb_trail(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let p = ctx.params;
    let count = p.get_usize("count").max(2);
    let gamma = p.get_f64("gamma");
    let radius = ctx.dims.min_side() * p.get_f64("radius_pct");
    let curvature = p.get_f64("curvature");

    let end = Point::new(w * p.get_f64("end_x"), h * p.get_f64("end_y"));
    let (dx, dy) = (FRAC_1_SQRT_2, FRAC_1_SQRT_2);
    let start = if p.get_bool("manual_start") {
        Point::new(w * p.get_f64("start_x"), h * p.get_f64("start_y"))
    } else {
        let len = w.hypot(h) * p.get_f64("trail_scale");
        Point::new(end.x - dx * len, end.y - dy * len)
    };
    let (nx, ny) = (-dy, dx);
    let bend = curvature * ctx.dims.min_side();
    let mid = Point::new(w * 0.5 + nx * bend, h * 0.5 + ny * bend);

    let Some(arc) = circle_from_three_points(start, mid, end) else {
        tracing::debug!(?start, ?mid, ?end, "orb trail anchors are collinear");
        return Vec::new();
    };
    let c = arc.center;
    let angle = |q: Point| (q.y - c.y).atan2(q.x - c.x);
    let a0 = angle(start);
    let mut am = angle(mid);
    let mut a1 = angle(end);
    while am < a0 {
        am += TAU;
    }
    while a1 < a0 {
        a1 += TAU;
    }
    if am > a1 {
        a1 += TAU;
    }

    let accents = rng.shuffle(&ctx.palette.accents());
    (0..count)
        .map(|i| {
            let t = (i as f64 / (count - 1) as f64).powf(gamma);
            let ang = a0 + (a1 - a0) * t;
            let center = Point::new(c.x + arc.radius * ang.cos(), c.y + arc.radius * ang.sin());
            let color = if i + 1 == count {
                Rgba8::WHITE
            } else {
                cycle(&accents, i as i64)
            };
            Primitive::fill(Geometry::circle(center, radius), Paint::solid(color))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/styles/orb_trail.rs"]
mod tests;
