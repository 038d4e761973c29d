use std::f64::consts::TAU;

use kurbo::Point;

use crate::color::palette::pick_colors;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::{StyleCtx, cycle};

const GLOW_RADIUS: f64 = 25.0;
const CORE_RADIUS: f64 = 8.0;

/// Line grid converging on a jittered focal point, finished with a glowing core.
///
/// Half of the seeds draw radial spokes with concentric rings; the rest draw a perspective
/// lattice of horizontal and vertical lines pulled toward the focal point.
pub(super) fn perspective_grid(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let colors = pick_colors(rng, ctx.palette, 3);
    let focal = Point::new(
        w * (0.45 + rng.next_f64() * 0.1),
        h * (0.45 + rng.next_f64() * 0.1),
    );

    let mut out = if rng.next_f64() > 0.5 {
        radial_lines(ctx, rng, &colors, focal)
    } else {
        perspective_lines(ctx, rng, &colors, focal)
    };

    let core = cycle(&colors, 0);
    out.push(Primitive::fill(
        Geometry::circle(focal, GLOW_RADIUS),
        Paint::radial(
            focal,
            0.0,
            focal,
            GLOW_RADIUS,
            &[
                (0.0, core.with_alpha(0.9)),
                (0.7, core.with_alpha(0.4)),
                (1.0, core.with_alpha(0.0)),
            ],
        ),
    ));
    out.push(Primitive::fill(
        Geometry::circle(focal, CORE_RADIUS),
        Paint::linear_or_solid(
            ctx.use_gradient,
            Point::new(focal.x - CORE_RADIUS, focal.y - CORE_RADIUS),
            Point::new(focal.x + CORE_RADIUS, focal.y + CORE_RADIUS),
            &[core.lighten(0.3), core],
            core,
        ),
    ));
    out
}

fn radial_lines(
    ctx: &StyleCtx<'_>,
    rng: &mut SeededRng,
    colors: &[crate::color::rgba::Rgba8],
    focal: Point,
) -> Vec<Primitive> {
    let spokes = 24 + rng.next_usize(0, 16);
    let rings = 12 + rng.next_usize(0, 8);
    let reach = ctx.dims.max_side() * 0.8;
    let mut out = Vec::with_capacity(spokes + rings);

    for i in 0..spokes {
        let angle = (i as f64 / spokes as f64) * TAU;
        let c = cycle(colors, i as i64);
        let end = Point::new(focal.x + angle.cos() * reach, focal.y + angle.sin() * reach);
        let paint = if ctx.use_gradient {
            Paint::linear_stops(
                focal,
                end,
                &[
                    (0.0, c.with_alpha(0.9)),
                    (0.7, c.with_alpha(0.6)),
                    (1.0, c.with_alpha(0.2)),
                ],
            )
        } else {
            Paint::solid(c.with_alpha(0.7))
        };
        out.push(Primitive::stroke(
            Geometry::polyline([focal, end]),
            paint,
            1.0 + (i % 3) as f64,
            false,
        ));
    }

    for ring in 1..=rings {
        let radius = (ring as f64 / rings as f64) * ctx.dims.min_side() * 0.4 + 20.0;
        let c = cycle(colors, ring as i64 - 1);
        out.push(Primitive::stroke(
            Geometry::circle(focal, radius),
            Paint::solid(c.with_alpha(0.6 - ring as f64 * 0.03)),
            1.0 + (ring / 4) as f64,
            false,
        ));
    }
    out
}

fn perspective_lines(
    ctx: &StyleCtx<'_>,
    rng: &mut SeededRng,
    colors: &[crate::color::rgba::Rgba8],
    focal: Point,
) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let size = 20 + rng.next_int(0, 10);
    let strength = 0.8 + rng.next_f64() * 0.4;
    let mut out = Vec::with_capacity(4 * size as usize);

    let line = |a: Point, b: Point, i: i64, t: f64| {
        let c = cycle(colors, i.abs());
        let paint = if ctx.use_gradient {
            Paint::linear_stops(
                a,
                b,
                &[
                    (0.0, c.with_alpha(0.3)),
                    (0.5, c.with_alpha(0.8)),
                    (1.0, c.with_alpha(0.3)),
                ],
            )
        } else {
            Paint::solid(c.with_alpha(0.7 - t.abs() * 0.3))
        };
        let width = 1.0 + (3 - i.abs()).max(0) as f64;
        Primitive::stroke(Geometry::polyline([a, b]), paint, width, false)
    };

    for i in (-size..=size).filter(|i| *i != 0) {
        let t = i as f64 / size as f64;
        let base_y = h * 0.5 + t * h * 0.4;
        let y = base_y + (focal.y - base_y) * strength * t.abs();
        out.push(line(Point::new(0.0, y), Point::new(w, y), i, t));
    }
    for i in (-size..=size).filter(|i| *i != 0) {
        let t = i as f64 / size as f64;
        let base_x = w * 0.5 + t * w * 0.4;
        let x = base_x + (focal.x - base_x) * strength * t.abs();
        out.push(line(Point::new(x, 0.0), Point::new(x, h), i, t));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/styles/perspective.rs"]
mod tests;
