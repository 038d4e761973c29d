use std::f64::consts::{PI, TAU};

use kurbo::Point;

use crate::color::palette::pick_colors;
use crate::color::rgba::Rgba8;
use crate::foundation::math::rotate_about;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::{StyleCtx, cycle};

const GRID_MARGIN: f64 = 40.0;
const SUNBURST_REACH: f64 = 0.65;
const STRIPE_ANGLE: f64 = -PI / 4.0;
/// Share of each stripe's pitch that is painted; the remainder is the rhythm gap.
const STRIPE_FILL: f64 = 0.9;
const KITE_DX: f64 = 0.28;
const KITE_DY: f64 = 0.22;

/// Checkerboard of squares alternating with circles or triangles.
///
/// Not a full tiling: the cell block is centered inside a [`GRID_MARGIN`] border, squares are
/// inset 5% of the cell, and circles and triangles leave their cell corners open. The
/// background shows through the border and along every cell boundary.
pub(super) fn grid(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let colors = pick_colors(rng, ctx.palette, 8);
    let cell = ctx.dims.min_side() / 12.0;
    let cols = ((w - GRID_MARGIN * 2.0) / cell).floor().max(0.0) as i64;
    let rows = ((h - GRID_MARGIN * 2.0) / cell).floor().max(0.0) as i64;
    let off_x = (w - cols as f64 * cell) / 2.0;
    let off_y = (h - rows as f64 * cell) / 2.0;
    let size = cell * 0.85;

    let mut out = Vec::with_capacity((rows * cols).max(0) as usize);
    for r in 0..rows {
        for c in 0..cols {
            let x = off_x + c as f64 * cell;
            let y = off_y + r as f64 * cell;
            let color = cycle(&colors, r * cols + c);
            let g0 = Point::new(x, y);
            let g1 = Point::new(x + size, y + size);

            if (r + c) % 2 == 0 {
                out.push(Primitive::fill(
                    Geometry::rect(x + cell * 0.05, y + cell * 0.05, size, size),
                    Paint::linear_or_solid(
                        ctx.use_gradient,
                        g0,
                        g1,
                        &[color, color.with_alpha(0.7)],
                        color,
                    ),
                ));
                continue;
            }

            let paint = Paint::linear_or_solid(
                ctx.use_gradient,
                g0,
                g1,
                &[color.lighten(0.2), color],
                color,
            );
            let geometry = if rng.next_int(0, 2) == 0 {
                Geometry::circle(Point::new(x + cell / 2.0, y + cell / 2.0), size / 2.0)
            } else {
                Geometry::polygon([
                    Point::new(x + cell / 2.0, y + cell * 0.1),
                    Point::new(x + cell * 0.9, y + cell * 0.9),
                    Point::new(x + cell * 0.1, y + cell * 0.9),
                ])
            };
            out.push(Primitive::fill(geometry, paint));
        }
    }
    out
}

/// Radial wedges from the center with a random rotation.
pub(super) fn sunburst(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let center = ctx.dims.center();
    let radius = ctx.w().hypot(ctx.h()) * SUNBURST_REACH;
    let wedges = 14 + rng.next_usize(0, 10);
    let colors = pick_colors(rng, ctx.palette, wedges.min(6));
    let rot = rng.next_f64() * PI;
    let at = |a: f64| Point::new(center.x + a.cos() * radius, center.y + a.sin() * radius);

    (0..wedges)
        .map(|i| {
            let a0 = rot + (i as f64 / wedges as f64) * TAU;
            let a1 = rot + ((i + 1) as f64 / wedges as f64) * TAU;
            let c = cycle(&colors, i as i64);
            Primitive::fill(
                Geometry::polygon([center, at(a0), at(a1)]),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    center,
                    at((a0 + a1) / 2.0),
                    &[c.lighten(0.15), c],
                    c,
                ),
            )
        })
        .collect()
}

/// Parallel stripes rotated -45 degrees about the canvas center.
pub(super) fn diag_stripes(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let center = ctx.dims.center();
    let stripe_w = (ctx.dims.min_side() * 0.08).max(30.0);
    let count = ((w + h) / stripe_w).ceil() as i64 + 2;
    let colors = pick_colors(rng, ctx.palette, 6);
    let rot = |p: Point| rotate_about(p, center, STRIPE_ANGLE);

    (-1..count)
        .map(|i| {
            let x = i as f64 * stripe_w;
            let c = cycle(&colors, i + 1000);
            let x1 = x + stripe_w * STRIPE_FILL;
            let corners = [
                Point::new(x, -h),
                Point::new(x1, -h),
                Point::new(x1, h * 2.0),
                Point::new(x, h * 2.0),
            ]
            .map(rot);
            Primitive::fill(
                Geometry::polygon(corners),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    rot(Point::new(x, 0.0)),
                    rot(Point::new(x + stripe_w, h)),
                    &[c.lighten(0.1), c],
                    c,
                ),
            )
        })
        .collect()
}

/// Nested diamonds, outermost first.
pub(super) fn concentric_diamonds(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let Point { x: cx, y: cy } = ctx.dims.center();
    let steps = 10 + rng.next_usize(0, 8);
    let colors = pick_colors(rng, ctx.palette, steps.min(6));

    (1..=steps)
        .rev()
        .map(|i| {
            let t = i as f64 / steps as f64;
            let dx = ctx.w() * 0.45 * t;
            let dy = ctx.h() * 0.35 * t;
            let c = cycle(&colors, (steps - i) as i64);
            Primitive::fill(
                diamond(cx, cy, dx, dy),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    Point::new(cx - dx, cy - dy),
                    Point::new(cx + dx, cy + dy),
                    &[c.lighten(0.08), c],
                    c,
                ),
            )
        })
        .collect()
}

/// Four corner wedges around a white center diamond.
pub(super) fn kites(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let center = ctx.dims.center();
    let Point { x: cx, y: cy } = center;
    let dx = w * KITE_DX;
    let dy = h * KITE_DY;
    let colors = pick_colors(rng, ctx.palette, 4);

    let wedge = |corner: Point, a: Point, b: Point, c: Rgba8| {
        Primitive::fill(
            Geometry::polygon([corner, a, b]),
            Paint::linear_or_solid(ctx.use_gradient, corner, center, &[c, c.lighten(0.15)], c),
        )
    };

    let top = Point::new(cx, cy - dy);
    let bottom = Point::new(cx, cy + dy);
    let left = Point::new(cx - dx, cy);
    let right = Point::new(cx + dx, cy);

    vec![
        wedge(Point::new(0.0, 0.0), top, left, cycle(&colors, 0)),
        wedge(Point::new(0.0, h), left, bottom, cycle(&colors, 1)),
        wedge(Point::new(w, 0.0), right, top, cycle(&colors, 2)),
        wedge(Point::new(w, h), bottom, right, cycle(&colors, 3)),
        Primitive::fill(diamond(cx, cy, dx, dy), Paint::solid(Rgba8::WHITE)),
    ]
}

fn diamond(cx: f64, cy: f64, dx: f64, dy: f64) -> Geometry {
    Geometry::polygon([
        Point::new(cx - dx, cy),
        Point::new(cx, cy - dy),
        Point::new(cx + dx, cy),
        Point::new(cx, cy + dy),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/styles/geometric.rs"]
mod tests;
