use std::f64::consts::{PI, TAU};

use kurbo::Point;

use crate::color::palette::pick_colors;
use crate::color::rgba::Rgba8;
use crate::foundation::math::rotate_about;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::{StyleCtx, cycle};

const CONCENTRIC_MARGIN: f64 = 160.0;
const DIAMONDS_MARGIN: f64 = 60.0;
const SPACER_ALPHA: f64 = 0.08;
const SPACER_CHANCE: f64 = 0.4;

/// Nested rectangles shrinking toward the center.
pub(super) fn concentric(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let steps = 10 + rng.next_usize(0, 6);
    let colors = pick_colors(rng, ctx.palette, steps.min(6));

    (0..steps)
        .map(|i| {
            let t = i as f64 / (steps - 1) as f64;
            let x = CONCENTRIC_MARGIN + (w - CONCENTRIC_MARGIN * 2.0) * (t / 2.0);
            let y = CONCENTRIC_MARGIN + (h - CONCENTRIC_MARGIN * 2.0) * (t / 2.0);
            let (ww, hh) = (w - x * 2.0, h - y * 2.0);
            let c = cycle(&colors, i as i64);
            Primitive::fill(
                Geometry::rect(x, y, ww, hh),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    Point::new(x, y),
                    Point::new(x + ww, y + hh),
                    &[c, c.with_alpha(0.8)],
                    c,
                ),
            )
        })
        .collect()
}

/// Grid of diamonds, rotated squares and circles in a three-step rhythm.
///
/// Shapes reach at most 0.35 of a cell from its center, so the background shows in a
/// [`DIAMONDS_MARGIN`] border and between neighbouring shapes.
pub(super) fn diamonds(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let colors = pick_colors(rng, ctx.palette, 6);
    let cell = ctx.dims.min_side() / 8.0;
    let cols = ((w - DIAMONDS_MARGIN * 2.0) / cell).floor().max(0.0) as i64;
    let rows = ((h - DIAMONDS_MARGIN * 2.0) / cell).floor().max(0.0) as i64;
    let off_x = (w - cols as f64 * cell) / 2.0;
    let off_y = (h - rows as f64 * cell) / 2.0;
    let size = cell * 0.35;

    let mut out = Vec::with_capacity((rows * cols).max(0) as usize);
    for r in 0..rows {
        for c in 0..cols {
            let x = off_x + c as f64 * cell + cell / 2.0;
            let y = off_y + r as f64 * cell + cell / 2.0;
            let center = Point::new(x, y);
            let color = cycle(&colors, r * cols + c);

            let prim = match (r + c) % 3 {
                0 => Primitive::fill(
                    Geometry::polygon([
                        Point::new(x, y - size),
                        Point::new(x + size, y),
                        Point::new(x, y + size),
                        Point::new(x - size, y),
                    ]),
                    Paint::linear_or_solid(
                        ctx.use_gradient,
                        Point::new(x - size, y - size),
                        Point::new(x + size, y + size),
                        &[color, color.with_alpha(0.6)],
                        color,
                    ),
                ),
                1 => {
                    let half = size * 0.7;
                    let corners = [(-half, -half), (half, -half), (half, half), (-half, half)]
                        .map(|(dx, dy)| rotate_about(Point::new(x + dx, y + dy), center, PI / 4.0));
                    let g0 = rotate_about(Point::new(x - size, y - size), center, PI / 4.0);
                    let g1 = rotate_about(Point::new(x + size, y + size), center, PI / 4.0);
                    Primitive::fill(
                        Geometry::polygon(corners),
                        Paint::linear_or_solid(
                            ctx.use_gradient,
                            g0,
                            g1,
                            &[color, color.lighten(0.2)],
                            color,
                        ),
                    )
                }
                _ => {
                    let radius = size * 0.8;
                    let paint = if ctx.use_gradient {
                        Paint::radial(
                            Point::new(x - size * 0.3, y - size * 0.3),
                            0.0,
                            center,
                            radius,
                            &[(0.0, color.lighten(0.3)), (1.0, color)],
                        )
                    } else {
                        Paint::solid(color)
                    };
                    Primitive::fill(Geometry::circle(center, radius), paint)
                }
            };
            out.push(prim);
        }
    }
    out
}

/// Overlapping translucent circles around the center.
pub(super) fn orbs(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let n = 8 + rng.next_usize(0, 4);
    let colors = pick_colors(rng, ctx.palette, n);
    let center = ctx.dims.center();
    let max_radius = ctx.dims.min_side() * 0.4;

    (0..n)
        .map(|i| {
            let angle = (i as f64 / n as f64) * TAU + rng.next_f64() * 0.5;
            let distance = rng.next_f64() * max_radius * 0.6;
            let x = center.x + angle.cos() * distance;
            let y = center.y + angle.sin() * distance;
            let r = max_radius * (0.15 + rng.next_f64() * 0.25);
            let c = cycle(&colors, i as i64);
            let alpha = 0.7 + rng.next_f64() * 0.3;

            let paint = if ctx.use_gradient {
                Paint::radial(
                    Point::new(x - r * 0.3, y - r * 0.3),
                    r * 0.1,
                    Point::new(x, y),
                    r,
                    &[(0.0, c.lighten(0.4)), (0.7, c), (1.0, c.with_alpha(0.3))],
                )
            } else {
                Paint::solid(c)
            };
            Primitive::fill(Geometry::circle(Point::new(x, y), r), paint).with_alpha(alpha)
        })
        .collect()
}

/// Full-width horizontal bands of random height with occasional thin spacers.
pub(super) fn bands(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let colors = pick_colors(rng, ctx.palette, 6);
    let last = colors.len().saturating_sub(1);
    let spacer = Rgba8::BLACK.with_alpha(SPACER_ALPHA);
    let min_band = (h * 0.07).floor() as i64;
    let max_band = (h * 0.22).floor() as i64;

    let mut out = Vec::new();
    let mut y = 0.0;
    while y < h {
        let band_h = (h - y).min(rng.next_int(min_band, max_band) as f64).max(1.0);
        let c1 = cycle(&colors, rng.next_usize(0, last) as i64);
        let c2 = cycle(&colors, rng.next_usize(0, last) as i64);
        out.push(Primitive::fill(
            Geometry::rect(0.0, y, w, band_h),
            Paint::linear_or_solid(
                ctx.use_gradient,
                Point::new(0.0, y),
                Point::new(w, y + band_h),
                &[c1, c2],
                c1,
            ),
        ));
        if rng.next_f64() < SPACER_CHANCE {
            out.push(Primitive::fill(
                Geometry::rect(0.0, y + band_h - 2.0, w, 2.0),
                Paint::solid(spacer),
            ));
        }
        y += band_h;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/styles/basic.rs"]
mod tests;
