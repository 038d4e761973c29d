use std::f64::consts::{PI, TAU};

use kurbo::Point;

use crate::color::palette::pick_colors;
use crate::foundation::math::{cubic_at, cubic_deriv_at};
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::{StyleCtx, cycle};

const WAVE_SAMPLE_STEP: usize = 2;
const RIBBON_SAMPLES: usize = 90;

/// Layered translucent sine waves closed to the bottom edge.
pub(super) fn waves(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let colors = pick_colors(rng, ctx.palette, 5);
    let count = 4 + rng.next_usize(0, 3);

    (0..count)
        .map(|i| {
            let amplitude = h * (0.1 + rng.next_f64() * 0.15);
            let frequency = 2.0 + rng.next_f64() * 3.0;
            let phase = rng.next_f64() * TAU;
            let y_offset = (h / count as f64) * i as f64 + rng.next_f64() * (h * 0.1);
            let color = cycle(&colors, i as i64);
            let alpha = 0.6 + rng.next_f64() * 0.4;

            let mut points = vec![Point::new(0.0, y_offset)];
            points.extend(
                (0..=ctx.dims.width as usize)
                    .step_by(WAVE_SAMPLE_STEP)
                    .map(|x| {
                        let x = x as f64;
                        let y = y_offset + ((x / w) * frequency * PI + phase).sin() * amplitude;
                        Point::new(x, y)
                    }),
            );
            points.push(Point::new(w, h));
            points.push(Point::new(0.0, h));

            let paint = Paint::linear_or_solid(
                ctx.use_gradient,
                Point::new(0.0, y_offset - amplitude),
                Point::new(w, y_offset + amplitude),
                &[color.lighten(0.3).with_alpha(0.8), color.with_alpha(0.9)],
                color.with_alpha(0.8),
            );
            Primitive::fill(Geometry::polygon(points), paint).with_alpha(alpha)
        })
        .collect()
}

/// Thick-thin-thick ribbons following cubic bezier spines across the canvas.
pub(super) fn flow_ribbons(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let ribbons = 3 + rng.next_usize(0, 3);
    let colors = pick_colors(rng, ctx.palette, (ribbons + 2).min(6));

    (0..ribbons)
        .map(|i| {
            let c = cycle(&colors, i as i64);
            let a = i as f64 / (ribbons as f64 - 1.0 + 1e-6);
            let y0 = h * (0.15 + 0.7 * a) + rng.next_f64() * 20.0 - 10.0;
            let y1 = h * (0.15 + 0.7 * (1.0 - a)) + rng.next_f64() * 20.0 - 10.0;
            let cp1x = w * (0.25 + 0.1 * rng.next_f64());
            let cp1y = y0 + (rng.next_f64() - 0.5) * h * 0.3;
            let cp2x = w * (0.75 - 0.1 * rng.next_f64());
            let cp2y = y1 + (rng.next_f64() - 0.5) * h * 0.3;
            let (p0x, p0y) = (-w * 0.05, y0);
            let (p3x, p3y) = (w * 1.05, y1);
            let base_w = (ctx.dims.min_side() * 0.06).max(8.0) * (0.9 + rng.next_f64() * 0.2);

            let mut left = Vec::with_capacity(RIBBON_SAMPLES + 1);
            let mut right = Vec::with_capacity(RIBBON_SAMPLES + 1);
            for s in 0..=RIBBON_SAMPLES {
                let t = s as f64 / RIBBON_SAMPLES as f64;
                let x = cubic_at(t, p0x, cp1x, cp2x, p3x);
                let y = cubic_at(t, p0y, cp1y, cp2y, p3y);
                let dx = cubic_deriv_at(t, p0x, cp1x, cp2x, p3x);
                let dy = cubic_deriv_at(t, p0y, cp1y, cp2y, p3y);
                let len = match dx.hypot(dy) {
                    l if l > 0.0 => l,
                    _ => 1.0,
                };
                let (nx, ny) = (-dy / len, dx / len);
                let half = base_w * (0.55 + 0.45 * (1.0 + (TAU * t).cos()) / 2.0) / 2.0;
                left.push(Point::new(x + nx * half, y + ny * half));
                right.push(Point::new(x - nx * half, y - ny * half));
            }

            let g0 = left[0];
            let g1 = right[right.len() / 2];
            let outline: Vec<Point> = left.into_iter().chain(right.into_iter().rev()).collect();
            Primitive::fill(
                Geometry::polygon(outline),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    g0,
                    g1,
                    &[c.lighten(0.15), c],
                    c.with_alpha(0.9),
                ),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/styles/flows.rs"]
mod tests;
