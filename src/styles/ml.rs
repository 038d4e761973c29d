use std::f64::consts::{PI, TAU};

use kurbo::Point;

use crate::color::palette::pick_colors;
use crate::color::rgba::Rgba8;
use crate::foundation::math::js_rem;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::{StyleCtx, cycle};

const ATTENTION_HEADS: usize = 3;
const HEAD_OFFSET: f64 = 8.0;
const HEAD_ALPHA: f64 = 0.15;
const LATENT_TONES: [f64; 3] = [0.32, 0.0, -0.22];
const FLOW_SEGMENTS: usize = 320;
const FLOW_LINE_WIDTH: f64 = 1.4;

/// Attention-matrix heat map with diagonal emphasis and two faint offset heads.
pub(super) fn transformer_attention(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let colors = pick_colors(rng, ctx.palette, 5);
    let n = 12 + rng.next_usize(0, 6);
    let margin = ctx.dims.min_side() * 0.1;
    let cell = ((w - margin * 2.0) / n as f64).min((h - margin * 2.0) / n as f64);
    let start_x = (w - cell * n as f64) / 2.0;
    let start_y = (h - cell * n as f64) / 2.0;

    let weights = attention_weights(rng, n);
    let bucket = |weight: f64| -> Rgba8 {
        let idx = (weight * (colors.len() as f64 - 0.001)).floor().max(0.0) as usize;
        cycle(&colors, idx.min(colors.len().saturating_sub(1)) as i64)
    };

    let mut out = Vec::new();
    for (i, row) in weights.iter().enumerate() {
        for (j, &weight) in row.iter().enumerate() {
            let x = start_x + j as f64 * cell;
            let y = start_y + i as f64 * cell;
            let base = bucket(weight);
            let alpha = 0.3 + weight * 0.7;
            let center = Point::new(x + cell / 2.0, y + cell / 2.0);

            let paint = if ctx.use_gradient {
                Paint::radial(
                    center,
                    0.0,
                    center,
                    cell / 2.0,
                    &[(0.0, base.lighten(0.3)), (1.0, base)],
                )
            } else {
                Paint::solid(base)
            };
            out.push(
                Primitive::fill(
                    Geometry::rounded_rect(x + 1.0, y + 1.0, cell - 2.0, cell - 2.0, cell * 0.1),
                    paint,
                )
                .with_alpha(alpha),
            );
            if weight > 0.7 {
                out.push(
                    Primitive::fill(
                        Geometry::circle(center, cell * 0.15),
                        Paint::solid(Rgba8::WHITE.with_alpha(weight * 0.4)),
                    )
                    .with_alpha(alpha),
                );
            }
        }
    }

    for head in 1..ATTENTION_HEADS {
        let offset = head as f64 * HEAD_OFFSET;
        let fade = 1.0 - head as f64 * 0.3;
        for i in 0..n - 1 {
            for j in 0..n - 1 {
                if start_x + (j + 1) as f64 * cell + offset > w
                    || start_y + (i + 1) as f64 * cell + offset > h
                {
                    continue;
                }
                let x = start_x + j as f64 * cell + offset;
                let y = start_y + i as f64 * cell + offset;
                out.push(
                    Primitive::fill(
                        Geometry::rounded_rect(x + 2.0, y + 2.0, cell - 4.0, cell - 4.0, cell * 0.05),
                        Paint::solid(bucket(weights[i][j] * fade)),
                    )
                    .with_alpha(HEAD_ALPHA),
                );
            }
        }
    }
    out
}

/// Row-major attention weights; every cell draws from the stream in order.
fn attention_weights(rng: &mut SeededRng, n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0.7 + rng.next_f64() * 0.3
                    } else if i.abs_diff(j) <= 2 {
                        0.3 + rng.next_f64() * 0.4
                    } else if rng.next_f64() < 0.1 {
                        0.4 + rng.next_f64() * 0.5
                    } else {
                        rng.next_f64() * 0.25
                    }
                })
                .collect()
        })
        .collect()
}

/// Hexagonal lattice quantized into three-tone bands along a random direction.
pub(super) fn latent_space(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let base = pick_colors(rng, ctx.palette, 1)
        .first()
        .copied()
        .unwrap_or(Rgba8::BLACK);
    let tones = LATENT_TONES.map(|amt| base.lighten(amt));

    let r = ctx.dims.min_side() / 18.0;
    let hex_h = r * 3f64.sqrt();
    let hex_w = r * 2.0;
    let cols = (w / (hex_w * 0.75)).ceil() as i64 + 4;
    let rows = (h / hex_h).ceil() as i64 + 4;

    let angle = (rng.next_f64() * 0.5 + 0.25) * PI;
    let (dir_x, dir_y) = (angle.cos(), angle.sin());
    let bands = 12 + rng.next_int(0, 6);

    let grid_w = cols as f64 * hex_w * 0.75 + hex_w * 0.25;
    let grid_h = rows as f64 * hex_h + hex_h * 0.5;
    let off_x = (w - grid_w) / 2.0 + hex_w * 0.5;
    let off_y = (h - grid_h) / 2.0 + hex_h * 0.5;

    let mut out = Vec::new();
    for row in -2..rows {
        for col in -2..cols {
            let x_off = js_rem(row, 2) as f64 * (hex_w * 0.5);
            let x = col as f64 * hex_w * 0.75 + x_off;
            let y = row as f64 * hex_h;

            let nx = (x - grid_w / 2.0) / grid_w.max(1.0);
            let ny = (y - grid_h / 2.0) / grid_h.max(1.0);
            let s = (nx * dir_x + ny * dir_y + 1.0) * 0.5;
            let band = (s * bands as f64).floor() as i64;
            let tone = cycle(&tones, band);

            let (px, py) = (x + off_x, y + off_y);
            let hex = (0..6).map(|i| {
                let a = i as f64 * PI / 3.0;
                Point::new(px + a.cos() * r, py + a.sin() * r)
            });
            out.push(Primitive::fill(
                Geometry::polygon(hex),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    Point::new(px - r, py - r),
                    Point::new(px + r, py + r),
                    &[tone.lighten(0.15), tone],
                    tone,
                ),
            ));
        }
    }
    out
}

/// Confocal ellipse contours stroked in two alternating colors.
pub(super) fn gradient_flow(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let picked = pick_colors(rng, ctx.palette, 2);
    let (ca, cb) = (cycle(&picked, 0), cycle(&picked, 1));
    let mid_x = w * 0.5;
    let mid_y = h * (0.5 + (rng.next_f64() - 0.5) * 0.06);
    let focus = ctx.dims.min_side() * 0.34 * 0.5;
    let rings = 12 + rng.next_usize(0, 6);
    let a0 = focus * 1.05;
    let a_step = ctx.dims.min_side() * 0.018;

    let mut out = Vec::with_capacity(rings);
    for k in 0..rings {
        let a = a0 + k as f64 * a_step;
        let b2 = a * a - focus * focus;
        if b2 <= 0.0 {
            tracing::debug!(ring = k, "skipping degenerate ellipse");
            continue;
        }
        let b = b2.sqrt();
        let color = if k % 2 == 0 { ca } else { cb };
        let paint = Paint::linear_or_solid(
            ctx.use_gradient,
            Point::new(mid_x, mid_y - b),
            Point::new(mid_x, mid_y + b),
            &[color.lighten(0.15).with_alpha(0.95), color.with_alpha(0.95)],
            color.with_alpha(0.95),
        );
        let ring = (0..=FLOW_SEGMENTS).map(|i| {
            let t = i as f64 / FLOW_SEGMENTS as f64 * TAU;
            Point::new(mid_x + a * t.cos(), mid_y + b * t.sin())
        });
        out.push(Primitive::stroke(
            Geometry::polyline(ring),
            paint,
            FLOW_LINE_WIDTH,
            true,
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/styles/ml.rs"]
mod tests;
