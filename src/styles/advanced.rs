use kurbo::Point;

use crate::color::palette::pick_colors;
use crate::color::rgba::Rgba8;
use crate::foundation::math::js_rem;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::{StyleCtx, cycle};

const CHEVRON_COLS: f64 = 6.0;
const CHEVRON_SKEW: f64 = 0.35;
/// Rows advance by this fraction of the brick height so neighbouring rows interlock.
pub(crate) const BRICK_ROW_OVERLAP: f64 = 0.5;
const CHEVRON_LEFT_SHADE: f64 = -0.22;
const CHEVRON_RIGHT_SHADE: f64 = -0.10;

/// Stacked rectangles stepping in from the top-left corner.
pub(super) fn corner_steps(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let p = ctx.params;
    let steps = p.get_usize("steps");
    let colors = pick_colors(rng, ctx.palette, steps.min(6));

    let base = colors.first().copied().unwrap_or_else(|| ctx.palette.color(1));
    let mut out = Vec::with_capacity(steps);
    out.push(Primitive::fill(Geometry::rect(0.0, 0.0, w, h), Paint::solid(base)));

    let step_x = w * p.get_f64("step_x");
    let step_y = h * p.get_f64("step_y");
    let irregular = p.get_bool("irregular");
    let jitter = p.get_f64("irregular_amt");

    let (mut acc_x, mut acc_y) = (0.0, 0.0);
    for i in 1..steps {
        let (mut dx, mut dy) = (step_x, step_y);
        if irregular {
            let jx = (rng.next_f64() * 2.0 - 1.0) * step_x * jitter;
            let jy = (rng.next_f64() * 2.0 - 1.0) * step_y * jitter;
            dx = (step_x + jx).max(0.0);
            dy = (step_y + jy).max(0.0);
        }
        acc_x += dx;
        acc_y += dy;
        let x = acc_x.round();
        let y = acc_y.round();
        let ww = (w - x).ceil().max(0.0);
        let hh = (h - y).ceil().max(0.0);
        let c = cycle(&colors, i as i64);
        out.push(Primitive::fill(
            Geometry::rect(x, y, ww, hh),
            Paint::linear_or_solid(
                ctx.use_gradient,
                Point::new(x, y),
                Point::new(x + ww, y + hh),
                &[c.lighten(0.08), c],
                c,
            ),
        ));
    }
    out
}

/// Skewed three-face bricks in interlocking rows.
pub(super) fn chevron(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let cell_w = (w / CHEVRON_COLS).ceil();
    let height = cell_w.round();
    let row_step = (height * BRICK_ROW_OVERLAP).round().max(1.0);
    let rows = ((h + height) / row_step).ceil() as i64;

    let side_base = pick_colors(rng, ctx.palette, 1)
        .first()
        .copied()
        .unwrap_or(Rgba8::BLACK);
    let left_shade = side_base.lighten(CHEVRON_LEFT_SHADE);
    let right_shade = side_base.lighten(CHEVRON_RIGHT_SHADE);
    let tops = pick_colors(rng, ctx.palette, 3);

    let k = cell_w * CHEVRON_SKEW;
    let hh = height;
    let mut out = Vec::new();
    for r in -1..rows {
        let y = r as f64 * row_step - (height * 0.5).floor();
        for c in 0..CHEVRON_COLS as i64 {
            let x = c as f64 * cell_w;
            let top = cycle(&tops, r + c + 1000);

            out.push(Primitive::fill(
                Geometry::polygon([
                    Point::new(x + k, y),
                    Point::new(x + cell_w - k, y),
                    Point::new(x + cell_w, y + hh * 0.5),
                    Point::new(x, y + hh * 0.5),
                ]),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    Point::new(x, y),
                    Point::new(x + cell_w, y + hh * 0.5),
                    &[top, top.lighten(0.08)],
                    top,
                ),
            ));
            out.push(Primitive::fill(
                Geometry::polygon([
                    Point::new(x, y + hh * 0.5),
                    Point::new(x + k, y),
                    Point::new(x + k, y + hh),
                    Point::new(x, y + hh * 1.5),
                ]),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    Point::new(x, y),
                    Point::new(x + k, y + hh),
                    &[left_shade, side_base],
                    left_shade,
                ),
            ));
            out.push(Primitive::fill(
                Geometry::polygon([
                    Point::new(x + cell_w, y + hh * 0.5),
                    Point::new(x + cell_w - k, y),
                    Point::new(x + cell_w - k, y + hh),
                    Point::new(x + cell_w, y + hh * 1.5),
                ]),
                Paint::linear_or_solid(
                    ctx.use_gradient,
                    Point::new(x + cell_w - k, y),
                    Point::new(x + cell_w, y + hh),
                    &[right_shade, side_base],
                    right_shade,
                ),
            ));
        }
    }
    out
}

/// Woven lattice of three-rhombus cubes with fixed shading.
///
/// The side faces hang from the top rhombus without meeting the next row, leaving a
/// triangular hole below each cube centered near `(cx, cy + 0.75·rh)`. About a tenth of
/// the canvas stays background.
pub(super) fn rhombus_weave(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let rw = ctx.dims.min_side() / 6.0;
    let rh = rw * 3f64.sqrt() / 2.0;
    let cols = (w / rw).ceil() as i64 + 4;
    let rows = (h / rh).ceil() as i64 + 4;
    let bases = pick_colors(rng, ctx.palette, 4);

    let mut out = Vec::new();
    for row in -2..=rows {
        for col in -2..=cols {
            let x_off = js_rem(row, 2) as f64 * (rw * 0.5);
            let cx = col as f64 * rw + x_off;
            let cy = row as f64 * rh;
            let base = cycle(&bases, row * cols + col + 1000);
            let faces = CubeFaces {
                top: base.lighten(0.2),
                left: base,
                right: base.lighten(-0.3),
            };
            out.extend(weave_cube(cx, cy, rw, rh, faces, ctx.use_gradient));
        }
    }
    out
}

#[derive(Clone, Copy)]
pub(super) struct CubeFaces {
    pub(super) top: Rgba8,
    pub(super) left: Rgba8,
    pub(super) right: Rgba8,
}

/// Top rhombus plus two side rhombi hanging off its lower edges.
fn weave_cube(cx: f64, cy: f64, rw: f64, rh: f64, faces: CubeFaces, gradient: bool) -> [Primitive; 3] {
    let (hw, hh) = (rw / 2.0, rh / 2.0);
    let CubeFaces { top, left, right } = faces;
    [
        Primitive::fill(
            Geometry::polygon([
                Point::new(cx, cy - hh),
                Point::new(cx + hw, cy),
                Point::new(cx, cy + hh),
                Point::new(cx - hw, cy),
            ]),
            Paint::linear_or_solid(
                gradient,
                Point::new(cx - hw, cy - hh),
                Point::new(cx + hw, cy + hh),
                &[top.lighten(0.1), top],
                top,
            ),
        ),
        Primitive::fill(
            Geometry::polygon([
                Point::new(cx - hw, cy),
                Point::new(cx, cy + hh),
                Point::new(cx - hw, cy + rh),
                Point::new(cx - rw, cy + hh),
            ]),
            Paint::linear_or_solid(
                gradient,
                Point::new(cx - rw, cy),
                Point::new(cx, cy + rh),
                &[left.lighten(0.05), left],
                left,
            ),
        ),
        Primitive::fill(
            Geometry::polygon([
                Point::new(cx, cy + hh),
                Point::new(cx + hw, cy),
                Point::new(cx + rw, cy + hh),
                Point::new(cx + hw, cy + rh),
            ]),
            Paint::linear_or_solid(
                gradient,
                Point::new(cx, cy + hh),
                Point::new(cx + rw, cy + rh),
                &[right, right.lighten(-0.05)],
                right,
            ),
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/styles/advanced.rs"]
mod tests;
