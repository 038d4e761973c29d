use kurbo::Point;

use crate::foundation::math::js_rem;
use crate::random::prng::SeededRng;
use crate::scene::primitive::{Geometry, Paint, Primitive};
use crate::styles::advanced::CubeFaces;
use crate::styles::{StyleCtx, cycle};

const LEFT_SHADE_FACTOR: f64 = 0.8;
const RIGHT_SHADE_FACTOR: f64 = 1.4;

/// Seamless isometric cube lattice with parameterized density, shading and color variety.
pub(super) fn iso_cubes(ctx: &StyleCtx<'_>, rng: &mut SeededRng) -> Vec<Primitive> {
    let (w, h) = (ctx.w(), ctx.h());
    let p = ctx.params;
    let cols_setting = p.get_usize("cols").max(1) as f64;
    let shade = p.get_f64("shade");
    let variety = p.get_usize("variety");

    let rw = (w / cols_setting).ceil();
    let rh = rw * 3f64.sqrt() / 2.0;
    let cols = (w / rw).ceil() as i64 + 4;
    let rows = (h / rh).ceil() as i64 + 4;

    let mut bases = rng.shuffle(&ctx.palette.accents());
    bases.truncate(variety);
    if bases.is_empty() {
        bases.push(ctx.palette.color(1));
    }

    let mut out = Vec::with_capacity(((rows + 3) * (cols + 3) * 3).max(0) as usize);
    for row in -2..=rows {
        for col in -2..=cols {
            let x_off = js_rem(row, 2) as f64 * (rw * 0.5);
            let cx = col as f64 * rw + x_off;
            let cy = row as f64 * rh;
            let base = cycle(&bases, row * cols + col + 1000);
            let faces = CubeFaces {
                top: base.lighten(shade),
                left: base.lighten(-shade * LEFT_SHADE_FACTOR),
                right: base.lighten(-shade * RIGHT_SHADE_FACTOR),
            };
            out.extend(solid_cube(cx, cy, rw, rh, faces, ctx.use_gradient));
        }
    }
    out
}

/// Top rhombus over two vertical parallelograms, forming a closed hexagon.
fn solid_cube(cx: f64, cy: f64, rw: f64, rh: f64, faces: CubeFaces, gradient: bool) -> [Primitive; 3] {
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
                Point::new(cx, cy + hh + rh),
                Point::new(cx - hw, cy + rh),
            ]),
            Paint::linear_or_solid(
                gradient,
                Point::new(cx - hw, cy),
                Point::new(cx, cy + hh + rh),
                &[left.lighten(0.05), left],
                left,
            ),
        ),
        Primitive::fill(
            Geometry::polygon([
                Point::new(cx, cy + hh),
                Point::new(cx + hw, cy),
                Point::new(cx + hw, cy + rh),
                Point::new(cx, cy + hh + rh),
            ]),
            Paint::linear_or_solid(
                gradient,
                Point::new(cx, cy + hh),
                Point::new(cx + hw, cy + hh + rh),
                &[right, right.lighten(-0.05)],
                right,
            ),
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/styles/iso_cubes.rs"]
mod tests;
