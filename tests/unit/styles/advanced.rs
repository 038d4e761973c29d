use std::collections::BTreeMap;

use super::*;
use crate::color::palette::Palette;
use crate::foundation::core::{AspectPreset, Dimensions};
use crate::params::schema::{CORNER_STEPS_SCHEMA, ParamValue, StyleParams};

fn run_with(
    f: fn(&StyleCtx<'_>, &mut SeededRng) -> Vec<Primitive>,
    dims: Dimensions,
    params: &StyleParams,
    seed: &str,
) -> Vec<Primitive> {
    let ctx = StyleCtx {
        dims,
        palette: Palette::by_index(5).unwrap(),
        params,
        use_gradient: true,
    };
    f(&ctx, &mut SeededRng::new(seed))
}

fn sample_points(dims: Dimensions) -> impl Iterator<Item = Point> {
    (0..17).flat_map(move |i| {
        (0..23).map(move |j| {
            Point::new(
                dims.w() * (i as f64 + 0.37) / 17.0,
                dims.h() * (j as f64 + 0.61) / 23.0,
            )
        })
    })
}

#[test]
fn corner_steps_emit_base_plus_steps() {
    let params = StyleParams::from_schema(&CORNER_STEPS_SCHEMA, &BTreeMap::new());
    let dims = AspectPreset::Portrait.dimensions();
    let out = run_with(corner_steps, dims, &params, "cs");
    assert_eq!(out.len(), 8);
    assert_eq!(out[0].geometry, Geometry::rect(0.0, 0.0, dims.w(), dims.h()));
    for p in sample_points(dims) {
        assert!(out[0].geometry.contains(p));
    }
}

#[test]
fn regular_corner_steps_advance_evenly() {
    let raw: BTreeMap<String, ParamValue> = [
        ("irregular".to_string(), ParamValue::Bool(false)),
        ("steps".to_string(), ParamValue::Number(5.0)),
        ("step_x".to_string(), ParamValue::Number(0.1)),
        ("step_y".to_string(), ParamValue::Number(0.1)),
    ]
    .into_iter()
    .collect();
    let params = StyleParams::from_schema(&CORNER_STEPS_SCHEMA, &raw);
    let out = run_with(corner_steps, Dimensions::new(1000, 500).unwrap(), &params, "cs");
    let origins: Vec<(f64, f64)> = out
        .iter()
        .map(|p| {
            let r = p.geometry.bounding_box();
            (r.x0, r.y0)
        })
        .collect();
    assert_eq!(
        origins,
        vec![(0.0, 0.0), (100.0, 50.0), (200.0, 100.0), (300.0, 150.0), (400.0, 200.0)]
    );
}

#[test]
fn chevron_tiles_the_canvas() {
    let params = StyleParams::default();
    for preset in AspectPreset::ALL {
        let dims = preset.dimensions();
        let out = run_with(chevron, dims, &params, "chev");
        assert_eq!(out.len() % 3, 0);
        for p in sample_points(dims) {
            assert!(
                out.iter().any(|prim| prim.geometry.contains(p)),
                "{preset}: {p:?} uncovered"
            );
        }
    }
}

#[test]
fn chevron_sides_share_one_base_color() {
    let params = StyleParams::default();
    let out = run_with(chevron, AspectPreset::Square.dimensions(), &params, "sides");
    let lefts: Vec<_> = out.iter().skip(1).step_by(3).map(|p| p.paint.stops()[1].color).collect();
    assert!(lefts.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn weave_leaves_a_hole_below_each_cube() {
    let params = StyleParams::default();
    let dims = AspectPreset::Square.dimensions();
    let out = run_with(rhombus_weave, dims, &params, "weave");
    let rw = dims.min_side() / 6.0;
    let rh = rw * 3f64.sqrt() / 2.0;
    for row in [0, 2, 4] {
        for col in [1, 2, 3, 5] {
            let hole = Point::new(col as f64 * rw, row as f64 * rh + 0.75 * rh);
            assert!(!out.iter().any(|p| p.geometry.contains(hole)), "{hole:?} covered");
        }
    }

    for preset in AspectPreset::ALL {
        let dims = preset.dimensions();
        let out = run_with(rhombus_weave, dims, &params, "weave");
        let (mut covered, mut total) = (0usize, 0usize);
        for pt in sample_points(dims) {
            total += 1;
            covered += usize::from(out.iter().any(|p| p.geometry.contains(pt)));
        }
        let share = covered as f64 / total as f64;
        assert!((0.8..0.95).contains(&share), "{preset:?}: {share}");
    }
}

#[test]
fn weave_uses_at_most_four_bases() {
    let params = StyleParams::default();
    let out = run_with(rhombus_weave, AspectPreset::Landscape.dimensions(), &params, "weave");
    assert_eq!(out.len() % 3, 0);
    let mut lefts: Vec<_> = out.iter().skip(1).step_by(3).map(|p| p.paint.stops()[1].color).collect();
    lefts.sort_by_key(|c| (c.r, c.g, c.b));
    lefts.dedup();
    assert!(lefts.len() <= 4);
}
