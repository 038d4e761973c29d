use std::collections::BTreeMap;

use super::*;
use crate::color::palette::Palette;
use crate::foundation::core::AspectPreset;
use crate::params::schema::{ISO_CUBES_SCHEMA, ParamValue, StyleParams};

fn params(pairs: &[(&str, f64)]) -> StyleParams {
    let raw: BTreeMap<String, ParamValue> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ParamValue::Number(*v)))
        .collect();
    StyleParams::from_schema(&ISO_CUBES_SCHEMA, &raw)
}

fn run(params: &StyleParams, preset: AspectPreset, use_gradient: bool) -> Vec<Primitive> {
    let ctx = StyleCtx {
        dims: preset.dimensions(),
        palette: Palette::by_index(1).unwrap(),
        params,
        use_gradient,
    };
    iso_cubes(&ctx, &mut SeededRng::new("iso"))
}

#[test]
fn lattice_covers_every_preset() {
    for cols in [3.0, 6.0, 14.0] {
        let p = params(&[("cols", cols)]);
        for preset in AspectPreset::ALL {
            let dims = preset.dimensions();
            let out = run(&p, preset, true);
            for i in 0..13 {
                for j in 0..11 {
                    let pt = Point::new(
                        dims.w() * (i as f64 + 0.5) / 13.0,
                        dims.h() * (j as f64 + 0.5) / 11.0,
                    );
                    assert!(
                        out.iter().any(|prim| prim.geometry.contains(pt)),
                        "cols {cols} {preset}: {pt:?} uncovered"
                    );
                }
            }
        }
    }
}

#[test]
fn faces_are_emitted_top_left_right() {
    let out = run(&params(&[]), AspectPreset::Square, false);
    assert_eq!(out.len() % 3, 0);
    let top = out[0].geometry.bounding_box();
    let left = out[1].geometry.bounding_box();
    let right = out[2].geometry.bounding_box();
    assert!(top.y0 < left.y0 && top.y0 < right.y0);
    assert!(left.x1 <= right.x0 + 1e-9);
}

#[test]
fn variety_limits_distinct_bases() {
    let out = run(&params(&[("variety", 1.0), ("shade", 0.2)]), AspectPreset::Square, false);
    let mut tops: Vec<_> = out.iter().step_by(3).map(|p| p.paint.primary_color()).collect();
    tops.sort_by_key(|c| (c.r, c.g, c.b));
    tops.dedup();
    assert_eq!(tops.len(), 1);
}

#[test]
fn shading_orders_face_brightness() {
    let out = run(&params(&[("shade", 0.3)]), AspectPreset::Square, false);
    let luma = |c: crate::color::rgba::Rgba8| u32::from(c.r) + u32::from(c.g) + u32::from(c.b);
    for cube in out.chunks(3) {
        let [top, left, right] = [0, 1, 2].map(|i| luma(cube[i].paint.primary_color()));
        assert!(top >= left && left >= right);
    }
}
