use std::collections::BTreeMap;

use super::*;
use crate::color::palette::Palette;
use crate::foundation::core::AspectPreset;
use crate::params::schema::{ORB_TRAIL_SCHEMA, ParamValue, StyleParams};

fn params(pairs: &[(&str, ParamValue)]) -> StyleParams {
    let raw: BTreeMap<String, ParamValue> =
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    StyleParams::from_schema(&ORB_TRAIL_SCHEMA, &raw)
}

fn run(params: &StyleParams, preset: AspectPreset) -> Vec<Primitive> {
    let ctx = StyleCtx {
        dims: preset.dimensions(),
        palette: Palette::by_index(0).unwrap(),
        params,
        use_gradient: true,
    };
    orb_trail(&ctx, &mut SeededRng::new("orb"))
}

#[test]
fn collinear_anchors_emit_nothing() {
    let out = run(&params(&[]), AspectPreset::Square);
    assert!(out.is_empty());
}

#[test]
fn count_is_clamped_to_twelve() {
    let out = run(
        &params(&[("count", ParamValue::Number(999.0))]),
        AspectPreset::Portrait,
    );
    assert_eq!(out.len(), 12);
}

#[test]
fn last_orb_is_white_and_others_are_accents() {
    let out = run(&params(&[]), AspectPreset::Landscape);
    assert_eq!(out.len(), 7);
    assert_eq!(out[6].paint, Paint::solid(Rgba8::WHITE));
    let accents = Palette::by_index(0).unwrap().accents();
    for p in &out[..6] {
        assert!(accents.contains(&p.paint.primary_color()));
    }
}

#[test]
fn orbs_share_one_radius_and_end_at_the_target() {
    let dims = AspectPreset::Landscape.dimensions();
    let out = run(&params(&[]), AspectPreset::Landscape);
    let radius = dims.min_side() * 0.14;
    for p in &out {
        let Geometry::Circle { radius: r, .. } = p.geometry else {
            panic!("orb should be a circle");
        };
        assert!((r - radius).abs() < 1e-9);
    }
    let Geometry::Circle { center, .. } = out[out.len() - 1].geometry else {
        panic!("orb should be a circle");
    };
    assert!(center.distance(Point::new(dims.w() * 0.84, dims.h() * 0.84)) < 1e-6);
}

#[test]
fn manual_start_with_curvature_bends_the_trail() {
    let out = run(
        &params(&[
            ("manual_start", ParamValue::Bool(true)),
            ("curvature", ParamValue::Number(0.2)),
        ]),
        AspectPreset::Square,
    );
    assert_eq!(out.len(), 7);
    let Geometry::Circle { center, .. } = out[0].geometry else {
        panic!("orb should be a circle");
    };
    assert!(center.distance(Point::new(1200.0 * -0.12, 1200.0 * 0.28)) < 1e-6);
}
