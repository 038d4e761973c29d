use super::*;
use crate::color::palette::Palette;
use crate::foundation::core::AspectPreset;
use crate::params::schema::StyleParams;

fn run(
    f: fn(&StyleCtx<'_>, &mut SeededRng) -> Vec<Primitive>,
    preset: AspectPreset,
    use_gradient: bool,
) -> Vec<Primitive> {
    let params = StyleParams::default();
    let ctx = StyleCtx {
        dims: preset.dimensions(),
        palette: Palette::by_index(11).unwrap(),
        params: &params,
        use_gradient,
    };
    f(&ctx, &mut SeededRng::new("ml"))
}

#[test]
fn attention_weights_emphasize_the_diagonal() {
    let mut rng = SeededRng::new("weights");
    let m = attention_weights(&mut rng, 14);
    for (i, row) in m.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            assert!((0.0..1.0).contains(&v));
            if i == j {
                assert!(v >= 0.7);
            } else if i.abs_diff(j) <= 2 {
                assert!((0.3..0.7).contains(&v));
            }
        }
    }
}

#[test]
fn attention_layers_main_grid_then_faint_heads() {
    let out = run(transformer_attention, AspectPreset::Square, true);
    let faint = out.iter().filter(|p| p.alpha == HEAD_ALPHA).count();
    assert!(faint > 0);
    let first_faint = out.iter().position(|p| p.alpha == HEAD_ALPHA).unwrap();
    assert!(out[first_faint..].iter().all(|p| p.alpha == HEAD_ALPHA));
    assert!(out[..first_faint].iter().all(|p| p.alpha >= 0.3));
    let cells = out[..first_faint]
        .iter()
        .filter(|p| matches!(p.geometry, Geometry::RoundedRect { .. }))
        .count();
    let n = (cells as f64).sqrt() as usize;
    assert_eq!(n * n, cells);
    assert!((12..=18).contains(&n));
}

#[test]
fn latent_space_uses_three_tones() {
    let out = run(latent_space, AspectPreset::Landscape, false);
    let mut tones: Vec<_> = out.iter().map(|p| p.paint.primary_color()).collect();
    tones.sort_by_key(|c| (c.r, c.g, c.b));
    tones.dedup();
    assert!(!tones.is_empty() && tones.len() <= 3);
    assert!(out.iter().all(|p| matches!(&p.geometry, Geometry::Polygon { points } if points.len() == 6)));
}

#[test]
fn gradient_flow_rings_are_confocal_strokes() {
    let dims = AspectPreset::Portrait.dimensions();
    let out = run(gradient_flow, AspectPreset::Portrait, true);
    assert!((12..=17).contains(&out.len()));
    let focus = dims.min_side() * 0.17;
    for p in &out {
        let stroke = p.stroke.expect("rings are stroked");
        assert_eq!(stroke.width, FLOW_LINE_WIDTH);
        assert!(stroke.round_cap);
        let Geometry::Polyline { points, closed } = &p.geometry else {
            panic!("ring should be a polyline");
        };
        assert!(!closed);
        assert_eq!(points.len(), FLOW_SEGMENTS + 1);
        let bb = p.geometry.bounding_box();
        let (a, b) = (bb.width() / 2.0, bb.height() / 2.0);
        assert!(((a * a - b * b).sqrt() - focus).abs() < 1e-6 * a.max(1.0) * 1e3);
    }
}
