use super::*;
use crate::color::rgba::Rgba8;
use crate::foundation::core::Dimensions;
use crate::scene::primitive::Geometry;
use kurbo::Point;

fn comp(w: u32, h: u32, primitives: Vec<Primitive>) -> Composition {
    Composition {
        dims: Dimensions::new(w, h).unwrap(),
        primitives,
    }
}

fn backdrop(w: f64, h: f64, color: Rgba8) -> Primitive {
    Primitive::fill(Geometry::rect(0.0, 0.0, w, h), Paint::solid(color))
}

fn render(c: &Composition, scale: u32) -> FrameRGBA {
    CpuBackend::new(RenderSettings { scale }).render(c).unwrap()
}

fn near(a: u8, b: u8, tol: u8) -> bool {
    a.abs_diff(b) <= tol
}

#[test]
fn solid_backdrop_covers_every_pixel() {
    let frame = render(&comp(8, 8, vec![backdrop(8.0, 8.0, Rgba8::rgb(255, 0, 0))]), 1);
    assert!(frame
        .data
        .chunks_exact(4)
        .all(|px| px == [255, 0, 0, 255]));
}

#[test]
fn empty_composition_is_transparent() {
    let frame = render(&comp(3, 2, Vec::new()), 1);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn scale_multiplies_output_size() {
    let c = comp(
        10,
        6,
        vec![
            backdrop(10.0, 6.0, Rgba8::WHITE),
            Primitive::fill(Geometry::rect(0.0, 0.0, 5.0, 6.0), Paint::solid(Rgba8::BLACK)),
        ],
    );
    let frame = render(&c, 3);
    assert_eq!((frame.width, frame.height), (30, 18));
    assert_eq!(frame.pixel(2, 9), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(27, 9), Some([255, 255, 255, 255]));
}

#[test]
fn later_primitives_paint_over_earlier_ones() {
    let c = comp(
        20,
        20,
        vec![
            backdrop(20.0, 20.0, Rgba8::WHITE),
            Primitive::fill(
                Geometry::circle(Point::new(10.0, 10.0), 6.0),
                Paint::solid(Rgba8::rgb(0, 255, 0)),
            ),
        ],
    );
    let frame = render(&c, 1);
    assert_eq!(frame.pixel(10, 10), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn alpha_uses_an_opacity_layer() {
    let c = comp(
        4,
        4,
        vec![
            backdrop(4.0, 4.0, Rgba8::WHITE),
            backdrop(4.0, 4.0, Rgba8::BLACK).with_alpha(0.5),
        ],
    );
    let px = render(&c, 1).pixel(2, 2).unwrap();
    assert!(near(px[0], 128, 2), "{px:?}");
    assert_eq!(px[3], 255);
}

#[test]
fn zero_alpha_draws_nothing() {
    let c = comp(
        4,
        4,
        vec![
            backdrop(4.0, 4.0, Rgba8::WHITE),
            backdrop(4.0, 4.0, Rgba8::BLACK).with_alpha(0.0),
        ],
    );
    assert_eq!(render(&c, 1).pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn stroked_polyline_covers_only_its_band() {
    let line = Primitive::stroke(
        Geometry::polyline([Point::new(0.0, 10.0), Point::new(20.0, 10.0)]),
        Paint::solid(Rgba8::BLACK),
        4.0,
        true,
    );
    let frame = render(&comp(20, 20, vec![backdrop(20.0, 20.0, Rgba8::WHITE), line]), 1);
    assert_eq!(frame.pixel(10, 9), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(10, 10), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(10, 2), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(10, 17), Some([255, 255, 255, 255]));
}

#[test]
fn stroke_outline_is_empty_for_zero_width() {
    let path = Geometry::polyline([Point::new(0.0, 0.0), Point::new(5.0, 5.0)]).to_bezpath();
    let style = StrokeStyle {
        width: 0.0,
        round_cap: false,
    };
    assert!(stroke_outline(&path, style).elements().is_empty());
    let style = StrokeStyle {
        width: 2.0,
        round_cap: false,
    };
    assert!(!stroke_outline(&path, style).elements().is_empty());
}

#[test]
fn linear_gradient_ramps_across_the_shape() {
    let paint = Paint::linear(
        Point::new(0.0, 0.0),
        Point::new(64.0, 0.0),
        &[Rgba8::BLACK, Rgba8::WHITE],
    );
    let c = comp(
        64,
        4,
        vec![Primitive::fill(Geometry::rect(0.0, 0.0, 64.0, 4.0), paint)],
    );
    let frame = render(&c, 1);
    let row: Vec<u8> = (0..64).map(|x| frame.pixel(x, 2).unwrap()[0]).collect();
    assert!(row[0] < 10, "{row:?}");
    assert!(row[63] > 245, "{row:?}");
    assert!(near(row[32], 129, 3), "{row:?}");
    assert!(
        row.windows(2).all(|w| u16::from(w[1]) + 1 >= u16::from(w[0])),
        "{row:?}"
    );
}

#[test]
fn gradient_follows_scale() {
    let paint = Paint::linear(
        Point::new(0.0, 0.0),
        Point::new(16.0, 0.0),
        &[Rgba8::BLACK, Rgba8::WHITE],
    );
    let c = comp(
        16,
        2,
        vec![Primitive::fill(Geometry::rect(0.0, 0.0, 16.0, 2.0), paint)],
    );
    let one = render(&c, 1);
    let two = render(&c, 2);
    let left = two.pixel(1, 1).unwrap()[0];
    let right = two.pixel(30, 1).unwrap()[0];
    assert!(left < 20 && right > 235, "{left} {right}");
    assert!(near(one.pixel(8, 1).unwrap()[0], two.pixel(16, 1).unwrap()[0], 12));
}

#[test]
fn radial_vignette_darkens_corners_more_than_center() {
    let center = Point::new(50.0, 50.0);
    let vignette = Primitive::fill(
        Geometry::rect(0.0, 0.0, 100.0, 100.0),
        Paint::radial(
            center,
            20.0,
            center,
            75.0,
            &[(0.0, Rgba8::rgba(0, 0, 0, 0)), (1.0, Rgba8::BLACK)],
        ),
    );
    let frame = render(
        &comp(100, 100, vec![backdrop(100.0, 100.0, Rgba8::WHITE), vignette]),
        1,
    );
    assert_eq!(frame.pixel(50, 50), Some([255, 255, 255, 255]));
    let corner = frame.pixel(0, 0).unwrap()[0];
    let edge = frame.pixel(50, 2).unwrap()[0];
    assert!(corner < edge && edge < 255, "{corner} {edge}");
}

#[test]
fn non_finite_primitives_are_skipped() {
    let bad = Primitive::fill(
        Geometry::circle(Point::new(f64::NAN, 1.0), 3.0),
        Paint::solid(Rgba8::BLACK),
    );
    let frame = render(&comp(4, 4, vec![backdrop(4.0, 4.0, Rgba8::WHITE), bad]), 1);
    assert!(frame.data.iter().all(|&b| b == 255));
}

#[test]
fn oversized_canvas_is_a_render_error() {
    // Built directly, since `Dimensions::new` refuses sides this large.
    let wide = Composition {
        dims: Dimensions {
            width: 70_000,
            height: 2,
        },
        primitives: Vec::new(),
    };
    let err = CpuBackend::new(RenderSettings::default())
        .render(&wide)
        .unwrap_err();
    assert!(matches!(err, TesseraError::Render(_)), "{err}");

    let err = CpuBackend::new(RenderSettings { scale: 4 })
        .render(&comp(17_000, 2, Vec::new()))
        .unwrap_err();
    assert!(matches!(err, TesseraError::Render(_)), "{err}");
}

#[test]
fn invalid_scale_is_rejected_at_render_time() {
    let err = CpuBackend::new(RenderSettings { scale: 0 })
        .render(&comp(2, 2, Vec::new()))
        .unwrap_err();
    assert!(matches!(err, TesseraError::Validation(_)));
}

#[test]
fn rendering_is_deterministic() {
    let c = comp(
        32,
        32,
        vec![
            backdrop(32.0, 32.0, Rgba8::from_hex("#1a1a2e")),
            Primitive::fill(
                Geometry::polygon([
                    Point::new(3.0, 4.0),
                    Point::new(29.0, 9.0),
                    Point::new(12.0, 30.0),
                ]),
                Paint::linear(
                    Point::new(0.0, 0.0),
                    Point::new(32.0, 32.0),
                    &[Rgba8::from_hex("#e94560"), Rgba8::from_hex("#0f3460")],
                ),
            )
            .with_alpha(0.7),
        ],
    );
    assert_eq!(render(&c, 2), render(&c, 2));
}
