use super::*;
use crate::foundation::core::AspectPreset;
use crate::styles::StyleId;

fn small(style: StyleId, seed: &str) -> GenerationRequest {
    let mut req = GenerationRequest::new(style, seed);
    req.width = Some(48);
    req.height = Some(32);
    req
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = vec![64, 32, 0, 128, 9, 9, 9, 0, 10, 20, 30, 255];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, vec![128, 64, 0, 128, 0, 0, 0, 0, 10, 20, 30, 255]);
}

#[test]
fn png_decodes_back_to_the_frame() {
    let frame = FrameRGBA {
        width: 3,
        height: 2,
        data: [255u8, 0, 0, 255].repeat(6),
        premultiplied: true,
    };
    let png = encode_png(&frame).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.as_raw(), &frame.data);
}

#[test]
fn png_of_mismatched_buffer_is_a_render_error() {
    let frame = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 7],
        premultiplied: false,
    };
    assert!(matches!(encode_png(&frame), Err(TesseraError::Render(_))));
}

#[test]
fn file_name_follows_download_convention() {
    let req = GenerationRequest::new(StyleId::IsoCubes, "abc");
    assert_eq!(export_file_name(&req), "geo-isoCubes-portrait-abc.png");

    let mut req = GenerationRequest::new(StyleId::Waves, "");
    req.aspect = AspectPreset::Landscape;
    assert_eq!(export_file_name(&req), "geo-waves-landscape-seed.png");

    req.style = "orb-trail".into();
    req.seed = "a/b".into();
    assert_eq!(export_file_name(&req), "geo-orbTrail-landscape-a_b.png");

    req.style = "nope".into();
    assert_eq!(export_file_name(&req), "geo-nope-landscape-a_b.png");
}

#[test]
fn file_name_uses_explicit_size_when_overridden() {
    let mut req = GenerationRequest::new(StyleId::Chevron, "x");
    req.width = Some(640);
    req.height = Some(480);
    assert_eq!(export_file_name(&req), "geo-chevron-640x480-x.png");

    // A lone override does not resolve, so the aspect still names the file.
    req.height = None;
    assert_eq!(export_file_name(&req), "geo-chevron-portrait-x.png");
}

#[test]
fn thread_pool_rejects_zero_threads() {
    assert!(matches!(
        build_thread_pool(Some(0)),
        Err(TesseraError::Validation(_))
    ));
    assert_eq!(build_thread_pool(Some(2)).unwrap().current_num_threads(), 2);
}

#[test]
fn batch_matches_sequential_rendering_in_order() {
    let requests = vec![
        small(StyleId::Concentric, "one"),
        small(StyleId::IsoCubes, "two"),
        small(StyleId::GradientFlow, "three"),
        small(StyleId::PerspectiveGrid, "four"),
    ];
    let settings = RenderSettings::default();
    let batch = render_batch(&requests, &settings, Some(3)).unwrap();

    let mut backend = CpuBackend::new(settings);
    let sequential: Vec<FrameRGBA> = requests
        .iter()
        .map(|r| render_request(r, &mut backend).unwrap())
        .collect();
    assert_eq!(batch, sequential);
}

#[test]
fn batch_fails_on_a_bad_request() {
    let mut bad = small(StyleId::Bands, "x");
    bad.style = "nope".into();
    let requests = vec![small(StyleId::Bands, "ok"), bad];
    let err = render_batch(&requests, &RenderSettings::default(), Some(1)).unwrap_err();
    assert!(matches!(err, TesseraError::UnknownStyle(_)), "{err}");

    let err = render_batch(&requests[..1], &RenderSettings { scale: 5 }, None).unwrap_err();
    assert!(matches!(err, TesseraError::Validation(_)));
}
