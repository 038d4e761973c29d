use super::*;

#[test]
fn json_defaults_match_the_interactive_defaults() {
    let req = GenerationRequest::from_json_str(r#"{"style": "isoCubes", "seed": "k3j2"}"#).unwrap();
    assert_eq!(req.palette_index, 0);
    assert_eq!(req.aspect, AspectPreset::Portrait);
    assert!(req.use_gradient);
    assert!(req.dark_background);
    assert!(!req.use_vignette);
    assert!(req.style_params.is_empty());
    assert_eq!(req.style_id().unwrap(), StyleId::IsoCubes);
}

#[test]
fn unknown_style_surfaces_on_resolution() {
    let req = GenerationRequest::from_json_str(r#"{"style": "nope"}"#).unwrap();
    assert!(matches!(req.style_id(), Err(TesseraError::UnknownStyle(_))));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = GenerationRequest::from_json_str("{").unwrap_err();
    assert!(matches!(err, TesseraError::Serde(_)));
}

#[test]
fn dimension_overrides_need_both_sides() {
    let mut req = GenerationRequest::new(StyleId::Grid, "s");
    assert_eq!(req.dimensions().unwrap(), AspectPreset::Portrait.dimensions());

    req.width = Some(640);
    assert!(matches!(req.dimensions(), Err(TesseraError::Validation(_))));

    req.height = Some(480);
    assert_eq!(req.dimensions().unwrap(), Dimensions::new(640, 480).unwrap());

    req.height = Some(0);
    assert!(req.dimensions().is_err());
}

#[test]
fn huge_json_dimensions_fail_validation() {
    let req: GenerationRequest = serde_json::from_str(
        r#"{"style":"grid","seed":"s","width":4000000000,"height":4000000000}"#,
    )
    .unwrap();
    assert!(matches!(req.dimensions(), Err(TesseraError::Validation(_))));
}

#[test]
fn request_roundtrips_through_json() {
    let req = GenerationRequest::new(StyleId::OrbTrail, "abc")
        .with_param("count", ParamValue::Number(9.0))
        .with_param("manual_start", ParamValue::Bool(true));
    let text = serde_json::to_string(&req).unwrap();
    assert!(!text.contains("width"));
    assert_eq!(GenerationRequest::from_json_str(&text).unwrap(), req);
}
