use super::*;

#[test]
fn presets_resolve_to_fixed_sizes() {
    assert_eq!(
        AspectPreset::Square.dimensions(),
        Dimensions {
            width: 1200,
            height: 1200
        }
    );
    assert_eq!(
        AspectPreset::Landscape.dimensions(),
        Dimensions {
            width: 1920,
            height: 1080
        }
    );
    assert_eq!(
        AspectPreset::Portrait.dimensions(),
        Dimensions {
            width: 1200,
            height: 1600
        }
    );
}

#[test]
fn preset_ids_parse_back() {
    for a in AspectPreset::ALL {
        assert_eq!(a.id().parse::<AspectPreset>().unwrap(), a);
    }
    assert_eq!(
        "Landscape".parse::<AspectPreset>().unwrap(),
        AspectPreset::Landscape
    );
    assert!("wide".parse::<AspectPreset>().is_err());
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(Dimensions::new(0, 10).is_err());
    assert!(Dimensions::new(10, 0).is_err());
    let d = Dimensions::new(300, 200).unwrap();
    assert_eq!(d.min_side(), 200.0);
    assert_eq!(d.max_side(), 300.0);
    assert_eq!(d.center(), Point::new(150.0, 100.0));
}

#[test]
fn sides_above_the_raster_limit_are_rejected() {
    assert!(Dimensions::new(65_535, 1).is_ok());
    assert!(Dimensions::new(1, 65_535).is_ok());
    for (w, h) in [(65_536, 10), (10, 65_536), (4_000_000_000, 4_000_000_000)] {
        let err = Dimensions::new(w, h).unwrap_err();
        assert!(matches!(err, TesseraError::Validation(_)), "{err}");
    }
}
