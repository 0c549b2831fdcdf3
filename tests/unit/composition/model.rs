use super::*;

fn section(id: &str) -> Section {
    Section {
        id: id.to_owned(),
        shape_path: "M0 0 L10 0 L10 10 Z".to_owned(),
        color: "#6366f1".to_owned(),
        scale: 1.0,
        rotation: 0.0,
        opacity: 1.0,
    }
}

fn shape(id: &str) -> ShapeConfig {
    ShapeConfig {
        id: id.to_owned(),
        follows_sections: true,
        base_path: None,
        parallax_gain: 30.0,
        scrub_lag_secs: 1.5,
        hover: HoverSpec::default(),
        focus_boost: 1.1,
    }
}

fn storyboard() -> Storyboard {
    Storyboard {
        sections: vec![section("hero"), section("features")],
        shapes: vec![shape("blob")],
        seed: 0,
    }
}

#[test]
fn valid_storyboard_compiles() {
    let compiled = storyboard().compile().unwrap();
    assert_eq!(compiled.len(), 2);
    assert_eq!(compiled[0].id, "hero");
    assert_eq!(compiled[0].color.to_hex(), "#6366f1");
}

#[test]
fn duplicate_section_id_rejected() {
    let mut sb = storyboard();
    sb.sections.push(section("hero"));
    let err = sb.validate().unwrap_err();
    assert!(matches!(err, MorphError::Validation(_)));
    assert!(err.to_string().contains("duplicate section id 'hero'"));
}

#[test]
fn duplicate_shape_id_rejected() {
    let mut sb = storyboard();
    sb.shapes.push(shape("blob"));
    assert!(sb.validate().unwrap_err().to_string().contains("'blob'"));
}

#[test]
fn bad_section_fields_rejected() {
    let mut sb = storyboard();
    sb.sections[0].opacity = 1.5;
    assert!(sb.validate().is_err());

    let mut sb = storyboard();
    sb.sections[0].scale = 0.0;
    assert!(sb.validate().is_err());

    let mut sb = storyboard();
    sb.sections[0].color = "rebeccapurple".to_owned();
    assert!(sb.validate().is_err());

    let mut sb = storyboard();
    sb.sections[0].shape_path = "Q not a path".to_owned();
    assert!(sb.validate().is_err());

    let mut sb = storyboard();
    sb.sections[0].rotation = f64::NAN;
    assert!(sb.validate().is_err());
}

#[test]
fn non_following_shape_needs_base_path() {
    let mut sb = storyboard();
    sb.shapes[0].follows_sections = false;
    assert!(sb.validate().is_err());

    sb.shapes[0].base_path = Some("M0 0 L5 5".to_owned());
    assert!(sb.validate().is_ok());
}

#[test]
fn hover_duration_must_be_positive() {
    let mut sb = storyboard();
    sb.shapes[0].hover.duration_secs = 0.0;
    assert!(sb.validate().is_err());
}

#[test]
fn negative_scrub_lag_rejected() {
    let mut sb = storyboard();
    sb.shapes[0].scrub_lag_secs = -1.0;
    assert!(sb.validate().is_err());
}

#[test]
fn json_round_trip_and_bad_json() {
    let json = serde_json::to_string(&storyboard()).unwrap();
    let parsed = Storyboard::from_json_str(&json).unwrap();
    assert_eq!(parsed.sections.len(), 2);
    assert_eq!(parsed.shapes[0].id, "blob");

    let err = Storyboard::from_json_str("{").unwrap_err();
    assert!(matches!(err, MorphError::Serde(_)));
}

#[test]
fn seed_defaults_to_zero() {
    let json = r##"{
        "sections": [],
        "shapes": []
    }"##;
    let sb = Storyboard::from_json_str(json).unwrap();
    assert_eq!(sb.seed, 0);
}
