use super::*;

use crate::composition::model::Section;

fn compiled(specs: &[(&str, &str, f64)]) -> Vec<CompiledSection> {
    specs
        .iter()
        .map(|(id, color, scale)| {
            Section {
                id: (*id).to_owned(),
                shape_path: "M0 0 L10 0 L10 10 Z".to_owned(),
                color: (*color).to_owned(),
                scale: *scale,
                rotation: 0.0,
                opacity: 1.0,
            }
            .compile()
            .unwrap()
        })
        .collect()
}

#[test]
fn segment_index_partitions_evenly() {
    assert_eq!(segment_index(Progress::new(0.0), 4), 0);
    assert_eq!(segment_index(Progress::new(0.24), 4), 0);
    assert_eq!(segment_index(Progress::new(0.25), 4), 1);
    assert_eq!(segment_index(Progress::new(0.5), 4), 2);
    assert_eq!(segment_index(Progress::new(0.99), 4), 3);
    assert_eq!(segment_index(Progress::new(1.0), 4), 3);
    assert_eq!(segment_index(Progress::new(0.7), 0), 0);
}

#[test]
fn empty_sections_yield_none() {
    assert!(interpolate(Progress::ZERO, &[], Ease::Linear).is_none());
}

#[test]
fn single_section_is_identity_everywhere() {
    let sections = compiled(&[("hero", "#6366f1", 1.5)]);
    for p in [0.0, 0.3, 0.9, 1.0] {
        let attrs = interpolate(Progress::new(p), &sections, Ease::InOutCubic).unwrap();
        assert_eq!(attrs.scale, 1.5);
        assert_eq!(attrs.color, sections[0].color);
        assert_eq!(attrs.path, sections[0].path);
    }
}

#[test]
fn segment_endpoints_match_sections_exactly() {
    let sections = compiled(&[
        ("hero", "#000000", 1.0),
        ("features", "#888888", 2.0),
        ("pricing", "#ffffff", 3.0),
    ]);
    let at = |p: f64| interpolate(Progress::new(p), &sections, Ease::InOutCubic).unwrap();

    assert_eq!(at(0.0).scale, 1.0);
    // Segment boundary 1/3 lands exactly on the middle section.
    assert!((at(1.0 / 3.0).scale - 2.0).abs() < 1e-12);
    assert_eq!(at(1.0).scale, 3.0);
}

#[test]
fn final_segment_holds_last_section() {
    let sections = compiled(&[("a", "#000000", 1.0), ("b", "#ffffff", 2.0)]);
    let attrs = interpolate(Progress::new(0.8), &sections, Ease::Linear).unwrap();
    assert_eq!(attrs.scale, 2.0);
    assert_eq!(attrs.color, sections[1].color);
}

#[test]
fn midpoint_blends_strictly_between() {
    let sections = compiled(&[
        ("a", "#000000", 1.0),
        ("b", "#808080", 1.5),
        ("c", "#ffffff", 2.0),
    ]);
    // 0.5 falls in segment 1 at local offset 0.5, blending b toward c.
    let attrs = interpolate(Progress::new(0.5), &sections, Ease::InOutCubic).unwrap();
    assert!(attrs.scale > 1.5);
    assert!(attrs.scale < 2.0);
    assert!((attrs.scale - 1.75).abs() < 1e-12);
}

#[test]
fn linear_ease_blends_proportionally() {
    let sections = compiled(&[("a", "#000000", 1.0), ("b", "#ffffff", 3.0)]);
    // Two sections: segment 0 covers [0, 0.5); 0.25 is local offset 0.5.
    let attrs = interpolate(Progress::new(0.25), &sections, Ease::Linear).unwrap();
    assert!((attrs.scale - 2.0).abs() < 1e-12);
    assert_eq!(attrs.color.r, 128);
}
