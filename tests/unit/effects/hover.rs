use super::*;

use crate::animation::ease::Ease;

fn linear_spec() -> HoverSpec {
    HoverSpec {
        ease: Ease::Linear,
        ..HoverSpec::default()
    }
}

#[test]
fn idle_layer_is_identity() {
    let layer = HoverLayer::new(HoverSpec::default());
    assert_eq!(layer.offsets(), HoverOffsets::IDENTITY);
}

#[test]
fn full_sweep_reaches_spec_targets_exactly() {
    let mut layer = HoverLayer::new(HoverSpec::default());
    layer.set_hovered(true);
    layer.tick(10.0);
    let offsets = layer.offsets();
    assert!((offsets.scale_mul - 1.15).abs() < 1e-12);
    assert!((offsets.rotation_delta_deg - 5.0).abs() < 1e-12);
    assert!((offsets.lift_px - -15.0).abs() < 1e-12);
}

#[test]
fn leave_returns_to_identity() {
    let mut layer = HoverLayer::new(HoverSpec::default());
    layer.set_hovered(true);
    layer.tick(10.0);
    layer.set_hovered(false);
    layer.tick(10.0);
    assert_eq!(layer.offsets(), HoverOffsets::IDENTITY);
    assert!(!layer.is_hovered());
}

#[test]
fn midway_sweep_blends_linearly() {
    let mut layer = HoverLayer::new(linear_spec());
    layer.set_hovered(true);
    layer.tick(0.2); // half of the 0.4s sweep
    let offsets = layer.offsets();
    assert!((offsets.scale_mul - 1.075).abs() < 1e-12);
    assert!((offsets.rotation_delta_deg - 2.5).abs() < 1e-12);
    assert!((offsets.lift_px - -7.5).abs() < 1e-12);
}

#[test]
fn shrink_spec_scales_below_one() {
    let mut layer = HoverLayer::new(HoverSpec {
        scale: 0.85,
        rotation_deg: -5.0,
        lift_px: 0.0,
        ..linear_spec()
    });
    layer.set_hovered(true);
    layer.tick(10.0);
    let offsets = layer.offsets();
    assert!((offsets.scale_mul - 0.85).abs() < 1e-12);
    assert!((offsets.rotation_delta_deg - -5.0).abs() < 1e-12);
    assert_eq!(offsets.lift_px, 0.0);
}
