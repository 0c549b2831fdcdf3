use super::*;

use crate::input::source::ScriptedSource;

fn scroll(top: f64) -> InputEvent {
    InputEvent::Scroll(ScrollMetrics {
        scroll_top: top,
        content_height: 4000.0,
        viewport_height: 800.0,
    })
}

#[test]
fn latest_continuous_sample_wins() {
    let mut source = ScriptedSource::new([
        scroll(100.0),
        InputEvent::PointerMove { x: 10.0, y: 10.0 },
        scroll(250.0),
        InputEvent::PointerMove { x: 50.0, y: 60.0 },
        scroll(300.0),
    ]);
    let frame = FrameCoalescer::new().drain(&mut source);
    assert_eq!(frame.scroll.unwrap().scroll_top, 300.0);
    assert_eq!(frame.pointer, Some((50.0, 60.0)));
    assert!(frame.resize.is_none());
    assert!(frame.discrete.is_empty());
}

#[test]
fn discrete_events_keep_order() {
    let mut source = ScriptedSource::new([
        InputEvent::PointerEnter {
            shape: "blob".into(),
        },
        scroll(10.0),
        InputEvent::RegionIntersect {
            region: "features".into(),
            ratio: 0.4,
        },
        InputEvent::PointerLeave {
            shape: "blob".into(),
        },
    ]);
    let frame = FrameCoalescer::new().drain(&mut source);
    assert_eq!(frame.discrete.len(), 3);
    assert!(matches!(frame.discrete[0], InputEvent::PointerEnter { .. }));
    assert!(matches!(
        frame.discrete[1],
        InputEvent::RegionIntersect { .. }
    ));
    assert!(matches!(frame.discrete[2], InputEvent::PointerLeave { .. }));
}

#[test]
fn empty_source_yields_empty_frame() {
    let mut source = ScriptedSource::default();
    let frame = FrameCoalescer::new().drain(&mut source);
    assert!(frame.is_empty());
}

#[test]
fn resize_is_continuous() {
    let mut source = ScriptedSource::new([
        InputEvent::Resize(Viewport::new(800.0, 600.0).unwrap()),
        InputEvent::Resize(Viewport::new(1280.0, 720.0).unwrap()),
    ]);
    let frame = FrameCoalescer::new().drain(&mut source);
    assert_eq!(frame.resize.unwrap().width, 1280.0);
}
