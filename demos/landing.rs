use scrollmorph::{
    FrameCoalescer, InputEvent, ScrollMetrics, ScriptedSource, Section, ShapeDriver,
    StoryboardBuilder, Viewport, contrast_shape, primary_shape,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let storyboard = StoryboardBuilder::new()
        .section(Section {
            id: "hero".into(),
            shape_path: "M0 0 L100 0 L100 100 Z".into(),
            color: "#6366f1".into(),
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
        })?
        .section(Section {
            id: "features".into(),
            shape_path: "M10 10 L110 10 L110 110 Z".into(),
            color: "#8b5cf6".into(),
            scale: 1.5,
            rotation: 10.0,
            opacity: 0.9,
        })?
        .section(Section {
            id: "pricing".into(),
            shape_path: "M0 20 L120 20 L120 140 Z".into(),
            color: "#ec4899".into(),
            scale: 2.0,
            rotation: -6.0,
            opacity: 1.0,
        })?
        .shape(primary_shape("blob"))?
        .shape(contrast_shape("halo", "M0 0 L60 60"))?
        .seed(42)
        .build()?;

    let mut driver = ShapeDriver::new(&storyboard)?;
    driver.watch_region("features", 0.3, false);

    let mut source = ScriptedSource::new([
        InputEvent::Resize(Viewport::new(1280.0, 720.0)?),
        InputEvent::PointerMove { x: 960.0, y: 300.0 },
    ]);
    let coalescer = FrameCoalescer::new();

    for frame_no in 0u32..180 {
        if frame_no % 30 == 0 {
            source.push(InputEvent::Scroll(ScrollMetrics {
                scroll_top: f64::from(frame_no) * 20.0,
                content_height: 4000.0,
                viewport_height: 720.0,
            }));
        }
        let input = coalescer.drain(&mut source);
        let shapes = driver.advance(&input, 1.0 / 60.0)?;
        if frame_no % 30 == 0 {
            for shape in &shapes {
                println!(
                    "frame {frame_no}: {} phase={:?} scale={:.3} rot={:.2} translate=({:.1}, {:.1})",
                    shape.shape_id,
                    shape.phase,
                    shape.scale,
                    shape.rotation_deg,
                    shape.translate.x,
                    shape.translate.y,
                );
            }
        }
    }

    Ok(())
}
