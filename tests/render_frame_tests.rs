use approx::assert_abs_diff_eq;
use chart_geometry::api::{ChartConfig, ChartKind, SeriesPalette, build_frame, compute_geometry};
use chart_geometry::core::{
    BarLayoutOptions, BarMode, ChartGeometry, ChartInput, DataPoint, Series, StackingMode,
    Viewport, normalize,
};
use chart_geometry::render::{Color, NullRenderer, RectPrimitive, RenderFrame, Renderer, palette_color};

fn config(kind: ChartKind) -> ChartConfig {
    ChartConfig::new(Viewport::new(400, 200), kind)
}

#[test]
fn simple_bars_use_point_colors_with_palette_fallback() {
    let input = ChartInput::Points(vec![
        DataPoint::new("a", 50.0).with_color("#ff0000"),
        DataPoint::new("b", 100.0).with_color("not-a-color"),
        DataPoint::new("c", 25.0),
    ]);
    let data = normalize(&input, StackingMode::None);
    let config = config(ChartKind::Bar);
    let geometry = compute_geometry(&data, config);
    let frame = build_frame(&geometry, &data, &SeriesPalette::default(), config);

    assert_eq!(frame.rects.len(), 3);
    assert_eq!(frame.rects[0].fill, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(frame.rects[1].fill, palette_color(0));
    assert_eq!(frame.rects[2].fill, palette_color(0));
    assert_abs_diff_eq!(frame.rects[0].corner_radius, 4.0);
    frame.validate().expect("valid frame");
}

#[test]
fn only_the_top_stack_segment_is_rounded() {
    let input = ChartInput::Series(vec![
        Series::from_values("a", &[10.0]),
        Series::from_values("b", &[5.0]),
    ]);
    let data = normalize(&input, StackingMode::Stacked);
    let config = config(ChartKind::Bar)
        .with_bar_options(BarLayoutOptions::default().with_mode(BarMode::Stacked));
    let palette = SeriesPalette {
        colors: vec![Color::rgb(0.0, 0.0, 1.0), Color::rgb(0.0, 1.0, 0.0)],
    };
    let frame = build_frame(&compute_geometry(&data, config), &data, &palette, config);

    assert_eq!(frame.rects[0].corner_radius, 0.0);
    assert!(frame.rects[1].corner_radius > 0.0);
    assert_eq!(frame.rects[0].fill, palette.colors[0]);
    assert_eq!(frame.rects[1].fill, palette.colors[1]);
}

#[test]
fn corner_radius_never_exceeds_half_the_bar() {
    let input = ChartInput::Points(vec![DataPoint::new("tiny", 1.0), DataPoint::new("big", 100.0)]);
    let data = normalize(&input, StackingMode::None);
    let config = config(ChartKind::Bar)
        .with_bar_options(BarLayoutOptions::default().with_corner_radius(50.0));
    let frame = build_frame(
        &compute_geometry(&data, config),
        &data,
        &SeriesPalette::default(),
        config,
    );

    // tiny bar is 2px tall.
    assert_abs_diff_eq!(frame.rects[0].corner_radius, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.rects[1].corner_radius, 50.0);
}

#[test]
fn areas_emit_translucent_fill_and_stroke() {
    let input = ChartInput::Series(vec![Series::from_values("s", &[1.0, 2.0])]);
    let data = normalize(&input, StackingMode::None);
    let config = config(ChartKind::Area);
    let palette = SeriesPalette {
        colors: vec![Color::rgb(0.5, 0.5, 0.5)],
    };
    let frame = build_frame(&compute_geometry(&data, config), &data, &palette, config);

    assert_eq!(frame.paths.len(), 2);
    let fill = frame.paths[0].fill.expect("fill");
    assert_abs_diff_eq!(fill.alpha, 0.3);
    assert_eq!(frame.paths[1].stroke, Some(Color::rgb(0.5, 0.5, 0.5)));
    assert_abs_diff_eq!(frame.paths[1].stroke_width, 2.0);
}

#[test]
fn pie_slices_keep_their_source_color() {
    let input = ChartInput::Points(vec![
        DataPoint::new("small", 10.0),
        DataPoint::new("large", 90.0).with_color("#00f"),
    ]);
    let data = normalize(&input, StackingMode::None);
    let config = config(ChartKind::Pie);
    let frame = build_frame(
        &compute_geometry(&data, config),
        &data,
        &SeriesPalette::default(),
        config,
    );

    assert_eq!(frame.paths.len(), 2);
    assert_eq!(frame.paths[0].fill, Some(Color::rgb(0.0, 0.0, 1.0)));
    assert_eq!(frame.paths[1].fill, Some(palette_color(0)));
}

#[test]
fn empty_data_computes_empty_geometry() {
    let data = normalize(&ChartInput::Points(Vec::new()), StackingMode::None);
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Area, ChartKind::Pie] {
        let geometry = compute_geometry(&data, config(kind));
        assert_eq!(geometry, ChartGeometry::Empty, "{kind:?}");
        assert!(build_frame(&geometry, &data, &SeriesPalette::default(), config(kind)).is_empty());
    }
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        -5.0,
        10.0,
        palette_color(0),
    ));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);

    let frame = RenderFrame::new(Viewport::new(100, 100)).with_rect(
        RectPrimitive::new(0.0, 0.0, 5.0, 10.0, Color::rgba(0.1, 0.2, 0.3, 0.4))
            .with_corner_radius(2.0),
    );
    renderer.render(&frame).expect("valid frame");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 1);
}
