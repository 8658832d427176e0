use chart_geometry::core::{
    ChartInput, CurveMode, Point, Series, StackingMode, Viewport, normalize, project_areas,
};

fn areas(values: &[f64], curve: CurveMode) -> Vec<chart_geometry::core::AreaGeometry> {
    let input = ChartInput::Series(vec![Series::from_values("s", values)]);
    let data = normalize(&input, StackingMode::None);
    project_areas(&data, Viewport::new(200, 100), curve)
}

#[test]
fn fill_path_closes_against_the_baseline() {
    let areas = areas(&[50.0, 100.0, 50.0], CurveMode::Straight);
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].baseline_y, 100.0);

    assert_eq!(
        areas[0].fill_path().to_svg(),
        "M0,100 L0,50 L100,0 L200,50 L200,100 Z"
    );
    assert_eq!(areas[0].line_path().to_svg(), "M0,50 L100,0 L200,50");
}

#[test]
fn curved_fill_reuses_the_line_segments() {
    let areas = areas(&[50.0, 100.0], CurveMode::Curved);
    assert_eq!(
        areas[0].fill_path().to_svg(),
        "M0,100 L0,50 C66.667,50 133.333,0 200,0 L200,100 Z"
    );
}

#[test]
fn fill_polygon_is_explicitly_closed() {
    let areas = areas(&[50.0, 100.0, 50.0], CurveMode::Straight);
    let polygon = areas[0].fill_polygon();

    assert_eq!(
        polygon,
        vec![
            Point::new(0.0, 100.0),
            Point::new(0.0, 50.0),
            Point::new(100.0, 0.0),
            Point::new(200.0, 50.0),
            Point::new(200.0, 100.0),
            Point::new(0.0, 100.0),
        ]
    );
    assert_eq!(polygon.first(), polygon.last());
}

#[test]
fn single_sample_gets_a_fillable_width() {
    let areas = areas(&[50.0], CurveMode::Straight);
    assert_eq!(
        areas[0].fill_path().to_svg(),
        "M99,100 L99,0 L101,0 L101,100 Z"
    );
}

#[test]
fn collapsed_area_is_flat() {
    let areas = areas(&[20.0, 80.0], CurveMode::Straight);
    let collapsed = areas[0].collapsed();
    assert!(collapsed.line.points.iter().all(|p| p.y == 100.0));
    assert_eq!(collapsed.baseline_y, 100.0);
}

#[test]
fn empty_data_has_no_area() {
    assert!(areas(&[], CurveMode::Straight).is_empty());
}
