use approx::assert_abs_diff_eq;
use chart_geometry::core::{
    BarLayoutOptions, BarMode, BarRect, ChartInput, DataPoint, Orientation, Series, StackingMode,
    Viewport, normalize, project_bars,
};

fn points(values: &[f64]) -> ChartInput {
    ChartInput::Points(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(format!("p{i}"), *v))
            .collect(),
    )
}

fn assert_rect(rect: &BarRect, x: f64, y: f64, width: f64, height: f64) {
    assert_abs_diff_eq!(rect.x, x, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.y, y, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.width, width, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.height, height, epsilon = 1e-9);
}

#[test]
fn simple_bars_fill_slots_and_grow_up() {
    let data = normalize(&points(&[50.0, 100.0]), StackingMode::None);
    let rects = project_bars(&data, Viewport::new(400, 200), BarLayoutOptions::default());

    assert_eq!(rects.len(), 2);
    // slot 200px, 20% gap leaves 160px bars centered in the slot.
    assert_rect(&rects[0], 20.0, 100.0, 160.0, 100.0);
    assert_rect(&rects[1], 220.0, 0.0, 160.0, 200.0);
    assert!(rects.iter().all(|r| r.rounded));
    assert_eq!(rects[1].data_index, 1);
}

#[test]
fn max_bar_width_caps_and_recenters() {
    let data = normalize(&points(&[50.0, 100.0]), StackingMode::None);
    let options = BarLayoutOptions::default().with_max_bar_width(50.0);
    let rects = project_bars(&data, Viewport::new(400, 200), options);

    assert_rect(&rects[0], 75.0, 100.0, 50.0, 100.0);
    assert_rect(&rects[1], 275.0, 0.0, 50.0, 200.0);
}

#[test]
fn horizontal_bars_swap_axes() {
    let data = normalize(&points(&[50.0, 100.0]), StackingMode::None);
    let options = BarLayoutOptions::default().with_orientation(Orientation::Horizontal);
    let rects = project_bars(&data, Viewport::new(400, 200), options);

    assert_rect(&rects[0], 0.0, 10.0, 200.0, 80.0);
    assert_rect(&rects[1], 0.0, 110.0, 400.0, 80.0);
}

#[test]
fn simple_mode_only_draws_first_series() {
    let input = ChartInput::Series(vec![
        Series::from_values("a", &[10.0, 20.0]),
        Series::from_values("b", &[30.0, 40.0]),
    ]);
    let data = normalize(&input, StackingMode::None);
    let rects = project_bars(&data, Viewport::new(400, 200), BarLayoutOptions::default());

    assert_eq!(rects.len(), 2);
    assert!(rects.iter().all(|r| r.series_index == 0));
}

#[test]
fn simple_mode_scales_to_the_drawn_series() {
    let input = ChartInput::Series(vec![
        Series::from_values("a", &[10.0]),
        Series::from_values("b", &[1_000.0]),
    ]);
    let data = normalize(&input, StackingMode::None);
    let rects = project_bars(&data, Viewport::new(100, 100), BarLayoutOptions::default());

    assert_eq!(rects.len(), 1);
    assert_rect(&rects[0], 10.0, 0.0, 80.0, 100.0);
}

#[test]
fn stacked_bars_scale_to_stack_sums_whatever_the_normalization() {
    let input = ChartInput::Series(vec![
        Series::from_values("a", &[10.0, 20.0]),
        Series::from_values("b", &[5.0, 15.0]),
    ]);
    let options = BarLayoutOptions::default().with_mode(BarMode::Stacked);
    let flat = project_bars(
        &normalize(&input, StackingMode::None),
        Viewport::new(100, 100),
        options,
    );
    let stacked = project_bars(
        &normalize(&input, StackingMode::Stacked),
        Viewport::new(100, 100),
        options,
    );

    assert_eq!(flat, stacked);
    assert!(flat.iter().all(|r| r.y >= 0.0 && r.y + r.height <= 100.0));
    // second stack sums to 35, the shared maximum.
    assert_abs_diff_eq!(flat[3].y, 0.0, epsilon = 1e-9);
}

#[test]
fn overflowing_stacks_stay_finite_and_inside_the_viewport() {
    let input = ChartInput::Series(vec![
        Series::from_values("a", &[1e308]),
        Series::from_values("b", &[1e308]),
        Series::from_values("c", &[1e308]),
    ]);
    let data = normalize(&input, StackingMode::Stacked);
    let options = BarLayoutOptions::default().with_mode(BarMode::Stacked);
    let rects = project_bars(&data, Viewport::new(100, 100), options);

    assert_eq!(rects.len(), 3);
    for rect in &rects {
        assert!(rect.y.is_finite() && rect.height.is_finite());
        assert!(rect.y >= 0.0 && rect.y + rect.height <= 100.0 + 1e-9);
    }
}

#[test]
fn stacked_bars_accumulate_and_round_the_top_segment() {
    let input = ChartInput::Series(vec![
        Series::from_values("a", &[10.0, 20.0]),
        Series::from_values("b", &[5.0, 15.0]),
    ]);
    let data = normalize(&input, StackingMode::Stacked);
    assert_abs_diff_eq!(data.max_value, 35.0);

    let options = BarLayoutOptions::default().with_mode(BarMode::Stacked);
    let rects = project_bars(&data, Viewport::new(350, 350), options);
    assert_eq!(rects.len(), 4);

    // 10px per unit; slot 175px with 140px bars.
    assert_rect(&rects[0], 17.5, 250.0, 140.0, 100.0);
    assert_rect(&rects[1], 17.5, 200.0, 140.0, 50.0);
    assert_rect(&rects[2], 192.5, 150.0, 140.0, 200.0);
    assert_rect(&rects[3], 192.5, 0.0, 140.0, 150.0);

    assert_eq!(
        rects.iter().map(|r| r.rounded).collect::<Vec<_>>(),
        vec![false, true, false, true]
    );
}

#[test]
fn stacked_top_is_last_series_with_data() {
    let input = ChartInput::Series(vec![
        Series::from_values("a", &[10.0, 20.0]),
        Series::from_values("b", &[5.0]),
    ]);
    let data = normalize(&input, StackingMode::Stacked);
    let options = BarLayoutOptions::default().with_mode(BarMode::Stacked);
    let rects = project_bars(&data, Viewport::new(300, 300), options);

    assert_eq!(rects.len(), 3);
    let second_category: Vec<&BarRect> = rects.iter().filter(|r| r.data_index == 1).collect();
    assert_eq!(second_category.len(), 1);
    assert!(second_category[0].rounded);
}

#[test]
fn grouped_bars_split_the_slot() {
    let input = ChartInput::Series(vec![
        Series::from_values("a", &[50.0]),
        Series::from_values("b", &[100.0]),
    ]);
    let data = normalize(&input, StackingMode::None);
    let options = BarLayoutOptions::default().with_mode(BarMode::Grouped);
    let rects = project_bars(&data, Viewport::new(400, 200), options);

    assert_eq!(rects.len(), 2);
    // group 320px from x=40, two 160px sub-slots holding 144px bars.
    assert_rect(&rects[0], 48.0, 100.0, 144.0, 100.0);
    assert_rect(&rects[1], 208.0, 0.0, 144.0, 200.0);
}

#[test]
fn negative_values_have_zero_length() {
    let data = normalize(&points(&[-20.0, 40.0]), StackingMode::None);
    let rects = project_bars(&data, Viewport::new(200, 100), BarLayoutOptions::default());

    assert_eq!(rects[0].height, 0.0);
    assert_abs_diff_eq!(rects[0].y, 100.0, epsilon = 1e-9);
}

#[test]
fn degenerate_inputs_yield_no_bars() {
    let empty = normalize(&points(&[]), StackingMode::None);
    assert!(project_bars(&empty, Viewport::new(400, 200), BarLayoutOptions::default()).is_empty());

    let data = normalize(&points(&[1.0, 2.0]), StackingMode::None);
    assert!(project_bars(&data, Viewport::new(0, 200), BarLayoutOptions::default()).is_empty());
    assert!(project_bars(&data, Viewport::new(400, 0), BarLayoutOptions::default()).is_empty());
}

#[test]
fn collapsed_bars_sit_on_the_baseline() {
    let data = normalize(&points(&[50.0]), StackingMode::None);
    let rect = project_bars(&data, Viewport::new(100, 100), BarLayoutOptions::default())[0];

    let vertical = rect.collapsed(Orientation::Vertical);
    assert_eq!(vertical.height, 0.0);
    assert_abs_diff_eq!(vertical.y, 100.0, epsilon = 1e-9);

    let horizontal = rect.collapsed(Orientation::Horizontal);
    assert_eq!(horizontal.width, 0.0);
    assert_eq!(horizontal.x, rect.x);
}
