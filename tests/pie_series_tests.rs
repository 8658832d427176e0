use approx::assert_abs_diff_eq;
use chart_geometry::core::{
    DataPoint, PieLayout, PieOptions, PieSlice, Point, Viewport, compute_pie_slices, slice_path,
};

fn points(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| DataPoint::new(format!("p{i}"), *v))
        .collect()
}

fn angles(slices: &[PieSlice]) -> Vec<f64> {
    slices.iter().map(|s| s.angle).collect()
}

#[test]
fn sorted_slices_split_the_full_circle() {
    let slices = compute_pie_slices(&points(&[30.0, 50.0, 20.0]), PieOptions::default());

    assert_eq!(slices.len(), 3);
    let values: Vec<f64> = slices.iter().map(|s| s.point.value).collect();
    assert_eq!(values, vec![50.0, 30.0, 20.0]);
    assert_eq!(
        slices.iter().map(|s| s.source_index).collect::<Vec<_>>(),
        vec![1, 0, 2]
    );

    for (actual, expected) in angles(&slices).iter().zip([180.0, 108.0, 72.0]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(angles(&slices).iter().sum::<f64>(), 360.0, epsilon = 1e-9);

    assert_abs_diff_eq!(slices[0].start_angle, 0.0);
    assert_abs_diff_eq!(slices[1].start_angle, 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slices[2].start_angle, 288.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slices[0].percentage, 50.0, epsilon = 1e-9);
}

#[test]
fn unsorted_slices_keep_input_order() {
    let options = PieOptions::default().with_sort_slices(false);
    let slices = compute_pie_slices(&points(&[30.0, 50.0, 20.0]), options);

    for (actual, expected) in angles(&slices).iter().zip([108.0, 180.0, 72.0]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
    }
}

#[test]
fn equal_values_keep_input_order_when_sorted() {
    let slices = compute_pie_slices(&points(&[10.0, 10.0, 5.0]), PieOptions::default());
    assert_eq!(slices[0].point.label, "p0");
    assert_eq!(slices[1].point.label, "p1");
}

#[test]
fn padding_is_taken_from_the_sweep() {
    let options = PieOptions::default().with_pad_angle(10.0);
    let slices = compute_pie_slices(&points(&[30.0, 50.0, 20.0]), options);

    for (actual, expected) in angles(&slices).iter().zip([170.0, 102.0, 68.0]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(slices[1].start_angle, 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slices[2].start_angle, 292.0, epsilon = 1e-9);

    let sweep: f64 = angles(&slices).iter().sum();
    assert_abs_diff_eq!(sweep + 2.0 * 10.0, 360.0, epsilon = 1e-9);
}

#[test]
fn partial_ranges_are_respected() {
    let options = PieOptions::default().with_angles(-90.0, 90.0);
    let slices = compute_pie_slices(&points(&[1.0, 1.0]), options);

    assert_abs_diff_eq!(slices[0].start_angle, -90.0);
    assert_abs_diff_eq!(slices[1].end_angle(), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slices[0].mid_angle(), -45.0, epsilon = 1e-9);
}

#[test]
fn non_positive_values_are_dropped() {
    assert!(compute_pie_slices(&[], PieOptions::default()).is_empty());
    assert!(compute_pie_slices(&points(&[0.0, -5.0, f64::NAN]), PieOptions::default()).is_empty());

    let slices = compute_pie_slices(&points(&[0.0, 10.0]), PieOptions::default());
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].source_index, 1);
    assert_abs_diff_eq!(slices[0].angle, 360.0);
    assert_abs_diff_eq!(slices[0].percentage, 100.0);
}

#[test]
fn half_slices_draw_wedges_from_the_center() {
    let slices = compute_pie_slices(&points(&[1.0, 1.0]), PieOptions::default());
    let layout = PieLayout::new(Point::new(100.0, 50.0), 50.0, 0.0);

    assert_eq!(
        slice_path(&slices[0], layout).to_svg(),
        "M100,50 L100,0 A50,50 0 0 1 100,100 Z"
    );
    assert_eq!(
        slice_path(&slices[1], layout).to_svg(),
        "M100,50 L100,100 A50,50 0 0 1 100,0 Z"
    );
}

#[test]
fn donut_slices_are_ring_segments() {
    let slices = compute_pie_slices(&points(&[1.0, 1.0]), PieOptions::default());
    let layout = PieLayout::new(Point::new(100.0, 50.0), 50.0, 50.0);
    assert!(layout.is_donut());

    assert_eq!(
        slice_path(&slices[0], layout).to_svg(),
        "M100,0 A50,50 0 0 1 100,100 L100,75 A25,25 0 0 0 100,25 Z"
    );
}

#[test]
fn large_slices_set_the_large_arc_flag() {
    let slices = compute_pie_slices(&points(&[3.0, 1.0]), PieOptions::default());
    let layout = PieLayout::new(Point::new(0.0, 0.0), 10.0, 0.0);

    assert!(slice_path(&slices[0], layout).to_svg().contains(" 0 1 1 "));
    assert!(slice_path(&slices[1], layout).to_svg().contains(" 0 0 1 "));
}

#[test]
fn zero_sweep_slices_have_no_path() {
    let slices = compute_pie_slices(&points(&[5.0]), PieOptions::default());
    let collapsed = slices[0].collapsed(0.0);
    let layout = PieLayout::new(Point::new(0.0, 0.0), 10.0, 0.0);
    assert!(slice_path(&collapsed, layout).is_empty());
}

#[test]
fn layout_fits_the_viewport() {
    let layout = PieLayout::fit(Viewport::new(200, 100), 50.0);
    assert_eq!(layout.center, Point::new(100.0, 50.0));
    assert_abs_diff_eq!(layout.outer_radius, 50.0);
    assert_abs_diff_eq!(layout.inner_radius, 25.0);

    let clamped = PieLayout::fit(Viewport::new(100, 100), 250.0);
    assert_abs_diff_eq!(clamped.inner_radius, clamped.outer_radius);

    let slices = compute_pie_slices(&points(&[1.0, 1.0]), PieOptions::default());
    let anchor = layout.label_anchor(&slices[0]);
    assert_abs_diff_eq!(anchor.x, 137.5, epsilon = 1e-9);
    assert_abs_diff_eq!(anchor.y, 50.0, epsilon = 1e-9);
}
