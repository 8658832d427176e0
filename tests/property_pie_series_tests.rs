use chart_geometry::core::{DataPoint, PieOptions, compute_pie_slices};
use proptest::prelude::*;

proptest! {
    #[test]
    fn slice_angles_fill_the_available_sweep(
        values in proptest::collection::vec(0.01f64..10_000.0, 1..24),
        start in -360.0f64..360.0,
        span in 10.0f64..360.0,
        pad in 0.0f64..0.4,
        sort in any::<bool>()
    ) {
        let points: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(format!("p{i}"), *v))
            .collect();
        let options = PieOptions::default()
            .with_angles(start, start + span)
            .with_pad_angle(pad)
            .with_sort_slices(sort);

        let slices = compute_pie_slices(&points, options);
        prop_assert_eq!(slices.len(), values.len());

        let padding = pad * (values.len() - 1) as f64;
        let sweep: f64 = slices.iter().map(|s| s.angle).sum();
        let expected = (span - padding).max(0.0);
        prop_assert!((sweep - expected).abs() <= 1e-6 * span.max(1.0));

        let percent: f64 = slices.iter().map(|s| s.percentage).sum();
        prop_assert!((percent - 100.0).abs() <= 1e-6);

        for pair in slices.windows(2) {
            prop_assert!((pair[1].start_angle - (pair[0].end_angle() + pad)).abs() <= 1e-6);
            if sort {
                prop_assert!(pair[0].point.value >= pair[1].point.value);
            }
        }
    }
}
