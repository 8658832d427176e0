use chart_geometry::core::{
    ChartInput, CurveMode, Series, StackingMode, Viewport, normalize, project_areas, project_lines,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn paths_have_one_segment_per_gap(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 2..64),
        curved in any::<bool>(),
        width in 1u32..4_000,
        height in 1u32..4_000
    ) {
        let curve = if curved { CurveMode::Curved } else { CurveMode::Straight };
        let data = normalize(
            &ChartInput::Series(vec![Series::from_values("s", &values)]),
            StackingMode::None,
        );
        let viewport = Viewport::new(width, height);

        let lines = project_lines(&data, viewport, curve);
        prop_assert_eq!(lines.len(), 1);
        let path = lines[0].path();
        prop_assert_eq!(path.segment_count(), values.len() - 1);
        prop_assert!(path.is_finite());

        let xs: Vec<f64> = lines[0].points.iter().map(|p| p.x).collect();
        prop_assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!((xs[xs.len() - 1] - f64::from(width)).abs() <= 1e-6);

        let areas = project_areas(&data, viewport, curve);
        let polygon = areas[0].fill_polygon();
        prop_assert_eq!(polygon.len(), values.len() + 3);
        prop_assert_eq!(polygon.first(), polygon.last());
    }
}
