use chart_geometry::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_helper_is_inert_without_the_feature() {
    assert!(!init_default_tracing("chart_geometry=debug"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_helper_installs_only_once() {
    let _ = init_default_tracing("chart_geometry=debug");
    assert!(!init_default_tracing("chart_geometry=trace"));
}
