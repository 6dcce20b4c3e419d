use crate::chart::{
    BoundaryPolicy, ChartBindings, ChartDefaults, ChartError, ChartOptions, FillClass, LabelFormat,
    Layout, Severity, Thresholds, UtilizationBarChart, UtilizationDatum,
};
use crate::events::{Event, EventHub};

fn bindings(json: &str) -> ChartBindings {
    serde_json::from_str(json).unwrap()
}

fn hub() -> EventHub {
    EventHub::new(16)
}

#[tokio::test]
async fn test_bindings_with_string_values() {
    let b = bindings(
        r#"{
            "id": "memory",
            "chartData": {"used": "25", "total": "100"},
            "description": "Memory",
            "units": "GB",
            "thresholds": {"warning": "60", "error": "85"}
        }"#,
    );
    let chart = UtilizationBarChart::from_bindings(b, &ChartDefaults::default(), hub()).unwrap();

    let view = chart.view().unwrap();
    assert_eq!(view.description, "Memory");
    assert_eq!(view.percentage_used, 25);
    assert_eq!(view.bar_width, 25);
    assert_eq!(view.fill, FillClass::Success);
    assert_eq!(view.label, "25 of 100 GB Used");
    assert_eq!(view.layout, Layout::Regular);
    assert!(view.animate, "a fresh datum starts the load-in animation");

    chart.settle().await;
    assert!(!chart.view().unwrap().animate);
}

#[tokio::test]
async fn test_percent_label_and_inline_layout() {
    let b = bindings(
        r#"{
            "id": "cpu",
            "chartData": {"used": 420, "total": 500},
            "description": "CPU Usage",
            "units": "MHz",
            "thresholds": {"warning": 60, "error": 85},
            "labelFormat": "percent",
            "layout": "inline"
        }"#,
    );
    let chart = UtilizationBarChart::from_bindings(b, &ChartDefaults::default(), hub()).unwrap();

    let view = chart.view().unwrap();
    assert_eq!(view.label, "84% Used");
    assert_eq!(view.layout, Layout::Inline);
    assert_eq!(view.fill, FillClass::Warning);
}

#[test]
fn test_actual_label_without_units() {
    let b = bindings(r#"{"id": "ram", "chartData": {"used": "8", "total": "24"}}"#);
    let chart = UtilizationBarChart::from_bindings(b, &ChartDefaults::default(), hub()).unwrap();

    let view = chart.view().unwrap();
    assert_eq!(view.label, "8 of 24 Used");
    assert_eq!(view.percentage_used, 33);
    assert_eq!(view.fill, FillClass::Default);
}

#[test]
fn test_fractional_values_print_shortest_form() {
    let b = bindings(r#"{"id": "swap", "chartData": {"used": 2.5, "total": 8}, "units": "GB"}"#);
    let chart = UtilizationBarChart::from_bindings(b, &ChartDefaults::default(), hub()).unwrap();
    assert_eq!(chart.view().unwrap().label, "2.5 of 8 GB Used");
}

#[test]
fn test_defaults_fill_missing_bindings() {
    let defaults = ChartDefaults {
        thresholds: Some(Thresholds::new(60.0, 85.0)),
        label_format: LabelFormat::Percent,
        layout: Layout::Inline,
        policy: BoundaryPolicy::Strict,
    };

    let b = bindings(r#"{"id": "io", "chartData": {"used": 450, "total": 500}}"#);
    let chart = UtilizationBarChart::from_bindings(b, &defaults, hub()).unwrap();
    let view = chart.view().unwrap();
    assert_eq!(view.fill, FillClass::Danger);
    assert_eq!(view.label, "90% Used");
    assert_eq!(view.layout, Layout::Inline);

    // Chart-level thresholds win over the defaults.
    let b = bindings(
        r#"{"id": "io", "chartData": {"used": 450, "total": 500},
            "thresholds": {"warning": 92, "error": 98}, "labelFormat": "actual"}"#,
    );
    let chart = UtilizationBarChart::from_bindings(b, &defaults, hub()).unwrap();
    let view = chart.view().unwrap();
    assert_eq!(view.fill, FillClass::Success);
    assert_eq!(view.label, "450 of 500 Used");
}

#[test]
fn test_inclusive_policy_applies_to_widget() {
    let defaults = ChartDefaults {
        thresholds: Some(Thresholds::new(60.0, 85.0)),
        policy: BoundaryPolicy::Inclusive,
        ..ChartDefaults::default()
    };
    let b = bindings(r#"{"id": "edge", "chartData": {"used": 60, "total": 100}}"#);
    let chart = UtilizationBarChart::from_bindings(b, &defaults, hub()).unwrap();
    assert_eq!(chart.classification().unwrap().severity(), Severity::Warn);
}

#[test]
fn test_invalid_chart_data_is_rejected() {
    let b = bindings(r#"{"id": "broken", "chartData": {"used": 3, "total": 0}}"#);
    let err = UtilizationBarChart::from_bindings(b, &ChartDefaults::default(), hub()).unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput { .. }));

    let b = bindings(r#"{"id": "broken", "chartData": {"used": "n/a", "total": 10}}"#);
    let err = UtilizationBarChart::from_bindings(b, &ChartDefaults::default(), hub()).unwrap_err();
    assert_eq!(err, ChartError::InvalidNumber("n/a".to_string()));
}

#[test]
fn test_no_view_until_data_arrives() {
    let chart = UtilizationBarChart::new("empty", ChartOptions::default(), hub());
    assert!(chart.view().is_none());
    assert!(chart.classification().is_none());
    assert!(chart.chart_data().is_none());
    assert!(!chart.is_animating());
}

#[tokio::test]
async fn test_new_data_reclassifies_and_publishes() {
    let hub = hub();
    let mut rx = hub.subscribe();
    let options = ChartOptions {
        description: "Disk Usage".to_string(),
        units: "TB".to_string(),
        thresholds: Some(Thresholds::new(60.0, 85.0)),
        ..ChartOptions::default()
    };
    let mut chart = UtilizationBarChart::new("disk", options, hub);

    chart.set_chart_data(UtilizationDatum::new(350.0, 500.0).unwrap());
    assert_eq!(chart.classification().unwrap().percentage_used, 70);
    assert_eq!(chart.classification().unwrap().severity(), Severity::Warn);
    assert!(chart.is_animating());
    chart.settle().await;
    assert!(!chart.is_animating());

    chart.set_chart_data(UtilizationDatum::new(450.0, 500.0).unwrap());
    assert!(chart.is_animating(), "every new datum restarts the animation");
    assert_eq!(chart.view().unwrap().fill, FillClass::Danger);
    chart.settle().await;

    let mut updates = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let Event::ChartUpdated { chart, percentage_used, severity } = event {
            updates.push((chart, percentage_used, severity));
        }
    }
    assert_eq!(
        updates,
        vec![
            ("disk".to_string(), 70, Severity::Warn),
            ("disk".to_string(), 90, Severity::Error),
        ]
    );
}

#[tokio::test]
async fn test_threshold_change_does_not_restart_animation() {
    let mut chart = UtilizationBarChart::new("ram", ChartOptions::default(), hub());
    chart.set_chart_data(UtilizationDatum::new(70.0, 100.0).unwrap());
    chart.settle().await;
    assert_eq!(chart.classification().unwrap().severity(), Severity::None);

    chart.set_thresholds(Some(Thresholds::new(60.0, 85.0)));
    assert_eq!(chart.classification().unwrap().severity(), Severity::Warn);
    assert!(!chart.is_animating());

    chart.set_thresholds(None);
    assert_eq!(chart.classification().unwrap().severity(), Severity::None);
}

#[test]
fn test_bar_width_is_clamped() {
    let mut chart = UtilizationBarChart::new("over", ChartOptions::default(), hub());
    chart.set_chart_data(UtilizationDatum::new(130.0, 100.0).unwrap());
    let view = chart.view().unwrap();
    assert_eq!(view.percentage_used, 130);
    assert_eq!(view.bar_width, 100);
}

#[test]
fn test_fill_css_classes() {
    assert_eq!(FillClass::Default.css_class(), "");
    assert_eq!(FillClass::Success.css_class(), "progress-bar-success");
    assert_eq!(FillClass::Warning.css_class(), "progress-bar-warning");
    assert_eq!(FillClass::Danger.css_class(), "progress-bar-danger");
}

#[test]
fn test_parse_label_format_and_layout() {
    assert_eq!("percent".parse::<LabelFormat>().unwrap(), LabelFormat::Percent);
    assert_eq!(" Actual ".parse::<LabelFormat>().unwrap(), LabelFormat::Actual);
    assert!("fraction".parse::<LabelFormat>().is_err());

    assert_eq!("inline".parse::<Layout>().unwrap(), Layout::Inline);
    assert_eq!("regular".parse::<Layout>().unwrap(), Layout::Regular);
    assert_eq!(
        "stacked".parse::<Layout>().unwrap_err(),
        ChartError::UnknownLayout("stacked".to_string())
    );
}

#[test]
fn test_bindings_with_nan_thresholds_are_rejected() {
    let result = serde_json::from_str::<ChartBindings>(
        r#"{"id": "bad", "chartData": {"used": 25, "total": 100},
            "thresholds": {"warning": "NaN", "error": "inf"}}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_overflowing_chart_data_is_rejected() {
    let b = bindings(r#"{"id": "huge", "chartData": {"used": 1e300, "total": 1e-300}}"#);
    let err = UtilizationBarChart::from_bindings(b, &ChartDefaults::default(), hub()).unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput { .. }));
}
