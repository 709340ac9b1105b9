use approx::assert_relative_eq;
use vizframe::api::{AnimationOptions, TracePayload, build_animation};
use vizframe::core::{ChartKind, DataSet, Record};
use vizframe::samples;

#[test]
fn pie_frames_carry_sorted_labels_and_donut_hole() {
    let dataset = samples::revenue_by_tax_type();

    let spec = build_animation(&dataset, ChartKind::Pie, AnimationOptions::default())
        .expect("build animation");

    assert_eq!(spec.steps, vec!["2022", "2023", "2024"]);
    assert!(spec.bounds.is_none());

    let initial = spec.initial_frame().expect("initial frame");
    assert_eq!(initial.name, "2022");
    match &initial.trace {
        TracePayload::Pie(trace) => {
            assert_eq!(
                trace.labels,
                vec![
                    "Corporate Taxes",
                    "Individual Income Taxes",
                    "Other Taxes",
                    "Payroll Taxes"
                ]
            );
            assert_eq!(trace.values, vec![500.0, 2300.0, 280.0, 1400.0]);
            assert_relative_eq!(trace.hole, 0.3);
        }
        other => panic!("unexpected trace payload: {other:?}"),
    }
}

#[test]
fn bar_race_frames_format_text_and_fix_the_value_axis() {
    let dataset = samples::category_popularity();

    let spec = build_animation(&dataset, ChartKind::BarRace, AnimationOptions::default())
        .expect("build animation");

    let bounds = spec.bounds.expect("bar race value axis bounds");
    assert_relative_eq!(bounds.min, 0.0);
    // Global max 210 plus 15% headroom.
    assert_relative_eq!(bounds.max, 241.5, epsilon = 1e-9);

    let initial = spec.initial_frame().expect("initial frame");
    match &initial.trace {
        TracePayload::Bar(trace) => {
            assert_eq!(trace.orientation, "h");
            assert_eq!(trace.y, spec.series);
            assert_eq!(trace.x.len(), spec.series.len());
            assert_eq!(trace.text.len(), trace.x.len());
        }
        other => panic!("unexpected trace payload: {other:?}"),
    }
}

#[test]
fn bar_race_text_labels_group_thousands() {
    let dataset = DataSet::from_records(vec![
        Record::new("2024-01", "A", 1400.0),
        Record::new("2024-01", "B", 999.4),
        Record::new("2024-01", "C", 1234567.0),
    ]);

    let spec = build_animation(&dataset, ChartKind::BarRace, AnimationOptions::default())
        .expect("build animation");

    match &spec.frames[0].trace {
        TracePayload::Bar(trace) => {
            assert_eq!(trace.text, vec!["1,400", "999", "1,234,567"]);
        }
        other => panic!("unexpected trace payload: {other:?}"),
    }
}

#[test]
fn bar_race_top_n_zeroes_the_rest_without_changing_length() {
    let dataset = DataSet::from_records(vec![
        Record::new("2024-01", "A", 10.0),
        Record::new("2024-01", "B", 30.0),
        Record::new("2024-01", "C", 20.0),
    ]);
    let options = AnimationOptions::default().with_bar_top_n(2);

    let spec = build_animation(&dataset, ChartKind::BarRace, options).expect("build animation");

    match &spec.frames[0].trace {
        TracePayload::Bar(trace) => {
            assert_eq!(trace.x, vec![0.0, 30.0, 20.0]);
        }
        other => panic!("unexpected trace payload: {other:?}"),
    }
}

#[test]
fn choropleth_frames_share_global_color_bounds() {
    let dataset = samples::median_income_by_state();

    let spec = build_animation(&dataset, ChartKind::Choropleth, AnimationOptions::default())
        .expect("build animation");

    let bounds = spec.bounds.expect("choropleth bounds");
    assert_relative_eq!(bounds.min, 56000.0);
    assert_relative_eq!(bounds.max, 78000.0);

    for frame in &spec.frames {
        match &frame.trace {
            TracePayload::Choropleth(trace) => {
                assert_eq!(trace.locations, spec.series);
                assert_eq!(trace.locationmode, "USA-states");
                assert_relative_eq!(trace.zmin, bounds.min);
                assert_relative_eq!(trace.zmax, bounds.max);
            }
            other => panic!("unexpected trace payload: {other:?}"),
        }
    }
}

#[test]
fn empty_dataset_yields_empty_spec_not_an_error() {
    let spec = build_animation(&DataSet::new(), ChartKind::Pie, AnimationOptions::default())
        .expect("build animation");

    assert!(spec.is_empty());
    assert!(spec.steps.is_empty());
    assert!(spec.initial_frame().is_none());
}

#[test]
fn out_of_range_options_are_rejected() {
    let dataset = samples::category_popularity();

    let hole = AnimationOptions::default().with_pie_hole_ratio(1.0);
    assert!(build_animation(&dataset, ChartKind::Pie, hole).is_err());

    let headroom = AnimationOptions::default().with_bar_axis_headroom_ratio(-0.1);
    assert!(build_animation(&dataset, ChartKind::BarRace, headroom).is_err());
}
