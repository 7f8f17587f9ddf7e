use quickplot::plot::{
    ArrowOptions, PieOptions, RadarOptions, ScaleBarOptions, ScatterOptions, VectorFieldOptions,
};
use quickplot::{AxisLimits, Color, Plot, PlotError, Vector2};

fn assert_invalid<T: std::fmt::Debug>(result: Result<T, PlotError>) {
    match result {
        Err(PlotError::InvalidArgument(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn scatter_rejects_bad_shapes() {
    let mut plot = Plot::new();
    assert_invalid(plot.plot_scatter(vec![], vec![], ScatterOptions::default()));
    assert_invalid(plot.plot_scatter(vec![1.0, 2.0], vec![1.0], ScatterOptions::default()));
    assert_invalid(plot.plot_scatter(
        vec![1.0],
        vec![1.0],
        ScatterOptions {
            marker_size: -1.0,
            ..Default::default()
        },
    ));
    assert!(plot.is_empty());
}

#[test]
fn vector_field_rejects_mismatched_grid() {
    let mut plot = Plot::new();
    let v = Vector2::new(1.0, 0.0);
    let opts = VectorFieldOptions::default;

    assert_invalid(plot.plot_vector_field(vec![], vec![], vec![0.0], opts()));
    assert_invalid(plot.plot_vector_field(vec![vec![v]], vec![0.0, 1.0], vec![0.0], opts()));
    assert_invalid(plot.plot_vector_field(
        vec![vec![v], vec![v, v]],
        vec![0.0, 1.0],
        vec![0.0, 1.0],
        opts(),
    ));
    assert_invalid(plot.plot_vector_field(
        vec![vec![Vector2::new(f64::INFINITY, 0.0)]],
        vec![0.0],
        vec![0.0],
        opts(),
    ));
    assert_invalid(plot.plot_vector_field(
        vec![vec![v]],
        vec![0.0],
        vec![0.0],
        VectorFieldOptions {
            scale_factor: 0.0,
            ..Default::default()
        },
    ));
    assert!(plot.is_empty());
    assert_eq!(plot.color_cycle().cursor(), 0);
}

#[test]
fn arrow_rejects_non_finite_and_non_positive() {
    let mut plot = Plot::new();
    assert_invalid(plot.plot_arrow(1.0, f64::NAN, 0.0, 0.0, ArrowOptions::default()));
    assert_invalid(plot.plot_arrow(1.0, 1.0, f64::INFINITY, 0.0, ArrowOptions::default()));
    assert_invalid(plot.plot_arrow(
        1.0,
        1.0,
        0.0,
        0.0,
        ArrowOptions {
            line_width: 0.0,
            ..Default::default()
        },
    ));
    assert_invalid(plot.plot_arrow(
        1.0,
        1.0,
        0.0,
        0.0,
        ArrowOptions {
            arrowhead_length: -2.0,
            ..Default::default()
        },
    ));
    assert!(plot.is_empty());
}

#[test]
fn radar_rejects_ragged_or_mislabelled_input() {
    let mut plot = Plot::new();
    assert_invalid(plot.plot_radar(vec![], RadarOptions::default()));
    assert_invalid(plot.plot_radar(vec![vec![]], RadarOptions::default()));
    assert_invalid(plot.plot_radar(vec![vec![1.0, 2.0], vec![1.0]], RadarOptions::default()));
    assert_invalid(plot.plot_radar(vec![vec![1.0, f64::NAN]], RadarOptions::default()));
    assert_invalid(plot.plot_radar(
        vec![vec![1.0, 2.0, 3.0]],
        RadarOptions {
            category_names: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        },
    ));
    assert_invalid(plot.plot_radar(
        vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        RadarOptions {
            group_names: Some(vec!["only one".into()]),
            ..Default::default()
        },
    ));
    assert_invalid(plot.plot_radar(
        vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        RadarOptions {
            fill_colors: Some(vec![Color::BLACK]),
            ..Default::default()
        },
    ));
    assert_invalid(plot.plot_radar(
        vec![vec![1.0, 2.0]],
        RadarOptions {
            fill_alpha: 1.5,
            ..Default::default()
        },
    ));
    assert!(plot.is_empty());
    assert!(!plot.axes_fixed(), "failed radar must not re-fit the axes");
}

#[test]
fn scale_bar_rejects_non_positive_sizes() {
    let mut plot = Plot::new();
    assert_invalid(plot.plot_scale_bar(0.0, 1.0, ScaleBarOptions::default()));
    assert_invalid(plot.plot_scale_bar(1.0, -1.0, ScaleBarOptions::default()));
    assert_invalid(plot.plot_scale_bar(f64::NAN, 1.0, ScaleBarOptions::default()));
    assert_invalid(plot.plot_scale_bar(
        1.0,
        1.0,
        ScaleBarOptions {
            thickness: 0.0,
            ..Default::default()
        },
    ));
    assert_invalid(plot.plot_scale_bar(
        1.0,
        1.0,
        ScaleBarOptions {
            padding_px: -1.0,
            ..Default::default()
        },
    ));
    assert!(plot.is_empty());
}

#[test]
fn pie_rejects_empty_negative_or_zero_sum() {
    let mut plot = Plot::new();
    assert_invalid(plot.plot_pie(vec![], PieOptions::default()));
    assert_invalid(plot.plot_pie(vec![1.0, -1.0], PieOptions::default()));
    assert_invalid(plot.plot_pie(vec![0.0, 0.0], PieOptions::default()));
    assert_invalid(plot.plot_pie(vec![1.0, f64::NAN], PieOptions::default()));
    assert_invalid(plot.plot_pie(
        vec![1.0, 2.0],
        PieOptions {
            slice_labels: Some(vec!["a".into()]),
            ..Default::default()
        },
    ));
    assert_invalid(plot.plot_pie(
        vec![1.0, 2.0],
        PieOptions {
            colors: Some(vec![Color::BLACK; 3]),
            ..Default::default()
        },
    ));
    assert!(plot.is_empty());
}

#[test]
fn axis_setters_reject_invalid_limits() {
    let mut plot = Plot::new();
    assert_invalid(plot.set_axis(AxisLimits::new(1.0, 1.0, 0.0, 1.0)));
    assert_invalid(plot.set_axis(AxisLimits::new(0.0, 1.0, 2.0, 1.0)));
    assert_invalid(plot.set_axis(AxisLimits::new(0.0, f64::INFINITY, 0.0, 1.0)));
    assert_invalid(plot.axis_auto(-0.1, 0.1));
    assert!(!plot.axes_fixed());
}

#[test]
fn errors_render_a_readable_message() {
    let mut plot = Plot::new();
    let err = plot
        .plot_scatter(vec![1.0, 2.0], vec![1.0], ScatterOptions::default())
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid argument:"));
}
