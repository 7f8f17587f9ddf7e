use quickplot::plot::{
    ArrowOptions, DEFAULT_FUNCTION_LABEL, FunctionOptions, PieOptions, RadarOptions,
    ScaleBarOptions, ScatterOptions, VectorFieldOptions,
};
use quickplot::{
    Color, Colorset, LineCap, LineStyle, MarkerShape, Plot, PlotConfig, Vector2,
};

fn grid(nx: usize, ny: usize) -> (Vec<Vec<Vector2>>, Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..nx).map(|i| i as f64).collect();
    let ys: Vec<f64> = (0..ny).map(|j| j as f64).collect();
    let vectors = xs
        .iter()
        .map(|&x| ys.iter().map(|&y| Vector2::new(y + 1.0, x)).collect())
        .collect();
    (vectors, xs, ys)
}

#[test]
fn each_factory_adds_exactly_one_element() {
    let mut plot = Plot::new();
    let (vectors, xs, ys) = grid(3, 2);

    plot.plot_vector_field(vectors, xs, ys, VectorFieldOptions::default())
        .unwrap();
    assert_eq!(plot.len(), 1);
    plot.plot_arrow(1.0, 1.0, 0.0, 0.0, ArrowOptions::default())
        .unwrap();
    assert_eq!(plot.len(), 2);
    plot.plot_radar(vec![vec![1.0, 2.0, 3.0]], RadarOptions::default())
        .unwrap();
    assert_eq!(plot.len(), 3);
    plot.plot_function(|x| Some(x * x), FunctionOptions::default())
        .unwrap();
    assert_eq!(plot.len(), 4);
    plot.plot_scale_bar(10.0, 5.0, ScaleBarOptions::default())
        .unwrap();
    assert_eq!(plot.len(), 5);
    plot.plot_pie(vec![1.0, 2.0], PieOptions::default()).unwrap();
    assert_eq!(plot.len(), 6);
}

#[test]
fn arrow_is_a_two_point_line_from_base_to_tip() {
    let mut plot = Plot::new();
    let h = plot
        .plot_arrow(3.0, 4.0, 1.0, 2.0, ArrowOptions::default())
        .unwrap();
    let line = plot.get(h).unwrap();

    assert_eq!(line.xs(), &[1.0, 3.0]);
    assert_eq!(line.ys(), &[2.0, 4.0]);
    assert_eq!(line.line_width, 5.0);
    assert_eq!(line.marker_size, 0.0);
    assert_eq!(line.start_cap, LineCap::Flat);
    let cap = line.end_cap.expect("arrow has an end cap");
    assert_eq!((cap.width, cap.length), (3.0, 3.0));
    assert!(cap.filled);
    assert_eq!(line.label, None);
}

#[test]
fn arrow_keeps_explicit_options() {
    let mut plot = Plot::new();
    let red = Color::rgb(200, 0, 0);
    let h = plot
        .plot_arrow(
            0.0,
            1.0,
            0.0,
            0.0,
            ArrowOptions {
                line_width: 2.0,
                arrowhead_width: 4.0,
                arrowhead_length: 6.0,
                color: Some(red),
                label: Some("wind".into()),
            },
        )
        .unwrap();
    let line = plot.get(h).unwrap();
    assert_eq!(line.color, red);
    assert_eq!(line.line_width, 2.0);
    assert_eq!(line.label.as_deref(), Some("wind"));
    let cap = line.end_cap.unwrap();
    assert_eq!((cap.width, cap.length), (4.0, 6.0));
}

#[test]
fn function_defaults() {
    let mut plot = Plot::new();
    let h = plot
        .plot_function(|x| Some(x.sin()), FunctionOptions::default())
        .unwrap();
    let f = plot.get(h).unwrap();
    assert_eq!(f.line_width, 1.0);
    assert_eq!(f.marker_size, 0.0);
    assert_eq!(f.marker_shape, MarkerShape::FilledCircle);
    assert_eq!(f.line_style, LineStyle::Solid);
    assert_eq!(f.label.as_deref(), Some(DEFAULT_FUNCTION_LABEL));
    assert_eq!(f.label.as_deref(), Some("f(x)"));
    assert_eq!(f.color, Colorset::Category10.color(0));
}

#[test]
fn function_is_evaluated_lazily_with_gaps() {
    let mut plot = Plot::new();
    let h = plot
        .plot_function(
            |x| if x.abs() < 0.5 { None } else { Some(1.0 / x) },
            FunctionOptions::default(),
        )
        .unwrap();
    let f = plot.get(h).unwrap();
    assert_eq!(f.eval(2.0), Some(0.5));
    assert_eq!(f.eval(0.0), None);
    let runs = f.sample(-2.0, 2.0, 5);
    assert_eq!(runs, vec![vec![(-2.0, -0.5), (-1.0, -1.0)], vec![(1.0, 1.0), (2.0, 0.5)]]);
}

#[test]
fn scale_bar_defaults() {
    let mut plot = Plot::new();
    let h = plot
        .plot_scale_bar(10.0, 5.0, ScaleBarOptions::default())
        .unwrap();
    let bar = plot.get(h).unwrap();
    assert_eq!(bar.size_x(), 10.0);
    assert_eq!(bar.size_y(), 5.0);
    assert_eq!(bar.color, Color::BLACK);
    assert_eq!(bar.thickness, 2.0);
    assert_eq!(bar.font_size, 12.0);
    assert_eq!(bar.padding_px, 10.0);
    assert_eq!(bar.label_x, None);
    assert_eq!(bar.label_y, None);
}

#[test]
fn scale_bar_does_not_consume_a_cycle_color() {
    let mut plot = Plot::new();
    plot.plot_scale_bar(1.0, 1.0, ScaleBarOptions::default())
        .unwrap();
    assert_eq!(plot.color_cycle().cursor(), 0);
}

#[test]
fn radar_default_palette_covers_every_category() {
    let mut plot = Plot::new();
    let h = plot
        .plot_radar(vec![vec![1.0, 2.0, 3.0, 4.0, 5.0]], RadarOptions::default())
        .unwrap();
    let radar = plot.get(h).unwrap();
    assert_eq!(radar.category_count(), 5);
    assert_eq!(radar.fill_colors.len(), radar.category_count());
    for (i, c) in radar.fill_colors.iter().enumerate() {
        assert_eq!(*c, Colorset::Category10.color(i));
    }
}

#[test]
fn radar_defaults_use_palette_by_group() {
    let mut plot = Plot::new();
    let h = plot
        .plot_radar(
            vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0], vec![2.0, 2.0, 2.0]],
            RadarOptions::default(),
        )
        .unwrap();
    let radar = plot.get(h).unwrap();
    assert_eq!(radar.fill_colors, Colorset::Category10.take(9));
    assert_eq!(radar.fill_alpha, 0.4);
    assert_eq!(radar.web_color, Color::GRAY);
    assert_eq!(radar.category_names, None);
    assert_eq!(radar.group_names, None);
    assert_eq!(radar.fill_color(1).a, 102);
    assert_eq!(plot.color_cycle().cursor(), 0);
}

#[test]
fn radar_normalizes_each_category_by_its_max() {
    let mut plot = Plot::new();
    let h = plot
        .plot_radar(
            vec![vec![2.0, 0.0, -5.0], vec![4.0, 0.0, 10.0]],
            RadarOptions::default(),
        )
        .unwrap();
    let radar = plot.get(h).unwrap();
    assert_eq!(radar.normalized(), &[vec![0.5, 0.0, -0.5], vec![1.0, 0.0, 1.0]]);
    assert_eq!(radar.values(), &[vec![2.0, 0.0, -5.0], vec![4.0, 0.0, 10.0]]);
}

#[test]
fn pie_defaults_use_palette_by_slice() {
    let mut plot = Plot::new();
    let h = plot
        .plot_pie(vec![1.0, 1.0, 2.0], PieOptions::default())
        .unwrap();
    let pie = plot.get(h).unwrap();
    assert_eq!(pie.colors, Colorset::Category10.take(3));
    assert!(pie.show_labels);
    assert!(!pie.exploded);
    assert!(!pie.show_values);
    assert!(!pie.show_percentages);
    assert_eq!(pie.label, None);
    assert_eq!(pie.percentages(), vec![25.0, 25.0, 50.0]);
    assert_eq!(plot.color_cycle().cursor(), 0);
}

#[test]
fn pie_palette_follows_the_configured_colorset() {
    let mut plot = Plot::with_config(PlotConfig {
        colorset: Colorset::Office,
        ..Default::default()
    });
    let h = plot.plot_pie(vec![1.0, 2.0], PieOptions::default()).unwrap();
    assert_eq!(plot.get(h).unwrap().colors, Colorset::Office.take(2));
}

#[test]
fn identical_pies_have_identical_attributes() {
    let opts = PieOptions {
        slice_labels: Some(vec!["a".into(), "b".into(), "c".into()]),
        exploded: true,
        show_values: true,
        show_percentages: true,
        ..Default::default()
    };
    let mut plot = Plot::new();
    let a = plot.plot_pie(vec![3.0, 2.0, 1.0], opts.clone()).unwrap();
    let b = plot.plot_pie(vec![3.0, 2.0, 1.0], opts).unwrap();
    assert_eq!(plot.get(a).unwrap(), plot.get(b).unwrap());
}

#[test]
fn pie_caption_combines_enabled_parts() {
    let mut plot = Plot::new();
    let h = plot
        .plot_pie(
            vec![3.0, 1.0],
            PieOptions {
                slice_labels: Some(vec!["left".into(), "right".into()]),
                show_values: true,
                show_percentages: true,
                ..Default::default()
            },
        )
        .unwrap();
    let pie = plot.get(h).unwrap();
    let caption = pie.slice_caption(0, &|v| format!("{v}"));
    assert_eq!(caption.as_deref(), Some("left 3 75.0%"));

    plot.get_mut(h).unwrap().show_labels = false;
    let pie = plot.get(h).unwrap();
    assert_eq!(pie.slice_caption(1, &|v| format!("{v}")).as_deref(), Some("1 25.0%"));
}

#[test]
fn vector_field_defaults_and_scaling() {
    let mut plot = Plot::new();
    let vectors = vec![vec![Vector2::new(3.0, 4.0)], vec![Vector2::new(0.0, 0.0)]];
    let h = plot
        .plot_vector_field(vectors, vec![0.0, 1.0], vec![0.0], VectorFieldOptions::default())
        .unwrap();
    let field = plot.get(h).unwrap();
    assert_eq!(field.label, None);
    assert_eq!(field.colormap(), None);
    assert_eq!(field.scale_factor(), 1.0);
    assert_eq!(field.max_magnitude(), 5.0);
    assert_eq!(field.color, Colorset::Category10.color(0));
    // longest vector spans scale_factor / 1.2
    let longest = field.vectors()[0][0].length();
    assert!((longest - 1.0 / 1.2).abs() < 1e-12);
    assert_eq!(field.arrow_color(1, 0), field.color);
}

#[test]
fn vector_field_colormap_colors_by_magnitude() {
    let mut plot = Plot::new();
    let vectors = vec![vec![Vector2::new(1.0, 0.0), Vector2::new(2.0, 0.0)]];
    let h = plot
        .plot_vector_field(
            vectors,
            vec![0.0],
            vec![0.0, 1.0],
            VectorFieldOptions {
                colormap: Some(quickplot::Colormap::Grayscale),
                ..Default::default()
            },
        )
        .unwrap();
    let field = plot.get(h).unwrap();
    assert_eq!(field.arrow_color(0, 0), Color::rgb(0, 0, 0));
    assert_eq!(field.arrow_color(0, 1), Color::rgb(255, 255, 255));
}

#[test]
fn scatter_defaults() {
    let mut plot = Plot::new();
    let h = plot
        .plot_scatter(vec![0.0, 1.0], vec![1.0, 0.0], ScatterOptions::default())
        .unwrap();
    let s = plot.get(h).unwrap();
    assert_eq!(s.line_width, 1.0);
    assert_eq!(s.marker_size, 5.0);
    assert_eq!(s.marker_shape, MarkerShape::FilledCircle);
    assert_eq!(s.end_cap, None);
    assert_eq!(s.start_cap, LineCap::Flat);
}
