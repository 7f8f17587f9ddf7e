use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use std::path::PathBuf;

use quickplot::plot::{
    ArrowOptions, FunctionOptions, PieOptions, RadarOptions, ScaleBarOptions, VectorFieldOptions,
};
use quickplot::{AxisLimits, Color, Colormap, Plot, PlotConfig, Vector2, storage, viz};

#[derive(Parser, Debug)]
#[command(
    name = "quickplot",
    version,
    about = "Render pie, radar, function, arrow, vector-field and scale-bar charts to SVG/PNG"
)]
struct Cli {
    /// JSON config file (size, colorset, background, locale).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Image width in pixels (overrides the config).
    #[arg(long, global = true)]
    width: Option<u32>,
    /// Image height in pixels (overrides the config).
    #[arg(long, global = true)]
    height: Option<u32>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pie chart from a list of values.
    Pie(PieArgs),
    /// Radar chart; groups separated by ';', categories by ','.
    Radar(RadarArgs),
    /// Curve of a builtin function.
    Function(FunctionArgs),
    /// Single arrow from base to tip.
    Arrow(ArrowArgs),
    /// Vector field on a regular grid.
    VectorField(VectorFieldArgs),
    /// Scale bar in the lower-right corner.
    ScaleBar(ScaleBarArgs),
}

#[derive(Args, Debug)]
struct OutArgs {
    /// Output image (.svg or .png).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PieArgs {
    /// Slice values separated by comma or semicolon (e.g., 3,2,1)
    #[arg(long)]
    values: String,
    /// Slice labels separated by comma or semicolon
    #[arg(long)]
    labels: Option<String>,
    #[arg(long, default_value_t = false)]
    explode: bool,
    #[arg(long, default_value_t = false)]
    show_values: bool,
    #[arg(long, default_value_t = false)]
    show_percentages: bool,
    #[arg(long, default_value_t = false)]
    hide_labels: bool,
    #[command(flatten)]
    out: OutArgs,
}

#[derive(Args, Debug)]
struct RadarArgs {
    /// Values as rows of groups (e.g., "5,3,4;2,4,1")
    #[arg(long)]
    values: String,
    /// Category (spoke) names separated by comma
    #[arg(long)]
    categories: Option<String>,
    /// Group names separated by comma
    #[arg(long)]
    groups: Option<String>,
    #[arg(long, default_value_t = 0.4)]
    fill_alpha: f64,
    #[command(flatten)]
    out: OutArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Builtin {
    Sin,
    Cos,
    Tan,
    Square,
    Sqrt,
    Ln,
    Reciprocal,
}

impl Builtin {
    fn eval(self, x: f64) -> Option<f64> {
        match self {
            Builtin::Sin => Some(x.sin()),
            Builtin::Cos => Some(x.cos()),
            Builtin::Tan => Some(x.tan()),
            Builtin::Square => Some(x * x),
            Builtin::Sqrt => (x >= 0.0).then(|| x.sqrt()),
            Builtin::Ln => (x > 0.0).then(|| x.ln()),
            Builtin::Reciprocal => (x != 0.0).then(|| 1.0 / x),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Builtin::Sin => "sin(x)",
            Builtin::Cos => "cos(x)",
            Builtin::Tan => "tan(x)",
            Builtin::Square => "x²",
            Builtin::Sqrt => "sqrt(x)",
            Builtin::Ln => "ln(x)",
            Builtin::Reciprocal => "1/x",
        }
    }
}

#[derive(Args, Debug)]
struct FunctionArgs {
    #[arg(long, value_enum)]
    kind: Builtin,
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    x_min: f64,
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    x_max: f64,
    #[arg(long, default_value_t = 1.0)]
    line_width: f64,
    /// Line color as hex (e.g., #1F77B4)
    #[arg(long, value_parser = Color::from_hex)]
    color: Option<Color>,
    /// Also write sampled x,y values to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Number of samples for --csv.
    #[arg(long, default_value_t = 101)]
    samples: usize,
    #[command(flatten)]
    out: OutArgs,
}

#[derive(Args, Debug)]
struct ArrowArgs {
    /// Tip position as X,Y
    #[arg(long, allow_hyphen_values = true)]
    tip: String,
    /// Base position as X,Y
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    base: String,
    #[arg(long, default_value_t = 5.0)]
    line_width: f64,
    /// Arrow color as hex (e.g., #D62728)
    #[arg(long, value_parser = Color::from_hex)]
    color: Option<Color>,
    #[arg(long)]
    label: Option<String>,
    #[command(flatten)]
    out: OutArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FieldKind {
    /// Counter-clockwise rotation about the origin.
    Rotation,
    /// Pointing away from the origin.
    Radial,
    /// Everything points right.
    Uniform,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MapArg {
    Viridis,
    Grayscale,
}

#[derive(Args, Debug)]
struct VectorFieldArgs {
    #[arg(long, value_enum, default_value_t = FieldKind::Rotation)]
    kind: FieldKind,
    /// Grid points per axis.
    #[arg(long, default_value_t = 11)]
    points: usize,
    /// Grid spans [-extent, extent] on both axes.
    #[arg(long, default_value_t = 5.0)]
    extent: f64,
    /// Color arrows by magnitude.
    #[arg(long, value_enum)]
    colormap: Option<MapArg>,
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    #[command(flatten)]
    out: OutArgs,
}

#[derive(Args, Debug)]
struct ScaleBarArgs {
    #[arg(long)]
    size_x: f64,
    #[arg(long)]
    size_y: f64,
    #[arg(long)]
    label_x: Option<String>,
    #[arg(long)]
    label_y: Option<String>,
    #[arg(long, default_value_t = 2.0)]
    thickness: f64,
    #[command(flatten)]
    out: OutArgs,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn parse_numbers(s: &str) -> Result<Vec<f64>> {
    parse_list(s)
        .iter()
        .map(|v| {
            v.parse::<f64>()
                .map_err(|_| anyhow!("invalid number {v:?}"))
        })
        .collect()
}

fn parse_point(s: &str) -> Result<(f64, f64)> {
    match parse_numbers(s)?.as_slice() {
        &[x, y] => Ok((x, y)),
        _ => Err(anyhow!("expected X,Y, got {s:?}")),
    }
}

fn parse_rows(s: &str) -> Result<Vec<Vec<f64>>> {
    s.split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(parse_numbers)
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PlotConfig::from_json_file(path)?,
        None => PlotConfig::default(),
    };
    if let Some(w) = cli.width {
        config.width = w;
    }
    if let Some(h) = cli.height {
        config.height = h;
    }
    debug!("using config {config:?}");
    let mut plot = Plot::with_config(config);

    let out = match cli.cmd {
        Command::Pie(args) => cmd_pie(&mut plot, args)?,
        Command::Radar(args) => cmd_radar(&mut plot, args)?,
        Command::Function(args) => cmd_function(&mut plot, args)?,
        Command::Arrow(args) => cmd_arrow(&mut plot, args)?,
        Command::VectorField(args) => cmd_vector_field(&mut plot, args)?,
        Command::ScaleBar(args) => cmd_scale_bar(&mut plot, args)?,
    };

    viz::save(&plot, &out).with_context(|| format!("rendering {}", out.display()))?;
    println!("Saved plot to {}", out.display());
    Ok(())
}

fn cmd_pie(plot: &mut Plot, args: PieArgs) -> Result<PathBuf> {
    let values = parse_numbers(&args.values)?;
    plot.plot_pie(
        values,
        PieOptions {
            slice_labels: args.labels.as_deref().map(parse_list),
            exploded: args.explode,
            show_values: args.show_values,
            show_percentages: args.show_percentages,
            show_labels: !args.hide_labels,
            ..Default::default()
        },
    )?;
    Ok(args.out.out)
}

fn cmd_radar(plot: &mut Plot, args: RadarArgs) -> Result<PathBuf> {
    let values = parse_rows(&args.values)?;
    plot.plot_radar(
        values,
        RadarOptions {
            category_names: args.categories.as_deref().map(parse_list),
            group_names: args.groups.as_deref().map(parse_list),
            fill_alpha: args.fill_alpha,
            ..Default::default()
        },
    )?;
    Ok(args.out.out)
}

fn cmd_function(plot: &mut Plot, args: FunctionArgs) -> Result<PathBuf> {
    if !(args.x_min < args.x_max) {
        anyhow::bail!("--x-min must be below --x-max");
    }
    let kind = args.kind;
    let handle = plot.plot_function(
        move |x| kind.eval(x),
        FunctionOptions {
            color: args.color,
            line_width: args.line_width,
            label: Some(kind.label().to_string()),
            ..Default::default()
        },
    )?;
    let curve = plot
        .get(handle)
        .ok_or_else(|| anyhow!("function element missing after insert"))?;

    // functions have no extent of their own: frame the requested x range
    let (xs, ys): (Vec<f64>, Vec<f64>) = curve
        .sample(args.x_min, args.x_max, 512)
        .into_iter()
        .flatten()
        .unzip();
    let limits = AxisLimits::from_points(&xs, &ys)
        .map(|l| l.expand_degenerate().padded(0.0, 0.1))
        .unwrap_or_else(AxisLimits::fallback);
    if let Some(csv) = &args.csv {
        storage::save_function_csv(curve, args.x_min, args.x_max, args.samples, csv)?;
        println!("Saved {} samples to {}", args.samples, csv.display());
    }
    plot.set_axis(AxisLimits::new(args.x_min, args.x_max, limits.y_min, limits.y_max))?;
    Ok(args.out.out)
}

fn cmd_arrow(plot: &mut Plot, args: ArrowArgs) -> Result<PathBuf> {
    let (tip_x, tip_y) = parse_point(&args.tip)?;
    let (base_x, base_y) = parse_point(&args.base)?;
    plot.plot_arrow(
        tip_x,
        tip_y,
        base_x,
        base_y,
        ArrowOptions {
            line_width: args.line_width,
            color: args.color,
            label: args.label,
            ..Default::default()
        },
    )?;
    Ok(args.out.out)
}

fn cmd_vector_field(plot: &mut Plot, args: VectorFieldArgs) -> Result<PathBuf> {
    if args.points < 2 {
        anyhow::bail!("--points must be at least 2");
    }
    let step = 2.0 * args.extent / (args.points - 1) as f64;
    let axis: Vec<f64> = (0..args.points)
        .map(|k| -args.extent + step * k as f64)
        .collect();
    let vectors: Vec<Vec<Vector2>> = axis
        .iter()
        .map(|&x| {
            axis.iter()
                .map(|&y| match args.kind {
                    FieldKind::Rotation => Vector2::new(-y, x),
                    FieldKind::Radial => Vector2::new(x, y),
                    FieldKind::Uniform => Vector2::new(1.0, 0.0),
                })
                .collect()
        })
        .collect();
    plot.plot_vector_field(
        vectors,
        axis.clone(),
        axis,
        VectorFieldOptions {
            colormap: args.colormap.map(|m| match m {
                MapArg::Viridis => Colormap::Viridis,
                MapArg::Grayscale => Colormap::Grayscale,
            }),
            scale_factor: args.scale,
            ..Default::default()
        },
    )?;
    Ok(args.out.out)
}

fn cmd_scale_bar(plot: &mut Plot, args: ScaleBarArgs) -> Result<PathBuf> {
    plot.plot_scale_bar(
        args.size_x,
        args.size_y,
        ScaleBarOptions {
            label_x: args.label_x,
            label_y: args.label_y,
            thickness: args.thickness,
            ..Default::default()
        },
    )?;
    Ok(args.out.out)
}
