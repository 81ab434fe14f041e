use chart_scale::core::{ChartRect, HighLow, compute_bounds, default_label_interpolation};
use chart_scale::telemetry::init_default_tracing;
use chart_scale::{AxisOptions, ChartAxes, ChartData};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: axis_snapshot_tool <snapshot|bounds> --input <path> --output <path>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Snapshot,
    Bounds,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: PathBuf,
}

/// Chart description consumed by the `snapshot` command.
#[derive(Debug, Clone, Deserialize)]
struct ChartFile {
    rect: ChartRect,
    #[serde(default)]
    data: ChartData,
    #[serde(default)]
    axis_x: Option<AxisOptions>,
    #[serde(default)]
    axis_y: Option<AxisOptions>,
}

/// Single bounds request consumed by the `bounds` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoundsRequest {
    axis_length: f64,
    high: f64,
    low: f64,
    #[serde(default = "default_min_tick_spacing")]
    min_tick_spacing: f64,
    #[serde(default)]
    integer_only: bool,
}

fn default_min_tick_spacing() -> f64 {
    20.0
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;

    match args.command {
        CommandKind::Snapshot => {
            let chart: ChartFile =
                serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
            let x_options = chart
                .axis_x
                .unwrap_or_else(|| AxisOptions::new(chart_scale::AxisKind::Step));
            let y_options = chart.axis_y.unwrap_or_default();
            let axes = ChartAxes::build(chart.rect, &chart.data, &x_options, &y_options)
                .map_err(|err| err.to_string())?;
            let json = axes
                .snapshot_json_pretty(&default_label_interpolation())
                .map_err(|err| err.to_string())?;
            write_text(&args.output, &json)
        }
        CommandKind::Bounds => {
            let request: BoundsRequest =
                serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
            let bounds = compute_bounds(
                request.axis_length,
                HighLow::new(request.high, request.low),
                request.min_tick_spacing,
                request.integer_only,
            )
            .map_err(|err| err.to_string())?;
            let json = serde_json::to_string_pretty(&bounds)
                .map_err(|err| format!("failed to encode bounds: {err}"))?;
            write_text(&args.output, &json)
        }
    }
}

fn write_text(path: &Path, text: &str) -> Result<(), String> {
    fs::write(path, format!("{text}\n"))
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("snapshot") => CommandKind::Snapshot,
        Some("bounds") => CommandKind::Bounds,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output: output.ok_or_else(|| "missing --output".to_owned())?,
    })
}
