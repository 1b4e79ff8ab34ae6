use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use serde::Deserialize;

use quickplot::{ChartKind, PlotOptions, Plotter, Series};

#[derive(Parser)]
#[command(name = "quickplot")]
#[command(
    about = "Render charts from JSON data to SVG",
    long_about = "A command-line front end for the quickplot library: renders line, bar, scatter, histogram, box, density, and 3D charts from JSON series or column tables."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    /// Plotter configuration JSON file (labels, palette, theme, policy)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Plot a JSON series file: [{"x": [...], "y": [...], "label": "..."}]
    Series {
        /// Chart kind: line, bar, scatter, histogram, box, density, line3, scatter3, bar3
        #[arg(long, default_value = "line")]
        kind: String,
        /// JSON series file
        #[arg(long, required = true)]
        data: PathBuf,
        /// Output SVG path
        #[arg(long)]
        out: Option<PathBuf>,
        /// Open the rendered chart in the default browser
        #[arg(long)]
        show: bool,
        /// Constrain the axes to equal aspect
        #[arg(long)]
        equal_aspect: bool,
    },
    /// Plot one column of a JSON table against another
    Table {
        /// Chart kind: line, bar, or scatter
        #[arg(long, default_value = "line")]
        kind: String,
        /// JSON table file: {"X": [...], "Y": [...]}
        #[arg(long, required = true)]
        data: PathBuf,
        /// Column providing x values
        #[arg(long, required = true)]
        x: String,
        /// Column providing y values
        #[arg(long, required = true)]
        y: String,
        /// Series label (defaults to the y column name)
        #[arg(long)]
        label: Option<String>,
        /// Output SVG path
        #[arg(long)]
        out: Option<PathBuf>,
        /// Open the rendered chart in the default browser
        #[arg(long)]
        show: bool,
    },
}

/// One series as it appears in a JSON data file.
#[derive(Deserialize)]
struct SeriesSpec {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Option<Vec<f64>>,
    dx: Option<f64>,
    dy: Option<f64>,
    label: Option<String>,
}

impl SeriesSpec {
    fn into_series(self, index: usize) -> Series {
        Series {
            x: self.x,
            y: self.y,
            z: self.z,
            extent: match (self.dx, self.dy) {
                (Some(dx), Some(dy)) => Some((dx, dy)),
                _ => None,
            },
            label: self.label.unwrap_or_else(|| format!("series {}", index + 1)),
        }
    }
}

fn load_series(path: &PathBuf) -> std::io::Result<Vec<Series>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let specs: Vec<SeriesSpec> = serde_json::from_reader(reader)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| spec.into_series(i))
        .collect())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let plotter = match cli.config {
        Some(ref path) => Plotter::from_config(path)?,
        None => Plotter::new(),
    };

    match cli.command {
        Commands::Series {
            kind,
            data,
            out,
            show,
            equal_aspect,
        } => {
            let kind: ChartKind = kind.parse()?;
            let series = load_series(&data)?;
            info!("loaded {} series from {}", series.len(), data.display());

            let mut opts = PlotOptions::new()
                .display(show)
                .equal_aspect(equal_aspect);
            opts = match out {
                Some(path) => opts.persist(true).output_path(path),
                None => opts.persist(false),
            };

            match kind {
                ChartKind::Line => plotter.plot_line(&series, &opts)?,
                ChartKind::Bar => plotter.plot_bar(&series, &opts)?,
                ChartKind::Scatter => plotter.plot_scatter(&series, &opts)?,
                ChartKind::Line3 => plotter.plot_3d_line(&series, &opts)?,
                ChartKind::Scatter3 => plotter.plot_3d_scatter(&series, &opts)?,
                ChartKind::Bar3 => plotter.plot_3d_bar(&series, &opts)?,
                // Single-collection kinds flatten the first series' y values
                ChartKind::Histogram => {
                    let data = first_series_values(&series)?;
                    plotter.plot_histogram(data, &opts)?
                }
                ChartKind::Box => {
                    let data = first_series_values(&series)?;
                    plotter.plot_box(data, &opts)?
                }
                ChartKind::Density => {
                    let data = first_series_values(&series)?;
                    plotter.plot_density(data, &opts)?
                }
            };
        }
        Commands::Table {
            kind,
            data,
            x,
            y,
            label,
            out,
            show,
        } => {
            let kind: ChartKind = kind.parse()?;
            let table = quickplot::Table::load(&data)?;
            info!("loaded {} columns from {}", table.len(), data.display());

            let mut opts = PlotOptions::new().display(show);
            opts = match out {
                Some(path) => opts.persist(true).output_path(path),
                None => opts.persist(false),
            };

            plotter.plot_table(&table, &x, &y, kind, label.as_deref(), &opts)?;
        }
    }

    Ok(())
}

fn first_series_values(series: &[Series]) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    series
        .first()
        .map(|s| s.y.clone())
        .ok_or_else(|| "data file contains no series".into())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder.filter_level(cli.log_level.to_level_filter());
    if let Some(ref log_file) = cli.log_file {
        let file = if cli.append_log {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
        } else {
            std::fs::File::create(log_file)
        };
        match file {
            Ok(file) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("failed to open log file {}: {}", log_file, e);
                return ExitCode::FAILURE;
            }
        }
    }
    log_builder.init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
