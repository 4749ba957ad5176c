use std::io::Read;
use std::path::PathBuf;
use std::sync::Once;

use clap::{Parser, ValueEnum};
use stroke_path::kurbo::Vec2;
use stroke_path::{Format, PathConfig, PathError};

#[derive(Parser)]
#[command(name = "stroke-path", about = "Decode, transform and simplify stroke paths")]
struct Cli {
    /// Input file holding one encoded path (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input encoding
    #[arg(short, long, value_enum, default_value = "legacy")]
    format: CliFormat,

    /// Output encoding (defaults to the input encoding)
    #[arg(short, long, value_enum)]
    output_format: Option<CliFormat>,

    /// Reject malformed tokens instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Simplification threshold (max distance of a dropped point)
    #[arg(short, long, default_value = "1.0")]
    threshold: f64,

    /// Skip simplification
    #[arg(long)]
    no_simplify: bool,

    /// Uniform scale factor
    #[arg(long, default_value = "1.0")]
    scale: f64,

    /// Rotation in degrees (counter-clockwise)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    angle: f64,

    /// X offset
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    dx: f64,

    /// Y offset
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    dy: f64,

    /// Make points relative to the first one
    #[arg(long)]
    relative: bool,

    /// Log parsing and simplification details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliFormat {
    Legacy,
    Svg,
}

impl From<CliFormat> for Format {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Legacy => Format::Legacy,
            CliFormat::Svg => Format::Svg,
        }
    }
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        eprintln!("  [{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;
static INIT: Once = Once::new();

fn init_logger(verbose: bool) {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        });
    });
}

fn read_input(input: Option<&PathBuf>) -> Result<String, PathError> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(text)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = PathConfig {
        format: cli.format.into(),
        strict: cli.strict,
        scale: cli.scale,
        angle: cli.angle.to_radians(),
        offset: Vec2::new(cli.dx, cli.dy),
        relative: cli.relative,
        simplify: !cli.no_simplify,
        simplify_threshold: cli.threshold,
    };

    let text = read_input(cli.input.as_ref())?;
    let path = config.parse(text.trim())?;
    let points_in = path.len();
    let path = config.apply(path);

    let output = PathConfig {
        format: cli.output_format.unwrap_or(cli.format).into(),
        ..config
    };
    println!("{}", output.encode(&path));

    let bbox = path.bbox();
    eprintln!(
        "  Result      {} \u{2192} {} points \u{00b7} bbox ({}, {})\u{2013}({}, {}) \u{00b7} length {:.1}",
        points_in,
        path.len(),
        bbox.x0,
        bbox.y0,
        bbox.x1,
        bbox.y1,
        path.length(),
    );

    Ok(())
}
