use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "heartline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a configuration preset as JSON.
    Config(ConfigArgs),
    /// Print the path presented at one timestamp of a run started at t=0.
    Path(PathArgs),
    /// Write a run as a numbered SVG or PNG frame sequence.
    Frames(FramesArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Normalized,
    PixelStrip,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Svg,
    Png,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    #[arg(long, value_enum, default_value_t = Preset::Normalized)]
    preset: Preset,
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Configuration JSON; overrides `--preset`.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Preset::Normalized)]
    preset: Preset,

    /// Viewport width used to pick a responsive breakpoint.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,
}

#[derive(Parser, Debug)]
struct PathArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Milliseconds since the run was triggered.
    #[arg(long)]
    at_ms: f64,

    /// Also print the `k = ..` readout to stderr.
    #[arg(long)]
    readout: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Length of the rendered run in milliseconds.
    #[arg(long, default_value_t = 3000.0)]
    duration_ms: f64,

    #[arg(long, value_enum, default_value_t = FormatChoice::Svg)]
    format: FormatChoice,

    /// PNG width in pixels; height follows the strip aspect ratio.
    #[arg(long, default_value_t = 500)]
    png_width: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Config(args) => cmd_config(args),
        Command::Path(args) => cmd_path(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn preset(p: Preset) -> heartline::MorphConfig {
    match p {
        Preset::Normalized => heartline::MorphConfig::normalized(),
        Preset::PixelStrip => heartline::MorphConfig::pixel_strip(),
    }
}

fn load_config(source: &SourceArgs) -> anyhow::Result<heartline::MorphConfig> {
    match &source.config_path {
        Some(path) => heartline::MorphConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(preset(source.preset)),
    }
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    println!("{}", preset(args.preset).to_json_pretty()?);
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.at_ms >= 0.0, "--at-ms must be >= 0");
    let config = load_config(&args.source)?;
    let stage = heartline::Stage::new(&config, args.source.viewport_width)?;
    let mut director = heartline::AnimationDirector::new(&config)?;

    director.trigger(heartline::Millis::ZERO);
    let frame = director
        .advance(&stage, heartline::Millis(args.at_ms))
        .context("director produced no frame after trigger (bug)")?;

    println!("{}", frame.path);
    if args.readout {
        eprintln!("{}", heartline::format_k_readout(frame.k));
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    anyhow::ensure!(args.duration_ms >= 0.0, "--duration-ms must be >= 0");

    let config = load_config(&args.source)?;
    let format = match args.format {
        FormatChoice::Svg => heartline::FrameFormat::Svg,
        FormatChoice::Png => heartline::FrameFormat::Png {
            width: args.png_width,
        },
    };
    let sink = heartline::SvgFrameSink::new(
        &args.out,
        config.strip,
        heartline::SvgStyle::default(),
        format,
    )?;
    let mut viewer = heartline::Viewer::new(&config, args.source.viewport_width, sink)?;

    let frame_ms = 1000.0 / f64::from(args.fps);
    let frames = (args.duration_ms / frame_ms).floor() as u64 + 1;
    viewer.start(heartline::Millis::ZERO);
    for i in 0..frames {
        let now = heartline::Millis(i as f64 * frame_ms);
        viewer
            .frame(now)
            .with_context(|| format!("render frame at {:.1}ms", now.0))?;
    }

    // the idle line is frame 0
    eprintln!(
        "wrote {} frames to {}",
        viewer.sink().frames_written(),
        args.out.display()
    );
    Ok(())
}
