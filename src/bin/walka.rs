use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "walka", version, about = "Digit-driven random walk renderer")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the walk headlessly and write the final frame as a PNG.
    Snapshot(SnapshotArgs),
    /// Run the walk headlessly and write a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Animation frames to simulate before the snapshot.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    #[command(flatten)]
    walk: WalkArgs,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Output directory; created if missing.
    #[arg(long)]
    out_dir: PathBuf,

    /// Animation frames to simulate.
    #[arg(long)]
    frames: u64,

    /// Write every K-th frame.
    #[arg(long, default_value_t = 1)]
    every: u64,

    #[command(flatten)]
    walk: WalkArgs,
}

#[derive(Args, Debug)]
struct WalkArgs {
    /// JSON configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the digits come from.
    #[arg(long, value_enum, default_value_t = SourceChoice::Pi)]
    source: SourceChoice,

    /// Digit file for `--source file`.
    #[arg(long)]
    path: Option<PathBuf>,

    /// Seed for `--source lucky`.
    #[arg(long)]
    seed: Option<u64>,

    /// Digits to generate for constant sources.
    #[arg(long, default_value_t = 10_000)]
    digits: usize,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Trail mode.
    #[arg(long, value_enum)]
    trail: Option<TrailChoice>,

    /// Segment coloring.
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,

    /// Speed multiplier target in [0, 4].
    #[arg(long)]
    speed: Option<f64>,

    /// Steps before the step counter soft-resets.
    #[arg(long)]
    budget: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceChoice {
    Pi,
    E,
    Lucky,
    File,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TrailChoice {
    Fade,
    Persistent,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorChoice {
    Fixed,
    Heading,
    Cycling,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn build_engine(args: &WalkArgs) -> anyhow::Result<walka::WalkEngine> {
    let mut config = match &args.config {
        Some(path) => walka::WalkConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => walka::WalkConfig::default(),
    };

    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }
    if let Some(trail) = args.trail {
        config.trail_mode = match trail {
            TrailChoice::Fade => walka::TrailMode::Fade,
            TrailChoice::Persistent => walka::TrailMode::Persistent,
        };
    }
    if let Some(color) = args.color {
        config.color_policy = match color {
            ColorChoice::Fixed => walka::ColorPolicy::Fixed,
            ColorChoice::Heading => walka::ColorPolicy::HeadingDerived,
            ColorChoice::Cycling => walka::ColorPolicy::CyclingHue,
        };
    }
    if let Some(speed) = args.speed {
        config.target_speed = speed;
    }
    if let Some(budget) = args.budget {
        config.step_budget = budget;
    }
    config.validate().context("validate configuration")?;

    let source = match args.source {
        SourceChoice::Pi => walka::DigitSource::Constant(walka::Constant::Pi),
        SourceChoice::E => walka::DigitSource::Constant(walka::Constant::E),
        SourceChoice::Lucky => walka::DigitSource::Lucky { seed: args.seed },
        SourceChoice::File => {
            let path = args
                .path
                .clone()
                .context("--source file requires --path")?;
            walka::DigitSource::File(path)
        }
    };
    let loaded = source.load(args.digits)?;
    if loaded.stream.is_empty() {
        tracing::warn!(source = %loaded.label, "digit source is empty; the walk will not move");
    }

    Ok(walka::WalkEngine::new(config, loaded.stream)?)
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let mut engine = build_engine(&args.walk)?;
    let report = engine.tick(args.frames)?;
    write_frame(&engine, &args.out)?;

    eprintln!(
        "wrote {} ({} frames, {} steps)",
        args.out.display(),
        report.frames_advanced,
        report.steps
    );
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.every == 0 {
        anyhow::bail!("--every must be > 0");
    }
    let mut engine = build_engine(&args.walk)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut written = 0u64;
    for frame in 0..args.frames {
        engine.tick(1)?;
        if frame % args.every == 0 {
            let path = args.out_dir.join(format!("frame_{frame:06}.png"));
            write_frame(&engine, &path)?;
            written += 1;
        }
    }

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn write_frame(engine: &walka::WalkEngine, path: &Path) -> anyhow::Result<()> {
    engine
        .snapshot()
        .write_png(path)
        .with_context(|| format!("export snapshot '{}'", path.display()))
}
