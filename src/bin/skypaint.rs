use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use skypaint::{HostConfig, InMemorySurface, RenderHost, WeatherType};

#[derive(Parser, Debug)]
#[command(name = "skypaint", version)]
struct Cli {
    /// Log at debug level instead of info.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a number of frames headlessly and write the last one as a PNG.
    Frame(FrameArgs),
    /// Run the render host against an in-memory surface and print loop statistics.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Weather to paint.
    #[arg(long, value_enum)]
    weather: WeatherType,

    #[arg(long, default_value_t = 720)]
    width: u32,

    #[arg(long, default_value_t = 1280)]
    height: u32,

    /// Frames to advance before capturing.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Device-independent pixel scale.
    #[arg(long, default_value_t = 2.0)]
    density: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Weather to paint. Overrides the config's initial weather.
    #[arg(long, value_enum)]
    weather: Option<WeatherType>,

    #[arg(long, default_value_t = 720)]
    width: u32,

    #[arg(long, default_value_t = 1280)]
    height: u32,

    /// How long to keep the loop running.
    #[arg(long, default_value_t = 1000)]
    millis: u64,

    /// Host configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let density = skypaint::Density::new(args.density)?;
    let mut painter = skypaint::create_painter(args.weather, density)
        .with_context(|| format!("weather '{}' has no painter", args.weather))?;
    painter.attach();
    let frame = skypaint::render_frames(painter.as_mut(), args.width, args.height, args.frames)?;
    painter.detach();

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.to_rgba8(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    println!("wrote {}", args.out.display());
    Ok(())
}

fn read_config(path: Option<&Path>) -> anyhow::Result<HostConfig> {
    match path {
        Some(p) => {
            HostConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(HostConfig::default()),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut config = read_config(args.config.as_deref())?;
    if let Some(weather) = args.weather {
        config.initial_weather = weather;
    }

    let surface = InMemorySurface::new(args.width, args.height);
    let probe = surface.probe();
    let mut host = RenderHost::new(config, Box::new(surface))?;
    host.surface_created()?;
    host.surface_changed(args.width, args.height)?;
    std::thread::sleep(Duration::from_millis(args.millis));
    let phase = host.phase();
    host.shutdown()?;

    let stats = host.stats();
    println!(
        "weather={} presented={} skipped={} acquired={}",
        host.weather(),
        stats.presented,
        stats.skipped,
        probe.acquired()
    );
    if let Some(phase) = phase {
        for (name, value) in &phase.values {
            println!("  {name} = {value:.3}");
        }
    }
    Ok(())
}
