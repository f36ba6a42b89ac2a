use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the frame shown at one scroll position as a PNG.
    Frame(FrameArgs),
    /// Render a PNG per step while sweeping scroll progress from 0 to 1.
    Sweep(SweepArgs),
    /// Print the frame sources the player would request.
    Sources(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Player config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayerArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Directory that frame sources are resolved against (the site's public root).
    #[arg(long)]
    root: PathBuf,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    player: PlayerArgs,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    player: PlayerArgs,

    /// Number of evenly spaced progress samples (including both ends).
    #[arg(long, default_value_t = 80)]
    steps: u32,

    /// Output directory for `step_NNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Sources(args) => cmd_sources(args),
    }
}

fn read_config(args: &ConfigArgs) -> anyhow::Result<scrollreel::PlayerConfig> {
    Ok(match &args.config {
        Some(path) => scrollreel::PlayerConfig::from_json_path(path)?,
        None => scrollreel::PlayerConfig::default(),
    })
}

fn loaded_player(args: &PlayerArgs) -> anyhow::Result<scrollreel::Player> {
    let cfg = read_config(&args.config)?;
    let mut player = scrollreel::Player::new(cfg, Box::new(scrollreel::NoScrollLock))?;

    let fetcher = Arc::new(scrollreel::DirFetcher::new(&args.root));
    let (ticket, mut loader) = player.mount_sequence(fetcher)?;
    player.pump(ticket, &mut loader)?;

    let state = player.load_state();
    eprintln!(
        "loaded {}/{} frames ({} failed)",
        state.loaded_count - state.failed_count,
        state.total,
        state.failed_count
    );
    if player.all_frames_failed() {
        anyhow::bail!(
            "no frame could be loaded from '{}'; check --root and the config naming",
            args.root.display()
        );
    }

    player.resize(scrollreel::Viewport::new(args.width, args.height))?;
    Ok(player)
}

fn write_png(player: &scrollreel::Player, path: &Path) -> anyhow::Result<()> {
    let frame = player
        .snapshot()
        .context("render surface is not attached (empty viewport?)")?;
    frame
        .to_rgba_image()?
        .save(path)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut player = loaded_player(&args.player)?;
    player.set_progress(args.progress)?;
    write_png(&player, &args.out)?;
    println!(
        "frame={} {}",
        player.current_frame(),
        player.opacities()
    );
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps < 2 {
        anyhow::bail!("--steps must be >= 2");
    }
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut player = loaded_player(&args.player)?;
    let last = f64::from(args.steps - 1);
    for step in 0..args.steps {
        let progress = f64::from(step) / last;
        player.set_progress(progress)?;
        let out = args.out_dir.join(format!("step_{step:03}.png"));
        write_png(&player, &out)?;
        println!(
            "step={step:03} progress={progress:.4} frame={} {}",
            player.current_frame(),
            player.opacities()
        );
    }
    Ok(())
}

fn cmd_sources(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args)?;
    for source in cfg.sources() {
        println!("{source}");
    }
    Ok(())
}
