use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hero-reel", version)]
struct Cli {
    /// Log debug diagnostics to stderr (overridden by `RUST_LOG`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page as HTML, optionally after running a script.
    Render(RenderArgs),
    /// Run a script and print a JSON snapshot of the hero per frame.
    Simulate(SimulateArgs),
    /// Print the effective configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event script JSON to run before rendering.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Sampling rate for the script.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output HTML path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Event script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Configuration JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sampling rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Configuration JSON to validate; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<hero_reel::HeroConfig> {
    match path {
        Some(p) => hero_reel::HeroConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(hero_reel::HeroConfig::default()),
    }
}

fn load_script(path: &Path) -> anyhow::Result<hero_reel::Script> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read script '{}'", path.display()))?;
    hero_reel::Script::from_json_str(&s).with_context(|| format!("parse script '{}'", path.display()))
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn std::io::Write>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut ctl = hero_reel::HeroController::new(config)?;
    if let Some(script_path) = &args.script {
        let script = load_script(script_path)?;
        let fps = hero_reel::Fps::new(args.fps, 1)?;
        hero_reel::run_script(&mut ctl, &script, fps)?;
    }

    let mut out = open_output(args.out.as_deref())?;
    writeln!(out, "{}", ctl.scene().to_html()).context("write html")?;
    out.flush().context("flush html")?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let script = load_script(&args.script)?;
    let fps = hero_reel::Fps::new(args.fps, 1)?;

    let mut ctl = hero_reel::HeroController::new(config)?;
    let frames = hero_reel::run_script(&mut ctl, &script, fps)?;

    let mut out = open_output(args.out.as_deref())?;
    serde_json::to_writer_pretty(&mut out, &frames).context("write snapshots")?;
    writeln!(out).context("write snapshots")?;
    out.flush().context("flush snapshots")?;

    if let Some(path) = &args.out {
        eprintln!("wrote {} frames to {}", frames.len(), path.display());
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let json = serde_json::to_string_pretty(&config).context("serialize config")?;
    println!("{json}");
    Ok(())
}
