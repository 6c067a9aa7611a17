use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lunara", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the generated ambient loop as a 16-bit mono WAV.
    Audio(AudioArgs),
    /// Validate a phase catalog and print it as JSON.
    Phases(PhasesArgs),
    /// Drive a controller headlessly and print one JSON snapshot per navigation step.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct AudioArgs {
    /// Output WAV path.
    #[arg(long)]
    out: PathBuf,

    /// Loop length in seconds.
    #[arg(long, default_value_t = lunara::audio::synth::DEFAULT_DURATION_SECS)]
    duration: f64,

    /// Sample rate in Hz.
    #[arg(long, default_value_t = lunara::audio::synth::DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,
}

#[derive(Parser, Debug)]
struct PhasesArgs {
    /// Phase catalog JSON (defaults to the built-in five phases).
    #[arg(long)]
    phases: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Phase catalog JSON (defaults to the built-in five phases).
    #[arg(long)]
    phases: Option<PathBuf>,

    /// Experience config JSON (ambient, transition and navigation settings).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated navigation steps, e.g. `next,next,prev`.
    #[arg(long, value_delimiter = ',')]
    nav: Vec<lunara::Direction>,

    /// How `--nav` steps are fed in. Both go through the navigation gate, so wheel steps
    /// honour the configured threshold and cooldown.
    #[arg(long, value_enum, default_value_t = InputMode::Wheel)]
    input: InputMode,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seconds to run after each step (defaults to the longest tween plus a margin).
    #[arg(long)]
    settle: Option<f64>,

    /// Attach an in-memory audio host and switch the ambient loop on first.
    #[arg(long)]
    audio: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputMode {
    Wheel,
    Keys,
}

/// One mouse-wheel notch.
const WHEEL_NOTCH: f64 = 120.0;

fn nav_event(mode: InputMode, dir: lunara::Direction, threshold: f64) -> lunara::InputEvent {
    let sign = match dir {
        lunara::Direction::Next => 1.0,
        lunara::Direction::Prev => -1.0,
    };
    match mode {
        InputMode::Wheel => lunara::InputEvent::Wheel {
            delta_y: sign * WHEEL_NOTCH.max(threshold),
        },
        InputMode::Keys => lunara::InputEvent::Key(match dir {
            lunara::Direction::Next => lunara::Key::ArrowRight,
            lunara::Direction::Prev => lunara::Key::ArrowLeft,
        }),
    }
}

#[derive(Serialize)]
struct StepReport {
    step: usize,
    nav: Option<lunara::Direction>,
    changed: bool,
    frame: lunara::FrameSnapshot,
    overlay: lunara::OverlayView,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Audio(args) => cmd_audio(args),
        Command::Phases(args) => cmd_phases(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<lunara::PhaseCatalog> {
    match path {
        Some(p) => lunara::PhaseCatalog::from_path(p)
            .with_context(|| format!("load phase catalog '{}'", p.display())),
        None => Ok(lunara::PhaseCatalog::reference()),
    }
}

fn cmd_audio(args: AudioArgs) -> anyhow::Result<()> {
    let spec = lunara::AmbientSpec::new(args.duration, args.sample_rate)?;
    let bytes = lunara::render_ambient_wav(&spec)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} bytes, {} frames)",
        args.out.display(),
        bytes.len(),
        spec.sample_count()
    );
    Ok(())
}

fn cmd_phases(args: PhasesArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.phases.as_deref())?;
    println!("{}", catalog.to_json_pretty()?);
    eprintln!("{} phases ok", catalog.len());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be positive");
    let catalog = load_catalog(args.phases.as_deref())?;
    let config = match args.config.as_deref() {
        Some(p) => lunara::ExperienceConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => lunara::ExperienceConfig::default(),
    };
    let settle = args
        .settle
        .unwrap_or(config.transition.settle_secs() + 0.2);
    anyhow::ensure!(
        settle.is_finite() && settle >= 0.0,
        "--settle must be a non-negative number of seconds"
    );

    let mut controller =
        lunara::PhaseTransitionController::new(catalog, config.transition.clone())?;
    let mut gate = lunara::NavigationGate::new(config.navigation.clone());
    if args.audio {
        let host: Arc<dyn lunara::AudioHost> = Arc::new(lunara::MemoryHost::new());
        let audio = lunara::AmbientAudio::create(config.ambient, host)?;
        controller.attach_audio(audio);
        controller.set_audio_playing(true);
    }

    let dt = 1.0 / f64::from(args.fps);
    let frames = (settle / dt).ceil() as usize;
    let steps = std::iter::once(None).chain(args.nav.iter().copied().map(Some));

    for (step, nav) in steps.enumerate() {
        let changed = nav.is_some_and(|dir| {
            let event = nav_event(args.input, dir, gate.config().wheel_threshold);
            gate.dispatch(event, &mut controller)
        });
        for _ in 0..frames {
            controller.tick(dt);
        }
        let report = StepReport {
            step,
            nav,
            changed,
            frame: controller.snapshot(),
            overlay: lunara::OverlayView::from_controller(&controller),
        };
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
