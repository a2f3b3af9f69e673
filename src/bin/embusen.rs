use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "embusen", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the SVG viewBox framing every step.
    Viewbox(ViewboxArgs),
    /// Play through every step and print one JSON line per rendered pose.
    Poses(PosesArgs),
    /// Write the diagram settled on one step as SVG or PNG.
    Frame(FrameArgs),
    /// Print the heading and guard glyph lookups for a label.
    Heading(HeadingArgs),
}

#[derive(Args, Debug)]
struct PlaybackArgs {
    /// Playback config JSON (step_duration_ms, frame_count, padding).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the time between steps.
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Override frames per step transition.
    #[arg(long)]
    frames: Option<u32>,

    /// Override the diagram padding.
    #[arg(long)]
    padding: Option<f64>,
}

#[derive(Args, Debug)]
struct ViewboxArgs {
    /// Input sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    playback: PlaybackArgs,
}

#[derive(Args, Debug)]
struct PosesArgs {
    /// Input sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First step to rest on (0-based).
    #[arg(long, default_value_t = 0)]
    from: usize,

    #[command(flatten)]
    playback: PlaybackArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Input sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Step index (0-based).
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Output path; `.png` rasterizes, anything else writes SVG.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    #[command(flatten)]
    playback: PlaybackArgs,
}

#[derive(Args, Debug)]
struct HeadingArgs {
    /// Compass label (N, NE, E, SE, S, SO, O, NO) or guard label (jodan, chudan, gedan).
    label: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Viewbox(args) => cmd_viewbox(args),
        Command::Poses(args) => cmd_poses(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Heading(args) => cmd_heading(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_opts(args: &PlaybackArgs) -> anyhow::Result<embusen::PlaybackOpts> {
    let mut opts = match &args.config {
        Some(path) => embusen::PlaybackOpts::from_path(path)?,
        None => embusen::PlaybackOpts::default(),
    };
    if let Some(ms) = args.duration_ms {
        opts.step_duration_ms = ms;
    }
    if let Some(frames) = args.frames {
        opts.frame_count = frames;
    }
    if let Some(padding) = args.padding {
        opts.padding = padding;
    }
    opts.validate()?;
    Ok(opts)
}

fn load_session(
    in_path: &Path,
    playback: &PlaybackArgs,
) -> anyhow::Result<embusen::DiagramSession> {
    let opts = load_opts(playback)?;
    let seq = embusen::Sequence::from_path(in_path)?;
    let sess = embusen::DiagramSession::with_virtual_clock(seq.shared_steps(), opts)?;
    Ok(sess)
}

fn cmd_viewbox(args: ViewboxArgs) -> anyhow::Result<()> {
    let sess = load_session(&args.in_path, &args.playback)?;
    println!("{}", sess.region().viewbox());
    Ok(())
}

fn cmd_poses(args: PosesArgs) -> anyhow::Result<()> {
    let mut sess = load_session(&args.in_path, &args.playback)?;
    if sess.steps().is_empty() {
        return Ok(());
    }

    if args.from > 0 {
        sess.jump_to(args.from)?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    while sess.next_step()? {
        let index = sess.current_index();
        for frame in sess.settle() {
            let line = serde_json::json!({
                "step": index,
                "frame": frame.frame,
                "at_ms": frame.at.0,
                "x": frame.pose.x,
                "y": frame.pose.y,
                "heading": frame.pose.heading,
            });
            writeln!(out, "{line}").context("write pose line")?;
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut sess = load_session(&args.in_path, &args.playback)?;
    if !sess.steps().is_empty() {
        sess.play_to(args.index)?;
    } else if args.index != 0 {
        anyhow::bail!("sequence is empty; only --index 0 is valid");
    }

    let style = embusen::SvgStyle {
        width_px: args.width,
        ..embusen::SvgStyle::default()
    };
    let svg = embusen::render_svg(&sess.scene(), &style);

    let is_png = args
        .out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        let frame = embusen::rasterize_svg(&svg)?;
        embusen::save_png(&frame, &args.out)?;
    } else {
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_heading(args: HeadingArgs) -> anyhow::Result<()> {
    match embusen::CompassLabel::parse(&args.label) {
        Some(label) => println!("{label} {}", embusen::heading_of(label)),
        None => println!("{} {}", args.label, embusen::glyph_of(&args.label)),
    }
    Ok(())
}
