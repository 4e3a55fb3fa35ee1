use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "earth-journey", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in animations.
    List,
    /// Print the state of a single frame as JSON.
    Frame(FrameArgs),
    /// Write every frame state as JSON lines.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct Source {
    /// Built-in animation id (see `list`). Defaults to the first built-in.
    #[arg(long)]
    animation: Option<String>,

    /// Input animation JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: Source,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Include arc samples with this resolution.
    #[arg(long)]
    arc_points: Option<u32>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    source: Source,

    /// Output path for the JSON lines.
    #[arg(long)]
    out: PathBuf,

    /// Include arc samples with this resolution.
    #[arg(long)]
    arc_points: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Frame(args) => cmd_frame(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn load_project(source: &Source) -> anyhow::Result<earth_journey::AnimationProject> {
    if let Some(path) = &source.in_path {
        return earth_journey::AnimationProject::from_path(path)
            .with_context(|| format!("load animation '{}'", path.display()));
    }
    match &source.animation {
        Some(id) => earth_journey::catalog::animation(id)
            .with_context(|| format!("unknown animation '{id}' (try `earth-journey list`)")),
        None => Ok(earth_journey::catalog::default_animation()),
    }
}

fn open_session(
    source: &Source,
    arc_points: Option<u32>,
) -> anyhow::Result<earth_journey::RenderSession> {
    let project = load_project(source)?;
    let opts = earth_journey::RenderSessionOpts {
        sample: earth_journey::SampleOptions { arc_points },
    };
    earth_journey::RenderSession::new(&project, opts)
        .with_context(|| format!("build animation '{}'", project.id))
}

fn cmd_list() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for a in earth_journey::catalog::animations() {
        let scene = earth_journey::Scene::from_project(&a)?;
        writeln!(
            out,
            "{}\t{}\t{}\t{} frames",
            a.id,
            a.kind_name(),
            a.name,
            scene.total_frames()
        )?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let session = open_session(&args.source, args.arc_points)?;
    let state = session.render_frame(earth_journey::FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&state).context("serialize frame state")?;
    println!("{json}");
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let session = open_session(&args.source, args.arc_points)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut sink = earth_journey::JsonLinesSink::new(BufWriter::new(f));
    let range = session.scene().frame_range();
    let stats = session
        .render_range(range, &mut sink)
        .with_context(|| format!("write frame states to '{}'", args.out.display()))?;
    eprintln!(
        "wrote {} frames to {} (peak altitude {})",
        stats.frames_total,
        args.out.display(),
        earth_journey::format_altitude(stats.peak_altitude)
    );
    Ok(())
}
