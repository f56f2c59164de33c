use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sliced-cubes", version)]
struct Cli {
    /// Log to stderr; repeat for more detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the seven keyframes of the stage cycle as JSON.
    Stages(StagesArgs),
    /// Print the state update for one clock value.
    State(StateArgs),
    /// Drive the clock and stream state updates as JSON lines.
    Run(RunArgs),
    /// Print reconstructed poses of one slot for the cube that started at the origin node.
    Pose(PoseArgs),
}

#[derive(Parser, Debug)]
struct StagesArgs {
    /// Show configuration JSON (defaults to the built-in show).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct StateArgs {
    /// Clock value in seconds.
    #[arg(long)]
    t: f64,

    /// Show configuration JSON (defaults to the built-in show).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Number of updates to emit.
    #[arg(long)]
    ticks: u64,

    /// Clock step between updates, in seconds.
    #[arg(long)]
    dt: f64,

    /// Clock value of the first update.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Show configuration JSON (defaults to the built-in show).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path (defaults to stdout).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PoseArgs {
    /// Clock value in seconds.
    #[arg(long)]
    t: f64,

    /// Slot index, 0 to 3.
    #[arg(long)]
    slot: usize,

    /// Show configuration JSON (defaults to the built-in show).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Stages(args) => cmd_stages(args),
        Command::State(args) => cmd_state(args),
        Command::Run(args) => cmd_run(args),
        Command::Pose(args) => cmd_pose(args),
    }
}

fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }
    let level = match verbose {
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn read_show(path: Option<&Path>) -> anyhow::Result<sliced_cubes::ShowConfig> {
    let show = match path {
        Some(path) => sliced_cubes::ShowConfig::load(path)?,
        None => sliced_cubes::ShowConfig::default(),
    };
    show.validate()?;
    Ok(show)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out).context("write JSON to stdout")?;
    Ok(())
}

fn cmd_stages(args: StagesArgs) -> anyhow::Result<()> {
    let show = read_show(args.config.as_deref())?;
    let mut rows = Vec::with_capacity(sliced_cubes::STAGE_COUNT);
    for index in 0..sliced_cubes::STAGE_COUNT {
        let keyframe = show
            .stages
            .keyframe(index)
            .with_context(|| format!("keyframe {index} missing from the stage table"))?;
        let next = sliced_cubes::STAGE_NARRATIVE.get(index).copied();
        rows.push(serde_json::json!({
            "stage": index + 1,
            "node_shift": keyframe.node_shift,
            "state": keyframe.state,
            "next": next,
        }));
    }
    print_json(&rows)
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let show = read_show(args.config.as_deref())?;
    let engine = show.build_engine()?;
    let snapshot = engine.snapshot(args.t)?;
    print_json(&sliced_cubes::StateUpdate::from_snapshot(0, &snapshot))
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let show = read_show(args.config.as_deref())?;
    let engine = show.build_engine()?;
    let clock = sliced_cubes::Clock::new(args.start)?;
    let mut driver = sliced_cubes::Driver::new(engine, clock);

    let out: Box<dyn Write + Send> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(f)
        }
        None => Box::new(std::io::stdout()),
    };
    let mut sink = sliced_cubes::JsonLinesSink::new(BufWriter::new(out));
    let stats = driver.run(args.ticks, args.dt, &mut sink)?;
    tracing::info!(
        ticks = stats.ticks,
        first_t = stats.first_t,
        last_t = stats.last_t,
        out = ?args.out,
        "stream written"
    );
    Ok(())
}

fn cmd_pose(args: PoseArgs) -> anyhow::Result<()> {
    let show = read_show(args.config.as_deref())?;
    let engine = show.build_engine()?;
    let slot = sliced_cubes::Slot::new(args.slot)?;
    let sample = engine.sample_slot(slot, args.t)?;

    let host = show.lattice.host_node(
        sliced_cubes::Node::ORIGIN,
        sample.position.cycle,
        show.engine.wrap,
    );
    let frame = show.lattice.frame_for_host(host);
    let pose = sliced_cubes::reconstruct(&sample.state, slot, &frame, &show.geometry);

    print_json(&serde_json::json!({
        "t": args.t,
        "position": sample.position,
        "host": host,
        "destination": frame.destination,
        "state": sample.state,
        "pose": pose,
    }))
}
