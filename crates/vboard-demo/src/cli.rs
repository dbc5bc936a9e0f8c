#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use vboard_core::fixtures::{CANVAS_ID, PALETTE_ID};
use vboard_core::{
    BoardConfig, DragKind, GeneratedColumns, InitialData, Location, PaletteAndCanvas, Workspace,
};
use vboard_window::{BoardView, RecordingScrollTarget};

use crate::error::{CliError, Result};
use crate::render::render_board;
use crate::replay::{parse_trace, replay};

#[derive(Debug, Parser)]
#[command(
    name = "vboard-demo",
    about = "Replay drag gestures against a windowed column board",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub board: BoardArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Fixture {
    /// Read-only component palette next to a canvas.
    #[default]
    Palette,
    /// Numbered canvas columns.
    Generated,
}

#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Configuration file (TOML, or JSON with a `.json` extension).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Initial board.
    #[arg(long, value_enum, default_value_t = Fixture::Palette, global = true)]
    pub fixture: Fixture,

    /// Column count for the generated fixture.
    #[arg(long, default_value_t = 2, global = true)]
    pub columns: usize,

    /// Items per column for the generated fixture.
    #[arg(long, default_value_t = 5, global = true)]
    pub items: usize,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Drag palette item `text-1` into the canvas and print the result.
    Scenario,

    /// Replay a JSON-lines gesture trace.
    Replay {
        /// Trace file.
        trace: PathBuf,

        /// Print every window after each step.
        #[arg(long)]
        steps: bool,
    },
}

fn load_config(args: &BoardArgs) -> Result<BoardConfig> {
    match &args.config {
        Some(path) => Ok(BoardConfig::from_file(path)?),
        None => Ok(BoardConfig::default()),
    }
}

fn build_workspace(args: &BoardArgs, config: &BoardConfig) -> Result<Workspace> {
    let board = match args.fixture {
        Fixture::Palette => PaletteAndCanvas.board()?,
        Fixture::Generated => GeneratedColumns {
            columns: args.columns,
            items_per_column: args.items,
        }
        .board()?,
    };
    Ok(Workspace::new(&board, config)?)
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    run(cli, &mut stdout)
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = load_config(&cli.board)?;
    let mut workspace = build_workspace(&cli.board, &config)?;
    let mut view = BoardView::<RecordingScrollTarget>::new(config.window);

    match cli.command {
        Commands::Scenario => {
            workspace.on_drag_start(DragKind::Item, Location::new(PALETTE_ID, 1));
            workspace.on_drag_update(Some(Location::new(CANVAS_ID, 1)));
            let outcome = workspace.on_drag_end(Some(Location::new(CANVAS_ID, 1)));
            writeln!(out, "outcome: {outcome:?}")?;
        }
        Commands::Replay { trace, steps } => {
            let text = std::fs::read_to_string(&trace).map_err(|source| CliError::TraceIo {
                path: trace.clone(),
                source,
            })?;
            let parsed = parse_trace(&text)?;
            let summary = replay(&mut workspace, &mut view, &parsed, out, steps)?;
            writeln!(
                out,
                "steps={} drops={} changed={} scroll_resets={}",
                summary.steps, summary.drops, summary.changed, summary.scroll_resets
            )?;
        }
    }

    let board = workspace.snapshot();
    view.sync(&board);
    render_board(out, &board, &view, workspace.session())?;
    Ok(())
}
