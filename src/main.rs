//! Gomoku engine command line
//!
//! - `gomoku suggest --board FILE --side white` - best move for a position
//! - `gomoku selfplay --games 10` - engine against a random player

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use gomoku::{selfplay, AIEngine, Board, SearchConfig, Stone};

/// Gomoku minimax engine
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the engine's move for a board read from a file or stdin
    Suggest {
        /// Board file ('.', 'B', 'W' per cell); stdin when omitted
        #[arg(long)]
        board: Option<PathBuf>,
        /// Side to move
        #[arg(long, value_enum, default_value_t = Side::Black)]
        side: Side,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Play the engine (Black) against a random player (White)
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

#[derive(Args)]
struct SearchArgs {
    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: i8,
    /// Plain minimax without pruning
    #[arg(long)]
    no_alpha_beta: bool,
    /// Candidate radius around existing stones (0 = whole board)
    #[arg(long, default_value_t = 2)]
    radius: u8,
    /// Time limit per move in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,
    /// Node budget per move
    #[arg(long)]
    nodes: Option<u64>,
    /// Search root moves on all cores
    #[arg(long)]
    parallel: bool,
}

impl SearchArgs {
    fn config(&self) -> SearchConfig {
        let mut config = SearchConfig::with_depth(self.depth)
            .alpha_beta(!self.no_alpha_beta)
            .radius(self.radius)
            .parallel(self.parallel);
        if let Some(ms) = self.time_ms {
            config = config.time_limit(Duration::from_millis(ms));
        }
        if let Some(nodes) = self.nodes {
            config = config.node_budget(nodes);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest { board, side, search } => suggest(board, side.into(), search.config()),
        Commands::Selfplay { games, seed, search } => {
            let report = selfplay::run(search.config(), games, seed).context("self-play failed")?;
            println!("{report}");
            Ok(())
        }
    }
}

fn suggest(path: Option<PathBuf>, stone: Stone, config: SearchConfig) -> Result<()> {
    let text = match &path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading board from stdin")?;
            text
        }
    };
    let mut board: Board = text.parse().context("parsing board")?;

    let engine = AIEngine::new(config)?;
    let result = engine.get_move(&board, stone).context("searching for a move")?;
    board.place_stone(result.best_move.pos, stone)?;

    println!("{}", result.best_move);
    println!(
        "score {} depth {} nodes {} time {:?} ({:?})",
        result.score, result.depth, result.nodes, result.elapsed, result.search_type
    );
    println!("status: {}", engine.verdict(&board, result.best_move));
    Ok(())
}
