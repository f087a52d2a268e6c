//! Engine-vs-engine Othello
//!
//! Plays one game between two configured engines and prints the board after
//! every move. Set `RUST_LOG=othello=debug` for per-decision search summaries.

use std::process::ExitCode;

use clap::Parser;
use log::info;

use othello::rules::outcome;
use othello::search::DEFAULT_DEPTH;
use othello::{Color, Dimensions, EngineConfig, Game, Move, OthelloEngine, Outcome};

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Engine-vs-engine Othello on a rectangular board")]
struct Args {
    /// Search depth for both sides
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    depth: u8,

    /// Search depth for black, overrides --depth
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    black_depth: Option<u8>,

    /// Search depth for white, overrides --depth
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    white_depth: Option<u8>,

    /// Board columns
    #[arg(long, default_value_t = 9)]
    width: usize,

    /// Board rows
    #[arg(long, default_value_t = 7)]
    height: usize,

    /// Plain minimax instead of alpha-beta
    #[arg(long)]
    no_pruning: bool,

    /// Only print the final position
    #[arg(short, long)]
    quiet: bool,
}

fn engine(
    args: &Args,
    dims: Dimensions,
    name: &str,
    depth: Option<u8>,
) -> othello::Result<OthelloEngine> {
    OthelloEngine::new(
        EngineConfig::for_dimensions(dims)
            .with_name(name)
            .with_depth(depth.unwrap_or(args.depth))
            .with_pruning(!args.no_pruning),
    )
}

fn run(args: &Args) -> othello::Result<()> {
    let dims = Dimensions::new(args.width, args.height)?;
    let black = engine(args, dims, "Black", args.black_depth)?;
    let white = engine(args, dims, "White", args.white_depth)?;
    info!(
        "{}x{} board, black depth {}, white depth {}",
        dims.width(),
        dims.height(),
        black.depth(),
        white.depth()
    );

    let mut game = Game::new(dims);
    if !args.quiet {
        println!("{}", game.board());
    }

    while !game.is_finished() {
        let color = game.to_move();
        let player = match color {
            Color::Black => &black,
            Color::White => &white,
        };
        let result = player.get_move_with_stats(game.board(), color)?;
        game.play_move(result.best_move)?;

        if !args.quiet {
            match result.best_move {
                Move::Place(pos) => println!(
                    "{} plays {pos} (score {:.2}, {} nodes, {}ms)",
                    player.name(),
                    result.score,
                    result.nodes,
                    result.time_ms
                ),
                Move::Pass => println!("{} passes", player.name()),
            }
            println!("{}", game.board());
        }
    }

    if args.quiet {
        println!("{}", game.board());
    }
    let (black_discs, white_discs) = game.scores();
    match outcome(game.board()) {
        Outcome::Win(color) => println!("{color:?} wins {black_discs}-{white_discs} (black-white)"),
        Outcome::Draw => println!("Draw {black_discs}-{white_discs}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
