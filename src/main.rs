//! Goban-Rust: command line front end for the Go board engine.
//!
//! ## Usage
//!
//! - `goban-rust` - Show a demo
//! - `goban-rust gtp` - Start a board-only GTP session
//! - `goban-rust replay D4 Q16 ...` - Replay moves and print the result
//! - `goban-rust handicap 9` - Print handicap points
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use goban_rust::board::Board;
use goban_rust::constants::{BLACK, DEFAULT_SIZE, WHITE};
use goban_rust::gtp::{GtpSession, replay};
use goban_rust::vertex::{Vertex, str_coord};

/// Goban-Rust: an immutable Go board engine
#[derive(Parser)]
#[command(name = "goban-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a GTP (Go Text Protocol) session on stdin/stdout
    Gtp {
        /// Initial board size
        #[arg(long, default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
        size: i64,
    },
    /// Replay alternating moves (black first) and print the final position
    Replay {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
        size: i64,
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
        /// Moves in GTP coordinates, `pass` to skip a turn
        moves: Vec<String>,
    },
    /// Print the traditional handicap points
    Handicap {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
        size: i64,
        /// Number of handicap stones
        count: usize,
    },
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp { size }) => {
            let mut session = GtpSession::new(size)?;
            session.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Replay { size, json, moves }) => {
            let board = replay(size, &moves)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                print_board(&board);
            }
        }
        Some(Commands::Handicap { size, count }) => {
            let board = Board::new(size)?;
            let coords: Vec<String> = board
                .handicap_placement(count)
                .into_iter()
                .map(|v| coord_label(v, board.size()))
                .collect();
            println!("{}", coords.join(" "));
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn coord_label(v: Vertex, size: usize) -> String {
    str_coord(v, size).unwrap_or_else(|| v.to_string())
}

fn print_board(board: &Board) {
    let caps = board.captures();
    print!("{board}");
    println!("Captures: black {} white {}", caps.black, caps.white);
    println!("Hash: {:016x}", board.position_hash());
}

fn run_demo() -> Result<()> {
    println!("Goban-Rust: Immutable Go Board Engine\n");

    println!("=== Capture Demo ===");
    let board = Board::new(9)?;
    let moves = [
        (BLACK, Vertex::new(1, 0)),
        (WHITE, Vertex::new(0, 0)),
        (BLACK, Vertex::new(0, 1)),
    ];
    let mut positions = vec![board];
    for (sign, v) in moves {
        let last = &positions[positions.len() - 1];
        if let Some(next) = last.make_move(sign.into(), v) {
            positions.push(next);
        }
    }
    let last = &positions[positions.len() - 1];
    print_board(last);
    println!("History keeps {} positions\n", positions.len());

    println!("=== Handicap Demo ===");
    let board = Board::new(19)?;
    for count in 2..=9 {
        let coords: Vec<String> = board
            .handicap_placement(count)
            .into_iter()
            .map(|v| coord_label(v, board.size()))
            .collect();
        println!("{count}: {}", coords.join(" "));
    }
    Ok(())
}
