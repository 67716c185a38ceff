//! Goban-Rust: an immutable Go board engine.
//!
//! This crate models a Go position as a value type and implements the rules
//! every Go program builds on: chains, liberties, captures, suicide and
//! handicap placement.
//!
//! ## Modules
//!
//! - [`constants`] - Stone signs, board size limits, handicap geometry
//! - [`vertex`] - Board coordinates and GTP coordinate conversion
//! - [`board`] - The board value, its queries and move application
//! - [`error`] - Construction and move errors
//! - [`gtp`] - A board-only GTP session and move replay
//!
//! ## Example
//!
//! ```
//! use goban_rust::board::Board;
//! use goban_rust::vertex::Vertex;
//!
//! let board = Board::new(19).unwrap();
//! let next = board.make_move(1, Vertex::new(3, 3)).unwrap();
//!
//! // The original position is untouched
//! assert!(board.is_empty());
//! assert_eq!(next.liberties(Vertex::new(3, 3)).len(), 4);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod gtp;
pub mod vertex;

pub use board::{Board, Captures};
pub use constants::{BLACK, EMPTY, Sign, WHITE};
pub use error::{BoardError, MoveError};
pub use vertex::Vertex;
