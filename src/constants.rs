//! Constants for board geometry, stone signs, and handicap placement.
//!
//! Stones are encoded as signs: `1` for black, `-1` for white and `0` for an
//! empty point. Any nonzero integer can be turned into a stone color with
//! [`normalize_sign`], only the sign bit matters.
//!
//! The board size is a runtime value. [`DEFAULT_SIZE`] is what
//! [`Board::default`](crate::board::Board) and the command line use when no
//! size is given.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_SIZE: usize = 19;

/// Largest accepted board size. SGF coordinates (`a-z`, `A-Z`) cannot address
/// anything wider.
pub const MAX_BOARD_SIZE: usize = 52;

// =============================================================================
// Stone Signs
// =============================================================================

/// Stone color encoding: `1` = black, `-1` = white, `0` = empty.
pub type Sign = i8;

/// Black stone.
pub const BLACK: Sign = 1;

/// White stone.
pub const WHITE: Sign = -1;

/// Empty point.
pub const EMPTY: Sign = 0;

/// Reduce any integer to a sign. Positive values become black, negative
/// values white, zero stays empty.
#[inline]
pub fn normalize_sign(value: i32) -> Sign {
    value.signum() as Sign
}

/// The opposing color of `sign`. Empty stays empty.
#[inline]
pub fn opponent(sign: Sign) -> Sign {
    -sign
}

// =============================================================================
// Handicap Placement
// =============================================================================

/// Boards smaller than this have no handicap points.
pub const HANDICAP_MIN_SIZE: usize = 6;

/// From this size on, corner handicap points sit on the 4-4 point instead of
/// the 3-3 point.
pub const HANDICAP_WIDE_SIZE: usize = 13;

/// Distance of corner handicap points from the edge on small boards.
pub const HANDICAP_NEAR_SMALL: i32 = 2;

/// Distance of corner handicap points from the edge on boards of
/// [`HANDICAP_WIDE_SIZE`] and up.
pub const HANDICAP_NEAR_WIDE: i32 = 3;

// =============================================================================
// Coordinates and Hashing
// =============================================================================

/// Column letters for GTP coordinates. `I` is skipped to avoid confusion
/// with `J`.
pub const COORD_LETTERS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Seed for the Zobrist key stream. Mixed with the board size so that every
/// size gets its own key table.
pub const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;
