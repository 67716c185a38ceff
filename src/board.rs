//! Go board position and move execution.
//!
//! A [`Board`] is an immutable value: a square grid of signs plus the capture
//! counters of both players. Queries never change it, and [`Board::make_move`]
//! returns a fresh board, so older positions stay valid for undo, history and
//! branching.
//!
//! Internally the grid is a dense row-major `Vec` indexed by
//! [`Vertex::index`]. Chain discovery is an iterative flood fill with a
//! visited bitmap over those indices.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::*;
use crate::error::{BoardError, MoveError};
use crate::vertex::Vertex;

/// Number of opponent stones each player has captured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Captures {
    /// Stones captured by black
    pub black: u32,
    /// Stones captured by white
    pub white: u32,
}

impl Captures {
    pub fn new(black: u32, white: u32) -> Self {
        Captures { black, white }
    }

    /// Captures made by the player of `sign`. Zero for the empty sign.
    pub fn get(&self, sign: Sign) -> u32 {
        match sign {
            s if s > 0 => self.black,
            s if s < 0 => self.white,
            _ => 0,
        }
    }

    fn add(&mut self, sign: Sign, count: u32) {
        match sign {
            s if s > 0 => self.black = self.black.saturating_add(count),
            s if s < 0 => self.white = self.white.saturating_add(count),
            _ => {}
        }
    }
}

/// A Go position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedBoard", into = "SavedBoard")]
pub struct Board {
    size: usize,
    /// Row-major signs, `size * size` entries
    signs: Vec<Sign>,
    captures: Captures,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty(DEFAULT_SIZE)
    }
}

fn validate_size(size: i64) -> Result<usize, BoardError> {
    usize::try_from(size)
        .ok()
        .filter(|&s| s <= MAX_BOARD_SIZE)
        .ok_or(BoardError::InvalidSize(size))
}

/// In-range orthogonal neighbors of `idx` (left, right, up, down).
#[inline]
fn neighbors(size: usize, idx: usize) -> impl Iterator<Item = usize> {
    let (x, y) = (idx % size, idx / size);
    [
        (x > 0).then(|| idx - 1),
        (x + 1 < size).then(|| idx + 1),
        (y > 0).then(|| idx - size),
        (y + 1 < size).then(|| idx + size),
    ]
    .into_iter()
    .flatten()
}

impl Board {
    /// Empty board of an already validated `size`.
    pub(crate) fn empty(size: usize) -> Self {
        Board {
            size,
            signs: vec![EMPTY; size * size],
            captures: Captures::default(),
        }
    }

    /// Create an empty board with no captures.
    ///
    /// # Errors
    /// [`BoardError::InvalidSize`] if `size` is negative or larger than
    /// [`MAX_BOARD_SIZE`].
    pub fn new(size: i64) -> Result<Self, BoardError> {
        Ok(Board::empty(validate_size(size)?))
    }

    /// Create a board from a prior arrangement and capture counts.
    ///
    /// Every sign is normalized to `{-1, 0, 1}`. Vertices missing from
    /// `arrangement` stay empty and off-board entries are ignored. Missing
    /// captures start at zero.
    pub fn from_arrangement<I>(
        size: i64,
        arrangement: I,
        captures: Option<Captures>,
    ) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Vertex, Sign)>,
    {
        let mut board = Board::empty(validate_size(size)?);
        for (v, sign) in arrangement {
            if let Some(idx) = v.index(board.size) {
                board.signs[idx] = sign.signum();
            }
        }
        board.captures = captures.unwrap_or_default();
        Ok(board)
    }

    /// Create a board from row-major sign rows, as stored in a saved game.
    ///
    /// Unlike [`Board::from_arrangement`] the grid must be complete and every
    /// cell must already be a valid sign.
    pub fn from_parts(size: i64, rows: &[Vec<Sign>], captures: Captures) -> Result<Self, BoardError> {
        let mut board = Board::empty(validate_size(size)?);
        if rows.len() != board.size {
            return Err(BoardError::ArrangementShape {
                expected: board.size,
                found: rows.len(),
            });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != board.size {
                return Err(BoardError::ArrangementShape {
                    expected: board.size,
                    found: row.len(),
                });
            }
            for (x, &sign) in row.iter().enumerate() {
                if !(-1..=1).contains(&sign) {
                    return Err(BoardError::InvalidSign(sign.into()));
                }
                board.signs[y * board.size + x] = sign;
            }
        }
        board.captures = captures;
        Ok(board)
    }

    /// Parse a diagram in the [`Display`](fmt::Display) format: `X` for
    /// black, `O` for white, `.` for empty, one row per line. Whitespace
    /// inside a row is ignored.
    pub fn from_diagram(text: &str) -> Result<Self, BoardError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        'X' | 'x' => Ok(BLACK),
                        'O' | 'o' => Ok(WHITE),
                        '.' | '+' => Ok(EMPTY),
                        other => Err(BoardError::UnknownSymbol(other)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_parts(rows.len() as i64, &rows, Captures::default())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    /// Whether `v` lies on this board.
    #[inline]
    pub fn has_vertex(&self, v: Vertex) -> bool {
        v.index(self.size).is_some()
    }

    /// Sign at `v`, or `None` off the board.
    #[inline]
    pub fn get(&self, v: Vertex) -> Option<Sign> {
        v.index(self.size).map(|idx| self.signs[idx])
    }

    /// All vertices of the board in row-major order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + use<> {
        let size = self.size;
        (0..size * size).map(move |idx| Vertex::from_index(idx, size))
    }

    /// True if no stone is on the board.
    pub fn is_empty(&self) -> bool {
        self.signs.iter().all(|&s| s == EMPTY)
    }

    /// Orthogonal neighbors of `v` on the board, in the order left, right,
    /// up, down. Empty for an off-board `v`.
    pub fn neighborhood(&self, v: Vertex) -> Vec<Vertex> {
        if !self.has_vertex(v) {
            return Vec::new();
        }
        v.adjacent()
            .into_iter()
            .filter(|&n| self.has_vertex(n))
            .collect()
    }

    /// Flood fill from `start` through vertices whose sign satisfies
    /// `member`. `start` itself is always part of the result.
    fn component(&self, start: usize, mut member: impl FnMut(Sign) -> bool) -> Vec<usize> {
        let mut visited = vec![false; self.signs.len()];
        let mut stack = vec![start];
        let mut out = Vec::new();
        visited[start] = true;

        while let Some(idx) = stack.pop() {
            out.push(idx);
            for n in neighbors(self.size, idx) {
                if !visited[n] && member(self.signs[n]) {
                    visited[n] = true;
                    stack.push(n);
                }
            }
        }
        out
    }

    /// Unique empty points adjacent to any point of `chain`.
    fn liberty_indices(&self, chain: &[usize]) -> Vec<usize> {
        let mut seen = vec![false; self.signs.len()];
        let mut libs = Vec::new();
        for &idx in chain {
            for n in neighbors(self.size, idx) {
                if self.signs[n] == EMPTY && !seen[n] {
                    seen[n] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    fn chain_indices(&self, idx: usize) -> Vec<usize> {
        let sign = self.signs[idx];
        self.component(idx, |s| s == sign)
    }

    fn to_vertices(&self, indices: Vec<usize>) -> Vec<Vertex> {
        indices
            .into_iter()
            .map(|idx| Vertex::from_index(idx, self.size))
            .collect()
    }

    /// Vertices connected to `v` through points whose sign satisfies
    /// `predicate`, starting with `v`. Empty for an off-board `v`.
    pub fn connected_component(&self, v: Vertex, predicate: impl FnMut(Sign) -> bool) -> Vec<Vertex> {
        match v.index(self.size) {
            Some(idx) => self.to_vertices(self.component(idx, predicate)),
            None => Vec::new(),
        }
    }

    /// The maximal set of same-sign vertices connected to `v`, starting with
    /// `v`. Empty points form chains too.
    pub fn chain(&self, v: Vertex) -> Vec<Vertex> {
        match v.index(self.size) {
            Some(idx) => self.to_vertices(self.chain_indices(idx)),
            None => Vec::new(),
        }
    }

    /// Stones of `v`'s color reachable from `v` through stones of that color
    /// or empty points.
    pub fn related_chains(&self, v: Vertex) -> Vec<Vertex> {
        let sign = match self.get(v) {
            Some(s) if s != EMPTY => s,
            _ => return Vec::new(),
        };
        self.connected_component(v, |s| s == sign || s == EMPTY)
            .into_iter()
            .filter(|&w| self.get(w) == Some(sign))
            .collect()
    }

    /// Liberties of the chain at `v`, without duplicates. An empty point has
    /// no liberties.
    pub fn liberties(&self, v: Vertex) -> Vec<Vertex> {
        match v.index(self.size) {
            Some(idx) if self.signs[idx] != EMPTY => {
                let chain = self.chain_indices(idx);
                self.to_vertices(self.liberty_indices(&chain))
            }
            _ => Vec::new(),
        }
    }

    /// Whether the chain at `v` has at least one liberty. Stops at the first
    /// one found.
    pub fn has_liberties(&self, v: Vertex) -> bool {
        let Some(start) = v.index(self.size) else {
            return false;
        };
        let sign = self.signs[start];
        if sign == EMPTY {
            return false;
        }

        let mut visited = vec![false; self.signs.len()];
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(idx) = stack.pop() {
            for n in neighbors(self.size, idx) {
                match self.signs[n] {
                    EMPTY => return true,
                    s if s == sign && !visited[n] => {
                        visited[n] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// True if every chain on the board has at least one liberty.
    pub fn is_valid(&self) -> bool {
        let mut checked = vec![false; self.signs.len()];
        for idx in 0..self.signs.len() {
            if self.signs[idx] == EMPTY || checked[idx] {
                continue;
            }
            let chain = self.chain_indices(idx);
            if self.liberty_indices(&chain).is_empty() {
                return false;
            }
            for c in chain {
                checked[c] = true;
            }
        }
        true
    }

    /// Play a stone of `sign` at `v`.
    ///
    /// Only the sign of `sign` matters. Returns `None` for an illegal move
    /// (`sign == 0` or an occupied point). An off-board `v` yields an
    /// unchanged copy. A suicide is placed and then retracted, leaving the
    /// point empty and the capture counters untouched.
    pub fn make_move(&self, sign: i32, v: Vertex) -> Option<Board> {
        self.try_make_move(sign, v).ok()
    }

    /// Like [`Board::make_move`], but reports why a move was rejected.
    ///
    /// # Errors
    /// - [`MoveError::EmptySign`] if `sign` is zero
    /// - [`MoveError::Occupied`] if `v` already holds a stone
    pub fn try_make_move(&self, sign: i32, v: Vertex) -> Result<Board, MoveError> {
        let sign = normalize_sign(sign);
        let Some(idx) = v.index(self.size) else {
            return Ok(self.clone());
        };
        if sign == EMPTY {
            return Err(MoveError::EmptySign);
        }
        if self.signs[idx] != EMPTY {
            return Err(MoveError::Occupied(v));
        }

        let mut next = self.clone();
        let enemy = opponent(sign);
        let mut captured = 0u32;

        // Chains already removed read as empty here, so each is taken once.
        for n in neighbors(self.size, idx) {
            if next.signs[n] != enemy {
                continue;
            }
            let chain = next.chain_indices(n);
            if next.liberty_indices(&chain) == [idx] {
                for &c in &chain {
                    next.signs[c] = EMPTY;
                }
                captured = captured.saturating_add(chain.len() as u32);
            }
        }

        next.signs[idx] = sign;

        if captured > 0 {
            next.captures.add(sign, captured);
            debug!(%v, sign, captured, "stones captured");
        } else {
            let own = next.chain_indices(idx);
            if next.liberty_indices(&own).is_empty() {
                for &c in &own {
                    next.signs[c] = EMPTY;
                }
                debug!(%v, sign, removed = own.len(), "suicide retracted");
            }
        }
        Ok(next)
    }

    /// Whether playing `sign` at `v` is accepted but leaves `v` empty.
    pub fn is_suicide(&self, sign: i32, v: Vertex) -> bool {
        match self.try_make_move(sign, v) {
            Ok(next) if self.has_vertex(v) => next.get(v) == Some(EMPTY),
            _ => false,
        }
    }

    /// A copy of this board with `v` set to `sign`, bypassing capture
    /// rules. Used for setup stones. Off-board vertices are ignored.
    pub fn with_sign(&self, v: Vertex, sign: Sign) -> Board {
        let mut next = self.clone();
        if let Some(idx) = v.index(self.size) {
            next.signs[idx] = sign.signum();
        }
        next
    }

    /// Vertices whose signs differ between `self` and `other`, in row-major
    /// order. `None` if the board sizes differ.
    pub fn diff(&self, other: &Board) -> Option<Vec<Vertex>> {
        if self.size != other.size {
            return None;
        }
        let changed = (0..self.signs.len())
            .filter(|&idx| self.signs[idx] != other.signs[idx])
            .collect();
        Some(self.to_vertices(changed))
    }

    /// Zobrist hash of the stone arrangement.
    ///
    /// Keys come from a fixed-seed generator, so the hash is stable across
    /// runs. Capture counts do not contribute.
    pub fn position_hash(&self) -> u64 {
        let mut rng = fastrand::Rng::with_seed(ZOBRIST_SEED ^ self.size as u64);
        let mut hash = 0u64;
        for &sign in &self.signs {
            let (black_key, white_key) = (rng.u64(..), rng.u64(..));
            match sign {
                BLACK => hash ^= black_key,
                WHITE => hash ^= white_key,
                _ => {}
            }
        }
        hash
    }

    /// Traditional handicap points for this board size, at most `count` of
    /// them.
    ///
    /// Corners come first. On odd sizes the side points and the center
    /// follow, with the center moved forward so that 5 and 7 stones include
    /// it. Boards under 6 lines and counts under 2 have no placement.
    pub fn handicap_placement(&self, count: usize) -> Vec<Vertex> {
        if self.size < HANDICAP_MIN_SIZE || count < 2 {
            return Vec::new();
        }

        let size = self.size as i32;
        let near = if self.size >= HANDICAP_WIDE_SIZE {
            HANDICAP_NEAR_WIDE
        } else {
            HANDICAP_NEAR_SMALL
        };
        let far = size - near - 1;

        let mut points = vec![
            Vertex::new(near, near),
            Vertex::new(far, far),
            Vertex::new(near, far),
            Vertex::new(far, near),
        ];

        if size % 2 != 0 {
            let middle = (size - 1) / 2;
            let center = Vertex::new(middle, middle);
            if count == 5 {
                points.push(center);
            }
            points.push(Vertex::new(near, middle));
            points.push(Vertex::new(far, middle));
            if count == 7 {
                points.push(center);
            }
            points.push(Vertex::new(middle, near));
            points.push(Vertex::new(middle, far));
            points.push(center);
        }

        points.truncate(count);
        points
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.signs.chunks(self.size.max(1)) {
            for (x, &sign) in row.iter().enumerate() {
                let ch = match sign {
                    BLACK => 'X',
                    WHITE => 'O',
                    _ => '.',
                };
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// On-disk form of a [`Board`]: rows of signs plus captures.
#[derive(Serialize, Deserialize)]
struct SavedBoard {
    size: usize,
    arrangement: Vec<Vec<Sign>>,
    captures: Captures,
}

impl From<Board> for SavedBoard {
    fn from(board: Board) -> Self {
        let arrangement = board
            .signs
            .chunks(board.size.max(1))
            .map(<[Sign]>::to_vec)
            .collect();
        SavedBoard {
            size: board.size,
            arrangement,
            captures: board.captures,
        }
    }
}

impl TryFrom<SavedBoard> for Board {
    type Error = BoardError;

    fn try_from(saved: SavedBoard) -> Result<Self, Self::Error> {
        let size = i64::try_from(saved.size).map_err(|_| BoardError::InvalidSize(i64::MAX))?;
        Board::from_parts(size, &saved.arrangement, saved.captures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i32, y: i32) -> Vertex {
        Vertex::new(x, y)
    }

    fn sorted(mut vs: Vec<Vertex>) -> Vec<Vertex> {
        vs.sort();
        vs
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.size(), 9);
        assert!(board.is_empty());
        assert_eq!(board.captures(), Captures::default());
        assert!(board.vertices().all(|w| board.get(w) == Some(EMPTY)));
        assert_eq!(board.vertices().count(), 81);
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(Board::new(-1), Err(BoardError::InvalidSize(-1)));
        assert_eq!(
            Board::new(MAX_BOARD_SIZE as i64 + 1),
            Err(BoardError::InvalidSize(MAX_BOARD_SIZE as i64 + 1))
        );
        let zero = Board::new(0).unwrap();
        assert!(!zero.has_vertex(v(0, 0)));
        assert_eq!(zero.to_string(), "");
    }

    #[test]
    fn test_default_is_19() {
        assert_eq!(Board::default().size(), DEFAULT_SIZE);
    }

    #[test]
    fn test_neighbors_helper_edges() {
        let corner: Vec<_> = neighbors(5, 0).collect();
        assert_eq!(corner, vec![1, 5]);
        let center: Vec<_> = neighbors(5, 12).collect();
        assert_eq!(center, vec![11, 13, 7, 17]);
        let last: Vec<_> = neighbors(5, 24).collect();
        assert_eq!(last, vec![23, 19]);
    }

    #[test]
    fn test_captures_indexing() {
        let mut caps = Captures::new(2, 5);
        assert_eq!(caps.get(BLACK), 2);
        assert_eq!(caps.get(WHITE), 5);
        assert_eq!(caps.get(EMPTY), 0);
        caps.add(WHITE, 3);
        assert_eq!(caps.white, 8);
        caps.add(BLACK, u32::MAX);
        assert_eq!(caps.black, u32::MAX);
    }

    #[test]
    fn test_chain_of_empty_region() {
        let board = Board::from_diagram(
            "
            . X .
            X X .
            . . .
            ",
        )
        .unwrap();
        assert_eq!(board.chain(v(0, 0)), vec![v(0, 0)]);
        assert_eq!(board.chain(v(2, 2)).len(), 5);
        assert_eq!(board.chain(v(1, 1))[0], v(1, 1));
        assert_eq!(
            sorted(board.chain(v(1, 0))),
            vec![v(0, 1), v(1, 0), v(1, 1)]
        );
    }

    #[test]
    fn test_liberties_deduplicated() {
        let board = Board::from_diagram(
            "
            . . . .
            . X X .
            . X . .
            . . . .
            ",
        )
        .unwrap();
        let libs = board.liberties(v(1, 1));
        // (2, 2) touches two stones of the chain but counts once
        assert_eq!(libs.len(), 7);
        assert_eq!(libs.iter().filter(|&&w| w == v(2, 2)).count(), 1);
        assert!(board.liberties(v(0, 0)).is_empty());
        assert!(board.has_liberties(v(1, 1)));
        assert!(!board.has_liberties(v(0, 0)));
    }

    #[test]
    fn test_capture_counts_each_chain_once() {
        // Both white chains touch (2, 1) from two sides
        let board = Board::from_diagram(
            "
            X O O X .
            X O . O X
            . X O O X
            . . X X .
            . . . . .
            ",
        )
        .unwrap();
        assert_eq!(board.liberties(v(1, 0)), vec![v(2, 1)]);
        let next = board.make_move(1, v(2, 1)).unwrap();
        assert_eq!(next.captures().black, 6);
        assert_eq!(next.captures().white, 0);
        assert_eq!(next.get(v(3, 1)), Some(EMPTY));
        assert_eq!(next.get(v(2, 2)), Some(EMPTY));
        assert_eq!(next.get(v(2, 1)), Some(BLACK));
    }

    #[test]
    fn test_suicide_of_group() {
        let board = Board::from_diagram(
            "
            O . X .
            O X . .
            X . . .
            . . . .
            ",
        )
        .unwrap();
        // White at (1, 0) joins its two stones and leaves them no liberty
        let next = board.make_move(-1, v(1, 0)).unwrap();
        assert_eq!(next.get(v(1, 0)), Some(EMPTY));
        assert_eq!(next.get(v(0, 0)), Some(EMPTY));
        assert_eq!(next.get(v(0, 1)), Some(EMPTY));
        assert_eq!(next.captures(), board.captures());
        assert!(board.is_suicide(-1, v(1, 0)));
        assert!(!board.is_suicide(1, v(1, 0)));
    }

    #[test]
    fn test_capture_rules_out_suicide() {
        let board = Board::from_diagram(
            "
            . O X .
            O X . .
            X . . .
            . . . .
            ",
        )
        .unwrap();
        // Black at (0, 0) has no liberty of its own but takes both white stones
        let next = board.make_move(1, v(0, 0)).unwrap();
        assert_eq!(next.get(v(0, 0)), Some(BLACK));
        assert_eq!(next.get(v(1, 0)), Some(EMPTY));
        assert_eq!(next.get(v(0, 1)), Some(EMPTY));
        assert_eq!(next.captures().black, 2);
        assert!(next.is_valid());
    }

    #[test]
    fn test_illegal_moves() {
        let board = Board::new(5).unwrap().make_move(1, v(2, 2)).unwrap();
        assert_eq!(board.make_move(0, v(1, 1)), None);
        assert_eq!(board.make_move(-1, v(2, 2)), None);
        assert_eq!(board.try_make_move(0, v(1, 1)), Err(MoveError::EmptySign));
        assert_eq!(
            board.try_make_move(1, v(2, 2)),
            Err(MoveError::Occupied(v(2, 2)))
        );
    }

    #[test]
    fn test_sign_magnitude_ignored() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.make_move(7, v(1, 1)).unwrap().get(v(1, 1)), Some(BLACK));
        assert_eq!(board.make_move(-3, v(1, 1)).unwrap().get(v(1, 1)), Some(WHITE));
    }

    #[test]
    fn test_is_valid_detects_dead_chain() {
        let board = Board::from_diagram(
            "
            X O .
            O . .
            . . .
            ",
        )
        .unwrap();
        assert!(!board.is_valid());
        assert!(Board::new(3).unwrap().is_valid());
    }

    #[test]
    fn test_with_sign_does_not_capture() {
        let board = Board::new(3).unwrap().with_sign(v(1, 0), WHITE).with_sign(v(0, 1), WHITE);
        let next = board.with_sign(v(0, 0), BLACK);
        assert_eq!(next.get(v(0, 0)), Some(BLACK));
        assert_eq!(board.get(v(0, 0)), Some(EMPTY));
        assert!(!next.is_valid());
        assert_eq!(next.with_sign(v(9, 9), BLACK), next);
    }

    #[test]
    fn test_diagram_display_roundtrip() {
        let text = "X . O\n. X .\nO . .\n";
        let board = Board::from_diagram(text).unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(board.get(v(2, 0)), Some(WHITE));
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!(
            Board::from_diagram("X .\n. . ."),
            Err(BoardError::ArrangementShape {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Board::from_diagram("X ?\n. ."),
            Err(BoardError::UnknownSymbol('?'))
        );
    }

    #[test]
    fn test_from_parts_rejects_bad_sign() {
        let rows = vec![vec![0, 2], vec![0, 0]];
        assert_eq!(
            Board::from_parts(2, &rows, Captures::default()),
            Err(BoardError::InvalidSign(2))
        );
    }

    #[test]
    fn test_position_hash() {
        let empty = Board::new(9).unwrap();
        let a = empty.make_move(1, v(2, 2)).unwrap();
        let b = empty.with_sign(v(2, 2), BLACK);
        assert_eq!(empty.position_hash(), 0);
        assert_eq!(a.position_hash(), b.position_hash());
        assert_ne!(a.position_hash(), empty.position_hash());
        assert_ne!(
            a.position_hash(),
            empty.make_move(-1, v(2, 2)).unwrap().position_hash()
        );
    }

    #[test]
    fn test_handicap_small_boards() {
        assert!(Board::new(5).unwrap().handicap_placement(4).is_empty());
        assert!(Board::new(19).unwrap().handicap_placement(1).is_empty());
        assert_eq!(
            Board::new(9).unwrap().handicap_placement(4),
            vec![v(2, 2), v(6, 6), v(2, 6), v(6, 2)]
        );
        // Even sizes only have corners
        assert_eq!(Board::new(8).unwrap().handicap_placement(9).len(), 4);
    }
}
