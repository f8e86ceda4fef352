use std::str::FromStr;

use cozy_chess::{BitBoard, Board, Color, Move, Piece, Square};
use log::warn;

use crate::{BoardModel, Sketch};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("malformed position '{fen}': {reason}")]
    Malformed { fen: String, reason: String },
}

impl PositionError {
    pub fn malformed(fen: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            fen: fen.to_string(),
            reason: reason.into(),
        }
    }
}

/// A position ready for analysis.
///
/// `Full` is a rules-valid board. `Partial` is a syntactically valid position that
/// lacks a king for at least one side; it is analysed on a best-effort basis.
#[derive(Debug, Clone)]
pub enum Position {
    Full(Board),
    Partial(Sketch),
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let fen = fen.trim();

        let strict = match with_default_fields(fen).parse::<Board>() {
            Ok(board) => return Ok(Self::Full(board)),
            Err(err) => err,
        };

        let sketch = Sketch::from_fen(fen)?;
        if !sketch.is_missing_king() {
            return Err(PositionError::malformed(fen, strict.to_string()));
        }

        warn!("Position is missing a king, analysing partial board: {}", fen);
        Ok(Self::Partial(sketch))
    }

    /// The rules-valid board, if this position has one.
    pub fn board(&self) -> Option<&Board> {
        match self {
            Self::Full(board) => Some(board),
            Self::Partial(_) => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Full(_))
    }
}

/// Completes a FEN missing its trailing fields with `- - 0 1`, the same defaults
/// the permissive parser uses.
fn with_default_fields(fen: &str) -> String {
    const DEFAULTS: [&str; 4] = ["-", "-", "0", "1"];

    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 2 || fields.len() >= 6 {
        return fen.to_string();
    }
    fields
        .iter()
        .copied()
        .chain(DEFAULTS[fields.len() - 2..].iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for Position {
    fn default() -> Self {
        Self::Full(Board::default())
    }
}

impl From<Board> for Position {
    fn from(board: Board) -> Self {
        Self::Full(board)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}

impl BoardModel for Position {
    #[inline(always)]
    fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        match self {
            Self::Full(board) => board.piece_at(square),
            Self::Partial(sketch) => sketch.piece_at(square),
        }
    }

    #[inline(always)]
    fn colored_pieces(&self, color: Color, piece: Piece) -> BitBoard {
        match self {
            Self::Full(board) => BoardModel::colored_pieces(board, color, piece),
            Self::Partial(sketch) => sketch.colored_pieces(color, piece),
        }
    }

    #[inline(always)]
    fn colors(&self, color: Color) -> BitBoard {
        match self {
            Self::Full(board) => BoardModel::colors(board, color),
            Self::Partial(sketch) => sketch.colors(color),
        }
    }

    #[inline(always)]
    fn side_to_move(&self) -> Color {
        match self {
            Self::Full(board) => board.side_to_move(),
            Self::Partial(sketch) => sketch.side_to_move(),
        }
    }

    #[inline(always)]
    fn king(&self, color: Color) -> Option<Square> {
        match self {
            Self::Full(board) => BoardModel::king(board, color),
            Self::Partial(sketch) => sketch.king(color),
        }
    }

    fn has_kingside_castling_rights(&self, color: Color) -> bool {
        match self {
            Self::Full(board) => board.has_kingside_castling_rights(color),
            Self::Partial(sketch) => sketch.has_kingside_castling_rights(color),
        }
    }

    fn has_queenside_castling_rights(&self, color: Color) -> bool {
        match self {
            Self::Full(board) => board.has_queenside_castling_rights(color),
            Self::Partial(sketch) => sketch.has_queenside_castling_rights(color),
        }
    }

    fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        match self {
            Self::Full(board) => board.legal_moves_for(color),
            Self::Partial(sketch) => sketch.legal_moves_for(color),
        }
    }

    fn fen(&self) -> String {
        match self {
            Self::Full(board) => BoardModel::fen(board),
            Self::Partial(sketch) => sketch.fen(),
        }
    }
}
