use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, BitBoard,
    Color, Piece, Square,
};

use crate::BoardModel;

/// Squares attacked by `piece` of `color` standing on `square`.
///
/// Sliders stop at the first occupant in `occupied` (which they still attack).
/// Pawns attack both forward diagonals whether or not anything stands there.
#[inline(always)]
pub fn piece_attacks(piece: Piece, color: Color, square: Square, occupied: BitBoard) -> BitBoard {
    match piece {
        Piece::Pawn => get_pawn_attacks(square, color),
        Piece::Knight => get_knight_moves(square),
        Piece::Bishop => get_bishop_moves(square, occupied),
        Piece::Rook => get_rook_moves(square, occupied),
        Piece::Queen => get_bishop_moves(square, occupied) | get_rook_moves(square, occupied),
        Piece::King => get_king_moves(square),
    }
}

/// Pieces of `color` that attack `square`, kings included.
///
/// Works backwards from the target: a piece attacks `square` exactly when the same
/// piece type placed on `square` would attack it (pawns use the opposite color).
pub fn attackers_of<B: BoardModel + ?Sized>(board: &B, color: Color, square: Square) -> BitBoard {
    let occupied = board.occupied();
    let queens = board.colored_pieces(color, Piece::Queen);

    let diagonal = board.colored_pieces(color, Piece::Bishop) | queens;
    let orthogonal = board.colored_pieces(color, Piece::Rook) | queens;

    (get_pawn_attacks(square, !color) & board.colored_pieces(color, Piece::Pawn))
        | (get_knight_moves(square) & board.colored_pieces(color, Piece::Knight))
        | (get_bishop_moves(square, occupied) & diagonal)
        | (get_rook_moves(square, occupied) & orthogonal)
        | (get_king_moves(square) & board.colored_pieces(color, Piece::King))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;

    #[test]
    fn test_pawn_attacks_ignore_occupancy() {
        let attacks = piece_attacks(Piece::Pawn, Color::White, Square::E2, BitBoard::EMPTY);
        assert_eq!(attacks, Square::D3.bitboard() | Square::F3.bitboard());

        let attacks = piece_attacks(Piece::Pawn, Color::Black, Square::A7, BitBoard::EMPTY);
        assert_eq!(attacks, Square::B6.bitboard());
    }

    #[test]
    fn test_sliders_stop_at_first_blocker() {
        let board: Board = "4k3/8/8/8/8/8/4P3/4R1K1 w - - 0 1".parse().unwrap();
        let attacks = piece_attacks(Piece::Rook, Color::White, Square::E1, board.occupied());

        assert!(attacks.has(Square::E2));
        assert!(!attacks.has(Square::E3));
        assert!(attacks.has(Square::G1));
        assert!(!attacks.has(Square::H1));
    }

    #[test]
    fn test_attackers_of_center_square() {
        // e4 is hit by the d3 pawn, the c3 knight and the a8 queen along the diagonal
        let board: Board = "q3k3/8/8/8/8/2NP4/8/4K3 w - - 0 1".parse().unwrap();

        let white = attackers_of(&board, Color::White, Square::E4);
        assert_eq!(white, Square::C3.bitboard() | Square::D3.bitboard());

        let black = attackers_of(&board, Color::Black, Square::E4);
        assert_eq!(black, Square::A8.bitboard());
    }

    #[test]
    fn test_kings_count_as_attackers() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(
            attackers_of(&board, Color::White, Square::D2),
            Square::E1.bitboard()
        );
    }
}
