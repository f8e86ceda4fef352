use cozy_chess::{Color, Piece};
use utils::BoardModel;

/// Classical piece values in pawns, indexed by `Piece`. The king counts as zero.
///
/// <https://www.chessprogramming.org/Point_Value>
pub const PIECE_VALUES: [u8; Piece::NUM] = [1, 3, 3, 5, 9, 0];

#[inline(always)]
pub fn piece_value(piece: Piece) -> u8 {
    PIECE_VALUES[piece as usize]
}

/// Sums the values of every piece `color` has on the board.
pub fn total_material<B: BoardModel + ?Sized>(board: &B, color: Color) -> i32 {
    Piece::ALL
        .iter()
        .map(|&piece| piece_value(piece) as i32 * board.colored_pieces(color, piece).len() as i32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;

    #[test]
    fn test_total_material_startpos() {
        let board = Board::default();
        assert_eq!(total_material(&board, Color::White), 39);
        assert_eq!(total_material(&board, Color::Black), 39);
    }

    #[test]
    fn test_king_is_worthless() {
        assert_eq!(piece_value(Piece::King), 0);
        assert_eq!(piece_value(Piece::Queen), 9);
    }
}
