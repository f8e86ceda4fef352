use cozy_chess::{get_pawn_attacks, util::parse_uci_move, BitBoard, Board, Color, Move, Piece, Rank, Square};

use crate::attacks::piece_attacks;
use crate::squares::{back_rank, forward, offset};
use crate::BoardModel;

const PROMOTIONS: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Collect all legal moves of the side to move into a Vec.
#[inline(always)]
pub fn collect_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    board.generate_moves(|batch| {
        moves.extend(batch);
        false
    });
    moves
}

/// Moves for `color` that obey piece movement but ignore king safety and castling.
///
/// Used where full legality is undefined: boards missing a king, or counterfactual
/// turns that would leave the opponent's king capturable. Promotions expand to
/// four moves, matching legal move generation.
pub fn pseudo_legal_moves<B: BoardModel + ?Sized>(board: &B, color: Color) -> Vec<Move> {
    let own = board.colors(color);
    let enemy = board.colors(!color);
    let occupied = own | enemy;
    let last_rank = back_rank(!color);

    let mut moves = Vec::new();
    for piece in Piece::ALL {
        for from in board.colored_pieces(color, piece) {
            let targets = match piece {
                Piece::Pawn => pawn_targets(from, color, occupied, enemy),
                _ => piece_attacks(piece, color, from, occupied) & !own,
            };

            for to in targets {
                if piece == Piece::Pawn && to.rank() == last_rank {
                    moves.extend(PROMOTIONS.iter().map(|&promotion| Move {
                        from,
                        to,
                        promotion: Some(promotion),
                    }));
                } else {
                    moves.push(Move {
                        from,
                        to,
                        promotion: None,
                    });
                }
            }
        }
    }
    moves
}

/// Number of moves starting on each square.
pub fn mobility_by_square(moves: &[Move]) -> [u8; Square::NUM] {
    let mut mobility = [0u8; Square::NUM];
    for mv in moves {
        mobility[mv.from as usize] += 1;
    }
    mobility
}

/// Parse a UCI move and play it on a copy of `board`.
///
/// Returns `None` for unparsable or illegal moves. Standard castling notation
/// (`e1g1`) is accepted.
pub fn play_uci(board: &Board, uci: &str) -> Option<(Move, Board)> {
    let mv = parse_uci_move(board, uci).ok()?;
    if !board.is_legal(mv) {
        return None;
    }
    let mut next = board.clone();
    next.play_unchecked(mv);
    Some((mv, next))
}

fn pawn_targets(from: Square, color: Color, occupied: BitBoard, enemy: BitBoard) -> BitBoard {
    let mut targets = get_pawn_attacks(from, color) & enemy;
    let step = forward(color);
    let home_rank = match color {
        Color::White => Rank::Second,
        Color::Black => Rank::Seventh,
    };

    if let Some(single) = offset(from, 0, step).filter(|sq| !occupied.has(*sq)) {
        targets |= single.bitboard();
        if from.rank() == home_rank {
            if let Some(double) = offset(single, 0, step).filter(|sq| !occupied.has(*sq)) {
                targets |= double.bitboard();
            }
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_legal_matches_legal_in_quiet_position() {
        let board = Board::default();
        let legal = collect_legal_moves(&board);
        let pseudo = pseudo_legal_moves(&board, Color::White);
        assert_eq!(legal.len(), pseudo.len());
        assert_eq!(pseudo_legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn test_pseudo_legal_promotions_expand() {
        let board: Board = "3rk3/2P5/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = pseudo_legal_moves(&board, Color::White);
        let pawn_moves = moves.iter().filter(|mv| mv.from == Square::C7).count();
        // push to c8 and capture on d8, four promotions each
        assert_eq!(pawn_moves, 8);
    }

    #[test]
    fn test_blocked_double_push() {
        let board: Board = "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1".parse().unwrap();
        let moves = pseudo_legal_moves(&board, Color::White);
        assert_eq!(moves.iter().filter(|mv| mv.from == Square::E2).count(), 0);
    }

    #[test]
    fn test_mobility_by_square() {
        let board = Board::default();
        let mobility = mobility_by_square(&collect_legal_moves(&board));
        assert_eq!(mobility[Square::G1 as usize], 2);
        assert_eq!(mobility[Square::E2 as usize], 2);
        assert_eq!(mobility[Square::D1 as usize], 0);
    }

    #[test]
    fn test_play_uci() {
        let board = Board::default();
        let (mv, next) = play_uci(&board, "e2e4").unwrap();
        assert_eq!(mv.from, Square::E2);
        assert_eq!(next.side_to_move(), Color::Black);
        assert!(play_uci(&board, "e2e5").is_none());
        assert!(play_uci(&board, "garbage").is_none());
    }
}
