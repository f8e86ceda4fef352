use cozy_chess::{Color, File, Rank, Square};

/// Square shifted by the given file and rank deltas, or `None` off the board.
#[inline(always)]
pub fn offset(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = square.file() as i8 + file_delta;
    let rank = square.rank() as i8 + rank_delta;
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }
    Some(Square::new(File::index(file as usize), Rank::index(rank as usize)))
}

/// +1 for White, -1 for Black: the rank step a pawn of `color` advances by.
#[inline(always)]
pub fn forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Rank where `color`'s pieces start.
#[inline(always)]
pub fn back_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::First,
        Color::Black => Rank::Eighth,
    }
}
