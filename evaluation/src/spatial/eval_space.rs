use std::cmp::Ordering;

use cozy_chess::{Color, File, Rank, Square};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use utils::BoardModel;

use super::context::EvalContext;
use crate::serialize::round2;

/// Owner of a square, decided purely by attacker counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareControl {
    WhiteControl,
    BlackControl,
    Contested,
    Neutral,
}

impl SquareControl {
    pub fn classify(white_attackers: u8, black_attackers: u8) -> Self {
        match white_attackers.cmp(&black_attackers) {
            Ordering::Greater => Self::WhiteControl,
            Ordering::Less => Self::BlackControl,
            Ordering::Equal if white_attackers > 0 => Self::Contested,
            Ordering::Equal => Self::Neutral,
        }
    }
}

/// Per-square values laid out by rank then file; row 0 is rank 1.
pub type SquareGrid<T> = [[T; 8]; 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ControlMatrix(SquareGrid<SquareControl>);

impl ControlMatrix {
    #[inline(always)]
    pub fn get(&self, square: Square) -> SquareControl {
        self.0[square.rank() as usize][square.file() as usize]
    }

    pub fn rows(&self) -> &SquareGrid<SquareControl> {
        &self.0
    }
}

/// Square counts per control class. Always sums to 64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Territory {
    pub white: u8,
    pub black: u8,
    pub contested: u8,
    pub neutral: u8,
}

impl Territory {
    fn record(&mut self, control: SquareControl) {
        match control {
            SquareControl::WhiteControl => self.white += 1,
            SquareControl::BlackControl => self.black += 1,
            SquareControl::Contested => self.contested += 1,
            SquareControl::Neutral => self.neutral += 1,
        }
    }

    /// Squares White controls minus squares Black controls.
    #[inline(always)]
    pub fn space_advantage(&self) -> i32 {
        self.white as i32 - self.black as i32
    }

    /// Signed space advantage from `color`'s point of view.
    #[inline(always)]
    pub fn space_advantage_for(&self, color: Color) -> i32 {
        match color {
            Color::White => self.space_advantage(),
            Color::Black => -self.space_advantage(),
        }
    }

    // A square is 1/64 of the board, so these are exact in binary floating point.
    pub fn white_space_percentage(&self) -> f64 {
        percentage(self.white)
    }

    pub fn black_space_percentage(&self) -> f64 {
        percentage(self.black)
    }

    pub fn contested_percentage(&self) -> f64 {
        percentage(self.contested)
    }

    pub fn neutral_percentage(&self) -> f64 {
        percentage(self.neutral)
    }
}

#[inline(always)]
fn percentage(squares: u8) -> f64 {
    squares as f64 * 100.0 / Square::NUM as f64
}

impl Serialize for Territory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Territory", 9)?;
        state.serialize_field("white_controlled", &self.white)?;
        state.serialize_field("black_controlled", &self.black)?;
        state.serialize_field("contested_squares", &self.contested)?;
        state.serialize_field("neutral_squares", &self.neutral)?;
        state.serialize_field("white_space_percentage", &round2(self.white_space_percentage()))?;
        state.serialize_field("black_space_percentage", &round2(self.black_space_percentage()))?;
        state.serialize_field("contested_percentage", &round2(self.contested_percentage()))?;
        state.serialize_field("neutral_percentage", &round2(self.neutral_percentage()))?;
        state.serialize_field("space_advantage", &self.space_advantage())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceControl {
    #[serde(rename = "control_matrix")]
    pub matrix: ControlMatrix,
    pub white_attacks: SquareGrid<u8>,
    pub black_attacks: SquareGrid<u8>,
    #[serde(flatten)]
    pub territory: Territory,
}

impl SpaceControl {
    #[inline(always)]
    pub fn space_advantage(&self) -> i32 {
        self.territory.space_advantage()
    }
}

pub(super) fn evaluate<B: BoardModel + ?Sized>(ctx: &EvalContext<B>) -> SpaceControl {
    let mut matrix = [[SquareControl::Neutral; 8]; 8];
    let mut white_attacks = [[0u8; 8]; 8];
    let mut black_attacks = [[0u8; 8]; 8];
    let mut territory = Territory::default();

    for rank in Rank::ALL {
        for file in File::ALL {
            let square = Square::new(file, rank);
            let white = ctx.attackers_on(Color::White, square);
            let black = ctx.attackers_on(Color::Black, square);
            let control = SquareControl::classify(white, black);

            let (row, col) = (rank as usize, file as usize);
            matrix[row][col] = control;
            white_attacks[row][col] = white;
            black_attacks[row][col] = black;
            territory.record(control);
        }
    }

    SpaceControl {
        matrix: ControlMatrix(matrix),
        white_attacks,
        black_attacks,
        territory,
    }
}
