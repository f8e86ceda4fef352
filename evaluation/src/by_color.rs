use std::ops::{Index, IndexMut};

use cozy_chess::Color;
use serde::Serialize;

/// One value per side, serialized as `{"white": .., "black": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ByColor<T> {
    pub white: T,
    pub black: T,
}

impl<T> ByColor<T> {
    pub fn from_fn(mut f: impl FnMut(Color) -> T) -> Self {
        Self {
            white: f(Color::White),
            black: f(Color::Black),
        }
    }
}

impl<T: Copy + Into<i32>> ByColor<T> {
    /// White minus Black.
    #[inline(always)]
    pub fn advantage(&self) -> i32 {
        self.white.into() - self.black.into()
    }

    /// Signed difference from `color`'s point of view.
    #[inline(always)]
    pub fn advantage_for(&self, color: Color) -> i32 {
        match color {
            Color::White => self.advantage(),
            Color::Black => -self.advantage(),
        }
    }
}

impl<T> Index<Color> for ByColor<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, color: Color) -> &T {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

impl<T> IndexMut<Color> for ByColor<T> {
    #[inline(always)]
    fn index_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}
