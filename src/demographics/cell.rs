use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the four race x education groups within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    WhiteCollege,
    WhiteNonCollege,
    NonWhiteCollege,
    NonWhiteNonCollege,
}

impl Cell {
    /// Short key used in column names and scenario files.
    pub fn to_str(&self) -> &'static str {
        match self {
            Cell::WhiteCollege => "wc",
            Cell::WhiteNonCollege => "wnc",
            Cell::NonWhiteCollege => "nwc",
            Cell::NonWhiteNonCollege => "nwnc",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::WhiteCollege => "White college",
            Cell::WhiteNonCollege => "White non-college",
            Cell::NonWhiteCollege => "Non-white college",
            Cell::NonWhiteNonCollege => "Non-white non-college",
        }
    }

    pub fn from_key(key: &str) -> Option<Cell> {
        Cell::order().into_iter().find(|cell| cell.to_str().eq_ignore_ascii_case(key.trim()))
    }

    pub fn order() -> [Cell; 4] {
        [
            Cell::WhiteCollege,
            Cell::WhiteNonCollege,
            Cell::NonWhiteCollege,
            Cell::NonWhiteNonCollege,
        ]
    }

    #[inline] pub fn is_white(&self) -> bool { matches!(self, Cell::WhiteCollege | Cell::WhiteNonCollege) }

    #[inline] pub fn is_college(&self) -> bool { matches!(self, Cell::WhiteCollege | Cell::NonWhiteCollege) }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per cell, keyed by the short cell names in serialized form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerCell<T> {
    pub wc: T,
    pub wnc: T,
    pub nwc: T,
    pub nwnc: T,
}

impl<T> PerCell<T> {
    /// Build by evaluating `f` for every cell.
    pub fn from_fn(mut f: impl FnMut(Cell) -> T) -> Self {
        Self {
            wc: f(Cell::WhiteCollege),
            wnc: f(Cell::WhiteNonCollege),
            nwc: f(Cell::NonWhiteCollege),
            nwnc: f(Cell::NonWhiteNonCollege),
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Cell, &T) -> U) -> PerCell<U> {
        PerCell::from_fn(|cell| f(cell, &self[cell]))
    }

    /// Iterate `(cell, value)` pairs in cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        Cell::order().into_iter().map(move |cell| (cell, &self[cell]))
    }
}

impl<T: Clone> PerCell<T> {
    pub fn splat(value: T) -> Self {
        Self { wc: value.clone(), wnc: value.clone(), nwc: value.clone(), nwnc: value }
    }
}

impl<T> Index<Cell> for PerCell<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        match cell {
            Cell::WhiteCollege => &self.wc,
            Cell::WhiteNonCollege => &self.wnc,
            Cell::NonWhiteCollege => &self.nwc,
            Cell::NonWhiteNonCollege => &self.nwnc,
        }
    }
}

impl<T> IndexMut<Cell> for PerCell<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        match cell {
            Cell::WhiteCollege => &mut self.wc,
            Cell::WhiteNonCollege => &mut self.wnc,
            Cell::NonWhiteCollege => &mut self.nwc,
            Cell::NonWhiteNonCollege => &mut self.nwnc,
        }
    }
}
