//! Cell states
//!
//! One byte per cell so the whole grid can be handed to a renderer as a
//! `u8` buffer. New materials get the next free discriminant.

pub type CellId = u8;

pub const CELL_EMPTY: CellId = 0;
pub const CELL_SAND: CellId = 1;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty = CELL_EMPTY,
    Sand = CELL_SAND,
}

impl CellState {
    /// Raw byte as stored in the cell array
    #[inline]
    pub const fn id(self) -> CellId {
        self as CellId
    }

    /// Decode a raw byte; unknown ids yield `None`
    #[inline]
    pub const fn from_id(id: CellId) -> Option<Self> {
        match id {
            CELL_EMPTY => Some(CellState::Empty),
            CELL_SAND => Some(CellState::Sand),
            _ => None,
        }
    }

    /// Counts toward `Grid::occupied_count`
    #[inline]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, CellState::Empty)
    }
}
