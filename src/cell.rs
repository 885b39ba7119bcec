//! Packed cell storage and neighbor addressing.
//!
//! Each cell is a single byte: bit 0 holds the alive flag, bits 1..=4 hold
//! the live-neighbor count. The count field is 4 bits wide because a cell on
//! a torus can see up to 8 live neighbors (all 8 direction visits can land on
//! live cells, and on degenerate grids several visits can land on the same
//! cell).

const ALIVE_BIT: u8 = 0b0000_0001;
const COUNT_SHIFT: u8 = 1;
const COUNT_MASK: u8 = 0b0001_1110;

/// Maximum value the neighbor-count field can hold.
///
/// Activating one cell distributes exactly 8 increments over the grid, and
/// for a fixed direction each cell has exactly one preimage, so no cell ever
/// accumulates more than 8 even when directions alias on tiny grids.
pub const MAX_NEIGHBORS: u8 = 8;

/// One grid cell: alive flag plus cached live-neighbor count, packed into a
/// byte for cache density.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedCell(u8);

impl PackedCell {
    pub const DEAD: PackedCell = PackedCell(0);

    #[inline]
    pub fn is_alive(self) -> bool {
        self.0 & ALIVE_BIT != 0
    }

    #[inline]
    pub fn neighbor_count(self) -> u8 {
        (self.0 & COUNT_MASK) >> COUNT_SHIFT
    }

    #[inline]
    pub fn set_alive(self) -> Self {
        Self(self.0 | ALIVE_BIT)
    }

    #[inline]
    pub fn set_dead(self) -> Self {
        Self(self.0 & !ALIVE_BIT)
    }

    #[inline]
    pub fn with_neighbor_count(self, count: u8) -> Self {
        debug_assert!(count <= MAX_NEIGHBORS);
        Self((self.0 & !COUNT_MASK) | ((count << COUNT_SHIFT) & COUNT_MASK))
    }

    /// Dead with no live neighbors: the cell cannot change state this
    /// generation, so steppers skip it.
    #[inline]
    pub fn is_untouched(self) -> bool {
        self.0 == 0
    }
}

/// The 8 cardinal and intercardinal directions for neighbor addressing.
///
/// Row offsets grow downward, column offsets grow rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0, // (row-1, col)
    South = 1, // (row+1, col)
    West  = 2, // (row, col-1)
    East  = 3, // (row, col+1)
    NW    = 4, // (row-1, col-1)
    NE    = 5, // (row-1, col+1)
    SW    = 6, // (row+1, col-1)
    SE    = 7, // (row+1, col+1)
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North, Direction::South,
        Direction::West,  Direction::East,
        Direction::NW,    Direction::NE,
        Direction::SW,    Direction::SE,
    ];

    /// The `(Δrow, Δcol)` offset for this direction.
    #[inline]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West  => (0, -1),
            Direction::East  => (0, 1),
            Direction::NW    => (-1, -1),
            Direction::NE    => (-1, 1),
            Direction::SW    => (1, -1),
            Direction::SE    => (1, 1),
        }
    }

    /// The reverse direction.
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
            Direction::East  => Direction::West,
            Direction::NW    => Direction::SE,
            Direction::NE    => Direction::SW,
            Direction::SW    => Direction::NE,
            Direction::SE    => Direction::NW,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_round_trip() {
        let cell = PackedCell::DEAD.set_alive().with_neighbor_count(8);
        assert!(cell.is_alive());
        assert_eq!(cell.neighbor_count(), 8);

        let cell = cell.set_dead().with_neighbor_count(3);
        assert!(!cell.is_alive());
        assert_eq!(cell.neighbor_count(), 3);
    }

    #[test]
    fn count_field_does_not_clobber_alive_bit() {
        for count in 0..=MAX_NEIGHBORS {
            assert!(PackedCell::DEAD.set_alive().with_neighbor_count(count).is_alive());
            assert!(!PackedCell::DEAD.with_neighbor_count(count).is_alive());
        }
    }

    #[test]
    fn all_is_ordered_by_index() {
        for (slot, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), slot);
        }
    }

    #[test]
    fn offsets_pair_with_reverses() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let (rr, rc) = dir.reverse().offset();
            assert_eq!((dr, dc), (-rr, -rc));
        }
    }
}
