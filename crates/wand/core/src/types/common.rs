use std::fmt;

use super::Direction;

/// Unique identifier for an actor (player) interacting with the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete lattice coordinate of a single world cell.
///
/// Identity is the coordinate itself; the world it belongs to is implied by
/// whichever collaborator the cell is passed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the neighbouring cell one step along `direction`.
    #[inline]
    pub fn relative(self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.offset();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_steps_one_cell() {
        let cell = Cell::new(4, 64, -2);
        assert_eq!(cell.relative(Direction::Up), Cell::new(4, 65, -2));
        assert_eq!(cell.relative(Direction::North), Cell::new(4, 64, -3));
        assert_eq!(cell.relative(Direction::East), Cell::new(5, 64, -2));
        assert_eq!(cell.relative(Direction::Up).relative(Direction::Down), cell);
    }
}
