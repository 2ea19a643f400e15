// ============================================================================
// Direction (face of a cell)
// ============================================================================

/// One of the six axis-aligned unit steps on the lattice.
///
/// Coordinate system: Y increases upward, X increases eastward, Z increases
/// southward.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Returns the offset (dx, dy, dz) for this direction.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Returns the four directions the fill may grow along when `self` is the
    /// clicked face.
    ///
    /// Growth stays in the plane perpendicular to the support axis; the order
    /// is fixed because it decides BFS discovery order.
    pub const fn expansion(self) -> [Direction; 4] {
        match self {
            Direction::Up | Direction::Down => [
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West,
            ],
            Direction::North | Direction::South => [
                Direction::Up,
                Direction::Down,
                Direction::East,
                Direction::West,
            ],
            Direction::East | Direction::West => [
                Direction::Up,
                Direction::Down,
                Direction::North,
                Direction::South,
            ],
        }
    }
}
