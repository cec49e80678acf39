use crate::BOARD_WIDTH;
use std::fmt;

/// A row and column on the [grid](crate::Grid), `0`-based from the top left. Components may
/// step off the board; check [Location::is_on_board] before reading the grid.
///
/// # See Also
///
/// * [Direction]
/// * [CENTER](crate::CENTER)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Location {
    row: isize,
    column: isize,
}

/// The axis a word is played along.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Direction {
    /// Both directions, horizontal first.
    pub const DIRECTIONS: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// # Returns
    ///
    /// The other direction. Cross words are read along the perpendicular of a play.
    #[inline]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// # Returns
    ///
    /// The row and column offsets of one step in this direction.
    #[inline]
    fn offsets(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }
}

impl Location {
    /// # Arguments
    ///
    /// * `row`: The row, `0` at the top.
    /// * `column`: The column, `0` at the left.
    #[inline]
    pub const fn new(row: isize, column: isize) -> Location {
        Location { row, column }
    }

    /// The row, `0` at the top.
    #[inline]
    pub fn row(self) -> isize {
        self.row
    }

    /// The column, `0` at the left.
    #[inline]
    pub fn column(self) -> isize {
        self.column
    }

    /// # Returns
    ///
    /// The location one step forward in `direction`. For example,
    /// `location.neighbor(Direction::Horizontal)` is the location to the right.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> Location {
        let (rows, columns) = direction.offsets();
        Location::new(self.row + rows, self.column + columns)
    }

    /// # Returns
    ///
    /// The location one step backward in `direction`. For example,
    /// `location.antineighbor(Direction::Horizontal)` is the location to the left.
    #[inline]
    pub fn antineighbor(self, direction: Direction) -> Location {
        let (rows, columns) = direction.offsets();
        Location::new(self.row - rows, self.column - columns)
    }

    /// # Returns
    ///
    /// Whether both components lie in `0..`[BOARD_WIDTH].
    #[inline]
    pub fn is_on_board(self) -> bool {
        let width = BOARD_WIDTH as isize;
        (0..width).contains(&self.row) && (0..width).contains(&self.column)
    }

    /// # Returns
    ///
    /// An [iterator](Iterator) of consecutive locations starting here and stepping in
    /// `direction`, without end.
    pub fn walk(self, direction: Direction) -> impl Iterator<Item = Location> {
        std::iter::successors(Some(self), move |location| {
            Some(location.neighbor(direction))
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
