use crate::{Direction, Location, PlacedTile, Symbol, BOARD_WIDTH, LAYOUT};
use std::fmt;

/// Describes the bonus printed on an empty square. The bonus only counts on the turn a tile
/// is first placed on the square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Premium {
    /// `0`. No bonus, printed `' '`.
    None = 0,
    /// `1`. Doubles the value of the letter, printed `'-'`.
    DoubleLetter = 1,
    /// `2`. Triples the value of the letter, printed `'='`.
    TripleLetter = 2,
    /// `3`. Doubles the value of the word, printed `'+'`.
    DoubleWord = 3,
    /// `4`. Triples the value of the word, printed `'#'`.
    TripleWord = 4,
}

impl Premium {
    /// Every premium kind, from no bonus to the largest.
    pub const PREMIUMS: [Premium; 5] = [
        Premium::None,
        Premium::DoubleLetter,
        Premium::TripleLetter,
        Premium::DoubleWord,
        Premium::TripleWord,
    ];

    /// # Returns
    ///
    /// The premium printed as `symbol` in [LAYOUT], or [None] if `symbol` is not a premium.
    pub fn from_symbol(symbol: char) -> Option<Premium> {
        match symbol {
            ' ' => Some(Premium::None),
            '-' => Some(Premium::DoubleLetter),
            '=' => Some(Premium::TripleLetter),
            '+' => Some(Premium::DoubleWord),
            '#' => Some(Premium::TripleWord),
            _ => None,
        }
    }

    /// # Returns
    ///
    /// The printable symbol of this premium.
    pub fn symbol(self) -> char {
        match self {
            Premium::None => ' ',
            Premium::DoubleLetter => '-',
            Premium::TripleLetter => '=',
            Premium::DoubleWord => '+',
            Premium::TripleWord => '#',
        }
    }

    /// # Returns
    ///
    /// How many times the value of a newly placed letter counts on this square.
    #[inline]
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    /// # Returns
    ///
    /// How many times the value of a word counts when a new tile covers this square.
    #[inline]
    pub fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }
}

/// One cell of the [grid](Grid). Holds either the premium of an empty square or the tile
/// placed on it, never both.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Square {
    /// No tile has been placed here yet.
    Empty(Premium),
    /// A tile has been placed here and its premium is spent.
    Occupied(PlacedTile),
}

impl Square {
    /// # Returns
    ///
    /// The placed tile, or [None] if the square is empty.
    #[inline]
    pub fn tile(self) -> Option<PlacedTile> {
        match self {
            Square::Occupied(tile) => Some(tile),
            Square::Empty(_) => None,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty(premium) => write!(f, "{}", premium.symbol()),
            Square::Occupied(tile) => write!(f, "{tile}"),
        }
    }
}

/// The board of [BOARD_WIDTH] by [BOARD_WIDTH] [squares](Square).
///
/// The grid performs no bounds checking. Reading or writing a [location](Location) where
/// [Location::is_on_board] is false panics.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    squares: [[Square; BOARD_WIDTH]; BOARD_WIDTH],
}

impl Grid {
    /// # Returns
    ///
    /// An empty grid with premiums laid out as in [LAYOUT].
    pub fn new() -> Grid {
        let mut squares = [[Square::Empty(Premium::None); BOARD_WIDTH]; BOARD_WIDTH];
        for (row, line) in squares.iter_mut().zip(LAYOUT) {
            for (square, symbol) in row.iter_mut().zip(line.chars()) {
                *square = Square::Empty(Premium::from_symbol(symbol).unwrap_or(Premium::None));
            }
        }
        Grid { squares }
    }

    /// # Returns
    ///
    /// The [square](Square) at `location`.
    #[inline]
    pub fn read(&self, location: Location) -> Square {
        self.squares[location.row() as usize][location.column() as usize]
    }

    /// Places `tile` at `location`, hiding the premium underneath for good. Only called
    /// after the play has been validated.
    #[inline]
    pub fn write(&mut self, tile: PlacedTile, location: Location) {
        self.squares[location.row() as usize][location.column() as usize] =
            Square::Occupied(tile);
    }

    /// Writes the tile of every placing [symbol](Symbol) in `word`, stepping from `location`
    /// along `direction`. [Existing](Symbol::Existing) symbols leave their square alone.
    /// Assumes the play is legal.
    pub fn place_word(&mut self, word: &[Symbol], location: Location, direction: Direction) {
        for (symbol, square) in word.iter().zip(location.walk(direction)) {
            if let Some(tile) = symbol.placed_tile() {
                self.write(tile, square);
            }
        }
    }

    /// # Returns
    ///
    /// Whether the [square](Square) at `location` holds a tile.
    #[inline]
    pub fn is_occupied(&self, location: Location) -> bool {
        matches!(self.read(location), Square::Occupied(_))
    }

    /// # Returns
    ///
    /// Whether `location` is on the board and holds a tile.
    #[inline]
    pub fn is_occupied_on_board(&self, location: Location) -> bool {
        location.is_on_board() && self.is_occupied(location)
    }

    /// # Returns
    ///
    /// The number of tiles placed on the grid.
    pub fn occupied_len(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| matches!(square, Square::Occupied(_)))
            .count()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl fmt::Display for Grid {
    /// One line per row with one printable symbol per square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for square in row {
                write!(f, "{square}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
