use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// The number of letters in the alphabet. `26` letters from `a` to `z`.
pub const LETTERS_LEN: usize = 26;
/// The number of unplayed blanks in a full bag. `2` blanks.
pub const BLANKS_LEN: usize = 2;
/// The number of copies of each letter in a full bag, in alphabetical order.
pub const LETTER_COUNTS: [usize; LETTERS_LEN] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];
/// The standard point value of each letter, in alphabetical order.
pub const STANDARD_VALUES: [u32; LETTERS_LEN] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];
/// The number of [tiles](Tile) in a full bag. `100` tiles from `98` letters and `2` blanks.
pub const TILES_LEN: usize = sum_letter_counts() + BLANKS_LEN;

const fn sum_letter_counts() -> usize {
    let mut sum = 0;
    let mut index = 0;
    while index < LETTERS_LEN {
        sum += LETTER_COUNTS[index];
        index += 1;
    }
    sum
}

/// Describes a tile held in a rack or left in the bag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Tile {
    /// A regular tile showing a lowercase letter.
    Letter(char),
    /// An unplayed blank which may stand for any letter.
    Blank,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Letter(letter) => write!(f, "{letter}"),
            Tile::Blank => write!(f, "_"),
        }
    }
}

/// Describes a tile once it has been placed on the [grid](crate::Grid). A placed blank
/// remembers the letter chosen for it but is worth nothing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlacedTile {
    /// A regular tile showing a lowercase letter.
    Letter(char),
    /// A played blank standing in for a lowercase letter.
    Blank(char),
}

impl PlacedTile {
    /// # Returns
    ///
    /// The lowercase letter shown by the tile, whether regular or a played blank.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            PlacedTile::Letter(letter) | PlacedTile::Blank(letter) => letter,
        }
    }
}

impl fmt::Display for PlacedTile {
    /// Regular tiles print lowercase and played blanks print uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacedTile::Letter(letter) => write!(f, "{letter}"),
            PlacedTile::Blank(letter) => write!(f, "{}", letter.to_ascii_uppercase()),
        }
    }
}

/// # Returns
///
/// A vector of all [tiles](Tile) in a full bag in alphabetical order followed by the blanks.
pub fn tiles() -> Vec<Tile> {
    ('a'..='z')
        .zip(LETTER_COUNTS)
        .flat_map(|(letter, count)| std::iter::repeat(Tile::Letter(letter)).take(count))
        .chain(std::iter::repeat(Tile::Blank).take(BLANKS_LEN))
        .collect()
}

/// Associates letters with their point values. Blanks, whether unplayed or played, are
/// always worth `0`.
///
/// Constructed once before any game and handed to [GameState](crate::GameState).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TileValues {
    values: [u32; LETTERS_LEN],
}

impl TileValues {
    /// # Arguments
    ///
    /// * `values`: The point value of each letter in alphabetical order.
    #[inline]
    pub fn new(values: [u32; LETTERS_LEN]) -> TileValues {
        TileValues { values }
    }

    /// # Returns
    ///
    /// The point value of a lowercase `letter`, or `0` for anything else.
    pub fn value_of(&self, letter: char) -> u32 {
        if letter.is_ascii_lowercase() {
            self.values[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// # Returns
    ///
    /// The point value of a [tile](Tile) in a rack or the bag.
    pub fn tile_value(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Letter(letter) => self.value_of(letter),
            Tile::Blank => 0,
        }
    }

    /// # Returns
    ///
    /// The point value of a [tile](PlacedTile) on the grid.
    pub fn placed_value(&self, tile: PlacedTile) -> u32 {
        match tile {
            PlacedTile::Letter(letter) => self.value_of(letter),
            PlacedTile::Blank(_) => 0,
        }
    }
}

impl Default for TileValues {
    /// The standard English values from `1` to `10`.
    fn default() -> TileValues {
        TileValues::new(STANDARD_VALUES)
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let index = rng.gen_range(0..=LETTERS_LEN);
        if index == LETTERS_LEN {
            Tile::Blank
        } else {
            Tile::Letter((b'a' + index as u8) as char)
        }
    }
}
