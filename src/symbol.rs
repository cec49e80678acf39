use crate::{PlacedTile, Word};

/// One character of a move string, aligned to one [location](crate::Location) along the
/// direction of the play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symbol {
    /// A lowercase letter. Places a regular tile of that letter.
    Regular(char),
    /// An uppercase letter. Places an unplayed blank standing in for the lowercase letter.
    Blank(char),
    /// A space. Uses the tile already on the grid at this location.
    Existing,
    /// Any other character. No rack tile can ever satisfy it.
    Other(char),
}

impl Symbol {
    /// # Returns
    ///
    /// The symbol written as `character` in a move string.
    pub fn parse(character: char) -> Symbol {
        match character {
            ' ' => Symbol::Existing,
            'a'..='z' => Symbol::Regular(character),
            'A'..='Z' => Symbol::Blank(character.to_ascii_lowercase()),
            _ => Symbol::Other(character),
        }
    }

    /// # Returns
    ///
    /// Each character of `word` as a [symbol](Symbol).
    pub fn parse_word(word: &str) -> Word {
        word.chars().map(Symbol::parse).collect()
    }

    /// # Returns
    ///
    /// The tile this symbol places on the grid, or [None] if it places nothing.
    #[inline]
    pub fn placed_tile(self) -> Option<PlacedTile> {
        match self {
            Symbol::Regular(letter) => Some(PlacedTile::Letter(letter)),
            Symbol::Blank(letter) => Some(PlacedTile::Blank(letter)),
            Symbol::Existing | Symbol::Other(_) => None,
        }
    }
}
