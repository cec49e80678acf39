use crate::PLAYERS;
use thiserror::Error;

/// Describes the reason why a play could not be executed. The checks of
/// [verify_legality](crate::verify_legality) run in the order of the variants below and stop
/// at the first failure. A failed play never changes the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum LegalityError {
    /// Attempting to play fewer than [MIN_WORD_LEN](crate::MIN_WORD_LEN) symbols.
    #[error("Word must be at least two letters long.")]
    TooShort,
    /// Attempting to play tiles not in the player's rack.
    #[error("Rack does not contain sufficient tiles to play word.")]
    InsufficientTiles,
    /// Attempting to overlap a tile, leave a gap, abut a tile before or after the word,
    /// or run off the edge of the board.
    #[error("Board placement incorrect (gaps, overlapping tiles, edge of board).")]
    BadPlacement,
    /// Attempting to play a word touching neither a tile on the grid nor the center.
    #[error("Word is not connected to any tile on the board or the center.")]
    NotConnected,
    /// Attempting to form a word, or a cross word, missing from the lexicon.
    #[error("Invalid word created.")]
    InvalidWord,
    /// Attempting to move after the game has ended.
    #[error("The game has already ended.")]
    HasEnded,
}

/// Describes the reason why [GameState](crate::GameState) could not be created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewError {
    /// Attempting to start with a first player that does not exist.
    #[error("First player {first_player} is not one of the {} players.", PLAYERS)]
    FirstPlayerOutOfBounds {
        /// The index of the requested first player.
        first_player: usize,
    },
}
