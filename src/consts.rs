use crate::Location;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and columns on the [grid](crate::Grid). `15` squares per side.
///
/// # See Also
///
/// * [Location::is_on_board]
/// * [LAYOUT]
pub const BOARD_WIDTH: usize = 15;
/// The square every opening play must cover. Row `7`, column `7`.
///
/// # See Also
///
/// * [would_be_connected](crate::would_be_connected)
pub const CENTER: Location = Location::new(7, 7);
/// The number of players in the game. `2` players.
pub const PLAYERS: usize = 2;
/// The number of [tiles](crate::Tile) a rack is refilled to after every turn. `7` tiles.
///
/// # See Also
///
/// * [BINGO_BONUS]
/// * [deal](crate::deal)
pub const RACK_LEN: usize = 7;
/// The amount of extra points given when a single play places all [RACK_LEN]
/// [tiles](crate::Tile). `50` additional points.
///
/// # See Also
///
/// * [score](fn@crate::score)
pub const BINGO_BONUS: u32 = 50;
/// The number of consecutive exchanges which end the game. `2` exchanges.
///
/// # See Also
///
/// * [GameState::apply_exchange](crate::GameState::apply_exchange)
pub const PASSES_TO_END: usize = 2;
/// The minimum number of symbols in a played word. `2` symbols.
///
/// # See Also
///
/// * [LegalityError::TooShort](crate::LegalityError::TooShort)
pub const MIN_WORD_LEN: usize = 2;
/// All small, dynamically allocated structs which store the squares of a word will be stored
/// on the stack until the word becomes longer than `WORD_CAPACITY`. If the environment variable
/// named `WORD_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to [BOARD_WIDTH], the
/// longest word that fits on the [grid](crate::Grid).
///
/// # See Also
///
/// * [Word](crate::Word)
/// * [Run](crate::Run)
pub const WORD_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("WORD_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    BOARD_WIDTH
);
const _: () = assert!(WORD_CAPACITY > 0);
/// Initial layout of premium squares, one string per row. Each character is the symbol of a
/// [premium](crate::Premium) kind. Symmetric under a 180° rotation.
///
/// # See Also
///
/// * [Premium::from_symbol](crate::Premium::from_symbol)
/// * [Grid::new](crate::Grid::new)
pub const LAYOUT: [&str; BOARD_WIDTH] = [
    "#  -   #   -  #",
    " +   =   =   + ",
    "  +   - -   +  ",
    "-  +   -   +  -",
    "    +     +    ",
    " =   =   =   = ",
    "  -   - -   -  ",
    "#  -   +   -  #",
    "  -   - -   -  ",
    " =   =   =   = ",
    "    +     +    ",
    "-  +   -   +  -",
    "  +   - -   +  ",
    " +   =   =   + ",
    "#  -   #   -  #",
];
