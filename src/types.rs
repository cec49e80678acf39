use crate::{RunSquare, Symbol, Tile, PLAYERS, RACK_LEN, WORD_CAPACITY};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// An ordered set of indexes of [tiles](Tile) in the current player's rack to be exchanged.
/// Indexes at or beyond the length of the rack are ignored.
///
/// # See Also
///
/// * [GameState::apply_exchange](crate::GameState::apply_exchange)
/// * [Move::Exchange](crate::Move::Exchange)
pub type Exchanges = BTreeSet<usize>;

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet. Tiles are drawn from
/// the end.
///
/// # See Also
///
/// * [Tile]
/// * [deal](crate::deal)
/// * [GameState](crate::GameState)
pub type Bag = Vec<Tile>;
/// A vector of [tiles](Tile) held by one player.
///
/// # See Also
///
/// * [Tile]
/// * [RACK_LEN]
/// * [Racks]
/// * [GameState::rack_of](crate::GameState::rack_of)
pub type Rack = SmallVec<[Tile; RACK_LEN]>;
/// A rack for each player.
///
/// # See Also
///
/// * [Rack]
/// * [PLAYERS]
pub type Racks = [Rack; PLAYERS];
/// The score of each player. Scores are signed since unplayed tiles are deducted at the end.
///
/// # See Also
///
/// * [PLAYERS]
/// * [GameState::score_of](crate::GameState::score_of)
pub type Scores = [i32; PLAYERS];
/// The number of [tiles](Tile) in each player's rack.
///
/// # See Also
///
/// * [GameView](crate::GameView)
pub type RackLens = [usize; PLAYERS];
/// The parsed [symbols](Symbol) of a move string.
///
/// # See Also
///
/// * [Symbol::parse_word]
/// * [WORD_CAPACITY]
pub type Word = SmallVec<[Symbol; WORD_CAPACITY]>;
/// The contiguous [squares](RunSquare) of one word as it would read after a play.
///
/// # See Also
///
/// * [find_main_word](crate::find_main_word)
/// * [find_cross_word](crate::find_cross_word)
/// * [WORD_CAPACITY]
pub type Run = SmallVec<[RunSquare; WORD_CAPACITY]>;
