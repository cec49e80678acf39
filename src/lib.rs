//! Concrete structs to represent and protect the state of a two player crossword tile game
//! with methods to check, score, and apply each turn.
//!
//! ## Summary
//!
//! Two players take turns placing lettered [tiles](Tile) from their racks onto a square
//! [grid](Grid) so that every run of two or more adjacent [tiles](Tile) spells a word the
//! [lexicon](Lexicon) accepts. Each turn, the current player either
//! [plays](GameState::apply_play) a word or [exchanges](GameState::apply_exchange)
//! [tiles](Tile) with the bag. [Premium](Premium) squares multiply the value of a letter or of
//! a whole word the first time they are covered. The game ends when a player empties their rack
//! with the bag already empty, or after [two passes in a row](PASSES_TO_END). The player with
//! the most points wins.
//!
//! ## How is a play written?
//!
//! A play is a string of symbols laid out from a [location](Location) along a
//! [direction](Direction). Lowercase letters place regular [tiles](Tile), uppercase letters
//! place blanks standing in for that letter, and spaces reuse [tiles](Tile) already on the
//! [grid](Grid). See [Symbol].
//!
//! ## When is a play legal?
//!
//! [verify_legality] checks, in order, that the play:
//!
//! * has at least [two symbols](MIN_WORD_LEN),
//! * can be [drawn from the rack](can_be_drawn_from_rack),
//! * [fits on the grid](can_be_placed_on_grid) with spaces exactly over occupied squares,
//! * [touches the center or an existing tile](would_be_connected),
//! * [creates only words in the lexicon](would_create_only_legal_words).
//!
//! The first failing check is reported as a [LegalityError].
//!
//! ## How are points calculated?
//!
//! [score](fn@score) adds the main word and every perpendicular word formed by a newly placed
//! [tile](Tile). Only new [tiles](Tile) on uncovered premium squares earn premiums. Playing a
//! whole rack earns an extra [bingo bonus](BINGO_BONUS). When the game ends, each player
//! loses the value of their remaining [tiles](Tile), and a player who went out gains the value
//! of every other rack.
//!
//! ## How is the game viewed?
//!
//! [GameState::view] shares the properties visible to all players. A [GateKeeper] adds the
//! private rack of one player and lets them probe legality and scoring without changing
//! anything.
//!
//! ## How is the game run?
//!
//! [run] drives any [Player] implementations through a game, reporting rejected
//! [moves](Move) back to the player and [sending updates](send_updates) after every turn.
//! [Incrementalist] is a simple automated [Player].
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to get mutable references to the properties of
//! [GameState] and helper methods to add random data to specific properties.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use consts::*;
pub use error::*;
pub use extract::*;
pub use game_state::*;
pub use grid::*;
pub use incrementalist::*;
pub use lexicon::*;
pub use location::*;
pub use moves::*;
pub use placement::*;
pub use rack::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use score::*;
pub use symbol::*;
pub use tile::*;
pub use types::*;

mod consts;
mod error;
mod extract;
mod game_state;
mod grid;
mod incrementalist;
mod lexicon;
mod location;
mod moves;
mod placement;
mod rack;
#[cfg(test)]
mod random;
mod runtime;
mod score;
mod symbol;
mod tile;
mod types;
