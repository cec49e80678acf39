use crate::{Direction, Exchanges, GameState, LegalityError, Lexicon, Location};
use std::fmt;

/// A move chosen by a player on their turn.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    /// Places a word on the grid.
    Play {
        /// The move string. Lowercase letters place regular tiles, uppercase letters place
        /// blanks, and spaces reuse tiles already on the grid.
        word: String,
        /// The location of the first symbol.
        location: Location,
        /// The axis along which the symbols are laid out.
        direction: Direction,
    },
    /// Swaps the tiles at these rack indexes with tiles from the bag. No indexes is a pass.
    Exchange(Exchanges),
}

/// What an applied [move](Move) did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Effect {
    /// A word was played.
    Played {
        /// The points earned by the play.
        points: u32,
    },
    /// Tiles were exchanged.
    Exchanged {
        /// The number of tiles exchanged.
        tiles: usize,
    },
}

impl Move {
    /// # Returns
    ///
    /// A [Move::Play] of `word`.
    pub fn play(word: impl Into<String>, location: Location, direction: Direction) -> Move {
        Move::Play {
            word: word.into(),
            location,
            direction,
        }
    }

    /// Applies this move for the current player of `game_state`.
    ///
    /// # Errors
    ///
    /// * Any [LegalityError] from [GameState::apply_play] for a [Move::Play].
    /// * [LegalityError::HasEnded] for a [Move::Exchange] after the game has ended.
    ///
    /// # See Also
    ///
    /// * [GameState::apply_play]
    /// * [GameState::apply_exchange]
    pub fn apply<L: Lexicon>(
        &self,
        game_state: &mut GameState<L>,
    ) -> Result<Effect, LegalityError> {
        match self {
            Move::Play {
                word,
                location,
                direction,
            } => game_state
                .apply_play(word, *location, *direction)
                .map(|points| Effect::Played { points }),
            Move::Exchange(exchanges) => game_state
                .apply_exchange(exchanges)
                .map(|tiles| Effect::Exchanged { tiles }),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play {
                word,
                location,
                direction,
            } => write!(f, "play {word:?} at {location} {direction:?}"),
            Move::Exchange(exchanges) => write!(f, "exchange {exchanges:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rack_from, WordList, CENTER};
    use map_macro::btree_set;
    use tap::Tap;

    fn move_state() -> GameState<WordList> {
        let lexicon = ["horn"].into_iter().collect();
        GameState::empty_game_state(lexicon).tap_mut(|game_state| {
            *game_state.mut_racks() = [rack_from("hornabc"), rack_from("defghij")];
            game_state.mut_bag().extend(rack_from("klmnopq"));
        })
    }

    #[test]
    fn apply_play() {
        let mut game_state = move_state();

        let effect = Move::play("horn", CENTER, Direction::Horizontal).apply(&mut game_state);

        assert_eq!(Ok(Effect::Played { points: 14 }), effect);
        assert_eq!(1, game_state.current_player());
    }

    #[test]
    fn apply_illegal_play() {
        let mut game_state = move_state();

        let effect = Move::play("hron", CENTER, Direction::Horizontal).apply(&mut game_state);

        assert_eq!(Err(LegalityError::InvalidWord), effect);
        assert_eq!(0, game_state.current_player());
    }

    #[test]
    fn apply_exchange() {
        let mut game_state = move_state();

        let effect = Move::Exchange(btree_set! {0, 1}).apply(&mut game_state);

        assert_eq!(Ok(Effect::Exchanged { tiles: 2 }), effect);
        assert_eq!(1, game_state.current_player());
    }

    #[test]
    fn apply_after_game_over() {
        let mut game_state = move_state();
        *game_state.mut_is_over() = true;

        for chosen in [
            Move::play("horn", CENTER, Direction::Horizontal),
            Move::Exchange(Exchanges::new()),
        ] {
            assert_eq!(Err(LegalityError::HasEnded), chosen.apply(&mut game_state));
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            "play \"fa m\" at (5, 9) Vertical",
            Move::play("fa m", Location::new(5, 9), Direction::Vertical).to_string()
        );
        assert_eq!("exchange {0, 3}", Move::Exchange(btree_set! {3, 0}).to_string());
    }
}
