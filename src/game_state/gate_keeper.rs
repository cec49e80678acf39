use crate::{
    score, verify_legality, Direction, GameState, GameView, LegalityError, Lexicon, Location,
    Rack, Square,
};
use std::fmt;

/// The narrow window through which one player looks at a [GameState] when choosing a move.
/// Offers read-only queries and the legality and scoring probes, checked against this
/// player's own rack. Never exposes the other racks, the order of the bag, or anything
/// mutable.
#[derive(Debug)]
pub struct GateKeeper<'a, L> {
    game_state: &'a GameState<L>,
    player: usize,
}

impl<L> GameState<L> {
    /// # Returns
    ///
    /// A [GateKeeper] for `player`, or [None] if out of bounds.
    pub fn gate_keeper(&self, player: usize) -> Option<GateKeeper<'_, L>> {
        (player < self.racks.len()).then_some(GateKeeper {
            game_state: self,
            player,
        })
    }

    /// # Returns
    ///
    /// A [GateKeeper] for the player whose turn it is.
    pub fn current_gate_keeper(&self) -> GateKeeper<'_, L> {
        GateKeeper {
            game_state: self,
            player: self.current_player,
        }
    }
}

impl<L> GateKeeper<'_, L> {
    /// The index of the player this gate keeper serves.
    #[inline]
    pub fn player(&self) -> usize {
        self.player
    }

    /// # Returns
    ///
    /// The [square](Square) at `location`, or [None] if `location` is off the board.
    pub fn square(&self, location: Location) -> Option<Square> {
        self.game_state.current_square(location)
    }

    /// # Returns
    ///
    /// A copy of this player's rack.
    pub fn rack(&self) -> Rack {
        self.game_state.racks[self.player].clone()
    }

    /// # Returns
    ///
    /// The points `word` would earn at `location` along `direction`. Assumes, but does not
    /// verify, that the play is legal.
    pub fn score(&self, word: &str, location: Location, direction: Direction) -> u32 {
        score(
            &self.game_state.grid,
            &self.game_state.tile_values,
            word,
            location,
            direction,
        )
    }

    /// # Returns
    ///
    /// The public [view](GameView) of the game.
    pub fn view(&self) -> GameView<'_> {
        self.game_state.view()
    }
}

impl<L: Lexicon> GateKeeper<'_, L> {
    /// Checks whether this player may play `word` at `location` along `direction`, whether
    /// or not it is their turn. Never changes anything.
    ///
    /// # Errors
    ///
    /// Same as [verify_legality].
    pub fn verify_legality(
        &self,
        word: &str,
        location: Location,
        direction: Direction,
    ) -> Result<(), LegalityError> {
        verify_legality(
            &self.game_state.grid,
            &self.game_state.lexicon,
            word,
            location,
            direction,
            &self.game_state.racks[self.player],
        )
    }
}

impl<L> fmt::Display for GateKeeper<'_, L> {
    /// The [grid](crate::Grid), one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.game_state)
    }
}
