use crate::{
    deal, score, tiles, verify_legality, Bag, Direction, Grid, LegalityError, Lexicon, Location,
    NewError, Rack, Racks, Scores, Square, TileValues, PASSES_TO_END, PLAYERS, RACK_LEN,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use game_view::*;
pub use gate_keeper::*;

mod game_exchange;
mod game_play;
mod game_view;
mod gate_keeper;
#[cfg(test)]
mod test_setup;

/// Owns the whole state of one game and implements its turns. Created from [GameState::new].
///
/// The [lexicon](Lexicon) and [tile values](TileValues) are handed over at construction and
/// never change afterwards. Every shuffle of the bag draws from a [ChaCha8Rng] seeded at
/// construction, so equal seeds replay equal games.
#[derive(Debug)]
pub struct GameState<L> {
    /// The set of legal words.
    lexicon: L,
    /// The point value of each letter.
    tile_values: TileValues,
    /// The board of squares, some holding tiles.
    grid: Grid,
    /// This is a bag of all the tiles that haven't been drawn yet.
    bag: Bag,
    /// A rack of tiles for each player.
    racks: Racks,
    /// The score of each player.
    scores: Scores,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The number of consecutive exchanges.
    passes: usize,
    /// Whether the game has ended. Never reset once set.
    is_over: bool,
    /// Shuffles the bag.
    rng: ChaCha8Rng,
}

impl<L> GameState<L> {
    /// Fills the bag with every [tile](crate::Tile), shuffles it, deals [RACK_LEN] tiles to
    /// each player in order, and lays out an empty [grid](Grid). Player `0` moves first.
    ///
    /// # Arguments
    ///
    /// * `lexicon`: The set of legal words.
    /// * `tile_values`: The point value of each letter.
    /// * `seed`: Seeds every shuffle of the bag.
    ///
    /// # See Also
    ///
    /// * [GameState::new_with_first_player]
    /// * [GameState::new_random]
    pub fn new(lexicon: L, tile_values: TileValues, seed: u64) -> GameState<L> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut bag = tiles();
        bag.shuffle(&mut rng);

        let mut racks = Racks::default();
        for rack in &mut racks {
            deal(&mut bag, rack, RACK_LEN);
        }

        GameState {
            lexicon,
            tile_values,
            grid: Grid::new(),
            bag,
            racks,
            scores: Scores::default(),
            current_player: 0,
            passes: 0,
            is_over: false,
            rng,
        }
    }

    /// Same as [GameState::new] except `first_player` moves first.
    ///
    /// # Errors
    ///
    /// * [NewError::FirstPlayerOutOfBounds] Attempting to start with a first player who is not
    /// one of the [PLAYERS].
    pub fn new_with_first_player(
        lexicon: L,
        tile_values: TileValues,
        seed: u64,
        first_player: usize,
    ) -> Result<GameState<L>, NewError> {
        if first_player >= PLAYERS {
            return Err(NewError::FirstPlayerOutOfBounds { first_player });
        }
        let mut game_state = GameState::new(lexicon, tile_values, seed);
        game_state.current_player = first_player;
        Ok(game_state)
    }

    /// Same as [GameState::new] except the seed is drawn from [rand::thread_rng].
    pub fn new_random(lexicon: L, tile_values: TileValues) -> GameState<L> {
        GameState::new(lexicon, tile_values, rand::thread_rng().gen())
    }

    /// # Returns
    ///
    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// # Returns
    ///
    /// Whether the game has ended. Once true, stays true.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_over
    }

    /// # Returns
    ///
    /// The [square](Square) at `location`, or [None] if `location` is off the board.
    pub fn current_square(&self, location: Location) -> Option<Square> {
        location.is_on_board().then(|| self.grid.read(location))
    }

    /// # Returns
    ///
    /// A copy of the rack held by `player`, or [None] if out of bounds.
    pub fn rack_of(&self, player: usize) -> Option<Rack> {
        self.racks.get(player).cloned()
    }

    /// # Returns
    ///
    /// The score of `player`, or [None] if out of bounds.
    pub fn score_of(&self, player: usize) -> Option<i32> {
        self.scores.get(player).copied()
    }

    /// The board of squares.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of tiles left in the bag.
    #[inline]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// # Returns
    ///
    /// The points `word` would earn at `location` along `direction`. Assumes, but does not
    /// verify, that the play is legal.
    pub fn score_word(&self, word: &str, location: Location, direction: Direction) -> u32 {
        score(&self.grid, &self.tile_values, word, location, direction)
    }

    /// # Returns
    ///
    /// Whether two consecutive exchanges have been made or some rack is empty.
    fn has_ended(&self) -> bool {
        self.passes >= PASSES_TO_END || self.racks.iter().any(|rack| rack.is_empty())
    }

    /// Deducts the value of each player's unplayed tiles from their score. A player who
    /// emptied their rack also gains the value of every other player's unplayed tiles. Ends
    /// the game.
    fn score_unplayed_tiles(&mut self) {
        let unplayed: [i32; PLAYERS] = std::array::from_fn(|player| {
            self.racks[player]
                .iter()
                .map(|&tile| self.tile_values.tile_value(tile) as i32)
                .sum()
        });
        let total: i32 = unplayed.iter().sum();
        for (player, rack) in self.racks.iter().enumerate() {
            self.scores[player] -= unplayed[player];
            if rack.is_empty() {
                self.scores[player] += total - unplayed[player];
            }
        }
        self.is_over = true;
        tracing::debug!(scores = ?self.scores, "game over");
    }

    /// Advances to the next player, and ends the game if needed.
    fn end_turn(&mut self) {
        self.current_player = (self.current_player + 1) % PLAYERS;
        if self.has_ended() {
            self.score_unplayed_tiles();
        }
    }
}

impl<L: Lexicon> GameState<L> {
    /// Checks whether the current player may play `word` at `location` along `direction`.
    /// Never changes anything.
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
            &self.grid,
            &self.lexicon,
            word,
            location,
            direction,
            &self.racks[self.current_player],
        )
    }
}
