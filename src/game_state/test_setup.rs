use crate::{
    random_bag, random_current_player, random_racks, random_scores, Bag, GameState, Grid, Racks,
    Scores, TileValues, TILES_LEN,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

impl<L> GameState<L> {
    /// Generates an empty [GameState] holding `lexicon`.
    ///
    /// # Returns
    ///
    /// A [GameState] struct with the properties set to the following:
    /// * `tile_values`: The standard values.
    /// * `grid`: An empty grid.
    /// * `bag`: An empty bag.
    /// * `racks`: Empty racks.
    /// * `scores`: `0`s.
    /// * `current_player`: `0`.
    /// * `passes`: `0`.
    /// * `is_over`: `false`.
    pub fn empty_game_state(lexicon: L) -> GameState<L> {
        GameState {
            lexicon,
            tile_values: TileValues::default(),
            grid: Grid::new(),
            bag: Bag::with_capacity(TILES_LEN),
            racks: Racks::default(),
            scores: Scores::default(),
            current_player: 0,
            passes: 0,
            is_over: false,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// A mutable reference to `self.grid`.
    pub fn mut_grid(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.racks`.
    pub fn mut_racks(&mut self) -> &mut Racks {
        &mut self.racks
    }

    /// A mutable reference to `self.scores`.
    pub fn mut_scores(&mut self) -> &mut Scores {
        &mut self.scores
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.passes`.
    pub fn mut_passes(&mut self) -> &mut usize {
        &mut self.passes
    }

    /// A mutable reference to `self.is_over`.
    pub fn mut_is_over(&mut self) -> &mut bool {
        &mut self.is_over
    }

    /// It inserts a random, small, non-zero number of [tiles](crate::Tile) into the bag.
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](crate::Tile) in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_bag(rng, &mut self.bag)
    }

    /// Replaces each player's rack with a full rack of random [tiles](crate::Tile).
    pub fn random_racks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_racks(rng, &mut self.racks)
    }

    /// Sets each player's score to a random, medium, non-zero number.
    pub fn random_scores<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_scores(rng, &mut self.scores)
    }

    /// Sets the current player to a random player.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_current_player(rng, &mut self.current_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rack, PLAYERS, RACK_LEN};

    #[test]
    fn empty_game_state() {
        let game_state = GameState::empty_game_state(());

        assert_eq!(Grid::new(), game_state.grid);
        assert_eq!(Bag::new(), game_state.bag);
        assert_eq!([Rack::new(), Rack::new()], game_state.racks);
        assert_eq!([0; PLAYERS], game_state.scores);
        assert_eq!(0, game_state.current_player);
        assert_eq!(0, game_state.passes);
        assert!(!game_state.is_over);
    }

    #[test]
    fn empty_game_state_has_ended() {
        let mut rng = rand::thread_rng();
        let mut game_state = GameState::empty_game_state(());

        assert!(game_state.has_ended());

        game_state.random_racks(&mut rng);

        assert!(!game_state.has_ended());
        for rack in &game_state.racks {
            assert_eq!(RACK_LEN, rack.len());
        }
    }

    #[test]
    fn mut_grid() {
        let mut game_state = GameState::empty_game_state(());
        game_state
            .mut_grid()
            .write(crate::PlacedTile::Letter('a'), crate::CENTER);

        assert_eq!(1, game_state.grid().occupied_len());
    }
}
