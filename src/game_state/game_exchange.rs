use crate::{deal, Bag, Exchanges, GameState, LegalityError, RACK_LEN};
use rand::seq::SliceRandom;

impl<L> GameState<L> {
    /// Exchanges tiles from the current player's rack with tiles from the bag, counts one
    /// more consecutive exchange, and advances to the next player. Ends the game after
    /// [PASSES_TO_END](crate::PASSES_TO_END) consecutive exchanges.
    ///
    /// The rack is refilled before the exchanged tiles go back into the bag, so they only
    /// come back when the bag runs short. An empty `exchanges` is a pass.
    ///
    /// # Arguments
    ///
    /// * `exchanges`: An ordered set of indexes of tiles to be exchanged. Indexes at or beyond
    /// the length of the rack are ignored.
    ///
    /// # Errors
    ///
    /// * [LegalityError::HasEnded] Attempting to exchange after the game has ended.
    ///
    /// # Returns
    ///
    /// The number of tiles exchanged.
    pub fn apply_exchange(&mut self, exchanges: &Exchanges) -> Result<usize, LegalityError> {
        if self.is_over {
            return Err(LegalityError::HasEnded);
        }

        // Cannot filter by tile since exchanges might request a subset of duplicate tiles
        let rack = &mut self.racks[self.current_player];
        let returned: Bag = exchanges
            .range(..rack.len())
            .rev()
            .map(|&index| rack.remove(index))
            .collect();

        let missing = RACK_LEN.saturating_sub(rack.len());
        deal(&mut self.bag, rack, missing);
        self.bag.extend(returned.iter().copied());
        self.bag.shuffle(&mut self.rng);
        let missing = RACK_LEN.saturating_sub(rack.len());
        deal(&mut self.bag, rack, missing);
        self.passes += 1;

        tracing::debug!(
            player = self.current_player,
            tiles = returned.len(),
            passes = self.passes,
            "exchanged tiles"
        );
        self.end_turn();
        Ok(returned.len())
    }
}
