use crate::{
    deal, remove_tiles, Direction, GameState, LegalityError, Lexicon, Location, Symbol, RACK_LEN,
};

impl<L: Lexicon> GameState<L> {
    /// Checks if the play is legal, then adds its points to the current player, places its
    /// tiles on the grid, removes them from the current player's rack, refills the rack from
    /// the bag, resets the consecutive exchanges, and advances to the next player. Ends the
    /// game when some rack is left empty.
    ///
    /// A rejected play changes nothing.
    ///
    /// # Arguments
    ///
    /// * `word`: The move string. Lowercase letters place regular tiles, uppercase letters place
    /// blanks, and spaces reuse tiles already on the grid.
    /// * `location`: The location of the first symbol.
    /// * `direction`: The axis along which the symbols are laid out.
    ///
    /// # Errors
    ///
    /// * [LegalityError::HasEnded] Attempting to play after the game has ended.
    /// * Any other [LegalityError] from [verify_legality](crate::verify_legality).
    ///
    /// # Returns
    ///
    /// The points earned by the play.
    pub fn apply_play(
        &mut self,
        word: &str,
        location: Location,
        direction: Direction,
    ) -> Result<u32, LegalityError> {
        if self.is_over {
            return Err(LegalityError::HasEnded);
        }
        if let Err(error) = self.verify_legality(word, location, direction) {
            tracing::debug!(
                player = self.current_player,
                word,
                %location,
                ?direction,
                ?error,
                "rejected play"
            );
            return Err(error);
        }

        let points = self.score_word(word, location, direction);
        self.scores[self.current_player] += points as i32;

        let symbols = Symbol::parse_word(word);
        self.grid.place_word(&symbols, location, direction);
        let rack = &mut self.racks[self.current_player];
        remove_tiles(&symbols, rack);
        let missing = RACK_LEN.saturating_sub(rack.len());
        deal(&mut self.bag, rack, missing);
        self.passes = 0;

        tracing::debug!(
            player = self.current_player,
            word,
            %location,
            ?direction,
            points,
            "played word"
        );
        self.end_turn();
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rack_from as rack, PlacedTile, Square, WordList, CENTER};
    use tap::Tap;

    fn horn_state() -> GameState<WordList> {
        let lexicon = ["horn", "an", "ah", "no", "finally"].into_iter().collect();
        GameState::empty_game_state(lexicon).tap_mut(|game_state| {
            *game_state.mut_racks() = [rack("hornazy"), rack("annexed")];
            game_state.mut_bag().extend(rack("stuvwxyz"));
        })
    }

    #[test]
    fn play_scores_and_places() {
        let mut game_state = horn_state();

        assert_eq!(Ok(14), game_state.apply_play("horn", CENTER, Direction::Horizontal));

        assert_eq!([14, 0], *game_state.mut_scores());
        assert_eq!(4, game_state.grid().occupied_len());
        assert_eq!(
            Some(Square::Occupied(PlacedTile::Letter('h'))),
            game_state.current_square(CENTER)
        );
    }

    #[test]
    fn play_refills_rack_from_bag_end() {
        let mut game_state = horn_state();

        game_state
            .apply_play("horn", CENTER, Direction::Horizontal)
            .unwrap();

        assert_eq!(Some(rack("azywxyz")), game_state.rack_of(0));
        assert_eq!(rack("stuv").to_vec(), *game_state.mut_bag());
    }

    #[test]
    fn play_advances_player_and_resets_passes() {
        let mut game_state = horn_state();
        *game_state.mut_passes() = 1;

        game_state
            .apply_play("horn", CENTER, Direction::Horizontal)
            .unwrap();

        assert_eq!(1, game_state.current_player());
        assert_eq!(0, *game_state.mut_passes());
    }

    #[test]
    fn second_play_scores_cross_words() {
        let mut game_state = horn_state();
        game_state
            .apply_play("horn", CENTER, Direction::Horizontal)
            .unwrap();

        assert_eq!(
            Ok(5 + 3 + 3),
            game_state.apply_play("an", Location::new(6, 7), Direction::Horizontal)
        );
        assert_eq!([14, 11], *game_state.mut_scores());
        assert_eq!(0, game_state.current_player());
    }

    #[test]
    fn rejected_play_changes_nothing() {
        let mut game_state = horn_state();
        let grid = game_state.grid().clone();
        let racks = game_state.mut_racks().clone();

        for (word, location, error) in [
            ("h", CENTER, LegalityError::TooShort),
            ("horns", CENTER, LegalityError::InsufficientTiles),
            ("horn", Location::new(7, 12), LegalityError::BadPlacement),
            ("horn", Location::new(0, 0), LegalityError::NotConnected),
            ("zany", CENTER, LegalityError::InvalidWord),
        ] {
            assert_eq!(
                Err(error),
                game_state.apply_play(word, location, Direction::Horizontal)
            );
        }

        assert_eq!(grid, *game_state.grid());
        assert_eq!(racks, *game_state.mut_racks());
        assert_eq!([0, 0], *game_state.mut_scores());
        assert_eq!(0, game_state.current_player());
        assert_eq!(8, game_state.bag_len());
    }

    #[test]
    fn rejected_cross_word_changes_nothing() {
        let mut game_state = horn_state();
        game_state
            .apply_play("horn", CENTER, Direction::Horizontal)
            .unwrap();
        game_state.mut_racks()[1] = rack("noxqvwz");
        let grid = game_state.grid().clone();
        let racks = game_state.mut_racks().clone();
        let scores = *game_state.mut_scores();
        let bag_len = game_state.bag_len();

        // "no" is a word but "nr" above the r is not
        assert_eq!(
            Err(LegalityError::InvalidWord),
            game_state.apply_play("no", Location::new(6, 9), Direction::Horizontal)
        );

        assert_eq!(grid, *game_state.grid());
        assert_eq!(racks, *game_state.mut_racks());
        assert_eq!(scores, *game_state.mut_scores());
        assert_eq!(1, game_state.current_player());
        assert_eq!(bag_len, game_state.bag_len());
    }

    #[test]
    fn play_after_game_over() {
        let mut game_state = horn_state();
        *game_state.mut_is_over() = true;

        assert_eq!(
            Err(LegalityError::HasEnded),
            game_state.apply_play("horn", CENTER, Direction::Horizontal)
        );
    }

    #[test]
    fn emptying_rack_ends_game() {
        let lexicon: WordList = ["finally"].into_iter().collect();
        let mut game_state = GameState::empty_game_state(lexicon);
        *game_state.mut_racks() = [rack("finaly_"), rack("qe")];
        *game_state.mut_scores() = [10, 10];

        assert_eq!(
            Ok(76),
            game_state.apply_play("finalLy", CENTER, Direction::Horizontal)
        );

        assert!(game_state.is_game_over());
        // opponent's unplayed q and e move across
        assert_eq!(Some(10 + 76 + 11), game_state.score_of(0));
        assert_eq!(Some(10 - 11), game_state.score_of(1));
    }

    #[test]
    fn rack_refills_short_when_bag_runs_out() {
        let mut game_state = horn_state();
        game_state.mut_bag().truncate(2);

        game_state
            .apply_play("horn", CENTER, Direction::Horizontal)
            .unwrap();

        assert_eq!(Some(rack("azyst")), game_state.rack_of(0));
        assert_eq!(0, game_state.bag_len());
        assert!(!game_state.is_game_over());
    }
}
