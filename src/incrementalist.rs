use crate::{
    Direction, GameView, GateKeeper, LegalityError, Lexicon, Location, Move, Player, Rack,
    Square, Tile, BOARD_WIDTH, CENTER, RACK_LEN,
};
use async_trait::async_trait;
use itertools::Itertools;
use std::convert::Infallible;

/// A greedy automated [Player] which never plays more than two tiles per turn.
///
/// On an empty board, it plays the best scoring two tile word across the center. Afterwards,
/// it plays the best scoring single tile next to a tile already on the board. Blanks always
/// stand for `e`. When nothing is legal, it exchanges its whole rack.
#[derive(Debug, Default, Copy, Clone)]
pub struct Incrementalist;

/// The letter to place for `tile`, uppercase for a blank.
fn symbol_of(tile: Tile) -> char {
    match tile {
        Tile::Letter(letter) => letter,
        Tile::Blank => 'E',
    }
}

/// # Returns
///
/// The highest scoring legal candidate, keeping the earliest on ties, or [None] if no candidate
/// is legal.
fn best_play<L, I>(gate_keeper: &GateKeeper<'_, L>, candidates: I) -> Option<Move>
where
    L: Lexicon,
    I: IntoIterator<Item = (String, Location, Direction)>,
{
    let mut best: Option<(u32, Move)> = None;
    for (word, location, direction) in candidates {
        if gate_keeper
            .verify_legality(&word, location, direction)
            .is_err()
        {
            continue;
        }
        let points = gate_keeper.score(&word, location, direction);
        if best
            .as_ref()
            .map_or(true, |(best_points, _)| points > *best_points)
        {
            best = Some((points, Move::play(word, location, direction)));
        }
    }
    best.map(|(_, chosen)| chosen)
}

/// Every ordered pair of distinct rack tiles, laid horizontally from the center.
fn opening_candidates(rack: &Rack) -> impl Iterator<Item = (String, Location, Direction)> + '_ {
    rack.iter()
        .enumerate()
        .cartesian_product(rack.iter().enumerate())
        .filter(|((first, _), (second, _))| first != second)
        .map(|((_, &first), (_, &second))| {
            let word = [symbol_of(first), symbol_of(second)].iter().collect();
            (word, CENTER, Direction::Horizontal)
        })
}

/// Every rack tile placed before or after one tile already on the board, at every location
/// and along every direction.
fn extension_candidates(rack: &Rack) -> impl Iterator<Item = (String, Location, Direction)> + '_ {
    let width = BOARD_WIDTH as isize;
    rack.iter()
        .flat_map(|&tile| {
            let symbol = symbol_of(tile);
            [format!("{symbol} "), format!(" {symbol}")]
        })
        .cartesian_product((0..width).cartesian_product(0..width))
        .cartesian_product(Direction::DIRECTIONS)
        .map(|((word, (row, column)), direction)| (word, Location::new(row, column), direction))
}

#[async_trait]
impl Player<Infallible> for Incrementalist {
    fn choose_move<L: Lexicon>(&self, gate_keeper: &GateKeeper<'_, L>) -> Result<Move, Infallible> {
        let rack = gate_keeper.rack();
        let chosen = if matches!(gate_keeper.square(CENTER), Some(Square::Empty(_))) {
            best_play(gate_keeper, opening_candidates(&rack))
        } else {
            best_play(gate_keeper, extension_candidates(&rack))
        };

        Ok(chosen.unwrap_or_else(|| Move::Exchange((0..RACK_LEN).collect())))
    }

    fn update_play_error<'a>(
        &self,
        _view: &'a GameView<'a>,
        _rack: &'a Rack,
        _rejected: Move,
        _error: LegalityError,
    ) -> Result<(), Infallible> {
        Ok(())
    }

    async fn update_view<'a>(
        &self,
        _view: &'a GameView<'a>,
        _rack: &'a Rack,
    ) -> Result<(), Infallible> {
        Ok(())
    }
}
