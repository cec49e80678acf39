use crate::{
    find_cross_word, find_main_word, Direction, Grid, Location, Premium, RunSquare, Square,
    Symbol, TileValues, BINGO_BONUS, RACK_LEN,
};

/// Scores one word. Letter premiums count only under newly placed tiles and word premiums
/// under newly placed tiles multiply together. Tiles already on the [grid](Grid) count at
/// face value since their premiums are spent.
///
/// # Returns
///
/// The points earned by `run`.
pub fn score_run(grid: &Grid, values: &TileValues, run: &[RunSquare]) -> u32 {
    let mut letters = 0;
    let mut multiplier = 1;
    for square in run {
        let value = values.placed_value(square.tile);
        if square.is_new {
            let premium = match grid.read(square.location) {
                Square::Empty(premium) => premium,
                Square::Occupied(_) => Premium::None,
            };
            letters += value * premium.letter_multiplier();
            multiplier *= premium.word_multiplier();
        } else {
            letters += value;
        }
    }
    letters * multiplier
}

/// Scores a play of `word` at `location` along `direction`: the main word, every cross word
/// completed by a newly placed tile, and [BINGO_BONUS] when exactly [RACK_LEN] new tiles are
/// placed. Assumes, but does not verify, that the play is legal. Never panics on an illegal
/// play.
///
/// # Arguments
///
/// * `word`: The move string. Lowercase letters place regular tiles, uppercase letters place
/// blanks, and spaces reuse tiles already on the grid.
/// * `location`: The location of the first symbol.
/// * `direction`: The axis along which the symbols are laid out.
///
/// # See Also
///
/// * [verify_legality](crate::verify_legality)
/// * [GateKeeper::score](crate::GateKeeper::score)
pub fn score(
    grid: &Grid,
    values: &TileValues,
    word: &str,
    location: Location,
    direction: Direction,
) -> u32 {
    let symbols = Symbol::parse_word(word);
    let main = find_main_word(grid, &symbols, location, direction);
    let cross = direction.perpendicular();

    let mut points = score_run(grid, values, &main);
    let mut placed = 0;
    for square in main.iter().filter(|square| square.is_new) {
        placed += 1;
        if let Some(run) = find_cross_word(grid, square.location, cross, square.tile) {
            points += score_run(grid, values, &run);
        }
    }
    if placed == RACK_LEN {
        points += BINGO_BONUS;
    }
    points
}
