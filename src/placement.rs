use crate::{
    can_be_drawn_from_rack, find_cross_word, find_main_word, run_text, Direction, Grid,
    LegalityError, Lexicon, Location, Symbol, Tile, CENTER, MIN_WORD_LEN,
};

/// Checks the shape of a play against the [grid](Grid). Stepping from `location` along
/// `direction`:
///
/// * the square before the first symbol is off the board or empty,
/// * every [existing](Symbol::Existing) symbol lands on an occupied square and every other
/// symbol lands on an empty square,
/// * no symbol runs off the edge of the board,
/// * the square after the last symbol is off the board or empty.
///
/// # See Also
///
/// * [LegalityError::BadPlacement]
pub fn can_be_placed_on_grid(
    grid: &Grid,
    word: &[Symbol],
    location: Location,
    direction: Direction,
) -> bool {
    if grid.is_occupied_on_board(location.antineighbor(direction)) {
        return false;
    }
    let mut square = location;
    for &symbol in word {
        if !square.is_on_board() {
            return false;
        }
        if (symbol == Symbol::Existing) != grid.is_occupied(square) {
            return false;
        }
        square = square.neighbor(direction);
    }
    !grid.is_occupied_on_board(square)
}

/// Checks whether a play touches the game so far: it reuses a tile on the [grid](Grid),
/// covers [CENTER], or places a tile beside an occupied square on the perpendicular axis.
/// On an empty grid only plays through [CENTER] are connected.
///
/// # See Also
///
/// * [LegalityError::NotConnected]
pub fn would_be_connected(
    grid: &Grid,
    word: &[Symbol],
    location: Location,
    direction: Direction,
) -> bool {
    let cross = direction.perpendicular();
    word.iter()
        .zip(location.walk(direction))
        .any(|(&symbol, square)| {
            symbol == Symbol::Existing
                || square == CENTER
                || grid.is_occupied_on_board(square.neighbor(cross))
                || grid.is_occupied_on_board(square.antineighbor(cross))
        })
}

/// # Returns
///
/// Whether the main word of a play, with tiles on the [grid](Grid) substituted for spaces,
/// is at least [MIN_WORD_LEN] letters long and in `lexicon`.
pub fn is_valid_main_word<L: Lexicon + ?Sized>(
    grid: &Grid,
    lexicon: &L,
    word: &[Symbol],
    location: Location,
    direction: Direction,
) -> bool {
    let run = find_main_word(grid, word, location, direction);
    run.len() >= MIN_WORD_LEN && lexicon.contains(&run_text(&run))
}

/// # Returns
///
/// Whether the main word and every cross word completed by a newly placed tile are in
/// `lexicon`. Assumes the play [can be placed](can_be_placed_on_grid).
///
/// # See Also
///
/// * [LegalityError::InvalidWord]
pub fn would_create_only_legal_words<L: Lexicon + ?Sized>(
    grid: &Grid,
    lexicon: &L,
    word: &[Symbol],
    location: Location,
    direction: Direction,
) -> bool {
    if !is_valid_main_word(grid, lexicon, word, location, direction) {
        return false;
    }
    let cross = direction.perpendicular();
    word.iter()
        .zip(location.walk(direction))
        .filter_map(|(symbol, square)| Some((symbol.placed_tile()?, square)))
        .filter_map(|(tile, square)| find_cross_word(grid, square, cross, tile))
        .all(|run| lexicon.contains(&run_text(&run)))
}

/// Decides whether `word` may be played at `location` along `direction` by a player holding
/// `rack`. Runs each check in order and stops at the first failure. Never changes anything.
///
/// # Arguments
///
/// * `word`: The move string. Lowercase letters place regular tiles, uppercase letters place
/// blanks, and spaces reuse tiles already on the grid.
/// * `location`: The location of the first symbol.
/// * `direction`: The axis along which the symbols are laid out.
/// * `rack`: The tiles available to the player.
///
/// # Errors
///
/// * [LegalityError::TooShort] Attempting to play fewer than [MIN_WORD_LEN] symbols.
/// * [LegalityError::InsufficientTiles] Attempting to play tiles not in `rack`.
/// * [LegalityError::BadPlacement] Attempting to overlap, leave a gap, abut a tile, or run
/// off the board.
/// * [LegalityError::NotConnected] Attempting to play away from every tile and [CENTER].
/// * [LegalityError::InvalidWord] Attempting to form a word missing from `lexicon`.
pub fn verify_legality<L: Lexicon + ?Sized>(
    grid: &Grid,
    lexicon: &L,
    word: &str,
    location: Location,
    direction: Direction,
    rack: &[Tile],
) -> Result<(), LegalityError> {
    let symbols = Symbol::parse_word(word);
    if symbols.len() < MIN_WORD_LEN {
        return Err(LegalityError::TooShort);
    }
    if !can_be_drawn_from_rack(&symbols, rack) {
        return Err(LegalityError::InsufficientTiles);
    }
    if !can_be_placed_on_grid(grid, &symbols, location, direction) {
        return Err(LegalityError::BadPlacement);
    }
    if !would_be_connected(grid, &symbols, location, direction) {
        return Err(LegalityError::NotConnected);
    }
    if !would_create_only_legal_words(grid, lexicon, &symbols, location, direction) {
        return Err(LegalityError::InvalidWord);
    }
    Ok(())
}
