use crate::{Direction, Grid, Location, PlacedTile, Run, Symbol};

/// One square of a [run](Run) as it would read after a play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RunSquare {
    /// Where the tile lies on the [grid](Grid).
    pub location: Location,
    /// The tile shown on the square.
    pub tile: PlacedTile,
    /// Whether the tile is placed by the play rather than already on the [grid](Grid).
    pub is_new: bool,
}

/// Walks backward from `location` against `direction` while squares remain on the board and
/// occupied, then steps one forward. `location` itself is treated as occupied.
///
/// # Returns
///
/// The first location of the contiguous run containing `location`.
pub fn find_start_of_word(grid: &Grid, location: Location, direction: Direction) -> Location {
    let mut start = location;
    let mut previous = start.antineighbor(direction);
    while grid.is_occupied_on_board(previous) {
        start = previous;
        previous = start.antineighbor(direction);
    }
    start
}

/// Finds the word `tile` would complete along `direction` if placed at the empty `location`.
///
/// # Returns
///
/// The contiguous [run](Run) through `location`, or [None] if the tile would stand alone.
/// A lone tile forms no cross word.
///
/// # See Also
///
/// * [would_create_only_legal_words](crate::would_create_only_legal_words)
/// * [score](fn@crate::score)
pub fn find_cross_word(
    grid: &Grid,
    location: Location,
    direction: Direction,
    tile: PlacedTile,
) -> Option<Run> {
    let run: Run = find_start_of_word(grid, location, direction)
        .walk(direction)
        .take_while(|&square| square == location || grid.is_occupied_on_board(square))
        .map(|square| {
            if square == location {
                RunSquare {
                    location: square,
                    tile,
                    is_new: true,
                }
            } else {
                RunSquare {
                    location: square,
                    tile: grid.read(square).tile().unwrap_or(tile),
                    is_new: false,
                }
            }
        })
        .collect();
    (run.len() > 1).then_some(run)
}

/// Reads the main word of a play, substituting the tiles already on the [grid](Grid) for
/// [existing](Symbol::Existing) symbols. Symbols which land off the board, spaces over empty
/// squares, and [other](Symbol::Other) characters contribute nothing, so an illegal play
/// never panics here.
///
/// # Returns
///
/// The [run](Run) of the main word in order.
pub fn find_main_word(
    grid: &Grid,
    word: &[Symbol],
    location: Location,
    direction: Direction,
) -> Run {
    word.iter()
        .zip(location.walk(direction))
        .filter(|(_, square)| square.is_on_board())
        .filter_map(|(&symbol, square)| match symbol {
            Symbol::Existing => grid.read(square).tile().map(|tile| RunSquare {
                location: square,
                tile,
                is_new: false,
            }),
            _ => symbol.placed_tile().map(|tile| RunSquare {
                location: square,
                tile,
                is_new: true,
            }),
        })
        .collect()
}

/// # Returns
///
/// The lowercase letters of `run`, as looked up in a [lexicon](crate::Lexicon).
pub fn run_text(run: &[RunSquare]) -> String {
    run.iter().map(|square| square.tile.letter()).collect()
}
