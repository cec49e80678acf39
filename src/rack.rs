use crate::{Bag, Rack, Symbol, Tile, RACK_LEN};
use smallvec::SmallVec;

/// Checks whether every placing [symbol](Symbol) in `word` can be satisfied by a different
/// [tile](Tile) from `rack`. A lowercase letter needs a regular tile of that letter and an
/// uppercase letter needs an unplayed blank, never a regular tile.
///
/// Matching is greedy from left to right. Greedy consumption finds a matching whenever one
/// exists since each tile can only ever satisfy symbols of exactly one kind.
///
/// # Arguments
///
/// * `word`: The parsed move string.
/// * `rack`: The tiles available to the player.
///
/// # See Also
///
/// * [verify_legality](crate::verify_legality)
/// * [LegalityError::InsufficientTiles](crate::LegalityError::InsufficientTiles)
pub fn can_be_drawn_from_rack(word: &[Symbol], rack: &[Tile]) -> bool {
    let mut used: SmallVec<[bool; RACK_LEN]> = SmallVec::from_elem(false, rack.len());
    for &symbol in word {
        let wanted = match symbol {
            Symbol::Existing => continue,
            Symbol::Regular(letter) => Tile::Letter(letter),
            Symbol::Blank(_) => Tile::Blank,
            Symbol::Other(_) => return false,
        };
        let Some(index) = rack
            .iter()
            .zip(used.iter())
            .position(|(&tile, &is_used)| !is_used && tile == wanted)
        else {
            return false;
        };
        used[index] = true;
    }
    true
}

/// Removes the [tiles](Tile) consumed by `word` from `rack`. A blank symbol removes an
/// unplayed blank and an existing-tile symbol removes nothing.
///
/// # Returns
///
/// The removed [tiles](Tile) in the order of `word`.
pub fn remove_tiles(word: &[Symbol], rack: &mut Rack) -> Bag {
    word.iter()
        .filter_map(|&symbol| match symbol {
            Symbol::Regular(letter) => Some(Tile::Letter(letter)),
            Symbol::Blank(_) => Some(Tile::Blank),
            Symbol::Existing | Symbol::Other(_) => None,
        })
        .filter_map(|wanted| {
            let index = rack.iter().position(|&tile| tile == wanted)?;
            Some(rack.remove(index))
        })
        .collect()
}

/// Draws up to `n` [tiles](Tile) from the end of `bag` into `rack`. When the bag runs out,
/// fewer tiles are drawn.
///
/// # Returns
///
/// The number of tiles drawn.
pub fn deal(bag: &mut Bag, rack: &mut Rack, n: usize) -> usize {
    let start = bag.len().saturating_sub(n);
    let drawn = bag.len() - start;
    rack.extend(bag.drain(start..));
    tracing::trace!(drawn, bag_len = bag.len(), "dealt tiles");
    drawn
}
