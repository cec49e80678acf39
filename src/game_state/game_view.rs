use crate::{GameState, Grid, RackLens, Scores};
use std::fmt;

/// Immutably borrows the public properties of [GameState]. Racks are replaced by their
/// lengths and the bag by its length, so nothing secret is shared.
#[derive(Debug)]
pub struct GameView<'a> {
    /// The board of squares, some holding tiles.
    pub grid: &'a Grid,
    /// The score of each player.
    pub scores: &'a Scores,
    /// The number of tiles in each player's rack.
    pub rack_lens: RackLens,
    /// The number of tiles left in the bag.
    pub bag_len: usize,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// Whether the game has ended.
    pub is_over: bool,
}

impl<L> GameState<L> {
    /// # Returns
    ///
    /// A new [GameView] struct, which immutably borrows properties from [GameState].
    pub fn view(&self) -> GameView<'_> {
        GameView {
            grid: &self.grid,
            scores: &self.scores,
            rack_lens: std::array::from_fn(|player| self.racks[player].len()),
            bag_len: self.bag.len(),
            current_player: self.current_player,
            is_over: self.is_over,
        }
    }
}

impl<L> fmt::Display for GameState<L> {
    /// The [grid](Grid), one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl fmt::Display for GameView<'_> {
    /// The [grid](Grid) followed by one line of scores and rack lengths per player.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        for (player, (score, rack_len)) in self.scores.iter().zip(self.rack_lens).enumerate() {
            let marker = if player == self.current_player && !self.is_over {
                '*'
            } else {
                ' '
            };
            writeln!(f, "{marker}player {player}: {score} points, {rack_len} tiles")?;
        }
        write!(f, "bag: {} tiles", self.bag_len)
    }
}
