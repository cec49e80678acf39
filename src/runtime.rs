use crate::{Effect, GameState, GameView, GateKeeper, LegalityError, Lexicon, Move, Rack, PLAYERS};
use async_trait::async_trait;
use futures::future;
use itertools::Itertools;

/// Defines how the runtime talks to whoever chooses the moves of one player, whether a
/// person at a terminal or an automated strategy.
///
/// [Player::choose_move] and [Player::update_play_error] block execution until getting input
/// or updating output. [Player::update_view] may execute in parallel with other players.
///
/// # Errors
///
/// The implementor of [Player] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated illegal moves. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the
/// runtime and back to the calling client code.
#[async_trait]
pub trait Player<E> {
    /// On their turn, gets a [move](Move) from the player through their [GateKeeper].
    fn choose_move<L: Lexicon>(&self, gate_keeper: &GateKeeper<'_, L>) -> Result<Move, E>;

    /// When a [move](Move) is rejected, updates the player with the state of the game, their
    /// rack, their move, and the reason why their move could not be executed.
    fn update_play_error<'a>(
        &self,
        view: &'a GameView<'a>,
        rack: &'a Rack,
        rejected: Move,
        error: LegalityError,
    ) -> Result<(), E>;

    /// After every turn, updates each player with the state of the game and their rack.
    async fn update_view<'a>(&self, view: &'a GameView<'a>, rack: &'a Rack) -> Result<(), E>;
}

/// It repeatedly asks the current player for a move, and if the move is illegal, it tells the
/// player about the error and asks again. If the move is legal, stops asking and applies it.
///
/// # Arguments
///
/// * `players`: A [Player] for each player of the game.
/// * `game_state`: The current state of the game.
///
/// # Errors
///
/// When the current player fails to send input or receive an error update.
///
/// # Returns
///
/// What the applied [move](Move) did.
pub fn process_input<P, E, L>(
    players: &[P; PLAYERS],
    game_state: &mut GameState<L>,
) -> Result<Effect, E>
where
    P: Player<E>,
    L: Lexicon,
{
    let player = &players[game_state.current_player()];

    loop {
        let chosen = player.choose_move(&game_state.current_gate_keeper())?;
        match chosen.apply(game_state) {
            Ok(effect) => return Ok(effect),
            Err(error) => {
                let rack = game_state.current_gate_keeper().rack();
                // cannot use map_err since E needs to be propagated here
                player.update_play_error(&game_state.view(), &rack, chosen, error)?;
            }
        }
    }
}

/// Asynchronously sends the current state of the game to every [Player].
///
/// # Arguments
///
/// * `players`: A [Player] for each player of the game.
/// * `game_state`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [Player::update_view] into a vector.
pub async fn send_updates<P, E, L>(
    players: &[P; PLAYERS],
    game_state: &GameState<L>,
) -> Result<(), Vec<E>>
where
    P: Player<E>,
{
    let view = game_state.view();
    let racks: [Rack; PLAYERS] =
        std::array::from_fn(|player| game_state.rack_of(player).unwrap_or_default());
    let update_tasks = players
        .iter()
        .zip(&racks)
        .map(|(player, rack)| player.update_view(&view, rack));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}

/// Plays one game to the end: sends the opening state, then alternates between
/// [processing the input](process_input) of the current player and
/// [sending updates](send_updates) until the game is over.
///
/// # Errors
///
/// The errors of the first [Player] method call that fails.
pub async fn run<P, E, L>(
    players: &[P; PLAYERS],
    game_state: &mut GameState<L>,
) -> Result<(), Vec<E>>
where
    P: Player<E>,
    L: Lexicon,
{
    send_updates(players, game_state).await?;
    while !game_state.is_game_over() {
        let effect = process_input(players, game_state).map_err(|error| vec![error])?;
        tracing::trace!(?effect, "turn applied");
        send_updates(players, game_state).await?;
    }

    Ok(())
}
