//! The session loop: rounds, sweeps, turns.

use game_core::{
    GameOutcome, GameState, RngOracle, TurnEngine, TurnProgress, reconcile_round,
    round_in_progress, settle,
};

use crate::error::{Result, RuntimeError};
use crate::providers::{DecisionProvider, GameObserver, TurnContext};

/// Drives one complete game to its outcome.
///
/// Owns the state for the duration of the game. Each player turn borrows the
/// state exclusively through a [`TurnEngine`]; the provider and observer are
/// consulted between mutations, never during them.
pub struct GameSession<P, O> {
    state: GameState,
    rng: Box<dyn RngOracle>,
    provider: P,
    observer: O,
}

impl<P: DecisionProvider, O: GameObserver> GameSession<P, O> {
    pub fn new(state: GameState, rng: Box<dyn RngOracle>, provider: P, observer: O) -> Self {
        Self {
            state,
            rng,
            provider,
            observer,
        }
    }

    /// Play all rounds and settle the final scores.
    pub fn run(mut self) -> Result<GameOutcome> {
        let rounds = self.state.config.rounds;
        for number in 1..=rounds {
            self.play_round(number)?;
            if number < rounds {
                self.provider.confirm_round_end(number, number + 1)?;
            }
        }

        let outcome = settle(&self.state.players);
        tracing::info!(?outcome, "game settled");
        self.observer.game_over(&outcome);
        Ok(outcome)
    }

    fn play_round(&mut self, number: u32) -> Result<()> {
        self.state.start_round(number);
        tracing::info!(round = number, air = self.state.round.air(), "round started");
        self.observer.round_started(&self.state);

        while round_in_progress(&self.state) {
            for player in 0..self.state.players.len() {
                self.play_turn(player)?;
            }
        }

        reconcile_round(&mut self.state);
        tracing::info!(
            round = number,
            slots = self.state.board.slot_count(),
            "round reconciled"
        );
        self.observer.round_ended(&self.state);
        Ok(())
    }

    fn play_turn(&mut self, player: usize) -> Result<()> {
        let Some(mut turn) = TurnEngine::begin(&mut self.state, player)? else {
            return Ok(());
        };
        tracing::debug!(
            player = %turn.player().name,
            depth = turn.player().position,
            air = turn.state().round.air(),
            "turn started"
        );
        self.observer.turn_started(turn.state(), player);

        loop {
            let actions = turn.available_actions();
            if actions.is_empty() {
                break;
            }

            let ctx = TurnContext {
                player_name: &turn.player().name,
                depth: turn.player().position,
                air: turn.state().round.air(),
            };
            let action = self.provider.choose_action(&ctx, &actions)?;
            if !actions.contains(&action) {
                return Err(RuntimeError::ChoiceOutsideMenu { chosen: action });
            }
            tracing::debug!(player = %turn.player().name, %action, "action chosen");

            match turn.apply(action, self.rng.as_mut())? {
                TurnProgress::Continue => {}
                TurnProgress::AwaitingMove(options) => {
                    let choice = self.provider.choose_move(&options)?;
                    let report = turn.resolve_move(choice)?;
                    self.observer.player_moved(turn.state(), player, &report);
                }
                TurnProgress::BoostMoved { total, report } => {
                    self.observer.boost_rolled(total, report.distance);
                    self.observer.player_moved(turn.state(), player, &report);
                }
                TurnProgress::TurnOver => break,
            }
        }

        Ok(())
    }
}
