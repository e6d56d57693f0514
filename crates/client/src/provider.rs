//! Terminal-backed decision provider and observer.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{cursor, execute, terminal};
use game_core::{GameOutcome, GameState, MoveOptions, TurnAction, WalkReport};
use runtime::{DecisionProvider, GameObserver, Result, TurnContext};

use crate::render;

/// Milliseconds between animated walk steps.
const STEP_DELAY_MS: u64 = 700;

/// Collects every decision from the player at the terminal.
pub struct PromptProvider;

impl DecisionProvider for PromptProvider {
    fn choose_action(
        &mut self,
        ctx: &TurnContext<'_>,
        options: &[TurnAction],
    ) -> Result<TurnAction> {
        let title = format!(
            "{}'s turn. Depth: {} Air: {}",
            ctx.player_name, ctx.depth, ctx.air
        );
        let labels: Vec<String> = options.iter().map(|a| a.to_string()).collect();
        let index = crate::prompt::select(&title, &labels)?;
        Ok(options[index])
    }

    fn choose_move(&mut self, options: &MoveOptions) -> Result<usize> {
        let [a, b, c] = options.choices;
        let title = format!("The following moves are possible: A) {a} B) {b} C) {c}");
        let labels = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        Ok(crate::prompt::select(&title, &labels)?)
    }

    fn confirm_round_end(&mut self, completed: u32, next: u32) -> Result<()> {
        let title = format!("End of round {completed}");
        let labels = vec![format!("Proceed to round {next}")];
        crate::prompt::select(&title, &labels)?;
        Ok(())
    }
}

/// Renders the shared board state between decisions.
pub struct ConsoleObserver;

impl ConsoleObserver {
    fn clear(&self) {
        let _ = execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
    }

    fn show_board(&self, state: &GameState) {
        println!("{}", render::board_line(state));
    }
}

impl GameObserver for ConsoleObserver {
    fn round_started(&mut self, state: &GameState) {
        self.clear();
        println!("Round {}", state.round.number());
        self.show_board(state);
    }

    fn turn_started(&mut self, state: &GameState, player: usize) {
        self.clear();
        self.show_board(state);
        println!("{}'s turn", state.players[player].name);
        println!("There is {} air left.", state.round.air());
        let _ = io::stdout().flush();
    }

    fn boost_rolled(&mut self, total: u32, distance: usize) {
        println!("Rolled a total of {total}, moving {distance} tiles.");
        thread::sleep(Duration::from_millis(STEP_DELAY_MS));
    }

    fn player_moved(&mut self, state: &GameState, player: usize, report: &WalkReport) {
        for &position in &report.path {
            self.clear();
            println!("{}", render::board_line_with(state, Some((player, position))));
            let _ = io::stdout().flush();
            thread::sleep(Duration::from_millis(STEP_DELAY_MS));
        }
        if report.surfaced {
            println!("{} made it back to the submarine!", state.players[player].name);
            thread::sleep(Duration::from_millis(STEP_DELAY_MS));
        }
    }

    fn round_ended(&mut self, state: &GameState) {
        self.clear();
        self.show_board(state);
    }

    fn game_over(&mut self, outcome: &GameOutcome) {
        self.clear();
        match outcome {
            GameOutcome::EveryoneDrowned => {
                println!("Everyone drowned, the depths win");
            }
            GameOutcome::Winner { name, score } => {
                println!("{name} is the winner with {score} points");
            }
        }
    }
}
