//! Per-turn state machine.
//!
//! A [`TurnEngine`] exclusively borrows the game state for one player's
//! turn. The caller loops: read [`TurnEngine::available_actions`], apply the
//! chosen one, and handle the returned [`TurnProgress`]. A plain dice move
//! suspends at [`TurnProgress::AwaitingMove`] until the caller resolves the
//! pair choice; grab, drop, and pass end the turn; an empty menu ends it too.

use crate::action::{ApplyError, TurnAction, available_actions};
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{GameState, Player};

/// The three movement distances offered by a plain dice move: each unordered
/// pair of the three dice, summed, minus the carried-treasure burden,
/// floored at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOptions {
    pub dice: [u32; 3],
    pub choices: [usize; 3],
}

/// What happened during a walk: the positions visited step by step (after
/// collision displacement) and whether the player reached the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkReport {
    /// Distance the player was entitled to; forfeited steps are not walked.
    pub distance: usize,
    /// Position after each completed step, displacement included.
    pub path: Vec<usize>,
    /// The walk ended at position 0; the player has passed for the round.
    pub surfaced: bool,
}

/// Result of applying one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnProgress {
    /// Non-terminal action applied; recompute the menu and continue.
    Continue,
    /// Dice rolled; the caller must pick one option via
    /// [`TurnEngine::resolve_move`].
    AwaitingMove(MoveOptions),
    /// Boosted move applied. `total` is the raw three-dice sum, revealed to
    /// the player.
    BoostMoved { total: u32, report: WalkReport },
    /// Terminal action applied; the turn is over.
    TurnOver,
}

/// State machine driving one player's turn.
pub struct TurnEngine<'a> {
    state: &'a mut GameState,
    player: usize,
    moved: bool,
    pending: Option<MoveOptions>,
}

impl<'a> TurnEngine<'a> {
    /// Start a turn for `player`. Returns `None` when the player is not
    /// eligible this round (already banked out at the surface).
    ///
    /// Turn entry clears the turn-scoped `boosting` flag and pays the burden
    /// cost: shared air drops by one per carried treasure, before any action.
    pub fn begin(state: &'a mut GameState, player: usize) -> Result<Option<Self>, ApplyError> {
        let p = state
            .players
            .get_mut(player)
            .ok_or(ApplyError::UnknownPlayer(player))?;
        if !p.is_eligible() {
            return Ok(None);
        }

        p.boosting = false;
        let burden = p.burden();
        state.round.reduce_air(burden);

        Ok(Some(Self {
            state,
            player,
            moved: false,
            pending: None,
        }))
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.state.players[self.player]
    }

    /// The current action menu. Empty while a dice move awaits resolution
    /// and once no action is legal, which ends the turn.
    pub fn available_actions(&self) -> Vec<TurnAction> {
        if self.pending.is_some() {
            return Vec::new();
        }
        available_actions(self.state, self.player, self.moved)
    }

    /// Apply one action from the current menu.
    pub fn apply(
        &mut self,
        action: TurnAction,
        rng: &mut dyn RngOracle,
    ) -> Result<TurnProgress, ApplyError> {
        if self.pending.is_some() {
            return Err(ApplyError::PendingMove);
        }
        if !self.available_actions().contains(&action) {
            return Err(ApplyError::NotAvailable(action));
        }

        match action {
            TurnAction::StartSurfacing => {
                self.state.players[self.player].surfacing = true;
                Ok(TurnProgress::Continue)
            }
            TurnAction::Move => {
                let options = self.roll_options(rng);
                self.pending = Some(options);
                Ok(TurnProgress::AwaitingMove(options))
            }
            TurnAction::BoostMove => {
                self.state.players[self.player].boosting = true;
                self.state.round.reduce_air(GameConfig::BOOST_AIR_COST);

                let dice = roll_dice(rng);
                let total: u32 = dice.iter().sum();
                let distance = total.saturating_sub(self.player().burden()) as usize;
                let report = self.walk(distance);
                self.moved = true;
                Ok(TurnProgress::BoostMoved { total, report })
            }
            TurnAction::GrabTreasure => {
                let slot = self.player().position - 1;
                if let Some(value) = self.state.board.grab(slot) {
                    self.state.players[self.player].carried.push(value);
                }
                Ok(TurnProgress::TurnOver)
            }
            TurnAction::DropTreasure => {
                let slot = self.player().position - 1;
                if let Some(value) = self.state.players[self.player].carried.pop() {
                    self.state.board.drop_at(slot, value);
                }
                Ok(TurnProgress::TurnOver)
            }
            TurnAction::Pass => Ok(TurnProgress::TurnOver),
        }
    }

    /// Resolve a pending dice move with the chosen option index and walk it.
    pub fn resolve_move(&mut self, choice: usize) -> Result<WalkReport, ApplyError> {
        let options = self.pending.take().ok_or(ApplyError::NoPendingMove)?;
        let distance = *options
            .choices
            .get(choice)
            .ok_or(ApplyError::InvalidMoveChoice { index: choice })?;
        let report = self.walk(distance);
        self.moved = true;
        Ok(report)
    }

    fn roll_options(&mut self, rng: &mut dyn RngOracle) -> MoveOptions {
        let dice = roll_dice(rng);
        let burden = self.player().burden();
        let distance = |a: u32, b: u32| (a + b).saturating_sub(burden) as usize;
        MoveOptions {
            dice,
            choices: [
                distance(dice[0], dice[1]),
                distance(dice[0], dice[2]),
                distance(dice[1], dice[2]),
            ],
        }
    }

    /// Step one slot at a time in the direction given by `surfacing`.
    ///
    /// After every step: reaching the surface marks the player passed and
    /// forfeits the remaining steps; landing on another player displaces one
    /// extra step in the same direction, checked once per step and subject
    /// to the same surface check. Depth is clamped at the deepest slot.
    fn walk(&mut self, distance: usize) -> WalkReport {
        let deepest = self.state.board.slot_count();
        let others: Vec<usize> = self
            .state
            .players
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != self.player)
            .map(|(_, other)| other.position)
            .collect();

        let player = &mut self.state.players[self.player];
        let mut path = Vec::with_capacity(distance);
        let mut surfaced = false;

        for _ in 0..distance {
            step(player, deepest);
            if player.position == 0 {
                player.passed = true;
                surfaced = true;
                path.push(0);
                break;
            }
            if others.contains(&player.position) {
                step(player, deepest);
                if player.position == 0 {
                    player.passed = true;
                    surfaced = true;
                    path.push(0);
                    break;
                }
            }
            path.push(player.position);
        }

        WalkReport {
            distance,
            path,
            surfaced,
        }
    }
}

fn step(player: &mut Player, deepest: usize) {
    if player.surfacing {
        player.position -= 1;
    } else if player.position < deepest {
        player.position += 1;
    }
}

fn roll_dice(rng: &mut dyn RngOracle) -> [u32; 3] {
    [
        rng.range_inclusive(0, GameConfig::DIE_MAX),
        rng.range_inclusive(0, GameConfig::DIE_MAX),
        rng.range_inclusive(0, GameConfig::DIE_MAX),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRng;

    fn state_with(names: &[&str]) -> GameState {
        // Every slot seeded with value 1 via a constant sequence.
        let mut rng = SequenceRng::new(vec![1]);
        let names = names.iter().map(|s| s.to_string()).collect();
        GameState::new(names, GameConfig::default(), &mut rng).expect("valid roster")
    }

    /// Dice values pre-mapped through `range_inclusive(0, 3)`.
    fn dice(values: [u32; 3]) -> SequenceRng {
        SequenceRng::new(values.to_vec())
    }

    #[test]
    fn begin_pays_burden_and_clears_boosting() {
        let mut state = state_with(&["ada"]);
        state.players[0].position = 3;
        state.players[0].carried = vec![5, 6];
        state.players[0].boosting = true;

        let turn = TurnEngine::begin(&mut state, 0).expect("valid index");
        let turn = turn.expect("eligible");
        assert!(!turn.player().boosting);
        assert_eq!(turn.state().round.air(), 23);
    }

    #[test]
    fn banked_player_is_skipped() {
        let mut state = state_with(&["ada"]);
        state.players[0].surfacing = true;
        state.players[0].passed = true;

        assert!(TurnEngine::begin(&mut state, 0).expect("valid index").is_none());
    }

    #[test]
    fn unknown_player_is_rejected() {
        let mut state = state_with(&["ada"]);
        assert_eq!(
            TurnEngine::begin(&mut state, 7).err(),
            Some(ApplyError::UnknownPlayer(7))
        );
    }

    #[test]
    fn move_offers_pair_sums_minus_burden() {
        let mut state = state_with(&["ada"]);
        state.players[0].position = 4;
        state.players[0].carried = vec![9];

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([3, 2, 0]);
        let progress = turn.apply(TurnAction::Move, &mut rng).expect("move legal");

        // Pairs: 3+2, 3+0, 2+0, each minus burden 1.
        let TurnProgress::AwaitingMove(options) = progress else {
            panic!("expected pending move, got {progress:?}");
        };
        assert_eq!(options.dice, [3, 2, 0]);
        assert_eq!(options.choices, [4, 2, 1]);

        // Menu is empty until the choice is resolved.
        assert!(turn.available_actions().is_empty());

        let report = turn.resolve_move(0).expect("choice in range");
        assert_eq!(turn.player().position, 8);
        assert_eq!(report.path, vec![5, 6, 7, 8]);
        assert!(!report.surfaced);
    }

    #[test]
    fn burden_can_floor_movement_to_zero() {
        let mut state = state_with(&["ada"]);
        state.players[0].position = 4;
        state.players[0].carried = vec![1, 2, 3, 4, 5, 6, 7];

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([3, 3, 3]);
        let TurnProgress::AwaitingMove(options) = turn.apply(TurnAction::Move, &mut rng).unwrap()
        else {
            panic!("expected pending move");
        };
        assert_eq!(options.choices, [0, 0, 0]);

        let report = turn.resolve_move(1).unwrap();
        assert_eq!(report.path, Vec::<usize>::new());
        assert_eq!(turn.player().position, 4);
    }

    #[test]
    fn boost_pays_air_and_uses_all_three_dice() {
        let mut state = state_with(&["ada"]);
        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([3, 2, 1]);

        let progress = turn.apply(TurnAction::BoostMove, &mut rng).expect("boost legal");
        let TurnProgress::BoostMoved { total, report } = progress else {
            panic!("expected boosted move, got {progress:?}");
        };
        assert_eq!(total, 6);
        assert_eq!(report.distance, 6);
        assert_eq!(turn.player().position, 6);
        assert!(turn.player().boosting);
        // One air for the boost, zero burden.
        assert_eq!(turn.state().round.air(), 24);
    }

    #[test]
    fn boost_cannot_be_repeated_in_one_turn() {
        let mut state = state_with(&["ada"]);
        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([0, 0, 0]);

        turn.apply(TurnAction::BoostMove, &mut rng).expect("first boost");
        assert_eq!(
            turn.apply(TurnAction::BoostMove, &mut rng),
            Err(ApplyError::NotAvailable(TurnAction::BoostMove))
        );
    }

    #[test]
    fn surfacing_walk_stops_at_surface_and_passes() {
        let mut state = state_with(&["ada"]);
        state.players[0].position = 2;
        state.players[0].surfacing = true;

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([3, 3, 3]);
        let TurnProgress::AwaitingMove(_) = turn.apply(TurnAction::Move, &mut rng).unwrap() else {
            panic!("expected pending move");
        };

        let report = turn.resolve_move(0).expect("choice in range");
        assert_eq!(report.path, vec![1, 0]);
        assert!(report.surfaced);
        assert!(turn.player().passed);
        assert_eq!(turn.player().position, 0);
    }

    #[test]
    fn collision_displaces_one_extra_step() {
        let mut state = state_with(&["ada", "bo"]);
        state.players[0].position = 5;
        state.players[1].position = 6;

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([1, 0, 0]);
        let TurnProgress::AwaitingMove(options) = turn.apply(TurnAction::Move, &mut rng).unwrap()
        else {
            panic!("expected pending move");
        };
        assert_eq!(options.choices[0], 1);

        let report = turn.resolve_move(0).unwrap();
        // One step onto the occupied slot 6, displaced straight to 7.
        assert_eq!(report.path, vec![7]);
        assert_eq!(turn.player().position, 7);
    }

    #[test]
    fn displacement_onto_surface_counts_as_surfacing() {
        let mut state = state_with(&["ada", "bo"]);
        state.players[0].position = 2;
        state.players[0].surfacing = true;
        state.players[1].position = 1;

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([1, 0, 0]);
        turn.apply(TurnAction::Move, &mut rng).unwrap();
        let report = turn.resolve_move(0).unwrap();

        assert_eq!(report.path, vec![0]);
        assert!(report.surfaced);
        assert!(turn.player().passed);
    }

    #[test]
    fn walk_clamps_at_deepest_slot() {
        let mut state = state_with(&["ada"]);
        let deepest = state.board.slot_count();
        state.players[0].position = deepest - 1;

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([3, 3, 3]);
        turn.apply(TurnAction::Move, &mut rng).unwrap();
        turn.resolve_move(0).unwrap();

        assert_eq!(turn.player().position, deepest);
    }

    #[test]
    fn grab_transfers_top_value_and_ends_turn() {
        let mut state = state_with(&["ada"]);
        state.players[0].position = 5;
        state.players[0].carried = vec![3, 7];
        // Make slot 4 hold exactly [12].
        state.board.grab(4);
        state.board.drop_at(4, 12);

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([0, 0, 0]);
        turn.apply(TurnAction::Move, &mut rng).unwrap();
        turn.resolve_move(0).unwrap();

        let progress = turn.apply(TurnAction::GrabTreasure, &mut rng).unwrap();
        assert_eq!(progress, TurnProgress::TurnOver);
        assert_eq!(turn.player().carried, vec![3, 7, 12]);
        assert!(turn.state().board.slot(4).is_empty());
    }

    #[test]
    fn drop_returns_last_carried_value() {
        let mut state = state_with(&["ada"]);
        state.players[0].position = 5;
        state.players[0].carried = vec![3, 7];

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([0, 0, 0]);
        turn.apply(TurnAction::Move, &mut rng).unwrap();
        turn.resolve_move(0).unwrap();

        let progress = turn.apply(TurnAction::DropTreasure, &mut rng).unwrap();
        assert_eq!(progress, TurnProgress::TurnOver);
        assert_eq!(turn.player().carried, vec![3]);
        assert_eq!(turn.state().board.slot(4).last(), Some(&7));
    }

    #[test]
    fn grab_before_moving_is_a_contract_violation() {
        let mut state = state_with(&["ada"]);
        state.players[0].position = 5;

        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        let mut rng = dice([0, 0, 0]);
        assert_eq!(
            turn.apply(TurnAction::GrabTreasure, &mut rng),
            Err(ApplyError::NotAvailable(TurnAction::GrabTreasure))
        );
    }

    #[test]
    fn resolve_without_pending_move_fails() {
        let mut state = state_with(&["ada"]);
        let mut turn = TurnEngine::begin(&mut state, 0).unwrap().unwrap();
        assert_eq!(turn.resolve_move(0), Err(ApplyError::NoPendingMove));
    }
}
