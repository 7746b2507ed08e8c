//! Match controller.
//!
//! `Match` owns everything that changes during play: the players and their
//! scorecards, whose turn it is, the turn state and both RNG streams. All
//! mutation goes through `apply`, which either performs an action
//! completely or rejects it and leaves the match untouched.
//!
//! ## Turn flow
//!
//! 1. `RollFirst`
//! 2. optional holds, then `RollSecond` or `EndTurnEarly`
//! 3. up to two `Flip`s, then `ConfirmFlips` (sleeping ends the match here)
//! 4. `Choose`: the result is recorded and the next unfinished player is up
//!
//! Bots run the same sequence through `play_bot_turn`.

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::event::{GameEvent, MatchObserver};
use super::player::Player;
use super::result::MatchResult;
use super::view::{CandidateView, MatchView, PlayerView};
use crate::bot::DecisionPolicy;
use crate::core::{
    Action, ActionRecord, DiceSource, GameError, GameRng, MatchConfig, PlayerId, PlayerMap,
};
use crate::dice::{DiceSet, FlipOutcome, DICE_COUNT};
use crate::rules::{TurnPhase, TurnState};
use crate::scoring::{
    best_candidate, detect_all, Availability, Candidate, Candidates, Category, Scorecard,
};

/// A game of Cacho in progress.
pub struct Match {
    players: PlayerMap<Player>,
    current: PlayerId,
    turn: TurnState,
    turn_number: u32,
    sequence: u32,
    history: Vec<ActionRecord>,
    /// Detected when the flips are confirmed, cleared at the next turn.
    candidates: Candidates,
    /// Best combination right after the second roll; flips do not change it.
    summary: Option<String>,
    dice_source: Box<dyn DiceSource>,
    bot_rng: GameRng,
    observer: Option<Box<dyn MatchObserver>>,
    result: Option<MatchResult>,
}

impl Match {
    /// A match with seeded dice and no observer.
    pub fn new(config: MatchConfig) -> Result<Self, GameError> {
        Self::from_parts(config, None, None)
    }

    /// Build a match, optionally replacing the seeded dice.
    pub fn from_parts(
        config: MatchConfig,
        dice_source: Option<Box<dyn DiceSource>>,
        observer: Option<Box<dyn MatchObserver>>,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let rng = GameRng::new(config.seed);
        let dice_source =
            dice_source.unwrap_or_else(|| Box::new(rng.for_context("dice")) as Box<dyn DiceSource>);
        let players = PlayerMap::new(config.player_count(), |id| {
            Player::from_seat(&config.seats[id.index()])
        });

        info!(
            players = players.player_count(),
            bots = players.values().filter(|p| p.is_bot()).count(),
            seed = rng.seed(),
            "starting match"
        );

        let mut game = Self {
            players,
            current: PlayerId::new(0),
            turn: TurnState::new(),
            turn_number: 1,
            sequence: 0,
            history: Vec::new(),
            candidates: Candidates::new(),
            summary: None,
            dice_source,
            bot_rng: rng.for_context("bots"),
            observer,
            result: None,
        };
        game.emit(GameEvent::TurnStarted {
            player: game.current,
            turn: game.turn_number,
        });
        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        self.turn.dice()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Everything detected for the current dice, open or not.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    fn current_card(&self) -> &Scorecard {
        &self.players[self.current].scorecard
    }

    /// Candidates the current player may record.
    pub fn open_candidates(&self) -> impl Iterator<Item = &Candidate> + '_ {
        let card = self.current_card();
        self.candidates
            .iter()
            .filter(move |c| c.category.map_or(false, |cat| card.is_open(cat)))
    }

    /// Categories that may be killed. Empty unless selection is open and no
    /// candidate can be recorded.
    #[must_use]
    pub fn kill_options(&self) -> Vec<Category> {
        if self.turn.phase() != TurnPhase::AwaitingSelection
            || self.is_over()
            || self.open_candidates().next().is_some()
        {
            return Vec::new();
        }
        self.current_card().open_categories().collect()
    }

    /// Intents accepted right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_over() {
            return Vec::new();
        }

        match self.turn.phase() {
            TurnPhase::AwaitingFirstRoll => vec![Action::RollFirst],
            TurnPhase::AfterFirstRoll => (0..DICE_COUNT)
                .map(Action::ToggleHold)
                .chain([Action::RollSecond, Action::EndTurnEarly])
                .collect(),
            TurnPhase::FlipPhase => (0..DICE_COUNT)
                .filter(|&i| self.turn.dice().can_flip(i))
                .map(Action::Flip)
                .chain([Action::ConfirmFlips])
                .collect(),
            TurnPhase::AwaitingSelection => {
                let open: Vec<Action> = self
                    .open_candidates()
                    .filter_map(|c| c.category)
                    .map(Action::Choose)
                    .collect();
                if open.is_empty() {
                    self.kill_options().into_iter().map(Action::Choose).collect()
                } else {
                    open
                }
            }
        }
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> MatchView {
        let dice = self.turn.dice();
        let card = self.current_card();

        let candidates = self
            .candidates
            .iter()
            .map(|c| CandidateView {
                candidate: c.clone(),
                availability: c.category.map_or(Availability::Open, |cat| card.availability(cat)),
            })
            .collect();

        let summary = if self.turn.phase() == TurnPhase::FlipPhase {
            self.summary.clone()
        } else {
            None
        };

        MatchView {
            players: self
                .players
                .iter()
                .map(|(id, p)| PlayerView {
                    id,
                    name: p.name.clone(),
                    is_bot: p.is_bot(),
                    scorecard: p.scorecard.clone(),
                    total: p.total(),
                    finished: p.is_finished(),
                })
                .collect(),
            current_player: self.current,
            phase: self.turn.phase(),
            dice: *dice.values(),
            held: *dice.held(),
            flipped: *dice.flipped(),
            roll_count: self.turn.roll_count(),
            flip_count: self.turn.flip_count(),
            hand_eligible: self.turn.hand_eligible(),
            candidates,
            kill_options: self.kill_options(),
            summary,
            result: self.result.clone(),
        }
    }

    // === Intents ===

    pub fn roll_first(&mut self) -> Result<(), GameError> {
        self.apply(Action::RollFirst)
    }

    pub fn toggle_hold(&mut self, index: usize) -> Result<(), GameError> {
        self.apply(Action::ToggleHold(index))
    }

    pub fn roll_second(&mut self) -> Result<(), GameError> {
        self.apply(Action::RollSecond)
    }

    pub fn end_turn_early(&mut self) -> Result<(), GameError> {
        self.apply(Action::EndTurnEarly)
    }

    pub fn flip(&mut self, index: usize) -> Result<(), GameError> {
        self.apply(Action::Flip(index))
    }

    pub fn confirm_flip_phase(&mut self) -> Result<(), GameError> {
        self.apply(Action::ConfirmFlips)
    }

    pub fn choose_combination(&mut self, category: Category) -> Result<(), GameError> {
        self.apply(Action::Choose(category))
    }

    /// Apply one action for the current player.
    pub fn apply(&mut self, action: Action) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::MatchFinished);
        }

        let player = self.current;
        let turn = self.turn_number;
        let sequence = self.sequence + 1;

        let outcome = match action {
            Action::RollFirst => self.do_roll_first(),
            Action::ToggleHold(index) => self.do_toggle_hold(index),
            Action::RollSecond => self.do_roll_second(),
            Action::EndTurnEarly => self.do_end_turn_early(),
            Action::Flip(index) => self.do_flip(index),
            Action::ConfirmFlips => self.open_selection(),
            Action::Choose(category) => self.do_choose(category),
        };

        match outcome {
            Ok(()) => {
                debug!(%player, %action, turn, "action applied");
                self.history.push(ActionRecord::new(player, action, turn, sequence));
                if self.turn_number == turn {
                    self.sequence = sequence;
                }
                Ok(())
            }
            Err(err) => {
                warn!(%player, %action, %err, "action rejected");
                Err(err)
            }
        }
    }

    fn do_roll_first(&mut self) -> Result<(), GameError> {
        self.turn.roll_first(self.dice_source.as_mut())?;
        self.emit(GameEvent::Rolled {
            player: self.current,
            roll: 1,
            values: *self.turn.dice().values(),
        });
        Ok(())
    }

    fn do_toggle_hold(&mut self, index: usize) -> Result<(), GameError> {
        let held = self.turn.toggle_hold(index)?;
        self.emit(GameEvent::HoldToggled { index, held });
        Ok(())
    }

    fn do_roll_second(&mut self) -> Result<(), GameError> {
        self.turn.roll_second(self.dice_source.as_mut())?;
        self.summary = best_candidate(self.turn.dice().values()).map(|c| c.summary());
        self.emit(GameEvent::Rolled {
            player: self.current,
            roll: 2,
            values: *self.turn.dice().values(),
        });
        self.emit(GameEvent::FlipPhaseStarted {
            hand_eligible: self.turn.hand_eligible(),
        });
        Ok(())
    }

    fn do_end_turn_early(&mut self) -> Result<(), GameError> {
        self.turn.end_turn_early()?;
        self.emit(GameEvent::FlipPhaseStarted {
            hand_eligible: self.turn.hand_eligible(),
        });
        Ok(())
    }

    fn do_flip(&mut self, index: usize) -> Result<(), GameError> {
        let outcome = self.turn.flip(index)?;
        self.emit(GameEvent::Flipped {
            index,
            value: self.turn.dice().values()[index],
            flipped: outcome == FlipOutcome::Flipped,
        });
        Ok(())
    }

    /// Confirm the flips and evaluate the dice.
    fn open_selection(&mut self) -> Result<(), GameError> {
        self.turn.ensure(Action::ConfirmFlips, TurnPhase::FlipPhase)?;

        let player = self.current;
        let values = *self.turn.dice().values();
        let candidates = detect_all(&values, self.turn.hand_eligible());

        if candidates.iter().any(Candidate::is_sleeping) {
            self.turn.confirm_flips()?;
            self.candidates = candidates;
            self.emit(GameEvent::Sleeping {
                player,
                face: values[0],
            });
            self.finish(MatchResult::Sleeping { winner: player });
            return Ok(());
        }

        let card = self.current_card();
        let open = candidates
            .iter()
            .filter(|c| c.category.map_or(false, |cat| card.is_open(cat)))
            .count();
        if open == 0 && card.open_categories().next().is_none() {
            warn!(%player, "selection requested with no open category");
            return Err(GameError::NoOpenCategory(player));
        }

        self.turn.confirm_flips()?;
        self.candidates = candidates;
        self.emit(GameEvent::SelectionOpened {
            open,
            must_kill: open == 0,
        });
        Ok(())
    }

    fn do_choose(&mut self, category: Category) -> Result<(), GameError> {
        self.turn
            .ensure(Action::Choose(category), TurnPhase::AwaitingSelection)?;

        let player = self.current;
        let (points, killed) = {
            let mut open = self.open_candidates().peekable();
            if open.peek().is_some() {
                let points = open
                    .find(|c| c.category == Some(category))
                    .map(Candidate::score)
                    .ok_or(GameError::CategoryUnavailable(category))?;
                (points, false)
            } else if self.current_card().is_open(category) {
                (0, true)
            } else {
                return Err(GameError::CategoryUnavailable(category));
            }
        };

        self.players[player].scorecard.record(category, points)?;
        if killed {
            self.emit(GameEvent::Killed { player, category });
        } else {
            self.emit(GameEvent::Scored {
                player,
                category,
                points,
            });
        }

        if self.players.values().all(Player::is_finished) {
            if let Some(result) = MatchResult::by_total(&self.players) {
                self.finish(result);
            }
        } else {
            self.advance();
        }
        Ok(())
    }

    /// Hand the dice to the next player who still has plays left.
    fn advance(&mut self) {
        let count = self.players.player_count();
        self.turn.reset();
        self.candidates.clear();
        self.summary = None;

        let mut next = self.current.next(count);
        for _ in 0..count {
            if !self.players[next].is_finished() {
                break;
            }
            self.emit(GameEvent::PlayerSkipped { player: next });
            next = next.next(count);
        }

        self.current = next;
        self.turn_number += 1;
        self.sequence = 0;
        self.emit(GameEvent::TurnStarted {
            player: next,
            turn: self.turn_number,
        });
    }

    fn finish(&mut self, result: MatchResult) {
        info!(winner = %result.winner(), turn = self.turn_number, "match over");
        self.result = Some(result.clone());
        self.emit(GameEvent::MatchOver { result });
    }

    fn emit(&mut self, event: GameEvent) {
        debug!(?event, "event");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }

    // === Bots ===

    /// Play the current seat's turn if it is a bot.
    ///
    /// Returns `Ok(false)` without doing anything for a human seat.
    pub fn play_bot_turn(&mut self) -> Result<bool, GameError> {
        if self.is_over() {
            return Err(GameError::MatchFinished);
        }
        let Some(policy) = self.players[self.current].bot else {
            return Ok(false);
        };
        self.play_turn_with(&policy)?;
        Ok(true)
    }

    /// Play bot turns until a human is up or the match ends.
    ///
    /// Returns how many turns were played.
    pub fn run_bots(&mut self) -> Result<usize, GameError> {
        let mut played = 0;
        while !self.is_over() && self.play_bot_turn()? {
            played += 1;
        }
        Ok(played)
    }

    /// Play a whole turn for the current player using `policy`.
    ///
    /// The turn must not have started yet.
    pub fn play_turn_with<P: DecisionPolicy + ?Sized>(&mut self, policy: &P) -> Result<(), GameError> {
        let player = self.current;
        self.apply(Action::RollFirst)?;

        let reroll = policy.reroll(self.turn.dice(), &self.players[player].scorecard, &mut self.bot_rng);
        if reroll {
            let mask = policy.hold(self.turn.dice(), &self.players[player].scorecard, &mut self.bot_rng);
            let toggles: SmallVec<[usize; DICE_COUNT]> = (0..DICE_COUNT)
                .filter(|&i| mask[i] != self.turn.dice().held()[i])
                .collect();
            for index in toggles {
                self.apply(Action::ToggleHold(index))?;
            }
            self.apply(Action::RollSecond)?;
        } else {
            self.apply(Action::EndTurnEarly)?;
        }

        let flips = policy.flips(self.turn.dice(), &self.players[player].scorecard, &mut self.bot_rng);
        for index in flips {
            self.apply(Action::Flip(index))?;
        }

        self.apply(Action::ConfirmFlips)?;
        if self.is_over() {
            return Ok(());
        }

        let selection = policy
            .select(&self.candidates, &self.players[player].scorecard, &mut self.bot_rng)
            .ok_or(GameError::NoOpenCategory(player))?;
        debug!(%player, category = %selection.category, points = selection.points, "bot selection");
        self.apply(Action::Choose(selection.category))
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("players", &self.players)
            .field("current", &self.current)
            .field("turn", &self.turn)
            .field("turn_number", &self.turn_number)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
