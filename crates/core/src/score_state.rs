//! Score state module - owns both totals and the win/idle derivation
//!
//! Every command follows the same sequence: mutate the totals, recompute the
//! derived flags from the new `(red, blue)` pair, bump the revision. The flags
//! are only ever written by [`ScoreState::recompute`].

use tracing::{debug, info};

use crate::snapshot::{Phase, ScoreSnapshot};
use crate::types::{CounterAction, Player, IDLE_POINTS, STARTING_POINTS};

/// Complete score state for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    red_points: i32,
    blue_points: i32,
    red_won: bool,
    blue_won: bool,
    no_game_started: bool,
    /// Total "Start Game" resets to.
    starting_points: i32,
    /// Incremented once per command that changed a total.
    revision: u64,
}

impl ScoreState {
    /// Create an idle session (both totals at 0).
    pub fn new() -> Self {
        Self::with_starting_points(STARTING_POINTS)
    }

    /// Create an idle session whose "Start Game" resets to `points`.
    pub fn with_starting_points(points: i32) -> Self {
        let mut state = Self {
            red_points: IDLE_POINTS,
            blue_points: IDLE_POINTS,
            red_won: false,
            blue_won: false,
            no_game_started: false,
            starting_points: points,
            revision: 0,
        };
        state.recompute();
        state
    }

    /// Reset both totals to the starting total.
    ///
    /// Allowed from any phase. Returns whether either total changed; restarting
    /// a fresh game that nobody has scored in yet is not a change.
    pub fn start_game(&mut self) -> bool {
        let start = self.starting_points;
        let changed = self.red_points != start || self.blue_points != start;
        self.red_points = start;
        self.blue_points = start;
        self.recompute();

        info!(points = start, "game started");
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
        changed
    }

    /// Add `delta` to `player`'s total.
    ///
    /// Ignored (returns `false`) before the first game and after a win. Totals
    /// have no floor and may go negative.
    pub fn apply_score(&mut self, player: Player, delta: i32) -> bool {
        if !self.scoring_enabled() {
            debug!(
                player = player.as_str(),
                delta,
                phase = ?self.phase(),
                "score ignored"
            );
            return false;
        }
        let total = match player {
            Player::Red => &mut self.red_points,
            Player::Blue => &mut self.blue_points,
        };
        let next = total.saturating_add(delta);
        if next == *total {
            return false;
        }
        *total = next;
        self.recompute();
        self.revision = self.revision.wrapping_add(1);

        if let Some(winner) = self.phase().winner() {
            info!(
                winner = winner.as_str(),
                red = self.red_points,
                blue = self.blue_points,
                "game won"
            );
        }
        true
    }

    /// Apply a view-layer command.
    ///
    /// Returns whether the state changed (i.e. a re-render is needed).
    pub fn apply_action(&mut self, action: CounterAction) -> bool {
        match action.score_delta() {
            Some((player, delta)) => self.apply_score(player, delta),
            None => self.start_game(),
        }
    }

    fn recompute(&mut self) {
        let (red, blue) = (self.red_points, self.blue_points);
        self.blue_won = red <= 0 && blue > 0;
        self.red_won = blue <= 0 && red > 0;
        self.no_game_started = red == 0 && blue == 0;
    }

    fn scoring_enabled(&self) -> bool {
        !(self.no_game_started || self.red_won || self.blue_won)
    }

    pub fn red_points(&self) -> i32 {
        self.red_points
    }

    pub fn blue_points(&self) -> i32 {
        self.blue_points
    }

    pub fn points(&self, player: Player) -> i32 {
        match player {
            Player::Red => self.red_points,
            Player::Blue => self.blue_points,
        }
    }

    pub fn red_won(&self) -> bool {
        self.red_won
    }

    pub fn blue_won(&self) -> bool {
        self.blue_won
    }

    pub fn no_game_started(&self) -> bool {
        self.no_game_started
    }

    pub fn starting_points(&self) -> i32 {
        self.starting_points
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn phase(&self) -> Phase {
        self.snapshot().phase()
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            red_points: self.red_points,
            blue_points: self.blue_points,
            red_won: self.red_won,
            blue_won: self.blue_won,
            no_game_started: self.no_game_started,
            revision: self.revision,
        }
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}
