//! Session: a score state wired to a change observer.
//!
//! The view layer owns a `Session` and only talks to the score state through
//! it, so every command that changes a total is followed by exactly one
//! [`ScoreObserver::state_changed`] call carrying the new snapshot.

use crate::score_state::ScoreState;
use crate::snapshot::ScoreSnapshot;
use crate::types::{CounterAction, Player};

/// Receives the new snapshot after each state-changing command.
pub trait ScoreObserver {
    fn state_changed(&mut self, snap: &ScoreSnapshot);
}

impl<F> ScoreObserver for F
where
    F: FnMut(&ScoreSnapshot),
{
    fn state_changed(&mut self, snap: &ScoreSnapshot) {
        self(snap)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl ScoreObserver for Detached {
    fn state_changed(&mut self, _snap: &ScoreSnapshot) {}
}

#[derive(Debug, Clone)]
pub struct Session<O> {
    state: ScoreState,
    observer: O,
}

impl<O: ScoreObserver> Session<O> {
    pub fn new(state: ScoreState, observer: O) -> Self {
        Self { state, observer }
    }

    pub fn start_game(&mut self) -> bool {
        let changed = self.state.start_game();
        self.notify_if(changed)
    }

    pub fn apply_score(&mut self, player: Player, delta: i32) -> bool {
        let changed = self.state.apply_score(player, delta);
        self.notify_if(changed)
    }

    pub fn apply_action(&mut self, action: CounterAction) -> bool {
        let changed = self.state.apply_action(action);
        self.notify_if(changed)
    }

    fn notify_if(&mut self, changed: bool) -> bool {
        if changed {
            let snap = self.state.snapshot();
            self.observer.state_changed(&snap);
        }
        changed
    }

    pub fn state(&self) -> &ScoreState {
        &self.state
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        self.state.snapshot()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_parts(self) -> (ScoreState, O) {
        (self.state, self.observer)
    }
}
