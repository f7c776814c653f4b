//! The guessing-game session state machine.
use serde::{Deserialize, Serialize};

use crate::results::{ResultsTable, SubsetKey};

/// Attempts granted to a fresh session.
pub const STARTING_ATTEMPTS: i32 = 2;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Accepting submissions.
    Active,
    /// Best subset found; terminal.
    Success,
    /// Attempts exhausted; terminal.
    Over,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Active => write!(f, "active"),
            SessionPhase::Success => write!(f, "success"),
            SessionPhase::Over => write!(f, "over"),
        }
    }
}

/// Why a submission produced no feedback at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The session already ended; terminal states accept nothing.
    SessionOver,
    /// No features were selected.
    EmptySelection,
    /// The combination was never precomputed. Silently dropped, matching
    /// the original demo; see DESIGN.md.
    UnknownSubset,
}

/// Evaluation of a submission that hit a precomputed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The submission matched the best subset exactly.
    Correct,
    /// Wrong subset; `attempts_left` is the counter value as shown to the
    /// player, read before the decrement.
    Incorrect { attempts_left: i32 },
    /// Wrong subset with no attempts remaining; the session is now over.
    Exhausted,
}

/// What one call to [`GuessSession::submit`] decided.
///
/// `Evaluated` outcomes always carry the canonical key so the presentation
/// layer can chart the chosen subset's record whether or not it was correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    Evaluated { key: SubsetKey, verdict: Verdict },
}

/// Mutable per-player session: the attempt counter and the terminal flags.
///
/// The attempt counter only ever decreases. It passes zero on the
/// game-over submission and lands at -1, which is the threshold the UI
/// uses to disable the feature checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessSession {
    attempts_remaining: i32,
    success: bool,
    over: bool,
}

impl Default for GuessSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessSession {
    /// Start a fresh session with [`STARTING_ATTEMPTS`] attempts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts_remaining: STARTING_ATTEMPTS,
            success: false,
            over: false,
        }
    }

    /// Attempts left before the game ends. Negative once the session is
    /// over and the final decrement has been applied.
    #[must_use]
    pub const fn attempts_remaining(&self) -> i32 {
        self.attempts_remaining
    }

    /// Whether the best subset was found.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Whether the attempts were exhausted.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the session is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.success || self.over
    }

    /// Whether the feature checkboxes should be disabled. This trips one
    /// decrement past the game-over transition, not at game over itself.
    #[must_use]
    pub const fn controls_locked(&self) -> bool {
        self.attempts_remaining < 0
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        if self.success {
            SessionPhase::Success
        } else if self.over {
            SessionPhase::Over
        } else {
            SessionPhase::Active
        }
    }

    /// Evaluate one submission against the precomputed table.
    ///
    /// Terminal sessions, empty selections, and unknown subsets are ignored
    /// without touching any state. A correct guess ends the session in
    /// `Success`. A wrong guess warns while attempts remain, ends the
    /// session in `Over` otherwise, and decrements the counter either way.
    pub fn submit(&mut self, table: &ResultsTable, selection: &SubsetKey) -> SubmitOutcome {
        if self.is_terminal() {
            return SubmitOutcome::Ignored(IgnoreReason::SessionOver);
        }
        if selection.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptySelection);
        }
        if !table.contains(selection) {
            return SubmitOutcome::Ignored(IgnoreReason::UnknownSubset);
        }

        if selection == table.best_subset() {
            self.success = true;
            return SubmitOutcome::Evaluated {
                key: selection.clone(),
                verdict: Verdict::Correct,
            };
        }

        let verdict = if self.attempts_remaining > 0 {
            Verdict::Incorrect {
                attempts_left: self.attempts_remaining,
            }
        } else {
            self.over = true;
            Verdict::Exhausted
        };
        self.attempts_remaining -= 1;

        SubmitOutcome::Evaluated {
            key: selection.clone(),
            verdict,
        }
    }
}
