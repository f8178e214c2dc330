use std::collections::HashMap;
use std::fmt;

use crate::games::GameKind;

/// Raw result of one finished game. The value is milliseconds for the
/// time-based games and the reached level for the memory games; `Display`
/// renders the human-facing form shown on the endgame screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub kind: GameKind,
    pub value: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.lower_is_better() {
            write!(f, "{} ms", self.value)
        } else {
            write!(f, "Level {}", self.value)
        }
    }
}

/// In-memory best score per game, kept for the lifetime of the process.
/// Scores only land here when the player explicitly saves from the endgame
/// screen.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    best: HashMap<GameKind, u32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self, kind: GameKind) -> Option<u32> {
        self.best.get(&kind).copied()
    }

    /// Menu row label: "--- ms" / "--- pts" until a score is saved.
    pub fn menu_label(&self, kind: GameKind) -> String {
        match self.best(kind) {
            Some(value) => format!("{} {}", value, kind.unit()),
            None => format!("--- {}", kind.unit()),
        }
    }

    /// Keep `score` if it beats the stored best under the kind's comparison
    /// (time games: lower wins; memory games: higher wins). The first
    /// recording for a kind always lands. Returns whether the board changed.
    pub fn record_if_better(&mut self, score: Score) -> bool {
        let better = match self.best(score.kind) {
            None => true,
            Some(best) if score.kind.lower_is_better() => score.value < best,
            Some(best) => score.value > best,
        };

        if better {
            self.best.insert(score.kind, score.value);
        }
        better
    }
}
