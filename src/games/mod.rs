pub mod aim;
pub mod number;
pub mod reaction;
pub mod sequence;

pub use aim::AimSession;
pub use number::{Mark, NumberPhase, NumberSession};
pub use reaction::{ReactionPhase, ReactionSession};
pub use sequence::SequenceSession;

use rand::rngs::StdRng;
use ratatui::layout::Rect;

use crate::input::FrameInput;
use crate::score::Score;

/// The four mini game variants offered from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum GameKind {
    #[strum(serialize = "Reaction Time")]
    Reaction,
    #[strum(serialize = "Aim Trainer")]
    Aim,
    #[strum(serialize = "Number Memory")]
    Number,
    #[strum(serialize = "Sequence Memory")]
    Sequence,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Reaction,
        GameKind::Aim,
        GameKind::Number,
        GameKind::Sequence,
    ];

    /// Time-based games rank lower scores first; the memory games rank
    /// higher levels first.
    pub fn lower_is_better(self) -> bool {
        matches!(self, GameKind::Reaction | GameKind::Aim)
    }

    pub fn unit(self) -> &'static str {
        if self.lower_is_better() {
            "ms"
        } else {
            "pts"
        }
    }

    /// One-line instructions shown on the pregame screen.
    pub fn instructions(self) -> &'static str {
        match self {
            GameKind::Reaction => "When the red box turns green, click as quickly as you can.",
            GameKind::Aim => "Hit 30 targets as quickly as you can.",
            GameKind::Number => {
                "The average person can remember 7 numbers at once. Can you do more?"
            }
            GameKind::Sequence => "Memorize the pattern.",
        }
    }
}

/// Live, mutable state for the variant being played. A fresh session is
/// allocated on every game start; dropping the old one is the whole reset.
#[derive(Debug)]
pub enum Session {
    Reaction(ReactionSession),
    Aim(AimSession),
    Number(NumberSession),
    Sequence(SequenceSession),
}

impl Session {
    pub fn new(kind: GameKind, play_area: Rect, rng: &mut StdRng) -> Self {
        match kind {
            GameKind::Reaction => Session::Reaction(ReactionSession::new(rng)),
            GameKind::Aim => Session::Aim(AimSession::new(play_area, rng)),
            GameKind::Number => Session::Number(NumberSession::new(rng)),
            GameKind::Sequence => Session::Sequence(SequenceSession::new()),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Session::Reaction(_) => GameKind::Reaction,
            Session::Aim(_) => GameKind::Aim,
            Session::Number(_) => GameKind::Number,
            Session::Sequence(_) => GameKind::Sequence,
        }
    }

    /// Advance the active game by one step. Returns the final score once
    /// the variant's terminal condition is reached.
    pub fn update(
        &mut self,
        delta_ms: f64,
        input: &FrameInput,
        play_area: Rect,
        rng: &mut StdRng,
    ) -> Option<Score> {
        match self {
            Session::Reaction(session) => session.update(delta_ms, input.clicked, rng),
            Session::Aim(session) => session.update(delta_ms, input, play_area, rng),
            Session::Number(session) => session.update(delta_ms, input, rng),
            Session::Sequence(session) => session.update(delta_ms, input),
        }
    }
}
