use crate::input::FrameInput;
use crate::score::Score;

/// Placeholder for the sequence memory game: selectable from the menu, but
/// the round never does anything and never produces a score.
#[derive(Debug, Default)]
pub struct SequenceSession;

impl SequenceSession {
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self, _delta_ms: f64, _input: &FrameInput) -> Option<Score> {
        None
    }
}
