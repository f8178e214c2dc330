use itertools::Itertools;
use rand::rngs::StdRng;
use rand::Rng;

use super::GameKind;
use crate::input::FrameInput;
use crate::score::Score;
use crate::timer::Timer;

pub const MAX_LEVEL: usize = 15;

const BASE_MEMORIZE_MS: f64 = 1700.0;
const MEMORIZE_STEP_MS: f64 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPhase {
    /// The secret sequence is on screen while the budget timer drains.
    Memorizing,
    /// The player types the sequence back.
    Typing,
}

/// Per-digit verdict shown on the endgame screen. Marks survive round
/// boundaries within one game; only a fresh session clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Correct,
    Wrong,
}

/// Memorize an ever-longer digit sequence; the score is the reached level.
#[derive(Debug)]
pub struct NumberSession {
    pub phase: NumberPhase,
    /// Current level, 1..=MAX_LEVEL; also the secret sequence's length.
    pub round: usize,
    digits: Vec<u8>,
    /// Digits typed so far this round; never longer than `round`.
    pub answer: String,
    marks: [Mark; MAX_LEVEL],
    memorize_budget_ms: f64,
    memorize_timer: Timer,
}

impl NumberSession {
    pub fn new(rng: &mut StdRng) -> Self {
        Self {
            phase: NumberPhase::Memorizing,
            round: 1,
            digits: random_digits(1, rng),
            answer: String::new(),
            marks: [Mark::Correct; MAX_LEVEL],
            memorize_budget_ms: BASE_MEMORIZE_MS,
            memorize_timer: Timer::countdown(BASE_MEMORIZE_MS, true),
        }
    }

    /// The sequence to memorize, as displayed.
    pub fn secret(&self) -> String {
        self.digits.iter().join("")
    }

    pub fn mark(&self, index: usize) -> Mark {
        self.marks[index]
    }

    /// Fraction of the memorize budget still left; drives the progress bar.
    pub fn memorize_progress(&self) -> f64 {
        self.memorize_timer.time_remaining() / self.memorize_budget_ms
    }

    pub fn update(
        &mut self,
        delta_ms: f64,
        input: &FrameInput,
        rng: &mut StdRng,
    ) -> Option<Score> {
        match self.phase {
            NumberPhase::Memorizing => {
                self.memorize_timer.update(delta_ms);

                if self.memorize_timer.is_finished() {
                    self.phase = NumberPhase::Typing;
                    self.answer.clear();
                }
            }
            NumberPhase::Typing => {
                if let Some(digit) = input.digit {
                    if self.answer.len() < self.round {
                        self.answer.push((b'0' + digit) as char);
                    }
                }

                if input.backspace {
                    self.answer.pop();
                }

                // Submitting an incomplete answer is ignored.
                if input.submit && self.answer.len() == self.round {
                    return self.grade(rng);
                }
            }
        }

        None
    }

    fn grade(&mut self, rng: &mut StdRng) -> Option<Score> {
        for (i, typed) in self.answer.bytes().enumerate() {
            if typed - b'0' != self.digits[i] {
                self.marks[i] = Mark::Wrong;
            }
        }

        let any_wrong = self.marks.contains(&Mark::Wrong);
        if any_wrong || self.round == MAX_LEVEL {
            // A fully correct top level is worth one extra point.
            if !any_wrong && self.round == MAX_LEVEL {
                self.round += 1;
            }
            return Some(Score {
                kind: GameKind::Number,
                value: self.round as u32,
            });
        }

        self.round += 1;
        self.digits = random_digits(self.round, rng);
        self.memorize_budget_ms += MEMORIZE_STEP_MS;
        self.memorize_timer = Timer::countdown(self.memorize_budget_ms, true);
        self.phase = NumberPhase::Memorizing;
        None
    }
}

fn random_digits(len: usize, rng: &mut StdRng) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..=9u8)).collect()
}
