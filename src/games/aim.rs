use rand::rngs::StdRng;
use rand::Rng;
use ratatui::layout::Rect;

use super::GameKind;
use crate::input::FrameInput;
use crate::score::Score;
use crate::timer::Timer;
use crate::util::average_ms;

pub const TARGET_COUNT: usize = 30;
/// Hit radius in terminal cells, around the target center.
pub const TARGET_RADIUS: u16 = 2;

/// Thirty targets, one at a time; the score is the average time per target
/// in ms.
#[derive(Debug)]
pub struct AimSession {
    /// Targets still to hit; only a registered hit decrements it.
    pub remaining: usize,
    /// Center of the current target, in terminal cells.
    pub target: (u16, u16),
    times: [f64; TARGET_COUNT],
    target_timer: Timer,
}

impl AimSession {
    pub fn new(play_area: Rect, rng: &mut StdRng) -> Self {
        Self {
            remaining: TARGET_COUNT,
            target: random_target(play_area, rng),
            times: [0.0; TARGET_COUNT],
            target_timer: Timer::stopwatch(true),
        }
    }

    pub fn update(
        &mut self,
        delta_ms: f64,
        input: &FrameInput,
        play_area: Rect,
        rng: &mut StdRng,
    ) -> Option<Score> {
        self.target_timer.update(delta_ms);

        if input.clicked && hits_target(input.pointer, self.target) {
            self.remaining -= 1;
            // The freed slot indexes this target's time: slot 29 holds the
            // first hit, slot 0 the last.
            self.times[self.remaining] = self.target_timer.time_passed();
            self.target = random_target(play_area, rng);
            self.target_timer.reset(true);
        }

        if self.remaining == 0 {
            return Some(Score {
                kind: GameKind::Aim,
                value: average_ms(&self.times),
            });
        }

        None
    }
}

fn hits_target(pointer: (u16, u16), target: (u16, u16)) -> bool {
    let dx = pointer.0 as i32 - target.0 as i32;
    let dy = pointer.1 as i32 - target.1 as i32;
    dx * dx + dy * dy <= (TARGET_RADIUS as i32).pow(2)
}

/// Random target center with the whole target inside the play area.
fn random_target(play_area: Rect, rng: &mut StdRng) -> (u16, u16) {
    let min_x = play_area.x + TARGET_RADIUS;
    let max_x = (play_area.x + play_area.width)
        .saturating_sub(TARGET_RADIUS + 1)
        .max(min_x);
    let min_y = play_area.y + TARGET_RADIUS;
    let max_y = (play_area.y + play_area.height)
        .saturating_sub(TARGET_RADIUS + 1)
        .max(min_y);

    (rng.gen_range(min_x..=max_x), rng.gen_range(min_y..=max_y))
}
