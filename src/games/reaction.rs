use rand::rngs::StdRng;
use rand::Rng;

use super::GameKind;
use crate::score::Score;
use crate::timer::Timer;
use crate::util::average_ms;

pub const MAX_ROUNDS: usize = 5;

const MIN_WAIT_MS: u64 = 1500;
const MAX_WAIT_MS: u64 = 3500;

/// Sub-state of one reaction trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionPhase {
    /// Red screen; clicking now is a false start.
    Waiting,
    /// Green screen; the stopwatch is running.
    Go,
    /// False start; the next click restarts the wait without consuming the
    /// round.
    TooEarly,
    /// A sample was recorded; the next click begins the next round.
    Scored,
}

/// Five timed trials; the score is the average reaction time in ms.
#[derive(Debug)]
pub struct ReactionSession {
    pub phase: ReactionPhase,
    /// Current trial, 1..=MAX_ROUNDS.
    pub round: usize,
    samples: [f64; MAX_ROUNDS],
    wait_timer: Timer,
    reaction_timer: Timer,
}

impl ReactionSession {
    pub fn new(rng: &mut StdRng) -> Self {
        Self {
            phase: ReactionPhase::Waiting,
            round: 1,
            samples: [0.0; MAX_ROUNDS],
            wait_timer: random_wait(rng),
            reaction_timer: Timer::stopwatch(false),
        }
    }

    /// The sample recorded for the current round, for the "{n} ms" message.
    pub fn last_sample_ms(&self) -> u32 {
        self.samples[self.round - 1].round() as u32
    }

    pub fn update(&mut self, delta_ms: f64, clicked: bool, rng: &mut StdRng) -> Option<Score> {
        match self.phase {
            ReactionPhase::Waiting => {
                self.wait_timer.update(delta_ms);

                // A click on the exact finishing step loses to the green light.
                if self.wait_timer.is_finished() {
                    self.phase = ReactionPhase::Go;
                    self.reaction_timer.reset(true);
                } else if clicked {
                    self.phase = ReactionPhase::TooEarly;
                }
            }
            ReactionPhase::Go => {
                self.reaction_timer.update(delta_ms);

                if clicked {
                    self.samples[self.round - 1] = self.reaction_timer.time_passed();

                    if self.round >= MAX_ROUNDS {
                        return Some(Score {
                            kind: GameKind::Reaction,
                            value: average_ms(&self.samples),
                        });
                    }
                    self.phase = ReactionPhase::Scored;
                }
            }
            ReactionPhase::TooEarly => {
                if clicked {
                    self.restart_wait(rng);
                }
            }
            ReactionPhase::Scored => {
                if clicked {
                    self.round += 1;
                    self.restart_wait(rng);
                }
            }
        }

        None
    }

    fn restart_wait(&mut self, rng: &mut StdRng) {
        self.phase = ReactionPhase::Waiting;
        self.wait_timer = random_wait(rng);
    }
}

fn random_wait(rng: &mut StdRng) -> Timer {
    let wait_ms = rng.gen_range(MIN_WAIT_MS..=MAX_WAIT_MS);
    Timer::countdown(wait_ms as f64, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Push the wait timer past its upper bound so the light turns green.
    fn force_green(session: &mut ReactionSession, rng: &mut StdRng) {
        session.update(MAX_WAIT_MS as f64, false, rng);
        assert_eq!(session.phase, ReactionPhase::Go);
    }

    #[test]
    fn test_wait_runs_out_then_goes_green() {
        let mut rng = rng();
        let mut session = ReactionSession::new(&mut rng);
        assert_eq!(session.phase, ReactionPhase::Waiting);

        // Below the minimum wait, still red.
        session.update((MIN_WAIT_MS - 1) as f64, false, &mut rng);
        assert_eq!(session.phase, ReactionPhase::Waiting);

        session.update(MAX_WAIT_MS as f64, false, &mut rng);
        assert_eq!(session.phase, ReactionPhase::Go);
    }

    #[test]
    fn test_early_click_routes_to_too_early_and_keeps_the_round() {
        let mut rng = rng();
        let mut session = ReactionSession::new(&mut rng);

        session.update(10.0, true, &mut rng);
        assert_eq!(session.phase, ReactionPhase::TooEarly);
        assert_eq!(session.round, 1);

        // The next click re-arms the wait, still on round 1.
        session.update(10.0, true, &mut rng);
        assert_eq!(session.phase, ReactionPhase::Waiting);
        assert_eq!(session.round, 1);
    }

    #[test]
    fn test_click_on_green_records_the_elapsed_time() {
        let mut rng = rng();
        let mut session = ReactionSession::new(&mut rng);
        force_green(&mut session, &mut rng);

        let result = session.update(234.0, true, &mut rng);
        assert_eq!(result, None);
        assert_eq!(session.phase, ReactionPhase::Scored);
        assert_eq!(session.last_sample_ms(), 234);
    }

    #[test]
    fn test_click_after_scored_advances_the_round() {
        let mut rng = rng();
        let mut session = ReactionSession::new(&mut rng);
        force_green(&mut session, &mut rng);
        session.update(200.0, true, &mut rng);

        session.update(0.0, true, &mut rng);
        assert_eq!(session.round, 2);
        assert_eq!(session.phase, ReactionPhase::Waiting);
    }

    #[test]
    fn test_five_rounds_score_the_rounded_mean() {
        let mut rng = rng();
        let mut session = ReactionSession::new(&mut rng);
        let times = [250.0, 300.0, 275.0, 310.0, 266.0];

        let mut result = None;
        for (i, &time) in times.iter().enumerate() {
            force_green(&mut session, &mut rng);
            result = session.update(time, true, &mut rng);

            if i < times.len() - 1 {
                assert_eq!(result, None);
                session.update(0.0, true, &mut rng); // continue to next round
            }
        }

        // mean(250, 300, 275, 310, 266) = 280.2 -> 280
        let score = result.expect("fifth click must finish the game");
        assert_eq!(score.kind, GameKind::Reaction);
        assert_eq!(score.value, 280);
    }

    #[test]
    fn test_false_start_does_not_pollute_samples() {
        let mut rng = rng();
        let mut session = ReactionSession::new(&mut rng);

        session.update(1.0, true, &mut rng); // too early
        session.update(1.0, true, &mut rng); // back to waiting
        force_green(&mut session, &mut rng);
        session.update(321.0, true, &mut rng);

        assert_eq!(session.last_sample_ms(), 321);
        assert_eq!(session.round, 1);
    }

    #[test]
    fn test_wait_duration_stays_inside_bounds() {
        let mut rng = rng();
        for _ in 0..200 {
            let timer = random_wait(&mut rng);
            let remaining = timer.time_remaining();
            assert!((MIN_WAIT_MS as f64..=MAX_WAIT_MS as f64).contains(&remaining));
        }
    }
}
