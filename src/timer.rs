/// Millisecond timer polled by the game loop.
///
/// Counts up toward an optional duration. A timer without a duration is a
/// stopwatch: it accumulates forever and never finishes. Sessions replace
/// their timer when a round needs a new duration instead of mutating the
/// old one.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    duration_ms: Option<f64>,
    elapsed_ms: f64,
    running: bool,
}

impl Timer {
    pub fn countdown(duration_ms: f64, start: bool) -> Self {
        Self {
            duration_ms: Some(duration_ms.max(0.0)),
            elapsed_ms: 0.0,
            running: start,
        }
    }

    pub fn stopwatch(start: bool) -> Self {
        Self {
            duration_ms: None,
            elapsed_ms: 0.0,
            running: start,
        }
    }

    /// Advance the timer. Stopped timers and negative deltas are no-ops;
    /// elapsed time never moves backward.
    pub fn update(&mut self, delta_ms: f64) {
        if !self.running || delta_ms <= 0.0 {
            return;
        }

        self.elapsed_ms += delta_ms;

        if let Some(duration) = self.duration_ms {
            if self.elapsed_ms >= duration {
                self.elapsed_ms = duration;
                self.running = false;
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        match self.duration_ms {
            Some(duration) => self.elapsed_ms >= duration,
            None => false,
        }
    }

    pub fn time_remaining(&self) -> f64 {
        match self.duration_ms {
            Some(duration) => (duration - self.elapsed_ms).max(0.0),
            None => f64::INFINITY,
        }
    }

    pub fn time_passed(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn reset(&mut self, start: bool) {
        self.elapsed_ms = 0.0;
        self.running = start;
    }
}
