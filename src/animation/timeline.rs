/// Animation time added by each `draw` call.
pub const FRAME_STEP_MS: f64 = 16.0;

/// Whether a timeline plays once or loops forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    Once,
    Infinite,
}

/// Where a timeline is at a given elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelinePhase {
    /// Still inside the start delay.
    Pending,
    /// Linear progress in `[0, 1)`.
    Running(f64),
    /// A one-shot timeline that has played to the end.
    Finished,
}

/// Pure mapping from elapsed time to progress, with a start delay and optional looping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub duration_ms: f64,
    pub start_delay_ms: f64,
    pub repeat: Repeat,
}

impl Timeline {
    pub const fn once(duration_ms: f64, start_delay_ms: f64) -> Self {
        Self {
            duration_ms,
            start_delay_ms,
            repeat: Repeat::Once,
        }
    }

    pub const fn looping(duration_ms: f64, start_delay_ms: f64) -> Self {
        Self {
            duration_ms,
            start_delay_ms,
            repeat: Repeat::Infinite,
        }
    }

    /// Time at which a one-shot timeline reaches [`TimelinePhase::Finished`].
    pub fn end_ms(&self) -> f64 {
        self.start_delay_ms.max(0.0) + self.duration_ms.max(0.0)
    }

    pub fn phase(&self, elapsed_ms: f64) -> TimelinePhase {
        let delay = self.start_delay_ms.max(0.0);
        if !elapsed_ms.is_finite() || elapsed_ms < delay {
            return TimelinePhase::Pending;
        }
        let local = elapsed_ms - delay;
        if self.duration_ms <= 0.0 || !self.duration_ms.is_finite() {
            return match self.repeat {
                Repeat::Once => TimelinePhase::Finished,
                Repeat::Infinite => TimelinePhase::Running(0.0),
            };
        }
        match self.repeat {
            Repeat::Once if local >= self.duration_ms => TimelinePhase::Finished,
            Repeat::Once => TimelinePhase::Running(local / self.duration_ms),
            Repeat::Infinite => {
                let v = crate::foundation::math::wrap(local, self.duration_ms) / self.duration_ms;
                TimelinePhase::Running(v)
            }
        }
    }

    /// Fold an ever-growing clock back into a bounded range without changing any phase.
    ///
    /// Looping timelines only depend on `(elapsed - delay) mod duration`, so once the delay has
    /// passed the clock can be reduced modulo the duration.
    pub fn fold_elapsed(&self, elapsed_ms: f64) -> f64 {
        let delay = self.start_delay_ms.max(0.0);
        match self.repeat {
            Repeat::Infinite if elapsed_ms >= delay && self.duration_ms > 0.0 => {
                delay + crate::foundation::math::wrap(elapsed_ms - delay, self.duration_ms)
            }
            Repeat::Once => elapsed_ms.min(self.end_ms()),
            _ => elapsed_ms,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
