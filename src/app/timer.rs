use super::*;

impl QuizApp {
    /// One 1 Hz tick. Counts only while answering; once results are shown
    /// the timer never resumes for that session.
    pub fn tick(&mut self) {
        if !self.session.show_results {
            self.session.time_spent += 1;
        }
    }

    /// Converts egui's monotonic clock (fractional seconds since app
    /// start) into ticks: one per whole second elapsed since the arming
    /// instant, so ticks do not align to integer wall-clock seconds.
    /// Called every frame from the update loop.
    pub fn drive_timer(&mut self, now: f64) {
        if self.session.show_results {
            self.tick_baseline = None;
            return;
        }
        match self.tick_baseline {
            // First frame after (re)arming: keep the fractional instant.
            None => self.tick_baseline = Some(now),
            Some(baseline) => {
                let elapsed = (now - baseline).floor();
                if elapsed >= 1.0 {
                    for _ in 0..elapsed as u64 {
                        self.tick();
                    }
                    self.tick_baseline = Some(baseline + elapsed);
                }
            }
        }
    }

    /// Transition boundaries reset the baseline; the next answering frame
    /// re-arms from the clock so paused time is never counted.
    pub(super) fn disarm_timer(&mut self) {
        self.tick_baseline = None;
    }

    pub(super) fn rearm_timer(&mut self) {
        self.tick_baseline = None;
    }
}
