use std::time::{Duration, Instant};

/// Tick scheduler for the simulation: a repeating deadline with a period.
///
/// At most one deadline is ever armed, so re-entrant `start` calls cannot end
/// up with two schedules ticking the same game.  The clock never sleeps or
/// spawns anything itself; the event loop asks for [`Clock::deadline()`],
/// waits at most that long for input, and calls [`Clock::advance()`] after
/// each fired tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Clock {
    interval: Duration,
    deadline: Option<Instant>,
    paused: bool,
}

impl Clock {
    pub(crate) fn new(interval: Duration) -> Clock {
        Clock {
            interval,
            deadline: None,
            paused: false,
        }
    }

    /// Arm the clock if it is not already armed
    pub(crate) fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Disarm the clock.  The pending tick, if any, will not fire.
    pub(crate) fn stop(&mut self) {
        self.deadline = None;
    }

    /// Change the period.  An already-armed deadline is left in place, so the
    /// new period takes effect from the next tick boundary.
    pub(crate) fn reconfigure(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Schedule the next tick after one has fired
    pub(crate) fn advance(&mut self, now: Instant) {
        if self.deadline.is_some() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Disarm and remember that the stoppage is a pause rather than an end
    pub(crate) fn pause(&mut self) {
        if self.deadline.is_some() {
            self.paused = true;
            self.stop();
        }
    }

    /// Undo a [`Clock::pause()`]
    pub(crate) fn resume(&mut self, now: Instant) {
        if self.paused {
            self.paused = false;
            self.start(now);
        }
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(crate) fn is_running(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(250);

    #[test]
    fn start_arms_one_deadline() {
        let t0 = Instant::now();
        let mut clock = Clock::new(TICK);
        assert!(!clock.is_running());
        clock.start(t0);
        assert_eq!(clock.deadline(), Some(t0 + TICK));
    }

    #[test]
    fn start_is_idempotent() {
        let t0 = Instant::now();
        let mut clock = Clock::new(TICK);
        clock.start(t0);
        clock.start(t0 + Duration::from_millis(100));
        assert_eq!(clock.deadline(), Some(t0 + TICK));
    }

    #[test]
    fn stop_disarms_immediately() {
        let t0 = Instant::now();
        let mut clock = Clock::new(TICK);
        clock.start(t0);
        clock.stop();
        assert_eq!(clock.deadline(), None);
        clock.stop();
        assert_eq!(clock.deadline(), None);
    }

    #[test]
    fn reconfigure_applies_from_the_next_boundary() {
        let t0 = Instant::now();
        let mut clock = Clock::new(TICK);
        clock.start(t0);
        clock.reconfigure(Duration::from_millis(100));
        assert_eq!(clock.deadline(), Some(t0 + TICK));
        let t1 = t0 + TICK;
        clock.advance(t1);
        assert_eq!(clock.deadline(), Some(t1 + Duration::from_millis(100)));
    }

    #[test]
    fn advance_reschedules_only_while_armed() {
        let t0 = Instant::now();
        let mut clock = Clock::new(TICK);
        clock.advance(t0);
        assert_eq!(clock.deadline(), None);
        clock.start(t0);
        clock.advance(t0 + TICK);
        assert_eq!(clock.deadline(), Some(t0 + TICK + TICK));
    }

    #[test]
    fn pause_and_resume() {
        let t0 = Instant::now();
        let mut clock = Clock::new(TICK);
        clock.start(t0);
        clock.pause();
        assert!(!clock.is_running());
        clock.pause();
        let t1 = t0 + Duration::from_secs(5);
        clock.resume(t1);
        assert_eq!(clock.deadline(), Some(t1 + TICK));
        clock.resume(t1 + Duration::from_secs(1));
        assert_eq!(clock.deadline(), Some(t1 + TICK));
    }

    #[test]
    fn resume_without_pause_is_a_noop() {
        let t0 = Instant::now();
        let mut clock = Clock::new(TICK);
        clock.resume(t0);
        assert!(!clock.is_running());
    }
}
