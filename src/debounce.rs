/// State of a [Debouncer]: either nothing is scheduled, or one deferred
/// call is pending until the deadline passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebounceState {
    Idle,
    Pending { deadline: f64 },
}


/// Collapses a burst of events into a single deferred action.
///
/// The first event of a burst arms the timer; events that arrive while
/// the timer is armed are ignored rather than re-armed, so the action
/// fires a fixed delay after the burst began no matter how long the
/// burst lasts.
pub struct Debouncer {
    state: DebounceState,
    delay_ms: f64,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            state: DebounceState::Idle,
            delay_ms,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Records an event at `now_ms` (milliseconds, any monotonic origin).
    pub fn event(&mut self, now_ms: f64) {
        if let DebounceState::Idle = self.state {
            self.state = DebounceState::Pending {
                deadline: now_ms + self.delay_ms,
            };
        }
    }

    /// Returns true exactly once per armed burst, when the deadline has
    /// passed, and resets to idle.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.state {
            DebounceState::Pending { deadline } if now_ms >= deadline => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_never_fires() {
        let mut d = Debouncer::new(66.0);
        assert!(!d.fire(0.0));
        assert!(!d.fire(1000.0));
        assert_eq!(d.state(), DebounceState::Idle);
    }

    #[test]
    fn burst_collapses_to_one_fire() {
        let mut d = Debouncer::new(66.0);
        for t in [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0] {
            d.event(t);
            assert!(!d.fire(t));
        }
        assert!(!d.fire(65.9));
        assert!(d.fire(66.0));
        assert!(!d.fire(67.0));
        assert_eq!(d.state(), DebounceState::Idle);
    }

    #[test]
    fn events_during_pending_do_not_extend_deadline() {
        let mut d = Debouncer::new(66.0);
        d.event(0.0);
        d.event(50.0);
        assert_eq!(d.state(), DebounceState::Pending { deadline: 66.0 });
        assert!(d.fire(66.0));
    }

    #[test]
    fn rearms_after_firing() {
        let mut d = Debouncer::new(66.0);
        d.event(0.0);
        assert!(d.fire(70.0));
        d.event(100.0);
        assert!(!d.fire(165.0));
        assert!(d.fire(166.0));
    }
}
