//! Polled one-shot deadlines. The owning view polls `fired` each frame and
//! drops or cancels the timer when it goes away, so a pending deadline can
//! never act on a disposed component.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn start_in(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, on the first poll at or past the deadline.
    pub fn fired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
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
    fn fires_once_at_deadline() {
        let mut t = OneShot::default();
        let start = Instant::now();
        t.deadline = Some(start + Duration::from_secs(5));

        assert!(!t.fired(start));
        assert!(!t.fired(start + Duration::from_secs(4)));
        assert!(t.fired(start + Duration::from_secs(5)));
        // Spent: must not fire again.
        assert!(!t.fired(start + Duration::from_secs(6)));
        assert!(!t.is_pending());
    }

    #[test]
    fn cancel_releases_the_deadline() {
        let mut t = OneShot::default();
        t.start_in(Duration::from_secs(5));
        assert!(t.is_pending());
        t.cancel();
        assert!(!t.is_pending());
        assert!(!t.fired(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn idle_timer_never_fires() {
        let mut t = OneShot::default();
        assert!(!t.fired(Instant::now()));
    }
}
