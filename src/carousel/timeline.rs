//! Virtual timeline for carousel timers.
//!
//! Every timer kind owns exactly one slot. Arming a slot replaces whatever
//! deadline it held, so a superseded timer can never fire.

use std::time::Duration;

/// A single pending deadline on the carousel's clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TimerSlot {
    deadline: Option<Duration>,
}

impl TimerSlot {
    pub fn arm(&mut self, at: Duration) {
        self.deadline = Some(at);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}

/// Which slot fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerKind {
    /// Loop phase deadline (settle, re-enable, rewind step)
    Phase,
    /// End of the pause window after an interaction
    Cooldown,
    /// Next automatic advance
    AutoAdvance,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Timers {
    pub phase: TimerSlot,
    pub cooldown: TimerSlot,
    pub auto_advance: TimerSlot,
}

impl Timers {
    /// Earliest deadline at or before `now`.
    /// Equal deadlines resolve in the order phase, cooldown, auto-advance.
    pub fn next_due(&self, now: Duration) -> Option<(TimerKind, Duration)> {
        [
            (TimerKind::Phase, self.phase.deadline()),
            (TimerKind::Cooldown, self.cooldown.deadline()),
            (TimerKind::AutoAdvance, self.auto_advance.deadline()),
        ]
        .into_iter()
        .filter_map(|(kind, deadline)| deadline.filter(|d| *d <= now).map(|d| (kind, d)))
        .min_by_key(|(_, deadline)| *deadline)
    }

    /// Earliest armed deadline regardless of the current time
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.phase.deadline(),
            self.cooldown.deadline(),
            self.auto_advance.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_slot_arm_replaces_deadline() {
        let mut slot = TimerSlot::default();
        assert_eq!(slot.deadline(), None);
        slot.arm(ms(3000));
        slot.arm(ms(4500));
        assert_eq!(slot.deadline(), Some(ms(4500)));
        slot.cancel();
        assert_eq!(slot.deadline(), None);
    }

    #[test]
    fn test_next_due_ignores_future_deadlines() {
        let mut timers = Timers::default();
        timers.auto_advance.arm(ms(2000));
        assert_eq!(timers.next_due(ms(1999)), None);
        assert_eq!(
            timers.next_due(ms(2000)),
            Some((TimerKind::AutoAdvance, ms(2000)))
        );
    }

    #[test]
    fn test_next_due_picks_earliest() {
        let mut timers = Timers::default();
        timers.auto_advance.arm(ms(2000));
        timers.phase.arm(ms(500));
        timers.cooldown.arm(ms(1000));
        assert_eq!(timers.next_due(ms(5000)), Some((TimerKind::Phase, ms(500))));
        assert_eq!(timers.next_deadline(), Some(ms(500)));
    }

    #[test]
    fn test_next_due_tie_order() {
        let mut timers = Timers::default();
        timers.auto_advance.arm(ms(3000));
        timers.cooldown.arm(ms(3000));
        assert_eq!(
            timers.next_due(ms(3000)),
            Some((TimerKind::Cooldown, ms(3000)))
        );
        timers.phase.arm(ms(3000));
        assert_eq!(timers.next_due(ms(3000)), Some((TimerKind::Phase, ms(3000))));
    }
}
