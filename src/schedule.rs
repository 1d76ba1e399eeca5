use std::{cell::Cell, rc::Rc, time::Duration};

/// Output of a single step plus the delay before the next one.
///
/// `next == None` finishes the task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<T> {
    pub output: T,
    pub next: Option<Duration>,
}

impl<T> Step<T> {
    pub fn again(output: T, after: Duration) -> Self {
        Self {
            output,
            next: Some(after),
        }
    }

    pub fn last(output: T) -> Self {
        Self { output, next: None }
    }
}

pub trait Recurring {
    type Output;

    fn step(&mut self) -> Step<Self::Output>;
}

/// Shared stop flag for a running task.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Pending-work flag that coalesces bursts of events into one update per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }

        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Drives a [`Recurring`] task in virtual time.
pub struct ManualClock<R: Recurring> {
    task: R,
    now: Duration,
    next_due: Option<Duration>,
    cancel: CancelFlag,
}

impl<R: Recurring> ManualClock<R> {
    pub fn new(task: R, first_delay: Duration) -> Self {
        Self {
            task,
            now: Duration::ZERO,
            next_due: Some(first_delay),
            cancel: CancelFlag::new(),
        }
    }

    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_finished(&self) -> bool {
        self.cancel.is_cancelled() || self.next_due.is_none()
    }

    pub fn task(&self) -> &R {
        &self.task
    }

    /// Moves virtual time forward, running every step that falls due.
    pub fn advance(&mut self, by: Duration) -> Vec<(Duration, R::Output)> {
        let target = self.now + by;
        let mut outputs = Vec::new();

        while let Some(due) = self.next_due {
            if self.cancel.is_cancelled() || due > target {
                break;
            }

            self.now = due;
            let step = self.task.step();
            outputs.push((due, step.output));
            self.next_due = step.next.map(|delay| due + delay);
        }

        self.now = target;
        outputs
    }

    /// Runs exactly `count` steps regardless of their delays.
    pub fn run_steps(&mut self, count: usize) -> Vec<R::Output> {
        let mut outputs = Vec::with_capacity(count);

        for _ in 0..count {
            let Some(due) = self.next_due else {
                break;
            };
            if self.cancel.is_cancelled() {
                break;
            }

            self.now = due;
            let step = self.task.step();
            outputs.push(step.output);
            self.next_due = step.next.map(|delay| due + delay);
        }

        outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        remaining: u32,
    }

    impl Recurring for Countdown {
        type Output = u32;

        fn step(&mut self) -> Step<u32> {
            self.remaining -= 1;
            if self.remaining == 0 {
                Step::last(0)
            } else {
                Step::again(self.remaining, Duration::from_millis(100))
            }
        }
    }

    #[test]
    fn advance_runs_only_due_steps() {
        let mut clock = ManualClock::new(Countdown { remaining: 5 }, Duration::from_millis(50));

        let outputs = clock.advance(Duration::from_millis(260));

        assert_eq!(
            outputs,
            vec![
                (Duration::from_millis(50), 4),
                (Duration::from_millis(150), 3),
                (Duration::from_millis(250), 2),
            ]
        );
        assert_eq!(clock.now(), Duration::from_millis(260));
    }

    #[test]
    fn finished_task_stops_producing() {
        let mut clock = ManualClock::new(Countdown { remaining: 2 }, Duration::ZERO);

        assert_eq!(clock.run_steps(10), vec![1, 0]);
        assert!(clock.is_finished());
        assert!(clock.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn cancel_flag_halts_future_steps() {
        let mut clock = ManualClock::new(Countdown { remaining: 10 }, Duration::ZERO);
        let flag = clock.cancel_flag();

        assert_eq!(clock.advance(Duration::from_millis(100)).len(), 2);
        flag.cancel();

        assert!(clock.advance(Duration::from_secs(10)).is_empty());
        assert!(clock.is_finished());
    }

    #[test]
    fn frame_gate_coalesces_until_completed() {
        let mut gate = FrameGate::default();

        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        gate.complete();
        assert!(gate.request());
    }
}
