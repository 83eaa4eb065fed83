//! Recall countdown.
//!
//! Counts whole seconds down from the level budget. Ticks come from a repeating
//! scheduled task owned by the countdown; disarming cancels it so no tick can
//! reach another phase.

use std::time::Duration;

use crate::config::game::COUNTDOWN_TICK_MS;
use crate::game::schedule::{ScheduledTask, Scheduler, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Tick arrived while not armed.
    Idle,
    Running(u32),
    TimedOut,
}

#[derive(Debug, Default)]
pub struct Countdown {
    remaining: u32,
    task: Option<TaskId>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `budget` seconds, replacing any previous run.
    pub fn arm(&mut self, budget: u32, scheduler: &mut Scheduler) {
        self.disarm(scheduler);
        self.remaining = budget;
        self.task = Some(scheduler.every(
            Duration::from_millis(COUNTDOWN_TICK_MS),
            ScheduledTask::CountdownTick,
        ));
    }

    pub fn disarm(&mut self, scheduler: &mut Scheduler) {
        if let Some(id) = self.task.take() {
            scheduler.cancel(id);
        }
    }

    /// Whether `id` is the tick task of the current run.
    pub fn owns(&self, id: TaskId) -> bool {
        self.task == Some(id)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self, scheduler: &mut Scheduler) -> CountdownEvent {
        if self.task.is_none() {
            return CountdownEvent::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.disarm(scheduler);
            CountdownEvent::TimedOut
        } else {
            CountdownEvent::Running(self.remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_out_once_after_budget_ticks() {
        let mut scheduler = Scheduler::new();
        let mut countdown = Countdown::new();
        countdown.arm(30, &mut scheduler);

        let mut timeouts = 0;
        for _ in 0..30 {
            if countdown.tick(&mut scheduler) == CountdownEvent::TimedOut {
                timeouts += 1;
            }
        }
        assert_eq!(timeouts, 1);
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(scheduler.live_count(), 0);

        // Further ticks do nothing and never go below zero.
        assert_eq!(countdown.tick(&mut scheduler), CountdownEvent::Idle);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_running_reports_remaining() {
        let mut scheduler = Scheduler::new();
        let mut countdown = Countdown::new();
        countdown.arm(20, &mut scheduler);
        assert_eq!(countdown.tick(&mut scheduler), CountdownEvent::Running(19));
        assert_eq!(countdown.tick(&mut scheduler), CountdownEvent::Running(18));
    }

    #[test]
    fn test_rearm_invalidates_previous_task() {
        let mut scheduler = Scheduler::new();
        let mut countdown = Countdown::new();
        countdown.arm(20, &mut scheduler);
        let mut first = None;
        for request in scheduler.drain_requests() {
            if let crate::game::schedule::ScheduleRequest::Every { id, .. } = request {
                first = Some(id);
            }
        }
        let first = first.expect("tick task armed");

        countdown.arm(20, &mut scheduler);
        assert!(!countdown.owns(first));
        assert_eq!(scheduler.take_due(first), None);
        assert_eq!(scheduler.live_count(), 1);
        assert_eq!(countdown.remaining(), 20);
    }
}
