//! Cancelable scheduled tasks.
//!
//! The game core never sleeps. It asks for timed transitions through a
//! `Scheduler`, which hands out task ids and queues `ScheduleRequest`s for the
//! runtime to execute. When a task fires, the runtime reports its id back and the
//! core only acts if that id is still live, so a cancelled or stale timer can
//! never apply twice or leak into another phase.

use std::collections::HashMap;
use std::time::Duration;

pub type TaskId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Hide the flashed cell and move on to the distraction task.
    EndFlash,
    /// One second of recall time elapsed.
    CountdownTick,
    /// Apply the pending result of the recall phase.
    ResolveRecall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleRequest {
    Once { id: TaskId, delay: Duration, task: ScheduledTask },
    Every { id: TaskId, period: Duration, task: ScheduledTask },
    Cancel { id: TaskId },
}

#[derive(Debug, Clone, Copy)]
struct LiveTask {
    task: ScheduledTask,
    repeating: bool,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: TaskId,
    live: HashMap<TaskId, LiveTask>,
    requests: Vec<ScheduleRequest>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, task: ScheduledTask, repeating: bool) -> TaskId {
        self.next_id += 1;
        let id = self.next_id;
        self.live.insert(id, LiveTask { task, repeating });
        id
    }

    /// Run `task` once after `delay`.
    pub fn once(&mut self, delay: Duration, task: ScheduledTask) -> TaskId {
        let id = self.allocate(task, false);
        self.requests.push(ScheduleRequest::Once { id, delay, task });
        id
    }

    /// Run `task` every `period` until cancelled.
    pub fn every(&mut self, period: Duration, task: ScheduledTask) -> TaskId {
        let id = self.allocate(task, true);
        self.requests.push(ScheduleRequest::Every { id, period, task });
        id
    }

    pub fn cancel(&mut self, id: TaskId) {
        if self.live.remove(&id).is_some() {
            self.requests.push(ScheduleRequest::Cancel { id });
        }
    }

    /// Cancel every live task. Ids are emitted in ascending order.
    pub fn cancel_all(&mut self) {
        let mut ids: Vec<TaskId> = self.live.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            self.cancel(id);
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Accept a firing of `id`. One-shot tasks are retired; stale ids yield `None`.
    pub fn take_due(&mut self, id: TaskId) -> Option<ScheduledTask> {
        let live = *self.live.get(&id)?;
        if !live.repeating {
            self.live.remove(&id);
        }
        Some(live.task)
    }

    /// Requests queued since the last drain, in issue order.
    pub fn drain_requests(&mut self) -> Vec<ScheduleRequest> {
        std::mem::take(&mut self.requests)
    }
}
