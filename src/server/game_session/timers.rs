//! Runs the controller's schedule requests on the actor's context.
//!
//! Each task id maps to one actix `SpawnHandle`. Cancel requests are applied in
//! the order they were issued, so a phase's timers are always torn down before
//! the next phase's timers are spawned.

use actix::prelude::*;
use log::debug;

use crate::game::schedule::{ScheduleRequest, TaskId};
use crate::server::game_session::server::GameSession;

impl GameSession {
    pub(super) fn apply_schedule(&mut self, ctx: &mut Context<Self>) {
        for request in self.game_state.drain_schedule() {
            match request {
                ScheduleRequest::Once { id, delay, task } => {
                    debug!("[GameSession] game_id={} schedule {:?} #{} in {:?}", self.game_id, task, id, delay);
                    let handle = ctx.run_later(delay, move |act, ctx| {
                        act.timers.remove(&id);
                        act.on_task_fired(id, ctx);
                    });
                    self.timers.insert(id, handle);
                }
                ScheduleRequest::Every { id, period, task } => {
                    debug!("[GameSession] game_id={} schedule {:?} #{} every {:?}", self.game_id, task, id, period);
                    let handle = ctx.run_interval(period, move |act, ctx| {
                        act.on_task_fired(id, ctx);
                    });
                    self.timers.insert(id, handle);
                }
                ScheduleRequest::Cancel { id } => {
                    if let Some(handle) = self.timers.remove(&id) {
                        ctx.cancel_future(handle);
                    }
                }
            }
        }
    }

    fn on_task_fired(&mut self, id: TaskId, ctx: &mut Context<Self>) {
        if self.game_state.fire(id) {
            self.sync(ctx);
        } else {
            // Stale firing; make sure it cannot come back.
            if let Some(handle) = self.timers.remove(&id) {
                ctx.cancel_future(handle);
            }
        }
    }
}
