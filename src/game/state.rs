//! Game phase controller.
//!
//! Owns one player's session: the level, the flashed sequence, the distraction
//! pair, the recall clicks and the countdown. All timed transitions go through the
//! `Scheduler`; the runtime executes the queued requests and reports firings back
//! through `fire`.

use std::time::Duration;

use log::{debug, error, info};

use crate::config::game::{
    FAILURE_DELAY_MS, GRID_SIZE, LOW_TIME_THRESHOLD_SECS, MAX_LEVEL, SUCCESS_DELAY_MS,
};
use crate::game::entities::{
    CoordinateSource, InterferenceSource, InterferenceTaskGenerator, RandomSequenceGenerator,
};
use crate::game::error::CommandError;
use crate::game::schedule::{ScheduleRequest, ScheduledTask, Scheduler, TaskId};
use crate::game::systems::{
    build_board, flash_duration, recall_budget, render_board, submit, Countdown, CountdownEvent,
};
use crate::game::types::{
    CellView, DistractionPair, GameSnapshot, GridCoordinate, Notification, Phase, RecallOutcome,
};

/// Result of a recall phase waiting for its display delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecallResult {
    Solved,
    Failed,
}

pub struct GameState<S = RandomSequenceGenerator, I = InterferenceTaskGenerator> {
    level: u8,
    phase: Phase,
    sequence: Vec<GridCoordinate>,
    flashing: Option<GridCoordinate>,
    distraction: Option<DistractionPair>,
    clicks: Vec<GridCoordinate>,
    countdown: Countdown,
    scheduler: Scheduler,
    // Pending one-shot transition (end of flash or recall resolution).
    transition: Option<TaskId>,
    pending_result: Option<RecallResult>,
    notifications: Vec<Notification>,
    sequence_source: S,
    interference_source: I,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_sources(RandomSequenceGenerator::new(), InterferenceTaskGenerator::new())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CoordinateSource, I: InterferenceSource> GameState<S, I> {
    pub fn with_sources(sequence_source: S, interference_source: I) -> Self {
        Self {
            level: 1,
            phase: Phase::Idle,
            sequence: Vec::new(),
            flashing: None,
            distraction: None,
            clicks: Vec::new(),
            countdown: Countdown::new(),
            scheduler: Scheduler::new(),
            transition: None,
            pending_result: None,
            notifications: Vec::new(),
            sequence_source,
            interference_source,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sequence(&self) -> &[GridCoordinate] {
        &self.sequence
    }

    pub fn clicks(&self) -> &[GridCoordinate] {
        &self.clicks
    }

    pub fn seconds_remaining(&self) -> Option<u32> {
        (self.phase == Phase::Recalling).then(|| self.countdown.remaining())
    }

    /// Back to the initial state: idle at level 1, nothing scheduled.
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.scheduler.cancel_all();
        self.level = 1;
        self.phase = Phase::Idle;
        self.clear_level();
        self.notifications.clear();
        debug!("[GameState] Reset to level 1");
    }

    /// Start the current level. Only applies while idle.
    pub fn start_or_continue_level(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.clear_level();
        info!("[GameState] Starting level {}", self.level);
        self.begin_flash(0);
        true
    }

    /// Accept the player's answer to the distraction task. Either answer advances.
    pub fn answer_distraction(&mut self) -> bool {
        let Phase::Distraction { step } = self.phase else {
            return false;
        };
        self.distraction = None;

        let next = step + 1;
        if next < usize::from(self.level) {
            self.begin_flash(next);
        } else {
            self.begin_recall();
        }
        true
    }

    /// Route a recall click. Clicks outside the recall phase, or after the level
    /// is already decided, are ignored.
    pub fn click_cell(&mut self, row: usize, col: usize) -> Result<RecallOutcome, CommandError> {
        let coord = GridCoordinate::new(row, col).ok_or(CommandError::InvalidCell { row, col })?;

        if self.phase != Phase::Recalling || self.pending_result.is_some() {
            return Ok(RecallOutcome::Ignored);
        }

        let outcome = submit(coord, &mut self.clicks, &self.sequence);
        match outcome {
            RecallOutcome::Complete => {
                self.resolve_later(RecallResult::Solved, SUCCESS_DELAY_MS)
            }
            RecallOutcome::Wrong => self.resolve_later(RecallResult::Failed, FAILURE_DELAY_MS),
            RecallOutcome::Correct | RecallOutcome::Ignored => {}
        }
        debug!(
            "[GameState] Click ({}, {}) -> {:?}\n{}",
            row,
            col,
            outcome,
            render_board(&self.board())
        );
        Ok(outcome)
    }

    /// Apply a scheduled task that just fired. Returns false for stale ids.
    pub fn fire(&mut self, id: TaskId) -> bool {
        let Some(task) = self.scheduler.take_due(id) else {
            return false;
        };

        match task {
            ScheduledTask::EndFlash | ScheduledTask::ResolveRecall => {
                if self.transition != Some(id) {
                    return false;
                }
                self.transition = None;
                if task == ScheduledTask::EndFlash {
                    self.end_flash();
                } else {
                    self.finish_recall();
                }
                true
            }
            ScheduledTask::CountdownTick => {
                if self.phase != Phase::Recalling || !self.countdown.owns(id) {
                    return false;
                }
                if self.countdown.tick(&mut self.scheduler) == CountdownEvent::TimedOut {
                    self.time_expired();
                }
                true
            }
        }
    }

    /// Schedule requests issued since the last call, for the runtime to execute.
    pub fn drain_schedule(&mut self) -> Vec<ScheduleRequest> {
        self.scheduler.drain_requests()
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let seconds_remaining = self.seconds_remaining();
        GameSnapshot {
            phase: self.phase,
            level: self.level,
            max_level: MAX_LEVEL,
            grid_size: GRID_SIZE,
            revealed: match self.phase {
                Phase::Flashing { .. } => self.sequence.clone(),
                _ => Vec::new(),
            },
            target_len: self.sequence.len(),
            flashing: self.flashing,
            distraction: self.distraction,
            clicks: self.clicks.clone(),
            seconds_remaining,
            low_time: seconds_remaining.is_some_and(|s| s <= LOW_TIME_THRESHOLD_SECS),
            board: self.board(),
            start_label: if self.level == 1 {
                "Start Level 1".to_string()
            } else {
                format!("Continue Level {}", self.level)
            },
        }
    }

    fn board(&self) -> Vec<Vec<CellView>> {
        build_board(self.phase, self.flashing, &self.sequence, &self.clicks)
    }

    fn clear_level(&mut self) {
        self.sequence.clear();
        self.clicks.clear();
        self.flashing = None;
        self.distraction = None;
        self.pending_result = None;
    }

    /// Cancel every task of the phase being left.
    fn cancel_pending(&mut self) {
        self.countdown.disarm(&mut self.scheduler);
        if let Some(id) = self.transition.take() {
            self.scheduler.cancel(id);
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.cancel_pending();
        debug_assert_eq!(self.scheduler.live_count(), 0);
        debug!("[GameState] level={} {:?} -> {:?}", self.level, self.phase, phase);
        self.phase = phase;
    }

    fn begin_flash(&mut self, step: usize) {
        let Some(coord) = self.sequence_source.next_coordinate(&self.sequence) else {
            error!("[GameState] No free cell left for step {}, abandoning level", step);
            self.enter(Phase::Idle);
            self.clear_level();
            return;
        };
        self.sequence.push(coord);
        self.flashing = Some(coord);
        self.enter(Phase::Flashing { step });
        self.transition = Some(
            self.scheduler
                .once(flash_duration(self.level), ScheduledTask::EndFlash),
        );
    }

    fn end_flash(&mut self) {
        let Phase::Flashing { step } = self.phase else {
            return;
        };
        self.flashing = None;
        self.enter(Phase::Distraction { step });
        let pair = self.interference_source.generate();
        debug!("[GameState] Distraction {:?} identical={}", pair, pair.is_identical());
        self.distraction = Some(pair);
    }

    fn begin_recall(&mut self) {
        self.enter(Phase::Recalling);
        self.clicks.clear();
        self.countdown.arm(recall_budget(self.level), &mut self.scheduler);
    }

    fn resolve_later(&mut self, result: RecallResult, delay_ms: u64) {
        self.countdown.disarm(&mut self.scheduler);
        self.pending_result = Some(result);
        self.transition = Some(
            self.scheduler
                .once(Duration::from_millis(delay_ms), ScheduledTask::ResolveRecall),
        );
    }

    fn finish_recall(&mut self) {
        let notification = match self.pending_result.take() {
            Some(RecallResult::Solved) if self.level < MAX_LEVEL => {
                let completed = self.level;
                self.level += 1;
                Notification::LevelComplete { completed, next: self.level }
            }
            Some(RecallResult::Solved) => {
                let completed = self.level;
                self.level = 1;
                Notification::GameComplete { completed }
            }
            Some(RecallResult::Failed) => Notification::WrongClick { level: self.level },
            None => return,
        };
        self.finish_level(notification);
    }

    fn time_expired(&mut self) {
        self.finish_level(Notification::TimeExpired { level: self.level });
    }

    fn finish_level(&mut self, notification: Notification) {
        info!("[GameState] {}", notification.message());
        self.notifications.push(notification);
        self.enter(Phase::Idle);
        self.clear_level();
    }
}

#[cfg(test)]
impl<S: CoordinateSource, I: InterferenceSource> GameState<S, I> {
    /// Jump straight to `level` (clamped to the level table).
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, MAX_LEVEL);
        self
    }

    pub fn live_tasks(&self) -> usize {
        self.scheduler.live_count()
    }

    /// Ids of one-shot and repeating tasks issued since the last drain.
    pub fn drain_task_ids(&mut self) -> Vec<(TaskId, ScheduledTask)> {
        self.drain_schedule()
            .into_iter()
            .filter_map(|request| match request {
                ScheduleRequest::Once { id, task, .. } | ScheduleRequest::Every { id, task, .. } => {
                    Some((id, task))
                }
                ScheduleRequest::Cancel { .. } => None,
            })
            .collect()
    }
}
