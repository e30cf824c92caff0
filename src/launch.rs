//! Timed launch sequence driving the progress fill.
//!
//! A launch emits six frames, one per second, that flip `started` on, walk
//! `progress` up in 0.2 steps and finally flip `started` off at 1.0.

use crate::config::STEP_DELAY_MS;
use futures::future::{AbortHandle, AbortRegistration};
use log::debug;
use std::future::Future;

/// One emission of the launch sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchFrame {
    pub started: bool,
    pub progress: f32,
}

impl LaunchFrame {
    const fn new(started: bool, progress: f32) -> Self {
        Self { started, progress }
    }
}

/// The fixed launch sequence. Progress values are literals so the last
/// frame is exactly 1.0.
pub const LAUNCH_SEQUENCE: [LaunchFrame; 6] = [
    LaunchFrame::new(true, 0.0),
    LaunchFrame::new(true, 0.2),
    LaunchFrame::new(true, 0.4),
    LaunchFrame::new(true, 0.6),
    LaunchFrame::new(true, 0.8),
    LaunchFrame::new(false, 1.0),
];

/// Screen-level launch state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AppState {
    pub started: bool,
    pub progress: f32,
}

impl From<LaunchFrame> for AppState {
    fn from(frame: LaunchFrame) -> Self {
        Self {
            started: frame.started,
            progress: frame.progress,
        }
    }
}

/// Clamp a progress value into [0, 1] and scale it to a percentage.
/// NaN maps to 0.
pub fn progress_percent(progress: f32) -> f32 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * 100.0
}

/// Drive [`LAUNCH_SEQUENCE`] through `emit`.
///
/// The first frame is emitted immediately; each following frame waits on
/// `sleep(STEP_DELAY_MS)`. Dropping the returned future stops the sequence
/// at the next suspension point.
pub async fn run_launch_sequence<E, S, F>(mut emit: E, mut sleep: S)
where
    E: FnMut(LaunchFrame),
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    for (step, frame) in LAUNCH_SEQUENCE.iter().enumerate() {
        if step > 0 {
            sleep(STEP_DELAY_MS).await;
        }
        debug!(
            "launch step {}/{}: started={} progress={:.1}",
            step + 1,
            LAUNCH_SEQUENCE.len(),
            frame.started,
            frame.progress
        );
        emit(*frame);
    }
}

/// Ownership slot for the in-flight launch task of one component.
///
/// Only one sequence runs at a time: `try_start` refuses while a task is
/// registered, and `cancel` aborts whatever is in flight.
#[derive(Debug, Default)]
pub struct LaunchTask {
    handle: Option<AbortHandle>,
}

impl LaunchTask {
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Register a new task, or `None` if one is already running.
    pub fn try_start(&mut self) -> Option<AbortRegistration> {
        if self.is_running() {
            return None;
        }
        let (handle, registration) = AbortHandle::new_pair();
        self.handle = Some(handle);
        Some(registration)
    }

    /// Release the slot after the task ran to completion.
    pub fn finish(&mut self) {
        self.handle = None;
    }

    /// Abort the running task. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}
