//! Frame-driven tick scheduler.
//!
//! The host calls [`TickScheduler::frame`] once per display frame with the
//! request it was handed last time. Every `start`/`stop` bumps a generation
//! counter, so requests issued before it are dead and can never fire a tick.

use std::collections::VecDeque;

use bevy::log::{debug, warn};

pub const DEFAULT_FPS_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Stopped,
    Running,
}

/// Handle for the next pending frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    generation: u64,
}

/// A frame the scheduler accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub delta_ms: f64,
    pub next: FrameRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FpsWindow {
    samples: VecDeque<f64>,
    size: usize,
}

impl Default for FpsWindow {
    fn default() -> Self {
        Self::new(DEFAULT_FPS_WINDOW)
    }
}

impl FpsWindow {
    /// A size of 0 is raised to 1.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            samples: VecDeque::with_capacity(size),
            size,
        }
    }

    pub fn record(&mut self, delta_ms: f64) {
        if delta_ms <= 0.0 {
            return;
        }
        self.samples.push_back(1000.0 / delta_ms);
        if self.samples.len() > self.size {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    pub fn display(&self) -> String {
        self.average()
            .map(|fps| format!("{fps:.2}"))
            .unwrap_or_else(|| "0".to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickScheduler {
    state: SchedulerState,
    generation: u64,
    last_frame_ms: f64,
    fps: FpsWindow,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FPS_WINDOW)
    }
}

impl TickScheduler {
    pub fn new(fps_window: usize) -> Self {
        Self {
            state: SchedulerState::Stopped,
            generation: 0,
            last_frame_ms: 0.0,
            fps: FpsWindow::new(fps_window),
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Starts (or re-arms) the loop from `now_ms`. Earlier requests are cancelled.
    pub fn start(&mut self, now_ms: f64) -> FrameRequest {
        self.generation += 1;
        self.state = SchedulerState::Running;
        self.last_frame_ms = now_ms;
        debug!("tick scheduler started at {now_ms:.1}ms");
        FrameRequest {
            generation: self.generation,
        }
    }

    /// Cancels the pending frame. No tick fires after this returns.
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Stopped {
            return;
        }
        self.generation += 1;
        self.state = SchedulerState::Stopped;
        debug!("tick scheduler stopped");
    }

    pub fn frame(&mut self, request: FrameRequest, now_ms: f64) -> Option<Frame> {
        if self.state != SchedulerState::Running {
            return None;
        }
        if request.generation != self.generation {
            warn!(
                "ignoring stale frame request (generation {} != {})",
                request.generation, self.generation
            );
            return None;
        }

        let delta_ms = now_ms - self.last_frame_ms;
        self.last_frame_ms = now_ms;
        self.fps.record(delta_ms);

        Some(Frame {
            delta_ms,
            next: FrameRequest {
                generation: self.generation,
            },
        })
    }

    pub fn fps(&self) -> String {
        self.fps.display()
    }
}
