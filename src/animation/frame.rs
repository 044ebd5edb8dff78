// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Frame driver: paces animation ticks against host animation frames.
//!
//! The host reports elapsed time once per animation frame. The driver
//! accumulates it and hands back how many fixed-interval ticks are due,
//! so the animation runs at ~50 ticks per second no matter how fast the
//! host repaints. It never blocks; the host's next-frame request is the
//! only "wait".

use std::time::Duration;

use crate::settings;

#[derive(Debug, Clone)]
pub struct FrameDriver {
    running: bool,
    accumulated: Duration,
    interval: Duration,
    max_ticks: usize,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_interval(settings::frame::DELAY)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            running: false,
            accumulated: Duration::ZERO,
            interval,
            max_ticks: settings::frame::MAX_TICKS_PER_FRAME,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start driving ticks.
    ///
    /// Returns `true` if the driver was stopped and is now running; the
    /// caller should request the first animation frame. The first frame
    /// after a start always yields a tick.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.accumulated = self.interval;
        true
    }

    /// Stop driving ticks. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Account for `elapsed` host time and return the number of ticks due.
    ///
    /// Always zero while stopped. Leftover time carries into the next
    /// frame; anything beyond the per-frame cap is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let mut ticks = 0;
        while self.accumulated >= self.interval && ticks < self.max_ticks {
            self.accumulated -= self.interval;
            ticks += 1;
        }
        if ticks == self.max_ticks {
            self.accumulated = self.accumulated.min(self.interval);
        }
        ticks
    }

    /// Run `tick` for every due tick, stopping as soon as it reports done.
    ///
    /// Returns the value `tick` produced when it finished, if it did.
    pub fn drive<T>(&mut self, elapsed: Duration, mut tick: impl FnMut() -> Option<T>) -> Option<T> {
        for _ in 0..self.advance(elapsed) {
            if let Some(done) = tick() {
                self.stop();
                return Some(done);
            }
        }
        None
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
