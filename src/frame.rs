use std::time::{Duration, Instant};

use crate::traits::FrameSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the scene started
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Wall-clock frame stream, unbounded unless given a limit
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
    last_delta: f32,
    frame_interval: Option<Duration>,
    limit: Option<u64>,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
            last_delta: 0.0,
            frame_interval: None,
            limit: None,
        }
    }

    /// Sleep between frames so they arrive at most `fps` times per second
    pub fn paced(fps: f32) -> Self {
        let mut frames = Self::new();
        if fps.is_finite() && fps > 0.0 {
            frames.frame_interval = Some(Duration::from_secs_f32(1.0 / fps));
        }
        frames
    }

    /// Stop after `count` frames
    pub fn with_limit(mut self, count: u64) -> Self {
        self.limit = Some(count);
        self
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn time(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.limit.is_some_and(|limit| self.frame_number >= limit) {
            return None;
        }
        if let Some(interval) = self.frame_interval {
            // First frame is never delayed
            if self.frame_number > 0 {
                let since_last = self.last_frame_time.elapsed();
                if since_last < interval {
                    std::thread::sleep(interval - since_last);
                }
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;
        self.last_delta = delta;

        Some(info)
    }
}

impl FrameSource for FrameIterator {
    fn delta_time(&self) -> f32 {
        self.last_delta
    }

    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

/// Deterministic frames at `time = n / fps`, no sleeping
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    step: f32,
    next: u64,
    count: u64,
}

impl FixedStepFrames {
    /// `count` frames spaced `1 / fps` seconds apart; non-positive fps
    /// falls back to 60
    pub fn new(fps: f32, count: u64) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { 60.0 };
        Self {
            step: 1.0 / fps,
            next: 0,
            count,
        }
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.next >= self.count {
            return None;
        }
        let number = self.next;
        let delta = if number == 0 { 0.0 } else { self.step };
        self.next += 1;
        Some(FrameInfo::new(number, number as f32 * self.step, delta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl FrameSource for FixedStepFrames {
    fn delta_time(&self) -> f32 {
        if self.next <= 1 {
            0.0
        } else {
            self.step
        }
    }

    fn frame_count(&self) -> u64 {
        self.next
    }
}
